//! Ride reconstruction: pairing START_RIDE and END_RIDE events.
//!
//! Pairing is positional: the i-th start of a sequence is matched with the
//! i-th end of the same sequence, and pairs that do not form a valid ride are
//! dropped. This relies on the log never interleaving two rides of one
//! vehicle; on irregular input it under-counts rides rather than searching
//! for a better match.

use crate::event::Event;
use crate::pricing::{ride_cost, PricingConfig};
use crate::spatial::distance;

const SECONDS_PER_MINUTE: u64 = 60;

/// A matched start/end pair. Borrows both events from the parsed log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ride<'a> {
    start: &'a Event,
    end: &'a Event,
}

impl<'a> Ride<'a> {
    /// Build a ride if `start` and `end` form one: the right event kinds, the
    /// same vehicle and user, and an end no earlier than the start.
    pub fn new(start: &'a Event, end: &'a Event) -> Option<Self> {
        let valid = start.is_ride_start()
            && end.is_ride_end()
            && start.vehicle_id == end.vehicle_id
            && start.user_id == end.user_id
            && start.timestamp <= end.timestamp;
        valid.then_some(Self { start, end })
    }

    pub fn start(&self) -> &'a Event {
        self.start
    }

    pub fn end(&self) -> &'a Event {
        self.end
    }

    pub fn vehicle_id(&self) -> &'a str {
        &self.start.vehicle_id
    }

    pub fn user_id(&self) -> Option<&'a str> {
        self.start.user_id.as_deref()
    }

    /// Straight-line distance from pickup to drop-off, rounded to two decimals.
    pub fn distance(&self) -> f64 {
        distance(self.start.location, self.end.location)
    }

    pub fn duration_seconds(&self) -> u64 {
        self.start.time_delta(self.end)
    }

    /// Duration in started minutes: a partial minute counts as a whole one.
    pub fn duration_minutes(&self) -> u64 {
        self.duration_seconds().div_ceil(SECONDS_PER_MINUTE)
    }

    pub fn cost(&self, pricing: &PricingConfig) -> f64 {
        ride_cost(self.duration_minutes(), pricing)
    }

    /// Idle seconds between the end of this ride and the start of `next`.
    pub fn wait_until(&self, next: &Ride<'_>) -> u64 {
        self.end.time_delta(next.start)
    }
}

/// Reconstruct the rides of an ordered event sequence by positional pairing.
pub fn reconstruct_rides<'a, I>(events: I) -> Vec<Ride<'a>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut starts = Vec::new();
    let mut ends = Vec::new();
    for event in events {
        if event.is_ride_start() {
            starts.push(event);
        } else if event.is_ride_end() {
            ends.push(event);
        }
    }

    starts
        .into_iter()
        .zip(ends)
        .filter_map(|(start, end)| Ride::new(start, end))
        .collect()
}

/// Wait times between each ride and the one right after it.
pub fn consecutive_waits(rides: &[Ride<'_>]) -> Vec<u64> {
    rides
        .windows(2)
        .map(|pair| pair[0].wait_until(&pair[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{drop_event, end_event, start_event};

    #[test]
    fn single_minute_ride_is_free() {
        let events = vec![
            start_event(0, "A", (0.0, 0.0), "u1"),
            end_event(60, "A", (0.0, 0.0), "u1"),
        ];
        let rides = reconstruct_rides(&events);
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].duration_seconds(), 60);
        assert_eq!(rides[0].duration_minutes(), 1);
        assert_eq!(rides[0].cost(&PricingConfig::default()), 0.0);
    }

    #[test]
    fn partial_minutes_round_up_for_billing() {
        let pricing = PricingConfig::default();
        let cases = [(52, 1, 0.0), (61, 2, 1.3), (98, 2, 1.3), (153, 3, 1.45)];
        for (secs, minutes, cost) in cases {
            let events = vec![
                start_event(1_000, "A", (0.0, 0.0), "u1"),
                end_event(1_000 + secs, "A", (1.0, 1.0), "u1"),
            ];
            let rides = reconstruct_rides(&events);
            assert_eq!(rides[0].duration_minutes(), minutes, "{secs}s");
            assert_eq!(rides[0].cost(&pricing), cost, "{secs}s");
        }
    }

    #[test]
    fn invalid_pairs_are_not_constructed() {
        let start = start_event(10, "A", (0.0, 0.0), "u1");
        let other_vehicle = end_event(20, "B", (0.0, 0.0), "u1");
        let other_user = end_event(20, "A", (0.0, 0.0), "u2");
        let earlier = end_event(5, "A", (0.0, 0.0), "u1");
        let drop = drop_event(20, "A", (0.0, 0.0));
        assert!(Ride::new(&start, &other_vehicle).is_none());
        assert!(Ride::new(&start, &other_user).is_none());
        assert!(Ride::new(&start, &earlier).is_none());
        assert!(Ride::new(&start, &drop).is_none());
        assert!(Ride::new(&other_user, &start).is_none());
    }

    #[test]
    fn pairing_is_positional_and_truncates() {
        let events = vec![
            drop_event(0, "A", (0.0, 0.0)),
            start_event(10, "A", (0.0, 0.0), "u1"),
            end_event(20, "A", (3.0, 4.0), "u1"),
            start_event(30, "A", (3.0, 4.0), "u2"),
        ];
        let rides = reconstruct_rides(&events);
        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].distance(), 5.0);
        assert_eq!(rides[0].user_id(), Some("u1"));
    }

    #[test]
    fn interleaved_rides_lose_mismatched_pairs() {
        // Two vehicles interleaved: positional pairing matches A's start with
        // B's end, which is invalid and dropped.
        let events = vec![
            start_event(0, "A", (0.0, 0.0), "u1"),
            start_event(5, "B", (0.0, 0.0), "u2"),
            end_event(10, "B", (1.0, 0.0), "u2"),
            end_event(15, "A", (2.0, 0.0), "u1"),
        ];
        assert!(reconstruct_rides(&events).is_empty());
    }

    #[test]
    fn waits_between_consecutive_rides() {
        let events = vec![
            start_event(0, "A", (0.0, 0.0), "u1"),
            end_event(100, "A", (0.0, 0.0), "u1"),
            start_event(150, "A", (0.0, 0.0), "u1"),
            end_event(200, "A", (0.0, 0.0), "u1"),
            start_event(260, "A", (0.0, 0.0), "u1"),
            end_event(300, "A", (0.0, 0.0), "u1"),
        ];
        let rides = reconstruct_rides(&events);
        assert_eq!(consecutive_waits(&rides), vec![50, 60]);
        assert!(consecutive_waits(&rides[..1]).is_empty());
    }
}
