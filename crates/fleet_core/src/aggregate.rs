//! Aggregators: group the event log by vehicle or user, reduce each group to a
//! scalar, then scan for the largest.
//!
//! Every aggregation reconstructs its own rides from the events it is given;
//! nothing is cached between calls. Groups live in ordered maps, so when two
//! keys tie for the maximum the smaller key wins.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::event::Event;
use crate::pricing::PricingConfig;
use crate::ride::{consecutive_waits, reconstruct_rides, Ride};
use crate::spatial::{distance, round2, MPS_TO_MPH};

/// Grouping key for users. Events without a user (every DROP) fall into
/// [`UserKey::Anonymous`], which never collides with a real id, not even "".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserKey<'a> {
    Anonymous,
    User(&'a str),
}

impl<'a> UserKey<'a> {
    pub fn of(event: &'a Event) -> Self {
        match event.user_id.as_deref() {
            Some(user) => UserKey::User(user),
            None => UserKey::Anonymous,
        }
    }

    pub fn user_id(&self) -> Option<&'a str> {
        match *self {
            UserKey::User(user) => Some(user),
            UserKey::Anonymous => None,
        }
    }
}

impl fmt::Display for UserKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKey::User(user) => f.write_str(user),
            UserKey::Anonymous => f.write_str("<no user>"),
        }
    }
}

/// The winning key of a "find the maximum" aggregation and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extreme<K, V> {
    pub key: K,
    pub value: V,
}

/// Linear scan for the largest value. The first of several tied keys wins.
pub fn find_max<K, V, I>(items: I) -> Option<Extreme<K, V>>
where
    V: PartialOrd,
    I: IntoIterator<Item = (K, V)>,
{
    items
        .into_iter()
        .fold(None, |best: Option<Extreme<K, V>>, (key, value)| match best {
            Some(current) if value <= current.value => Some(current),
            _ => Some(Extreme { key, value }),
        })
}

pub fn group_by_vehicle(events: &[Event]) -> BTreeMap<&str, Vec<&Event>> {
    let mut groups: BTreeMap<&str, Vec<&Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.vehicle_id.as_str()).or_default().push(event);
    }
    groups
}

pub fn group_by_user(events: &[Event]) -> BTreeMap<UserKey<'_>, Vec<&Event>> {
    let mut groups: BTreeMap<UserKey<'_>, Vec<&Event>> = BTreeMap::new();
    for event in events {
        groups.entry(UserKey::of(event)).or_default().push(event);
    }
    groups
}

pub fn drop_count(events: &[Event]) -> usize {
    events.iter().filter(|event| event.is_drop()).count()
}

/// Distance from the first event of a vehicle (its drop) to its last one.
pub fn displacement(vehicle_events: &[&Event]) -> f64 {
    match (vehicle_events.first(), vehicle_events.last()) {
        (Some(first), Some(last)) => distance(first.location, last.location),
        _ => 0.0,
    }
}

pub fn displacement_by_vehicle(events: &[Event]) -> BTreeMap<&str, f64> {
    group_by_vehicle(events)
        .into_iter()
        .map(|(vehicle, list)| (vehicle, displacement(&list)))
        .collect()
}

pub fn rides_by_vehicle(events: &[Event]) -> BTreeMap<&str, Vec<Ride<'_>>> {
    group_by_vehicle(events)
        .into_iter()
        .map(|(vehicle, list)| (vehicle, reconstruct_rides(list)))
        .collect()
}

pub fn ride_distance_by_vehicle(events: &[Event]) -> BTreeMap<&str, f64> {
    rides_by_vehicle(events)
        .into_iter()
        .map(|(vehicle, rides)| (vehicle, total_distance(&rides)))
        .collect()
}

pub fn cost_by_user<'a>(
    events: &'a [Event],
    pricing: &PricingConfig,
) -> BTreeMap<UserKey<'a>, f64> {
    group_by_user(events)
        .into_iter()
        .map(|(user, list)| {
            let rides = reconstruct_rides(list);
            let cost = rides.iter().fold(0.0, |acc, ride| acc + ride.cost(pricing));
            (user, round2(cost))
        })
        .collect()
}

/// Longest idle gap between consecutive rides of each vehicle; 0 with fewer than two rides.
pub fn max_wait_by_vehicle(events: &[Event]) -> BTreeMap<&str, u64> {
    rides_by_vehicle(events)
        .into_iter()
        .map(|(vehicle, rides)| {
            let longest = consecutive_waits(&rides).into_iter().max().unwrap_or(0);
            (vehicle, longest)
        })
        .collect()
}

pub fn max_displacement(events: &[Event]) -> Option<Extreme<&str, f64>> {
    find_max(displacement_by_vehicle(events))
}

pub fn max_ride_distance(events: &[Event]) -> Option<Extreme<&str, f64>> {
    find_max(ride_distance_by_vehicle(events))
}

pub fn max_user_cost<'a>(
    events: &'a [Event],
    pricing: &PricingConfig,
) -> Option<Extreme<UserKey<'a>, f64>> {
    find_max(cost_by_user(events, pricing))
}

pub fn max_wait_time(events: &[Event]) -> Option<Extreme<&str, u64>> {
    find_max(max_wait_by_vehicle(events))
}

fn total_distance(rides: &[Ride<'_>]) -> f64 {
    round2(rides.iter().fold(0.0, |acc, ride| acc + ride.distance()))
}

/// Ride count, distance and duration over a set of rides.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RideTotals {
    pub rides: usize,
    pub distance: f64,
    pub duration_seconds: u64,
}

impl RideTotals {
    pub fn of(rides: &[Ride<'_>]) -> Self {
        Self {
            rides: rides.len(),
            distance: total_distance(rides),
            duration_seconds: rides.iter().map(Ride::duration_seconds).sum(),
        }
    }

    /// Rides reconstructed over the whole log at once, without grouping.
    pub fn over(events: &[Event]) -> Self {
        Self::of(&reconstruct_rides(events))
    }

    /// Distance per second converted to mph. Zero when no time was ridden.
    pub fn average_speed_mph(&self) -> f64 {
        if self.duration_seconds == 0 {
            return 0.0;
        }
        round2(self.distance / self.duration_seconds as f64 * MPS_TO_MPH)
    }
}

/// Fleet-wide average ride speed in mph; 0.0 when the log holds no ridden time.
pub fn average_speed_mph(events: &[Event]) -> f64 {
    RideTotals::over(events).average_speed_mph()
}
