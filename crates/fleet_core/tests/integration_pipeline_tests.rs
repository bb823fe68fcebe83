mod support;

use fleet_core::aggregate::{
    average_speed_mph, cost_by_user, drop_count, max_displacement, max_ride_distance,
    max_user_cost, max_wait_time, ride_distance_by_vehicle, RideTotals, UserKey,
};
use fleet_core::event::{EventKind, Point};
use fleet_core::parser::{parse_event_str, parse_line};
use fleet_core::pricing::PricingConfig;
use fleet_core::ride::{consecutive_waits, reconstruct_rides};
use fleet_core::test_helpers::{drop_event, to_log_lines};

use support::fixtures::{sample_events, SAMPLE_LOG};

#[test]
fn parses_every_sample_line_in_file_order() {
    let events = sample_events();
    assert_eq!(events.len(), SAMPLE_LOG.lines().count());
    assert!(events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let first_ride = &events[3];
    assert_eq!(first_ride.kind, EventKind::StartRide);
    assert_eq!(first_ride.vehicle_id, "QW3R");
    assert_eq!(first_ride.location, Point::new(10.0, 10.0));
    assert_eq!(first_ride.user_id.as_deref(), Some("7"));
}

#[test]
fn malformed_lines_do_not_abort_parsing() {
    let log = format!("0,A,DROP,1.0,2.0\n5,A,DROP,oops,2.0,NULL\n{SAMPLE_LOG}\n\n");
    let events = parse_event_str(&log);
    assert_eq!(events.len(), SAMPLE_LOG.lines().count());
}

#[test]
fn parses_user_and_null_user_lines() {
    let ride = parse_line("120,JK5T,START_RIDE,1.0,2.0,42").expect("valid");
    assert_eq!(ride.timestamp, 120);
    assert_eq!(ride.user_id.as_deref(), Some("42"));
    let dropped = parse_line("120,JK5T,DROP,1.0,2.0,NULL").expect("valid");
    assert_eq!(dropped.user_id, None);
}

#[test]
fn drop_count_matches_drop_events() {
    assert_eq!(drop_count(&sample_events()), 3);
}

#[test]
fn max_displacement_follows_the_drop() {
    let events = sample_events();
    let best = max_displacement(&events).expect("vehicles present");
    // JK5T: (0,0) -> (6,8) = 10; QW3R: (10,10) -> (20,30) = 22.36; ZZ9P: 0
    assert_eq!(best.key, "QW3R");
    assert_eq!(best.value, 22.36);
}

#[test]
fn ride_distance_is_summed_per_vehicle() {
    let events = sample_events();
    let travelled = ride_distance_by_vehicle(&events);
    assert_eq!(travelled["JK5T"], 10.0);
    assert_eq!(travelled["QW3R"], 30.0);
    assert_eq!(travelled["ZZ9P"], 0.0);

    let best = max_ride_distance(&events).expect("vehicles present");
    assert_eq!((best.key, best.value), ("QW3R", 30.0));
}

#[test]
fn user_costs_include_the_anonymous_group() {
    let events = sample_events();
    let pricing = PricingConfig::default();
    let costs = cost_by_user(&events, &pricing);

    // user 7: 60s (free) + 40s (free); user 42: 98s -> 1.30;
    // user 8: 50s (free) + 153s -> 1.45
    assert_eq!(costs[&UserKey::User("7")], 0.0);
    assert_eq!(costs[&UserKey::User("42")], 1.3);
    assert_eq!(costs[&UserKey::User("8")], 1.45);
    assert_eq!(costs[&UserKey::Anonymous], 0.0);

    let best = max_user_cost(&events, &pricing).expect("users present");
    assert_eq!(best.key, UserKey::User("8"));
    assert_eq!(best.value, 1.45);
}

#[test]
fn wait_times_use_consecutive_rides_only() {
    let events = sample_events();
    let qw3r: Vec<_> = events.iter().filter(|e| e.vehicle_id == "QW3R").collect();
    let rides = reconstruct_rides(qw3r);
    assert_eq!(rides.len(), 3);
    assert_eq!(consecutive_waits(&rides), vec![50, 60]);

    let best = max_wait_time(&events).expect("vehicles present");
    assert_eq!(best.value, 60);
    assert!(best.key == "QW3R" || best.key == "JK5T");
}

#[test]
fn average_speed_pairs_across_the_whole_log() {
    let events = sample_events();
    let totals = RideTotals::over(&events);
    // Positional pairing over the merged log keeps only the pairs that line
    // up: QW3R 40->100, QW3R 260->300 and JK5T 273->426. The two pairs that
    // cross vehicles are dropped.
    assert_eq!(totals.rides, 3);
    assert_eq!(totals.distance, 25.0);
    assert_eq!(totals.duration_seconds, 253);
    // 25 / 253 m/s * 2.23694
    assert_eq!(average_speed_mph(&events), 0.22);
}

#[test]
fn drop_only_log_is_degenerate_but_defined() {
    let events = vec![
        drop_event(0, "A", (0.0, 0.0)),
        drop_event(3, "B", (1.0, 1.0)),
        drop_event(9, "C", (2.0, 2.0)),
    ];
    let parsed = parse_event_str(&to_log_lines(&events));
    assert_eq!(parsed, events);

    assert_eq!(drop_count(&parsed), 3);
    assert_eq!(RideTotals::over(&parsed).rides, 0);
    assert_eq!(RideTotals::over(&parsed).distance, 0.0);
    assert_eq!(average_speed_mph(&parsed), 0.0);
    let travelled = max_ride_distance(&parsed).expect("vehicles present");
    assert_eq!(travelled.value, 0.0);
    let waited = max_wait_time(&parsed).expect("vehicles present");
    assert_eq!(waited.value, 0);
}
