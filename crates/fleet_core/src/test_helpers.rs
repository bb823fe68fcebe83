//! Test helpers for building event logs by hand.
//!
//! Coordinates are passed as `(x, y)` tuples to keep fixtures compact.

use crate::event::{Event, EventKind, Point};
use crate::parser::write_events;

fn event(
    timestamp: i64,
    vehicle_id: &str,
    kind: EventKind,
    (x, y): (f64, f64),
    user_id: Option<&str>,
) -> Event {
    Event {
        timestamp,
        vehicle_id: vehicle_id.to_string(),
        kind,
        location: Point::new(x, y),
        user_id: user_id.map(str::to_string),
    }
}

/// A DROP event (never carries a user).
pub fn drop_event(timestamp: i64, vehicle_id: &str, at: (f64, f64)) -> Event {
    event(timestamp, vehicle_id, EventKind::Drop, at, None)
}

pub fn start_event(timestamp: i64, vehicle_id: &str, at: (f64, f64), user_id: &str) -> Event {
    event(timestamp, vehicle_id, EventKind::StartRide, at, Some(user_id))
}

pub fn end_event(timestamp: i64, vehicle_id: &str, at: (f64, f64), user_id: &str) -> Event {
    event(timestamp, vehicle_id, EventKind::EndRide, at, Some(user_id))
}

/// Start and end events for one ride, in that order.
pub fn ride_events(
    vehicle_id: &str,
    user_id: &str,
    (started_at, ended_at): (i64, i64),
    from: (f64, f64),
    to: (f64, f64),
) -> [Event; 2] {
    [
        start_event(started_at, vehicle_id, from, user_id),
        end_event(ended_at, vehicle_id, to, user_id),
    ]
}

/// Render events back into log lines, e.g. for parser-driven tests.
pub fn to_log_lines(events: &[Event]) -> String {
    let mut out = Vec::new();
    write_events(events, &mut out).expect("writing to memory cannot fail");
    String::from_utf8(out).expect("log lines are utf-8")
}
