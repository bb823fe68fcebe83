//! Spatial and timing primitives shared by the ride metrics.
//!
//! Coordinates are planar; distances are Euclidean in input units and are
//! reported rounded to two decimals. [`distance_squared`] skips both the
//! square root and the rounding for callers that only compare magnitudes.

use crate::event::{Event, Point};

/// 1 m/s expressed in miles per hour.
pub const MPS_TO_MPH: f64 = 2.23694;

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn distance_squared(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points, rounded to two decimals.
pub fn distance(a: Point, b: Point) -> f64 {
    round2(distance_squared(a, b).sqrt())
}

/// Absolute difference of the event timestamps in seconds.
pub fn time_delta(a: &Event, b: &Event) -> u64 {
    a.time_delta(b)
}
