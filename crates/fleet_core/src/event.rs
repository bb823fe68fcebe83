//! Event model: one row of the vehicle event log.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// What happened to a vehicle at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Vehicle placed into the fleet. Always the first event of a vehicle.
    #[serde(rename = "DROP")]
    Drop,
    #[serde(rename = "START_RIDE")]
    StartRide,
    #[serde(rename = "END_RIDE")]
    EndRide,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Drop => "DROP",
            EventKind::StartRide => "START_RIDE",
            EventKind::EndRide => "END_RIDE",
        }
    }
}

impl FromStr for EventKind {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DROP" => Ok(EventKind::Drop),
            "START_RIDE" => Ok(EventKind::StartRide),
            "END_RIDE" => Ok(EventKind::EndRide),
            other => Err(RecordError::UnknownEventKind(other.to_string())),
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planar location in the units of the input log (meters by convention).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One parsed log record. Timestamps are whole seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub timestamp: i64,
    pub vehicle_id: String,
    pub kind: EventKind,
    pub location: Point,
    /// `None` when the log carries the `NULL` literal (every DROP does).
    pub user_id: Option<String>,
}

impl Event {
    pub fn is_drop(&self) -> bool {
        self.kind == EventKind::Drop
    }

    pub fn is_ride_start(&self) -> bool {
        self.kind == EventKind::StartRide
    }

    pub fn is_ride_end(&self) -> bool {
        self.kind == EventKind::EndRide
    }

    /// Seconds between the two events, regardless of argument order.
    pub fn time_delta(&self, other: &Event) -> u64 {
        self.timestamp.abs_diff(other.timestamp)
    }
}
