//! Core of the fleet event log analysis: event model, record parsing, ride
//! reconstruction, metric calculators and per-vehicle / per-user aggregators.

pub mod aggregate;
pub mod error;
pub mod event;
pub mod parser;
pub mod pricing;
pub mod ride;
pub mod spatial;
pub mod synthetic;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;
