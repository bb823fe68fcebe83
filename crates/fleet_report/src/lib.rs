//! Fleet report: the six summary answers over a vehicle-sharing event log,
//! plus per-vehicle / per-user breakdowns and file exports.
//!
//! # Quick Start
//!
//! ```no_run
//! use fleet_core::parser::load_event_log;
//! use fleet_core::pricing::PricingConfig;
//! use fleet_report::{export_to_json, extract_report};
//!
//! let events = load_event_log("events.csv");
//! let report = extract_report(&events, &PricingConfig::default());
//! print!("{report}");
//! export_to_json(&report, "report.json").unwrap();
//! ```
//!
//! # Architecture
//!
//! - [`metrics`]: report extraction and breakdown tables
//! - [`export`]: JSON, CSV and Parquet writers

pub mod export;
pub mod metrics;

pub use export::{
    export_rides_to_parquet, export_to_json, export_user_summaries_to_csv,
    export_vehicle_summaries_to_csv,
};
pub use metrics::{extract_report, user_summaries, vehicle_summaries, FleetReport};
