//! Report export: JSON for the six answers, CSV for the breakdown tables and
//! Parquet for the reconstructed rides.

use std::path::Path;

use fleet_core::pricing::PricingConfig;
use fleet_core::ride::Ride;

use crate::metrics::{FleetReport, UserSummary, VehicleSummary};

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/parquet.rs"]
mod parquet;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    report: &FleetReport,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(report, file)
}

/// Export the per-vehicle breakdown to CSV, one row per vehicle.
///
/// # Errors
///
/// Returns an error if `summaries` is empty or if file creation or CSV writing fails.
pub fn export_vehicle_summaries_to_csv(
    summaries: &[VehicleSummary],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(summaries)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_rows_impl(summaries, file)
}

/// Export the per-user breakdown to CSV. Events without a user land in the row
/// whose `anonymous` column is `true`.
///
/// # Errors
///
/// Returns an error if `summaries` is empty or if file creation or CSV writing fails.
pub fn export_user_summaries_to_csv(
    summaries: &[UserSummary],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(summaries)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_rows_impl(summaries, file)
}

/// Export rides to Parquet, one row per ride with its distance, duration and cost.
///
/// # Errors
///
/// Returns an error if `rides` is empty or if file creation or Parquet writing fails.
pub fn export_rides_to_parquet(
    rides: &[Ride<'_>],
    pricing: &PricingConfig,
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(rides)?;
    let file = writer_utils::create_output_file(path)?;
    parquet::export_rides_to_parquet_impl(rides, pricing, file)
}
