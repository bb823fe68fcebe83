//! Report extraction from a parsed event log.
//!
//! Each answer is computed independently from the raw events; see
//! [`fleet_core::aggregate`] for the grouping and tie-break rules.

use std::fmt;

use fleet_core::aggregate::{
    average_speed_mph, displacement, drop_count, group_by_user, group_by_vehicle,
    max_displacement, max_ride_distance, max_user_cost, max_wait_time, Extreme, RideTotals,
};
use fleet_core::event::Event;
use fleet_core::pricing::PricingConfig;
use fleet_core::ride::{consecutive_waits, reconstruct_rides};
use fleet_core::spatial::round2;
use log::info;
use serde::Serialize;

/// The six answers for one event log, with owned keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FleetReport {
    /// Number of parsed events.
    pub total_events: usize,
    /// Rides reconstructed over the whole log without grouping.
    pub total_rides: usize,
    pub drop_count: usize,
    /// Vehicle farthest from where it was dropped.
    pub max_displacement: Option<Extreme<String, f64>>,
    /// Vehicle with the largest summed ride distance.
    pub max_ride_distance: Option<Extreme<String, f64>>,
    /// User with the largest summed ride cost; `None` key for rides without a user.
    pub max_user_cost: Option<Extreme<Option<String>, f64>>,
    /// Vehicle with the longest idle gap between consecutive rides, in seconds.
    pub max_wait_time: Option<Extreme<String, u64>>,
    pub average_speed_mph: f64,
    pub pricing: PricingConfig,
}

/// Build the report for `events`.
pub fn extract_report(events: &[Event], pricing: &PricingConfig) -> FleetReport {
    let report = FleetReport {
        total_events: events.len(),
        total_rides: RideTotals::over(events).rides,
        drop_count: drop_count(events),
        max_displacement: max_displacement(events).map(owned_vehicle),
        max_ride_distance: max_ride_distance(events).map(owned_vehicle),
        max_user_cost: max_user_cost(events, pricing).map(|best| Extreme {
            key: best.key.user_id().map(str::to_string),
            value: best.value,
        }),
        max_wait_time: max_wait_time(events).map(owned_vehicle),
        average_speed_mph: average_speed_mph(events),
        pricing: *pricing,
    };
    info!(
        "report built from {} events ({} rides, {} drops)",
        report.total_events, report.total_rides, report.drop_count
    );
    report
}

fn owned_vehicle<V>(best: Extreme<&str, V>) -> Extreme<String, V> {
    Extreme {
        key: best.key.to_string(),
        value: best.value,
    }
}

impl fmt::Display for FleetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Drop count: {}", self.drop_count)?;
        if let Some(best) = &self.max_displacement {
            writeln!(
                f,
                "Max displacement from drop: vehicle {} moved {:.2}",
                best.key, best.value
            )?;
        }
        if let Some(best) = &self.max_ride_distance {
            writeln!(
                f,
                "Max total ride distance: vehicle {} travelled {:.2}",
                best.key, best.value
            )?;
        }
        if let Some(best) = &self.max_user_cost {
            let user = best.key.as_deref().unwrap_or("<no user>");
            writeln!(f, "Max total cost: user {} spent ${:.2}", user, best.value)?;
        }
        if let Some(best) = &self.max_wait_time {
            writeln!(
                f,
                "Max wait time between rides: vehicle {} waited {} s",
                best.key, best.value
            )?;
        }
        writeln!(f, "Average speed: {:.2} mph", self.average_speed_mph)
    }
}

/// One row of the per-vehicle breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSummary {
    pub vehicle_id: String,
    pub events: usize,
    pub rides: usize,
    pub ride_distance: f64,
    pub ride_seconds: u64,
    pub displacement: f64,
    pub max_wait_secs: u64,
}

/// One row of the per-user breakdown. Events without a user share the row
/// where `user_id` is `None` and `anonymous` is set, so it stays apart from a
/// user whose id is the empty string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub user_id: Option<String>,
    pub anonymous: bool,
    pub rides: usize,
    pub ride_seconds: u64,
    pub total_cost: f64,
}

/// Per-vehicle breakdown, ordered by vehicle id.
pub fn vehicle_summaries(events: &[Event]) -> Vec<VehicleSummary> {
    group_by_vehicle(events)
        .into_iter()
        .map(|(vehicle, list)| {
            let rides = reconstruct_rides(list.iter().copied());
            let totals = RideTotals::of(&rides);
            VehicleSummary {
                vehicle_id: vehicle.to_string(),
                events: list.len(),
                rides: totals.rides,
                ride_distance: totals.distance,
                ride_seconds: totals.duration_seconds,
                displacement: displacement(&list),
                max_wait_secs: consecutive_waits(&rides).into_iter().max().unwrap_or(0),
            }
        })
        .collect()
}

/// Per-user breakdown, anonymous group first, then by user id.
pub fn user_summaries(events: &[Event], pricing: &PricingConfig) -> Vec<UserSummary> {
    group_by_user(events)
        .into_iter()
        .map(|(user, list)| {
            let rides = reconstruct_rides(list);
            let total_cost = rides.iter().fold(0.0, |acc, ride| acc + ride.cost(pricing));
            UserSummary {
                user_id: user.user_id().map(str::to_string),
                anonymous: user.user_id().is_none(),
                rides: rides.len(),
                ride_seconds: rides.iter().map(|ride| ride.duration_seconds()).sum(),
                total_cost: round2(total_cost),
            }
        })
        .collect()
}
