//! Ride pricing: a fixed unlock fee plus a per-minute rate on billable minutes.

use serde::{Deserialize, Serialize};

use crate::spatial::round2;

/// Unlock fee in currency units.
pub const INITIAL_COST: f64 = 1.0;

/// Rate per started minute.
pub const PER_MINUTE_RATE: f64 = 0.15;

/// Rides this short (in whole minutes, rounded up) are free.
pub const MINIMUM_BILLABLE_MINUTES: u64 = 1;

/// Constants of the ride pricing formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub initial_cost: f64,
    pub per_minute: f64,
    pub minimum_billable_minutes: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            initial_cost: INITIAL_COST,
            per_minute: PER_MINUTE_RATE,
            minimum_billable_minutes: MINIMUM_BILLABLE_MINUTES,
        }
    }
}

impl PricingConfig {
    pub fn with_initial_cost(mut self, initial_cost: f64) -> Self {
        self.initial_cost = initial_cost;
        self
    }

    pub fn with_per_minute(mut self, per_minute: f64) -> Self {
        self.per_minute = per_minute;
        self
    }

    pub fn with_minimum_billable_minutes(mut self, minutes: u64) -> Self {
        self.minimum_billable_minutes = minutes;
        self
    }
}

/// Cost of a ride lasting `duration_minutes` (already rounded up).
///
/// Formula: `0` when `duration_minutes <= minimum_billable_minutes`, else
/// `round2(initial_cost + duration_minutes * per_minute)`.
pub fn ride_cost(duration_minutes: u64, pricing: &PricingConfig) -> f64 {
    if duration_minutes <= pricing.minimum_billable_minutes {
        return 0.0;
    }
    round2(pricing.initial_cost + duration_minutes as f64 * pricing.per_minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_minute_or_less_is_free() {
        let pricing = PricingConfig::default();
        assert_eq!(ride_cost(0, &pricing), 0.0);
        assert_eq!(ride_cost(1, &pricing), 0.0);
    }

    #[test]
    fn billed_rides_include_unlock_fee() {
        let pricing = PricingConfig::default();
        assert_eq!(ride_cost(2, &pricing), 1.3);
        assert_eq!(ride_cost(3, &pricing), 1.45);
        assert_eq!(ride_cost(10, &pricing), 2.5);
    }

    #[test]
    fn builders_override_constants() {
        let pricing = PricingConfig::default()
            .with_initial_cost(2.0)
            .with_per_minute(0.5)
            .with_minimum_billable_minutes(0);
        assert_eq!(ride_cost(1, &pricing), 2.5);
    }
}
