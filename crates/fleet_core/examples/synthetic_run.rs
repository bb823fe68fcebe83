//! Generate a 2 000 vehicle log and print the fleet answers.
//!
//! Run with: cargo run -p fleet_core --example synthetic_run --release

use std::time::Instant;

use fleet_core::aggregate::{
    drop_count, max_displacement, max_ride_distance, max_user_cost, max_wait_time, RideTotals,
};
use fleet_core::pricing::PricingConfig;
use fleet_core::synthetic::{generate_events, SyntheticFleetParams};

fn main() {
    const NUM_VEHICLES: usize = 2_000;
    const RIDES_PER_VEHICLE: usize = 25;
    const NUM_USERS: usize = 800;

    let params = SyntheticFleetParams::default()
        .with_vehicles(NUM_VEHICLES)
        .with_rides_per_vehicle(RIDES_PER_VEHICLE)
        .with_users(NUM_USERS)
        .with_seed(123);
    let events = generate_events(&params);
    let pricing = PricingConfig::default();

    let started = Instant::now();
    let totals = RideTotals::over(&events);

    println!(
        "--- Synthetic fleet ({} vehicles, {} rides each, {} users, seed 123) ---",
        NUM_VEHICLES, RIDES_PER_VEHICLE, NUM_USERS
    );
    println!("Events: {}", events.len());
    println!("Drops: {}", drop_count(&events));
    if let Some(best) = max_displacement(&events) {
        println!("Max displacement: {} ({:.2} m)", best.key, best.value);
    }
    if let Some(best) = max_ride_distance(&events) {
        println!("Max ride distance: {} ({:.2} m)", best.key, best.value);
    }
    if let Some(best) = max_user_cost(&events, &pricing) {
        println!("Max user cost: {} (${:.2})", best.key, best.value);
    }
    if let Some(best) = max_wait_time(&events) {
        println!("Max wait: {} ({} s)", best.key, best.value);
    }
    println!(
        "Whole-log rides: {} of {} generated ({:.2} mph average)",
        totals.rides,
        NUM_VEHICLES * RIDES_PER_VEHICLE,
        totals.average_speed_mph()
    );
    println!("Aggregated in {:.1} ms", started.elapsed().as_secs_f64() * 1000.0);
}
