//! Write a synthetic event log in the input format of `fleet_report`.
//!
//! Run with: cargo run -p fleet_core --example generate_log -- OUTPUT [VEHICLES] [RIDES] [SEED]

use std::fs::File;
use std::process::exit;

use fleet_core::parser::write_events;
use fleet_core::synthetic::{generate_events, SyntheticFleetParams};

fn arg_or<T: std::str::FromStr>(args: &[String], idx: usize, default: T) -> T {
    match args.get(idx) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            eprintln!("invalid argument {idx}: {raw}");
            exit(2);
        }),
        None => default,
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(output) = args.first() else {
        eprintln!("usage: generate_log OUTPUT [VEHICLES] [RIDES] [SEED]");
        exit(2);
    };

    let params = SyntheticFleetParams::default()
        .with_vehicles(arg_or(&args, 1, 100))
        .with_rides_per_vehicle(arg_or(&args, 2, 10))
        .with_seed(arg_or(&args, 3, 42));
    let events = generate_events(&params);

    let written = File::create(output)
        .map_err(Into::into)
        .and_then(|file| write_events(&events, file));
    if let Err(err) = written {
        eprintln!("failed to write {output}: {err}");
        exit(1);
    }
    println!("Wrote {} events to {}", events.len(), output);
}
