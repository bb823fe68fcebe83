use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use fleet_core::aggregate::rides_by_vehicle;
use fleet_core::event::Event;
use fleet_core::parser::load_event_log;
use fleet_core::pricing::PricingConfig;
use fleet_core::ride::Ride;
use fleet_report::{
    export_rides_to_parquet, export_to_json, export_user_summaries_to_csv,
    export_vehicle_summaries_to_csv, extract_report, user_summaries, vehicle_summaries,
    FleetReport,
};
use log::info;

#[derive(Parser)]
#[command(
    name = "fleet_report",
    about = "Summarise a vehicle-sharing event log",
    long_about = "Reads a headerless log of `timestamp,vehicle_id,event_type,x,y,user_id`\n\
                  records and prints the drop count, the largest displacement, ride\n\
                  distance, user cost and wait time, and the fleet-wide average speed."
)]
struct Cli {
    /// Event log to read. An unreadable file is treated as an empty log.
    #[arg(default_value = "events.csv")]
    input: PathBuf,
    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Also write the per-vehicle breakdown as CSV
    #[arg(long)]
    vehicles_csv: Option<PathBuf>,
    /// Also write the per-user breakdown as CSV
    #[arg(long)]
    users_csv: Option<PathBuf>,
    /// Also write every reconstructed ride as Parquet
    #[arg(long)]
    rides_parquet: Option<PathBuf>,
}

fn write_exports(
    cli: &Cli,
    events: &[Event],
    report: &FleetReport,
    pricing: &PricingConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &cli.json {
        export_to_json(report, path)?;
        info!("wrote report to {}", path.display());
    }
    if let Some(path) = &cli.vehicles_csv {
        export_vehicle_summaries_to_csv(&vehicle_summaries(events), path)?;
        info!("wrote vehicle breakdown to {}", path.display());
    }
    if let Some(path) = &cli.users_csv {
        export_user_summaries_to_csv(&user_summaries(events, pricing), path)?;
        info!("wrote user breakdown to {}", path.display());
    }
    if let Some(path) = &cli.rides_parquet {
        let rides: Vec<Ride<'_>> = rides_by_vehicle(events).into_values().flatten().collect();
        export_rides_to_parquet(&rides, pricing, path)?;
        info!("wrote {} rides to {}", rides.len(), path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let events = load_event_log(&cli.input);
    let pricing = PricingConfig::default();
    let report = extract_report(&events, &pricing);
    print!("{report}");

    if let Err(err) = write_exports(&cli, &events, &report, &pricing) {
        eprintln!("export failed: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
