use std::process::{exit, Command};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the fleet event log workspace",
    long_about = "A unified CLI for running the fleet report, generating synthetic logs,\n\
                  benchmarks, load tests and CI checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the report for an event log
    Run {
        /// Event log to summarise
        #[arg(default_value = "data/sample_events.csv")]
        input: String,
    },
    /// Generate a synthetic log and print its answers (2 000 vehicles)
    RunSynthetic,
    /// Write a synthetic event log to disk
    GenerateLog {
        /// Number of vehicles in the fleet
        #[arg(long, default_value_t = 100)]
        vehicles: usize,
        /// Rides served by each vehicle
        #[arg(long, default_value_t = 10)]
        rides: usize,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Output file path
        #[arg(long, default_value = "synthetic_events.csv")]
        output: String,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, examples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run load tests (ignored tests in fleet_core)
    LoadTest,
}

#[derive(Clone, Copy, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run the report on the sample log and the synthetic example
    Examples,
    /// Run benchmarks
    Bench,
    /// Run check + examples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

/// Run cargo with `args`, exiting with its status code when it fails.
fn run_cargo(label: &str, args: &[&str]) {
    eprintln!("\n=== {label} ===\n+ cargo {}", args.join(" "));
    let status = match Command::new("cargo").args(args).status() {
        Ok(status) => status,
        Err(err) => {
            eprintln!("failed to execute cargo: {err}");
            exit(1);
        }
    };
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_example(name: &str, extra: &[&str]) {
    let mut args = vec!["run", "-p", "fleet_core", "--release", "--example", name];
    if !extra.is_empty() {
        args.push("--");
        args.extend_from_slice(extra);
    }
    run_cargo(&format!("Example {name}"), &args);
}

fn run_report(input: &str) {
    run_cargo(
        &format!("Report for {input}"),
        &["run", "-p", "fleet_report", "--release", "--", input],
    );
}

fn bench() {
    run_cargo(
        "Benchmarks",
        &["bench", "--package", "fleet_core", "--bench", "performance"],
    );
}

// ── CI jobs ────────────────────────────────────────────────────────

const CHECK_STEPS: &[(&str, &[&str])] = &[
    ("Formatting", &["fmt", "--all", "--", "--check"]),
    (
        "Clippy",
        &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
    ),
    ("Tests", &["test", "--workspace"]),
];

fn ci(job: CiJob) {
    if matches!(job, CiJob::Check | CiJob::All) {
        for (label, args) in CHECK_STEPS {
            run_cargo(label, args);
        }
    }
    if matches!(job, CiJob::Examples | CiJob::All) {
        run_report("data/sample_events.csv");
        run_example("synthetic_run", &[]);
    }
    if matches!(job, CiJob::Bench | CiJob::All) {
        bench();
    }
    eprintln!("\nCI job passed.");
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    match Cli::parse().command {
        Commands::Run { input } => run_report(&input),
        Commands::RunSynthetic => run_example("synthetic_run", &[]),
        Commands::GenerateLog {
            vehicles,
            rides,
            seed,
            output,
        } => {
            let counts = [vehicles.to_string(), rides.to_string(), seed.to_string()];
            let mut args = vec![output.as_str()];
            args.extend(counts.iter().map(String::as_str));
            run_example("generate_log", &args);
        }
        Commands::Bench => bench(),
        Commands::Ci { job } => ci(job),
        Commands::LoadTest => run_cargo(
            "Load tests",
            &["test", "-p", "fleet_core", "--test", "load_tests", "--", "--ignored"],
        ),
    }
}
