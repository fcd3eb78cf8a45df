//! Racing Simulator CLI
//!
//! Race a roster of named racers and report the winners.

use clap::Parser;
use racing_env::ThreadRngDraw;
use racing_sim::{RaceExport, RaceOutcome, RaceRunner, SimDraw, SimError, MAX_ROUNDS};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Racing simulation CLI
#[derive(Parser, Debug)]
#[command(name = "racing-sim")]
#[command(about = "Race named racers on random draws and report the winners", long_about = None)]
struct Args {
    /// Racer names, comma separated (e.g. pobi,woni,jun)
    #[arg(short, long, value_delimiter = ',', required = true)]
    names: Vec<String>,

    /// Number of rounds to run
    #[arg(
        short,
        long,
        default_value = "5",
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_ROUNDS))
    )]
    rounds: u32,

    /// Seed for a reproducible race (omit for an unseeded race)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON output for machine parsing
    #[arg(long)]
    json: bool,

    /// Verbose output (debug level; overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Racer names as typed, with surrounding whitespace removed.
fn racer_names(args: &Args) -> Vec<&str> {
    args.names.iter().map(|name| name.trim()).collect()
}

/// Log filter directives: `--verbose` forces debug, otherwise RUST_LOG, otherwise info.
fn log_directives(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

fn race(args: &Args) -> Result<RaceOutcome, SimError> {
    let names = racer_names(args);

    let outcome = match args.seed {
        Some(seed) => RaceRunner::new(SimDraw::new(seed))
            .with_rounds(args.rounds)
            .run(names)?,
        None => RaceRunner::new(ThreadRngDraw::new())
            .with_rounds(args.rounds)
            .run(names)?,
    };

    Ok(outcome)
}

fn report(args: &Args, outcome: &RaceOutcome) -> Result<String, SimError> {
    if args.json {
        Ok(RaceExport::from(outcome).to_json()?)
    } else {
        Ok(outcome.render())
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging (stderr, so stdout stays clean for --json)
    let directives = log_directives(args.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let filter = EnvFilter::new(directives);
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    info!("Racing Simulator v{}", env!("CARGO_PKG_VERSION"));

    let result = race(&args).and_then(|outcome| report(&args, &outcome));

    // Exit with proper code for scripting
    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
