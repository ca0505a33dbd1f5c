//! # meditrack CLI entry point
//!
//! Parses command-line arguments, sets up logging, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use meditrack_cli::config::Config;
use meditrack_cli::hospital::{run_hospital, HospitalArgs};
use meditrack_cli::record::{run_record, RecordArgs};
use meditrack_cli::reset::{run_reset, ResetArgs};

/// MediTrack — patient records for small clinics.
///
/// Register hospitals, record patient visits against them, and browse,
/// filter, sort, and edit those records. Data lives in a local SQLite file.
#[derive(Parser, Debug)]
#[command(name = "meditrack", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Database file (defaults to $MEDITRACK_DB, then ./meditrack.db).
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Answer yes to every confirmation prompt.
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage hospitals.
    Hospital(HospitalArgs),

    /// Browse and edit patient records.
    Record(RecordArgs),

    /// Discard stored data and restore the built-in seed data.
    Reset(ResetArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(cli.db, cli.yes);
    tracing::debug!(db = %config.db_path.display(), "resolved configuration");

    let result = match cli.command {
        Commands::Hospital(args) => run_hospital(&args, &config),
        Commands::Record(args) => run_record(&args, &config),
        Commands::Reset(args) => run_reset(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
