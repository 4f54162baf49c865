use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use smartstop::{reference_trace, Access, AccessTracker, TraceRecord, TrackerConfig};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// smartstop CLI
/// Replays memory-access traces and prints the vector clock of every access
#[derive(Parser)]
#[command(name = "smartstop")]
#[command(about = "Happens-before tracking over memory-access traces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the built-in two-processor reference trace
    Demo,
    /// Replay a JSON trace file (an array of accesses)
    Replay {
        /// Trace file
        file: PathBuf,
        /// Number of processors
        #[arg(short, long, default_value_t = TrackerConfig::default().num_processors)]
        processors: usize,
        /// Tracker configuration file (JSON); overrides --processors
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print records as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    run(cli.command, &mut stdout.lock())
}

fn run(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Demo => {
            info!("replaying reference trace");
            let records = replay(&TrackerConfig::default(), reference_trace())?;
            print_records(out, &records, false)
        }
        Commands::Replay {
            file,
            processors,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => load_config(&path)?,
                None => TrackerConfig::new(processors),
            };
            let trace = load_trace(&file)?;
            info!(
                accesses = trace.len(),
                processors = config.num_processors,
                "replaying {}",
                file.display()
            );
            let records = replay(&config, trace)?;
            print_records(out, &records, json)
        }
    }
}

fn replay(config: &TrackerConfig, trace: Vec<Access>) -> Result<Vec<TraceRecord>> {
    let mut tracker = AccessTracker::with_config(config)?;
    tracker.replay(trace).context("trace replay failed")
}

fn load_trace(path: &Path) -> Result<Vec<Access>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read trace {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid trace {}", path.display()))
}

fn load_config(path: &Path) -> Result<TrackerConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config {}", path.display()))
}

fn print_records(out: &mut impl Write, records: &[TraceRecord], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, records)?;
        writeln!(out)?;
    } else {
        for record in records {
            writeln!(out, "{record}")?;
        }
    }
    Ok(())
}
