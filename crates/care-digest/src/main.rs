//! care-digest: print the day's plant care plan
//!
//! ```text
//! care-digest --plants data/plants.json --date 2026-04-15
//! ```

mod load;

use std::path::PathBuf;
use std::process::ExitCode;

use care_core::dataset::parse_date;
use care_core::digest::render_digest;
use care_core::overview::collection;
use care_core::{CareResult, Clock, Scheduler, SystemClock};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "care-digest", version, about = "Print the day's plant care plan")]
struct Args {
    /// Plant dataset (JSON array)
    #[arg(long, default_value = "data/plants.json")]
    plants: PathBuf,

    /// External history log (JSON array); a missing file is ignored
    #[arg(long)]
    history: Option<PathBuf>,

    /// Scheduler config override (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plan date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Also list every plant's last care event
    #[arg(long)]
    last_care: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("care-digest: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> CareResult<String> {
    let date = match args.date.as_deref() {
        Some(text) => parse_date(text)?,
        None => SystemClock.today(),
    };
    let plants = load::load_plants(&args.plants)?;
    let config = load::load_config(args.config.as_deref())?;
    tracing::debug!(plants = plants.len(), %date, "building digest");

    let plan = Scheduler::new(config).plan_for(&plants, date);
    let mut text = render_digest(&plan);

    if args.last_care {
        let history = load::load_history(args.history.as_deref())?;
        text.push_str("\n\nLast care:");
        for entry in collection(&plants, &history) {
            let last = entry
                .last_care
                .map(|e| format!("{} {}", e.date, e.event))
                .unwrap_or_else(|| "no record".to_string());
            text.push_str(&format!("\n  {}: {}", entry.name, last));
        }
    }
    Ok(text)
}
