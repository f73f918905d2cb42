use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;
use serde::Serialize;

use job_insights::reference::state_codes;
use job_insights::{Dashboard, InsightsConfig, load_dataset};

/// Compute job-posting dashboard views for a skill and state selection
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Posting dataset (.csv or .parquet)
    #[arg(short, long)]
    data: PathBuf,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skill to select; defaults to the first skill in the dataset
    #[arg(long)]
    skill: Option<String>,

    /// Two-letter state code; defaults to the configured state
    #[arg(long)]
    state: Option<String>,

    /// Work type for the company view
    #[arg(long)]
    work_type: Option<String>,

    /// List skills, states and work types instead of computing views
    #[arg(long)]
    list: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Listing<'a> {
    skills: Vec<String>,
    states: Vec<&'a str>,
    work_types: Vec<String>,
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InsightsConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => InsightsConfig::default(),
    };

    let table = load_dataset(&args.data, &config.dataset)
        .with_context(|| format!("Failed to load dataset {}", args.data.display()))?;

    if args.list {
        let listing = Listing {
            skills: table.skills(),
            states: state_codes().collect(),
            work_types: table.work_types(),
        };
        return print_json(&listing, args.pretty);
    }

    let start = Instant::now();
    let mut dashboard = Dashboard::new(Arc::new(table), config.dashboard)
        .context("Failed to start dashboard session")?;
    if let Some(state) = &args.state {
        dashboard.set_state(state)?;
    }
    if let Some(skill) = &args.skill {
        dashboard.set_skill(skill)?;
    }
    if let Some(work_type) = &args.work_type {
        dashboard.set_work_type(work_type)?;
    }
    let snapshot = dashboard.snapshot()?;
    info!(
        "Computed views for '{}' in {} in {:?}",
        snapshot.selection.skill,
        snapshot.selection.state,
        start.elapsed()
    );

    print_json(&snapshot, args.pretty)
}
