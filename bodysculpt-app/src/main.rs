use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

mod calculator;
mod config;
mod plotting;
mod report;

#[derive(Parser)]
#[command(name = "bodysculpt", version, about = "Physique-tracking dashboard and proportions calculator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the full dashboard: reports, charts, and trend export
    Dashboard {
        /// Profile YAML overriding the built-in anthropometric constants
        #[arg(long)]
        profile: Option<PathBuf>,
        /// Tracking log YAML overriding the built-in dataset
        #[arg(long)]
        tracking: Option<PathBuf>,
        /// Directory the timestamped run folder is created under
        #[arg(long, default_value = "./runs")]
        out: PathBuf,
    },
    /// Compute ideal proportions and body-ratio indices from your measurements
    Calculator {
        /// Calculator input YAML with raw measurement values
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Dashboard {
            profile,
            tracking,
            out,
        } => run_dashboard(profile.as_deref(), tracking.as_deref(), &out),
        Command::Calculator { input } => calculator::run(input.as_deref()),
    }
}

fn run_dashboard(
    profile_path: Option<&Path>,
    tracking_path: Option<&Path>,
    out: &Path,
) -> Result<()> {
    println!("--- BodySculpt Dashboard ---");

    let user = config::UserData::load(profile_path, tracking_path)?;

    let run_dir = out.join(format!(
        "dashboard_{}",
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    ));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create output directory: {}", run_dir.display()))?;

    // Copy the input files to the run directory for traceability
    if let Some(path) = profile_path {
        fs::copy(path, run_dir.join("profile.yaml"))?;
    }
    if let Some(path) = tracking_path {
        fs::copy(path, run_dir.join("tracking.yaml"))?;
    }

    report::run_dashboard(&user, &run_dir)?;

    println!("\nDashboard complete. Artifacts are in '{}'", run_dir.display());
    Ok(())
}
