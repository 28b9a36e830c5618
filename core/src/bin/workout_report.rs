use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use workout_core::{load_packages, print_training_report, sample_packages, OutputFormat};

/// Workout summaries from raw sensor packages
#[derive(Parser, Debug)]
#[command(name = "workout-report")]
#[command(about = "Distance, mean speed and calories for RUN/WLK/SWM packages", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file with packages; the built-in sample batch is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One message line per workout
    Text,
    /// One JSON object per workout
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let packages = match &cli.input {
        Some(path) => load_packages(path)
            .with_context(|| format!("failed to read packages from {}", path.display()))?,
        None => {
            info!("no input file, using sample packages");
            sample_packages()
        }
    };

    let failed = print_training_report(&packages, cli.format.into(), &mut io::stdout().lock())
        .context("failed to write report")?;

    Ok(if failed > 0 { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}
