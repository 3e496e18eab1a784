//! IntervalForge command-line front end.
//!
//! Usage:
//! ```bash
//! # Threshold session from the configured athlete profile
//! intervalforge threshold --score 7 --minutes 60 --kind threshold
//!
//! # VO2max session
//! intervalforge vo2max --score 8 --minutes 30 --kind classic
//!
//! # Training-load summary of a workout file
//! intervalforge metadata workout.json
//!
//! # Write a default config file
//! intervalforge init-config
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use intervalforge::sessions::{
    SessionCalculator, ThresholdIntervalType, ThresholdSessionCalculator,
    ThresholdSessionParameters, Vo2maxIntervalType, Vo2maxSessionCalculator,
    Vo2maxSessionParameters,
};
use intervalforge::storage::config::{self, AppConfig};
use intervalforge::workouts::{load_workout_file, Interval};
use intervalforge::{calculate_metadata, Session, WorkoutMetadata};

#[derive(Parser)]
#[command(
    name = "intervalforge",
    version,
    about = "Cycling interval session synthesis and training-load metrics"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Config file path (defaults to the platform data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Build a threshold or sweet-spot session
    Threshold {
        /// Difficulty score (1-10)
        #[arg(long)]
        score: f64,

        /// Session length in minutes (10-120)
        #[arg(long)]
        minutes: u32,

        #[arg(long, value_enum, default_value_t = ThresholdKind::Threshold)]
        kind: ThresholdKind,
    },

    /// Build a VO2max session
    Vo2max {
        /// Difficulty score (1-10)
        #[arg(long)]
        score: f64,

        /// Session length in minutes (10-60)
        #[arg(long)]
        minutes: u32,

        #[arg(long, value_enum, default_value_t = Vo2maxKind::Classic)]
        kind: Vo2maxKind,
    },

    /// Summarise a workout JSON file
    Metadata {
        /// Interval array or `{"intervals": [...]}` document
        file: PathBuf,
    },

    /// Write a default config file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ThresholdKind {
    Threshold,
    SweetSpot,
}

impl From<ThresholdKind> for ThresholdIntervalType {
    fn from(kind: ThresholdKind) -> Self {
        match kind {
            ThresholdKind::Threshold => ThresholdIntervalType::Threshold,
            ThresholdKind::SweetSpot => ThresholdIntervalType::SweetSpot,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Vo2maxKind {
    Short,
    Classic,
    Long,
}

impl From<Vo2maxKind> for Vo2maxIntervalType {
    fn from(kind: Vo2maxKind) -> Self {
        match kind {
            Vo2maxKind::Short => Vo2maxIntervalType::Short,
            Vo2maxKind::Classic => Vo2maxIntervalType::Classic,
            Vo2maxKind::Long => Vo2maxIntervalType::Long,
        }
    }
}

/// A session together with its workout rendering.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport {
    session: Session,
    interval: Interval,
    metadata: WorkoutMetadata,
}

impl SessionReport {
    fn new(session: Session) -> Self {
        let interval = session.to_interval(None);
        let metadata = calculate_metadata(std::slice::from_ref(&interval));
        Self {
            session,
            interval,
            metadata,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::get_config_path);
    let app_config = config::load_config_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    init_tracing(&app_config, cli.verbose);
    tracing::debug!("IntervalForge v{} using {}", env!("CARGO_PKG_VERSION"), config_path.display());

    match cli.command {
        Command::Threshold {
            score,
            minutes,
            kind,
        } => {
            let profile = app_config
                .athlete
                .threshold_profile()
                .context("Invalid athlete profile")?;
            let parameters = ThresholdSessionParameters::new(score, minutes, kind.into());
            let session = ThresholdSessionCalculator
                .calculate(&profile, &parameters)
                .context("Threshold session calculation failed")?;
            print_json(&SessionReport::new(session))
        }
        Command::Vo2max {
            score,
            minutes,
            kind,
        } => {
            let profile = app_config
                .athlete
                .vo2max_profile()
                .context("Invalid athlete profile")?;
            let parameters = Vo2maxSessionParameters::new(score, minutes, kind.into());
            let session = Vo2maxSessionCalculator::with_parallel(app_config.optimizer.parallel)
                .calculate(&profile, &parameters)
                .context("VO2max session calculation failed")?;
            if session.is_none() {
                tracing::warn!("No VO2max session fits {} minutes", minutes);
            }
            print_json(&session.map(SessionReport::new))
        }
        Command::Metadata { file } => print_json(&metadata_for_file(&file)?),
        Command::InitConfig { force } => init_config(&config_path, force),
    }
}

/// RUST_LOG wins, then `--verbose`, then the config filter.
fn init_tracing(app_config: &AppConfig, verbose: bool) {
    let fallback = if verbose {
        "debug".to_string()
    } else {
        app_config.logging.filter.clone()
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn metadata_for_file(path: &Path) -> Result<WorkoutMetadata> {
    let workout = load_workout_file(path)?;

    Ok(match workout {
        Some(mut workout) => workout.metadata(true).clone(),
        None => calculate_metadata(&[]),
    })
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    config::save_config_to(&AppConfig::default(), path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
