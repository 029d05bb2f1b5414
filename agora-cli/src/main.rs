mod commands;
mod render;

use std::path::{Path, PathBuf};

use agora_core::config::AgoraConfig;
use agora_core::conflict::ConflictDetector;
use agora_core::date_range::DateRange;
use agora_core::snapshot::EventSnapshot;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agora")]
#[command(about = "Check investor-relations event snapshots for scheduling conflicts")]
struct Cli {
    /// Read thresholds from this file instead of ~/.config/agora/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log detection details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every conflict in an event snapshot
    Conflicts {
        /// JSON file with an array of events
        file: PathBuf,

        /// Only check events this user has responded to
        #[arg(short, long)]
        user: Option<String>,

        /// Only check events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only check events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Show every conflict even for busy days
        #[arg(long)]
        all: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count conflicts by severity and type
    Summary {
        /// JSON file with an array of events
        file: PathBuf,

        /// Only check events this user has responded to
        #[arg(short, long)]
        user: Option<String>,

        /// Only check events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only check events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show conflicts for a single event
    Event {
        /// JSON file with an array of events
        file: PathBuf,

        /// Id of the event to check
        id: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the config path and effective thresholds
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(thresholds = ?config.conflicts, "loaded config");
    let detector = ConflictDetector::new(config.conflicts.clone());

    match cli.command {
        Commands::Conflicts {
            file,
            user,
            from,
            to,
            all,
            json,
        } => {
            let snapshot = EventSnapshot::load(&file)?;
            let range = DateRange::from_args(from.as_deref(), to.as_deref())?;
            commands::conflicts::run(&detector, &snapshot, range, user.as_deref(), all, json)
        }
        Commands::Summary {
            file,
            user,
            from,
            to,
            json,
        } => {
            let snapshot = EventSnapshot::load(&file)?;
            let range = DateRange::from_args(from.as_deref(), to.as_deref())?;
            commands::summary::run(&detector, &snapshot, range, user.as_deref(), json)
        }
        Commands::Event { file, id, json } => {
            let snapshot = EventSnapshot::load(&file)?;
            commands::event::run(&detector, &snapshot, &id, json)
        }
        Commands::Config => commands::config::run(cli.config.as_deref(), &config),
    }
}

/// Logs go to stderr so `--json` output stays parseable. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AgoraConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file '{}' not found", path.display());
            }
            AgoraConfig::load_from(path)
                .with_context(|| format!("Could not load config from {}", path.display()))
        }
        None => Ok(AgoraConfig::load()?),
    }
}
