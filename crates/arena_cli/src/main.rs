//! NPC arena fight runner.
//!
//! # Usage
//!
//! ```bash
//! # Fight the roster in npcs.txt with the default 500 unit range
//! cargo run -p arena_cli -- run
//!
//! # Custom roster, range and a safety limit on rounds
//! cargo run -p arena_cli -- run --roster roster.ron --max-distance 50 --round-limit 1000
//!
//! # Check a roster file without fighting
//! cargo run -p arena_cli -- validate npcs.txt
//! ```
//!
//! Fight progress goes to stdout, logs go to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use arena_core::config::FightConfig;
use arena_core::error::ArenaError;
use arena_core::fight::FightScheduler;
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use arena_cli::{
    load_config, load_roster, ConsoleObserver, FileObserver, FightSummary, LoadError, RosterTable,
};

#[derive(Parser)]
#[command(name = "arena")]
#[command(about = "Turn-based NPC fight simulator")]
#[command(version)]
struct Cli {
    /// Enable verbose logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a roster and run the fight
    Run(RunArgs),

    /// Parse a roster file and report what would be loaded
    Validate {
        /// Roster file (.txt or .ron)
        #[arg(default_value = "npcs.txt")]
        roster: PathBuf,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Roster file (.txt or .ron)
    #[arg(short, long, default_value = "npcs.txt")]
    roster: PathBuf,

    /// RON fight configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Engagement range, overrides the config file
    #[arg(short = 'd', long)]
    max_distance: Option<f64>,

    /// Stop after this many rounds, overrides the config file
    #[arg(long)]
    round_limit: Option<u32>,

    /// Append-only battle log
    #[arg(short, long, default_value = "battle_log.txt")]
    log: PathBuf,

    /// Do not write the battle log
    #[arg(long)]
    no_log: bool,

    /// Print the result as JSON instead of human-readable progress
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("Failed to open battle log '{path}': {source}")]
    Log {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let result = match cli.command {
        Commands::Run(args) => run(&args),
        Commands::Validate { roster } => validate(&roster),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn fight_config(args: &RunArgs) -> Result<FightConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => FightConfig::default(),
    };
    if let Some(max_distance) = args.max_distance {
        config.max_distance = max_distance;
    }
    if let Some(limit) = args.round_limit {
        config.round_limit = Some(limit);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &RunArgs) -> Result<(), CliError> {
    let config = fight_config(args)?;
    let roster = load_roster(&args.roster)?;

    let mut console = ConsoleObserver::stdout();
    let mut file_log = if args.no_log {
        None
    } else {
        let observer = FileObserver::open(&args.log).map_err(|source| CliError::Log {
            path: args.log.display().to_string(),
            source,
        })?;
        Some(observer)
    };

    let mut scheduler = FightScheduler::new();
    if !args.json {
        scheduler.subscribe(&mut console);
    }
    if let Some(observer) = file_log.as_mut() {
        scheduler.subscribe(observer);
    }

    let loaded = scheduler.load_records(&roster.records);
    tracing::info!(
        loaded,
        skipped = roster.records.len() - loaded + roster.skipped_lines,
        "Roster loaded from {}",
        args.roster.display()
    );
    if config.round_limit.is_none() {
        tracing::debug!("No round limit: in-range NPCs that cannot hurt each other fight forever");
    }

    if !args.json {
        println!("NPC list before fight:");
        print!("{}", RosterTable(scheduler.roster()));
    }

    let report = scheduler.run(&config)?;

    if args.json {
        let summary = FightSummary {
            report,
            survivors: scheduler.roster(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("\nNPC list after fight:");
        print!("{}", RosterTable(scheduler.roster()));
    }

    Ok(())
}

fn validate(path: &std::path::Path) -> Result<(), CliError> {
    tracing::info!("Validating roster: {}", path.display());
    let roster = load_roster(path)?;
    let known = roster.known_species();

    tracing::info!(
        records = roster.records.len(),
        loadable = known,
        unknown_species = roster.records.len() - known,
        malformed_lines = roster.skipped_lines,
        "Validation passed"
    );
    Ok(())
}
