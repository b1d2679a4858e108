//! Variate CLI
//!
//! Command-line demonstrations of the variate_core toolkit.
//!
//! # Commands
//!
//! - `uniform`: LCG output sequence
//! - `normal`: two LCG streams through the Box-Muller transform
//! - `density`: Beta target tabulated on the envelope grid
//! - `sample`: acceptance-rejection draws from the Beta target
//! - `online`: windowed mean and variance of a noisy sine wave
//!
//! Every command writes CSV to stdout. Logs go to stderr.
//!
//! # Configuration Priority
//!
//! 1. CLI arguments (highest)
//! 2. Environment variables (`VARIATE_LOG_LEVEL`)
//! 3. Config file (TOML)
//! 4. Default values (lowest)

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, LogLevel, VariateConfig, LOG_LEVEL_ENV};

/// Variate - random variate generation demonstrations
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = LOG_LEVEL_ENV)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the LCG output sequence
    Uniform {
        /// Number of values to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print standard normal pairs from two LCG streams
    Normal {
        /// Number of pairs to generate
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print the Beta density on an evenly spaced grid
    Density {
        /// Number of grid points
        #[arg(short, long)]
        grid_size: Option<usize>,
    },

    /// Print accepted acceptance-rejection samples
    Sample {
        /// Number of proposal trials
        #[arg(short, long)]
        trials: Option<usize>,

        /// Envelope grid size
        #[arg(short, long)]
        grid_size: Option<usize>,

        /// Seed for the uniform sources (entropy if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print windowed statistics of a noisy sine wave
    Online {
        /// Number of stream values
        #[arg(long)]
        steps: Option<usize>,

        /// Window capacity
        #[arg(short, long)]
        window: Option<usize>,

        /// Seed for the noise source (entropy if omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

impl Cli {
    fn to_config_args(&self) -> CliArgs {
        let mut args = CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            ..CliArgs::default()
        };
        match &self.command {
            Commands::Uniform { count } | Commands::Normal { count } => {
                args.count = *count;
            }
            Commands::Density { grid_size } => {
                args.grid_size = *grid_size;
            }
            Commands::Sample {
                trials,
                grid_size,
                seed,
            } => {
                args.trials = *trials;
                args.grid_size = *grid_size;
                args.seed = *seed;
            }
            Commands::Online {
                steps,
                window,
                seed,
            } => {
                args.steps = *steps;
                args.window = *window;
                args.seed = *seed;
            }
        }
        args
    }
}

/// Initialise tracing with the configured log level
///
/// `RUST_LOG` takes precedence when set.
fn init_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::from(log_level).into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn dispatch(command: &Commands, config: &VariateConfig) -> Result<()> {
    let out = io::stdout().lock();
    match command {
        Commands::Uniform { .. } => commands::uniform::run(config, out),
        Commands::Normal { .. } => commands::normal::run(config, out),
        Commands::Density { .. } => commands::density::run(config, out),
        Commands::Sample { .. } => commands::sample::run(config, out),
        Commands::Online { .. } => commands::online::run(config, out),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli.to_config_args())?;

    init_tracing(config.log_level);
    info!(log_level = %config.log_level, "Starting variate");

    dispatch(&cli.command, &config)
}
