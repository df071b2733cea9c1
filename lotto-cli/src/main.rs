mod clipboard;
mod commands;
mod render;

use clap::{Parser, Subcommand};
use lotto_core::{LottoConfig, LottoError};
use lotto_draw::DrawError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Lotto number generator with staged reveal")]
#[command(version)]
struct Cli {
    /// Config file (defaults to <config dir>/lotto/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw six numbers and reveal them one by one
    Draw(commands::DrawArgs),
    /// Show the latest winning result
    Latest,
    /// Number frequency over recent rounds
    Stats {
        /// Only show the N most frequent numbers
        #[arg(short, long)]
        top: Option<usize>,
    },
    /// Check six numbers against recent rounds
    Check {
        /// Six numbers between 1 and 45
        #[arg(num_args = 6, required = true)]
        numbers: Vec<u8>,
    },
    /// Time left until the next draw
    Countdown {
        /// Keep ticking every second until Ctrl+C
        #[arg(short, long)]
        watch: bool,
    },
    /// Menu-driven session: generate, copy, toggle statistics
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto={},lotto_draw={},lotto_core={}",
            log_level, log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(LottoConfig::default_path);
    let config = match LottoConfig::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: could not load {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Draw(args) => commands::run_draw(&config, args).await,
        Commands::Latest => commands::show_latest(),
        Commands::Stats { top } => commands::show_stats(top),
        Commands::Check { numbers } => commands::check_numbers(&numbers),
        Commands::Countdown { watch } => commands::show_countdown(&config, watch).await,
        Commands::Interactive => commands::run_interactive(&config).await,
    };

    if let Err(e) = result {
        match e.downcast_ref::<DrawError>() {
            Some(DrawError::Busy) => {
                eprintln!("Error: a draw is already in progress");
            }
            Some(DrawError::NothingToCopy) => {
                eprintln!("Error: nothing to copy yet");
                eprintln!("Generate numbers first");
            }
            _ => match e.downcast_ref::<LottoError>() {
                Some(LottoError::NumberOutOfRange(n)) => {
                    eprintln!("Error: {} is not between 1 and 45", n);
                }
                Some(LottoError::DuplicateNumber(n)) => {
                    eprintln!("Error: {} was given more than once", n);
                }
                _ => {
                    eprintln!("Error: {:#}", e);
                }
            },
        }
        std::process::exit(1);
    }

    Ok(())
}
