//! Rewind - Unified CLI
//!
//! Tic-tac-toe with time travel, played in the terminal.

use anyhow::Result;
use clap::Parser;
use rewind::cli::{Cli, Command};
use rewind::{BotSelection, GameConfig, GameSession};
use std::path::Path;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            no_bot,
            seed,
            delay_ms,
            selection,
        } => run_play(&config, no_bot, seed, delay_ms, selection).await,
        Command::ShowConfig { config } => {
            print!("{}", load_config(&config)?.to_toml()?);
            Ok(())
        }
    }
}

/// Run an interactive game
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_play(
    config_path: &Path,
    no_bot: bool,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    selection: Option<BotSelection>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if no_bot {
        config = config.with_bot_enabled(false);
    }
    if let Some(seed) = seed {
        config = config.with_bot_seed(seed);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_bot_delay_ms(delay_ms);
    }
    if let Some(selection) = selection {
        config = config.with_bot_selection(selection);
    }

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let session = GameSession::with_events(config, event_tx);

    info!("Starting game");
    rewind::console::run(session, event_rx).await
}

#[instrument(skip(config_path))]
fn load_config(config_path: &Path) -> Result<GameConfig> {
    if config_path.exists() {
        Ok(GameConfig::from_file(config_path)?)
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        Ok(GameConfig::default())
    }
}

/// Log to a file so the board on stdout stays readable.
fn initialize_tracing() -> Result<()> {
    let log_file = std::fs::File::create("rewind.log")?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,rewind=debug".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
