//! Command-line interface for rewind.

use crate::config::BotSelection;
use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with time travel and a bot opponent
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Path to game configuration file
        #[arg(short, long, default_value = "rewind.toml")]
        config: std::path::PathBuf,

        /// Disable the bot; both players move from the terminal
        #[arg(long)]
        no_bot: bool,

        /// Seed the bot's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Override the bot delay in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Bot square selection (exclude_last or uniform)
        #[arg(long)]
        selection: Option<BotSelection>,
    },

    /// Print the effective configuration as TOML
    ShowConfig {
        /// Path to game configuration file
        #[arg(short, long, default_value = "rewind.toml")]
        config: std::path::PathBuf,
    },
}
