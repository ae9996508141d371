//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// How the bot turns a list of empty squares into a choice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BotSelection {
    /// Draws from `[0, n - 2]`, so the last empty square is never picked
    /// while more than one remains. Matches the shipped game's behavior.
    #[default]
    ExcludeLast,
    /// Draws uniformly from every empty square.
    Uniform,
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Whether first-player moves schedule an automated reply.
    #[serde(default = "default_bot_enabled")]
    bot_enabled: bool,

    /// Delay before the automated reply, in milliseconds.
    #[serde(default = "default_bot_delay_ms")]
    bot_delay_ms: u64,

    /// Square selection policy for the automated reply.
    #[serde(default)]
    bot_selection: BotSelection,

    /// Seed for the bot's RNG. Entropy-seeded when absent.
    #[serde(default)]
    #[setters(strip_option)]
    bot_seed: Option<u64>,
}

fn default_bot_enabled() -> bool {
    true
}

fn default_bot_delay_ms() -> u64 {
    1000
}

impl GameConfig {
    /// Reads and parses a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            bot_enabled = config.bot_enabled,
            bot_delay_ms = config.bot_delay_ms,
            bot_selection = %config.bot_selection,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to render config: {}", e)))
    }

    /// The bot delay as a [`Duration`].
    pub fn bot_delay(&self) -> Duration {
        Duration::from_millis(self.bot_delay_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bot_enabled: default_bot_enabled(),
            bot_delay_ms: default_bot_delay_ms(),
            bot_selection: BotSelection::default(),
            bot_seed: None,
        }
    }
}

/// Failure to read, parse or render a [`GameConfig`], tagged with the
/// call site that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub message: String,
    /// Raising line.
    pub line: u32,
    /// Raising file.
    pub file: &'static str,
}

impl ConfigError {
    /// Records the caller's location alongside `message`.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
