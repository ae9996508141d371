//! Rewind - tic-tac-toe with time travel and an automated opponent
//!
//! # Architecture
//!
//! - **Game logic**: pure rules, history and turn scheduling live in the
//!   `rewind_tictactoe` crate and are re-exported here
//! - **Session**: [`GameSession`] serializes requests and schedules the
//!   bot's delayed, cancellable reply on Tokio
//! - **View**: [`GameView`] flattens a game for whatever renders it
//! - **Config**: [`GameConfig`] loaded from TOML
//!
//! # Example
//!
//! ```no_run
//! use rewind::{GameConfig, GameSession};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = GameSession::new(GameConfig::default());
//! session.request_move(4)?;
//! // The bot answers as O after the configured delay.
//! tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
//! println!("{}", session.view().board_text);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bot;
pub mod cli;
pub mod config;
pub mod console;
mod session;
mod view;

pub use bot::{ArmToken, BotTask};
pub use config::{BotSelection, ConfigError, GameConfig};
pub use session::{GameEvent, GameSession, SessionError};
pub use view::{GameView, Step};

pub use rewind_tictactoe::{
    Board, GameState, GameStatus, History, JumpError, Move, MoveError, MoveOutcome, Player,
    Position, Square, WinningLine,
};
