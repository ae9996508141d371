//! Game session: shared state, request handling and bot scheduling.
//!
//! A [`GameSession`] serializes every request against one [`GameState`].
//! When a first-player move leaves the game running, the session spawns a
//! delayed reply on the Tokio runtime. The reply holds only a weak
//! reference to the session and an [`ArmToken`]; it re-checks both against
//! the live state before submitting anything.

use crate::bot::{pick_move, ArmToken, BotTask};
use crate::config::GameConfig;
use crate::view::GameView;
use derive_more::{Display, From};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rewind_tictactoe::{
    GameState, GameStatus, JumpError, Move, MoveError, MoveOutcome, Player, Position,
};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Notifications emitted to the UI as the session changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A move was accepted.
    MoveMade {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
        /// History step the move was recorded as.
        step: usize,
        /// True when the automated opponent made the move.
        by_bot: bool,
    },
    /// An automated reply was scheduled.
    BotArmed {
        /// Game the reply belongs to.
        generation: u64,
    },
    /// The viewing pointer moved.
    Jumped {
        /// Step now displayed.
        step: usize,
    },
    /// The game was decided.
    GameOver {
        /// Final status.
        status: GameStatus,
    },
    /// The game was discarded and restarted.
    Reset {
        /// Identity of the new game.
        generation: u64,
    },
}

/// Why a requested move was refused. The game is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The game rules refused the move.
    #[display("{}", _0)]
    Move(MoveError),

    /// The move would arm the bot but no Tokio runtime is running.
    #[display("No Tokio runtime to schedule the bot reply")]
    #[from(skip)]
    NoRuntime,
}

impl std::error::Error for SessionError {}

/// Who asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mover {
    Request,
    Bot,
}

#[derive(Debug)]
struct SessionState {
    game: GameState,
    generation: u64,
    next_ticket: u64,
    bot: BotTask,
    rng: StdRng,
}

#[derive(Debug)]
struct Shared {
    config: GameConfig,
    state: Mutex<SessionState>,
    events: Option<mpsc::UnboundedSender<GameEvent>>,
}

/// A single game with time travel and an optional automated opponent.
///
/// Moves that arm the opponent must be requested from within a Tokio
/// runtime. Dropping the session cancels any pending reply.
#[derive(Debug)]
pub struct GameSession {
    shared: Arc<Shared>,
}

impl GameSession {
    /// Creates a session without an event stream.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self::build(config, None)
    }

    /// Creates a session that reports [`GameEvent`]s on `events`.
    #[instrument(skip(config, events))]
    pub fn with_events(config: GameConfig, events: mpsc::UnboundedSender<GameEvent>) -> Self {
        Self::build(config, Some(events))
    }

    fn build(config: GameConfig, events: Option<mpsc::UnboundedSender<GameEvent>>) -> Self {
        let rng = match config.bot_seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_entropy(),
        };
        info!(
            bot_enabled = config.bot_enabled(),
            bot_delay_ms = config.bot_delay_ms(),
            "Creating game session"
        );
        Self {
            shared: Arc::new(Shared {
                config,
                state: Mutex::new(SessionState {
                    game: GameState::new(),
                    generation: 0,
                    next_ticket: 0,
                    bot: BotTask::default(),
                    rng,
                }),
                events,
            }),
        }
    }

    /// The session's configuration.
    pub fn config(&self) -> &GameConfig {
        &self.shared.config
    }

    /// Places a mark for the active player at board index `index`.
    ///
    /// A first-player move with the bot enabled needs a Tokio runtime to
    /// schedule the reply; without one the move is refused up front.
    #[instrument(skip(self))]
    pub fn request_move(&self, index: usize) -> Result<MoveOutcome, SessionError> {
        let mut state = self.shared.lock();
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move rejected: out of range");
            MoveError::OutOfRange(index)
        })?;
        let action = Move::new(state.game.active_player(), position);

        if *self.shared.config.bot_enabled()
            && action.player == Player::FIRST
            && Handle::try_current().is_err()
        {
            warn!(%action, "Move rejected: no runtime for bot reply");
            return Err(SessionError::NoRuntime);
        }

        Ok(self.shared.commit_move(&mut state, action, Mover::Request)?)
    }

    /// Travels to history step `step`. A pending bot reply stays armed and
    /// will play against whatever board is current when it fires.
    #[instrument(skip(self))]
    pub fn request_jump(&self, step: usize) -> Result<(), JumpError> {
        let mut state = self.shared.lock();
        state.game.jump_to(step)?;
        self.shared.emit(GameEvent::Jumped { step });
        Ok(())
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn request_reset(&self) {
        let mut state = self.shared.lock();
        state.bot.cancel();
        state.generation += 1;
        state.game = GameState::new();
        info!(generation = state.generation, "Game reset");
        self.shared.emit(GameEvent::Reset {
            generation: state.generation,
        });
    }

    /// Cancels a pending bot reply. Returns whether one was pending.
    #[instrument(skip(self))]
    pub fn cancel_bot(&self) -> bool {
        self.shared.lock().bot.cancel()
    }

    /// Whether a bot reply is pending.
    pub fn is_bot_armed(&self) -> bool {
        self.shared.lock().bot.is_armed()
    }

    /// Identity of the current game. Changes on every reset.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// A copy of the current game state.
    pub fn state(&self) -> GameState {
        self.shared.lock().game.clone()
    }

    /// The UI-facing view of the current game.
    pub fn view(&self) -> GameView {
        let state = self.shared.lock();
        GameView::new(&state.game, state.bot.is_armed())
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if self.shared.lock().bot.cancel() {
            debug!("Session dropped with a pending bot reply");
        }
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.events
            && tx.send(event).is_err()
        {
            debug!("Event receiver dropped");
        }
    }

    /// Shared move path for requested and bot moves.
    fn commit_move(
        self: &Arc<Self>,
        state: &mut SessionState,
        action: Move,
        mover: Mover,
    ) -> Result<MoveOutcome, MoveError> {
        let outcome = state.game.submit(action)?;

        // Any accepted move supersedes a reply armed for an earlier board.
        state.bot.cancel();

        self.emit(GameEvent::MoveMade {
            player: action.player,
            position: action.position,
            step: state.game.history().pointer(),
            by_bot: mover == Mover::Bot,
        });

        match outcome {
            MoveOutcome::Continue { arm_bot: true, .. } if *self.config.bot_enabled() => {
                self.arm(state);
            }
            MoveOutcome::Continue { .. } => {}
            MoveOutcome::Won(_) | MoveOutcome::Tied => {
                self.emit(GameEvent::GameOver {
                    status: *state.game.status(),
                });
            }
        }

        Ok(outcome)
    }

    fn arm(self: &Arc<Self>, state: &mut SessionState) {
        let token = ArmToken {
            generation: state.generation,
            ticket: state.next_ticket,
        };
        state.next_ticket += 1;

        let delay = self.config.bot_delay();
        let weak: Weak<Shared> = Arc::downgrade(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            match weak.upgrade() {
                Some(shared) => shared.fire(token),
                None => debug!(?token, "Session gone before bot reply"),
            }
        });

        state.bot.arm(token, handle);
        debug!(?token, delay_ms = self.config.bot_delay_ms(), "Bot reply armed");
        self.emit(GameEvent::BotArmed {
            generation: token.generation,
        });
    }

    #[instrument(skip(self))]
    fn fire(self: &Arc<Self>, token: ArmToken) {
        let mut state = self.lock();

        if state.bot.token() != Some(token) || state.generation != token.generation {
            debug!(current = ?state.bot.token(), "Stale bot reply ignored");
            return;
        }
        state.bot.release(token);

        if state.game.status().is_over() || state.game.active_player() != Player::O {
            debug!(
                status = %state.game.status(),
                active = %state.game.active_player(),
                "Bot reply no longer applicable"
            );
            return;
        }

        let board = *state.game.board();
        let selection = *self.config.bot_selection();
        let Some(position) = pick_move(&mut state.rng, &board, selection) else {
            debug!("No empty squares for bot");
            return;
        };

        if let Err(e) = self.commit_move(&mut state, Move::new(Player::O, position), Mover::Bot) {
            warn!(error = %e, %position, "Bot move rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hot_seat() -> GameSession {
        GameSession::new(GameConfig::default().with_bot_enabled(false))
    }

    #[test]
    fn test_hot_seat_moves_alternate() {
        let session = hot_seat();
        session.request_move(4).unwrap();
        assert_eq!(session.state().active_player(), Player::O);
        session.request_move(0).unwrap();
        assert_eq!(session.state().active_player(), Player::X);
        assert!(!session.is_bot_armed());
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let session = hot_seat();
        session.request_move(4).unwrap();
        let before = session.state();
        assert_eq!(
            session.request_move(4),
            Err(SessionError::Move(MoveError::SquareOccupied(Position::Center)))
        );
        assert_eq!(
            session.request_move(10),
            Err(SessionError::Move(MoveError::OutOfRange(10)))
        );
        assert_eq!(session.state(), before);
    }

    #[test]
    fn test_move_outside_runtime_is_refused_whole() {
        let session = GameSession::new(GameConfig::default());
        assert_eq!(session.request_move(4), Err(SessionError::NoRuntime));
        assert_eq!(session.state(), GameState::new());
        assert!(!session.is_bot_armed());

        // Hot-seat play never needs the runtime.
        let session = hot_seat();
        assert!(session.request_move(4).is_ok());
    }

    #[test]
    fn test_reset_bumps_generation() {
        let session = hot_seat();
        session.request_move(4).unwrap();
        session.request_reset();
        assert_eq!(session.generation(), 1);
        assert_eq!(session.state(), GameState::new());
    }

    #[test]
    fn test_events_are_emitted() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let session = GameSession::with_events(GameConfig::default().with_bot_enabled(false), tx);
        for i in [0, 4, 1, 5, 2] {
            session.request_move(i).unwrap();
        }
        session.request_reset();

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events.len(), 7);
        assert_eq!(
            events[0],
            GameEvent::MoveMade {
                player: Player::X,
                position: Position::TopLeft,
                step: 1,
                by_bot: false,
            }
        );
        assert!(matches!(
            events[5],
            GameEvent::GameOver {
                status: GameStatus::Won {
                    player: Player::X,
                    ..
                }
            }
        ));
        assert_eq!(events[6], GameEvent::Reset { generation: 1 });
    }
}
