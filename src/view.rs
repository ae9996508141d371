//! UI-facing view of a game.
//!
//! Everything a renderer needs, flattened into plain serializable data.

use derive_new::new;
use rewind_tictactoe::{GameState, GameStatus, Player};
use serde::Serialize;

/// One navigable history step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Step {
    /// Index into history.
    pub index: usize,
    /// Button label.
    pub label: String,
    /// Whether the step can currently be selected.
    pub selectable: bool,
    /// Whether this step is the one displayed.
    pub current: bool,
}

/// Snapshot of a game for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Squares in row-major order; `None` for empty.
    pub cells: Vec<Option<Player>>,
    /// Player whose turn it is.
    pub active_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Winning line as board indices, when won.
    pub winning_line: Option<[usize; 3]>,
    /// History steps, oldest first.
    pub steps: Vec<Step>,
    /// Status line, e.g. `Current Player: X`.
    pub headline: String,
    /// Whether an automated reply is pending.
    pub bot_thinking: bool,
    /// Plain-text board.
    pub board_text: String,
}

impl GameView {
    /// Builds the view of `game`.
    pub fn new(game: &GameState, bot_thinking: bool) -> Self {
        let status = *game.status();
        let selectable = game.can_time_travel();
        let pointer = game.history().pointer();

        let steps = (0..game.history().len())
            .map(|index| Step::new(index, step_label(index), selectable, index == pointer))
            .collect();

        Self {
            cells: game.board().squares().iter().map(|s| s.player()).collect(),
            active_player: game.active_player(),
            status,
            winning_line: status.winning_line().map(|w| w.indices()),
            steps,
            headline: headline(&status, game.active_player()),
            bot_thinking,
            board_text: game.board().display(),
        }
    }

    /// Renders the view as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn step_label(index: usize) -> String {
    match index {
        0 => "Go to Start".to_string(),
        n => format!("Go to Step {}", n),
    }
}

fn headline(status: &GameStatus, active: Player) -> String {
    match status {
        GameStatus::InProgress => format!("Current Player: {}", active),
        GameStatus::Won { player, .. } => format!("Won By: {}", player),
        GameStatus::Tied => "Game Tied!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_game_view() {
        let view = GameView::new(&GameState::new(), false);
        assert_eq!(view.cells, vec![None; 9]);
        assert_eq!(view.headline, "Current Player: X");
        assert_eq!(view.steps.len(), 1);
        assert_eq!(view.steps[0].label, "Go to Start");
        assert!(!view.steps[0].selectable);
        assert!(view.steps[0].current);
    }

    #[test]
    fn test_steps_become_selectable() {
        let mut game = GameState::new();
        game.place(4).unwrap();
        let view = GameView::new(&game, true);
        assert_eq!(view.steps.len(), 2);
        assert!(view.steps.iter().all(|s| s.selectable));
        assert_eq!(view.steps[1].label, "Go to Step 1");
        assert!(view.steps[1].current);
        assert_eq!(view.cells[4], Some(Player::X));
        assert!(view.bot_thinking);
    }

    #[test]
    fn test_won_view() {
        let mut game = GameState::new();
        for i in [0, 4, 1, 5, 2] {
            game.place(i).unwrap();
        }
        let view = GameView::new(&game, false);
        assert_eq!(view.headline, "Won By: X");
        assert_eq!(view.winning_line, Some([0, 1, 2]));
        assert!(view.steps.iter().all(|s| !s.selectable));
    }

    #[test]
    fn test_json_shape() {
        let json = GameView::new(&GameState::new(), false).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["active_player"], "X");
        assert_eq!(value["status"], "InProgress");
        assert!(value["winning_line"].is_null());
    }
}
