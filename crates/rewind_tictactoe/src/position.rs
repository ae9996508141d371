//! Board squares, addressed by name or by row-major index.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A square on the board. Discriminants are the row-major indices 0-8.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[repr(u8)]
pub enum Position {
    /// Index 0
    TopLeft = 0,
    /// Index 1
    TopCenter,
    /// Index 2
    TopRight,
    /// Index 3
    MiddleLeft,
    /// Index 4
    Center,
    /// Index 5
    MiddleRight,
    /// Index 6
    BottomLeft,
    /// Index 7
    BottomCenter,
    /// Index 8
    BottomRight,
}

impl Position {
    /// Every square in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Row-major board index.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The square at `index`, if it is on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Accepts either an index (`"4"`) or a kebab-case name (`"center"`,
    /// `"Top-Left"`).
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Position::from_str(s).ok(),
        }
    }

    /// Empty squares of `board`, in board order.
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Position::iter().filter(|pos| board.is_empty(*pos)).collect()
    }
}
