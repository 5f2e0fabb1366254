use serde::{Deserialize, Serialize};

use crate::Board;

/// Derived classification of game progress.
///
/// Never stored by the engine; recomputed from board contents on every
/// query.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameOutcome {
    Playing,
    Won,
    Lost,
}

impl GameOutcome {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::Playing
    }
}

/// Recomputes the outcome from board contents alone.
///
/// An exploded cell means a loss; a board whose every non-mine cell is
/// revealed is won, regardless of the mines' reveal state. A board with no
/// cells counts as still playing.
pub fn evaluate(board: &Board) -> GameOutcome {
    if board.is_empty() {
        return GameOutcome::Playing;
    }

    if board.iter().any(|cell| cell.is_exploded()) {
        return GameOutcome::Lost;
    }

    let all_safe_revealed = board
        .iter()
        .filter(|cell| !cell.has_mine())
        .all(|cell| cell.is_revealed());
    if all_safe_revealed {
        GameOutcome::Won
    } else {
        GameOutcome::Playing
    }
}
