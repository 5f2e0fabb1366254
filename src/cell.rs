use serde::{Deserialize, Serialize};

/// Per-cell state stored by the board.
///
/// `adjacent_mines` is fixed at generation time; the remaining attributes
/// change as the player reveals and flags cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) mine: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) exploded: bool,
}

impl Cell {
    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn has_flag(self) -> bool {
        self.flagged
    }

    pub const fn has_mine(self) -> bool {
        self.mine
    }

    /// Number of mined neighbors; 0 by convention for mined cells.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    /// True only for the single mine whose reveal ended the game.
    pub const fn is_exploded(self) -> bool {
        self.exploded
    }
}
