#![no_std]

extern crate alloc;

use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use outcome::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod outcome;
mod types;

/// Parameters for a new game, validated at the boundary.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Rejects empty dimensions; a mine count beyond the cell count is
    /// clamped, not rejected.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidSize);
        }
        let mines = mines.min(area(rows, cols));
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn size(&self) -> Pos {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.rows, self.cols)
    }
}

/// Outcome of a flag toggle request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    /// Whether this outcome changed the board.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
        }
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome changed the board.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Exploded => true,
            Won => true,
        }
    }
}

/// Merges per-cell outcomes when a chord opens several neighbors.
impl BitOr for RevealOutcome {
    type Output = RevealOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealOutcome::*;
        match (self, rhs) {
            // a detonation outranks everything
            (Exploded, _) => Exploded,
            (_, Exploded) => Exploded,
            // then the win
            (Won, _) => Won,
            (_, Won) => Won,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (NoChange, NoChange) => NoChange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(GameConfig::new(0, 5, 1), Err(GameError::InvalidSize));
        assert_eq!(GameConfig::new(5, 0, 1), Err(GameError::InvalidSize));
    }

    #[test]
    fn config_clamps_the_mine_count_to_the_cell_count() {
        let config = GameConfig::new(2, 2, 99).unwrap();

        assert_eq!(config.mines, 4);
        assert_eq!(config.total_cells(), 4);
    }

    #[test]
    fn config_accepts_a_mineless_board() {
        assert_eq!(GameConfig::new(3, 3, 0).unwrap().mines, 0);
    }

    #[test]
    fn reveal_outcome_merge_ranks_explosions_first() {
        use RevealOutcome::*;

        assert_eq!(Exploded | Won, Exploded);
        assert_eq!(Won | Revealed, Won);
        assert_eq!(Revealed | NoChange, Revealed);
        assert_eq!(NoChange | NoChange, NoChange);
    }
}
