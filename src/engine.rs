use alloc::collections::{BTreeSet, VecDeque};
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the live board and applies player commands to it.
///
/// The engine holds exactly one board at a time; `new_game` replaces it
/// wholesale. The outcome is never stored, it is recomputed from board
/// contents on every query. Requests that cannot take effect (terminal
/// board, re-reveals, flagged targets) are benign no-ops; only out-of-range
/// coordinates are errors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    revision: u64,
}

impl GameEngine {
    /// Engine with no board yet; the outcome reads `Playing`.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            revision: 0,
        }
    }

    /// Replaces the board with a freshly generated one.
    ///
    /// Generation is deterministic for a given seed; callers decide where
    /// the seed comes from (wall clock, entropy, a replay file).
    pub fn new_game(&mut self, config: GameConfig, seed: u64) {
        self.install_board(RandomBoardGenerator::new(seed).generate(config));
    }

    /// Replaces the board with a prebuilt one, e.g. a fixed mine layout.
    pub fn new_game_with(&mut self, board: Board) {
        self.install_board(board);
    }

    fn install_board(&mut self, board: Board) {
        log::debug!(
            "new game: {}x{} with {} mines",
            board.rows(),
            board.cols(),
            board.mine_count()
        );
        self.board = board;
        self.revision += 1;
    }

    /// Read-only view of the live board; clone it for a snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Derived outcome, recomputed on every call.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Bumped on every accepted mutation, including `new_game`; observers
    /// can poll it for change detection.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub fn size(&self) -> Pos {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    /// How many mines have not been flagged yet; negative when overflagged.
    pub fn mines_left(&self) -> isize {
        (self.board.mine_count() as isize) - (self.board.flag_count() as isize)
    }

    /// Position of the mine that ended the game, if any.
    pub fn exploded_at(&self) -> Option<Pos> {
        self.board.exploded_at()
    }

    /// Reveals a cell, flood-filling outward from zero-hint cells.
    pub fn reveal(&mut self, pos: Pos) -> Result<RevealOutcome> {
        let pos = self.board.validate_pos(pos)?;

        let outcome = self.reveal_cell(pos);
        if outcome.has_update() {
            self.revision += 1;
        }
        Ok(outcome)
    }

    /// Opens every neighbor of a revealed cell whose hint is fully
    /// accounted for by flags; behaves like `reveal` on any other cell.
    ///
    /// A wrong flag detonates the uncovered mine, exactly as a direct
    /// reveal of it would.
    pub fn chord_reveal(&mut self, pos: Pos) -> Result<RevealOutcome> {
        let pos = self.board.validate_pos(pos)?;

        let cell = self.board.cell(pos);
        let outcome = match cell.is_revealed() {
            true if cell.adjacent_mines() == self.count_flagged_neighbors(pos) => self
                .board
                .neighbors(pos)
                .map(|neighbor| self.reveal_cell(neighbor))
                .reduce(BitOr::bitor)
                .unwrap_or(RevealOutcome::NoChange),
            _ => self.reveal_cell(pos),
        };

        if outcome.has_update() {
            self.revision += 1;
        }
        Ok(outcome)
    }

    /// Toggles the flag marker on an unrevealed cell.
    pub fn toggle_flag(&mut self, pos: Pos) -> Result<FlagOutcome> {
        let pos = self.board.validate_pos(pos)?;

        if self.board.outcome().is_finished() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = self.board.cell_mut(pos);
        if cell.revealed {
            return Ok(FlagOutcome::NoChange);
        }

        cell.flagged = !cell.flagged;
        self.revision += 1;
        Ok(FlagOutcome::Toggled)
    }

    fn reveal_cell(&mut self, pos: Pos) -> RevealOutcome {
        use RevealOutcome::*;

        if self.board.outcome().is_finished() {
            return NoChange;
        }

        let cell = self.board.cell(pos);
        if cell.is_revealed() || cell.has_flag() {
            return NoChange;
        }

        if cell.has_mine() {
            log::debug!("mine hit at {:?}", pos);
            self.board.cell_mut(pos).exploded = true;
            self.board.reveal_all_mines();
            return Exploded;
        }

        self.flood_reveal(pos);

        if self.board.outcome() == GameOutcome::Won {
            Won
        } else {
            Revealed
        }
    }

    /// Breadth-first expansion from a safe cell: zero-hint cells propagate
    /// to their neighbors, numbered cells seal the border, flags block.
    ///
    /// An explicit work queue keeps the expansion independent of call-stack
    /// limits; each cell is enqueued at most once.
    fn flood_reveal(&mut self, start: Pos) {
        let mut visited = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);

        while let Some(pos) = queue.pop_front() {
            let cell = self.board.cell(pos);
            if cell.is_revealed() || cell.has_flag() {
                continue;
            }

            self.board.cell_mut(pos).revealed = true;
            log::trace!("revealed {:?}, hint {}", pos, cell.adjacent_mines());

            if cell.adjacent_mines() == 0 {
                queue.extend(
                    self.board
                        .neighbors(pos)
                        .filter(|&next| {
                            let next_cell = self.board.cell(next);
                            !next_cell.is_revealed() && !next_cell.has_flag()
                        })
                        .filter(|&next| visited.insert(next)),
                );
            }
        }
    }

    fn count_flagged_neighbors(&self, pos: Pos) -> u8 {
        self.board
            .neighbors(pos)
            .filter(|&next| self.board.cell(next).has_flag())
            .count()
            .try_into()
            .unwrap()
    }
}
