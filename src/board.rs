use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells, shape fixed at creation.
///
/// Boards are replaced wholesale by a new game and cloned wholesale for
/// snapshots, so observers always see an internally consistent state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Board with no cells, the engine state before the first game.
    pub fn empty() -> Self {
        Self {
            cells: Array2::default([0, 0]),
        }
    }

    /// Builds a board from a mine mask, computing every hint up front.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let dim = mine_mask.dim();
        let mut cells: Array2<Cell> = Array2::default([dim.0, dim.1]);

        for ((row, col), &mine) in mine_mask.indexed_iter() {
            let pos: Pos = (row.try_into().unwrap(), col.try_into().unwrap());
            let cell = &mut cells[[row, col]];
            cell.mine = mine;
            cell.adjacent_mines = if mine {
                0
            } else {
                mine_mask
                    .neighbors(pos)
                    .filter(|&next| mine_mask[next.as_index()])
                    .count()
                    .try_into()
                    .unwrap()
            };
        }

        Self { cells }
    }

    /// Builds a board with mines at exactly the given positions.
    pub fn from_mine_coords(size: Pos, mine_coords: &[Pos]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.as_index());

        for &pos in mine_coords {
            if pos.0 >= size.0 || pos.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[pos.as_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Pos {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        let size = self.size();
        if pos.0 < size.0 && pos.1 < size.1 {
            Ok(pos)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[pos.as_index()]
    }

    pub(crate) fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        &mut self.cells[pos.as_index()]
    }

    pub fn neighbors(&self, pos: Pos) -> NeighborIter {
        self.cells.neighbors(pos)
    }

    /// Iterates all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count(|cell| cell.mine)
    }

    pub fn flag_count(&self) -> CellCount {
        self.count(|cell| cell.flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count(|cell| cell.revealed)
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    /// Derived classification of game progress, recomputed on every call.
    pub fn outcome(&self) -> GameOutcome {
        evaluate(self)
    }

    /// Position of the mine that ended the game, if any.
    pub fn exploded_at(&self) -> Option<Pos> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.exploded)
            .map(|((row, col), _)| (row.try_into().unwrap(), col.try_into().unwrap()))
    }

    /// Uncovers every mine after a loss; a flag on a mine is superseded by
    /// the reveal, keeping flags and reveals mutually exclusive.
    pub(crate) fn reveal_all_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.mine {
                cell.revealed = true;
                cell.flagged = false;
            }
        }
    }

    fn count(&self, pred: impl Fn(Cell) -> bool) -> CellCount {
        self.iter().filter(|&cell| pred(cell)).count().try_into().unwrap()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.as_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_computes_hints() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();

        assert_eq!(board[(1, 1)].adjacent_mines(), 2);
        assert_eq!(board[(0, 1)].adjacent_mines(), 1);
        assert_eq!(board[(2, 0)].adjacent_mines(), 0);
    }

    #[test]
    fn mined_cells_keep_a_zero_hint() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (0, 1)]).unwrap();

        assert!(board[(0, 0)].has_mine());
        assert_eq!(board[(0, 0)].adjacent_mines(), 0);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds_mines() {
        let result = Board::from_mine_coords((2, 2), &[(0, 0), (2, 0)]);

        assert_eq!(result, Err(GameError::OutOfBounds));
    }

    #[test]
    fn counts_are_derived_from_cell_contents() {
        let board = Board::from_mine_coords((3, 3), &[(0, 0), (1, 2)]).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 7);
        assert_eq!(board.flag_count(), 0);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn validate_pos_bounds_both_axes() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!(board.validate_pos((1, 2)), Ok((1, 2)));
        assert_eq!(board.validate_pos((2, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.validate_pos((0, 3)), Err(GameError::OutOfBounds));
    }

    #[test]
    fn empty_board_has_no_valid_positions() {
        let board = Board::empty();

        assert!(board.is_empty());
        assert_eq!(board.validate_pos((0, 0)), Err(GameError::OutOfBounds));
    }
}
