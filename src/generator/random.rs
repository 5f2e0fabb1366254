use ndarray::Array2;

use super::*;

/// Uniformly random mine placement, deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let total_cells = config.total_cells();

        // full boards need no selection
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "requested {} mines but the board only fits {}, filling it",
                    config.mines,
                    total_cells
                );
            }
            return Board::from_mine_mask(Array2::from_elem(config.size().as_index(), true));
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size().as_index());
        let mut free_cells = total_cells;
        let mut mines_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let slots = mine_mask.as_slice_mut().expect("layout should be standard");
            while mines_placed < config.mines && free_cells > 0 {
                // rank-based pick among the slots still free, skipping over
                // slots that already hold a mine
                let mut place: CellCount = rng.random_range(0..free_cells);
                for (i, slot) in slots.iter_mut().enumerate() {
                    let i = i as CellCount;
                    if *slot {
                        place += 1;
                    }
                    if i == place {
                        *slot = true;
                        mines_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        Board::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(rows: Coord, cols: Coord, mines: CellCount, seed: u64) -> Board {
        RandomBoardGenerator::new(seed).generate(GameConfig::new_unchecked(rows, cols, mines))
    }

    #[test]
    fn places_the_exact_mine_count() {
        let board = generate(9, 9, 10, 7);

        assert_eq!(board.mine_count(), 10);
        assert!(board.iter().all(|cell| !cell.is_revealed() && !cell.has_flag()));
    }

    #[test]
    fn fills_the_board_when_mines_exceed_capacity() {
        let board = generate(2, 2, 9, 7);

        assert_eq!(board.mine_count(), 4);
        assert!(board.iter().all(|cell| cell.has_mine()));
    }

    #[test]
    fn is_deterministic_per_seed() {
        assert_eq!(generate(16, 16, 40, 3), generate(16, 16, 40, 3));
    }

    #[test]
    fn hints_match_a_neighbor_recount() {
        let board = generate(16, 16, 40, 11);
        let (rows, cols) = board.size();

        for row in 0..rows {
            for col in 0..cols {
                let cell = board[(row, col)];
                if cell.has_mine() {
                    assert_eq!(cell.adjacent_mines(), 0);
                    continue;
                }
                let recount = board
                    .neighbors((row, col))
                    .filter(|&pos| board[pos].has_mine())
                    .count();
                assert_eq!(usize::from(cell.adjacent_mines()), recount);
            }
        }
    }

    #[test]
    fn zero_mines_yield_an_all_safe_board() {
        let board = generate(4, 4, 0, 1);

        assert_eq!(board.mine_count(), 0);
        assert!(board.iter().all(|cell| cell.adjacent_mines() == 0));
    }
}
