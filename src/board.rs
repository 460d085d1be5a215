//! Minefield board: mine layout, per-cell state, and the redacted view
//! handed to players.

use rand::Rng;

use crate::error::{GameError, Result};

/// A single cell of the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cell {
    /// Whether this cell contains a mine.
    pub has_mine: bool,
    /// Whether this cell has been revealed.
    pub revealed: bool,
    /// Whether this cell has been flagged.
    pub flagged: bool,
    /// Number of adjacent mines (0-8).
    pub neighbor_mines: u8,
}

/// Per-cell state as seen by a player: no mine data, and `-1` in place of
/// the neighbor count while the cell is unrevealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCell {
    /// Adjacent mine count, or -1 while the cell is unrevealed.
    pub neighbor_mines: i8,
    pub revealed: bool,
    pub flagged: bool,
}

/// Read-only projection of a board with mine positions stripped. This is
/// the only view a player ever receives while a game is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    width: usize,
    height: usize,
    cells: Vec<ViewCell>,
}

impl BoardView {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> ViewCell {
        self.cells[y * self.width + x]
    }

    /// Whether any cell has been revealed yet.
    pub fn any_revealed(&self) -> bool {
        self.cells.iter().any(|c| c.revealed)
    }

    /// Whether any cell is still unrevealed and unflagged.
    pub fn any_guessable(&self) -> bool {
        self.cells.iter().any(|c| !c.revealed && !c.flagged)
    }
}

/// Get valid neighbor coordinates for a cell.
///
/// Returns (x, y) pairs for all in-bounds neighbors (up to 8 directions).
pub fn neighbors(x: usize, y: usize, width: usize, height: usize) -> Vec<(usize, usize)> {
    let mut result = Vec::with_capacity(8);

    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let nx = x as i32 + dx;
            let ny = y as i32 + dy;

            if nx >= 0 && nx < width as i32 && ny >= 0 && ny < height as i32 {
                result.push((nx as usize, ny as usize));
            }
        }
    }

    result
}

/// The minefield: grid dimensions, mine layout, and per-cell state. Cells
/// are stored in a flat buffer indexed `y * width + x`.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    mine_count: usize,
    flags_placed: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with `mine_count` mines placed uniformly at random.
    ///
    /// Placement samples (x, y) pairs and rejects duplicates until the
    /// requested number of distinct cells is mined, then computes every
    /// neighbor count.
    pub fn new<R: Rng>(
        width: usize,
        height: usize,
        mine_count: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let mut board = Self::empty(width, height, mine_count)?;

        let mut placed = 0;
        while placed < mine_count {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let cell = &mut board.cells[y * width + x];
            if !cell.has_mine {
                cell.has_mine = true;
                placed += 1;
            }
        }

        board.recompute_neighbor_counts();
        Ok(board)
    }

    /// Create a board with an explicit mine layout. Intended for tests and
    /// fixed puzzles; positions must be in bounds and are deduplicated.
    pub fn with_mines(
        width: usize,
        height: usize,
        mines: &[(usize, usize)],
    ) -> Result<Self> {
        let mut board = Self::empty(width, height, mines.len())?;

        for &(x, y) in mines {
            if !board.in_bounds(x, y) {
                return Err(GameError::OutOfBounds { x, y });
            }
            board.cells[y * width + x].has_mine = true;
        }

        board.mine_count = board.cells.iter().filter(|c| c.has_mine).count();
        board.recompute_neighbor_counts();
        Ok(board)
    }

    fn empty(width: usize, height: usize, mine_count: usize) -> Result<Self> {
        if width == 0 || height == 0 || mine_count >= width * height {
            return Err(GameError::InvalidConfiguration {
                width,
                height,
                mines: mine_count,
            });
        }

        Ok(Self {
            width,
            height,
            mine_count,
            flags_placed: 0,
            cells: vec![Cell::default(); width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The configured mine count. Not adjusted by the saturated-board
    /// relocation edge case (see [`Board::relocate_first_mine`]).
    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn flags_placed(&self) -> usize {
        self.flags_placed
    }

    /// Mines remaining to be flagged (configured mines minus flags placed).
    /// Negative if more flags than mines have been placed.
    pub fn mines_remaining(&self) -> i32 {
        self.mine_count as i32 - self.flags_placed as i32
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.width + x]
    }

    pub fn has_mine(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.width + x].has_mine
    }

    /// Count mined cells among the up-to-8 grid-clipped neighbors of (x, y).
    pub fn neighbor_mine_count(&self, x: usize, y: usize) -> u8 {
        neighbors(x, y, self.width, self.height)
            .into_iter()
            .filter(|&(nx, ny)| self.cells[ny * self.width + nx].has_mine)
            .count() as u8
    }

    fn recompute_neighbor_counts(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let count = self.neighbor_mine_count(x, y);
                self.cells[y * self.width + x].neighbor_mines = count;
            }
        }
    }

    /// Toggle the flag on an unrevealed cell, keeping `flags_placed` in
    /// sync. Flagging a revealed cell is a no-op. Returns whether the flag
    /// state changed.
    pub fn toggle_flag(&mut self, x: usize, y: usize) -> bool {
        let cell = &mut self.cells[y * self.width + x];
        if cell.revealed {
            return false;
        }

        cell.flagged = !cell.flagged;
        if cell.flagged {
            self.flags_placed += 1;
        } else {
            self.flags_placed -= 1;
        }
        true
    }

    /// Mark a cell revealed. Idempotent. A flag on the cell is cleared so
    /// that no cell is ever both revealed and flagged.
    pub fn reveal(&mut self, x: usize, y: usize) {
        let cell = &mut self.cells[y * self.width + x];
        if cell.flagged {
            cell.flagged = false;
            self.flags_placed -= 1;
        }
        cell.revealed = true;
    }

    /// Move the mine at (x, y) to the first cell in row-major order that is
    /// neither mined nor revealed, then recompute every neighbor count.
    ///
    /// Used only by the safe-first-reveal rule. On a board saturated with
    /// mines and revealed cells no replacement target exists and the mine
    /// is simply removed; the configured mine count is not adjusted.
    pub fn relocate_first_mine(&mut self, x: usize, y: usize) {
        self.cells[y * self.width + x].has_mine = false;

        'scan: for ty in 0..self.height {
            for tx in 0..self.width {
                let cell = &mut self.cells[ty * self.width + tx];
                if !cell.has_mine && !cell.revealed {
                    cell.has_mine = true;
                    break 'scan;
                }
            }
        }

        self.recompute_neighbor_counts();
    }

    /// Whether every non-mined cell has been revealed (the win condition).
    /// Mined cells need not be revealed or flagged.
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|c| c.has_mine || c.revealed)
    }

    /// Positions of every mined cell.
    pub fn mine_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(self.mine_count);
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x].has_mine {
                    positions.push((x, y));
                }
            }
        }
        positions
    }

    /// The redacted projection handed to players: revealed cells carry
    /// their true neighbor count, unrevealed cells carry -1, flags are
    /// preserved, and no mine positions are exposed.
    pub fn hidden_view(&self) -> BoardView {
        BoardView {
            width: self.width,
            height: self.height,
            cells: self
                .cells
                .iter()
                .map(|c| ViewCell {
                    neighbor_mines: if c.revealed {
                        c.neighbor_mines as i8
                    } else {
                        -1
                    },
                    revealed: c.revealed,
                    flagged: c.flagged,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neighbors_center() {
        let ns = neighbors(4, 4, 9, 9);
        assert_eq!(ns.len(), 8);

        let expected = vec![
            (3, 3),
            (4, 3),
            (5, 3),
            (3, 4),
            (5, 4),
            (3, 5),
            (4, 5),
            (5, 5),
        ];
        for pos in expected {
            assert!(ns.contains(&pos), "Missing neighbor {:?}", pos);
        }
    }

    #[test]
    fn test_neighbors_corner_and_edge() {
        // Top-left corner has 3 neighbors
        let ns = neighbors(0, 0, 9, 9);
        assert_eq!(ns.len(), 3);
        assert!(ns.contains(&(1, 0)));
        assert!(ns.contains(&(0, 1)));
        assert!(ns.contains(&(1, 1)));

        // Bottom-right corner has 3 neighbors
        assert_eq!(neighbors(8, 8, 9, 9).len(), 3);

        // Edges (not corners) have 5 neighbors
        assert_eq!(neighbors(4, 0, 9, 9).len(), 5);
        assert_eq!(neighbors(0, 4, 9, 9).len(), 5);
    }

    #[test]
    fn test_new_rejects_bad_configuration() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(Board::new(0, 5, 1, &mut rng).is_err());
        assert!(Board::new(5, 0, 1, &mut rng).is_err());
        // mine_count == width * height leaves no safe cell
        assert!(Board::new(1, 1, 1, &mut rng).is_err());
        assert!(Board::new(3, 3, 9, &mut rng).is_err());
    }

    #[test]
    fn test_new_places_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::new(9, 9, 10, &mut rng).unwrap();

        let placed = board
            .mine_positions()
            .len();
        assert_eq!(placed, 10);
        assert_eq!(board.mine_count(), 10);
    }

    #[test]
    fn test_neighbor_counts_match_layout() {
        // Mines at (0,0), (1,0), (0,1) form an L in the top-left corner.
        let board = Board::with_mines(9, 9, &[(0, 0), (1, 0), (0, 1)]).unwrap();

        assert_eq!(board.cell(1, 1).neighbor_mines, 3);
        assert_eq!(board.cell(2, 0).neighbor_mines, 1);
        assert_eq!(board.cell(0, 2).neighbor_mines, 1);
        assert_eq!(board.cell(2, 2).neighbor_mines, 0);
    }

    #[test]
    fn test_neighbor_counts_property_random_board() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::new(12, 8, 20, &mut rng).unwrap();

        for y in 0..board.height() {
            for x in 0..board.width() {
                assert_eq!(
                    board.cell(x, y).neighbor_mines,
                    board.neighbor_mine_count(x, y),
                    "count mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_flag_toggle_is_pairwise_idempotent() {
        let mut board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();

        assert_eq!(board.flags_placed(), 0);
        assert!(board.toggle_flag(0, 0));
        assert_eq!(board.flags_placed(), 1);
        assert!(board.cell(0, 0).flagged);

        assert!(board.toggle_flag(0, 0));
        assert_eq!(board.flags_placed(), 0);
        assert!(!board.cell(0, 0).flagged);
    }

    #[test]
    fn test_flagging_revealed_cell_is_noop() {
        let mut board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();
        board.reveal(0, 0);

        assert!(!board.toggle_flag(0, 0));
        assert!(!board.cell(0, 0).flagged);
        assert_eq!(board.flags_placed(), 0);
    }

    #[test]
    fn test_reveal_clears_flag() {
        let mut board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();
        board.toggle_flag(1, 1);
        assert_eq!(board.flags_placed(), 1);

        board.reveal(1, 1);
        let cell = board.cell(1, 1);
        assert!(cell.revealed);
        assert!(!cell.flagged);
        assert_eq!(board.flags_placed(), 0);
    }

    #[test]
    fn test_hidden_view_redacts_unrevealed_cells() {
        let mut board = Board::with_mines(3, 3, &[(0, 0)]).unwrap();
        board.reveal(1, 1);
        board.toggle_flag(0, 0);

        let view = board.hidden_view();
        assert_eq!(view.cell(1, 1).neighbor_mines, 1);
        assert!(view.cell(1, 1).revealed);

        // Unrevealed cells report -1, including the mined one
        assert_eq!(view.cell(0, 0).neighbor_mines, -1);
        assert!(view.cell(0, 0).flagged);
        assert_eq!(view.cell(2, 2).neighbor_mines, -1);
    }

    #[test]
    fn test_relocate_moves_mine_to_first_free_cell() {
        let mut board = Board::with_mines(5, 5, &[(2, 2)]).unwrap();
        board.reveal(2, 2);
        board.relocate_first_mine(2, 2);

        // (0,0) is the first unmined, unrevealed cell in row-major order
        assert!(!board.has_mine(2, 2));
        assert!(board.has_mine(0, 0));
        assert_eq!(board.mine_positions().len(), 1);

        // Counts were recomputed for the new layout
        assert_eq!(board.cell(1, 1).neighbor_mines, 1);
        assert_eq!(board.cell(2, 2).neighbor_mines, 0);
    }

    #[test]
    fn test_relocate_skips_revealed_cells() {
        let mut board = Board::with_mines(2, 2, &[(0, 0)]).unwrap();
        board.reveal(0, 1);
        board.reveal(0, 0);
        board.relocate_first_mine(0, 0);

        // (1,0) is the first candidate after the revealed (0,0)
        assert!(board.has_mine(1, 0));
        assert!(!board.has_mine(0, 0));
        assert!(!board.has_mine(0, 1));
    }

    #[test]
    fn test_relocate_on_saturated_board_drops_mine() {
        // Every cell except the mined one is revealed: no target exists.
        let mut board = Board::with_mines(2, 1, &[(0, 0)]).unwrap();
        board.reveal(1, 0);
        board.reveal(0, 0);
        board.relocate_first_mine(0, 0);

        assert!(board.mine_positions().is_empty());
        // The configured count is deliberately left untouched
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn test_is_cleared() {
        let mut board = Board::with_mines(2, 2, &[(1, 1)]).unwrap();
        assert!(!board.is_cleared());

        board.reveal(0, 0);
        board.reveal(1, 0);
        assert!(!board.is_cleared());

        board.reveal(0, 1);
        assert!(board.is_cleared());
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        let b1 = Board::new(9, 9, 10, &mut rng1).unwrap();
        let b2 = Board::new(9, 9, 10, &mut rng2).unwrap();

        assert_eq!(b1.mine_positions(), b2.mine_positions());
    }
}
