//! Game state machine: applies one player decision per round and enforces
//! the win/loss rules, including the safe-first-reveal relocation.

use crate::board::{Board, BoardView};
use crate::error::{GameError, Result};
use crate::player::Decision;

/// Current state of a game. Terminal states are never left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        matches!(self, Outcome::Won | Outcome::Lost)
    }
}

/// Rule variations selectable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// When false, flag positions in a decision are silently ignored
    /// (the "Hard" mode from the mode registry).
    pub flags_allowed: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self { flags_allowed: true }
    }
}

/// One game: a board, an outcome slot, and the first-reveal bookkeeping.
/// Mutated only through [`Game::play_round`].
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rules: GameRules,
    outcome: Outcome,
    first_reveal_done: bool,
}

impl Game {
    pub fn new(board: Board, rules: GameRules) -> Self {
        Self {
            board,
            rules,
            outcome: Outcome::InProgress,
            first_reveal_done: false,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// The redacted view handed to players each round.
    pub fn hidden_view(&self) -> BoardView {
        self.board.hidden_view()
    }

    pub fn mines_remaining(&self) -> i32 {
        self.board.mines_remaining()
    }

    /// The true mine layout, released only once the game is terminal.
    pub fn revealed_mines(&self) -> Option<Vec<(usize, usize)>> {
        if self.outcome.is_finished() {
            Some(self.board.mine_positions())
        } else {
            None
        }
    }

    /// Apply one player decision.
    ///
    /// The whole decision is validated first: any out-of-bounds position
    /// rejects it with no side effects. Flags are toggled, then reveals are
    /// processed in the order supplied. The very first reveal of the game
    /// is never a loss: a mine hit there is relocated to the first
    /// unmined, unrevealed cell in row-major order. Any later mine hit
    /// loses immediately, leaving the remaining positions unprocessed.
    pub fn play_round(&mut self, decision: &Decision) -> Result<Outcome> {
        if self.outcome.is_finished() {
            return Err(GameError::GameFinished);
        }

        for &(x, y) in decision.reveal.iter().chain(decision.flag.iter()) {
            if !self.board.in_bounds(x, y) {
                return Err(GameError::OutOfBounds { x, y });
            }
        }

        if self.rules.flags_allowed {
            for &(x, y) in &decision.flag {
                self.board.toggle_flag(x, y);
            }
        }

        for &(x, y) in &decision.reveal {
            let first_reveal = !self.first_reveal_done;
            self.first_reveal_done = true;

            self.board.reveal(x, y);
            if self.board.has_mine(x, y) {
                if first_reveal {
                    self.board.relocate_first_mine(x, y);
                } else {
                    self.outcome = Outcome::Lost;
                    return Ok(self.outcome);
                }
            }
        }

        if self.board.is_cleared() {
            self.outcome = Outcome::Won;
        }

        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    fn game_with_mines(
        width: usize,
        height: usize,
        mines: &[(usize, usize)],
    ) -> Game {
        Game::new(Board::with_mines(width, height, mines).unwrap(), GameRules::default())
    }

    #[test]
    fn test_first_reveal_on_mine_relocates_instead_of_losing() {
        let mut game = game_with_mines(5, 5, &[(2, 2)]);

        let outcome = game.play_round(&Decision::reveal_one(2, 2)).unwrap();

        assert_eq!(outcome, Outcome::InProgress);
        let view = game.hidden_view();
        assert!(view.cell(2, 2).revealed);
        // The relocated mine now sits at (0,0), so its neighbors count it
        assert_eq!(view.cell(2, 2).neighbor_mines, 0);
    }

    #[test]
    fn test_second_reveal_on_mine_loses() {
        let mut game = game_with_mines(5, 5, &[(4, 4)]);

        game.play_round(&Decision::reveal_one(0, 0)).unwrap();
        let outcome = game.play_round(&Decision::reveal_one(4, 4)).unwrap();

        assert_eq!(outcome, Outcome::Lost);
    }

    #[test]
    fn test_loss_stops_processing_remaining_reveals() {
        let mut game = game_with_mines(5, 5, &[(4, 4)]);
        game.play_round(&Decision::reveal_one(0, 0)).unwrap();

        let decision = Decision {
            reveal: vec![(4, 4), (3, 3)],
            flag: Vec::new(),
        };
        assert_eq!(game.play_round(&decision).unwrap(), Outcome::Lost);

        // (3,3) came after the mine hit and must remain unrevealed
        assert!(!game.hidden_view().cell(3, 3).revealed);
    }

    #[test]
    fn test_first_reveal_window_closes_after_first_position() {
        // First round reveals a safe cell first, then a mine: the window
        // closed after the safe cell, so the mine loses the game.
        let mut game = game_with_mines(5, 5, &[(4, 4)]);

        let decision = Decision {
            reveal: vec![(0, 0), (4, 4)],
            flag: Vec::new(),
        };
        assert_eq!(game.play_round(&decision).unwrap(), Outcome::Lost);
    }

    #[test]
    fn test_win_when_all_safe_cells_revealed() {
        let mut game = game_with_mines(2, 2, &[(1, 1)]);

        let decision = Decision {
            reveal: vec![(0, 0), (1, 0), (0, 1)],
            flag: Vec::new(),
        };
        assert_eq!(game.play_round(&decision).unwrap(), Outcome::Won);
        assert_eq!(game.revealed_mines().unwrap(), vec![(1, 1)]);
    }

    #[test]
    fn test_out_of_bounds_rejects_whole_decision() {
        let mut game = game_with_mines(3, 3, &[(2, 2)]);

        let decision = Decision {
            reveal: vec![(0, 0)],
            flag: vec![(5, 5)],
        };
        let err = game.play_round(&decision).unwrap_err();
        assert_eq!(err, GameError::OutOfBounds { x: 5, y: 5 });

        // No side effects: nothing revealed, nothing flagged
        let view = game.hidden_view();
        assert!(!view.cell(0, 0).revealed);
        assert_eq!(game.mines_remaining(), 1);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_round_after_terminal_is_an_error() {
        let mut game = game_with_mines(2, 2, &[(1, 1)]);
        game.play_round(&Decision {
            reveal: vec![(0, 0), (1, 0), (0, 1)],
            flag: Vec::new(),
        })
        .unwrap();
        assert_eq!(game.outcome(), Outcome::Won);

        let err = game.play_round(&Decision::reveal_one(0, 0)).unwrap_err();
        assert_eq!(err, GameError::GameFinished);
    }

    #[test]
    fn test_empty_decision_is_a_legal_noop() {
        let mut game = game_with_mines(3, 3, &[(2, 2)]);
        let outcome = game.play_round(&Decision::default()).unwrap();
        assert_eq!(outcome, Outcome::InProgress);
    }

    #[test]
    fn test_flag_phase_toggles_and_tracks_count() {
        let mut game = game_with_mines(3, 3, &[(2, 2)]);

        game.play_round(&Decision::flag_one(0, 0)).unwrap();
        assert_eq!(game.mines_remaining(), 0);
        assert!(game.hidden_view().cell(0, 0).flagged);

        game.play_round(&Decision::flag_one(0, 0)).unwrap();
        assert_eq!(game.mines_remaining(), 1);
        assert!(!game.hidden_view().cell(0, 0).flagged);
    }

    #[test]
    fn test_hard_rules_ignore_flags() {
        let board = Board::with_mines(3, 3, &[(2, 2)]).unwrap();
        let mut game = Game::new(board, GameRules { flags_allowed: false });

        game.play_round(&Decision::flag_one(0, 0)).unwrap();
        assert!(!game.hidden_view().cell(0, 0).flagged);
        assert_eq!(game.mines_remaining(), 1);
    }

    #[test]
    fn test_mines_not_released_before_terminal() {
        let game = game_with_mines(3, 3, &[(2, 2)]);
        assert!(game.revealed_mines().is_none());
    }
}
