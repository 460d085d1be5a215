//! Rule-based heuristic AI player.
//!
//! Deduction runs as ordered passes over the redacted view; the first pass
//! that produces any action wins the round. No probability estimation is
//! attempted — when the rules are exhausted the solver guesses.

use std::io;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{neighbors, BoardView};
use crate::game::GameRules;
use crate::player::{Decision, Player};
use crate::render::Renderer;

/// Collect every unrevealed, unflagged neighbor of every revealed zero
/// cell. Shared by the solver's first pass and the human player's
/// auto-expansion.
pub fn zero_expansion(view: &BoardView) -> Vec<(usize, usize)> {
    let mut targets = Vec::new();

    for y in 0..view.height() {
        for x in 0..view.width() {
            let cell = view.cell(x, y);
            if !cell.revealed || cell.neighbor_mines != 0 {
                continue;
            }
            for (nx, ny) in neighbors(x, y, view.width(), view.height()) {
                let neighbor = view.cell(nx, ny);
                if !neighbor.revealed && !neighbor.flagged && !targets.contains(&(nx, ny)) {
                    targets.push((nx, ny));
                }
            }
        }
    }

    targets
}

/// Unrevealed, unflagged neighbors of (x, y).
fn unknown_neighbors(view: &BoardView, x: usize, y: usize) -> Vec<(usize, usize)> {
    neighbors(x, y, view.width(), view.height())
        .into_iter()
        .filter(|&(nx, ny)| {
            let n = view.cell(nx, ny);
            !n.revealed && !n.flagged
        })
        .collect()
}

/// Rule-based solver with its own seeded RNG for the fallback guess.
pub struct SimpleAi {
    rng: StdRng,
}

impl SimpleAi {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pass 2: first revealed cell (row-major) whose count is already
    /// satisfied by adjacent flags and that still has unknown neighbors —
    /// all of those neighbors are safe to reveal.
    fn satisfied_count_reveal(view: &BoardView) -> Option<Decision> {
        for y in 0..view.height() {
            for x in 0..view.width() {
                let cell = view.cell(x, y);
                if !cell.revealed {
                    continue;
                }
                let flagged = neighbors(x, y, view.width(), view.height())
                    .into_iter()
                    .filter(|&(nx, ny)| view.cell(nx, ny).flagged)
                    .count();
                if cell.neighbor_mines as usize != flagged {
                    continue;
                }
                let targets = unknown_neighbors(view, x, y);
                if !targets.is_empty() {
                    return Some(Decision {
                        reveal: targets,
                        flag: Vec::new(),
                    });
                }
            }
        }
        None
    }

    /// Pass 3: first revealed cell whose count equals its total unrevealed
    /// neighbor count (flagged or not) — every unknown neighbor must be a
    /// mine, so flag one of them.
    fn forced_flag(view: &BoardView) -> Option<Decision> {
        for y in 0..view.height() {
            for x in 0..view.width() {
                let cell = view.cell(x, y);
                if !cell.revealed {
                    continue;
                }
                let unrevealed = neighbors(x, y, view.width(), view.height())
                    .into_iter()
                    .filter(|&(nx, ny)| !view.cell(nx, ny).revealed)
                    .count();
                if unrevealed == 0 || cell.neighbor_mines as usize != unrevealed {
                    continue;
                }
                if let Some(&(nx, ny)) = unknown_neighbors(view, x, y).first() {
                    return Some(Decision::flag_one(nx, ny));
                }
            }
        }
        None
    }

    /// Pass 4: uniformly random unrevealed, unflagged cell, found by
    /// rejection sampling.
    fn random_guess(&mut self, view: &BoardView) -> Decision {
        if !view.any_guessable() {
            return Decision::default();
        }

        loop {
            let x = self.rng.gen_range(0..view.width());
            let y = self.rng.gen_range(0..view.height());
            let cell = view.cell(x, y);
            if !cell.revealed && !cell.flagged {
                return Decision::reveal_one(x, y);
            }
        }
    }
}

impl Default for SimpleAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for SimpleAi {
    fn name(&self) -> &'static str {
        "Simple AI"
    }

    fn decide(
        &mut self,
        view: &BoardView,
        _remaining_mines: i32,
        rules: GameRules,
        ui: &mut dyn Renderer,
    ) -> io::Result<Option<Decision>> {
        // Fixed deterministic opening: the center cell.
        if !view.any_revealed() {
            return Ok(Some(Decision::reveal_one(
                view.width() / 2,
                view.height() / 2,
            )));
        }

        let expand = zero_expansion(view);
        if !expand.is_empty() {
            return Ok(Some(Decision {
                reveal: expand,
                flag: Vec::new(),
            }));
        }

        if let Some(decision) = Self::satisfied_count_reveal(view) {
            return Ok(Some(decision));
        }

        // A game that drops flags would hand back the unchanged view and
        // this pass would re-derive the same flag every round.
        if rules.flags_allowed {
            if let Some(decision) = Self::forced_flag(view) {
                return Ok(Some(decision));
            }
        }

        ui.dialog(&["I don't know what to do!"])?;
        Ok(Some(self.random_guess(view)))
    }
}
