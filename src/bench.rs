//! Batch benchmark for AI players.
//!
//! Runs many independent solver games back to back against the no-op
//! renderer and aggregates win rate and timing. Each run gets its own
//! seeded RNG so a fixed base seed reproduces the whole batch.

use std::io;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::board::Board;
use crate::game::{Game, GameRules, Outcome};
use crate::player::Player;
use crate::render::DudRenderer;
use crate::solver::SimpleAi;

/// Configuration for a benchmark batch.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of games to play
    pub runs: u32,

    /// Board width
    pub width: usize,

    /// Board height
    pub height: usize,

    /// Mines per board
    pub mines: usize,

    /// Base seed for reproducibility (None = random per run)
    pub seed: Option<u64>,

    /// Print a progress line every `progress_every` runs (0 = silent)
    pub progress_every: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            width: 16,
            height: 16,
            mines: 40,
            seed: None,
            progress_every: 100,
        }
    }
}

/// Outcome and timing of one benchmark game.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunRecord {
    pub won: bool,
    pub rounds: u32,
    pub duration_us: u64,
}

/// Aggregated results of a benchmark batch.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub runs: u32,
    pub width: usize,
    pub height: usize,
    pub mines: usize,
    pub seed: Option<u64>,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub avg_rounds: f64,
    pub avg_win_ms: Option<f64>,
    pub avg_loss_ms: Option<f64>,
    pub total_ms: f64,
}

impl BenchReport {
    fn from_records(config: &BenchConfig, records: &[RunRecord]) -> Self {
        let wins = records.iter().filter(|r| r.won).count() as u32;
        let losses = records.len() as u32 - wins;

        let avg_ms = |won: bool| {
            let matching: Vec<_> = records.iter().filter(|r| r.won == won).collect();
            if matching.is_empty() {
                None
            } else {
                let total: u64 = matching.iter().map(|r| r.duration_us).sum();
                Some(total as f64 / matching.len() as f64 / 1000.0)
            }
        };

        let total_rounds: u64 = records.iter().map(|r| r.rounds as u64).sum();
        let total_us: u64 = records.iter().map(|r| r.duration_us).sum();

        Self {
            runs: config.runs,
            width: config.width,
            height: config.height,
            mines: config.mines,
            seed: config.seed,
            wins,
            losses,
            win_rate: wins as f64 / records.len().max(1) as f64,
            avg_rounds: total_rounds as f64 / records.len().max(1) as f64,
            avg_win_ms: avg_ms(true),
            avg_loss_ms: avg_ms(false),
            total_ms: total_us as f64 / 1000.0,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════\n");
        report.push_str("              AI BENCHMARK REPORT\n");
        report.push_str("═══════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Board: {}x{} with {} mines, {} runs\n",
            self.width, self.height, self.mines, self.runs
        ));
        if let Some(seed) = self.seed {
            report.push_str(&format!("Seed:  {}\n", seed));
        }
        report.push('\n');

        report.push_str(&format!(
            "Winrate:    {:.2}% ({} wins / {} losses)\n",
            self.win_rate * 100.0,
            self.wins,
            self.losses
        ));
        report.push_str(&format!("Avg rounds: {:.1}\n", self.avg_rounds));
        if let Some(ms) = self.avg_win_ms {
            report.push_str(&format!("Avg win:    {:.3}ms\n", ms));
        }
        if let Some(ms) = self.avg_loss_ms {
            report.push_str(&format!("Avg loss:   {:.3}ms\n", ms));
        }
        report.push_str(&format!("Total time: {:.1}ms\n", self.total_ms));

        report.push_str("\n═══════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Play one full game with the given player and a silent renderer.
/// Returns the outcome and the number of rounds played.
pub fn play_headless(game: &mut Game, player: &mut dyn Player) -> io::Result<(Outcome, u32)> {
    let mut rounds = 0u32;

    while game.outcome() == Outcome::InProgress {
        let view = game.hidden_view();
        let decision =
            player.decide(&view, game.mines_remaining(), game.rules(), &mut DudRenderer)?;

        let Some(decision) = decision else { break };
        // A stalled player would loop forever on an unchanged board
        if decision.is_empty() {
            break;
        }

        game.play_round(&decision)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        rounds += 1;

        // A non-empty decision the rules dropped wholesale also stalls:
        // the view is unchanged, so the player would only re-derive it.
        if game.outcome() == Outcome::InProgress && game.hidden_view() == view {
            break;
        }
    }

    Ok((game.outcome(), rounds))
}

/// Run the full benchmark and return a report.
pub fn run_benchmark(config: &BenchConfig) -> io::Result<BenchReport> {
    let mut records = Vec::with_capacity(config.runs as usize);

    for run_idx in 0..config.runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let board = Board::new(config.width, config.height, config.mines, &mut rng)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        let mut game = Game::new(board, GameRules::default());
        let mut player = SimpleAi::seeded(rng.gen());

        let start = Instant::now();
        let (outcome, rounds) = play_headless(&mut game, &mut player)?;
        let duration_us = start.elapsed().as_micros() as u64;

        records.push(RunRecord {
            won: outcome == Outcome::Won,
            rounds,
            duration_us,
        });

        if config.progress_every > 0 && (run_idx + 1) % config.progress_every == 0 {
            let wins = records.iter().filter(|r| r.won).count();
            println!(
                "{}/{} games done, winrate so far {:.2}%",
                run_idx + 1,
                config.runs,
                wins as f64 / records.len() as f64 * 100.0
            );
        }
    }

    Ok(BenchReport::from_records(config, &records))
}
