//! Static registries for the menu: game modes, players, and board
//! difficulty presets.

use serde::{Deserialize, Serialize};

use crate::game::GameRules;
use crate::player::{HumanPlayer, Player};
use crate::solver::SimpleAi;

/// A selectable game mode.
pub struct ModeSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub rules: GameRules,
}

pub const MODES: &[ModeSpec] = &[
    ModeSpec {
        name: "Default",
        description: "Classic minesweeper. The first reveal is always safe.",
        rules: GameRules { flags_allowed: true },
    },
    ModeSpec {
        name: "Hard",
        description: "A harder version of minesweeper - no flags.",
        rules: GameRules {
            flags_allowed: false,
        },
    },
];

/// A selectable player, with a factory for a fresh instance per game.
pub struct PlayerSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub build: fn() -> Box<dyn Player>,
}

fn build_human() -> Box<dyn Player> {
    Box::new(HumanPlayer::new())
}

fn build_simple_ai() -> Box<dyn Player> {
    Box::new(SimpleAi::new())
}

pub const PLAYERS: &[PlayerSpec] = &[
    PlayerSpec {
        name: "Human (you)",
        description: "Keyboard play: arrows/WASD move, Space reveals, F flags.",
        build: build_human,
    },
    PlayerSpec {
        name: "Simple AI",
        description: "Rule-based deduction; guesses when it runs out of rules.",
        build: build_simple_ai,
    },
];

/// Board presets offered by the menu. The core accepts arbitrary sizes;
/// these are just comfortable defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Novice,
        Difficulty::Apprentice,
        Difficulty::Journeyman,
        Difficulty::Master,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Apprentice => "Apprentice",
            Self::Journeyman => "Journeyman",
            Self::Master => "Master",
        }
    }

    /// Returns (width, height) for the board.
    pub fn grid_size(&self) -> (usize, usize) {
        match self {
            Self::Novice => (9, 9),
            Self::Apprentice => (12, 12),
            Self::Journeyman => (16, 16),
            Self::Master => (20, 16),
        }
    }

    pub fn mine_count(&self) -> usize {
        match self {
            Self::Novice => 10,
            Self::Apprentice => 25,
            Self::Journeyman => 40,
            Self::Master => 60,
        }
    }
}
