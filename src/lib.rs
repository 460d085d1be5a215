//! Sweep - Terminal Minesweeper Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binaries
#![allow(dead_code)]

pub mod bench;
pub mod board;
pub mod build_info;
pub mod error;
pub mod game;
pub mod player;
pub mod registry;
pub mod render;
pub mod solver;
pub mod ui;
