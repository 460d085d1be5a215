//! Renderer capability used by the session loop and by players.
//!
//! Implementations: the ratatui renderer in [`crate::ui`] and the no-op
//! [`DudRenderer`] used by headless benchmark runs.

use std::io;

use crate::board::BoardView;

pub trait Renderer {
    /// Draw the board. `mines` carries the true mine layout and is
    /// provided only once the game has ended.
    fn render(
        &mut self,
        view: &BoardView,
        remaining_mines: i32,
        mines: Option<&[(usize, usize)]>,
    ) -> io::Result<()>;

    /// Move the player cursor to the given cell and redraw.
    fn highlight(&mut self, x: usize, y: usize) -> io::Result<()>;

    /// Show a message overlay on top of the board.
    fn dialog(&mut self, lines: &[&str]) -> io::Result<()>;
}

/// Renderer that draws nothing. Used when an AI plays thousands of games
/// back to back.
#[derive(Debug, Clone, Copy, Default)]
pub struct DudRenderer;

impl Renderer for DudRenderer {
    fn render(
        &mut self,
        _view: &BoardView,
        _remaining_mines: i32,
        _mines: Option<&[(usize, usize)]>,
    ) -> io::Result<()> {
        Ok(())
    }

    fn highlight(&mut self, _x: usize, _y: usize) -> io::Result<()> {
        Ok(())
    }

    fn dialog(&mut self, _lines: &[&str]) -> io::Result<()> {
        Ok(())
    }
}
