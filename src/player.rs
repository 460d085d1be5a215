//! The player contract and the interactive human player.

use std::io;

use crossterm::event::{self, Event, KeyCode};

use crate::board::BoardView;
use crate::game::GameRules;
use crate::render::Renderer;
use crate::solver::zero_expansion;

/// One round's worth of actions: positions to reveal and flags to toggle.
/// Produced fresh each round and consumed by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    pub reveal: Vec<(usize, usize)>,
    pub flag: Vec<(usize, usize)>,
}

impl Decision {
    pub fn reveal_one(x: usize, y: usize) -> Self {
        Self {
            reveal: vec![(x, y)],
            flag: Vec::new(),
        }
    }

    pub fn flag_one(x: usize, y: usize) -> Self {
        Self {
            reveal: Vec::new(),
            flag: vec![(x, y)],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reveal.is_empty() && self.flag.is_empty()
    }
}

/// A decision-producing collaborator: the human input handler or an AI.
///
/// Players only ever see the redacted [`BoardView`]; they hold no reference
/// into game state between rounds.
pub trait Player {
    fn name(&self) -> &'static str;

    /// Produce the next decision for the given view, or `None` to abandon
    /// the session. `rules` tells the player which actions the game will
    /// actually honor; proposing an action the rules drop would stall a
    /// deterministic player forever. `ui` is available for cursor
    /// highlighting and dialogs.
    fn decide(
        &mut self,
        view: &BoardView,
        remaining_mines: i32,
        rules: GameRules,
        ui: &mut dyn Renderer,
    ) -> io::Result<Option<Decision>>;
}

/// Keyboard-driven player. Moves a cursor with the arrow keys or WASD,
/// reveals with Space/Enter, flags with F, and forfeits with Esc.
pub struct HumanPlayer {
    cursor: (usize, usize),
}

impl HumanPlayer {
    pub fn new() -> Self {
        Self { cursor: (0, 0) }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32, view: &BoardView) {
        let x = (self.cursor.0 as i32 + dx).clamp(0, view.width() as i32 - 1);
        let y = (self.cursor.1 as i32 + dy).clamp(0, view.height() as i32 - 1);
        self.cursor = (x as usize, y as usize);
    }
}

impl Default for HumanPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &'static str {
        "Human (you)"
    }

    fn decide(
        &mut self,
        view: &BoardView,
        _remaining_mines: i32,
        rules: GameRules,
        ui: &mut dyn Renderer,
    ) -> io::Result<Option<Decision>> {
        // Open up zero regions automatically so the player never has to
        // click out a clearing by hand.
        let auto = zero_expansion(view);
        if !auto.is_empty() {
            return Ok(Some(Decision {
                reveal: auto,
                flag: Vec::new(),
            }));
        }

        self.cursor.0 = self.cursor.0.min(view.width() - 1);
        self.cursor.1 = self.cursor.1.min(view.height() - 1);
        ui.highlight(self.cursor.0, self.cursor.1)?;

        loop {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Up | KeyCode::Char('w') => {
                        self.move_cursor(0, -1, view);
                        ui.highlight(self.cursor.0, self.cursor.1)?;
                    }
                    KeyCode::Down | KeyCode::Char('s') => {
                        self.move_cursor(0, 1, view);
                        ui.highlight(self.cursor.0, self.cursor.1)?;
                    }
                    KeyCode::Left | KeyCode::Char('a') => {
                        self.move_cursor(-1, 0, view);
                        ui.highlight(self.cursor.0, self.cursor.1)?;
                    }
                    KeyCode::Right | KeyCode::Char('d') => {
                        self.move_cursor(1, 0, view);
                        ui.highlight(self.cursor.0, self.cursor.1)?;
                    }
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        return Ok(Some(Decision::reveal_one(self.cursor.0, self.cursor.1)));
                    }
                    KeyCode::Char('f') if rules.flags_allowed => {
                        return Ok(Some(Decision::flag_one(self.cursor.0, self.cursor.1)));
                    }
                    KeyCode::Esc => {
                        return Ok(None);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn test_decision_constructors() {
        let reveal = Decision::reveal_one(2, 3);
        assert_eq!(reveal.reveal, vec![(2, 3)]);
        assert!(reveal.flag.is_empty());

        let flag = Decision::flag_one(1, 1);
        assert_eq!(flag.flag, vec![(1, 1)]);
        assert!(flag.reveal.is_empty());

        assert!(Decision::default().is_empty());
        assert!(!reveal.is_empty());
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let board = Board::with_mines(3, 2, &[(2, 1)]).unwrap();
        let view = board.hidden_view();
        let mut player = HumanPlayer::new();

        player.move_cursor(-1, -1, &view);
        assert_eq!(player.cursor, (0, 0));

        player.move_cursor(10, 10, &view);
        assert_eq!(player.cursor, (2, 1));
    }
}
