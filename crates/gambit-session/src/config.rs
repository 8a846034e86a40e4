//! Runtime-adjustable session settings.

use gambit_core::BoardStyle;

/// Settings adjustable with the `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// How boards are drawn.
    pub style: BoardStyle,
    /// Print the board after every accepted move.
    pub auto_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            style: BoardStyle::Glyph,
            auto_board: false,
        }
    }
}

/// A single `set <name> <value>` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    Style(BoardStyle),
    AutoBoard(bool),
}

impl SessionConfig {
    /// Apply one option.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Style(style) => self.style = style,
            SessionOption::AutoBoard(on) => self.auto_board = on,
        }
    }
}
