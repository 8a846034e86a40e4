//! Error types for square construction and move application.

use crate::color::Color;
use crate::square::Square;

/// Errors from building a [`Square`] out of raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SquareError {
    /// Row or column is outside 0..=7.
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: u8,
        /// Requested column.
        col: u8,
    },
}

/// Reasons a [`GameState`](crate::game::GameState) refuses a move.
///
/// Refusals never change the game; the caller keeps its previous state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game already ended in checkmate.
    #[error("game is over")]
    GameOver,
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The piece on the source square belongs to the side not on move.
    #[error("it is {to_move}'s turn")]
    NotYourTurn {
        /// The side whose turn it actually is.
        to_move: Color,
    },
    /// The rule engine rejected the move.
    #[error("illegal move from {from} to {to}")]
    IllegalMove {
        /// Source square.
        from: Square,
        /// Destination square.
        to: Square,
    },
}
