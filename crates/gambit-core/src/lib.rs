//! Chess rule engine: board representation, move legality, check and checkmate.

mod board;
mod color;
mod error;
mod game;
mod piece;
mod piece_kind;
pub mod rules;
mod square;

pub use board::{Board, BoardStyle, PrettyBoard};
pub use color::Color;
pub use error::{MoveError, SquareError};
pub use game::{GameState, GameStatus, MoveReport};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rules::{
    is_check, is_checkmate, is_diagonal_path_clear, is_straight_path_clear, legal_destinations,
    validate_move,
};
pub use square::Square;
