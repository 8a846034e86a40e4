//! Turn keeping on top of the rule engine.

use tracing::{debug, info};

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::rules::{is_check, is_checkmate, validate_move};
use crate::square::Square;

/// Whether play can continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// `loser` was mated; no further moves are accepted.
    Checkmate { loser: Color },
}

/// What happened when a move was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    /// Side that made the move.
    pub mover: Color,
    pub from: Square,
    pub to: Square,
    /// Piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// The opponent of `mover` is in check after the move.
    pub check: bool,
    /// The opponent of `mover` is checkmated after the move.
    pub checkmate: bool,
}

/// Board plus side to move.
///
/// A `GameState` is never mutated by play: [`GameState::play`] hands back the
/// successor and the caller decides whether to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> GameState {
        GameState::from_board(Board::starting_position(), Color::White)
    }

    /// Start from an arbitrary placement.
    pub fn from_board(board: Board, side_to_move: Color) -> GameState {
        GameState {
            board,
            side_to_move,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Return `true` once the game has ended.
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate { .. })
    }

    /// Attempt to move the piece on `from` to `to`.
    ///
    /// On success returns the next state and a report. The turn passes to
    /// the opponent unless the move mates, in which case the game ends with
    /// the side to move left as it was.
    pub fn play(&self, from: Square, to: Square) -> Result<(GameState, MoveReport), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::EmptySquare(from))?;
        let mover = self.side_to_move;
        if !piece.is(mover) {
            return Err(MoveError::NotYourTurn { to_move: mover });
        }
        if !validate_move(piece, from, to, &self.board) {
            return Err(MoveError::IllegalMove { from, to });
        }

        let captured = self.board.piece_at(to);
        let board = self.board.with_move(from, to);
        let opponent = mover.flip();
        let check = is_check(&board, opponent);
        let checkmate = check && is_checkmate(&board, opponent);
        debug!(%mover, %from, %to, ?captured, check, "move applied");

        let next = if checkmate {
            info!(loser = %opponent, "checkmate");
            GameState {
                board,
                side_to_move: mover,
                status: GameStatus::Checkmate { loser: opponent },
            }
        } else {
            GameState::from_board(board, opponent)
        };

        let report = MoveReport {
            mover,
            from,
            to,
            captured,
            check,
            checkmate,
        };
        Ok((next, report))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
