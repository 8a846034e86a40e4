//! Move legality, check detection, and checkmate detection.
//!
//! Every function here is a pure query over a [`Board`]. Legality is
//! "engine sense": piece shape, path clearance, and destination occupancy.
//! Whether the mover's own king ends up attacked is not part of
//! [`validate_move`]; it only shows up afterwards through [`is_check`].

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Shape and path predicate for one piece kind.
///
/// Receives the mover's color, source, destination, and the board. The
/// destination is already known not to hold a piece of the mover's color.
type MoveRule = fn(Color, Square, Square, &Board) -> bool;

/// Legality predicates indexed by [`PieceKind::index`].
const MOVE_RULES: [MoveRule; PieceKind::COUNT] = [
    pawn_move,
    knight_move,
    bishop_move,
    rook_move,
    queen_move,
    king_move,
];

/// Return `true` if `piece` standing on `from` may move to `to`.
///
/// The caller guarantees that `piece` occupies `from`; this is not re-checked.
/// A destination holding a piece of the same color is always rejected, which
/// also rules out `from == to`.
pub fn validate_move(piece: Piece, from: Square, to: Square, board: &Board) -> bool {
    let color = piece.color();
    if board.piece_at(to).is_some_and(|target| target.is(color)) {
        return false;
    }
    MOVE_RULES[piece.kind().index()](color, from, to, board)
}

/// Return `true` if `from` and `to` share a row or column and every square
/// strictly between them is empty.
pub fn is_straight_path_clear(from: Square, to: Square, board: &Board) -> bool {
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    let (d_row, d_col) = from.delta(to);
    path_clear(from, to, d_row.signum(), d_col.signum(), board)
}

/// Return `true` if `from` and `to` lie on a common diagonal and every square
/// strictly between them is empty.
pub fn is_diagonal_path_clear(from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    if d_row.abs() != d_col.abs() {
        return false;
    }
    path_clear(from, to, d_row.signum(), d_col.signum(), board)
}

/// Return `true` if `color`'s king can be reached by any opposing piece.
///
/// A board without a king of that color is never in check.
pub fn is_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    board
        .pieces_of(color.flip())
        .any(|(sq, attacker)| validate_move(attacker, sq, king_sq, board))
}

/// Return `true` if `color` is in check and no move of any of its pieces
/// leads to a position where it is no longer in check.
///
/// Candidate moves are those accepted by [`validate_move`]. Each one is tried
/// on a copy of `board`; the board passed in is never modified.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_check(board, color) {
        return false;
    }
    for (from, piece) in board.pieces_of(color) {
        for to in Square::all() {
            if !validate_move(piece, from, to, board) {
                continue;
            }
            let trial = board.with_move(from, to);
            if !is_check(&trial, color) {
                return false;
            }
        }
    }
    true
}

/// Return every destination the piece on `from` may move to.
///
/// Empty if `from` has no piece.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };
    Square::all()
        .filter(|&to| validate_move(piece, from, to, board))
        .collect()
}

/// Walk from `from` toward `to` in steps of (`d_row`, `d_col`), failing on
/// the first occupied square before `to`.
fn path_clear(from: Square, to: Square, d_row: i8, d_col: i8, board: &Board) -> bool {
    let mut current = from;
    loop {
        match current.offset(d_row, d_col) {
            Some(next) if next != to => {
                if board.is_occupied(next) {
                    return false;
                }
                current = next;
            }
            _ => return true,
        }
    }
}

fn pawn_move(color: Color, from: Square, to: Square, board: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    let step = color.pawn_step();
    let occupied = board.is_occupied(to);

    let single_push = d_row == step && d_col == 0 && !occupied;
    let capture = d_row == step && d_col.abs() == 1 && occupied;
    // Only the destination is examined; the skipped square may be occupied.
    let double_push =
        from.row() == color.pawn_home_row() && d_row == 2 * step && d_col == 0 && !occupied;

    single_push || capture || double_push
}

fn knight_move(_: Color, from: Square, to: Square, _: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

fn bishop_move(_: Color, from: Square, to: Square, board: &Board) -> bool {
    is_diagonal_path_clear(from, to, board)
}

fn rook_move(_: Color, from: Square, to: Square, board: &Board) -> bool {
    is_straight_path_clear(from, to, board)
}

fn queen_move(_: Color, from: Square, to: Square, board: &Board) -> bool {
    is_straight_path_clear(from, to, board) || is_diagonal_path_clear(from, to, board)
}

fn king_move(_: Color, from: Square, to: Square, _: &Board) -> bool {
    let (d_row, d_col) = from.delta(to);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    fn board_with(placements: &[(u8, u8, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(row, col, piece) in placements {
            board.place(sq(row, col), piece);
        }
        board
    }

    #[test]
    fn null_move_rejected_for_every_kind() {
        for kind in PieceKind::ALL {
            for color in Color::ALL {
                let piece = Piece::new(kind, color);
                let from = sq(4, 4);
                let board = board_with(&[(4, 4, piece)]);
                assert!(
                    !validate_move(piece, from, from, &board),
                    "{piece:?} accepted a null move"
                );
            }
        }
    }

    #[test]
    fn same_color_destination_rejected() {
        let board = board_with(&[(4, 4, Piece::WHITE_QUEEN), (4, 6, Piece::WHITE_PAWN)]);
        assert!(!validate_move(Piece::WHITE_QUEEN, sq(4, 4), sq(4, 6), &board));
        assert!(validate_move(Piece::WHITE_QUEEN, sq(4, 4), sq(4, 5), &board));
    }

    #[test]
    fn rook_back_rank_and_blockers() {
        let empty_rank = board_with(&[(7, 0, Piece::WHITE_ROOK)]);
        assert!(validate_move(Piece::WHITE_ROOK, sq(7, 0), sq(7, 7), &empty_rank));

        for col in 1..7 {
            for blocker in [Piece::WHITE_PAWN, Piece::BLACK_PAWN] {
                let mut board = empty_rank;
                board.place(sq(7, col), blocker);
                assert!(
                    !validate_move(Piece::WHITE_ROOK, sq(7, 0), sq(7, 7), &board),
                    "blocker {blocker:?} on (7, {col}) did not stop the rook"
                );
            }
        }
    }

    #[test]
    fn rook_cannot_move_diagonally() {
        let board = board_with(&[(7, 0, Piece::WHITE_ROOK)]);
        assert!(!validate_move(Piece::WHITE_ROOK, sq(7, 0), sq(6, 1), &board));
    }

    #[test]
    fn bishop_diagonal_and_blocker() {
        let board = board_with(&[(7, 2, Piece::WHITE_BISHOP)]);
        assert!(validate_move(Piece::WHITE_BISHOP, sq(7, 2), sq(5, 0), &board));
        assert!(!validate_move(Piece::WHITE_BISHOP, sq(7, 2), sq(5, 2), &board));

        let mut blocked = board;
        blocked.place(sq(6, 1), Piece::BLACK_PAWN);
        assert!(!validate_move(Piece::WHITE_BISHOP, sq(7, 2), sq(5, 0), &blocked));
        // Capturing the blocker itself is fine.
        assert!(validate_move(Piece::WHITE_BISHOP, sq(7, 2), sq(6, 1), &blocked));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = board_with(&[(4, 3, Piece::BLACK_QUEEN)]);
        assert!(validate_move(Piece::BLACK_QUEEN, sq(4, 3), sq(4, 7), &board));
        assert!(validate_move(Piece::BLACK_QUEEN, sq(4, 3), sq(0, 3), &board));
        assert!(validate_move(Piece::BLACK_QUEEN, sq(4, 3), sq(7, 6), &board));
        assert!(validate_move(Piece::BLACK_QUEEN, sq(4, 3), sq(1, 0), &board));
        assert!(!validate_move(Piece::BLACK_QUEEN, sq(4, 3), sq(6, 4), &board));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::starting_position();
        assert!(validate_move(Piece::WHITE_KNIGHT, sq(7, 1), sq(5, 2), &board));
        assert!(validate_move(Piece::WHITE_KNIGHT, sq(7, 1), sq(5, 0), &board));
        assert!(!validate_move(Piece::WHITE_KNIGHT, sq(7, 1), sq(6, 3), &board));
        assert!(!validate_move(Piece::WHITE_KNIGHT, sq(7, 1), sq(5, 1), &board));
    }

    #[test]
    fn king_steps_one_square() {
        let board = board_with(&[(4, 4, Piece::WHITE_KING)]);
        for d_row in -1i8..=1 {
            for d_col in -1i8..=1 {
                if (d_row, d_col) == (0, 0) {
                    continue;
                }
                let to = sq(4, 4).offset(d_row, d_col).unwrap();
                assert!(validate_move(Piece::WHITE_KING, sq(4, 4), to, &board));
            }
        }
        assert!(!validate_move(Piece::WHITE_KING, sq(4, 4), sq(4, 6), &board));
        assert!(!validate_move(Piece::WHITE_KING, sq(4, 4), sq(2, 3), &board));
    }

    #[test]
    fn king_may_step_into_attack() {
        let board = board_with(&[(7, 4, Piece::WHITE_KING), (0, 3, Piece::BLACK_ROOK)]);
        assert!(validate_move(Piece::WHITE_KING, sq(7, 4), sq(7, 3), &board));
    }

    #[test]
    fn white_pawn_pushes() {
        let board = Board::starting_position();
        assert!(validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(5, 4), &board));
        assert!(validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(4, 4), &board));
        assert!(!validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(3, 4), &board));
        assert!(!validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(7, 4), &board));
        assert!(!validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(5, 5), &board));
    }

    #[test]
    fn double_push_ignores_skipped_square() {
        let mut board = Board::starting_position();
        board.place(sq(5, 4), Piece::BLACK_KNIGHT);
        assert!(!validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(5, 4), &board));
        assert!(validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(4, 4), &board));

        board.place(sq(4, 4), Piece::BLACK_PAWN);
        assert!(!validate_move(Piece::WHITE_PAWN, sq(6, 4), sq(4, 4), &board));
    }

    #[test]
    fn double_push_only_from_home_row() {
        let board = board_with(&[(5, 4, Piece::WHITE_PAWN), (2, 2, Piece::BLACK_PAWN)]);
        assert!(!validate_move(Piece::WHITE_PAWN, sq(5, 4), sq(3, 4), &board));
        assert!(!validate_move(Piece::BLACK_PAWN, sq(2, 2), sq(4, 2), &board));
    }

    #[test]
    fn black_pawn_moves_down() {
        let board = Board::starting_position();
        assert!(validate_move(Piece::BLACK_PAWN, sq(1, 3), sq(2, 3), &board));
        assert!(validate_move(Piece::BLACK_PAWN, sq(1, 3), sq(3, 3), &board));
        assert!(!validate_move(Piece::BLACK_PAWN, sq(1, 3), sq(0, 3), &board));
    }

    #[test]
    fn pawn_captures_diagonally_forward_only() {
        let board = board_with(&[
            (4, 4, Piece::WHITE_PAWN),
            (3, 5, Piece::BLACK_KNIGHT),
            (5, 3, Piece::BLACK_KNIGHT),
            (3, 4, Piece::BLACK_ROOK),
        ]);
        assert!(validate_move(Piece::WHITE_PAWN, sq(4, 4), sq(3, 5), &board));
        assert!(!validate_move(Piece::WHITE_PAWN, sq(4, 4), sq(5, 3), &board));
        assert!(!validate_move(Piece::WHITE_PAWN, sq(4, 4), sq(3, 3), &board));
        // Straight ahead is blocked, not capturable.
        assert!(!validate_move(Piece::WHITE_PAWN, sq(4, 4), sq(3, 4), &board));
    }

    #[test]
    fn straight_path_helper() {
        let board = board_with(&[(3, 3, Piece::BLACK_PAWN)]);
        assert!(is_straight_path_clear(sq(3, 0), sq(3, 2), &board));
        assert!(!is_straight_path_clear(sq(3, 0), sq(3, 7), &board));
        assert!(is_straight_path_clear(sq(3, 0), sq(3, 3), &board));
        assert!(is_straight_path_clear(sq(0, 3), sq(2, 3), &board));
        assert!(!is_straight_path_clear(sq(7, 3), sq(0, 3), &board));
        assert!(!is_straight_path_clear(sq(0, 0), sq(1, 2), &board));
        assert!(is_straight_path_clear(sq(5, 5), sq(5, 5), &board));
    }

    #[test]
    fn diagonal_path_helper() {
        let board = board_with(&[(2, 2, Piece::WHITE_PAWN)]);
        assert!(!is_diagonal_path_clear(sq(0, 0), sq(4, 4), &board));
        assert!(is_diagonal_path_clear(sq(0, 0), sq(2, 2), &board));
        assert!(is_diagonal_path_clear(sq(7, 0), sq(0, 7), &board));
        assert!(is_diagonal_path_clear(sq(0, 7), sq(7, 0), &board));
        assert!(!is_diagonal_path_clear(sq(0, 0), sq(0, 4), &board));
        assert!(!is_diagonal_path_clear(sq(0, 0), sq(2, 3), &board));
    }

    #[test]
    fn opening_position_has_no_check() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert!(!is_check(&board, color));
            assert!(!is_checkmate(&board, color));
        }
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = board_with(&[(0, 0, Piece::BLACK_QUEEN)]);
        assert!(!is_check(&board, Color::White));
        assert!(!is_checkmate(&board, Color::White));
    }

    #[test]
    fn pawn_gives_check_only_diagonally() {
        let ahead = board_with(&[(4, 4, Piece::WHITE_KING), (3, 4, Piece::BLACK_PAWN)]);
        assert!(!is_check(&ahead, Color::White));

        // A black pawn moves toward higher rows, so it attacks (row + 1).
        let diagonal = board_with(&[(4, 4, Piece::WHITE_KING), (3, 3, Piece::BLACK_PAWN)]);
        assert!(is_check(&diagonal, Color::White));

        let behind = board_with(&[(4, 4, Piece::WHITE_KING), (5, 3, Piece::BLACK_PAWN)]);
        assert!(!is_check(&behind, Color::White));
    }

    #[test]
    fn sliding_check_is_blocked_by_interposition() {
        let mut board = board_with(&[(7, 4, Piece::WHITE_KING), (0, 4, Piece::BLACK_ROOK)]);
        assert!(is_check(&board, Color::White));
        board.place(sq(3, 4), Piece::WHITE_BISHOP);
        assert!(!is_check(&board, Color::White));
    }

    #[test]
    fn check_that_can_be_escaped_is_not_mate() {
        let board = board_with(&[(7, 4, Piece::WHITE_KING), (0, 4, Piece::BLACK_ROOK)]);
        assert!(is_check(&board, Color::White));
        assert!(!is_checkmate(&board, Color::White));
    }

    #[test]
    fn back_rank_mate_leaves_board_untouched() {
        let board = board_with(&[
            (7, 6, Piece::WHITE_KING),
            (6, 5, Piece::WHITE_PAWN),
            (6, 6, Piece::WHITE_PAWN),
            (6, 7, Piece::WHITE_PAWN),
            (7, 0, Piece::BLACK_ROOK),
            (0, 4, Piece::BLACK_KING),
        ]);
        let before = board;
        assert!(is_check(&board, Color::White));
        assert!(is_checkmate(&board, Color::White));
        assert_eq!(board, before);
    }

    #[test]
    fn capturing_the_checker_escapes_mate() {
        let board = board_with(&[
            (7, 6, Piece::WHITE_KING),
            (6, 5, Piece::WHITE_PAWN),
            (6, 6, Piece::WHITE_PAWN),
            (6, 7, Piece::WHITE_PAWN),
            (3, 0, Piece::WHITE_ROOK),
            (7, 0, Piece::BLACK_ROOK),
            (0, 4, Piece::BLACK_KING),
        ]);
        assert!(is_check(&board, Color::White));
        assert!(!is_checkmate(&board, Color::White));
    }

    #[test]
    fn legal_destinations_from_opening() {
        let board = Board::starting_position();
        assert_eq!(
            legal_destinations(&board, sq(7, 6)),
            vec![sq(5, 5), sq(5, 7)]
        );
        assert_eq!(
            legal_destinations(&board, sq(6, 0)),
            vec![sq(4, 0), sq(5, 0)]
        );
        assert!(legal_destinations(&board, sq(7, 0)).is_empty());
        assert!(legal_destinations(&board, sq(4, 4)).is_empty());
    }
}
