//! The board: a 64-slot mailbox of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Piece placement on an 8x8 board.
///
/// `Board` is a plain `Copy` value. Hypothetical positions are built with
/// [`Board::with_move`], which leaves the receiver untouched.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row();
            let pawns = color.pawn_home_row();
            for (col, kind) in (0u8..).zip(PieceKind::BACK_ROW) {
                board.squares[(back * Square::SIDE + col) as usize] = Some(Piece::new(kind, color));
                board.squares[(pawns * Square::SIDE + col) as usize] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Put `piece` on `sq`, returning whatever was there before.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index()].replace(piece)
    }

    /// Clear `sq`, returning its previous occupant.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Iterate over every occupied square in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is(color))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }

    /// Return the square of `color`'s king, or `None` if it has none.
    ///
    /// If several kings of that color are present, the lowest index wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Return a copy of this board with the occupant of `from` moved to `to`.
    ///
    /// Any piece standing on `to` is dropped. If `from` is empty the copy is
    /// returned unchanged.
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        if let Some(piece) = next.remove(from) {
            next.place(to, piece);
        }
        next
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self, style: BoardStyle) -> PrettyBoard<'_> {
        PrettyBoard { board: self, style }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"")?;
        for row in 0..Square::SIDE {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0..Square::SIDE {
                let c = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', Piece::letter);
                write!(f, "{c}")?;
            }
        }
        write!(f, "\")")
    }
}

/// How [`PrettyBoard`] draws pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardStyle {
    /// Unicode chess symbols.
    #[default]
    Glyph,
    /// ASCII letters, uppercase for White.
    Ascii,
}

/// Wrapper for pretty-printing a board as an 8x8 grid with row and column indices.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    style: BoardStyle,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for row in 0..Square::SIDE {
            write!(f, "{row} ")?;
            for col in 0..Square::SIDE {
                let c = match Square::new(row, col).and_then(|sq| self.board.piece_at(sq)) {
                    Some(piece) => match self.style {
                        BoardStyle::Glyph => piece.glyph(),
                        BoardStyle::Ascii => piece.letter(),
                    },
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            if row + 1 < Square::SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
