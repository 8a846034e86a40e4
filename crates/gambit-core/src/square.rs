//! Board squares addressed by (row, column).

use std::fmt;

use crate::error::SquareError;

/// A square on the board, encoded as a `u8`.
///
/// Index = row * 8 + col. Row 0 is Black's back row, row 7 is White's.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Number of rows (and columns).
    pub const SIDE: u8 = 8;

    /// Create a square from a row and column, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < Self::SIDE && col < Self::SIDE {
            Some(Square(row * Self::SIDE + col))
        } else {
            None
        }
    }

    /// Like [`Square::new`], but reports the offending coordinates.
    pub fn try_new(row: u8, col: u8) -> Result<Square, SquareError> {
        Square::new(row, col).ok_or(SquareError::OutOfRange { row, col })
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Return the square shifted by the given deltas, or `None` if it leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Signed (row, col) displacement from `self` to `to`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square{}", self)
    }
}
