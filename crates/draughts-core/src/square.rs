//! Board squares addressed by row and column.

use std::fmt;

/// A square on the 8×8 board, encoded as `row * 8 + col`.
///
/// Row 0 is the top of the board (Black's back row, White's promotion row).
/// Squares print in algebraic form: column `a`..`h`, rank `8 - row`, so
/// row 7 col 0 is `a1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a row and column.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are below 8.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Create a square from signed coordinates, returning `None` off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square(row as u8 * 8 + col as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic notation string (e.g. "c3") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::new(b'8' - rank_byte, file_byte - b'a'))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..8), 0 at the top.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Return the column (0..8).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Step `dr` rows and `dc` columns, returning `None` off the board.
    #[inline]
    pub const fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::try_new(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// Return `true` for the dark squares pieces start on (`row + col` odd).
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row() + self.col()) % 2 == 1
    }

    /// Iterate over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col()) as char;
        write!(f, "{}{}", file, 8 - self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
