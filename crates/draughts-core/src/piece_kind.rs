//! Draughts piece kinds.

use std::fmt;

/// The kind of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Man = 0,
    King = 1,
}

impl PieceKind {
    /// Total number of piece kinds.
    pub const COUNT: usize = 2;

    /// All piece kinds in index order.
    pub const ALL: [PieceKind; 2] = [PieceKind::Man, PieceKind::King];

    /// Return the index (0 for Man, 1 for King).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the layout character for a White piece of this kind.
    ///
    /// Black pieces use `b`/`B` instead; see [`Piece::layout_char`](crate::Piece::layout_char).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Man => 'm',
            PieceKind::King => 'k',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
