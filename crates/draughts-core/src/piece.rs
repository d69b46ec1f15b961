//! Colored draughts piece, stored as its board cell code.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, stored as the cell code used by the 8×8 grid.
///
/// | Code | Piece       |
/// |------|-------------|
/// | 1    | White man   |
/// | 2    | Black man   |
/// | 3    | White king  |
/// | 4    | Black king  |
///
/// Code 0 is an empty cell and is represented by `Option<Piece>::None`.
/// The owning side is `code % 2` (odd = White, even = Black).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(u8);

impl Piece {
    /// Number of distinct pieces.
    pub const COUNT: usize = 4;

    /// White man. Code 1.
    pub const WHITE_MAN: Piece = Piece::new(PieceKind::Man, Color::White);
    /// Black man. Code 2.
    pub const BLACK_MAN: Piece = Piece::new(PieceKind::Man, Color::Black);
    /// White king. Code 3.
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    /// Black king. Code 4.
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// All pieces in code order.
    pub const ALL: [Piece; 4] = [
        Self::WHITE_MAN,
        Self::BLACK_MAN,
        Self::WHITE_KING,
        Self::BLACK_KING,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(1 + color as u8 + 2 * kind as u8)
    }

    /// Decode a cell code. Returns `None` for 0 and for codes above 4.
    #[inline]
    pub const fn from_code(code: u8) -> Option<Piece> {
        match code {
            1..=4 => Some(Piece(code)),
            _ => None,
        }
    }

    /// Return the cell code (1..=4).
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        if self.0 > 2 { PieceKind::King } else { PieceKind::Man }
    }

    /// Return the owning side (`code % 2`: odd = White).
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 % 2 == 1 { Color::White } else { Color::Black }
    }

    /// Return `true` if this piece is a king.
    #[inline]
    pub const fn is_king(self) -> bool {
        self.0 > 2
    }

    /// Return the crowned version of this piece (kings are unchanged).
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece::new(PieceKind::King, self.color())
    }

    /// Return the layout character: `w`/`W` for White, `b`/`B` for Black,
    /// uppercase for kings.
    pub const fn layout_char(self) -> char {
        match self.0 {
            1 => 'w',
            2 => 'b',
            3 => 'W',
            _ => 'B',
        }
    }

    /// Parse a layout character.
    pub const fn from_layout_char(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Self::WHITE_MAN),
            'b' => Some(Self::BLACK_MAN),
            'W' => Some(Self::WHITE_KING),
            'B' => Some(Self::BLACK_KING),
            _ => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.layout_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color() {
            Color::White => 'W',
            Color::Black => 'B',
        };
        let kind_char = self.kind().letter().to_ascii_uppercase();
        write!(f, "{}{}", color_prefix, kind_char)
    }
}
