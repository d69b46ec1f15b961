//! Move descriptor: source, destination and the optionally captured square.

use std::fmt;

use crate::square::Square;

/// A single step of a turn.
///
/// A turn is one move, or a chain of captures by the same piece; each link
/// of a chain is its own `Move`. `captured` is set only for capturing moves.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Option<Square>,
}

impl Move {
    /// Create a non-capturing move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move {
            from,
            to,
            captured: None,
        }
    }

    /// Create a capturing move that removes the piece on `captured`.
    #[inline]
    pub const fn new_capture(from: Square, to: Square, captured: Square) -> Move {
        Move {
            from,
            to,
            captured: Some(captured),
        }
    }

    /// Source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Square of the captured piece, if this is a capture.
    #[inline]
    pub const fn captured(self) -> Option<Square> {
        self.captured
    }

    /// Return `true` if this move captures a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Return the protocol notation: `c3-d4` for quiet moves, `c3xe5` for captures.
    pub fn to_notation(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.captured {
            Some(sq) => write!(f, "Move({self} captures {sq})"),
            None => write!(f, "Move({self})"),
        }
    }
}
