//! Draughts sides.

use std::fmt;
use std::ops::Not;

/// A side: White (cell codes 1 and 3) or Black (cell codes 2 and 4).
///
/// White starts on rows 5-7 and advances toward row 0; Black starts on
/// rows 0-2 and advances toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a man's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this side's men are crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row this side's men start from.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Parse the protocol letter (`w` or `b`).
    pub fn from_letter(s: &str) -> Option<Color> {
        match s {
            "w" => Some(Color::White),
            "b" => Some(Color::Black),
            _ => None,
        }
    }

    /// Lowercase name, as printed in game results.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn index_values() {
        assert_eq!(Color::White.index(), 0);
        assert_eq!(Color::Black.index(), 1);
    }

    #[test]
    fn flip_roundtrip() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn directions_point_at_promotion_row() {
        for color in Color::ALL {
            let start = color.back_row() as i8;
            let end = color.promotion_row() as i8;
            assert_eq!((end - start).signum(), color.forward());
        }
    }

    #[test]
    fn letters() {
        assert_eq!(Color::from_letter("w"), Some(Color::White));
        assert_eq!(Color::from_letter("b"), Some(Color::Black));
        assert_eq!(Color::from_letter("x"), None);
        assert_eq!(format!("{}", Color::Black), "b");
        assert_eq!(Color::White.name(), "white");
    }
}
