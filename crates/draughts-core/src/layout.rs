//! Compact text layout for boards: parsing (`FromStr`) and serialization (`Display`).
//!
//! A layout is 8 rows separated by `/`, row 0 (the top) first. Each row
//! has exactly 8 characters: `.` for an empty cell, `w`/`b` for White/Black
//! men and `W`/`B` for kings.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::LayoutError;
use crate::piece::Piece;
use crate::square::Square;

/// Layout of the standard starting position.
pub const STARTING_LAYOUT: &str =
    ".b.b.b.b/b.b.b.b./.b.b.b.b/......../......../w.w.w.w./.w.w.w.w/w.w.w.w.";

impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Board, LayoutError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(LayoutError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let length = text.chars().count();
            if length != 8 {
                return Err(LayoutError::BadRowLength { row, length });
            }
            for (col, character) in text.chars().enumerate() {
                if character == '.' {
                    continue;
                }
                let piece = Piece::from_layout_char(character)
                    .ok_or(LayoutError::InvalidChar { character })?;
                board.set(Square::new(row as u8, col as u8), Some(piece));
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            if row > 0 {
                write!(f, "/")?;
            }
            for col in 0u8..8 {
                let c = self.piece_on(Square::new(row, col)).map_or('.', Piece::layout_char);
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
