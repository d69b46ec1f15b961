//! Error types for board construction, layout parsing and move application.

use crate::square::Square;

/// Errors from building a [`Board`](crate::board::Board) out of raw cell codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A cell holds a code outside `0..=4`.
    #[error("invalid cell code {code} at {square}")]
    InvalidCode {
        /// The offending square.
        square: Square,
        /// The code found there.
        code: u8,
    },
}

/// Errors that occur when parsing a text board layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in board layout, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = top).
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid layout character: '{character}'")]
    InvalidChar {
        /// The invalid character.
        character: char,
    },
}

/// Precondition violations when applying a move to a board or game.
///
/// Move generation never produces these; seeing one means the caller
/// handed in a move that did not come from the generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The source square is empty.
    #[error("begin position {square} is empty, can't move")]
    EmptySource {
        /// The empty source square.
        square: Square,
    },
    /// The destination square already holds a piece.
    #[error("final position {square} is not empty, can't move")]
    OccupiedDestination {
        /// The occupied destination square.
        square: Square,
    },
    /// The captured square is empty or holds a piece of the mover's side.
    #[error("no opposing piece to capture on {square}")]
    InvalidCapture {
        /// The square named as captured.
        square: Square,
    },
    /// The move is well-formed but not among the legal moves of the game state.
    #[error("move {notation} is not legal here")]
    NotLegal {
        /// The move in protocol notation.
        notation: String,
    },
}
