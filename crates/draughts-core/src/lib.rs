//! Core draughts types: board representation, move generation, and game rules.

mod board;
mod color;
mod draughts_move;
mod error;
mod game;
mod layout;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, Grid, PrettyBoard};
pub use color::Color;
pub use draughts_move::Move;
pub use error::{BoardError, LayoutError, MoveError};
pub use game::{Game, GameStatus, MoveOutcome};
pub use layout::STARTING_LAYOUT;
pub use movegen::{MoveList, generate_moves, legal_moves, legal_moves_from};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
