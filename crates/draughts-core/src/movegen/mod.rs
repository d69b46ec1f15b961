//! Legal move generation under the mandatory-capture rule.

mod kings;
mod men;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::Board;
use crate::color::Color;
use crate::draughts_move::Move;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::kings::{gen_king_captures, gen_king_slides};
use self::men::{gen_man_captures, gen_man_steps};

/// The four diagonal directions as `(row, col)` deltas.
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Ordered list of legal moves plus the has-forced-capture flag.
///
/// When `has_capture()` is `true` every move in the list is a capture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
    has_capture: bool,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: Vec::new(),
            has_capture: false,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if the moves are captures forced by the mandatory-capture rule.
    #[inline]
    pub fn has_capture(&self) -> bool {
        self.has_capture
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Find the move going from `from` to `to`, if it is in the list.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Shuffle the moves in place so that equally scored moves are not
    /// always resolved in scan order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.moves.shuffle(rng);
    }

    /// Consume the list, returning the moves.
    pub fn into_vec(self) -> Vec<Move> {
        self.moves
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Generate the local moves of the piece on `sq`.
///
/// Captures take priority: if the piece has any capture, only captures are
/// returned and the list's capture flag is set. An empty square yields an
/// empty list.
pub fn legal_moves_from(board: &Board, sq: Square) -> MoveList {
    let mut list = MoveList::new();
    let Some(piece) = board.piece_on(sq) else {
        return list;
    };

    match piece.kind() {
        PieceKind::Man => gen_man_captures(board, sq, piece, &mut list),
        PieceKind::King => gen_king_captures(board, sq, piece, &mut list),
    }
    if !list.is_empty() {
        list.has_capture = true;
        return list;
    }

    match piece.kind() {
        PieceKind::Man => gen_man_steps(board, sq, piece, &mut list),
        PieceKind::King => gen_king_slides(board, sq, &mut list),
    }
    list
}

/// Generate every legal move for `color` in row-major scan order.
///
/// The mandatory-capture rule applies across the whole side: once any piece
/// has a capture, quiet moves collected so far are discarded and only
/// capturing moves (from any piece that has one) are kept.
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    for (sq, _) in board.squares_of(color) {
        let local = legal_moves_from(board, sq);
        if local.has_capture && !list.has_capture {
            list.moves.clear();
            list.has_capture = true;
        }
        if local.has_capture == list.has_capture {
            list.moves.extend_from_slice(&local.moves);
        }
    }
    list
}

/// Generate every legal move for `color`, shuffled with `rng`.
pub fn legal_moves<R: Rng + ?Sized>(board: &Board, color: Color, rng: &mut R) -> MoveList {
    let mut list = generate_moves(board, color);
    list.shuffle(rng);
    list
}
