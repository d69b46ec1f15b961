//! King move generation: long-range slides and flying captures.

use crate::board::Board;
use crate::draughts_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::{DIAGONALS, MoveList};

/// Push every capture of the king on `from`.
///
/// Along each ray the king passes over empty squares until it meets the
/// first piece. An own piece, or a second opposing piece after the first,
/// ends the ray. Every empty square beyond the first opposing piece (up to
/// the next obstruction) is a separate landing.
pub(super) fn gen_king_captures(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    for (dr, dc) in DIAGONALS {
        let mut jumped: Option<Square> = None;
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            match board.color_on(sq) {
                Some(color) if color == piece.color() => break,
                Some(_) if jumped.is_some() => break,
                Some(_) => jumped = Some(sq),
                None => {
                    if let Some(over) = jumped {
                        list.push(Move::new_capture(from, sq, over));
                    }
                }
            }
            cur = sq.offset(dr, dc);
        }
    }
}

/// Push the quiet slides of the king on `from`, stopping before any piece.
pub(super) fn gen_king_slides(board: &Board, from: Square, list: &mut MoveList) {
    for (dr, dc) in DIAGONALS {
        let mut cur = from.offset(dr, dc);
        while let Some(sq) = cur {
            if board.is_occupied(sq) {
                break;
            }
            list.push(Move::new(from, sq));
            cur = sq.offset(dr, dc);
        }
    }
}
