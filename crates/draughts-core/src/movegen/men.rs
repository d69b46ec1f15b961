//! Man move generation: short jumps in every direction, forward steps.

use crate::board::Board;
use crate::draughts_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::{DIAGONALS, MoveList};

/// Push every single-jump capture of the man on `from`.
///
/// Men capture backwards as well as forwards: the adjacent diagonal square
/// must hold an opposing piece and the square beyond it must be empty.
pub(super) fn gen_man_captures(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    for (dr, dc) in DIAGONALS {
        let (Some(over), Some(to)) = (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) else {
            continue;
        };
        let enemy = board.color_on(over).is_some_and(|c| c != piece.color());
        if enemy && !board.is_occupied(to) {
            list.push(Move::new_capture(from, to, over));
        }
    }
}

/// Push the quiet forward steps of the man on `from`.
pub(super) fn gen_man_steps(board: &Board, from: Square, piece: Piece, list: &mut MoveList) {
    let dr = piece.color().forward();
    for dc in [-1, 1] {
        match from.offset(dr, dc) {
            Some(to) if !board.is_occupied(to) => list.push(Move::new(from, to)),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_man_has_one_step() {
        let board = Board::starting_position();
        let mut list = MoveList::new();
        let a3 = Square::new(5, 0);
        gen_man_steps(&board, a3, Piece::WHITE_MAN, &mut list);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].to(), Square::new(4, 1));
    }

    #[test]
    fn back_row_men_are_blocked_at_start() {
        let board = Board::starting_position();
        let mut list = MoveList::new();
        gen_man_steps(&board, Square::new(7, 0), Piece::WHITE_MAN, &mut list);
        gen_man_captures(&board, Square::new(7, 0), Piece::WHITE_MAN, &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn black_man_jumps_in_all_directions() {
        let board: Board = "......../......../..w.w.../...b..../..w.w.../......../......../........"
            .parse()
            .unwrap();
        let mut list = MoveList::new();
        gen_man_captures(&board, Square::new(3, 3), Piece::BLACK_MAN, &mut list);
        assert_eq!(list.len(), 4);
        assert!(list.as_slice().iter().all(|mv| mv.is_capture()));
    }
}
