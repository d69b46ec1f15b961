//! Perft (performance test) for move generation correctness verification.
//!
//! Nodes are counted per turn: a capture chain is expanded to its end and
//! counts as a single ply, one leaf per distinct chain.

use crate::board::Board;
use crate::color::Color;
use crate::draughts_move::Move;
use crate::movegen::{generate_moves, legal_moves_from};

/// Count the number of leaf positions `depth` turns ahead of `board` with `side` to move.
///
/// Depth 0 returns 1 (the current position).
pub fn perft(board: &Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board, side);
    let mut nodes = 0u64;
    for mv in moves.as_slice() {
        nodes += finish_turn(&board.make_move(*mv), *mv, side, depth);
    }
    nodes
}

/// Follow a capture chain started by `mv` to every possible end, then recurse.
fn finish_turn(board: &Board, mv: Move, side: Color, depth: usize) -> u64 {
    if mv.is_capture() {
        let next = legal_moves_from(board, mv.to());
        if next.has_capture() {
            return next
                .as_slice()
                .iter()
                .map(|link| finish_turn(&board.make_move(*link), *link, side, depth))
                .sum();
        }
    }
    perft(board, !side, depth - 1)
}

/// Run perft with per-first-move breakdown (useful for debugging).
///
/// Returns a vector of `(notation, node_count)` pairs sorted alphabetically.
pub fn divide(board: &Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_moves(board, side);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|mv| {
            let count = if depth == 0 {
                1
            } else {
                finish_turn(&board.make_move(*mv), *mv, side, depth)
            };
            (mv.to_notation(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 1), 7);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 2), 49);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 3), 302);
    }

    #[test]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 4), 1_469);
    }

    #[test]
    fn perft_startpos_depth_5() {
        // Backward captures by men make this differ from the usual 7361.
        assert_eq!(perft(&Board::starting_position(), Color::White, 5), 7_482);
    }

    #[test]
    fn perft_startpos_depth_6() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 6), 37_986);
    }

    #[test]
    fn chain_counts_as_one_turn() {
        // White man a1 with a forced three-capture chain; Black keeps one man on b8.
        let board: Board = ".b....../......../.....b../......../...b..../......../.b....../w......."
            .parse()
            .unwrap();
        assert_eq!(perft(&board, Color::White, 1), 1);
        let results = divide(&board, Color::White, 1);
        assert_eq!(results, vec![("a1xc3".to_string(), 1)]);
    }

    #[test]
    fn divide_startpos_depth_1() {
        let results = divide(&Board::starting_position(), Color::White, 1);
        assert_eq!(results.len(), 7);
        for (_, count) in &results {
            assert_eq!(*count, 1);
        }
    }

    #[test]
    fn perft_depth_0() {
        assert_eq!(perft(&Board::starting_position(), Color::White, 0), 1);
    }
}
