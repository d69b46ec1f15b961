//! Integration tests for the turn search.
//!
//! Checks the search against an independent, exhaustive minimax over whole
//! turns that tracks the maximizing side explicitly instead of by depth
//! parity, and walks the end-to-end capture scenarios.

use draughts_core::{Board, Color, Game, Move, MoveOutcome, generate_moves, legal_moves_from};
use draughts_engine::{INF, Pruning, ScoringMode, SearchConfig, Searcher, evaluate};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Every position reachable by one complete turn of `side`, chains expanded.
fn turn_ends(board: &Board, side: Color) -> Vec<Board> {
    fn extend(board: Board, mv: Move, out: &mut Vec<Board>) {
        if mv.is_capture() {
            let next = legal_moves_from(&board, mv.to());
            if next.has_capture() {
                for link in next.as_slice() {
                    extend(board.make_move(*link), *link, out);
                }
                return;
            }
        }
        out.push(board);
    }

    let mut out = Vec::new();
    for mv in generate_moves(board, side).as_slice() {
        extend(board.make_move(*mv), *mv, &mut out);
    }
    out
}

/// Plain minimax over turns: `root` maximizes, its opponent minimizes.
fn reference(board: &Board, side: Color, turns_left: u8, root: Color, mode: ScoringMode) -> f64 {
    if turns_left == 0 {
        return evaluate(board, !root, mode);
    }
    let ends = turn_ends(board, side);
    if ends.is_empty() {
        return if side == root { 0.0 } else { INF };
    }
    let scores = ends
        .iter()
        .map(|next| reference(next, !side, turns_left - 1, root, mode));
    if side == root {
        scores.fold(f64::NEG_INFINITY, f64::max)
    } else {
        scores.fold(f64::INFINITY, f64::min)
    }
}

/// Score of the root side's best turn: the opponent replies `depth` turns deep.
fn reference_root(board: &Board, side: Color, depth: u8, mode: ScoringMode) -> f64 {
    turn_ends(board, side)
        .iter()
        .map(|next| reference(next, !side, depth, side, mode))
        .fold(0.0, f64::max)
}

/// Positions reached by seeded random play from the start, mixing both sides to move.
fn sample_positions() -> Vec<(Board, Color)> {
    let mut positions = vec![(Board::starting_position(), Color::White)];
    for seed in 0..6u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        for ply in 0..40 {
            let mut moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            moves.shuffle(&mut rng);
            let outcome = game.apply_move(moves[0]).unwrap();
            if outcome == MoveOutcome::TurnComplete && ply % 9 == 8 {
                positions.push((*game.board(), game.side_to_move()));
            }
        }
    }
    positions
}

fn config(depth: i64, scoring: ScoringMode, pruning: Pruning) -> SearchConfig {
    SearchConfig::new(depth, scoring, pruning).unwrap()
}

#[test]
fn search_matches_reference_minimax() {
    for (board, side) in sample_positions() {
        for depth in 1..=3u8 {
            for mode in [ScoringMode::Number, ScoringMode::NumberAndPotential] {
                let expected = reference_root(&board, side, depth, mode);
                for pruning in [Pruning::Off, Pruning::AlphaBeta] {
                    let searcher = Searcher::new(config(i64::from(depth), mode, pruning));
                    let result = searcher.search(&board, side, &mut StdRng::seed_from_u64(3));
                    assert_eq!(
                        result.score, expected,
                        "{pruning} depth {depth} {mode} on {board:?} ({side})"
                    );
                }
            }
        }
    }
}

#[test]
fn chosen_turn_achieves_the_reported_score() {
    for (board, side) in sample_positions() {
        let searcher = Searcher::new(config(2, ScoringMode::NumberAndPotential, Pruning::AlphaBeta));
        let result = searcher.search(&board, side, &mut StdRng::seed_from_u64(8));
        if result.turn.is_empty() {
            continue;
        }
        let mut game = Game::from_position(board, side);
        assert_eq!(game.apply_turn(&result.turn), Ok(MoveOutcome::TurnComplete));
        let after = reference(game.board(), !side, 2, side, ScoringMode::NumberAndPotential);
        assert_eq!(after, result.score, "turn {:?} on {board:?}", result.turn);
    }
}

#[test]
fn pruning_does_not_change_the_turn() {
    for (board, side) in sample_positions() {
        for seed in [1u64, 2, 3] {
            let off = Searcher::new(config(3, ScoringMode::Number, Pruning::Off))
                .search(&board, side, &mut StdRng::seed_from_u64(seed));
            let ab = Searcher::new(config(3, ScoringMode::Number, Pruning::AlphaBeta))
                .search(&board, side, &mut StdRng::seed_from_u64(seed));
            assert_eq!(off.turn, ab.turn, "seed {seed} on {board:?}");
            assert!(ab.nodes <= off.nodes);
        }
    }
}

#[test]
fn three_capture_chain_is_one_turn() {
    // White man a1; Black men b2, d4, f6 in a line, and one more on b8.
    let board: Board = ".b....../......../.....b../......../...b..../......../.b....../w......."
        .parse()
        .unwrap();
    let searcher = Searcher::new(config(2, ScoringMode::Number, Pruning::AlphaBeta));
    let result = searcher.search(&board, Color::White, &mut StdRng::seed_from_u64(0));

    let landings: Vec<String> = result.turn.iter().map(|mv| mv.to().to_string()).collect();
    assert_eq!(landings, vec!["c3", "e5", "g7"]);
    let captured: Vec<String> = result
        .turn
        .iter()
        .map(|mv| mv.captured().map(|sq| sq.to_string()).unwrap_or_default())
        .collect();
    assert_eq!(captured, vec!["b2", "d4", "f6"]);
}

#[test]
fn side_without_moves_gets_an_empty_turn() {
    // White man b1 is boxed in by a2 and c2, and d3 behind c2 is taken.
    let board: Board = "......../......../......../......../......../...b..../b.b...../.w......"
        .parse()
        .unwrap();
    let searcher = Searcher::new(config(3, ScoringMode::Number, Pruning::AlphaBeta));
    let result = searcher.search(&board, Color::White, &mut StdRng::seed_from_u64(0));
    assert!(result.turn.is_empty());
    assert_eq!(result.score, 0.0);
}

#[test]
fn evaluator_roles_are_reciprocal() {
    for (board, _) in sample_positions() {
        let white = evaluate(&board, Color::White, ScoringMode::Number);
        let black = evaluate(&board, Color::Black, ScoringMode::Number);
        if white == INF || black == INF {
            assert!(white == 0.0 || black == 0.0);
        } else {
            assert!((white * black - 1.0).abs() < 1e-12, "{white} * {black} on {board:?}");
        }
    }
}
