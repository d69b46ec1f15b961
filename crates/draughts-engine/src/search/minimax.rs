//! Depth-bounded minimax with alpha-beta pruning over capture chains.
//!
//! Plies are counted from the first reply to the searching side's turn:
//! depth 0 is the opponent to move, depth 1 the searching side, and so on.
//! Even depths minimise (tightening `beta`), odd depths maximise
//! (tightening `alpha`). A capture chain continues at the same depth with
//! the same side to move, fixed on the capturing piece.

use draughts_core::{Board, Color, Square, generate_moves, legal_moves_from};
use rand::RngCore;

use crate::config::{Pruning, SearchConfig};
use crate::eval::{INF, evaluate};

/// Lower bound below every reachable score.
pub(super) const SCORE_MIN: f64 = -1.0;

/// Upper bound above every reachable score.
pub(super) const SCORE_MAX: f64 = INF + 1.0;

/// Mutable state threaded through one search.
pub(crate) struct SearchContext<'a> {
    /// Search parameters.
    pub config: &'a SearchConfig,
    /// The side the search picks a turn for.
    pub root: Color,
    /// Nodes visited so far.
    pub nodes: u64,
    /// Shuffles root-level move lists.
    pub rng: &'a mut dyn RngCore,
}

/// Return the minimax score of `board` with `side` to move at `depth`.
///
/// `from` is set while `side` is in the middle of a capture chain and
/// names the square of the capturing piece.
pub(super) fn minimax(
    board: &Board,
    side: Color,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    from: Option<Square>,
    ctx: &mut SearchContext<'_>,
) -> f64 {
    ctx.nodes += 1;

    if depth == ctx.config.depth() {
        return evaluate(board, !ctx.root, ctx.config.scoring());
    }

    let moves = match from {
        Some(sq) => legal_moves_from(board, sq),
        None => generate_moves(board, side),
    };

    // Chain over: the turn passes to the other side.
    if from.is_some() && !moves.has_capture() {
        return minimax(board, !side, depth + 1, alpha, beta, None, ctx);
    }

    let maximizing = depth % 2 == 1;
    if moves.is_empty() {
        return if maximizing { 0.0 } else { INF };
    }

    let mut min_score = SCORE_MAX;
    let mut max_score = SCORE_MIN;
    for mv in moves.as_slice() {
        let child = board.make_move(*mv);
        let score = if moves.has_capture() {
            minimax(&child, side, depth, alpha, beta, Some(mv.to()), ctx)
        } else {
            minimax(&child, !side, depth + 1, alpha, beta, None, ctx)
        };

        min_score = min_score.min(score);
        max_score = max_score.max(score);
        if maximizing {
            alpha = alpha.max(max_score);
        } else {
            beta = beta.min(min_score);
        }

        if ctx.config.pruning() == Pruning::AlphaBeta && alpha >= beta {
            break;
        }
    }

    if maximizing { max_score } else { min_score }
}
