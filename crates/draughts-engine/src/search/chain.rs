//! Root search: picks the searching side's whole turn, capture chain included.

use draughts_core::{Board, Color, Move, Square, generate_moves, legal_moves_from};

use super::minimax::{SCORE_MAX, SCORE_MIN, SearchContext, minimax};

/// Return the best score reachable by `side` from this chain position and the moves to get there.
///
/// `from` is `None` at the start of the turn and names the capturing piece
/// while a chain is being extended. Moves are tried in shuffled order and
/// only a strictly better score replaces the current best, so ties go to
/// the first candidate. The returned path is empty when `side` has no move
/// at the start of its turn, or when the chain has just ended.
pub(super) fn best_chain(
    board: &Board,
    side: Color,
    from: Option<Square>,
    alpha: f64,
    ctx: &mut SearchContext<'_>,
) -> (f64, Vec<Move>) {
    ctx.nodes += 1;

    let mut moves = match from {
        Some(sq) => legal_moves_from(board, sq),
        None => generate_moves(board, side),
    };

    if from.is_some() && !moves.has_capture() {
        let score = minimax(board, !side, 0, alpha, SCORE_MAX, None, ctx);
        return (score, Vec::new());
    }

    moves.shuffle(&mut *ctx.rng);

    let mut best_score = SCORE_MIN;
    let mut best_path = Vec::new();
    for mv in moves.as_slice() {
        let child = board.make_move(*mv);
        let (score, rest) = if moves.has_capture() {
            best_chain(&child, side, Some(mv.to()), best_score, ctx)
        } else {
            (minimax(&child, !side, 0, best_score, SCORE_MAX, None, ctx), Vec::new())
        };

        if score > best_score {
            best_score = score;
            best_path.clear();
            best_path.push(*mv);
            best_path.extend(rest);
        }
    }

    (best_score, best_path)
}
