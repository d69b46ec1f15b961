//! Position evaluation as a material ratio.

pub mod material;

use draughts_core::{Board, Color};

use crate::config::ScoringMode;

use self::material::Material;

/// Score of a position where the scored-against side has nothing left.
pub const INF: f64 = 1e9;

/// Score `board` as the ratio of the opponent's material to `side`'s material.
///
/// Larger values are better for the opponent of `side`. Returns [`INF`]
/// when `side` has no pieces and `0.0` when the opponent has none.
///
/// The search calls this with the opponent of the searching side, so its
/// leaves read "my material over yours".
pub fn evaluate(board: &Board, side: Color, mode: ScoringMode) -> f64 {
    let own = Material::of(board, side, mode);
    if own.is_empty() {
        return INF;
    }
    let opponent = Material::of(board, !side, mode);
    if opponent.is_empty() {
        return 0.0;
    }
    opponent.value(mode) / own.value(mode)
}
