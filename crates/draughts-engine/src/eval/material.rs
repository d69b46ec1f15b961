//! Material tallies per side.
//!
//! Each man counts 1, each king counts [`king_weight`]. Under
//! [`ScoringMode::NumberAndPotential`] a man also earns
//! [`POTENTIAL_PER_ROW`] for every row it has advanced from its own back row.

use draughts_core::{Board, Color, PieceKind};

use crate::config::ScoringMode;

/// Bonus per row of advancement for a man, in potential mode.
pub const POTENTIAL_PER_ROW: f64 = 0.05;

/// Weight of a king relative to a man.
///
/// | Mode               | King |
/// |--------------------|------|
/// | Number             | 4    |
/// | NumberAndPotential | 5    |
pub const fn king_weight(mode: ScoringMode) -> f64 {
    match mode {
        ScoringMode::Number => 4.0,
        ScoringMode::NumberAndPotential => 5.0,
    }
}

/// Men and kings of one side, with the men's advancement bonus folded in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Number of men plus their potential bonus.
    pub men: f64,
    /// Number of kings.
    pub kings: f64,
}

impl Material {
    /// Tally `color`'s pieces on `board`.
    pub fn of(board: &Board, color: Color, mode: ScoringMode) -> Material {
        let mut material = Material { men: 0.0, kings: 0.0 };
        for (sq, piece) in board.squares_of(color) {
            match piece.kind() {
                PieceKind::King => material.kings += 1.0,
                PieceKind::Man => {
                    material.men += 1.0;
                    if mode == ScoringMode::NumberAndPotential {
                        let advanced = sq.row().abs_diff(color.back_row());
                        material.men += POTENTIAL_PER_ROW * f64::from(advanced);
                    }
                }
            }
        }
        material
    }

    /// Return `true` if the side has no pieces at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.men == 0.0 && self.kings == 0.0
    }

    /// Weighted value: men plus kings times [`king_weight`].
    #[inline]
    pub fn value(&self, mode: ScoringMode) -> f64 {
        self.men + self.kings * king_weight(mode)
    }
}
