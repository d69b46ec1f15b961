//! Turn search: root chain-builder on top of a depth-bounded minimax.

mod chain;
mod minimax;

use draughts_core::{Board, Color, Move};
use rand::Rng;
use tracing::debug;

use crate::config::SearchConfig;

use chain::best_chain;
use minimax::{SCORE_MIN, SearchContext};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The chosen turn: one move, or every link of a capture chain. Empty when
    /// the side to move has no legal move.
    pub turn: Vec<Move>,
    /// Minimax score of the turn as the searching side's material over the
    /// opponent's: [`INF`](crate::eval::INF) is a forced win, `0` a loss.
    pub score: f64,
    /// Total nodes visited during the search.
    pub nodes: u64,
}

/// Fixed-depth searcher for one side's turns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Return the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Pick the best turn for `side` on `board`.
    ///
    /// `rng` shuffles the candidate moves at every step of the turn, so
    /// equally good turns are chosen at random. The board is not modified.
    pub fn search<R: Rng>(&self, board: &Board, side: Color, rng: &mut R) -> SearchResult {
        let mut ctx = SearchContext {
            config: &self.config,
            root: side,
            nodes: 0,
            rng,
        };

        let (score, turn) = best_chain(board, side, None, SCORE_MIN, &mut ctx);
        let score = if turn.is_empty() { 0.0 } else { score };

        debug!(
            side = side.name(),
            depth = self.config.depth(),
            turn = %format_turn(&turn),
            score,
            nodes = ctx.nodes,
            "search complete"
        );

        SearchResult {
            turn,
            score,
            nodes: ctx.nodes,
        }
    }
}

/// Return the best turn for `side`, or an empty list if it has no legal move.
pub fn best_turn<R: Rng>(board: &Board, side: Color, config: &SearchConfig, rng: &mut R) -> Vec<Move> {
    Searcher::new(*config).search(board, side, rng).turn
}

/// Join the moves of a turn with spaces, `none` for an empty turn.
pub fn format_turn(turn: &[Move]) -> String {
    if turn.is_empty() {
        return "none".to_string();
    }
    turn.iter().map(|mv| mv.to_notation()).collect::<Vec<_>>().join(" ")
}
