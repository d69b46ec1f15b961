//! Search and evaluation for draughts.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::{BotConfig, Pruning, ScoringMode, SearchConfig};
pub use error::ConfigError;
pub use eval::{INF, evaluate};
pub use search::{SearchResult, Searcher, best_turn, format_turn};
