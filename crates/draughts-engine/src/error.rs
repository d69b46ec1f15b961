//! Configuration errors.

/// Errors raised while building or updating a search configuration.
///
/// Every invalid value is rejected here, so a search never starts with a
/// configuration it cannot honour.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Search depth below 1, or above the engine's `MAX_DEPTH` cap.
    #[error("invalid search depth {depth}: must be at least 1 and at most the engine limit of {max}")]
    InvalidDepth {
        /// The rejected depth.
        depth: i64,
        /// The largest accepted depth.
        max: u8,
    },

    /// Scoring mode name not recognised.
    #[error("unknown scoring mode: {name} (expected Number or NumberAndPotential)")]
    UnknownScoringMode {
        /// The rejected name.
        name: String,
    },

    /// Pruning mode name not recognised.
    #[error("unknown pruning mode: {name} (expected AlphaBeta, O1, Off or O0)")]
    UnknownPruning {
        /// The rejected name.
        name: String,
    },

    /// Turn limit of zero.
    #[error("invalid turn limit {value}: must be positive")]
    InvalidMaxTurns {
        /// The rejected limit.
        value: i64,
    },

    /// Option value that does not parse as the option's type.
    #[error("invalid value for {name}: {value}")]
    InvalidValue {
        /// Option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// Option name not recognised.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The rejected name.
        name: String,
    },
}
