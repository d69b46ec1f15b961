//! Driver protocol errors.

use draughts_core::{LayoutError, MoveError, Square};
use draughts_engine::ConfigError;

/// Errors that can occur while handling a protocol line.
///
/// None of these end the session: the driver answers `error <message>`
/// and keeps reading.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    /// The `position` command is missing `startpos` or a layout.
    #[error("malformed position command: expected startpos or <layout> <w|b>")]
    MalformedPosition,

    /// A board layout could not be parsed.
    #[error("invalid layout {layout}: {source}")]
    InvalidLayout {
        /// The layout text.
        layout: String,
        /// Why it was rejected.
        #[source]
        source: LayoutError,
    },

    /// A side letter other than `w` or `b`.
    #[error("invalid side: {side}")]
    InvalidSide {
        /// The rejected text.
        side: String,
    },

    /// A square name that is not `a1`..`h8`.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The rejected text.
        square: String,
    },

    /// A move that is not `<from>-<to>`, `<from>x<to>` or `<from><to>`.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The rejected text.
        text: String,
    },

    /// A command was sent without a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// What is missing.
        argument: &'static str,
    },

    /// An argument that does not parse.
    #[error("{command}: invalid value {value}")]
    InvalidArgument {
        /// The command name.
        command: &'static str,
        /// The rejected text.
        value: String,
    },

    /// `setoption` without `name <name> value <value>`.
    #[error("malformed setoption command: expected name <name> value <value>")]
    MalformedSetOption,

    /// The bot was asked to move in the middle of the human's capture chain.
    #[error("capture chain in progress from {square}")]
    ChainInProgress {
        /// Square of the capturing piece.
        square: Square,
    },

    /// `undo` with no turn to take back.
    #[error("nothing to undo")]
    NothingToUndo,

    /// A search is running and owns the game.
    #[error("search in progress")]
    Busy,

    /// The search thread panicked. The game it owned is lost, so the driver stops.
    #[error("search failed: {message}")]
    SearchPanicked {
        /// The panic message.
        message: String,
    },

    /// Rejected configuration value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rejected move.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// An I/O error occurred while reading from stdin.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
