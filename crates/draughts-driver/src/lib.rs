//! Line protocol driver for the draughts bot.

pub mod command;
pub mod engine;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use engine::DraughtsEngine;
pub use error::DriverError;
pub use session::Session;
