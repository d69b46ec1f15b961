//! TOML settings file for the bot.
//!
//! ```toml
//! [bot]
//! white_depth = 4
//! black_depth = 6
//! scoring_mode = "NumberAndPotential"
//! pruning = "AlphaBeta"
//! deterministic = false
//!
//! [game]
//! max_turns = 150
//! ```
//!
//! Every key is optional.

use std::path::Path;

use anyhow::{Context, Result};
use draughts_core::Color;
use draughts_engine::config::{DEFAULT_DEPTH, DEFAULT_MAX_TURNS};
use draughts_engine::{BotConfig, ConfigError, Pruning, ScoringMode};
use serde::Deserialize;

/// Contents of the settings file, before validation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub bot: BotSettings,
    pub game: GameSettings,
}

/// The `[bot]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BotSettings {
    pub white_depth: i64,
    pub black_depth: i64,
    pub scoring_mode: String,
    pub pruning: String,
    pub deterministic: bool,
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            white_depth: i64::from(DEFAULT_DEPTH),
            black_depth: i64::from(DEFAULT_DEPTH),
            scoring_mode: ScoringMode::default().name().to_string(),
            pruning: Pruning::default().name().to_string(),
            deterministic: false,
        }
    }
}

/// The `[game]` table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    pub max_turns: i64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            max_turns: i64::from(DEFAULT_MAX_TURNS),
        }
    }
}

impl Settings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Settings> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse settings file {}", path.display()))
    }

    /// Validate the settings into the bot configuration.
    pub fn into_bot_config(self) -> Result<BotConfig, ConfigError> {
        let mut config = BotConfig::default();
        config.set_depth(Color::White, self.bot.white_depth)?;
        config.set_depth(Color::Black, self.bot.black_depth)?;
        config.set_scoring(self.bot.scoring_mode.parse()?);
        config.set_pruning(self.bot.pruning.parse()?);
        config.set_deterministic(self.bot.deterministic);
        config.set_max_turns(self.game.max_turns)?;
        Ok(config)
    }
}
