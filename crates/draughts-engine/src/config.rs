//! Validated search and bot configuration.

use std::fmt;
use std::str::FromStr;

use draughts_core::Color;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::ConfigError;

/// Deepest search accepted by [`SearchConfig::new`].
///
/// Engine limit. A running search cannot be cancelled.
pub const MAX_DEPTH: u8 = 12;

/// Depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 4;

/// Turn limit used when none is configured.
pub const DEFAULT_MAX_TURNS: u32 = 150;

/// Seed of the shuffling RNG in deterministic mode.
pub const DETERMINISTIC_SEED: u64 = 0;

/// Whether the evaluator rewards the advancement of men.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Material only.
    Number,
    /// Material plus a small bonus per row a man has advanced.
    #[default]
    NumberAndPotential,
}

impl ScoringMode {
    /// Return the configuration name of this mode.
    pub const fn name(self) -> &'static str {
        match self {
            ScoringMode::Number => "Number",
            ScoringMode::NumberAndPotential => "NumberAndPotential",
        }
    }
}

impl FromStr for ScoringMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<ScoringMode, ConfigError> {
        match s.trim() {
            "Number" => Ok(ScoringMode::Number),
            "NumberAndPotential" => Ok(ScoringMode::NumberAndPotential),
            other => Err(ConfigError::UnknownScoringMode {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Alpha-beta cutoff switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Exhaustive minimax.
    Off,
    /// Stop expanding a node once `alpha >= beta`.
    #[default]
    AlphaBeta,
}

impl Pruning {
    /// Return the configuration name of this mode.
    pub const fn name(self) -> &'static str {
        match self {
            Pruning::Off => "Off",
            Pruning::AlphaBeta => "AlphaBeta",
        }
    }
}

impl FromStr for Pruning {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Pruning, ConfigError> {
        match s.trim() {
            "AlphaBeta" | "O1" => Ok(Pruning::AlphaBeta),
            "Off" | "O0" => Ok(Pruning::Off),
            other => Err(ConfigError::UnknownPruning {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Pruning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check a depth against `1..=MAX_DEPTH`.
fn validate_depth(depth: i64) -> Result<u8, ConfigError> {
    if (1..=i64::from(MAX_DEPTH)).contains(&depth) {
        Ok(depth as u8)
    } else {
        Err(ConfigError::InvalidDepth {
            depth,
            max: MAX_DEPTH,
        })
    }
}

/// Parameters of one search: how deep, how to score leaves, whether to prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    depth: u8,
    scoring: ScoringMode,
    pruning: Pruning,
}

impl SearchConfig {
    /// Build a configuration, rejecting depths outside `1..=MAX_DEPTH`.
    pub fn new(depth: i64, scoring: ScoringMode, pruning: Pruning) -> Result<SearchConfig, ConfigError> {
        Ok(SearchConfig {
            depth: validate_depth(depth)?,
            scoring,
            pruning,
        })
    }

    /// Maximum search depth in plies.
    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Leaf scoring mode.
    #[inline]
    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    /// Pruning mode.
    #[inline]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            scoring: ScoringMode::default(),
            pruning: Pruning::default(),
        }
    }
}

/// Configuration of the artificial player for a whole game.
///
/// The two sides may search to different depths; scoring, pruning and
/// shuffling are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotConfig {
    depths: [u8; Color::COUNT],
    scoring: ScoringMode,
    pruning: Pruning,
    deterministic: bool,
    max_turns: u32,
}

impl BotConfig {
    /// Return the search depth for `color`.
    #[inline]
    pub fn depth(&self, color: Color) -> u8 {
        self.depths[color.index()]
    }

    /// Set the search depth for `color`.
    pub fn set_depth(&mut self, color: Color, depth: i64) -> Result<(), ConfigError> {
        self.depths[color.index()] = validate_depth(depth)?;
        Ok(())
    }

    /// Return the scoring mode.
    #[inline]
    pub fn scoring(&self) -> ScoringMode {
        self.scoring
    }

    /// Set the scoring mode.
    pub fn set_scoring(&mut self, scoring: ScoringMode) {
        self.scoring = scoring;
    }

    /// Return the pruning mode.
    #[inline]
    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Set the pruning mode.
    pub fn set_pruning(&mut self, pruning: Pruning) {
        self.pruning = pruning;
    }

    /// Return `true` if move shuffling uses a fixed seed.
    #[inline]
    pub fn deterministic(&self) -> bool {
        self.deterministic
    }

    /// Choose between a fixed seed and OS entropy for move shuffling.
    pub fn set_deterministic(&mut self, deterministic: bool) {
        self.deterministic = deterministic;
    }

    /// Return the number of turns after which the game is drawn.
    #[inline]
    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    /// Set the turn limit, rejecting zero and negative values.
    pub fn set_max_turns(&mut self, value: i64) -> Result<(), ConfigError> {
        match u32::try_from(value) {
            Ok(turns) if turns > 0 => {
                self.max_turns = turns;
                Ok(())
            }
            _ => Err(ConfigError::InvalidMaxTurns { value }),
        }
    }

    /// Return the search configuration for `color`'s turns.
    pub fn search_config(&self, color: Color) -> SearchConfig {
        SearchConfig {
            depth: self.depth(color),
            scoring: self.scoring,
            pruning: self.pruning,
        }
    }

    /// Return a fresh shuffling RNG: fixed seed when deterministic, OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        if self.deterministic {
            StdRng::seed_from_u64(DETERMINISTIC_SEED)
        } else {
            StdRng::from_entropy()
        }
    }

    /// Update one option by name, as sent by `setoption name <name> value <value>`.
    ///
    /// Names: `WhiteDepth`, `BlackDepth`, `ScoringMode`, `Pruning`,
    /// `Deterministic`, `MaxTurns`. Matching is case-insensitive.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = || ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };

        match name.to_ascii_lowercase().as_str() {
            "whitedepth" => self.set_depth(Color::White, value.parse().map_err(|_| invalid())?),
            "blackdepth" => self.set_depth(Color::Black, value.parse().map_err(|_| invalid())?),
            "scoringmode" => {
                self.scoring = value.parse()?;
                Ok(())
            }
            "pruning" => {
                self.pruning = value.parse()?;
                Ok(())
            }
            "deterministic" => {
                self.deterministic = match value.to_ascii_lowercase().as_str() {
                    "true" | "1" | "on" => true,
                    "false" | "0" | "off" => false,
                    _ => return Err(invalid()),
                };
                Ok(())
            }
            "maxturns" => self.set_max_turns(value.parse().map_err(|_| invalid())?),
            _ => Err(ConfigError::UnknownOption {
                name: name.to_string(),
            }),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            depths: [DEFAULT_DEPTH; Color::COUNT],
            scoring: ScoringMode::default(),
            pruning: Pruning::default(),
            deterministic: false,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}
