//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};
use veiled_tictactoe::{
    CPU_GRID_REVEAL_FROM_TURN, Mark, OUTER_REVEAL_TURNS, PREFER_CENTER_THROUGH_TURN, RevealPolicy,
    SelectorPolicy,
};

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "veiled.toml";

/// Settings for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Turns on which the CPU may play outside the center.
    #[serde(default = "default_reveal_turns")]
    reveal_turns: Vec<u32>,

    /// Last turn on which the CPU keeps to the center.
    #[serde(default = "default_prefer_center_through_turn")]
    prefer_center_through_turn: u32,

    /// First turn on which an outer CPU move uncovers the grid.
    #[serde(default = "default_cpu_grid_reveal_from_turn")]
    cpu_grid_reveal_from_turn: u32,

    /// Mark the human plays.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Whether the human opens the game.
    #[serde(default = "default_human_moves_first")]
    human_moves_first: bool,

    /// Ordinary CPU thinking pause in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Pause before the CPU's first outer move, in milliseconds.
    #[serde(default = "default_reveal_delay_ms")]
    reveal_delay_ms: u64,

    /// Fixed seed for tie-breaking. Random when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_reveal_turns() -> Vec<u32> {
    OUTER_REVEAL_TURNS.to_vec()
}

fn default_prefer_center_through_turn() -> u32 {
    PREFER_CENTER_THROUGH_TURN
}

fn default_cpu_grid_reveal_from_turn() -> u32 {
    CPU_GRID_REVEAL_FROM_TURN
}

fn default_human_mark() -> Mark {
    Mark::Circle
}

fn default_human_moves_first() -> bool {
    true
}

fn default_think_delay_ms() -> u64 {
    300
}

fn default_reveal_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            reveal_turns: default_reveal_turns(),
            prefer_center_through_turn: default_prefer_center_through_turn(),
            cpu_grid_reveal_from_turn: default_cpu_grid_reveal_from_turn(),
            human_mark: default_human_mark(),
            human_moves_first: default_human_moves_first(),
            think_delay_ms: default_think_delay_ms(),
            reveal_delay_ms: default_reveal_delay_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path`, or [`DEFAULT_CONFIG_PATH`] when `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                info!(path = DEFAULT_CONFIG_PATH, "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reveal_turns.contains(&0) {
            return Err(ConfigError::new(
                "reveal_turns must not contain 0: turns start at 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Candidate policy for the CPU.
    pub fn selector_policy(&self) -> SelectorPolicy {
        SelectorPolicy::new(self.prefer_center_through_turn)
    }

    /// Reveal settings for the game session.
    pub fn reveal_policy(&self) -> RevealPolicy {
        RevealPolicy::new(self.reveal_turns.clone(), self.cpu_grid_reveal_from_turn)
    }

    /// Ordinary CPU pause.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// Dramatic pause before the CPU's first outer move.
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
