//! Veiled Games - terminal front end for veiled tic-tac-toe
//!
//! Loads [`GameConfig`] from TOML, renders the board as text and runs an
//! interactive session against the CPU.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod play;
mod render;

pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use play::{PlayStats, play};
pub use render::{render_board, result_message};
