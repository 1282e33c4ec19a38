//! Command-line interface for veiled.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use veiled_tictactoe::{Board, Mark};

/// Veiled tic-tac-toe - a 3x3 game that turns out to be 5x5
#[derive(Parser, Debug)]
#[command(name = "veiled")]
#[command(about = "Tic-tac-toe on a board bigger than it looks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_filter: String,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the CPU in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./veiled.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for the CPU's tie-breaking
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the CPU's thinking pauses
        #[arg(long)]
        no_delay: bool,

        /// Let the CPU open the game
        #[arg(long)]
        cpu_first: bool,
    },

    /// Print the status of a board as JSON
    Evaluate {
        /// 25 cells, row by row: `.` empty, `O` circle, `X` cross
        #[arg(short, long)]
        board: Board,
    },

    /// Print the CPU's move for a board as JSON
    Suggest {
        /// 25 cells, row by row: `.` empty, `O` circle, `X` cross
        #[arg(short, long)]
        board: Board,

        /// Mark to move (`x` or `o`)
        #[arg(short, long, default_value = "x")]
        mark: Mark,

        /// 1-based turn number of the move
        #[arg(short, long)]
        turn: u32,

        /// Permit outer cells this turn
        #[arg(long)]
        allow_outer: bool,

        /// Seed for tie-breaking
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print every winning line as JSON
    Lines,
}
