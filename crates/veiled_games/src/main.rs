//! Veiled - terminal tic-tac-toe on a board bigger than it looks.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use veiled_games::{GameConfig, play};
use veiled_tictactoe::{
    Board, CandidateMode, DecisionReason, Mark, MoveContext, MoveSelector, SelectorPolicy,
    all_lines, evaluate,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_filter);

    match cli.command {
        Command::Play {
            config,
            seed,
            no_delay,
            cpu_first,
        } => run_play(config, seed, no_delay, cpu_first),
        Command::Evaluate { board } => run_evaluate(&board),
        Command::Suggest {
            board,
            mark,
            turn,
            allow_outer,
            seed,
        } => run_suggest(board, mark, turn, allow_outer, seed),
        Command::Lines => print_json(&all_lines()),
    }
}

/// Logs to stderr so the board on stdout stays readable.
fn init_tracing(fallback: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    no_delay: bool,
    cpu_first: bool,
) -> Result<()> {
    let mut config =
        GameConfig::load(config_path.as_deref()).context("Failed to load game config")?;
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    if no_delay {
        config = config.with_think_delay_ms(0).with_reveal_delay_ms(0);
    }
    if cpu_first {
        config = config.with_human_moves_first(false);
    }
    debug!(?config, "Effective config");

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout().lock();

    let stats = match *config.seed() {
        Some(seed) => {
            let mut selector = MoveSelector::seeded(config.selector_policy(), seed);
            play(&config, &mut selector, &mut input, &mut output)?
        }
        None => {
            let mut selector = MoveSelector::from_entropy(config.selector_policy());
            play(&config, &mut selector, &mut input, &mut output)?
        }
    };

    info!(?stats, "Session over");
    println!(
        "\nWins {} / Losses {} / Draws {}",
        stats.wins, stats.losses, stats.draws
    );
    Ok(())
}

#[instrument(skip(board))]
fn run_evaluate(board: &Board) -> Result<()> {
    print_json(&evaluate(board))
}

/// CPU move as printed by `suggest`.
#[derive(Debug, Serialize)]
struct Suggestion {
    index: usize,
    row: usize,
    col: usize,
    reason: DecisionReason,
    mode: CandidateMode,
}

#[instrument(skip(board))]
fn run_suggest(
    mut board: Board,
    mark: Mark,
    turn: u32,
    allow_outer: bool,
    seed: Option<u64>,
) -> Result<()> {
    let ctx = MoveContext {
        board: &mut board,
        cpu_mark: mark,
        opponent_mark: mark.opponent(),
        turn_number: turn,
        allow_outer,
    };
    let decision = match seed {
        Some(seed) => MoveSelector::seeded(SelectorPolicy::default(), seed).decide(ctx),
        None => MoveSelector::from_entropy(SelectorPolicy::default()).decide(ctx),
    }
    .context("Board is full, no move to suggest")?;

    let coord = decision.coord().context("Selector returned an off-board index")?;
    print_json(&Suggestion {
        index: decision.index,
        row: coord.row,
        col: coord.col,
        reason: decision.reason,
        mode: decision.mode,
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
