//! Interactive game against the CPU over line-oriented input.

use crate::config::GameConfig;
use crate::render::{render_board, result_message};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{info, instrument, warn};
use veiled_tictactoe::{Coord, CpuPause, EvalResult, Game, MoveSelector, TieBreaker};

/// Results across the games of one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayStats {
    /// Games the human won.
    pub wins: u32,
    /// Games the CPU won.
    pub losses: u32,
    /// Drawn games.
    pub draws: u32,
}

impl PlayStats {
    fn record(&mut self, game: &Game) {
        match game.status() {
            EvalResult::Won { mark, .. } if mark == game.human_mark() => self.wins += 1,
            EvalResult::Won { .. } => self.losses += 1,
            EvalResult::Draw => self.draws += 1,
            EvalResult::Ongoing => {}
        }
    }
}

/// Plays games until the human quits or declines a rematch.
///
/// Reads moves as `row col`, `row,col` or a flat index; `q` quits. End of
/// input also quits.
#[instrument(skip_all)]
pub fn play<R, W, T>(
    config: &GameConfig,
    selector: &mut MoveSelector<T>,
    input: &mut R,
    output: &mut W,
) -> Result<PlayStats>
where
    R: BufRead,
    W: Write,
    T: TieBreaker,
{
    let mut game = Game::new(
        *config.human_mark(),
        *config.human_moves_first(),
        config.reveal_policy(),
    );
    let mut stats = PlayStats::default();

    writeln!(
        output,
        "Three in a row wins. You play {}. Enter moves as `row col`, `q` to quit.",
        config.human_mark()
    )?;

    loop {
        while !game.status().is_done() {
            if game.is_human_turn() {
                write!(
                    output,
                    "\n{}Your turn (step {}) > ",
                    render_board(game.board(), *game.outer_grid_revealed()),
                    game.turn_number()
                )?;
                output.flush()?;

                let Some(line) = read_line(input)? else {
                    return Ok(stats);
                };
                let line = line.trim();
                if line.eq_ignore_ascii_case("q") {
                    return Ok(stats);
                }

                let coord = match line.parse::<Coord>() {
                    Ok(coord) => coord,
                    Err(e) => {
                        warn!(input = line, error = %e, "Rejected input");
                        writeln!(output, "{e}")?;
                        continue;
                    }
                };
                match game.play_human(coord.to_index()) {
                    Ok(placement) if placement.revealed_grid => {
                        writeln!(output, "The board is bigger than it looked...")?;
                    }
                    Ok(_) => {}
                    Err(e) => {
                        warn!(%coord, error = %e, "Rejected move");
                        writeln!(output, "{e}")?;
                    }
                }
            } else {
                let plan = game
                    .plan_cpu_move(selector)
                    .context("CPU could not choose a move")?;
                let delay = match plan.pause() {
                    CpuPause::Thinking => {
                        writeln!(output, "CPU thinking...")?;
                        config.think_delay()
                    }
                    CpuPause::Reveal => {
                        writeln!(output, "CPU ......")?;
                        config.reveal_delay()
                    }
                };
                pause(delay);

                let placement = game
                    .commit_cpu_move(plan)
                    .context("CPU move went stale")?;
                if let Some(coord) = Coord::from_index(placement.index) {
                    writeln!(output, "CPU plays {coord}")?;
                }
                if placement.revealed_grid {
                    writeln!(output, "The grid goes on past the 3x3!")?;
                }
            }
        }

        stats.record(&game);
        info!(?stats, "Game finished");
        writeln!(
            output,
            "\n{}{}",
            render_board(game.board(), true),
            result_message(game.status(), *game.human_mark())
        )?;

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_line(input)? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => game.reset(),
            _ => return Ok(stats),
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
