//! Headless game session: turn order, move validation and the outer-grid
//! reveal state that a front end animates.

use crate::action::{MoveError, Placement};
use crate::ai::{Decision, MoveContext, MoveSelector, TieBreaker};
use crate::consts::{CELL_COUNT, CPU_GRID_REVEAL_FROM_TURN, OUTER_REVEAL_TURNS};
use crate::coords::is_outer_zone;
use crate::rules::{EvalResult, evaluate};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// When outer cells open up for the CPU and when its outer moves uncover
/// the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct RevealPolicy {
    /// Turns on which the CPU may play outer cells.
    reveal_turns: Vec<u32>,
    /// First turn on which an outer CPU move uncovers the grid.
    cpu_grid_reveal_from_turn: u32,
}

impl RevealPolicy {
    /// Whether the CPU may play outer cells on `turn_number`.
    pub fn allows_outer(&self, turn_number: u32) -> bool {
        self.reveal_turns.contains(&turn_number)
    }
}

impl Default for RevealPolicy {
    fn default() -> Self {
        Self {
            reveal_turns: OUTER_REVEAL_TURNS.to_vec(),
            cpu_grid_reveal_from_turn: CPU_GRID_REVEAL_FROM_TURN,
        }
    }
}

/// How long the front end should hold the CPU move before committing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CpuPause {
    /// Ordinary thinking delay.
    Thinking,
    /// First outer move on a reveal turn: a longer, dramatic pause.
    Reveal,
}

/// A CPU move chosen but not yet applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuPlan {
    decision: Decision,
    pause: CpuPause,
    turn_number: u32,
}

impl CpuPlan {
    /// The selector's decision.
    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    /// Cell the CPU will take.
    pub fn index(&self) -> usize {
        self.decision.index
    }

    /// Pause to show before committing.
    pub fn pause(&self) -> CpuPause {
        self.pause
    }
}

/// One game between a human and the CPU.
#[derive(Debug, Clone, Getters)]
pub struct Game {
    /// Current board.
    board: Board,
    /// Side to move.
    to_move: Mark,
    /// Turn number of the next placement (1-based).
    turn_number: u32,
    /// The human's mark.
    human_mark: Mark,
    /// Board status.
    status: EvalResult,
    /// Indices in the order they were played.
    history: Vec<usize>,
    /// Whether the outer grid has been uncovered.
    outer_grid_revealed: bool,
    /// Whether the CPU has used its dramatic pause.
    cpu_reveal_used: bool,
    /// Reveal settings.
    reveal_policy: RevealPolicy,
    #[getter(skip)]
    human_moves_first: bool,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new(human_mark: Mark, human_moves_first: bool, reveal_policy: RevealPolicy) -> Self {
        let to_move = if human_moves_first {
            human_mark
        } else {
            human_mark.opponent()
        };
        info!(%human_mark, human_moves_first, "New game");
        Self {
            board: Board::new(),
            to_move,
            turn_number: 1,
            human_mark,
            status: EvalResult::Ongoing,
            history: Vec::new(),
            outer_grid_revealed: false,
            cpu_reveal_used: false,
            reveal_policy,
            human_moves_first,
        }
    }

    /// Starts over with the same players and policy.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(
            self.human_mark,
            self.human_moves_first,
            self.reveal_policy.clone(),
        );
    }

    /// The CPU's mark.
    pub fn cpu_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Whether it is the human's turn in a running game.
    pub fn is_human_turn(&self) -> bool {
        !self.status.is_done() && self.to_move == self.human_mark
    }

    /// Whether the CPU may play outer cells this turn.
    pub fn allow_outer(&self) -> bool {
        self.reveal_policy.allows_outer(self.turn_number)
    }

    /// Plays the human's mark at `index`.
    ///
    /// The first human move onto an outer cell uncovers the outer grid.
    #[instrument(skip(self), fields(turn = self.turn_number))]
    pub fn play_human(&mut self, index: usize) -> Result<Placement, MoveError> {
        self.check_turn(self.human_mark)?;
        self.check_cell(index)?;

        let revealed_grid = is_outer_zone(index) && !self.outer_grid_revealed;
        if revealed_grid {
            info!(index, "Human opened the outer grid");
            self.outer_grid_revealed = true;
        }
        Ok(self.apply(index, self.human_mark, revealed_grid))
    }

    /// Chooses the CPU's move without applying it.
    ///
    /// The front end waits according to [`CpuPlan::pause`] and then calls
    /// [`Game::commit_cpu_move`].
    #[instrument(skip(self, selector), fields(turn = self.turn_number))]
    pub fn plan_cpu_move<T: TieBreaker>(
        &mut self,
        selector: &mut MoveSelector<T>,
    ) -> Result<CpuPlan, MoveError> {
        let cpu_mark = self.cpu_mark();
        self.check_turn(cpu_mark)?;

        let allow_outer = self.allow_outer();
        let decision = selector
            .decide(MoveContext {
                board: &mut self.board,
                cpu_mark,
                opponent_mark: self.human_mark,
                turn_number: self.turn_number,
                allow_outer,
            })
            .ok_or(MoveError::NoMoveAvailable)?;

        let dramatic = !self.cpu_reveal_used
            && is_outer_zone(decision.index)
            && self.reveal_policy.allows_outer(self.turn_number);
        let pause = if dramatic {
            self.cpu_reveal_used = true;
            CpuPause::Reveal
        } else {
            CpuPause::Thinking
        };

        debug!(index = decision.index, ?pause, "CPU move planned");
        Ok(CpuPlan {
            decision,
            pause,
            turn_number: self.turn_number,
        })
    }

    /// Applies a planned CPU move.
    ///
    /// Fails if the game ended, the turn moved on, or the cell was filled
    /// since the plan was made.
    #[instrument(skip(self), fields(index = plan.index()))]
    pub fn commit_cpu_move(&mut self, plan: CpuPlan) -> Result<Placement, MoveError> {
        let cpu_mark = self.cpu_mark();
        self.check_turn(cpu_mark)?;
        if plan.turn_number != self.turn_number {
            return Err(MoveError::WrongPlayer(cpu_mark));
        }
        let index = plan.index();
        self.check_cell(index)?;

        let revealed_grid = is_outer_zone(index)
            && self.turn_number >= *self.reveal_policy.cpu_grid_reveal_from_turn()
            && !self.outer_grid_revealed;
        if revealed_grid {
            info!(index, "CPU opened the outer grid");
            self.outer_grid_revealed = true;
        }
        Ok(self.apply(index, cpu_mark, revealed_grid))
    }

    fn check_turn(&self, mark: Mark) -> Result<(), MoveError> {
        if self.status.is_done() {
            return Err(MoveError::GameOver);
        }
        if self.to_move != mark {
            return Err(MoveError::WrongPlayer(mark));
        }
        Ok(())
    }

    fn check_cell(&self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.is_empty(index) {
            return Err(MoveError::SquareOccupied(index));
        }
        Ok(())
    }

    fn apply(&mut self, index: usize, mark: Mark, revealed_grid: bool) -> Placement {
        let turn_number = self.turn_number;
        self.board.place(index, mark);
        self.history.push(index);
        self.status = evaluate(&self.board);

        match self.status {
            EvalResult::Ongoing => {
                self.to_move = mark.opponent();
                self.turn_number += 1;
            }
            EvalResult::Won { mark: winner, .. } => info!(%winner, turn_number, "Game won"),
            EvalResult::Draw => info!(turn_number, "Game drawn"),
        }

        Placement::new(index, mark, turn_number, revealed_grid, self.status)
    }
}
