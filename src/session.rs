//! Interaction state for one game: selection, resolve lock, and move stats.
//!
//! The engine functions stay pure; this is the caller-side state machine the
//! front end drives with tile clicks.

use crate::board::{create_board, creates_match_unchecked, swap_cells};
use crate::config::EngineConfig;
use crate::error::SessionError;
use crate::hint::{find_hint, has_any_moves};
use crate::resolver::resolve_board;
use crate::rng::RandomSource;
use crate::types::{is_adjacent, Board, Hint};
use serde::Serialize;

/// Where the player is in a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", content = "index", rename_all = "camelCase")]
pub enum Phase {
    Idle,
    Selecting(usize),
    /// A committed swap is being resolved; input is locked.
    Resolving,
}

/// Result of a single tile click.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClickOutcome {
    /// Input is locked while resolving.
    Ignored,
    Selected { index: usize },
    Deselected,
    /// A non-adjacent tile replaced the selection.
    Reselected { index: usize },
    /// Adjacent swap without a match; the board is unchanged.
    InvalidSwap { a: usize, b: usize },
    #[serde(rename_all = "camelCase")]
    Resolved {
        cleared: usize,
        cascades: u32,
        no_moves: bool,
    },
}

/// Counters the HUD shows. Scoring is layered on top by the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub moves: u32,
    pub last_cleared: usize,
    pub last_cascades: u32,
    pub total_cleared: usize,
    pub best_cascade: u32,
}

pub struct GameSession<R: RandomSource> {
    config: EngineConfig,
    rng: R,
    board: Board,
    phase: Phase,
    stats: Stats,
    hint: Option<Hint>,
    no_moves: bool,
}

impl<R: RandomSource> GameSession<R> {
    pub fn new(config: EngineConfig, mut rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        let board = create_board(config.size, config.kinds, config.max_draw_attempts, &mut rng)?;
        let no_moves = !has_any_moves(&board);
        Ok(Self {
            config,
            rng,
            board,
            phase: Phase::Idle,
            stats: Stats::default(),
            hint: None,
            no_moves,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Currently highlighted hint, cleared by most clicks.
    pub fn current_hint(&self) -> Option<Hint> {
        self.hint
    }

    /// True when the board has no valid swap left.
    pub fn no_moves(&self) -> bool {
        self.no_moves
    }

    /// Handle a click on `index`.
    ///
    /// A committed move holds [`Phase::Resolving`] only while it resolves and
    /// returns to [`Phase::Idle`] before this call returns.
    pub fn click(&mut self, index: usize) -> Result<ClickOutcome, SessionError> {
        self.board.check_position(index)?;

        let selected = match self.phase {
            Phase::Resolving => return Ok(ClickOutcome::Ignored),
            Phase::Idle => {
                self.phase = Phase::Selecting(index);
                return Ok(ClickOutcome::Selected { index });
            }
            Phase::Selecting(selected) => selected,
        };

        if selected == index {
            self.phase = Phase::Idle;
            return Ok(ClickOutcome::Deselected);
        }

        if !is_adjacent(selected, index, self.board.size()) {
            self.phase = Phase::Selecting(index);
            self.hint = None;
            return Ok(ClickOutcome::Reselected { index });
        }

        self.hint = None;
        if !creates_match_unchecked(&self.board, selected, index) {
            self.phase = Phase::Idle;
            return Ok(ClickOutcome::InvalidSwap { a: selected, b: index });
        }

        self.phase = Phase::Resolving;
        let resolved = swap_cells(&self.board, selected, index).and_then(|swapped| {
            resolve_board(&swapped, self.config.kinds, self.config.max_cascades, &mut self.rng)
        });
        self.phase = Phase::Idle;
        let result = resolved?;

        self.board = result.board;
        self.stats.moves += 1;
        self.stats.last_cleared = result.cleared;
        self.stats.last_cascades = result.cascades;
        self.stats.total_cleared += result.cleared;
        self.stats.best_cascade = self.stats.best_cascade.max(result.cascades);
        self.no_moves = !has_any_moves(&self.board);

        Ok(ClickOutcome::Resolved {
            cleared: result.cleared,
            cascades: result.cascades,
            no_moves: self.no_moves,
        })
    }

    /// Compute and remember a hint for the current board.
    pub fn hint(&mut self) -> Option<Hint> {
        self.hint = find_hint(&self.board);
        self.hint
    }

    /// Start a new game: fresh board, stats cleared.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.regenerate()?;
        self.stats = Stats::default();
        Ok(())
    }

    /// Replace the board but keep the running totals.
    pub fn shuffle(&mut self) -> Result<(), SessionError> {
        self.regenerate()?;
        self.stats.last_cleared = 0;
        self.stats.last_cascades = 0;
        Ok(())
    }

    fn regenerate(&mut self) -> Result<(), SessionError> {
        self.board = create_board(
            self.config.size,
            self.config.kinds,
            self.config.max_draw_attempts,
            &mut self.rng,
        )?;
        self.phase = Phase::Idle;
        self.hint = None;
        self.no_moves = !has_any_moves(&self.board);
        Ok(())
    }
}
