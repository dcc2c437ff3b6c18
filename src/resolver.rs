//! Resolver: clear matches and collapse until the board settles.

use crate::board::{clear_positions, collapse};
use crate::config::check_kinds;
use crate::error::BoardError;
use crate::matcher::find_matches;
use crate::rng::RandomSource;
use crate::types::{Board, ResolveResult};

/// Repeatedly clear every match and collapse/refill until none remain.
///
/// A board without matches comes back unchanged with zero counts. Cells
/// outside `0..kinds` are rejected up front. Returns
/// [`BoardError::CascadeLimit`] if matches are still present after
/// `max_cascades` passes.
pub fn resolve_board<R: RandomSource + ?Sized>(
    board: &Board,
    kinds: usize,
    max_cascades: u32,
    rng: &mut R,
) -> Result<ResolveResult, BoardError> {
    check_kinds(kinds)?;
    board.check_values(kinds)?;

    let mut working = board.clone();
    let mut cleared = 0usize;
    let mut cascades = 0u32;

    loop {
        let matches = find_matches(&working);
        if matches.is_empty() {
            break;
        }
        if cascades >= max_cascades {
            return Err(BoardError::CascadeLimit { cascades });
        }

        cleared += matches.len();
        cascades += 1;

        let emptied = clear_positions(&working, &matches)?;
        working = collapse(&emptied, working.size(), kinds, rng)?;
    }

    Ok(ResolveResult { board: working, cleared, cascades })
}
