//! Board generation, swapping, and collapse/refill.
//!
//! Every operation returns a new board; inputs are never mutated.

use crate::config::check_kinds;
use crate::error::BoardError;
use crate::matcher::find_matches_in;
use crate::rng::{random_kind, RandomSource};
use crate::types::{cell_count, to_index, Board, MatchSet, EMPTY};

/// True if placing `kind` at (row, col) completes a run of three with the two
/// cells to its left or the two cells above it.
///
/// Only those cells can already be filled when generating in row-major order.
fn completes_run(cells: &[u8], row: usize, col: usize, size: usize, kind: u8) -> bool {
    if col >= 2 {
        let left = cells[to_index(row, col - 1, size)];
        let left_left = cells[to_index(row, col - 2, size)];
        if left == kind && left_left == kind {
            return true;
        }
    }

    if row >= 2 {
        let up = cells[to_index(row - 1, col, size)];
        let up_up = cells[to_index(row - 2, col, size)];
        if up == kind && up_up == kind {
            return true;
        }
    }

    false
}

/// Generate a board with no pre-existing matches.
///
/// Each cell is drawn by rejection sampling. After `max_draw_attempts`
/// rejected draws the lowest kind that avoids both local runs is used instead;
/// with at least three kinds one always exists.
pub fn create_board<R: RandomSource + ?Sized>(
    size: usize,
    kinds: usize,
    max_draw_attempts: u32,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let total = cell_count(size)?;
    check_kinds(kinds)?;

    let mut cells = vec![EMPTY; total];

    for row in 0..size {
        for col in 0..size {
            let mut kind = random_kind(rng, kinds);
            let mut attempts = 1;
            while completes_run(&cells, row, col, size, kind) {
                if attempts >= max_draw_attempts {
                    kind = (0..kinds as u8)
                        .find(|&k| !completes_run(&cells, row, col, size, k))
                        .unwrap_or(kind);
                    break;
                }
                kind = random_kind(rng, kinds);
                attempts += 1;
            }
            cells[to_index(row, col, size)] = kind;
        }
    }

    Ok(Board::from_raw(size, cells))
}

/// Exchange two cells unconditionally. Adjacency is not checked.
pub fn swap_cells(board: &Board, a: usize, b: usize) -> Result<Board, BoardError> {
    board.check_position(a)?;
    board.check_position(b)?;

    let mut cells = board.cells().to_vec();
    cells.swap(a, b);
    Ok(Board::from_raw(board.size(), cells))
}

/// Would swapping `a` and `b` leave at least one match on the board?
///
/// Swapping two equal tokens is a no-op and never counts.
pub fn swap_creates_match(board: &Board, a: usize, b: usize) -> Result<bool, BoardError> {
    board.check_position(a)?;
    board.check_position(b)?;
    Ok(creates_match_unchecked(board, a, b))
}

/// [`swap_creates_match`] for positions already known to be on the board.
pub(crate) fn creates_match_unchecked(board: &Board, a: usize, b: usize) -> bool {
    if board.at(a) == board.at(b) {
        return false;
    }
    let mut cells = board.cells().to_vec();
    cells.swap(a, b);
    !find_matches_in(&cells, board.size()).is_empty()
}

/// Copy the board with every matched position set to [`EMPTY`].
pub fn clear_positions(board: &Board, matches: &MatchSet) -> Result<Vec<u8>, BoardError> {
    let mut cells = board.cells().to_vec();
    for &position in matches {
        board.check_position(position)?;
        cells[position] = EMPTY;
    }
    Ok(cells)
}

/// Drop surviving tokens to the bottom of each column and refill from the top.
///
/// Survivors keep their top-to-bottom order. Matches formed by the refill are
/// left for the caller to find.
pub fn collapse<R: RandomSource + ?Sized>(
    cells: &[u8],
    size: usize,
    kinds: usize,
    rng: &mut R,
) -> Result<Board, BoardError> {
    let expected = cell_count(size)?;
    if cells.len() != expected {
        return Err(BoardError::LengthMismatch { expected, actual: cells.len() });
    }
    check_kinds(kinds)?;

    let mut next = cells.to_vec();
    let mut stack: Vec<u8> = Vec::with_capacity(size);

    for col in 0..size {
        stack.clear();
        for row in (0..size).rev() {
            let value = next[to_index(row, col, size)];
            if value != EMPTY {
                stack.push(value);
            }
        }

        let mut survivors = stack.iter();
        for row in (0..size).rev() {
            next[to_index(row, col, size)] = match survivors.next() {
                Some(&value) => value,
                None => random_kind(rng, kinds),
            };
        }
    }

    Ok(Board::from_raw(size, next))
}
