//! Core data types for the board engine.
//!
//! Boards use flat `Vec<u8>` storage in row-major layout:
//! `cells[row * size + col]` maps to the JS equivalent `cells[index]`.

use crate::error::BoardError;
use serde::Serialize;
use std::collections::HashSet;

/// Marker for a cleared cell. Only exists between clearing and refill,
/// never in a board handed back to the caller.
pub const EMPTY: u8 = u8::MAX;

/// Default board side length.
pub const DEFAULT_SIZE: usize = 8;

/// Positions taking part in at least one run of three or more.
pub type MatchSet = HashSet<usize>;

/// Number of cells on a board of side `size`, rejecting zero and overflow.
pub fn cell_count(size: usize) -> Result<usize, BoardError> {
    match size.checked_mul(size) {
        Some(cells) if size > 0 => Ok(cells),
        _ => Err(BoardError::InvalidSize(size)),
    }
}

/// Convert a linear index to `(row, col)`.
#[inline(always)]
pub fn to_row_col(index: usize, size: usize) -> (usize, usize) {
    (index / size, index % size)
}

/// Convert `(row, col)` back to a linear index.
#[inline(always)]
pub fn to_index(row: usize, col: usize, size: usize) -> usize {
    row * size + col
}

/// True when the two positions are orthogonal neighbours (Manhattan distance 1).
pub fn is_adjacent(a: usize, b: usize, size: usize) -> bool {
    let (ar, ac) = to_row_col(a, size);
    let (br, bc) = to_row_col(b, size);
    ar.abs_diff(br) + ac.abs_diff(bc) == 1
}

/// A square grid of token kinds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Wrap caller-supplied cells, checking length and that no cell is empty.
    pub fn from_cells(size: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        let expected = cell_count(size)?;
        if cells.len() != expected {
            return Err(BoardError::LengthMismatch { expected, actual: cells.len() });
        }
        if let Some(position) = cells.iter().position(|&c| c == EMPTY) {
            return Err(BoardError::EmptyCell { position });
        }
        Ok(Self { size, cells })
    }

    /// Engine-internal constructor for cells already known to be well-formed.
    pub(crate) fn from_raw(size: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[to_index(row, col, self.size)]
    }

    #[inline(always)]
    pub fn at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    /// Fail fast on a position outside the board.
    pub fn check_position(&self, position: usize) -> Result<(), BoardError> {
        if position < self.cells.len() {
            Ok(())
        } else {
            Err(BoardError::PositionOutOfRange { position, cells: self.cells.len() })
        }
    }

    /// Fail fast on a cell holding a kind outside `0..kinds`.
    pub fn check_values(&self, kinds: usize) -> Result<(), BoardError> {
        match self.cells.iter().position(|&c| c as usize >= kinds) {
            Some(position) => Err(BoardError::KindOutOfRange {
                position,
                kind: self.cells[position],
                kinds,
            }),
            None => Ok(()),
        }
    }

    /// Checked `(row, col)` for a position on this board.
    pub fn row_col(&self, position: usize) -> Result<(usize, usize), BoardError> {
        self.check_position(position)?;
        Ok(to_row_col(position, self.size))
    }
}

/// An adjacent pair whose swap would create a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Hint {
    pub a: usize,
    pub b: usize,
}

/// Outcome of resolving a board until no matches remain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolveResult {
    pub board: Board,
    /// Cells cleared across all cascades.
    pub cleared: usize,
    /// Clear-and-refill passes applied.
    pub cascades: u32,
}
