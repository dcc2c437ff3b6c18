//! Match Finder: runs of three or more identical tokens.
//!
//! Rows and columns are scanned independently. A cell in an L or T shaped
//! intersection is hit by both scans but only counted once.

use crate::types::{Board, MatchSet, EMPTY};

/// Minimum run length that clears.
pub const MIN_RUN: usize = 3;

/// Every position belonging to a horizontal or vertical run of length >= 3.
pub fn find_matches(board: &Board) -> MatchSet {
    find_matches_in(board.cells(), board.size())
}

/// Same as [`find_matches`] over raw cells, which may contain [`EMPTY`].
pub(crate) fn find_matches_in(cells: &[u8], size: usize) -> MatchSet {
    let mut matches = MatchSet::new();

    for row in 0..size {
        scan_line(cells, size, |i| row * size + i, &mut matches);
    }
    for col in 0..size {
        scan_line(cells, size, |i| i * size + col, &mut matches);
    }

    matches
}

/// Walk one line, recording every finished run of at least [`MIN_RUN`].
fn scan_line<F>(cells: &[u8], len: usize, index_of: F, matches: &mut MatchSet)
where
    F: Fn(usize) -> usize,
{
    if len == 0 {
        return;
    }

    let mut run_start = 0;
    let mut run_type = cells[index_of(0)];

    // One step past the end closes the last run.
    for i in 1..=len {
        let cell = if i < len { Some(cells[index_of(i)]) } else { None };
        if cell == Some(run_type) && run_type != EMPTY {
            continue;
        }

        if run_type != EMPTY && i - run_start >= MIN_RUN {
            matches.extend((run_start..i).map(&index_of));
        }

        if let Some(next) = cell {
            run_start = i;
            run_type = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Board whose cells are all distinct apart from what the test overrides.
    fn distinct(size: usize) -> Vec<u8> {
        (0..size * size).map(|i| (i % 200) as u8).collect()
    }

    #[test]
    fn test_full_row_matches_exactly() {
        let size = 5;
        let mut cells = distinct(size);
        for col in 0..size {
            cells[2 * size + col] = 250;
        }
        let board = Board::from_cells(size, cells).unwrap();

        let matches = find_matches(&board);
        let expected: MatchSet = (10..15).collect();
        assert_eq!(matches, expected);
    }

    #[test]
    fn test_run_of_two_ignored_run_of_three_found() {
        let size = 6;
        let mut cells = distinct(size);
        // Run of two in row 0
        cells[0] = 240;
        cells[1] = 240;
        // Run of three in column 4
        cells[4] = 241;
        cells[10] = 241;
        cells[16] = 241;
        let board = Board::from_cells(size, cells).unwrap();

        let matches = find_matches(&board);
        let expected: MatchSet = [4, 10, 16].into_iter().collect();
        assert_eq!(matches, expected);
    }

    #[test]
    fn test_run_at_line_end() {
        let size = 4;
        let mut cells = distinct(size);
        cells[1] = 230;
        cells[2] = 230;
        cells[3] = 230;
        let board = Board::from_cells(size, cells).unwrap();

        let expected: MatchSet = [1, 2, 3].into_iter().collect();
        assert_eq!(find_matches(&board), expected);
    }

    #[test]
    fn test_intersection_counted_once() {
        // T shape: row 0 cols 0..3 and column 1 rows 0..3
        let size = 4;
        let mut cells = distinct(size);
        for i in [0, 1, 2, 5, 9] {
            cells[i] = 220;
        }
        let board = Board::from_cells(size, cells).unwrap();

        let matches = find_matches(&board);
        assert_eq!(matches.len(), 5);
        assert!(matches.contains(&1));
    }

    #[test]
    fn test_empty_never_matches() {
        let size = 3;
        let mut cells: Vec<u8> = distinct(size);
        cells[0] = EMPTY;
        cells[1] = EMPTY;
        cells[2] = EMPTY;
        assert!(find_matches_in(&cells, size).is_empty());
    }

    #[test]
    fn test_empty_breaks_runs() {
        let cells = vec![
            1, 1, EMPTY, //
            1, 1, 2, //
            3, 4, 5,
        ];
        assert!(find_matches_in(&cells, 3).is_empty());
    }

    #[test]
    fn test_no_matches_on_checkerboard() {
        let size = 6;
        let cells: Vec<u8> = (0..size * size)
            .map(|i| ((i / size + i % size) % 2) as u8)
            .collect();
        let board = Board::from_cells(size, cells).unwrap();
        assert!(find_matches(&board).is_empty());
    }
}
