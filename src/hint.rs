//! Hint Finder and dead-board detection.

use crate::board::creates_match_unchecked;
use crate::types::{to_row_col, Board, Hint};

/// First adjacent swap that creates a match, scanning row-major.
///
/// At each position the right neighbour is tried before the lower one.
pub fn find_hint(board: &Board) -> Option<Hint> {
    let size = board.size();

    for index in 0..board.len() {
        let (row, col) = to_row_col(index, size);
        if col + 1 < size && creates_match_unchecked(board, index, index + 1) {
            return Some(Hint { a: index, b: index + 1 });
        }
        if row + 1 < size && creates_match_unchecked(board, index, index + size) {
            return Some(Hint { a: index, b: index + size });
        }
    }

    None
}

/// False when no swap anywhere on the board would create a match.
pub fn has_any_moves(board: &Board) -> bool {
    find_hint(board).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{create_board, swap_creates_match};
    use crate::rng::WasmRng;

    /// 4x4 board of kinds 0..=3 laid out so no swap lines anything up.
    fn dead_board() -> Board {
        Board::from_cells(
            4,
            vec![
                0, 1, 2, 3, //
                2, 3, 0, 1, //
                0, 1, 2, 3, //
                2, 3, 0, 1,
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_dead_board_has_no_moves() {
        let board = dead_board();
        assert_eq!(find_hint(&board), None);
        assert!(!has_any_moves(&board));
    }

    #[test]
    fn test_single_move_found() {
        // Column 0 becomes 0,2,0,0; only swapping its top two cells lines up 0,0,0
        let mut cells = dead_board().into_cells();
        cells[12] = 0;
        let board = Board::from_cells(4, cells).unwrap();
        assert!(crate::matcher::find_matches(&board).is_empty());

        let hint = find_hint(&board).unwrap();
        assert_eq!((hint.a.min(hint.b), hint.a.max(hint.b)), (0, 4));
        assert!(has_any_moves(&board));
    }

    #[test]
    fn test_right_neighbour_tried_first() {
        // Position 0 completes row 0 when swapped right and column 0 when swapped down
        let board = Board::from_cells(
            4,
            vec![
                2, 0, 2, 2, //
                1, 3, 4, 5, //
                2, 4, 5, 6, //
                2, 5, 6, 4,
            ],
        )
        .unwrap();
        assert!(crate::matcher::find_matches(&board).is_empty());
        assert!(swap_creates_match(&board, 0, 4).unwrap());
        assert_eq!(find_hint(&board), Some(Hint { a: 0, b: 1 }));
    }

    #[test]
    fn test_hint_is_valid_swap() {
        for seed in 0..30 {
            let mut rng = WasmRng::from_seed(seed);
            let board = create_board(8, 7, 64, &mut rng).unwrap();
            if let Some(hint) = find_hint(&board) {
                assert!(swap_creates_match(&board, hint.a, hint.b).unwrap());
                assert!(crate::types::is_adjacent(hint.a, hint.b, 8));
            }
        }
    }
}
