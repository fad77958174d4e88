//! Line clearer - simultaneous full-row and full-column detection
//!
//! Unlike a falling-block game, nothing shifts after a clear: full lines
//! simply empty out. Rows and columns are detected in one scan over the
//! pre-clear board, so a placement that completes a row and a column at
//! once counts both, and their shared cell clears exactly once.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::types::BOARD_SIZE;

/// Report of a clear pass, consumed by scoring and by callers driving
/// animation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearResult {
    /// Cleared row indices, ascending
    pub rows: ArrayVec<usize, BOARD_SIZE>,
    /// Cleared column indices, ascending
    pub cols: ArrayVec<usize, BOARD_SIZE>,
}

impl ClearResult {
    /// Total lines cleared: row count plus column count. An intersection
    /// cell is cleared once but contributes to both lines.
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Find and clear every full row and column. Detection runs entirely on
/// the pre-clear board; mutation happens afterwards so a full row never
/// "un-fills" a column mid-scan. No-op on a board with nothing full.
pub fn clear_lines(board: &mut Board) -> ClearResult {
    let mut result = ClearResult::default();

    for row in 0..BOARD_SIZE {
        if board.is_row_full(row) {
            result.rows.push(row);
        }
    }
    for col in 0..BOARD_SIZE {
        if board.is_col_full(col) {
            result.cols.push(col);
        }
    }

    for &row in &result.rows {
        board.clear_row(row);
    }
    for &col in &result.cols {
        board.clear_col(col);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    fn fill_row(board: &mut Board, row: usize) {
        for col in 0..BOARD_SIZE {
            board.set(row, col, Some(PieceColor::Blue));
        }
    }

    fn fill_col(board: &mut Board, col: usize) {
        for row in 0..BOARD_SIZE {
            board.set(row, col, Some(PieceColor::Green));
        }
    }

    #[test]
    fn test_no_full_lines_is_noop() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceColor::Red));
        let before = board.clone();

        let result = clear_lines(&mut board);
        assert!(result.is_empty());
        assert_eq!(result.total(), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_single_full_row() {
        let mut board = Board::new();
        fill_row(&mut board, 4);
        board.set(0, 0, Some(PieceColor::Red));

        let result = clear_lines(&mut board);
        assert_eq!(result.total(), 1);
        assert_eq!(result.rows.as_slice(), &[4]);
        assert!(result.cols.is_empty());

        for col in 0..BOARD_SIZE {
            assert!(board.is_empty_cell(4, col));
        }
        // Untouched cell survives
        assert!(board.is_occupied(0, 0));
    }

    #[test]
    fn test_row_and_column_intersection_counts_twice() {
        let mut board = Board::new();
        fill_row(&mut board, 2);
        fill_col(&mut board, 5);

        let result = clear_lines(&mut board);
        assert_eq!(result.total(), 2);
        assert_eq!(result.rows.as_slice(), &[2]);
        assert_eq!(result.cols.as_slice(), &[5]);

        assert!(board.is_empty_cell(2, 5));
        assert_eq!(board.empty_cell_count(), crate::types::CELL_COUNT);
    }

    #[test]
    fn test_multiple_rows_cleared_simultaneously() {
        let mut board = Board::new();
        fill_row(&mut board, 0);
        fill_row(&mut board, 7);

        let result = clear_lines(&mut board);
        assert_eq!(result.total(), 2);
        assert_eq!(result.rows.as_slice(), &[0, 7]);
    }
}
