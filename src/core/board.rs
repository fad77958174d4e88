//! Board module - the 8x8 placement grid
//!
//! Each cell is empty or holds the color of the piece that last occupied
//! it. Uses a flat array for cache locality and zero allocation.
//! Coordinates are (row, col), 0-based, row-major.

use thiserror::Error;

use crate::core::pieces::Piece;
use crate::types::{Cell, BOARD_SIZE, CELL_COUNT};

/// Error raised when reconstructing a board from a persisted grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("expected {BOARD_SIZE} rows, got {0}")]
    RowCount(usize),
    #[error("row {row} has {cols} columns, expected {BOARD_SIZE}")]
    ColCount { row: usize, cols: usize },
}

/// The game board - BOARD_SIZE x BOARD_SIZE cells in flat storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major (row * BOARD_SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(row * BOARD_SIZE + col)
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a cell is within bounds and empty
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if a cell is within bounds and filled
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// True iff every cell of the piece, offset by (row, col), lies in
    /// bounds over an empty cell. Pure, no mutation.
    pub fn can_place(&self, piece: Piece, row: usize, col: usize) -> bool {
        piece.cells().iter().all(|&(dr, dc)| {
            match (row.checked_add(dr as usize), col.checked_add(dc as usize)) {
                (Some(r), Some(c)) => self.is_empty_cell(r, c),
                _ => false,
            }
        })
    }

    /// Write the piece onto the board if it fits; no mutation otherwise
    pub fn try_place(&mut self, piece: Piece, row: usize, col: usize) -> bool {
        if !self.can_place(piece, row, col) {
            return false;
        }
        // can_place proved every offset sum is in bounds.
        let color = piece.color();
        for &(dr, dc) in piece.cells() {
            self.set(row + dr as usize, col + dc as usize, Some(color));
        }
        true
    }

    /// True iff some (row, col) on the grid admits the piece
    pub fn can_place_anywhere(&self, piece: Piece) -> bool {
        // Bounding box prunes the scan; can_place re-checks each cell.
        let max_row = BOARD_SIZE.saturating_sub(piece.height());
        let max_col = BOARD_SIZE.saturating_sub(piece.width());
        for row in 0..=max_row {
            for col in 0..=max_col {
                if self.can_place(piece, row, col) {
                    return true;
                }
            }
        }
        false
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_SIZE {
            return false;
        }
        let start = row * BOARD_SIZE;
        self.cells[start..start + BOARD_SIZE]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_SIZE {
            return false;
        }
        (0..BOARD_SIZE).all(|row| self.cells[row * BOARD_SIZE + col].is_some())
    }

    /// Empty a whole row
    pub fn clear_row(&mut self, row: usize) {
        if row >= BOARD_SIZE {
            return;
        }
        let start = row * BOARD_SIZE;
        for cell in &mut self.cells[start..start + BOARD_SIZE] {
            *cell = None;
        }
    }

    /// Empty a whole column
    pub fn clear_col(&mut self, col: usize) {
        if col >= BOARD_SIZE {
            return;
        }
        for row in 0..BOARD_SIZE {
            self.cells[row * BOARD_SIZE + col] = None;
        }
    }

    /// Number of empty cells on the board
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Clear the entire board
    pub fn clear_all(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert to a 2D grid for persistence
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_SIZE)
            .map(|row| {
                let start = row * BOARD_SIZE;
                self.cells[start..start + BOARD_SIZE].to_vec()
            })
            .collect()
    }

    /// Reconstruct from a 2D grid, rejecting dimension mismatches
    pub fn from_grid(grid: &[Vec<Cell>]) -> Result<Self, GridError> {
        if grid.len() != BOARD_SIZE {
            return Err(GridError::RowCount(grid.len()));
        }
        let mut cells = [None; CELL_COUNT];
        for (row, row_cells) in grid.iter().enumerate() {
            if row_cells.len() != BOARD_SIZE {
                return Err(GridError::ColCount {
                    row,
                    cols: row_cells.len(),
                });
            }
            for (col, cell) in row_cells.iter().enumerate() {
                cells[row * BOARD_SIZE + col] = *cell;
            }
        }
        Ok(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
