//! Board analyzer - danger classification for the piece generator
//!
//! Produces a read-only summary of how hard the board is to keep playing:
//! more occupied cells and more fragmented empty space raise the danger
//! level. The weighted selector treats this as its only window into board
//! state; the UI may also surface it as a warning hint.

use crate::core::board::Board;
use crate::types::{BOARD_SIZE, CELL_COUNT};

/// Coarse, ordered classification of board pressure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DangerLevel {
    Safe,
    Moderate,
    High,
    Critical,
}

/// Read-only analysis of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardAnalysis {
    pub danger: DangerLevel,
    pub empty_cells: usize,
    pub occupied_cells: usize,
    /// Size of the largest 4-connected region of empty cells
    pub largest_empty_region: usize,
}

/// Analyze a board. Pure; never mutates.
pub fn analyze(board: &Board) -> BoardAnalysis {
    let empty_cells = board.empty_cell_count();
    let occupied_cells = CELL_COUNT - empty_cells;
    let largest_empty_region = largest_empty_region(board);

    let danger = classify(empty_cells, largest_empty_region);

    BoardAnalysis {
        danger,
        empty_cells,
        occupied_cells,
        largest_empty_region,
    }
}

/// Thresholds tuned for an 8x8 board. Both scarcity (few empty cells) and
/// fragmentation (no large contiguous region) push the level up.
fn classify(empty: usize, largest_region: usize) -> DangerLevel {
    if empty <= 4 || largest_region <= 3 {
        DangerLevel::Critical
    } else if empty <= 16 || largest_region <= 6 {
        DangerLevel::High
    } else if empty <= 32 || largest_region <= 12 {
        DangerLevel::Moderate
    } else {
        DangerLevel::Safe
    }
}

/// Largest 4-connected empty region, via flood fill over fixed buffers
/// (no heap allocation).
fn largest_empty_region(board: &Board) -> usize {
    let mut visited = [false; CELL_COUNT];
    let mut stack = [0usize; CELL_COUNT];
    let mut largest = 0;

    for start in 0..CELL_COUNT {
        if visited[start] || board.cells()[start].is_some() {
            continue;
        }

        let mut depth = 0;
        stack[depth] = start;
        depth += 1;
        visited[start] = true;
        let mut region = 0;

        while depth > 0 {
            depth -= 1;
            let idx = stack[depth];
            region += 1;

            let row = idx / BOARD_SIZE;
            let col = idx % BOARD_SIZE;
            let neighbors = [
                (row > 0).then(|| idx - BOARD_SIZE),
                (row + 1 < BOARD_SIZE).then(|| idx + BOARD_SIZE),
                (col > 0).then(|| idx - 1),
                (col + 1 < BOARD_SIZE).then(|| idx + 1),
            ];
            for neighbor in neighbors.into_iter().flatten() {
                if !visited[neighbor] && board.cells()[neighbor].is_none() {
                    visited[neighbor] = true;
                    stack[depth] = neighbor;
                    depth += 1;
                }
            }
        }

        largest = largest.max(region);
    }

    largest
}
