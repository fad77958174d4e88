//! Snapshot module - the persistence boundary
//!
//! [`GameState`] is the only form in which a game crosses a process or
//! storage boundary: a complete, self-describing JSON blob holding the
//! grid (as nullable color names), the hand, the opaque generator state,
//! and the score counters. `is_game_over` is deliberately absent; it is
//! re-derived from board + hand on restore so it can never go stale.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::{Board, GridError};
use crate::core::pieces::Piece;
use crate::core::selector::GeneratorState;
use crate::types::{Cell, PieceColor, PieceKind, Rotation, HAND_SIZE};

/// Errors raised while restoring a persisted game
#[derive(Debug, Error)]
pub enum StateError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("unknown color name {0:?} in grid")]
    UnknownColor(String),
    #[error("unknown piece kind {0:?} in hand")]
    UnknownPiece(String),
    #[error("rotation index {0} out of range")]
    BadRotation(u8),
    #[error("expected {HAND_SIZE} hand slots, got {0}")]
    BadHandSize(usize),
}

/// One occupied hand slot in a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPieceState {
    pub kind: String,
    pub rotation: u8,
}

/// Full persistence snapshot of an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Rows x cols of nullable color names
    pub board: Vec<Vec<Option<String>>>,
    /// Exactly `HAND_SIZE` slots; empty slots are null
    pub hand: Vec<Option<HandPieceState>>,
    /// Opaque generator-state blob (JSON inside a string)
    pub generator: String,
    pub score: u32,
    pub combo: u32,
    pub total_lines: u32,
    pub max_combo: u32,
}

impl GameState {
    pub fn to_json(&self) -> Result<String, StateError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, StateError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Encode a board as the snapshot grid
pub fn encode_board(board: &Board) -> Vec<Vec<Option<String>>> {
    board
        .to_grid()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(|color| color.as_str().to_string()))
                .collect()
        })
        .collect()
}

/// Decode the snapshot grid back into a board
pub fn decode_board(grid: &[Vec<Option<String>>]) -> Result<Board, StateError> {
    let mut cells: Vec<Vec<Cell>> = Vec::with_capacity(grid.len());
    for row in grid {
        let mut decoded = Vec::with_capacity(row.len());
        for cell in row {
            decoded.push(match cell {
                None => None,
                Some(name) => Some(
                    PieceColor::from_str(name)
                        .ok_or_else(|| StateError::UnknownColor(name.clone()))?,
                ),
            });
        }
        cells.push(decoded);
    }
    Ok(Board::from_grid(&cells)?)
}

/// Encode a hand slot
pub fn encode_hand_slot(slot: Option<Piece>) -> Option<HandPieceState> {
    slot.map(|piece| HandPieceState {
        kind: piece.kind().as_str().to_string(),
        rotation: piece.rotation().index(),
    })
}

/// Decode a hand slot
pub fn decode_hand_slot(slot: &Option<HandPieceState>) -> Result<Option<Piece>, StateError> {
    match slot {
        None => Ok(None),
        Some(entry) => {
            let kind = PieceKind::from_str(&entry.kind)
                .ok_or_else(|| StateError::UnknownPiece(entry.kind.clone()))?;
            let rotation = Rotation::from_index(entry.rotation)
                .ok_or(StateError::BadRotation(entry.rotation))?;
            Ok(Some(Piece::new(kind, rotation)))
        }
    }
}

/// Encode a generator state into the opaque blob
pub fn encode_generator(state: &GeneratorState) -> Result<String, StateError> {
    Ok(serde_json::to_string(state)?)
}

/// Decode the opaque generator blob
pub fn decode_generator(blob: &str) -> Result<GeneratorState, StateError> {
    Ok(serde_json::from_str(blob)?)
}
