//! Core module - pure game rules with no I/O
//!
//! Everything here is synchronous in-memory computation: the board model,
//! piece catalog, line clearing, scoring, board analysis, the piece
//! generators and the orchestrating engine. Hosts embedding the engine in
//! a concurrent setting must serialize access per game session.

pub mod analysis;
pub mod bag;
pub mod board;
pub mod clear;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod selector;
pub mod snapshot;

// Re-export commonly used types
pub use analysis::{analyze, BoardAnalysis, DangerLevel};
pub use bag::{BagGenerator, BagState};
pub use board::{Board, GridError};
pub use clear::{clear_lines, ClearResult};
pub use engine::{GameEngine, PlacementResult};
pub use pieces::{get_shape, Piece, PieceShape};
pub use rng::GameRng;
pub use scoring::{calculate_points, calculate_score, ScoreBreakdown};
pub use selector::{GeneratorState, PieceSelector};
pub use snapshot::{GameState, HandPieceState, StateError};
