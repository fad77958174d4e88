//! blockboard - rules engine for an 8x8 block-placement puzzle
//!
//! Polyomino pieces are placed on a fixed 8x8 grid; full rows and columns
//! clear simultaneously for points. The crate covers the board model,
//! piece catalog, placement rules, line clearing, scoring and combo
//! arithmetic, and a board-aware weighted piece generator that is fully
//! deterministic from a serializable seed + draw-counter state.
//!
//! Transport, persistence backends, auth and gamification live outside
//! this crate; they consume [`core::PlacementResult`] and
//! [`core::GameState`] and nothing else.

pub mod core;
pub mod types;

pub use crate::core::{GameEngine, GameState, PieceSelector, PlacementResult};
pub use crate::types::{PieceColor, PieceKind, Rotation};
