//! Game engine - the orchestrator owning board, hand and progression
//!
//! Drives the placement loop: validate, write, clear, score, update the
//! combo chain, refill the hand once per turn, and re-derive game over
//! after every mutation. Exposes the complete lossless snapshot used by
//! the persistence layer.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::clear::clear_lines;
use crate::core::pieces::Piece;
use crate::core::scoring::calculate_score;
use crate::core::selector::PieceSelector;
use crate::core::snapshot::{
    decode_board, decode_generator, decode_hand_slot, encode_board, encode_generator,
    encode_hand_slot, GameState, StateError,
};
use crate::types::{BOARD_SIZE, HAND_SIZE};

/// Outcome of a placement attempt; the sole channel by which line-clear,
/// score and game-over facts propagate to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementResult {
    pub success: bool,
    pub points_earned: u32,
    pub lines_cleared: usize,
    pub combo: u32,
    pub is_game_over: bool,
    pub cleared_rows: ArrayVec<usize, BOARD_SIZE>,
    pub cleared_cols: ArrayVec<usize, BOARD_SIZE>,
}

/// Complete game: board, hand, generator and score/combo/turn state
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    hand: [Option<Piece>; HAND_SIZE],
    selector: PieceSelector,
    score: u32,
    combo: u32,
    max_combo: u32,
    total_lines: u32,
    game_over: bool,
}

impl GameEngine {
    /// Create a new game. `None` seed gives a non-reproducible game;
    /// `weighted` picks the board-aware generator over the classic bag.
    pub fn new(seed: Option<u64>, weighted: bool) -> Self {
        let mut engine = Self {
            board: Board::new(),
            hand: [None; HAND_SIZE],
            selector: PieceSelector::new(seed, weighted),
            score: 0,
            combo: 0,
            max_combo: 0,
            total_lines: 0,
            game_over: false,
        };
        engine.refill_hand();
        engine.game_over = engine.compute_game_over();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hand(&self) -> &[Option<Piece>; HAND_SIZE] {
        &self.hand
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn max_combo(&self) -> u32 {
        self.max_combo
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Read-only probe for UI preview: same bounds and validity rules as
    /// `place_piece`, no mutation.
    pub fn can_place_piece(&self, hand_index: usize, row: usize, col: usize) -> bool {
        if self.game_over {
            return false;
        }
        match self.hand.get(hand_index).copied().flatten() {
            Some(piece) => self.board.can_place(piece, row, col),
            None => false,
        }
    }

    /// Place the piece in `hand_index` at (row, col).
    ///
    /// Invalid input (bad index, empty slot, geometry that does not fit,
    /// game already over) reports `success: false` with no state change.
    pub fn place_piece(&mut self, hand_index: usize, row: usize, col: usize) -> PlacementResult {
        if self.game_over {
            return self.failure();
        }
        let piece = match self.hand.get(hand_index).copied().flatten() {
            Some(piece) => piece,
            None => return self.failure(),
        };
        if !self.board.try_place(piece, row, col) {
            return self.failure();
        }
        self.hand[hand_index] = None;

        let clear = clear_lines(&mut self.board);
        let lines = clear.total();

        // Combo chain: the bonus uses the chain length before this clear,
        // so the first clear of a chain earns base points only.
        let points = if lines > 0 {
            let breakdown = calculate_score(lines, self.combo);
            self.combo += 1;
            self.max_combo = self.max_combo.max(self.combo);
            self.total_lines += lines as u32;
            breakdown.total
        } else {
            self.combo = 0;
            0
        };
        self.score = self.score.saturating_add(points);

        // A turn is the full hand; redraw only once every slot is spent.
        if self.hand.iter().all(Option::is_none) {
            self.refill_hand();
        }
        self.game_over = self.compute_game_over();

        PlacementResult {
            success: true,
            points_earned: points,
            lines_cleared: lines,
            combo: self.combo,
            is_game_over: self.game_over,
            cleared_rows: clear.rows,
            cleared_cols: clear.cols,
        }
    }

    /// Preview the hand the next refill will deal, without consuming
    /// generator state.
    pub fn peek_next_hand(&self) -> Vec<Piece> {
        self.selector
            .peek_next_pieces(&self.board, self.total_lines, HAND_SIZE)
    }

    fn refill_hand(&mut self) {
        let pieces = self
            .selector
            .next_pieces(&self.board, self.total_lines, HAND_SIZE);
        for (slot, piece) in self.hand.iter_mut().zip(pieces) {
            *slot = Some(piece);
        }
    }

    /// Game over iff no piece currently in hand fits anywhere
    fn compute_game_over(&self) -> bool {
        !self
            .hand
            .iter()
            .flatten()
            .any(|&piece| self.board.can_place_anywhere(piece))
    }

    fn failure(&self) -> PlacementResult {
        PlacementResult {
            success: false,
            combo: self.combo,
            is_game_over: self.game_over,
            ..PlacementResult::default()
        }
    }

    /// Full lossless snapshot: board, hand, generator continuation point
    /// and score counters.
    pub fn state(&self) -> Result<GameState, StateError> {
        Ok(GameState {
            board: encode_board(&self.board),
            hand: self.hand.iter().map(|&slot| encode_hand_slot(slot)).collect(),
            generator: encode_generator(&self.selector.state())?,
            score: self.score,
            combo: self.combo,
            total_lines: self.total_lines,
            max_combo: self.max_combo,
        })
    }

    /// Reconstruct an engine from a snapshot. `is_game_over` is derived
    /// from the restored board and hand rather than trusted from storage.
    pub fn from_state(state: &GameState) -> Result<Self, StateError> {
        let board = decode_board(&state.board)?;

        if state.hand.len() != HAND_SIZE {
            return Err(StateError::BadHandSize(state.hand.len()));
        }
        let mut hand = [None; HAND_SIZE];
        for (slot, entry) in hand.iter_mut().zip(&state.hand) {
            *slot = decode_hand_slot(entry)?;
        }

        let selector = PieceSelector::from_state(&decode_generator(&state.generator)?);

        let mut engine = Self {
            board,
            hand,
            selector,
            score: state.score,
            combo: state.combo,
            max_combo: state.max_combo,
            total_lines: state.total_lines,
            game_over: false,
        };
        engine.game_over = engine.compute_game_over();
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    #[test]
    fn test_new_game_starts_with_full_hand() {
        let engine = GameEngine::new(Some(1), true);
        assert!(engine.hand().iter().all(Option::is_some));
        assert!(!engine.is_game_over());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.combo(), 0);
    }

    #[test]
    fn test_out_of_range_hand_index_fails_cleanly() {
        let mut engine = GameEngine::new(Some(1), true);
        let before = engine.state().unwrap();

        let result = engine.place_piece(HAND_SIZE, 0, 0);
        assert!(!result.success);
        assert_eq!(result.points_earned, 0);
        assert_eq!(engine.state().unwrap(), before);
    }

    #[test]
    fn test_extreme_coordinates_fail_cleanly() {
        let mut engine = GameEngine::new(Some(1), true);

        assert!(!engine.can_place_piece(0, usize::MAX, usize::MAX));
        assert!(!engine.can_place_piece(0, 0, usize::MAX));

        let result = engine.place_piece(0, usize::MAX, 0);
        assert!(!result.success);
        assert!(engine.hand()[0].is_some());
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn test_placement_on_occupied_cells_fails_cleanly() {
        let mut engine = GameEngine::new(Some(1), true);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                engine.board.set(row, col, Some(PieceColor::Red));
            }
        }
        let result = engine.place_piece(0, 0, 0);
        assert!(!result.success);
    }

    #[test]
    fn test_empty_slot_cannot_be_placed_twice() {
        let mut engine = GameEngine::new(Some(1), true);
        assert!(engine.place_piece(0, 0, 0).success);
        // Slot 0 is now empty; only a refill after the full turn restocks it.
        let result = engine.place_piece(0, 4, 4);
        assert!(!result.success);
    }

    #[test]
    fn test_peek_next_hand_does_not_consume() {
        let engine = GameEngine::new(Some(77), true);
        assert_eq!(engine.peek_next_hand(), engine.peek_next_hand());
    }
}
