//! Property tests for the weighted selector's safety guarantee
//!
//! Fuzz-like coverage over generated boards and seeds: for any
//! non-terminal board, the dealt hand must contain at least one piece
//! that fits somewhere.

use blockboard::core::{Board, PieceSelector};
use blockboard::types::{PieceColor, BOARD_SIZE};
use proptest::prelude::*;

/// Any board with at least one empty cell
fn non_terminal_board() -> impl Strategy<Value = Board> {
    (
        proptest::collection::vec(any::<bool>(), BOARD_SIZE * BOARD_SIZE),
        0usize..BOARD_SIZE * BOARD_SIZE,
    )
        .prop_map(|(occupied, forced_empty)| {
            let mut board = Board::new();
            for (idx, filled) in occupied.iter().enumerate() {
                if *filled {
                    board.set(idx / BOARD_SIZE, idx % BOARD_SIZE, Some(PieceColor::Cyan));
                }
            }
            board.set(forced_empty / BOARD_SIZE, forced_empty % BOARD_SIZE, None);
            board
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn dealt_hand_always_contains_a_placeable_piece(
        board in non_terminal_board(),
        seed in any::<u64>(),
        lines in 0u32..100,
    ) {
        let mut selector = PieceSelector::new(Some(seed), true);
        let hand = selector.next_pieces(&board, lines, 3);

        prop_assert_eq!(hand.len(), 3);
        prop_assert!(
            hand.iter().any(|&piece| board.can_place_anywhere(piece)),
            "unplaceable hand {:?} on board with {} empty cells",
            hand,
            board.empty_cell_count()
        );
    }

    #[test]
    fn selector_is_deterministic_per_seed(
        seed in any::<u64>(),
        occupancy in proptest::collection::vec(any::<bool>(), BOARD_SIZE * BOARD_SIZE),
    ) {
        let mut board = Board::new();
        for (idx, filled) in occupancy.iter().enumerate() {
            if *filled {
                board.set(idx / BOARD_SIZE, idx % BOARD_SIZE, Some(PieceColor::Green));
            }
        }

        let mut a = PieceSelector::new(Some(seed), true);
        let mut b = PieceSelector::new(Some(seed), true);
        for lines in [0u32, 15, 45] {
            prop_assert_eq!(
                a.next_pieces(&board, lines, 3),
                b.next_pieces(&board, lines, 3)
            );
        }
    }

    #[test]
    fn restored_selector_continues_identically(
        seed in any::<u64>(),
        warmup in 0usize..8,
    ) {
        let board = Board::new();
        let mut original = PieceSelector::new(Some(seed), true);
        for _ in 0..warmup {
            original.next_pieces(&board, 0, 3);
        }

        let mut restored = PieceSelector::from_state(&original.state());
        for lines in [0u32, 20, 60] {
            prop_assert_eq!(
                original.next_pieces(&board, lines, 3),
                restored.next_pieces(&board, lines, 3)
            );
        }
    }
}
