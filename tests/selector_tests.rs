//! Selector tests - determinism, peek semantics and board-aware bias

use blockboard::core::{analyze, Board, DangerLevel, PieceSelector};
use blockboard::types::{PieceColor, PieceKind, BOARD_SIZE};

/// Deterministic pseudo-random board fill (not the engine's RNG; this is
/// test scaffolding only).
fn scrambled_board(seed: u64, occupancy_pct: u64) -> Board {
    let mut board = Board::new();
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            if (state >> 33) % 100 < occupancy_pct {
                board.set(row, col, Some(PieceColor::Cyan));
            }
        }
    }
    // Keep the board non-terminal for the safety guarantee.
    board.set(0, 0, None);
    board
}

#[test]
fn test_identical_seeds_identical_sequences_across_boards() {
    let mut a = PieceSelector::new(Some(6061), true);
    let mut b = PieceSelector::new(Some(6061), true);

    for step in 0..30u64 {
        let board = scrambled_board(step, (step * 3) % 80);
        let lines = (step * 2) as u32;
        assert_eq!(
            a.next_pieces(&board, lines, 3),
            b.next_pieces(&board, lines, 3),
            "diverged at step {}",
            step
        );
    }
}

#[test]
fn test_different_seeds_eventually_diverge() {
    let board = Board::new();
    let mut a = PieceSelector::new(Some(1), true);
    let mut b = PieceSelector::new(Some(2), true);

    let hands_a: Vec<_> = (0..10).flat_map(|_| a.next_pieces(&board, 0, 3)).collect();
    let hands_b: Vec<_> = (0..10).flat_map(|_| b.next_pieces(&board, 0, 3)).collect();
    assert_ne!(hands_a, hands_b);
}

#[test]
fn test_peek_is_stable_and_get_honors_it() {
    let board = scrambled_board(5, 40);
    let mut selector = PieceSelector::new(Some(2025), true);

    let peeked = selector.peek_next_pieces(&board, 4, 3);
    assert_eq!(peeked, selector.peek_next_pieces(&board, 4, 3));
    assert_eq!(peeked, selector.next_pieces(&board, 4, 3));

    // And the generator moved on: the next hand differs from the peeked
    // one at least sometimes; verify state advanced via the state blob.
    let after = selector.state();
    assert!(after.draws > 0);
}

#[test]
fn test_peek_leaves_state_untouched() {
    let board = Board::new();
    let selector = PieceSelector::new(Some(88), true);
    let before = selector.state();
    selector.peek_next_pieces(&board, 0, 3);
    selector.peek_next_pieces(&board, 50, 3);
    assert_eq!(selector.state(), before);
}

#[test]
fn test_critical_board_hands_skew_small() {
    // A board at critical danger should deal markedly smaller pieces than
    // a safe board does, over many hands.
    let safe_board = Board::new();
    let mut critical_board = scrambled_board(11, 0);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            // ~7/8 occupancy in a striped pattern
            if col != 3 {
                critical_board.set(row, col, Some(PieceColor::Red));
            }
        }
    }
    assert!(analyze(&critical_board).danger >= DangerLevel::High);

    let mut selector = PieceSelector::new(Some(909), true);
    let cells = |hands: &[blockboard::core::Piece]| -> usize {
        hands.iter().map(|p| p.cell_count()).sum()
    };

    let mut safe_total = 0;
    let mut critical_total = 0;
    for _ in 0..100 {
        safe_total += cells(&selector.next_pieces(&safe_board, 0, 3));
        critical_total += cells(&selector.next_pieces(&critical_board, 0, 3));
    }
    assert!(
        critical_total < safe_total,
        "critical hands ({}) not smaller than safe hands ({})",
        critical_total,
        safe_total
    );
}

#[test]
fn test_locked_kinds_never_dealt_early() {
    let board = Board::new();
    let mut selector = PieceSelector::new(Some(505), true);
    for _ in 0..200 {
        for piece in selector.next_pieces(&board, 0, 3) {
            assert!(!matches!(
                piece.kind(),
                PieceKind::Line5 | PieceKind::Square3 | PieceKind::BigCorner | PieceKind::Rect2x3
            ));
        }
    }
}

#[test]
fn test_unlocked_kinds_do_appear_late() {
    let board = Board::new();
    let mut selector = PieceSelector::new(Some(123), true);
    let mut seen_unlocked = false;
    for _ in 0..300 {
        for piece in selector.next_pieces(&board, 50, 3) {
            if piece.kind().is_extended() && piece.kind().cell_count() >= 5 {
                seen_unlocked = true;
            }
        }
    }
    assert!(seen_unlocked, "large kinds never appeared at 50 lines");
}

#[test]
fn test_classic_mode_determinism() {
    let board = Board::new();
    let mut a = PieceSelector::new(Some(42), false);
    let mut b = PieceSelector::new(Some(42), false);
    for _ in 0..20 {
        assert_eq!(a.next_pieces(&board, 0, 3), b.next_pieces(&board, 0, 3));
    }
}
