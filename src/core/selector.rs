//! Weighted piece selector - board-aware hand generation
//!
//! Produces the next hand of pieces biased by the board's danger level:
//! the tighter the board, the more the distribution favors small pieces,
//! while a safe board gets close to the classic bag's rich mix. The
//! selector never returns a hand with no placeable piece while the board
//! still has room, but it also never guarantees a specific outcome.
//!
//! All randomness flows through one counter-based [`GameRng`] (plus the
//! classic bag's own), so a selector restored from [`GeneratorState`]
//! continues the exact same piece sequence.

use serde::{Deserialize, Serialize};

use crate::core::analysis::{analyze, DangerLevel};
use crate::core::bag::{BagGenerator, BagState};
use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::core::rng::GameRng;
use crate::types::{PieceKind, Rotation, ALL_ROTATIONS};

/// Keeps the bag's stream decorrelated from the selector's own draws when
/// both derive from one user-supplied seed.
const BAG_SEED_SALT: u64 = 0xB1A5_ED0F_F5EE_D5A1;

/// Kinds available from the first hand onward
const BASE_POOL: [PieceKind; 12] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
    PieceKind::Dot,
    PieceKind::Line2,
    PieceKind::Line3,
    PieceKind::Corner,
    PieceKind::Square2,
];

/// Larger kinds unlock as total cleared lines grow. Pure function of the
/// progression signal, never of time.
const PROGRESSION_UNLOCKS: [(PieceKind, u32); 4] = [
    (PieceKind::Rect2x3, 10),
    (PieceKind::BigCorner, 20),
    (PieceKind::Square3, 30),
    (PieceKind::Line5, 40),
];

/// Serializable selector state: the complete RNG continuation point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorState {
    pub weighted: bool,
    pub seed: u64,
    pub draws: u64,
    pub bag: BagState,
}

/// Board-aware piece generator with a classic-bag fallback mode
#[derive(Debug, Clone)]
pub struct PieceSelector {
    rng: GameRng,
    bag: BagGenerator,
    weighted: bool,
}

impl PieceSelector {
    /// Create a selector. `None` seed draws one from the system clock
    /// (non-reproducible creation, deterministic from then on).
    pub fn new(seed: Option<u64>, weighted: bool) -> Self {
        let rng = match seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let bag = BagGenerator::new(rng.seed() ^ BAG_SEED_SALT);
        Self { rng, bag, weighted }
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Produce the next `count` pieces for the given board and progression
    /// signal. `count == 0` returns an empty hand without touching state.
    pub fn next_pieces(&mut self, board: &Board, total_lines: u32, count: usize) -> Vec<Piece> {
        if count == 0 {
            return Vec::new();
        }

        let mut hand = if self.weighted {
            self.draw_weighted(board, total_lines, count)
        } else {
            self.draw_classic(count)
        };

        if self.weighted {
            self.ensure_placeable(board, total_lines, &mut hand);
        }
        hand
    }

    /// Look at the hand the next `next_pieces` call will return, without
    /// advancing any observable state. Runs the real draw on a clone, so
    /// kinds and rotations both match the subsequent get exactly.
    pub fn peek_next_pieces(&self, board: &Board, total_lines: u32, count: usize) -> Vec<Piece> {
        self.clone().next_pieces(board, total_lines, count)
    }

    /// Classic mode: kinds from the bag, rotation from the selector stream
    fn draw_classic(&mut self, count: usize) -> Vec<Piece> {
        (0..count)
            .map(|_| {
                let kind = self.bag.draw();
                let rotation = self.random_rotation();
                Piece::new(kind, rotation)
            })
            .collect()
    }

    /// Weighted mode: roulette draw over the unlocked pool
    fn draw_weighted(&mut self, board: &Board, total_lines: u32, count: usize) -> Vec<Piece> {
        let danger = analyze(board).danger;
        let pool = unlocked_pool(total_lines);

        // At high pressure, kinds that still fit somewhere get a boost on
        // top of the small-piece bias.
        let mut weights = [0u32; 16];
        let mut total_weight = 0u32;
        for &kind in &pool {
            let mut weight = kind_weight(kind, danger);
            if danger >= DangerLevel::High && kind_fits_somewhere(board, kind) {
                weight = weight.saturating_mul(4);
            }
            weights[kind.index()] = weight;
            total_weight += weight;
        }

        (0..count)
            .map(|_| {
                let kind = self.roulette(&pool, &weights, total_weight);
                let rotation = self.random_rotation();
                Piece::new(kind, rotation)
            })
            .collect()
    }

    /// One weighted draw over the pool
    fn roulette(&mut self, pool: &[PieceKind], weights: &[u32; 16], total: u32) -> PieceKind {
        if total == 0 {
            // Degenerate weights; fall back to a uniform pick.
            let idx = self.rng.next_range(pool.len() as u32) as usize;
            return pool[idx];
        }
        let mut pick = self.rng.next_range(total);
        for &kind in pool {
            let weight = weights[kind.index()];
            if pick < weight {
                return kind;
            }
            pick -= weight;
        }
        // Unreachable when weights sum to total; keep the last kind as a
        // safe answer for arithmetic drift.
        pool[pool.len() - 1]
    }

    fn random_rotation(&mut self) -> Rotation {
        Rotation::from_index(self.rng.next_range(4) as u8).unwrap_or(Rotation::R0)
    }

    /// Safety guarantee: at least one piece of the hand must fit on the
    /// board. When the naive draw fails, swap the first slot for the
    /// simplest unlocked piece that fits, conceding the single-cell Dot
    /// only when nothing else does. A board with zero empty cells is left
    /// alone: no piece can help and the engine will call game over.
    fn ensure_placeable(&self, board: &Board, total_lines: u32, hand: &mut [Piece]) {
        if hand.is_empty() || board.empty_cell_count() == 0 {
            return;
        }
        if hand.iter().any(|&piece| board.can_place_anywhere(piece)) {
            return;
        }

        let mut pool = unlocked_pool(total_lines);
        pool.sort_by_key(|kind| kind.cell_count());

        for kind in pool.into_iter().filter(|&kind| kind != PieceKind::Dot) {
            for rotation in ALL_ROTATIONS {
                let piece = Piece::new(kind, rotation);
                if board.can_place_anywhere(piece) {
                    hand[0] = piece;
                    return;
                }
            }
        }

        // Last resort: a Dot fits wherever a single empty cell exists.
        hand[0] = Piece::new(PieceKind::Dot, Rotation::R0);
    }

    /// Capture the complete generator state for persistence
    pub fn state(&self) -> GeneratorState {
        GeneratorState {
            weighted: self.weighted,
            seed: self.rng.seed(),
            draws: self.rng.draws(),
            bag: self.bag.state(),
        }
    }

    /// Restore a selector to a captured state. O(1) in draw count.
    pub fn from_state(state: &GeneratorState) -> Self {
        Self {
            rng: GameRng::from_parts(state.seed, state.draws),
            bag: BagGenerator::from_state(&state.bag),
            weighted: state.weighted,
        }
    }
}

/// Candidate kinds for a given progression signal
fn unlocked_pool(total_lines: u32) -> Vec<PieceKind> {
    let mut pool: Vec<PieceKind> = BASE_POOL.to_vec();
    for (kind, threshold) in PROGRESSION_UNLOCKS {
        if total_lines >= threshold {
            pool.push(kind);
        }
    }
    pool
}

/// Weight of a kind under a danger level: flat when safe, increasingly
/// tilted toward small footprints as the board tightens.
fn kind_weight(kind: PieceKind, danger: DangerLevel) -> u32 {
    let cells = kind.cell_count() as u32;
    match danger {
        DangerLevel::Safe => 12,
        DangerLevel::Moderate => 18u32.saturating_sub(cells),
        DangerLevel::High => 28u32.saturating_sub(2 * cells),
        DangerLevel::Critical => 44u32.saturating_sub(4 * cells).max(2),
    }
}

/// Whether any rotation of the kind fits somewhere on the board
fn kind_fits_somewhere(board: &Board, kind: PieceKind) -> bool {
    ALL_ROTATIONS
        .iter()
        .any(|&rotation| board.can_place_anywhere(Piece::new(kind, rotation)))
}
