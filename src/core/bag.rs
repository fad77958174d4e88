//! Classic bag generator - 7-bag randomizer with extended extras
//!
//! Each bag starts from one of every core kind; every extended kind is
//! then independently added with probability 1/2 before a Fisher-Yates
//! shuffle. The bag refills when exhausted. No board awareness: this is
//! the selectable "classic" mode and the weighted selector's reference
//! distribution.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;
use crate::types::{PieceKind, CORE_KINDS, EXTENDED_KINDS};

/// Serializable bag state: enough to resume dealing mid-bag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BagState {
    pub seed: u64,
    pub draws: u64,
    pub remaining: Vec<PieceKind>,
}

/// Bag-based piece generator
#[derive(Debug, Clone)]
pub struct BagGenerator {
    rng: GameRng,
    bag: Vec<PieceKind>,
    cursor: usize,
}

impl BagGenerator {
    /// Create a new generator with the given seed
    pub fn new(seed: u64) -> Self {
        let mut generator = Self {
            rng: GameRng::new(seed),
            bag: Vec::with_capacity(CORE_KINDS.len() + EXTENDED_KINDS.len()),
            cursor: 0,
        };
        generator.refill();
        generator
    }

    /// Build and shuffle a fresh bag
    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend_from_slice(&CORE_KINDS);
        for kind in EXTENDED_KINDS {
            if self.rng.coin_flip() {
                self.bag.push(kind);
            }
        }
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
    }

    /// Draw the next piece kind, refilling when the bag is exhausted
    pub fn draw(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.cursor];
        self.cursor += 1;
        kind
    }

    /// Look ahead without consuming generator state. Runs the draw on a
    /// clone so refills and their RNG draws stay invisible to `self`.
    pub fn peek(&self, count: usize) -> Vec<PieceKind> {
        let mut preview = self.clone();
        (0..count).map(|_| preview.draw()).collect()
    }

    /// Kinds still queued in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.cursor..]
    }

    /// Capture the full generator state for persistence
    pub fn state(&self) -> BagState {
        BagState {
            seed: self.rng.seed(),
            draws: self.rng.draws(),
            remaining: self.remaining().to_vec(),
        }
    }

    /// Restore a generator to a captured state. O(1) in draw count.
    pub fn from_state(state: &BagState) -> Self {
        Self {
            rng: GameRng::from_parts(state.seed, state.draws),
            bag: state.remaining.clone(),
            cursor: 0,
        }
    }
}
