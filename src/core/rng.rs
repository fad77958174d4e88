//! RNG module - counter-based deterministic random source
//!
//! Every draw mixes `seed + draw_index` through a SplitMix64 finalizer, so
//! the generator's whole state is the pair (seed, draws). Restoring a
//! serialized generator is O(1): no replaying of past draws is needed,
//! the counter simply resumes where it left off.

use std::time::{SystemTime, UNIX_EPOCH};

/// Weyl-sequence increment from SplitMix64
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Counter-based deterministic RNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRng {
    seed: u64,
    draws: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Create a non-reproducible RNG seeded from the system clock.
    /// The effective seed is still recorded, so state serialized after
    /// this point round-trips deterministically.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(GOLDEN_GAMMA);
        Self::new(mix(nanos))
    }

    /// Restore an RNG to an exact prior stream position
    pub fn from_parts(seed: u64, draws: u64) -> Self {
        Self { seed, draws }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of draws consumed so far
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate the next random u64 and advance the counter
    pub fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        mix(self.seed.wrapping_add(self.draws.wrapping_mul(GOLDEN_GAMMA)))
    }

    /// Generate a random value in [0, max). Returns 0 without consuming a
    /// draw when max == 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u64() % u64::from(max)) as u32
    }

    /// Fair coin flip
    pub fn coin_flip(&mut self) -> bool {
        self.next_u64() & 1 == 1
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds_diverge() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(54321);
        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_from_parts_resumes_exactly() {
        let mut original = GameRng::new(777);
        for _ in 0..53 {
            original.next_u64();
        }

        let mut restored = GameRng::from_parts(original.seed(), original.draws());
        for _ in 0..20 {
            assert_eq!(original.next_u64(), restored.next_u64());
        }
    }

    #[test]
    fn test_draw_counter_tracks_every_draw() {
        let mut rng = GameRng::new(9);
        rng.next_u64();
        rng.next_range(10);
        rng.coin_flip();
        let mut v = [1, 2, 3, 4, 5];
        rng.shuffle(&mut v);
        // shuffle consumes len-1 draws
        assert_eq!(rng.draws(), 3 + 4);
    }

    #[test]
    fn test_next_range_zero_is_free() {
        let mut rng = GameRng::new(1);
        assert_eq!(rng.next_range(0), 0);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
