//! RNG module - seedable random source for answer generation
//!
//! Implements mulberry32, a fast 32-bit PRNG with good distribution for
//! non-cryptographic use. Daily challenges seed it from a calendar-date
//! string so every player faces the same answer; free play seeds it from
//! OS entropy.
//!
//! The string-to-state hash and the generator step are part of the daily
//! fairness contract: changing either changes every historical daily answer.

/// Mulberry32 PRNG
///
/// Pure function of its 32-bit state; independent instances share nothing.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a new generator with the given raw seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from a string via a polynomial rolling hash
    ///
    /// `h = h * 31 + byte` with 32-bit wraparound, matching `imul`
    /// semantics so date seeds reproduce across implementations.
    pub fn from_seed_str(seed: &str) -> Self {
        let mut h: i32 = 0;
        for &b in seed.as_bytes() {
            h = h.wrapping_mul(31).wrapping_add(i32::from(b));
        }
        Self::new(h as u32)
    }

    /// Seed from OS entropy (free play, no reproducibility guarantee)
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// Generate next random u32 (one mulberry32 step)
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate a float uniformly distributed in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Generate a random index in `[0, bound)`
    ///
    /// `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        (self.next_f64() * bound as f64) as usize
    }

    /// Shuffle a slice in place using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}
