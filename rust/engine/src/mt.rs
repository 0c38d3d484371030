//! 32-bit Mersenne Twister (MT19937).
//!
//! Output is bit-exact with the reference construction, so a shoe shuffled
//! from a given seed is reproducible across platforms. All state arithmetic
//! is `u32` with explicit wrapping.

use rand::{RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_B0DF;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7FFF_FFFF;

/// Seed used when the generator is drawn from before being seeded.
pub const DEFAULT_SEED: u32 = 5489;

#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; N],
    index: usize,
}

impl std::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl MersenneTwister {
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for k in 1..N {
            let prev = state[k - 1];
            state[k] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(k as u32);
        }
        Self { state, index: N }
    }

    fn twist(&mut self) {
        for k in 0..N {
            let y = (self.state[k] & UPPER_MASK) | (self.state[(k + 1) % N] & LOWER_MASK);
            let mut next = self.state[(k + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[k] = next;
        }
        self.index = 0;
    }

    /// Next tempered 32-bit output; retwists every 624 draws.
    pub fn draw(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut x = self.state[self.index];
        self.index += 1;
        x ^= x >> 11;
        x ^= (x << 7) & 0x9D2C_5680;
        x ^= (x << 15) & 0xEFC6_0000;
        x ^= x >> 18;
        x
    }
}

impl RngCore for MersenneTwister {
    fn next_u32(&mut self) -> u32 {
        self.draw()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.draw());
        let hi = u64::from(self.draw());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.draw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for MersenneTwister {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates to the low 32 bits so `seed_from_u64(5489)` is the reference stream.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
