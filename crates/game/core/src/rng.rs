//! Injected random source for event selection and gameplay rolls.
//!
//! Every roll in the simulation goes through a [`RngSource`] handle that the
//! caller passes in explicitly. There is no process-wide generator: the turn
//! driver owns one [`PcgRng`] and lends it to the director and to the events
//! it executes.
//!
//! # Determinism
//!
//! Given the same seed, [`PcgRng`] produces the same sequence of values, so a
//! seeded journey replays exactly.

/// Source of uniformly distributed random numbers.
pub trait RngSource {
    /// Generate the next raw 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform value in `[0, bound)`.
    ///
    /// Uses rejection sampling so every value is equally likely. Returns 0
    /// when `bound` is 0.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // Smallest value that starts a full window of `bound` outputs.
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let value = self.next_u32();
            if value >= threshold {
                return value % bound;
            }
        }
    }

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&mut self) -> u32 {
        self.below(100) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.below(max - min + 1)
    }

    /// Returns true with the given percent probability (clamped to 0..=100).
    fn chance(&mut self, percent: u32) -> bool {
        self.roll_d100() <= percent.min(100)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit output through an xorshift and a
/// state-dependent rotation.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a generator seeded with `seed`.
    pub fn seed_from(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.step();
        rng.state = rng.state.wrapping_add(seed);
        rng.step();
        rng
    }

    /// Advance the LCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// XSH-RR output permutation of a state value.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.step();
        Self::output(old)
    }
}

/// Mix a base seed with a context value into an independent stream seed.
///
/// Used to give the guarded request and the event rolls separate streams from
/// a single journey seed.
pub fn derive_seed(base: u64, context: u64) -> u64 {
    // SplitMix64 finalizer
    let mut hash = base ^ context.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 30;
    hash = hash.wrapping_mul(0xbf58476d1ce4e5b9);
    hash ^= hash >> 27;
    hash = hash.wrapping_mul(0x94d049bb133111eb);
    hash ^= hash >> 31;
    hash
}
