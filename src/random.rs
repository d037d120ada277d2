//! Seeded random number generation.
//!
//! Every stochastic step of the GA draws from one generator created here,
//! so a run is fully reproducible from its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
