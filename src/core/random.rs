//! Random source construction.
//!
//! Generators never reach for a global RNG; they draw from whatever
//! `RngCore` the session hands them. Production sessions use an
//! entropy-seeded `StdRng`, tests pin a seed.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Returns an entropy-seeded source. Every session sees different data.
#[must_use]
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}

/// Returns a deterministic source for reproducible sessions and tests.
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Picks a seeded source when `seed` is set, otherwise an entropy source.
#[must_use]
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seeded_rng(seed),
        None => entropy_rng(),
    }
}
