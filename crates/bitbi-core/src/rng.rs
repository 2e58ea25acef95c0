//! Construction of the random source behind the animation.
//!
//! Glyph choice, reset draws, and spawn offsets all flow through an
//! injected [`rand::Rng`], so the generator is decided exactly once:
//! [`from_entropy`] for normal operation, [`seeded`] when a
//! reproducible sequence is needed (tests, statistics).

use rand::SeedableRng;
use rand_pcg::Pcg64;

/// The generator used by the animation: PCG-64, fast and small.
pub type RainRng = Pcg64;

/// A generator seeded from the operating system.
pub fn from_entropy() -> RainRng {
    RainRng::from_os_rng()
}

/// A deterministic generator for reproducible runs.
pub fn seeded(seed: u64) -> RainRng {
    RainRng::seed_from_u64(seed)
}
