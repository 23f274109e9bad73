//! Process-wide seed source for decks created without an explicit seed.
//!
//! The shared generator is initialised lazily on first use. With the `std`
//! feature the initial seed comes from the wall clock; `alloc`-only builds
//! start from [`FALLBACK_SEED`] unless [`seed_shared`] is called first.
//! Decks never shuffle with the shared generator directly: each one draws a
//! seed from it and owns its own [`ChaCha8Rng`].

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "std")]
static SHARED: std::sync::Mutex<Option<ChaCha8Rng>> = std::sync::Mutex::new(None);

#[cfg(all(not(feature = "std"), feature = "alloc"))]
static SHARED: spin::Mutex<Option<ChaCha8Rng>> = spin::Mutex::new(None);

/// Seed used by `alloc`-only builds when the shared generator was never seeded.
pub const FALLBACK_SEED: u64 = 0x5EED_DEC4;

fn with_shared<R>(f: impl FnOnce(&mut Option<ChaCha8Rng>) -> R) -> R {
    #[cfg(feature = "std")]
    let mut shared = SHARED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    #[cfg(all(not(feature = "std"), feature = "alloc"))]
    let mut shared = SHARED.lock();

    f(&mut shared)
}

#[cfg(feature = "std")]
fn ambient_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64
}

#[cfg(not(feature = "std"))]
const fn ambient_seed() -> u64 {
    FALLBACK_SEED
}

/// Reseeds the shared generator.
///
/// Decks created afterwards with [`Deck::from_type`](crate::Deck::from_type)
/// or [`Deck::default`](crate::Deck::default) get reproducible seeds.
pub fn seed_shared(seed: u64) {
    log::debug!("shared deck generator seeded with {seed}");
    with_shared(|shared| *shared = Some(ChaCha8Rng::seed_from_u64(seed)));
}

/// Draws the next per-deck seed from the shared generator.
pub(crate) fn next_seed() -> u64 {
    with_shared(|shared| {
        shared
            .get_or_insert_with(|| {
                let seed = ambient_seed();
                log::debug!("shared deck generator initialised with seed {seed}");
                ChaCha8Rng::seed_from_u64(seed)
            })
            .next_u64()
    })
}
