//! Randomness sources for the dice tools.
//!
//! Tools never reach for a global generator; the server hands them an
//! `Arc<dyn DiceRng>` so tests can substitute deterministic sources.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use super::common::Sides;
use crate::core::config::DiceConfig;

/// A uniform randomness source that may be shared between concurrent calls.
pub trait DiceRng: Send + Sync {
    /// Draw one value uniformly from `[1, sides]`.
    fn roll(&self, sides: Sides) -> u32;

    /// Fair coin; `true` is heads.
    fn flip(&self) -> bool;
}

/// Default source backed by the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl DiceRng for ThreadRandom {
    fn roll(&self, sides: Sides) -> u32 {
        rand::thread_rng().gen_range(1..=sides.get())
    }

    fn flip(&self) -> bool {
        rand::thread_rng().gen_bool(0.5)
    }
}

/// Reproducible source seeded from configuration.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    // A panic while holding the lock cannot leave StdRng half-updated.
    fn lock(&self) -> MutexGuard<'_, StdRng> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DiceRng for SeededRandom {
    fn roll(&self, sides: Sides) -> u32 {
        self.lock().gen_range(1..=sides.get())
    }

    fn flip(&self) -> bool {
        self.lock().gen_bool(0.5)
    }
}

/// Build the randomness source described by the configuration.
pub fn rng_from_config(config: &DiceConfig) -> Arc<dyn DiceRng> {
    match config.seed {
        Some(seed) => {
            info!("Using seeded random source (seed={})", seed);
            Arc::new(SeededRandom::new(seed))
        }
        None => Arc::new(ThreadRandom),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn d(sides: i64) -> Sides {
        Sides::new(sides).unwrap()
    }

    #[test]
    fn test_thread_random_stays_in_range() {
        let rng = ThreadRandom;
        for _ in 0..1000 {
            let value = rng.roll(d(2));
            assert!((1..=2).contains(&value));
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);
        let first: Vec<u32> = (0..20).map(|_| a.roll(d(1000))).collect();
        let second: Vec<u32> = (0..20).map(|_| b.roll(d(1000))).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeded_random_shared_across_threads() {
        let rng = Arc::new(SeededRandom::new(7));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rng = rng.clone();
                thread::spawn(move || (0..250).map(|_| rng.roll(d(6))).collect::<Vec<_>>())
            })
            .collect();

        for handle in handles {
            for value in handle.join().unwrap() {
                assert!((1..=6).contains(&value));
            }
        }
    }

    #[test]
    fn test_rng_from_config() {
        let seeded = rng_from_config(&DiceConfig { seed: Some(1) });
        let reference = SeededRandom::new(1);
        assert_eq!(seeded.roll(d(100)), reference.roll(d(100)));

        let unseeded = rng_from_config(&DiceConfig::default());
        assert!((1..=100).contains(&unseeded.roll(d(100))));
    }
}
