//! Injectable randomness for the simulated inference endpoints.
//!
//! Every generator in this crate is generic over [`rand::Rng`]. Handlers ask
//! a [`RandomSource`] for a fresh per-request [`StdRng`], so no lock is held
//! across an await and a seeded source makes a whole run reproducible.

use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Where per-request random generators come from.
#[derive(Debug, Default)]
pub enum RandomSource {
    /// Each request gets a generator seeded from OS entropy.
    #[default]
    Entropy,
    /// Each request gets a generator derived from one seeded parent.
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    /// A reproducible source: the same seed yields the same sequence of
    /// per-request generators.
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Build from an optional seed, using entropy when none is given.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or(Self::Entropy, Self::seeded)
    }

    /// Hand out a generator for one request.
    pub fn rng(&self) -> StdRng {
        match self {
            Self::Entropy => StdRng::from_os_rng(),
            Self::Seeded(parent) => {
                let mut parent = parent.lock().unwrap_or_else(PoisonError::into_inner);
                StdRng::from_rng(&mut *parent)
            }
        }
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Uniform draw from `range`, rounded to two decimal places.
///
/// Range bounds in this crate are whole numbers, so rounding never leaves
/// the range.
pub fn uniform_2dp<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<f64>) -> f64 {
    round2(rng.random_range(range))
}
