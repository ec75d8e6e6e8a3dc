//! Stage speed profile generation: evenly spaced cruise speeds in a caller-supplied
//! bound, handed to an injectable permutation before the simulator consumes them.
//!
//! The permutation is the only source of randomness in the workspace; everything
//! downstream of it is a pure function of its inputs.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Lowest cruise speed accepted, in percent of light speed.
pub const MIN_SPEED_PCT: f64 = 0.1;
/// Highest cruise speed accepted, in percent of light speed.
pub const MAX_SPEED_PCT: f64 = 100.0;

/// Errors surfaced while building a speed profile.
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("cruise speeds must satisfy 0.1 <= min <= max <= 100 percent of c, got {min}..{max}")]
    InvalidSpeedRange { min: f64, max: f64 },
    #[error("journey needs at least one stage")]
    InvalidStageCount,
}

/// Strategy that reorders the generated speed sequence in place.
pub trait PermutationStrategy {
    fn permute(&mut self, values: &mut [f64]);
}

/// Fisher-Yates shuffle driven by any [`rand::Rng`].
pub struct RandomPermutation<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomPermutation<R> {
    /// Wrap an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPermutation<StdRng> {
    /// Shuffle with OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Shuffle reproducibly from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> PermutationStrategy for RandomPermutation<R> {
    fn permute(&mut self, values: &mut [f64]) {
        values.shuffle(&mut self.rng);
    }
}

/// Keeps the linspace ordering untouched. Useful wherever determinism matters
/// more than variety, e.g. regression baselines.
pub struct IdentityPermutation;

impl PermutationStrategy for IdentityPermutation {
    fn permute(&mut self, _values: &mut [f64]) {}
}

/// Generate `num_stages` cruise speeds linearly spaced over `[min_speed, max_speed]`
/// (inclusive at both ends), then reorder them with `strategy`.
///
/// A single stage degenerates to `[min_speed]`.
pub fn speed_profile(
    num_stages: usize,
    min_speed: f64,
    max_speed: f64,
    strategy: &mut dyn PermutationStrategy,
) -> Result<Vec<f64>, ProfileError> {
    validate_speed_range(min_speed, max_speed)?;
    if num_stages == 0 {
        return Err(ProfileError::InvalidStageCount);
    }

    let mut speeds = linspace(min_speed, max_speed, num_stages);
    strategy.permute(&mut speeds);
    Ok(speeds)
}

/// Check the speed bound without generating anything.
pub fn validate_speed_range(min_speed: f64, max_speed: f64) -> Result<(), ProfileError> {
    if !(MIN_SPEED_PCT..=MAX_SPEED_PCT).contains(&min_speed)
        || !(min_speed..=MAX_SPEED_PCT).contains(&max_speed)
    {
        return Err(ProfileError::InvalidSpeedRange {
            min: min_speed,
            max: max_speed,
        });
    }
    Ok(())
}

/// `points` values evenly spaced over `[start, end]`, both endpoints included.
pub fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
