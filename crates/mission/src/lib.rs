//! Journey simulator: partitions the trip into equal nominal stages, applies the
//! expansion correction per stage, and rolls the results into a mission report.

pub mod report;

use stellar_core::constants::{HUBBLE_CONSTANT, SPEED_OF_LIGHT};
use stellar_core::units::{ly_to_mpc, percent_to_fraction, round_dp};
use stellar_profile::{PermutationStrategy, ProfileError, speed_profile};

use crate::report::{MissionReport, TravelStage};

/// Inputs for one simulated journey.
#[derive(Debug, Clone)]
pub struct MissionConfig {
    pub destination: String,
    /// Requested distance in light-years; must be positive.
    pub distance_ly: f64,
    pub mission_id: String,
    /// Number of cruise stages; must be at least one.
    pub num_stages: usize,
    /// Lowest cruise speed, percent of light speed.
    pub min_speed_pct: f64,
    /// Highest cruise speed, percent of light speed.
    pub max_speed_pct: f64,
}

/// Top-level simulation error.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    #[error("speed profile generation failed: {0}")]
    Profile(#[from] ProfileError),
    #[error("stage speed must be positive, got {0} percent of c")]
    InvalidSpeedValue(f64),
    #[error("journey distance must be positive, got {0} light-years")]
    InvalidDistance(f64),
}

/// Simulate a journey end to end: build the speed profile with the supplied
/// permutation, then run the single simulation pass over it.
pub fn simulate(
    config: &MissionConfig,
    strategy: &mut dyn PermutationStrategy,
) -> Result<MissionReport, MissionError> {
    let profile = speed_profile(
        config.num_stages,
        config.min_speed_pct,
        config.max_speed_pct,
        strategy,
    )?;
    simulate_with_profile(config, &profile)
}

/// Simulate a journey over an already-resolved speed profile, one stage per
/// entry. This is the deterministic entry point; [`simulate`] delegates here
/// after shuffling.
///
/// Stage times divide the corrected stage distance by the speed *fraction*,
/// not by km/s. The model's year-scale outputs depend on that convention, so
/// callers comparing against it must use the same divisor.
pub fn simulate_with_profile(
    config: &MissionConfig,
    profile: &[f64],
) -> Result<MissionReport, MissionError> {
    if config.distance_ly <= 0.0 {
        return Err(MissionError::InvalidDistance(config.distance_ly));
    }
    if profile.is_empty() {
        return Err(ProfileError::InvalidStageCount.into());
    }

    let num_stages = profile.len();
    // Equal nominal partition; expansion varies per stage only through speed.
    let stage_distance = config.distance_ly / num_stages as f64;
    let expansion_speed_km_s = HUBBLE_CONSTANT * ly_to_mpc(stage_distance);

    let mut stages = Vec::with_capacity(num_stages);
    let mut total_actual_distance = 0.0;
    let mut total_time = 0.0;

    for (index, &speed_pct) in profile.iter().enumerate() {
        if speed_pct <= 0.0 {
            return Err(MissionError::InvalidSpeedValue(speed_pct));
        }
        let speed_fraction = percent_to_fraction(speed_pct);
        let speed_km_s = speed_fraction * SPEED_OF_LIGHT;

        let expansion_factor = 1.0 + expansion_speed_km_s / speed_km_s;
        let actual_distance = stage_distance * expansion_factor;
        let stage_time = actual_distance / speed_fraction;

        // Accumulate unrounded; only the stored fields carry rounding.
        total_actual_distance += actual_distance;
        total_time += stage_time;

        stages.push(TravelStage {
            stage_number: index + 1,
            speed_percentage: round_dp(speed_pct, 2),
            distance_covered: round_dp(actual_distance, 2),
            time_elapsed: round_dp(stage_time, 2),
            expansion_effect: round_dp((expansion_factor - 1.0) * 100.0, 4),
        });
    }

    let expansion_impact = (total_actual_distance / config.distance_ly - 1.0) * 100.0;

    Ok(MissionReport {
        destination: config.destination.clone(),
        distance: config.distance_ly,
        mission_id: config.mission_id.clone(),
        stages,
        total_time: round_dp(total_time, 2),
        total_distance: round_dp(total_actual_distance, 2),
        expansion_addition: round_dp(expansion_impact, 4),
    })
}
