//! Immutable result types produced by one simulation run.

use serde::Serialize;

/// One leg of the journey, travelled at a single nominal cruise speed.
///
/// Field values are rounded at construction: speed, distance, and time to two
/// decimals, the expansion effect to four.
#[derive(Debug, Clone, Serialize)]
pub struct TravelStage {
    /// 1-based position in the journey.
    pub stage_number: usize,
    /// Cruise speed as a percentage of light speed.
    pub speed_percentage: f64,
    /// Distance covered after expansion correction (light-years).
    pub distance_covered: f64,
    /// Time spent in this stage (years).
    pub time_elapsed: f64,
    /// Percentage added to the nominal stage distance by expansion.
    pub expansion_effect: f64,
}

/// Complete summary of one simulated journey.
#[derive(Debug, Clone, Serialize)]
pub struct MissionReport {
    /// Target star or galaxy name, as supplied by the caller.
    pub destination: String,
    /// Originally requested distance (light-years).
    pub distance: f64,
    /// Caller-supplied mission identifier, treated as opaque.
    pub mission_id: String,
    /// Stages in travel order; length equals the requested stage count.
    pub stages: Vec<TravelStage>,
    /// Sum of per-stage times (years), rounded to two decimals.
    pub total_time: f64,
    /// Distance actually travelled (light-years), rounded to two decimals.
    /// Never less than `distance` for positive inputs.
    pub total_distance: f64,
    /// Percentage by which `total_distance` exceeds `distance`, rounded to
    /// four decimals.
    pub expansion_addition: f64,
}
