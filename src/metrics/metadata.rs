//! Workout metadata summary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::metrics::classifier::{classify_workout, WorkoutType};
use crate::metrics::power_utils::{
    calculate_average_intensity, calculate_normalized_intensity, difficulty_from,
    intensity_factor_from,
};
use crate::metrics::tss::calculate_tss_for_session;
use crate::workouts::types::{total_duration_seconds, Interval};

/// Training-load summary derived from an interval list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutMetadata {
    /// Owning workout, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_id: Option<Uuid>,
    /// Estimated Training Stress Score
    pub estimated_tss: u64,
    /// Classified training focus
    pub training_type: WorkoutType,
    /// Difficulty rating
    pub difficulty: f64,
    /// Normalized intensity / 100
    pub intensity_factor: f64,
    /// Normalized intensity in % FTP
    #[serde(default)]
    pub normalized_intensity: i32,
    /// Unweighted mean interval intensity in % FTP
    pub average_intensity: i32,
    /// Total duration in seconds
    pub duration_seconds: u64,
}

impl WorkoutMetadata {
    /// Zero-valued metadata for an empty workout.
    pub fn empty() -> Self {
        Self {
            workout_id: None,
            estimated_tss: 0,
            training_type: WorkoutType::Recovery,
            difficulty: 0.0,
            intensity_factor: 0.0,
            normalized_intensity: 0,
            average_intensity: 0,
            duration_seconds: 0,
        }
    }
}

/// Compute the full metadata summary for an interval list.
pub fn calculate_metadata(intervals: &[Interval]) -> WorkoutMetadata {
    if intervals.is_empty() {
        return WorkoutMetadata::empty();
    }

    let normalized_intensity = calculate_normalized_intensity(intervals);
    let intensity_factor = intensity_factor_from(normalized_intensity);

    let metadata = WorkoutMetadata {
        workout_id: None,
        estimated_tss: calculate_tss_for_session(intervals),
        training_type: classify_workout(intervals),
        difficulty: difficulty_from(intensity_factor),
        intensity_factor,
        normalized_intensity,
        average_intensity: calculate_average_intensity(intervals),
        duration_seconds: total_duration_seconds(intervals),
    };

    tracing::debug!(
        "Workout metadata: tss={} type={} if={:.2}",
        metadata.estimated_tss,
        metadata.training_type,
        metadata.intensity_factor
    );

    metadata
}
