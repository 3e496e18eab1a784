//! IntervalForge - Cycling Workout Synthesis and Training-Load Metrics
//!
//! Derives interval sessions from an athlete's performance profile and
//! summarises any structured workout as training-load metadata.
//!
//! - Threshold and sweet-spot sessions from a power-duration curve
//! - VO2max sessions from a W' balance grid search
//! - TSS, normalized intensity, intensity factor, zone distribution and
//!   workout classification for interval lists

pub mod metrics;
pub mod sessions;
pub mod storage;
pub mod workouts;

use metrics::analytics::{AnalyticsResult, AthleteVo2maxProfile, ThresholdAthleteProfile};
use sessions::{
    SessionCalculator, ThresholdSessionCalculator, ThresholdSessionParameters,
    Vo2maxSessionCalculator, Vo2maxSessionParameters,
};

// Re-export commonly used types
pub use metrics::{
    calculate_metadata, calculate_tss_for_interval, calculate_tss_for_session, classify_workout,
    WorkoutMetadata, WorkoutType,
};
pub use sessions::Session;
pub use storage::config::AppConfig;
pub use workouts::{Interval, WorkoutModel};

/// Derive a threshold or sweet-spot session.
pub fn calculate_threshold_session(
    profile: &ThresholdAthleteProfile,
    parameters: &ThresholdSessionParameters,
) -> AnalyticsResult<Session> {
    ThresholdSessionCalculator.calculate(profile, parameters)
}

/// Derive a VO2max session; `Ok(None)` when nothing fits.
pub fn calculate_vo2max_session(
    profile: &AthleteVo2maxProfile,
    parameters: &Vo2maxSessionParameters,
) -> AnalyticsResult<Option<Session>> {
    Vo2maxSessionCalculator::new().calculate(profile, parameters)
}
