//! Metrics module for athlete models and workout training load.

pub mod analytics;
pub mod classifier;
pub mod metadata;
pub mod power_utils;
pub mod smoothing;
pub mod tss;
pub mod zones;

pub use classifier::{classify_workout, WorkoutType};
pub use metadata::{calculate_metadata, WorkoutMetadata};
pub use tss::{calculate_tss_for_interval, calculate_tss_for_session};
pub use zones::{PowerZone, ZoneDistribution};

// Re-export key analytics types for convenience
pub use analytics::{
    AnalyticsError, AnalyticsResult, AthleteVo2maxProfile, PdPoint, ThresholdAthleteProfile,
    WPrimeBalance,
};
