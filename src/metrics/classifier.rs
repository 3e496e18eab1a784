//! Workout type classification from time-in-zone shares.

use serde::{Deserialize, Serialize};

use crate::metrics::power_utils::calculate_distribution;
use crate::metrics::zones::PowerZone;
use crate::workouts::types::{total_duration_seconds, Interval};

/// Training focus of a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    Recovery,
    Endurance,
    Tempo,
    Threshold,
    Vo2max,
    Anaerobic,
    Neuromuscular,
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutType::Recovery => write!(f, "Recovery"),
            WorkoutType::Endurance => write!(f, "Endurance"),
            WorkoutType::Tempo => write!(f, "Tempo"),
            WorkoutType::Threshold => write!(f, "Threshold"),
            WorkoutType::Vo2max => write!(f, "VO2max"),
            WorkoutType::Anaerobic => write!(f, "Anaerobic"),
            WorkoutType::Neuromuscular => write!(f, "Neuromuscular"),
        }
    }
}

/// Cumulative share thresholds, checked from the top zone down.
const CASCADE: [(PowerZone, f64, WorkoutType); 6] = [
    (PowerZone::Z7Neuromuscular, 0.05, WorkoutType::Neuromuscular),
    (PowerZone::Z6Anaerobic, 0.08, WorkoutType::Anaerobic),
    (PowerZone::Z5Vo2max, 0.10, WorkoutType::Vo2max),
    (PowerZone::Z4Threshold, 0.20, WorkoutType::Threshold),
    (PowerZone::Z3Tempo, 0.40, WorkoutType::Tempo),
    (PowerZone::Z2Endurance, 0.60, WorkoutType::Endurance),
];

/// Classify a workout by cumulative time-in-zone.
///
/// Time in higher zones carries down: a zone wins once its share plus the
/// share of every zone above it reaches its threshold.
pub fn classify_workout(intervals: &[Interval]) -> WorkoutType {
    if intervals.is_empty() {
        return WorkoutType::Recovery;
    }

    let total = total_duration_seconds(intervals);
    if total == 0 {
        return WorkoutType::Recovery;
    }

    let distribution = calculate_distribution(intervals);
    let mut cumulative_secs = 0u64;
    for (zone, threshold, workout_type) in CASCADE {
        cumulative_secs = cumulative_secs.saturating_add(distribution.seconds_in(zone));
        let share = cumulative_secs as f64 / total as f64;
        if share >= threshold {
            tracing::debug!("Classified workout as {} at {:.3}", workout_type, share);
            return workout_type;
        }
    }

    WorkoutType::Recovery
}
