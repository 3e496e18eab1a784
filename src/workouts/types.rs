//! Interval and workout types.
//!
//! Intervals are a closed sum type: every consumer (metrics, TSS, codec)
//! matches all three variants exhaustively.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::metrics::metadata::{calculate_metadata, WorkoutMetadata};

/// Constant-intensity block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleInterval {
    /// Target intensity in % FTP
    pub target_intensity: i32,
    /// Target cadence in rpm
    #[serde(default)]
    pub target_cadence: i32,
    /// Whether the cadence target is shown to the rider
    #[serde(default)]
    pub enable_cadence: bool,
    /// Duration in seconds
    pub duration: u32,
}

impl SingleInterval {
    /// Create a single interval without a cadence target.
    pub fn new(target_intensity: i32, duration: u32) -> Self {
        Self {
            target_intensity,
            target_cadence: 0,
            enable_cadence: false,
            duration,
        }
    }

    /// Attach a cadence target.
    pub fn with_cadence(mut self, cadence: i32) -> Self {
        self.target_cadence = cadence;
        self.enable_cadence = true;
        self
    }
}

/// Linear intensity change over the interval duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RampInterval {
    /// Starting intensity in % FTP
    pub target_intensity_from: i32,
    /// Final intensity in % FTP
    pub target_intensity_to: i32,
    /// Target cadence in rpm
    pub target_cadence: i32,
    /// Whether the cadence target is shown to the rider
    pub enable_cadence: bool,
    /// Duration in seconds
    pub duration: u32,
}

impl Default for RampInterval {
    fn default() -> Self {
        Self {
            target_intensity_from: 10,
            target_intensity_to: 50,
            target_cadence: 90,
            enable_cadence: true,
            duration: 300,
        }
    }
}

impl RampInterval {
    /// Create a ramp between two intensities, keeping the default cadence target.
    pub fn new(from: i32, to: i32, duration: u32) -> Self {
        Self {
            target_intensity_from: from,
            target_intensity_to: to,
            duration,
            ..Default::default()
        }
    }

    /// Intensity at second `i` of the ramp (truncating integer interpolation).
    pub fn intensity_at(&self, i: u32) -> i32 {
        if self.duration == 0 {
            return self.target_intensity_from;
        }
        let from = self.target_intensity_from as i64;
        let delta = self.target_intensity_to as i64 - from;
        let step = delta * i as i64 / self.duration as i64;
        (from + step) as i32
    }

    /// Truncated midpoint of the two intensities.
    pub fn midpoint_intensity(&self) -> i32 {
        ((self.target_intensity_from as i64 + self.target_intensity_to as i64) / 2) as i32
    }
}

/// Work/rest pair executed `repeats` times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInterval {
    pub work: SingleInterval,
    pub rest: SingleInterval,
    pub repeats: u32,
}

impl RepeatInterval {
    pub fn new(work: SingleInterval, rest: SingleInterval, repeats: u32) -> Self {
        Self {
            work,
            rest,
            repeats,
        }
    }
}

/// A workout building block, tagged by `type` when persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Interval {
    Single(SingleInterval),
    Ramp(RampInterval),
    Repeat(RepeatInterval),
}

impl Interval {
    /// Total wall-clock duration in seconds, saturating at `u64::MAX`.
    pub fn total_duration_seconds(&self) -> u64 {
        match self {
            Interval::Single(single) => single.duration as u64,
            Interval::Ramp(ramp) => ramp.duration as u64,
            Interval::Repeat(repeat) => {
                let cycle = repeat.work.duration as u64 + repeat.rest.duration as u64;
                cycle.saturating_mul(repeat.repeats as u64)
            }
        }
    }

    /// Representative intensity in % FTP.
    ///
    /// Ramps use the truncated midpoint; repeats blend work and rest by
    /// duration (0 when both halves are empty).
    pub fn average_intensity(&self) -> i32 {
        match self {
            Interval::Single(single) => single.target_intensity,
            Interval::Ramp(ramp) => ramp.midpoint_intensity(),
            Interval::Repeat(repeat) => {
                let work_secs = repeat.work.duration as i128;
                let rest_secs = repeat.rest.duration as i128;
                let total = work_secs + rest_secs;
                if total == 0 {
                    return 0;
                }
                let weighted = repeat.work.target_intensity as i128 * work_secs
                    + repeat.rest.target_intensity as i128 * rest_secs;
                (weighted / total) as i32
            }
        }
    }

    /// Persisted type tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Interval::Single(_) => "SINGLE",
            Interval::Ramp(_) => "RAMP",
            Interval::Repeat(_) => "REPEAT",
        }
    }
}

impl From<SingleInterval> for Interval {
    fn from(value: SingleInterval) -> Self {
        Interval::Single(value)
    }
}

impl From<RampInterval> for Interval {
    fn from(value: RampInterval) -> Self {
        Interval::Ramp(value)
    }
}

impl From<RepeatInterval> for Interval {
    fn from(value: RepeatInterval) -> Self {
        Interval::Repeat(value)
    }
}

/// Summed duration of an interval list, saturating at `u64::MAX`.
pub fn total_duration_seconds(intervals: &[Interval]) -> u64 {
    intervals
        .iter()
        .map(Interval::total_duration_seconds)
        .fold(0, u64::saturating_add)
}

/// A named workout with its interval list and cached metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutModel {
    /// Unique identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered interval list
    #[serde(default)]
    pub intervals: Vec<Interval>,
    /// Last computed metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<WorkoutMetadata>,
}

impl WorkoutModel {
    /// Create a workout from an interval list.
    pub fn new(name: impl Into<String>, intervals: Vec<Interval>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            intervals,
            metadata: None,
        }
    }

    /// Sum of all interval durations.
    pub fn total_duration_seconds(&self) -> u64 {
        total_duration_seconds(&self.intervals)
    }

    /// A workout needs at least one interval.
    pub fn is_valid(&self) -> bool {
        !self.intervals.is_empty()
    }

    /// Recompute and cache metadata.
    pub fn recalculate_metadata(&mut self) -> &WorkoutMetadata {
        self.metadata(true)
    }

    /// Cached metadata, computed on first access or when forced.
    pub fn metadata(&mut self, force_recalculate: bool) -> &WorkoutMetadata {
        if force_recalculate {
            self.metadata = None;
        }
        let id = self.id;
        let intervals = &self.intervals;
        self.metadata.get_or_insert_with(|| {
            let mut metadata = calculate_metadata(intervals);
            metadata.workout_id = Some(id);
            metadata
        })
    }
}

/// Errors related to workout operations.
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Workout file could not be read
    #[error("Failed to read workout file {path}: {reason}")]
    FileReadError { path: String, reason: String },

    /// Workout parsing failed
    #[error("Failed to parse workout: {0}")]
    ParseError(#[from] WorkoutParseError),

    /// Invalid workout structure
    #[error("Invalid workout: {0}")]
    InvalidWorkout(String),
}

/// Errors during interval JSON parsing.
#[derive(Debug, Error)]
pub enum WorkoutParseError {
    /// Malformed JSON document
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Interval entry with an unrecognised type tag
    #[error("Unknown interval type: {0}")]
    UnknownIntervalType(String),

    /// Interval entry that does not match its declared type
    #[error("Invalid {kind} interval: {reason}")]
    InvalidInterval { kind: String, reason: String },
}
