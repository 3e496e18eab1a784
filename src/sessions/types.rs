//! Session parameters, results and the calculator seam.

use serde::{Deserialize, Serialize};

use crate::metrics::analytics::{AnalyticsError, AnalyticsResult};
use crate::workouts::types::{Interval, RepeatInterval, SingleInterval, WorkoutModel};

/// Lowest accepted session score.
pub const MIN_SCORE: f64 = 1.0;
/// Highest accepted session score.
pub const MAX_SCORE: f64 = 10.0;

/// Derives a session from an athlete profile and parameters.
pub trait SessionCalculator {
    type Profile;
    type Parameters;
    type Output;

    fn calculate(
        &self,
        profile: &Self::Profile,
        parameters: &Self::Parameters,
    ) -> AnalyticsResult<Self::Output>;
}

/// Threshold session flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThresholdIntervalType {
    /// 95-115% FTP
    Threshold,
    /// 85-95% FTP
    SweetSpot,
}

impl ThresholdIntervalType {
    /// Allowed work intensity range in % FTP.
    pub fn intensity_bounds(self) -> (f64, f64) {
        match self {
            ThresholdIntervalType::Threshold => (95.0, 115.0),
            ThresholdIntervalType::SweetSpot => (85.0, 95.0),
        }
    }
}

/// VO2max interval length family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vo2maxIntervalType {
    /// 30-60 s efforts
    Short,
    /// 2-5 min efforts
    Classic,
    /// 5-10 min efforts
    Long,
}

fn validate_score(score: f64) -> AnalyticsResult<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(AnalyticsError::InvalidInput(format!(
            "Score must be between {} and {}, got {}",
            MIN_SCORE, MAX_SCORE, score
        )));
    }
    Ok(())
}

fn validate_minutes(minutes: u32, min: u32, max: u32) -> AnalyticsResult<()> {
    if !(min..=max).contains(&minutes) {
        return Err(AnalyticsError::InvalidInput(format!(
            "Duration must be between {} and {} minutes, got {}",
            min, max, minutes
        )));
    }
    Ok(())
}

/// Inputs for a threshold or sweet-spot session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdSessionParameters {
    /// Difficulty score (1.0-10.0)
    pub score: f64,
    /// Total session length, work plus rest (10-120)
    pub duration_minutes: u32,
    pub interval_type: ThresholdIntervalType,
}

impl ThresholdSessionParameters {
    pub const MIN_MINUTES: u32 = 10;
    pub const MAX_MINUTES: u32 = 120;

    pub fn new(score: f64, duration_minutes: u32, interval_type: ThresholdIntervalType) -> Self {
        Self {
            score,
            duration_minutes,
            interval_type,
        }
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        validate_score(self.score)?;
        validate_minutes(self.duration_minutes, Self::MIN_MINUTES, Self::MAX_MINUTES)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Inputs for a VO2max session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vo2maxSessionParameters {
    /// Difficulty score (1.0-10.0)
    pub score: f64,
    /// Total session length (10-60)
    pub duration_minutes: u32,
    pub interval_type: Vo2maxIntervalType,
}

impl Vo2maxSessionParameters {
    pub const MIN_MINUTES: u32 = 10;
    pub const MAX_MINUTES: u32 = 60;

    pub fn new(score: f64, duration_minutes: u32, interval_type: Vo2maxIntervalType) -> Self {
        Self {
            score,
            duration_minutes,
            interval_type,
        }
    }

    pub fn validate(&self) -> AnalyticsResult<()> {
        validate_score(self.score)?;
        validate_minutes(self.duration_minutes, Self::MIN_MINUTES, Self::MAX_MINUTES)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A calculated interval session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Work intensity as a fraction of FTP (1.05 = 105%)
    pub work_intensity: f64,
    /// Rest intensity as a fraction of FTP
    pub rest_intensity: f64,
    /// Seconds per work interval
    pub work_duration: u32,
    /// Seconds per rest interval
    pub rest_duration: u32,
    /// Session length in seconds
    pub total_duration: u32,
    pub repeats: u32,
    /// Requested score
    pub score: f64,
    /// Total work seconds (threshold sessions only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_time_in_zone: Option<f64>,
}

impl Session {
    /// Render as a single repeat interval with intensities in whole % FTP.
    pub fn to_interval(&self, cadence: Option<i32>) -> Interval {
        let block = |intensity: f64, duration: u32| {
            let single = SingleInterval::new((intensity * 100.0).round() as i32, duration);
            match cadence {
                Some(rpm) => single.with_cadence(rpm),
                None => single,
            }
        };

        Interval::Repeat(RepeatInterval::new(
            block(self.work_intensity, self.work_duration),
            block(self.rest_intensity, self.rest_duration),
            self.repeats,
        ))
    }

    /// Wrap the session in a workout.
    pub fn to_workout(&self, name: impl Into<String>, cadence: Option<i32>) -> WorkoutModel {
        WorkoutModel::new(name, vec![self.to_interval(cadence)])
    }
}
