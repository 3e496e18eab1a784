//! Threshold and sweet-spot session derivation.
//!
//! Closed form, driven by the score s ∈ [1, 10]:
//! - rest/work ratio r = 1 - (s - 1) × 0.75/9 (1.0 down to 0.25)
//! - total work Tw = T / (1 + r)
//! - target = PD(Tw) × (0.80 + (s - 1) × 0.20/9), clamped to the type's band

use crate::metrics::analytics::{AnalyticsError, AnalyticsResult, ThresholdAthleteProfile};

use super::types::{Session, SessionCalculator, ThresholdSessionParameters};

/// Rest intensity between threshold efforts (fraction of FTP).
pub const THRESHOLD_REST_INTENSITY: f64 = 0.5;

/// Rest-to-work ratio for a score.
pub fn rest_ratio(score: f64) -> f64 {
    1.0 - (score - 1.0) * (0.75 / 9.0)
}

/// Fraction of the PD-curve limit to target for a score.
pub fn intensity_factor(score: f64) -> f64 {
    0.80 + (score - 1.0) * (0.20 / 9.0)
}

/// Number of work intervals for a score.
pub fn repeats_for_score(score: f64) -> u32 {
    if score >= 8.5 {
        2
    } else if score >= 6.0 {
        3
    } else if score >= 4.0 {
        4
    } else {
        (10.0 - score).round().max(2.0) as u32
    }
}

/// Calculator for threshold and sweet-spot sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdSessionCalculator;

impl ThresholdSessionCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl SessionCalculator for ThresholdSessionCalculator {
    type Profile = ThresholdAthleteProfile;
    type Parameters = ThresholdSessionParameters;
    type Output = Session;

    fn calculate(
        &self,
        profile: &ThresholdAthleteProfile,
        parameters: &ThresholdSessionParameters,
    ) -> AnalyticsResult<Session> {
        parameters.validate()?;

        let score = parameters.score;
        let total_secs = parameters.duration_minutes as f64 * 60.0;

        let ratio = rest_ratio(score);
        let total_work_secs = total_secs / (1.0 + ratio);

        let max_percent = profile.power_at_duration(total_work_secs);
        let (low, high) = parameters.interval_type.intensity_bounds();
        let target_percent = (max_percent * intensity_factor(score)).clamp(low, high);
        if !target_percent.is_finite() {
            return Err(AnalyticsError::CalculationFailed(format!(
                "Non-finite target power for {:.0}s of work",
                total_work_secs
            )));
        }

        let repeats = repeats_for_score(score);
        let work_secs = total_work_secs / repeats as f64;
        let rest_secs = work_secs * ratio;

        tracing::debug!(
            "Threshold session: score={} work={:.0}s pd={:.1}% target={:.1}% repeats={}",
            score,
            total_work_secs,
            max_percent,
            target_percent,
            repeats
        );

        Ok(Session {
            work_intensity: target_percent / 100.0,
            rest_intensity: THRESHOLD_REST_INTENSITY,
            work_duration: work_secs.round() as u32,
            rest_duration: rest_secs.round() as u32,
            total_duration: total_secs.round() as u32,
            repeats,
            score,
            total_time_in_zone: Some(total_work_secs),
        })
    }
}
