//! Power-duration curve for threshold session planning.
//!
//! The curve maps a duration to the maximum sustainable intensity (% FTP).
//! Points are interpolated over log(duration), where the power-duration
//! relationship is close to linear:
//! - fewer than 2 points: power-law decay anchored at TTE-at-FTP
//! - 2 to 4 points: piecewise linear
//! - 5 or more points: Akima spline
//!
//! Outside the sampled range the curve is always extended linearly from the
//! two boundary points. If building or evaluating the interpolant fails, a
//! manual piecewise-linear walk over the points is used instead.

use serde::{Deserialize, Serialize};

use super::error::{AnalyticsError, AnalyticsResult};
use super::interpolation::{
    AkimaSplineInterpolator, InterpolationError, Interpolator, LinearInterpolator,
};

/// Returned for a zero or negative duration.
pub const DEGENERATE_DURATION_POWER: f64 = 200.0;

/// TTE-at-FTP assumed when the profile has none.
pub const DEFAULT_TTE_SECS: f64 = 2400.0;

/// Exponent of the power-law fallback.
const POWER_LAW_EXPONENT: f64 = -0.07;

/// A single point on the power duration curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdPoint {
    /// Maximum sustainable power as % FTP.
    pub power_percent: f64,
    /// Duration in seconds.
    pub time_seconds: f64,
}

impl PdPoint {
    pub fn new(power_percent: f64, time_seconds: f64) -> Self {
        Self {
            power_percent,
            time_seconds,
        }
    }

    fn is_valid(&self) -> bool {
        self.power_percent.is_finite() && self.time_seconds.is_finite() && self.time_seconds > 0.0
    }
}

/// Which interpolation strategy a profile evaluates with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveTier {
    PowerLaw,
    Linear,
    Spline,
}

/// Athlete profile for threshold sessions: FTP, TTE and the PD curve.
#[derive(Debug, Clone)]
pub struct ThresholdAthleteProfile {
    ftp: u32,
    tte_at_ftp_secs: Option<f64>,
    /// Valid points sorted by time, one per distinct time
    points: Vec<PdPoint>,
}

impl ThresholdAthleteProfile {
    /// Build a profile. Invalid points are dropped and duplicate times keep
    /// the highest power.
    pub fn new(
        ftp: u32,
        tte_at_ftp_secs: Option<f64>,
        points: impl IntoIterator<Item = PdPoint>,
    ) -> AnalyticsResult<Self> {
        if ftp == 0 {
            return Err(AnalyticsError::InvalidInput(
                "FTP must be greater than zero".to_string(),
            ));
        }

        let mut valid: Vec<PdPoint> = points.into_iter().filter(PdPoint::is_valid).collect();
        valid.sort_by(|a, b| a.time_seconds.total_cmp(&b.time_seconds));

        let mut deduped: Vec<PdPoint> = Vec::with_capacity(valid.len());
        for point in valid {
            match deduped.last_mut() {
                Some(last) if last.time_seconds == point.time_seconds => {
                    if point.power_percent > last.power_percent {
                        *last = point;
                    }
                }
                _ => deduped.push(point),
            }
        }

        Ok(Self {
            ftp,
            tte_at_ftp_secs,
            points: deduped,
        })
    }

    /// Functional Threshold Power in watts.
    pub fn ftp(&self) -> u32 {
        self.ftp
    }

    /// Time to exhaustion at FTP, if known.
    pub fn tte_at_ftp_secs(&self) -> Option<f64> {
        self.tte_at_ftp_secs
    }

    /// Valid, sorted curve points.
    pub fn points(&self) -> &[PdPoint] {
        &self.points
    }

    /// Strategy used by [`Self::power_at_duration`].
    pub fn tier(&self) -> CurveTier {
        match self.points.len() {
            0 | 1 => CurveTier::PowerLaw,
            n if n >= AkimaSplineInterpolator::MIN_POINTS => CurveTier::Spline,
            _ => CurveTier::Linear,
        }
    }

    /// Maximum sustainable power (% FTP) for a duration in seconds.
    pub fn power_at_duration(&self, duration_secs: f64) -> f64 {
        if duration_secs.is_nan() || duration_secs <= 0.0 {
            return DEGENERATE_DURATION_POWER;
        }

        if self.tier() == CurveTier::PowerLaw {
            let reference = match self.tte_at_ftp_secs {
                Some(tte) if tte > 0.0 => tte,
                _ => DEFAULT_TTE_SECS,
            };
            return 100.0 * (duration_secs / reference).powf(POWER_LAW_EXPONENT);
        }

        let log_target = duration_secs.ln();
        let (x, y) = self.log_space();

        match self.interpolate(log_target, &x, &y) {
            Ok(power) => power,
            // Cleaned points are sorted, unique and finite, so the
            // interpolators do not reject them; this arm is a safety net.
            Err(e) => {
                tracing::warn!("PD curve interpolation failed, using linear fallback: {}", e);
                manual_linear(log_target, &x, &y)
            }
        }
    }

    fn log_space(&self) -> (Vec<f64>, Vec<f64>) {
        self.points
            .iter()
            .map(|p| (p.time_seconds.ln(), p.power_percent))
            .unzip()
    }

    fn interpolate(&self, log_target: f64, x: &[f64], y: &[f64]) -> Result<f64, InterpolationError> {
        let spline = match self.tier() {
            CurveTier::Spline => AkimaSplineInterpolator.interpolate(x, y)?,
            _ => LinearInterpolator.interpolate(x, y)?,
        };

        if let Some(power) = extrapolate_outside(log_target, x, y) {
            return Ok(power);
        }
        spline.value(log_target)
    }
}

/// Line through (x1, y1) and (x2, y2) evaluated at `x`.
fn line_through(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if (x2 - x1).abs() < 1e-9 {
        return y1;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// Linear extension beyond the first or last point; `None` inside the range.
fn extrapolate_outside(t: f64, x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if t < x[0] {
        Some(line_through(t, x[0], y[0], x[1], y[1]))
    } else if t > x[n - 1] {
        Some(line_through(t, x[n - 2], y[n - 2], x[n - 1], y[n - 1]))
    } else {
        None
    }
}

/// Piecewise-linear evaluation without an interpolant. Needs at least 2 points.
fn manual_linear(t: f64, x: &[f64], y: &[f64]) -> f64 {
    if let Some(power) = extrapolate_outside(t, x, y) {
        return power;
    }

    for i in 1..x.len() {
        if x[i] >= t {
            return line_through(t, x[i - 1], y[i - 1], x[i], y[i]);
        }
    }
    y[y.len() - 1]
}
