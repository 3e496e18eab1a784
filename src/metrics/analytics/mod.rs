//! Athlete capacity models.
//!
//! This module provides the physiological models behind session planning:
//! - Power-duration curve over log time (threshold sessions)
//! - W' balance model (VO2max sessions)
//! - Interpolation primitives used by the curve

pub mod critical_power;
pub mod error;
pub mod interpolation;
pub mod pdc;

// Re-exports for convenience
pub use critical_power::{AthleteVo2maxProfile, WPrimeBalance, REST_POWER_FRACTION};
pub use error::{AnalyticsError, AnalyticsResult};
pub use interpolation::{
    AkimaSplineInterpolator, InterpolationError, Interpolator, LinearInterpolator,
    PolynomialSpline,
};
pub use pdc::{CurveTier, PdPoint, ThresholdAthleteProfile};
