//! Interval session synthesis from athlete profiles.

pub mod threshold;
pub mod types;
pub mod vo2max;

pub use threshold::ThresholdSessionCalculator;
pub use types::{
    Session, SessionCalculator, ThresholdIntervalType, ThresholdSessionParameters,
    Vo2maxIntervalType, Vo2maxSessionParameters,
};
pub use vo2max::{IntervalConfig, Vo2maxSessionCalculator};
