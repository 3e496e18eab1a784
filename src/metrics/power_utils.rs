//! Intensity metrics over interval lists.
//!
//! All functions are total: an empty interval list yields zero-valued results.

use crate::metrics::smoothing::NormalizedIntensityCalculator;
use crate::metrics::zones::{PowerZone, ZoneDistribution};
use crate::workouts::types::{total_duration_seconds, Interval, SingleInterval};

/// Zone for an intensity in % FTP.
pub fn zone_of(intensity: i32) -> PowerZone {
    PowerZone::from_intensity(intensity)
}

/// Seconds spent in each zone.
///
/// Repeat work and rest halves are classified separately and multiplied by
/// the repeat count. A ramp is attributed wholly to the zone of its starting
/// intensity.
pub fn calculate_distribution(intervals: &[Interval]) -> ZoneDistribution {
    let mut distribution = ZoneDistribution::new();

    for interval in intervals {
        match interval {
            Interval::Single(single) => {
                distribution.add(zone_of(single.target_intensity), single.duration as u64);
            }
            Interval::Ramp(ramp) => {
                distribution.add(zone_of(ramp.target_intensity_from), ramp.duration as u64);
            }
            Interval::Repeat(repeat) => {
                let repeats = repeat.repeats as u64;
                distribution.add(
                    zone_of(repeat.work.target_intensity),
                    repeat.work.duration as u64 * repeats,
                );
                distribution.add(
                    zone_of(repeat.rest.target_intensity),
                    repeat.rest.duration as u64 * repeats,
                );
            }
        }
    }

    distribution
}

/// Unweighted mean of each interval's own average intensity (truncating).
pub fn calculate_average_intensity(intervals: &[Interval]) -> i32 {
    if intervals.is_empty() {
        return 0;
    }

    let sum: i64 = intervals
        .iter()
        .map(|interval| interval.average_intensity() as i64)
        .sum();
    (sum / intervals.len() as i64) as i32
}

/// Longest stretch of a workout expanded to per-second samples; later
/// seconds are ignored by the series and normalized intensity.
pub const MAX_SERIES_SECS: usize = 7 * 24 * 3600;

fn single_samples(single: &SingleInterval) -> impl Iterator<Item = i32> {
    std::iter::repeat(single.target_intensity).take(single.duration as usize)
}

fn interval_samples(interval: &Interval) -> Box<dyn Iterator<Item = i32> + '_> {
    match interval {
        Interval::Single(single) => Box::new(single_samples(single)),
        Interval::Ramp(ramp) => Box::new((0..ramp.duration).map(move |i| ramp.intensity_at(i))),
        Interval::Repeat(repeat) => Box::new((0..repeat.repeats).flat_map(move |_| {
            single_samples(&repeat.work).chain(single_samples(&repeat.rest))
        })),
    }
}

/// Lazily expanded samples, capped at [`MAX_SERIES_SECS`].
fn samples(intervals: &[Interval]) -> impl Iterator<Item = i32> + '_ {
    intervals
        .iter()
        .flat_map(interval_samples)
        .take(MAX_SERIES_SECS)
}

/// Expand intervals into one intensity sample per second, up to
/// [`MAX_SERIES_SECS`] samples.
pub fn expand_to_series(intervals: &[Interval]) -> Vec<i32> {
    let total = total_duration_seconds(intervals).min(MAX_SERIES_SECS as u64) as usize;
    let mut series = Vec::with_capacity(total);
    series.extend(samples(intervals));
    series
}

/// Normalized intensity in % FTP; 0 when the workout is shorter than the smoothing window.
pub fn calculate_normalized_intensity(intervals: &[Interval]) -> i32 {
    let mut calculator = NormalizedIntensityCalculator::new();
    for intensity in samples(intervals) {
        calculator.add(intensity);
    }
    calculator.normalized_intensity().unwrap_or(0)
}

/// Intensity factor: normalized intensity as a fraction of FTP.
pub fn calculate_intensity_factor(intervals: &[Interval]) -> f64 {
    intensity_factor_from(calculate_normalized_intensity(intervals))
}

pub(crate) fn intensity_factor_from(normalized_intensity: i32) -> f64 {
    if normalized_intensity == 0 {
        return 0.0;
    }
    normalized_intensity as f64 / 100.0
}

/// Difficulty rating: `max(IF * 10, 10)`; 0 for an empty workout.
///
/// The floor at 10 is kept as-is for compatibility with stored metadata,
/// even though it flattens every IF at or below 1.0 to the same score.
pub fn calculate_difficulty(intervals: &[Interval]) -> f64 {
    if intervals.is_empty() {
        return 0.0;
    }
    difficulty_from(calculate_intensity_factor(intervals))
}

pub(crate) fn difficulty_from(intensity_factor: f64) -> f64 {
    (intensity_factor * 10.0).max(10.0)
}
