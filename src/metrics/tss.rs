//! Training Stress Score estimation for planned intervals.
//!
//! TSS = duration_secs × intensity² / 3600 / 100, rounded per block.

use crate::workouts::types::{Interval, SingleInterval};

const SECONDS_PER_HOUR: f64 = 3600.0;
const TSS_SCALE: f64 = 100.0;

/// TSS for a constant-intensity block.
pub fn tss_for(intensity: i32, duration_secs: u64) -> u64 {
    let load = duration_secs as f64 * (intensity as f64).powi(2);
    (load / SECONDS_PER_HOUR / TSS_SCALE).round() as u64
}

fn tss_for_single(single: &SingleInterval) -> u64 {
    tss_for(single.target_intensity, single.duration as u64)
}

/// TSS for one top-level interval, saturating at `u64::MAX`.
///
/// Repeats round work and rest separately before multiplying; ramps use the
/// truncated midpoint intensity.
pub fn calculate_tss_for_interval(interval: &Interval) -> u64 {
    match interval {
        Interval::Single(single) => tss_for_single(single),
        Interval::Ramp(ramp) => tss_for(ramp.midpoint_intensity(), ramp.duration as u64),
        Interval::Repeat(repeat) => tss_for_single(&repeat.work)
            .saturating_add(tss_for_single(&repeat.rest))
            .saturating_mul(repeat.repeats as u64),
    }
}

/// Sum of interval TSS; 0 for an empty list.
pub fn calculate_tss_for_session(intervals: &[Interval]) -> u64 {
    intervals
        .iter()
        .map(calculate_tss_for_interval)
        .fold(0, u64::saturating_add)
}
