//! Unit tests for the interval model and workout metadata caching.

use intervalforge::calculate_metadata;
use intervalforge::workouts::{
    Interval, RampInterval, RepeatInterval, SingleInterval, WorkoutModel,
};

fn repeat(work: (i32, u32), rest: (i32, u32), repeats: u32) -> Interval {
    Interval::Repeat(RepeatInterval::new(
        SingleInterval::new(work.0, work.1),
        SingleInterval::new(rest.0, rest.1),
        repeats,
    ))
}

#[test]
fn test_single_duration_and_intensity() {
    let interval = Interval::Single(SingleInterval::new(88, 420));
    assert_eq!(interval.total_duration_seconds(), 420);
    assert_eq!(interval.average_intensity(), 88);
    assert_eq!(interval.type_name(), "SINGLE");
}

#[test]
fn test_ramp_midpoint_truncates() {
    let interval = Interval::Ramp(RampInterval::new(45, 70, 600));
    assert_eq!(interval.total_duration_seconds(), 600);
    // (45 + 70) / 2 = 57.5
    assert_eq!(interval.average_intensity(), 57);
}

#[test]
fn test_ramp_per_second_samples() {
    let ramp = RampInterval::new(40, 60, 10);
    assert_eq!(ramp.intensity_at(0), 40);
    assert_eq!(ramp.intensity_at(5), 50);
    assert_eq!(ramp.intensity_at(9), 58);

    let down = RampInterval::new(60, 40, 3);
    // 60 + (-20 * 1) / 3 truncates toward zero
    assert_eq!(down.intensity_at(1), 54);
}

#[test]
fn test_repeat_totals() {
    let interval = repeat((120, 180), (40, 120), 5);
    assert_eq!(interval.total_duration_seconds(), 1500);
    // (120*180 + 40*120) / 300 = 88
    assert_eq!(interval.average_intensity(), 88);
}

#[test]
fn test_repeat_with_zero_repeats_is_empty() {
    let interval = repeat((120, 180), (40, 120), 0);
    assert_eq!(interval.total_duration_seconds(), 0);
}

#[test]
fn test_repeat_with_empty_halves() {
    let interval = repeat((120, 0), (40, 0), 4);
    assert_eq!(interval.total_duration_seconds(), 0);
    assert_eq!(interval.average_intensity(), 0);
}

#[test]
fn test_workout_validity() {
    assert!(!WorkoutModel::new("Empty", Vec::new()).is_valid());

    let workout = WorkoutModel::new(
        "Sweet spot",
        vec![
            Interval::Single(SingleInterval::new(55, 600)),
            repeat((90, 720), (50, 240), 3),
        ],
    );
    assert!(workout.is_valid());
    assert_eq!(workout.total_duration_seconds(), 600 + 960 * 3);
}

#[test]
fn test_metadata_is_cached_until_forced() {
    let mut workout = WorkoutModel::new(
        "Endurance",
        vec![Interval::Single(SingleInterval::new(65, 3600))],
    );
    let first = workout.metadata(false).clone();
    assert_eq!(first.workout_id, Some(workout.id));
    assert_eq!(first.duration_seconds, 3600);

    // Changes are not picked up until a recalculation is forced.
    workout.intervals.push(Interval::Single(SingleInterval::new(100, 1200)));
    assert_eq!(workout.metadata(false), &first);

    let refreshed = workout.recalculate_metadata().clone();
    assert_eq!(refreshed.duration_seconds, 4800);
    assert!(refreshed.estimated_tss > first.estimated_tss);
}

#[test]
fn test_metadata_is_idempotent() {
    let intervals = vec![
        Interval::Ramp(RampInterval::new(40, 75, 600)),
        repeat((115, 240), (45, 180), 5),
        Interval::Single(SingleInterval::new(50, 300)),
    ];
    let a = calculate_metadata(&intervals);
    let b = calculate_metadata(&intervals);
    assert_eq!(a, b);
    assert_eq!(a.difficulty.to_bits(), b.difficulty.to_bits());
    assert_eq!(a.intensity_factor.to_bits(), b.intensity_factor.to_bits());
}
