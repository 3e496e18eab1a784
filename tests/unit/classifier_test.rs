//! Unit tests for workout type classification.

use intervalforge::workouts::{Interval, RampInterval, RepeatInterval, SingleInterval};
use intervalforge::{classify_workout, WorkoutType};

fn single(intensity: i32, duration: u32) -> Interval {
    Interval::Single(SingleInterval::new(intensity, duration))
}

#[test]
fn test_empty_workout() {
    assert_eq!(classify_workout(&[]), WorkoutType::Recovery);
    assert_eq!(classify_workout(&[single(100, 0)]), WorkoutType::Recovery);
}

#[test]
fn test_long_endurance_with_a_sprint() {
    let intervals = [single(65, 7200), single(160, 30)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Endurance);
}

#[test]
fn test_sprint_share_over_five_percent() {
    let intervals = [single(65, 3360), single(160, 240)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Neuromuscular);
}

#[test]
fn test_threshold_block() {
    let intervals = [single(100, 1200), single(50, 2400)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Threshold);
}

#[test]
fn test_small_threshold_share_falls_to_recovery() {
    let intervals = [single(100, 300), single(50, 3300)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Recovery);
}

#[test]
fn test_vo2max_block() {
    let intervals = [single(120, 1000), single(50, 1000)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Vo2max);
}

#[test]
fn test_recovery_spin() {
    let intervals = [single(50, 1000), single(45, 1000), single(100, 10)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Recovery);
}

#[test]
fn test_cumulative_share_absorbs_lower_zones() {
    // Z4 holds a third of the time; the cascade stops there.
    let intervals = [single(50, 1000), single(75, 1000), single(105, 1000)];
    assert_eq!(classify_workout(&intervals), WorkoutType::Threshold);
}

#[test]
fn test_higher_zones_count_toward_lower_thresholds() {
    // Z6 7% misses 8%, Z5 adds nothing, Z4 10% brings the running share to 17%,
    // Z3 25% brings it to 42%.
    let intervals = [
        single(130, 70),
        single(100, 100),
        single(80, 250),
        single(40, 580),
    ];
    assert_eq!(classify_workout(&intervals), WorkoutType::Tempo);
}

#[test]
fn test_repeat_and_ramp_contribute() {
    let intervals = [
        Interval::Ramp(RampInterval::new(40, 70, 600)),
        Interval::Repeat(RepeatInterval::new(
            SingleInterval::new(125, 60),
            SingleInterval::new(50, 120),
            8,
        )),
        single(50, 600),
    ];
    // 480 s of Z6 out of 2640 s
    assert_eq!(classify_workout(&intervals), WorkoutType::Anaerobic);
}

#[test]
fn test_serialized_names() {
    assert_eq!(serde_json::to_string(&WorkoutType::Vo2max).unwrap(), "\"VO2MAX\"");
    assert_eq!(
        serde_json::to_string(&WorkoutType::Neuromuscular).unwrap(),
        "\"NEUROMUSCULAR\""
    );
}
