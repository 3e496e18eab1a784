//! Integration tests for the session planning pipeline.
//!
//! Tests the end-to-end flow:
//! 1. Build athlete profiles from settings
//! 2. Derive threshold and VO2max sessions
//! 3. Render them as workouts
//! 4. Persist and reload the interval column
//! 5. Summarise the reloaded workout

use intervalforge::metrics::analytics::PdPoint;
use intervalforge::metrics::power_utils::calculate_distribution;
use intervalforge::metrics::PowerZone;
use intervalforge::sessions::{
    ThresholdIntervalType, ThresholdSessionParameters, Vo2maxIntervalType,
    Vo2maxSessionParameters,
};
use intervalforge::storage::AthleteSettings;
use intervalforge::workouts::{decode_intervals, encode_intervals, Interval, SingleInterval};
use intervalforge::{
    calculate_metadata, calculate_threshold_session, calculate_tss_for_session,
    calculate_vo2max_session, classify_workout, WorkoutType,
};

fn athlete() -> AthleteSettings {
    AthleteSettings {
        ftp: 266,
        tte_at_ftp_secs: Some(2400.0),
        tte_120_min: 5.0,
        tte_106_min: 21.0,
        pd_points: vec![
            PdPoint::new(105.0, 960.0),
            PdPoint::new(103.0, 1200.0),
            PdPoint::new(100.0, 1380.0),
            PdPoint::new(97.0, 1560.0),
            PdPoint::new(95.0, 1800.0),
            PdPoint::new(92.0, 2400.0),
            PdPoint::new(88.0, 2940.0),
            PdPoint::new(85.0, 4500.0),
        ],
    }
}

#[test]
fn test_threshold_session_to_metadata() {
    let settings = athlete();
    let profile = settings.threshold_profile().unwrap();
    let params = ThresholdSessionParameters::new(8.0, 60, ThresholdIntervalType::Threshold);

    let session = calculate_threshold_session(&profile, &params).unwrap();
    let mut workout = session.to_workout("Threshold 3x", Some(90));

    let metadata = workout.metadata(false).clone();
    assert_eq!(metadata.workout_id, Some(workout.id));
    assert_eq!(metadata.duration_seconds, workout.total_duration_seconds());
    assert!(metadata.estimated_tss > 0);
    assert!(metadata.intensity_factor > 0.5);
    assert_eq!(metadata.training_type, WorkoutType::Threshold);
}

#[test]
fn test_vo2max_session_to_metadata() {
    let profile = athlete().vo2max_profile().unwrap();
    let params = Vo2maxSessionParameters::new(8.0, 30, Vo2maxIntervalType::Classic);

    let session = calculate_vo2max_session(&profile, &params)
        .unwrap()
        .expect("feasible session");
    let interval = session.to_interval(None);

    let distribution = calculate_distribution(std::slice::from_ref(&interval));
    assert_eq!(
        distribution.seconds_in(PowerZone::from_intensity(
            (session.work_intensity * 100.0).round() as i32
        )),
        u64::from(session.work_duration * session.repeats)
    );
    assert_eq!(
        distribution.seconds_in(PowerZone::Z1ActiveRecovery),
        u64::from(session.rest_duration * session.repeats)
    );

    let metadata = calculate_metadata(std::slice::from_ref(&interval));
    assert_eq!(metadata.average_intensity, interval.average_intensity());
    assert!(metadata.estimated_tss > 0);
}

#[test]
fn test_persisted_session_reproduces_metadata() {
    let profile = athlete().threshold_profile().unwrap();
    let params = ThresholdSessionParameters::new(5.0, 90, ThresholdIntervalType::SweetSpot);
    let session = calculate_threshold_session(&profile, &params).unwrap();

    let intervals = vec![
        Interval::Single(SingleInterval::new(50, 600)),
        session.to_interval(Some(88)),
        Interval::Single(SingleInterval::new(45, 300)),
    ];

    let column = encode_intervals(&intervals);
    let reloaded = decode_intervals(&column);
    assert_eq!(reloaded, intervals);

    assert_eq!(calculate_metadata(&reloaded), calculate_metadata(&intervals));
    assert_eq!(
        calculate_tss_for_session(&reloaded),
        calculate_metadata(&intervals).estimated_tss
    );
}

#[test]
fn test_empty_workout_metadata_is_zero() {
    let metadata = calculate_metadata(&decode_intervals(""));
    assert_eq!(metadata.estimated_tss, 0);
    assert_eq!(metadata.duration_seconds, 0);
    assert_eq!(metadata.difficulty, 0.0);
    assert_eq!(metadata.intensity_factor, 0.0);
    assert_eq!(metadata.training_type, WorkoutType::Recovery);
    assert_eq!(classify_workout(&[]), WorkoutType::Recovery);
}

#[test]
fn test_metadata_serializes_camel_case() {
    let intervals = [Interval::Single(SingleInterval::new(100, 3600))];
    let json = serde_json::to_value(calculate_metadata(&intervals)).unwrap();

    assert_eq!(json["estimatedTss"], 100);
    assert_eq!(json["trainingType"], "THRESHOLD");
    assert_eq!(json["averageIntensity"], 100);
    assert_eq!(json["durationSeconds"], 3600);
    assert!(json.get("workoutId").is_none());
}
