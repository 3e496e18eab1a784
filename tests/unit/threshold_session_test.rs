//! Unit tests for threshold and sweet-spot session derivation.

use intervalforge::calculate_threshold_session;
use intervalforge::metrics::analytics::{AnalyticsError, PdPoint, ThresholdAthleteProfile};
use intervalforge::sessions::{ThresholdIntervalType, ThresholdSessionParameters};

fn reference_athlete() -> ThresholdAthleteProfile {
    let curve = [
        (85.0, 4500.0),
        (86.0, 3420.0),
        (87.0, 3180.0),
        (88.0, 2940.0),
        (89.0, 2880.0),
        (90.0, 2640.0),
        (91.0, 2520.0),
        (92.0, 2400.0),
        (93.0, 1980.0),
        (94.0, 1820.0),
        (95.0, 1800.0),
        (96.0, 1740.0),
        (97.0, 1560.0),
        (98.0, 1500.0),
        (99.0, 1440.0),
        (100.0, 1380.0),
        (101.0, 1320.0),
        (102.0, 1260.0),
        (103.0, 1200.0),
        (104.0, 1140.0),
        (105.0, 960.0),
    ];
    ThresholdAthleteProfile::new(
        266,
        Some(2400.0),
        curve.iter().map(|(power, time)| PdPoint::new(*power, *time)),
    )
    .unwrap()
}

fn threshold(score: f64, minutes: u32) -> ThresholdSessionParameters {
    ThresholdSessionParameters::new(score, minutes, ThresholdIntervalType::Threshold)
}

#[test]
fn test_all_out_forty_minutes() {
    let session = calculate_threshold_session(&reference_athlete(), &threshold(10.0, 40)).unwrap();

    assert_eq!(session.total_duration, 2400);
    assert_eq!(session.score, 10.0);
    assert_eq!(session.repeats, 2);
    assert!(session.work_intensity >= 0.95);
}

#[test]
fn test_score_8_9() {
    let session = calculate_threshold_session(&reference_athlete(), &threshold(8.9, 33)).unwrap();

    assert_eq!(session.total_duration, 33 * 60);
    assert_eq!(session.score, 8.9);
    assert_eq!(session.repeats, 2);
    assert!(session.work_intensity > 0.95);
}

#[test]
fn test_all_out_short_sessions_exceed_ftp() {
    for minutes in [20, 25] {
        let session =
            calculate_threshold_session(&reference_athlete(), &threshold(10.0, minutes)).unwrap();
        assert_eq!(session.total_duration, minutes * 60);
        assert_eq!(session.repeats, 2);
        assert!(
            session.work_intensity > 1.0,
            "{} min session at {:.3}",
            minutes,
            session.work_intensity
        );
    }
}

#[test]
fn test_score_6_twenty_five_minutes() {
    let session = calculate_threshold_session(&reference_athlete(), &threshold(6.0, 25)).unwrap();

    assert_eq!(session.total_duration, 1500);
    assert_eq!(session.repeats, 3);
    assert!(session.work_intensity >= 0.95);
}

#[test]
fn test_sweet_spot_is_capped() {
    let params = ThresholdSessionParameters::new(5.0, 60, ThresholdIntervalType::SweetSpot);
    let session = calculate_threshold_session(&reference_athlete(), &params).unwrap();

    assert_eq!(session.total_duration, 3600);
    assert!(session.work_intensity <= 0.95);
    assert!(session.work_intensity >= 0.85);
}

#[test]
fn test_short_session_high_intensity() {
    let session = calculate_threshold_session(&reference_athlete(), &threshold(9.0, 20)).unwrap();
    assert!(session.work_intensity > 1.03);
}

#[test]
fn test_low_score_many_repeats_long_rest() {
    let session = calculate_threshold_session(&reference_athlete(), &threshold(2.0, 60)).unwrap();

    assert!(session.repeats >= 6);
    assert!(session.rest_duration as f64 > session.work_duration as f64 * 0.8);
    assert_eq!(session.rest_intensity, 0.5);
}

#[test]
fn test_time_in_zone_is_total_work() {
    let session = calculate_threshold_session(&reference_athlete(), &threshold(7.0, 60)).unwrap();
    let in_zone = session.total_time_in_zone.unwrap();

    let ratio = 1.0 - 6.0 * (0.75 / 9.0);
    assert!((in_zone - 3600.0 / (1.0 + ratio)).abs() < 1e-9);
    assert!(
        (in_zone / session.repeats as f64 - session.work_duration as f64).abs() <= 0.5
    );
}

#[test]
fn test_invalid_parameters() {
    let athlete = reference_athlete();
    for params in [threshold(0.5, 60), threshold(10.5, 60), threshold(5.0, 9), threshold(5.0, 121)] {
        assert!(matches!(
            calculate_threshold_session(&athlete, &params),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_profile_without_curve() {
    let athlete = ThresholdAthleteProfile::new(250, Some(3000.0), Vec::new()).unwrap();
    let session = calculate_threshold_session(&athlete, &threshold(8.0, 60)).unwrap();

    assert_eq!(session.repeats, 3);
    assert!((0.95..=1.15).contains(&session.work_intensity));
}
