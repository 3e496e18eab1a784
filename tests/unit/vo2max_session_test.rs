//! Unit tests for the VO2max session search.

use intervalforge::calculate_vo2max_session;
use intervalforge::metrics::analytics::{AnalyticsError, AthleteVo2maxProfile};
use intervalforge::sessions::{
    SessionCalculator, Vo2maxIntervalType, Vo2maxSessionCalculator, Vo2maxSessionParameters,
};

fn reference_athlete() -> AthleteVo2maxProfile {
    AthleteVo2maxProfile::new(266, 5.0, 21.0).unwrap()
}

fn params(score: f64, minutes: u32, kind: Vo2maxIntervalType) -> Vo2maxSessionParameters {
    Vo2maxSessionParameters::new(score, minutes, kind)
}

#[test]
fn test_classic_thirty_minutes() {
    let session = calculate_vo2max_session(
        &reference_athlete(),
        &params(8.0, 30, Vo2maxIntervalType::Classic),
    )
    .unwrap()
    .expect("feasible session");

    assert_eq!(session.total_duration, 1800);
    assert_eq!(session.score, 8.0);
    assert!(session.repeats >= 2);
    assert!(session.work_intensity > 1.0);
    assert!((120..=300).contains(&session.work_duration));
    assert!((session.rest_intensity - 0.4).abs() < 1e-9);
}

#[test]
fn test_short_intervals_stay_in_range() {
    let session = calculate_vo2max_session(
        &reference_athlete(),
        &params(7.0, 20, Vo2maxIntervalType::Short),
    )
    .unwrap()
    .expect("feasible session");

    assert_eq!(session.total_duration, 1200);
    assert!((30..=60).contains(&session.work_duration));
    assert!(session.rest_duration >= 30);
}

#[test]
fn test_long_intervals_stay_in_range() {
    let session = calculate_vo2max_session(
        &reference_athlete(),
        &params(6.0, 40, Vo2maxIntervalType::Long),
    )
    .unwrap()
    .expect("feasible session");

    assert_eq!(session.total_duration, 2400);
    assert!(session.work_duration >= 300);
    assert!(session.work_duration <= 600);
}

#[test]
fn test_extreme_scores_are_feasible() {
    let athlete = reference_athlete();
    for (score, minutes) in [(10.0, 30), (1.0, 25)] {
        let session =
            calculate_vo2max_session(&athlete, &params(score, minutes, Vo2maxIntervalType::Classic))
                .unwrap()
                .expect("feasible session");
        assert_eq!(session.score, score);
    }
}

#[test]
fn test_long_in_ten_minutes_is_infeasible() {
    let result = calculate_vo2max_session(
        &reference_athlete(),
        &params(8.0, 10, Vo2maxIntervalType::Long),
    )
    .unwrap();
    assert!(result.is_none());
}

#[test]
fn test_strong_athlete() {
    let athlete = AthleteVo2maxProfile::new(400, 4.0, 15.0).unwrap();
    let session = calculate_vo2max_session(&athlete, &params(8.5, 35, Vo2maxIntervalType::Classic))
        .unwrap()
        .expect("feasible session");
    assert!(session.work_intensity > 1.0);
}

#[test]
fn test_low_capacity_athlete() {
    let athlete = AthleteVo2maxProfile::new(200, 1.0, 5.0).unwrap();
    let session = calculate_vo2max_session(&athlete, &params(5.0, 20, Vo2maxIntervalType::Short))
        .unwrap();
    assert!(session.is_some());
}

#[test]
fn test_final_balance_respects_target() {
    let athlete = reference_athlete();
    for score in [3.0, 6.0, 9.5] {
        let session =
            calculate_vo2max_session(&athlete, &params(score, 45, Vo2maxIntervalType::Classic))
                .unwrap()
                .expect("feasible session");
        let model = athlete.balance_model();
        let balance = model.simulate(
            session.repeats,
            session.work_duration as f64,
            session.work_intensity * athlete.ftp() as f64,
            session.rest_duration as f64,
        );
        assert!(balance >= model.w_prime * (1.0 - score / 10.0) - 1e-6);
    }
}

#[test]
fn test_search_is_deterministic() {
    let athlete = reference_athlete();
    let request = params(7.5, 50, Vo2maxIntervalType::Short);

    let sequential = Vo2maxSessionCalculator::with_parallel(false)
        .calculate(&athlete, &request)
        .unwrap();
    for _ in 0..3 {
        let parallel = Vo2maxSessionCalculator::with_parallel(true)
            .calculate(&athlete, &request)
            .unwrap();
        assert_eq!(parallel, sequential);
    }
}

#[test]
fn test_invalid_parameters() {
    let athlete = reference_athlete();
    for request in [
        params(11.0, 30, Vo2maxIntervalType::Classic),
        params(0.0, 30, Vo2maxIntervalType::Classic),
        params(5.0, 61, Vo2maxIntervalType::Short),
        params(5.0, 9, Vo2maxIntervalType::Long),
    ] {
        assert!(matches!(
            calculate_vo2max_session(&athlete, &request),
            Err(AnalyticsError::InvalidInput(_))
        ));
    }
}
