//! VO2max session search over a W' balance simulation.
//!
//! The score sets how much of W' should be left after the final effort:
//! target = W' × (1 - s/10). Every (repeats, work seconds, power factor)
//! cell is simulated; cells that drain below the target or leave under 30 s
//! of rest are rejected. The survivor with the lowest cost wins:
//!
//!   cost = |W'bal - target| / W' + 0.3 × |t - t_base| / t_base + 0.3 × |p - p_base| / p_base
//!
//! Ties keep the first cell in (repeats, work seconds, power) order, with
//! or without parallel evaluation.

use rayon::prelude::*;

use crate::metrics::analytics::{AnalyticsResult, AthleteVo2maxProfile, WPrimeBalance};

use super::types::{Session, SessionCalculator, Vo2maxIntervalType, Vo2maxSessionParameters};

/// Minimum rest between efforts in seconds.
pub const MIN_REST_SECS: u32 = 30;
/// Power factor grid resolution.
pub const POWER_STEP: f64 = 0.01;

const TIME_WEIGHT: f64 = 0.3;
const POWER_WEIGHT: f64 = 0.3;

/// Search bounds for an interval family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalConfig {
    pub t_min: u32,
    pub t_max: u32,
    pub t_base: u32,
    pub p_min: f64,
    pub p_max: f64,
    pub p_base: f64,
}

impl IntervalConfig {
    pub fn for_type(interval_type: Vo2maxIntervalType) -> Self {
        match interval_type {
            Vo2maxIntervalType::Short => Self {
                t_min: 30,
                t_max: 60,
                t_base: 40,
                p_min: 1.01,
                p_max: 1.25,
                p_base: 1.20,
            },
            Vo2maxIntervalType::Classic => Self {
                t_min: 120,
                t_max: 300,
                t_base: 180,
                p_min: 1.01,
                p_max: 1.15,
                p_base: 1.12,
            },
            Vo2maxIntervalType::Long => Self {
                t_min: 300,
                t_max: 600,
                t_base: 480,
                p_min: 1.01,
                p_max: 1.08,
                p_base: 1.06,
            },
        }
    }

    /// Inclusive range of repeat counts to search for a session length.
    pub fn repeat_range(&self, total_secs: u32) -> std::ops::RangeInclusive<u32> {
        let ideal = total_secs / (self.t_base * 2);
        let min = 2.max(ideal / 2);
        let max = (min + 1).max(ideal * 2);
        min..=max
    }

    /// Power factors from `p_min` to `p_max` inclusive.
    ///
    /// Integer steps keep `p_max` on the grid. A float-accumulating loop
    /// (`p += 0.01` while `p <= p_max`) drifts past it and never tries 1.25
    /// for short or 1.15 for classic efforts; that drift is not reproduced.
    pub fn power_factors(&self) -> impl Iterator<Item = f64> + '_ {
        let steps = ((self.p_max - self.p_min) / POWER_STEP).round() as u32;
        (0..=steps).map(move |k| self.p_min + k as f64 * POWER_STEP)
    }
}

/// An accepted grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    repeats: u32,
    work_secs: u32,
    rest_secs: u32,
    power_watts: f64,
    cost: f64,
}

/// Everything a grid cell needs besides its coordinates.
struct SearchContext {
    config: IntervalConfig,
    model: WPrimeBalance,
    ftp: f64,
    total_secs: u32,
    target_balance: f64,
}

impl SearchContext {
    /// Best cell for one repeat count, scanning work seconds then power.
    fn best_for_repeats(&self, repeats: u32) -> Option<Candidate> {
        if repeats <= 1 {
            return None;
        }

        let mut best: Option<Candidate> = None;
        for work_secs in self.config.t_min..=self.config.t_max {
            if repeats * work_secs >= self.total_secs {
                break;
            }

            let rest_secs = (self.total_secs - repeats * work_secs) / (repeats - 1);
            if rest_secs < MIN_REST_SECS {
                continue;
            }

            for factor in self.config.power_factors() {
                let power_watts = self.ftp * factor;
                let balance =
                    self.model
                        .simulate(repeats, work_secs as f64, power_watts, rest_secs as f64);
                if balance < self.target_balance {
                    continue;
                }

                let cost = self.cost(balance, work_secs, factor);
                if best.map_or(true, |b| cost < b.cost) {
                    best = Some(Candidate {
                        repeats,
                        work_secs,
                        rest_secs,
                        power_watts,
                        cost,
                    });
                }
            }
        }
        best
    }

    fn cost(&self, balance: f64, work_secs: u32, factor: f64) -> f64 {
        let t_base = self.config.t_base as f64;
        let balance_error = (balance - self.target_balance).abs() / self.model.w_prime;
        let time_deviation = (work_secs as f64 - t_base).abs() / t_base;
        let power_deviation = (factor - self.config.p_base).abs() / self.config.p_base;
        balance_error + TIME_WEIGHT * time_deviation + POWER_WEIGHT * power_deviation
    }
}

/// Keep the first strictly-lowest cost, in repeat order.
fn pick_best(per_repeats: impl IntoIterator<Item = Option<Candidate>>) -> Option<Candidate> {
    per_repeats
        .into_iter()
        .flatten()
        .fold(None, |best: Option<Candidate>, candidate| match best {
            Some(b) if b.cost <= candidate.cost => Some(b),
            _ => Some(candidate),
        })
}

/// Calculator for VO2max interval sessions.
#[derive(Debug, Clone, Copy)]
pub struct Vo2maxSessionCalculator {
    /// Evaluate repeat counts on the rayon pool
    parallel: bool,
}

impl Vo2maxSessionCalculator {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Toggle parallel evaluation; results are identical either way.
    pub fn with_parallel(parallel: bool) -> Self {
        Self { parallel }
    }
}

impl Default for Vo2maxSessionCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCalculator for Vo2maxSessionCalculator {
    type Profile = AthleteVo2maxProfile;
    type Parameters = Vo2maxSessionParameters;
    type Output = Option<Session>;

    /// `Ok(None)` when no structure fits the duration and target.
    fn calculate(
        &self,
        profile: &AthleteVo2maxProfile,
        parameters: &Vo2maxSessionParameters,
    ) -> AnalyticsResult<Option<Session>> {
        parameters.validate()?;

        let model = profile.balance_model();
        let context = SearchContext {
            config: IntervalConfig::for_type(parameters.interval_type),
            model,
            ftp: profile.ftp() as f64,
            total_secs: parameters.duration_minutes * 60,
            target_balance: model.w_prime * (1.0 - parameters.score / 10.0),
        };

        let repeat_range = context.config.repeat_range(context.total_secs);
        tracing::debug!(
            "VO2max search: type={:?} repeats={:?} W'={:.0}J target={:.0}J tau={:.0}s",
            parameters.interval_type,
            repeat_range,
            model.w_prime,
            context.target_balance,
            model.tau
        );

        let best = if self.parallel {
            let per_repeats: Vec<Option<Candidate>> = repeat_range
                .into_par_iter()
                .map(|n| context.best_for_repeats(n))
                .collect();
            pick_best(per_repeats)
        } else {
            pick_best(repeat_range.map(|n| context.best_for_repeats(n)))
        };

        let Some(best) = best else {
            tracing::info!(
                "No feasible {:?} VO2max session in {} minutes",
                parameters.interval_type,
                parameters.duration_minutes
            );
            return Ok(None);
        };

        tracing::debug!(
            "VO2max best: {}x{}s @ {:.0}W rest {}s cost={:.4}",
            best.repeats,
            best.work_secs,
            best.power_watts,
            best.rest_secs,
            best.cost
        );

        Ok(Some(Session {
            work_intensity: best.power_watts / context.ftp,
            rest_intensity: profile.rest_power() / context.ftp,
            work_duration: best.work_secs,
            rest_duration: best.rest_secs,
            total_duration: context.total_secs,
            repeats: best.repeats,
            score: parameters.score,
            total_time_in_zone: None,
        }))
    }
}
