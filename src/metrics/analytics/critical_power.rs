//! W' balance model for VO2max session planning.
//!
//! CP is taken as FTP. W' (anaerobic work capacity, joules) is estimated
//! from time-to-exhaustion tests at 120% and 106% FTP:
//!   W' = max(0.20 × FTP × TTE120, 0.06 × FTP × TTE106)
//!
//! During work above CP the balance drains linearly; during rest it
//! recovers exponentially (Skiba 2012):
//!   W'bal(t) = W' - (W' - W'bal_start) × e^(-t/τ)
//!   τ = 546 × e^(-0.01 × (CP - P_rest)) + 316

use super::error::{AnalyticsError, AnalyticsResult};

/// Rest power used between VO2max efforts, as a fraction of FTP.
pub const REST_POWER_FRACTION: f64 = 0.4;

/// Athlete profile for VO2max sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AthleteVo2maxProfile {
    /// Functional Threshold Power in watts.
    ftp: u32,
    /// Time to exhaustion at 120% FTP in minutes.
    tte_120_min: f64,
    /// Time to exhaustion at 106% FTP in minutes.
    tte_106_min: f64,
}

impl AthleteVo2maxProfile {
    /// Build a profile; at least one TTE value must be positive.
    pub fn new(ftp: u32, tte_120_min: f64, tte_106_min: f64) -> AnalyticsResult<Self> {
        if ftp == 0 {
            return Err(AnalyticsError::InvalidInput(
                "FTP must be greater than zero".to_string(),
            ));
        }
        for (label, value) in [("120%", tte_120_min), ("106%", tte_106_min)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnalyticsError::InvalidInput(format!(
                    "TTE at {} FTP must be a non-negative number of minutes",
                    label
                )));
            }
        }
        if tte_120_min == 0.0 && tte_106_min == 0.0 {
            return Err(AnalyticsError::InsufficientData(
                "TTE at 120% or 106% FTP is required to estimate W'".to_string(),
            ));
        }

        Ok(Self {
            ftp,
            tte_120_min,
            tte_106_min,
        })
    }

    /// Functional Threshold Power in watts.
    pub fn ftp(&self) -> u32 {
        self.ftp
    }

    /// W' in joules: the larger of the two TTE-based estimates.
    pub fn w_prime(&self) -> f64 {
        let ftp = self.ftp as f64;
        let from_120 = (ftp * 1.20 - ftp) * self.tte_120_min * 60.0;
        let from_106 = (ftp * 1.06 - ftp) * self.tte_106_min * 60.0;
        from_120.max(from_106)
    }

    /// Recovery time constant τ (seconds) for a given rest power.
    pub fn tau(&self, rest_power_watts: f64) -> f64 {
        546.0 * (-0.01 * (self.ftp as f64 - rest_power_watts)).exp() + 316.0
    }

    /// Rest power in watts.
    pub fn rest_power(&self) -> f64 {
        self.ftp as f64 * REST_POWER_FRACTION
    }

    /// Balance model at the standard rest power.
    pub fn balance_model(&self) -> WPrimeBalance {
        WPrimeBalance {
            w_prime: self.w_prime(),
            cp: self.ftp as f64,
            tau: self.tau(self.rest_power()),
        }
    }
}

/// W' balance simulator for repeated work/rest blocks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WPrimeBalance {
    /// Full W' in joules.
    pub w_prime: f64,
    /// Critical power in watts.
    pub cp: f64,
    /// Recovery time constant in seconds.
    pub tau: f64,
}

impl WPrimeBalance {
    /// Balance after `work_secs` at `power_watts`, starting from `balance`.
    pub fn deplete(&self, balance: f64, power_watts: f64, work_secs: f64) -> f64 {
        balance - (power_watts - self.cp) * work_secs
    }

    /// Balance after `rest_secs` of recovery, starting from `balance`.
    pub fn recover(&self, balance: f64, rest_secs: f64) -> f64 {
        self.w_prime - (self.w_prime - balance) * (-rest_secs / self.tau).exp()
    }

    /// Final balance after `repeats` work blocks separated by rests.
    ///
    /// No recovery follows the last block. A negative result means the
    /// set over-drains W'.
    pub fn simulate(&self, repeats: u32, work_secs: f64, power_watts: f64, rest_secs: f64) -> f64 {
        let mut balance = self.w_prime;
        for i in 0..repeats {
            balance = self.deplete(balance, power_watts, work_secs);
            if i + 1 < repeats {
                balance = self.recover(balance, rest_secs);
            }
        }
        balance
    }
}
