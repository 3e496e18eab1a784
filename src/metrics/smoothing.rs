//! Intensity smoothing for normalized intensity.
//!
//! Operates on per-second intensity samples in % FTP.

use std::collections::VecDeque;

/// Trailing window size used for normalized intensity.
pub const NORMALIZED_WINDOW_SECS: usize = 30;

/// Rolling average over a fixed sample window.
#[derive(Debug)]
pub struct RollingAverage {
    /// Buffer of recent values
    buffer: VecDeque<i32>,
    /// Window size in samples
    window_size: usize,
    /// Running sum for efficient calculation
    sum: i64,
}

impl RollingAverage {
    /// Create a new rolling average with the given window size.
    pub fn new(window_size: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(window_size),
            window_size,
            sum: 0,
        }
    }

    /// Create a 30-second rolling average.
    pub fn thirty_second() -> Self {
        Self::new(NORMALIZED_WINDOW_SECS)
    }

    /// Add a new value and return the current average.
    pub fn add(&mut self, value: i32) -> Option<f64> {
        self.buffer.push_back(value);
        self.sum += value as i64;

        if self.buffer.len() > self.window_size {
            if let Some(old) = self.buffer.pop_front() {
                self.sum -= old as i64;
            }
        }

        self.average()
    }

    /// Get the current average without adding a value.
    pub fn average(&self) -> Option<f64> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.sum as f64 / self.buffer.len() as f64)
        }
    }

    /// Check if the buffer holds a full window.
    pub fn is_full(&self) -> bool {
        self.buffer.len() >= self.window_size
    }
}

/// Normalized intensity accumulator.
///
/// NI = 4th root of the mean of (30-second rolling average intensity)^4,
/// counting only samples where the window is full.
#[derive(Debug)]
pub struct NormalizedIntensityCalculator {
    /// 30-second rolling average
    rolling_avg: RollingAverage,
    /// Sum of 4th powers
    sum_fourth_power: f64,
    /// Count of full-window samples
    count: u64,
}

impl NormalizedIntensityCalculator {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self {
            rolling_avg: RollingAverage::thirty_second(),
            sum_fourth_power: 0.0,
            count: 0,
        }
    }

    /// Add one second of intensity.
    pub fn add(&mut self, intensity: i32) {
        if let Some(avg) = self.rolling_avg.add(intensity) {
            if self.rolling_avg.is_full() {
                self.sum_fourth_power += avg.powi(4);
                self.count += 1;
            }
        }
    }

    /// Current normalized intensity, rounded to whole % FTP.
    ///
    /// `None` until a full window has been observed.
    pub fn normalized_intensity(&self) -> Option<i32> {
        if self.count == 0 {
            return None;
        }

        let avg_fourth_power = self.sum_fourth_power / self.count as f64;
        Some(avg_fourth_power.powf(0.25).round() as i32)
    }
}

impl Default for NormalizedIntensityCalculator {
    fn default() -> Self {
        Self::new()
    }
}
