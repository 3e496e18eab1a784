//! Power zone classification by intensity.
//!
//! Seven fixed Coggan-style bands over % FTP with upper-exclusive bounds.

use serde::{Deserialize, Serialize};

/// Coggan 7-zone power zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerZone {
    /// Zone 1: Active Recovery (<55% FTP)
    Z1ActiveRecovery,
    /// Zone 2: Endurance (55-75% FTP)
    Z2Endurance,
    /// Zone 3: Tempo (76-90% FTP)
    Z3Tempo,
    /// Zone 4: Threshold (91-105% FTP)
    Z4Threshold,
    /// Zone 5: VO2max (106-120% FTP)
    Z5Vo2max,
    /// Zone 6: Anaerobic (121-150% FTP)
    Z6Anaerobic,
    /// Zone 7: Neuromuscular (>150% FTP)
    Z7Neuromuscular,
}

impl PowerZone {
    /// All zones, lowest first.
    pub const ALL: [PowerZone; 7] = [
        PowerZone::Z1ActiveRecovery,
        PowerZone::Z2Endurance,
        PowerZone::Z3Tempo,
        PowerZone::Z4Threshold,
        PowerZone::Z5Vo2max,
        PowerZone::Z6Anaerobic,
        PowerZone::Z7Neuromuscular,
    ];

    /// Get the zone for a given intensity in % FTP.
    pub fn from_intensity(intensity: i32) -> Self {
        if intensity < 55 {
            PowerZone::Z1ActiveRecovery
        } else if intensity < 76 {
            PowerZone::Z2Endurance
        } else if intensity < 91 {
            PowerZone::Z3Tempo
        } else if intensity < 106 {
            PowerZone::Z4Threshold
        } else if intensity < 121 {
            PowerZone::Z5Vo2max
        } else if intensity < 151 {
            PowerZone::Z6Anaerobic
        } else {
            PowerZone::Z7Neuromuscular
        }
    }

    /// Zone number (1-7).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    fn index(self) -> usize {
        match self {
            PowerZone::Z1ActiveRecovery => 0,
            PowerZone::Z2Endurance => 1,
            PowerZone::Z3Tempo => 2,
            PowerZone::Z4Threshold => 3,
            PowerZone::Z5Vo2max => 4,
            PowerZone::Z6Anaerobic => 5,
            PowerZone::Z7Neuromuscular => 6,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            PowerZone::Z1ActiveRecovery => "Active Recovery",
            PowerZone::Z2Endurance => "Endurance",
            PowerZone::Z3Tempo => "Tempo",
            PowerZone::Z4Threshold => "Threshold",
            PowerZone::Z5Vo2max => "VO2max",
            PowerZone::Z6Anaerobic => "Anaerobic",
            PowerZone::Z7Neuromuscular => "Neuromuscular",
        }
    }

    /// Inclusive intensity range in % FTP (Z7 has no upper limit).
    pub fn intensity_range(self) -> (i32, Option<i32>) {
        match self {
            PowerZone::Z1ActiveRecovery => (0, Some(54)),
            PowerZone::Z2Endurance => (55, Some(75)),
            PowerZone::Z3Tempo => (76, Some(90)),
            PowerZone::Z4Threshold => (91, Some(105)),
            PowerZone::Z5Vo2max => (106, Some(120)),
            PowerZone::Z6Anaerobic => (121, Some(150)),
            PowerZone::Z7Neuromuscular => (151, None),
        }
    }
}

impl std::fmt::Display for PowerZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Z{} {}", self.number(), self.name())
    }
}

/// Seconds spent in each power zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDistribution {
    seconds: [u64; 7],
}

impl ZoneDistribution {
    /// Create an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add time to a zone, saturating at `u64::MAX`.
    pub fn add(&mut self, zone: PowerZone, seconds: u64) {
        let slot = &mut self.seconds[zone.index()];
        *slot = slot.saturating_add(seconds);
    }

    /// Seconds accumulated in a zone.
    pub fn seconds_in(&self, zone: PowerZone) -> u64 {
        self.seconds[zone.index()]
    }

    /// Total seconds across all zones.
    pub fn total_seconds(&self) -> u64 {
        self.seconds.iter().fold(0, |total, secs| total.saturating_add(*secs))
    }

    /// Fraction of `total` spent in a zone (0 when `total` is 0).
    pub fn share(&self, zone: PowerZone, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.seconds_in(zone) as f64 / total as f64
    }

    /// Zones with their seconds, lowest zone first.
    pub fn iter(&self) -> impl Iterator<Item = (PowerZone, u64)> + '_ {
        PowerZone::ALL
            .iter()
            .map(move |zone| (*zone, self.seconds_in(*zone)))
    }
}
