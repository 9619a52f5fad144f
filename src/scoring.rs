use serde::{Deserialize, Serialize};

use crate::session::TestType;

/// One 0-100 score per test dimension. `overall` stays 0 until all three
/// sub-scores are nonzero, then holds their rounded unweighted mean.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalibrationResult {
    pub accuracy: u8,
    pub speed: u8,
    pub tracking: u8,
    pub overall: u8,
}

impl CalibrationResult {
    pub fn is_complete(&self) -> bool {
        self.accuracy > 0 && self.speed > 0 && self.tracking > 0
    }

    /// Overwrite one sub-score (retakes included) and recompute `overall`.
    pub fn set_component(&mut self, test_type: TestType, score: u8) {
        match test_type {
            TestType::Accuracy => self.accuracy = score,
            TestType::Speed => self.speed = score,
            TestType::Tracking => self.tracking = score,
        }
        self.overall = if self.is_complete() {
            let sum = self.accuracy as f64 + self.speed as f64 + self.tracking as f64;
            (sum / 3.0).round() as u8
        } else {
            0
        };
    }
}

/// Clamp a raw score into [0,100] and round to the nearest integer.
pub fn clamp_round(raw: f64) -> u8 {
    raw.clamp(0.0, 100.0).round() as u8
}

/// Hits over an approximation of the cumulative target count: the current
/// batch plus every hit that forced a regeneration. The denominator is the
/// historical formula `batch_len + score - hits`, kept as-is; it can drift
/// from the true "targets ever shown" count under unusual hit orderings.
pub fn accuracy_score(hits: usize, batch_len: usize, cumulative: f64) -> u8 {
    let denom = batch_len as f64 + cumulative - hits as f64;
    if denom <= 0.0 {
        return 0;
    }
    clamp_round(hits as f64 / denom * 100.0)
}

/// Hits per second, scaled so 1 hit/sec reads as 100.
pub fn speed_score(cumulative: f64, duration: u32) -> u8 {
    if duration == 0 {
        return 0;
    }
    clamp_round(cumulative / duration as f64 * 100.0)
}

/// Proximity credit per second; each on-path sample contributed only 0.1,
/// so the band is scaled down to x20.
pub fn tracking_score(cumulative: f64, duration: u32) -> u8 {
    if duration == 0 {
        return 0;
    }
    clamp_round(cumulative / duration as f64 * 20.0)
}
