use serde::{Deserialize, Serialize};

use crate::error::{TnResult, TunerError};

pub const POLLING_RATES: [u32; 4] = [125, 250, 500, 1000];

/// The single live settings record for a device. Mutated in place, never
/// historized; last write wins across sessions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MouseSettings {
    pub dpi: u32,
    pub polling_rate: u32,
    pub acceleration: bool,
    pub smoothing: bool,
    pub lift_off_distance: u8,
    pub angle_snapping: u8,
    pub debounce_time: u32,
    pub raw_input: bool,
    pub surface_calibration: bool,
}

impl Default for MouseSettings {
    fn default() -> Self {
        Self {
            dpi: 800,
            polling_rate: 1000,
            acceleration: false,
            smoothing: false,
            lift_off_distance: 2,
            angle_snapping: 0,
            debounce_time: 8,
            raw_input: true,
            surface_calibration: false,
        }
    }
}

impl MouseSettings {
    /// Range check before the record is handed to any consumer.
    pub fn validate(&self) -> TnResult<()> {
        if self.dpi == 0 {
            return Err(TunerError::Validation("DPI must be positive".into()));
        }
        if !POLLING_RATES.contains(&self.polling_rate) {
            return Err(TunerError::Validation(format!(
                "Polling rate {} Hz is not one of {:?}",
                self.polling_rate, POLLING_RATES
            )));
        }
        if !(1..=3).contains(&self.lift_off_distance) {
            return Err(TunerError::Validation(format!(
                "Lift-off distance {} is outside 1-3",
                self.lift_off_distance
            )));
        }
        if self.angle_snapping > 10 {
            return Err(TunerError::Validation(format!(
                "Angle snapping {} is outside 0-10",
                self.angle_snapping
            )));
        }
        Ok(())
    }
}
