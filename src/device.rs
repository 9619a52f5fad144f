use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

/// Simulated driver seam. A real integration would talk to the vendor HID
/// interface here; this build reports a canned device after a fixed delay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MouseInfo {
    pub name: String,
    pub connected: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FirmwareStatus {
    pub available: bool,
    pub version: String,
}

pub fn detect_mouse() -> MouseInfo {
    thread::sleep(Duration::from_millis(1000));
    let info = MouseInfo {
        name: "ProMouseTuner G502".to_string(),
        connected: true,
    };
    info!(name = %info.name, "device detected");
    info
}

/// ~30% of checks report an update pending.
pub fn check_firmware() -> FirmwareStatus {
    thread::sleep(Duration::from_millis(1500));
    FirmwareStatus {
        available: fastrand::f64() > 0.7,
        version: "v2.1.4".to_string(),
    }
}
