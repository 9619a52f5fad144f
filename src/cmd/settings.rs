use clap::Args;

use crate::reports;
use promousetuner::api::TunerState;
use promousetuner::error::TnResult;

/// Show the live settings record, or patch individual fields. Every write
/// is range-checked before it is persisted.
#[derive(Args, Debug, Clone)]
pub struct SettingsArgs {
    #[arg(long)]
    pub dpi: Option<u32>,
    #[arg(long)]
    pub polling_rate: Option<u32>,
    #[arg(long)]
    pub acceleration: Option<bool>,
    #[arg(long)]
    pub smoothing: Option<bool>,
    #[arg(long)]
    pub lift_off_distance: Option<u8>,
    #[arg(long)]
    pub angle_snapping: Option<u8>,
    #[arg(long)]
    pub debounce_time: Option<u32>,
    #[arg(long)]
    pub raw_input: Option<bool>,
    #[arg(long)]
    pub surface_calibration: Option<bool>,
}

impl SettingsArgs {
    fn is_patch(&self) -> bool {
        self.dpi.is_some()
            || self.polling_rate.is_some()
            || self.acceleration.is_some()
            || self.smoothing.is_some()
            || self.lift_off_distance.is_some()
            || self.angle_snapping.is_some()
            || self.debounce_time.is_some()
            || self.raw_input.is_some()
            || self.surface_calibration.is_some()
    }
}

pub fn run(args: SettingsArgs, state: &TunerState) -> TnResult<()> {
    let mut settings = state.settings()?;

    if args.is_patch() {
        if let Some(v) = args.dpi {
            settings.dpi = v;
        }
        if let Some(v) = args.polling_rate {
            settings.polling_rate = v;
        }
        if let Some(v) = args.acceleration {
            settings.acceleration = v;
        }
        if let Some(v) = args.smoothing {
            settings.smoothing = v;
        }
        if let Some(v) = args.lift_off_distance {
            settings.lift_off_distance = v;
        }
        if let Some(v) = args.angle_snapping {
            settings.angle_snapping = v;
        }
        if let Some(v) = args.debounce_time {
            settings.debounce_time = v;
        }
        if let Some(v) = args.raw_input {
            settings.raw_input = v;
        }
        if let Some(v) = args.surface_calibration {
            settings.surface_calibration = v;
        }
        settings = state.set_settings(settings)?;
        println!("✅ Settings updated.");
    }

    reports::print_settings(&settings);
    Ok(())
}
