use clap::Args;

use crate::reports;
use promousetuner::device;
use promousetuner::error::TnResult;

#[derive(Args, Debug, Clone)]
pub struct DeviceArgs {
    /// Check for a firmware update instead of detecting the device
    #[arg(long, default_value_t = false)]
    pub firmware: bool,
}

pub fn run(args: DeviceArgs) -> TnResult<()> {
    if args.firmware {
        println!("🔎 Checking for firmware updates...");
        reports::print_firmware(&device::check_firmware());
    } else {
        println!("🔎 Detecting connected mouse...");
        reports::print_device(&device::detect_mouse());
    }
    Ok(())
}
