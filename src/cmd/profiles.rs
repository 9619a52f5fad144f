use clap::Args;

use crate::reports;
use promousetuner::api::TunerState;
use promousetuner::error::{TnResult, TunerError};
use promousetuner::profiles::GameProfile;

#[derive(Args, Debug, Clone)]
pub struct ProfilesArgs {
    /// Delete the profile with this id
    #[arg(long)]
    pub delete: Option<String>,

    /// Create or replace the profile with this id (needs --name)
    #[arg(long)]
    pub set: Option<String>,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value_t = 800)]
    pub dpi: u32,
    #[arg(long, default_value_t = 1000)]
    pub polling_rate: u32,
    #[arg(long, default_value_t = 2)]
    pub lift_off_distance: u8,
    #[arg(long, default_value_t = false)]
    pub angle_snapping: bool,
    #[arg(long, default_value_t = false)]
    pub acceleration: bool,
}

pub fn run(args: ProfilesArgs, state: &TunerState) -> TnResult<()> {
    if let Some(id) = &args.delete {
        if state.delete_profile(id)? {
            println!("🗑️  Profile '{}' deleted.", id);
        } else {
            println!("Profile '{}' not found.", id);
        }
    }

    if let Some(id) = &args.set {
        let name = args
            .name
            .clone()
            .ok_or_else(|| TunerError::Config("--set requires --name".into()))?;
        state.upsert_profile(GameProfile {
            id: id.clone(),
            name,
            icon: "gamepad".to_string(),
            dpi: args.dpi,
            polling_rate: args.polling_rate,
            lift_off_distance: args.lift_off_distance,
            angle_snapping: args.angle_snapping,
            acceleration: args.acceleration,
        })?;
        println!("✅ Profile '{}' saved.", id);
    }

    reports::print_profiles(&state.profiles()?);
    Ok(())
}
