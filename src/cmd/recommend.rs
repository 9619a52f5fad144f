use clap::Args;

use crate::reports;
use promousetuner::api::TunerState;
use promousetuner::error::TnResult;

#[derive(Args, Debug, Clone)]
pub struct RecommendArgs {
    /// Apply the recommendation with this id to the live settings
    #[arg(long)]
    pub apply: Option<String>,

    /// Dismiss the recommendation with this id
    #[arg(long)]
    pub dismiss: Option<String>,
}

pub fn run(args: RecommendArgs, state: &TunerState) -> TnResult<()> {
    if let Some(id) = &args.apply {
        match state.apply_recommendation(id)? {
            Some(rec) => {
                println!("✅ Applied '{}'.", rec.title);
                reports::print_settings(&state.settings()?);
            }
            None => println!("Recommendation '{}' not found.", id),
        }
    }

    if let Some(id) = &args.dismiss {
        if state.dismiss_recommendation(id)? {
            println!("🗑️  Recommendation '{}' dismissed.", id);
        } else {
            println!("Recommendation '{}' not found.", id);
        }
    }

    reports::print_recommendations(&state.recommendations()?);
    Ok(())
}
