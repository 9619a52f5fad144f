use clap::{Parser, Subcommand};
use std::process;

use promousetuner::api::TunerState;
use promousetuner::config::Config;
use promousetuner::error::TnResult;
use promousetuner::store::TunerStore;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the persisted JSON records
    #[arg(global = true, long, default_value = "data")]
    data_dir: String,

    /// Scope records to a user id (record keys get a _<user> suffix)
    #[arg(global = true, short, long)]
    user: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,

    #[command(flatten)]
    config: Config,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run simulated calibration tests and derive recommendations
    Calibrate(cmd::calibrate::CalibrateArgs),
    /// Show or edit the live mouse settings
    Settings(cmd::settings::SettingsArgs),
    /// List, create or delete game profiles
    Profiles(cmd::profiles::ProfilesArgs),
    /// List, apply or dismiss recommendations
    Recommend(cmd::recommend::RecommendArgs),
    /// Export settings, profiles and calibration as a JSON bundle
    Export(cmd::transfer::ExportArgs),
    /// Import a previously exported bundle
    Import(cmd::transfer::ImportArgs),
    /// Remove all stored records for the current user
    Clear,
    /// Detect the connected mouse or check its firmware
    Device(cmd::device::DeviceArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    println!("\n🖱️  ProMouseTuner");

    let store = match TunerStore::open(&cli.data_dir) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Cannot open data directory '{}': {}", cli.data_dir, e);
            process::exit(1);
        }
    };

    let state = match TunerState::init(store, cli.user.clone(), cli.config.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to load stored state: {}", e);
            process::exit(1);
        }
    };

    let outcome: TnResult<()> = match cli.command {
        Commands::Calibrate(args) => cmd::calibrate::run(args, &state),
        Commands::Settings(args) => cmd::settings::run(args, &state),
        Commands::Profiles(args) => cmd::profiles::run(args, &state),
        Commands::Recommend(args) => cmd::recommend::run(args, &state),
        Commands::Export(args) => cmd::transfer::export(args, &state),
        Commands::Import(args) => cmd::transfer::import(args, &state),
        Commands::Clear => cmd::transfer::clear(&state),
        Commands::Device(args) => cmd::device::run(args),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
