use std::str::FromStr;

use clap::Args;
use strum::IntoEnumIterator;

use crate::reports;
use promousetuner::api::TunerState;
use promousetuner::config::TestPreset;
use promousetuner::error::{TnResult, TunerError};
use promousetuner::session::sim::SimulatedPlayer;
use promousetuner::session::{CalibrationSession, Difficulty, PlayArea, TestType};

#[derive(Args, Debug, Clone)]
pub struct CalibrateArgs {
    /// Test to run (accuracy|speed|tracking); all three when omitted
    #[arg(short, long)]
    pub test: Option<String>,

    /// easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    pub difficulty: String,

    /// Simulated player skill, 0.0-1.0
    #[arg(long, default_value_t = 0.75)]
    pub skill: f64,

    /// RNG seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = 800.0)]
    pub area_width: f64,
    #[arg(long, default_value_t = 400.0)]
    pub area_height: f64,

    /// Apply the recommended settings bundle once calibration is complete
    #[arg(long, default_value_t = false)]
    pub apply: bool,
}

pub fn run(args: CalibrateArgs, state: &TunerState) -> TnResult<()> {
    let difficulty = Difficulty::from_str(&args.difficulty)
        .map_err(|_| TunerError::Config(format!("Unknown difficulty '{}'", args.difficulty)))?;

    let tests: Vec<TestType> = match &args.test {
        Some(name) => vec![TestType::from_str(name)
            .map_err(|_| TunerError::Config(format!("Unknown test type '{}'", name)))?],
        None => TestType::iter().collect(),
    };

    let area = PlayArea {
        width: args.area_width,
        height: args.area_height,
    };
    let timing = state.config().timing.clone();
    let mut result = state.calibration()?;

    for (i, test_type) in tests.iter().enumerate() {
        let mut preset = TestPreset::for_difficulty(difficulty);
        preset.test_duration = timing.test_duration_secs;

        let mut session = match args.seed {
            Some(seed) => CalibrationSession::with_seed(
                *test_type,
                preset,
                timing.clone(),
                area,
                seed.wrapping_add(i as u64),
            ),
            None => CalibrationSession::new(*test_type, preset, timing.clone(), area),
        };
        let mut player = match args.seed {
            Some(seed) => SimulatedPlayer::with_seed(args.skill, seed.wrapping_add(100 + i as u64)),
            None => SimulatedPlayer::new(args.skill),
        };

        println!("🏁 Running {} test ({}, {} targets)...", test_type, difficulty, preset.target_count);
        let score = player.run(&mut session, &timing);
        println!("   {} score: {}", test_type, score);
        result.set_component(*test_type, score);
    }

    let added = state.save_calibration(result)?;
    reports::print_calibration(&result);
    if added > 0 {
        println!("\n💡 {} new recommendation(s) — see `promousetuner recommend`.", added);
    }

    if let Some(bundle) = state.recommended_bundle()? {
        reports::print_bundle(&bundle);
        if args.apply {
            if let Some(settings) = state.apply_recommended_bundle()? {
                println!("✅ Recommended settings applied.");
                reports::print_settings(&settings);
            }
        }
    }

    Ok(())
}
