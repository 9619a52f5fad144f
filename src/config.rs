use clap::Args;

use crate::session::Difficulty;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub thresholds: RuleThresholds,
    #[command(flatten)]
    pub timing: SessionTiming,
}

/// Fixed thresholds for both recommendation rule sets. The calibration-tab
/// derivation (rule set B) uses its own cutoffs, kept separate from the
/// post-save rules (rule set A).
#[derive(Args, Debug, Clone)]
pub struct RuleThresholds {
    // === RULE SET A (post-save recommendations) ===
    #[arg(long, default_value_t = 70)]
    pub accuracy_floor: u8,
    #[arg(long, default_value_t = 70)]
    pub speed_floor: u8,

    // === RULE SET B (calibration-tab bundle) ===
    #[arg(long, default_value_t = 80)]
    pub dpi_cutoff: u8,
    #[arg(long, default_value_t = 80)]
    pub polling_cutoff: u8,
    #[arg(long, default_value_t = 70)]
    pub acceleration_cutoff: u8,
    #[arg(long, default_value_t = 85)]
    pub lift_off_cutoff: u8,

    // === APPLY ===
    // DPI reduction factor for sensitivity recommendations (10% drop).
    #[arg(long, default_value_t = 0.9)]
    pub dpi_scale: f64,
}

#[derive(Args, Debug, Clone)]
pub struct SessionTiming {
    #[arg(long, default_value_t = 30)]
    pub test_duration_secs: u32,
    #[arg(long, default_value_t = 1500)]
    pub path_interval_ms: u64,
    #[arg(long, default_value_t = 50.0)]
    pub path_proximity: f64,
    #[arg(long, default_value_t = 0.1)]
    pub proximity_credit: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            accuracy_floor: 70,
            speed_floor: 70,
            dpi_cutoff: 80,
            polling_cutoff: 80,
            acceleration_cutoff: 70,
            lift_off_cutoff: 85,
            dpi_scale: 0.9,
        }
    }
}

impl Default for SessionTiming {
    fn default() -> Self {
        Self {
            test_duration_secs: 30,
            path_interval_ms: 1500,
            path_proximity: 50.0,
            proximity_credit: 0.1,
        }
    }
}

/// Per-difficulty test preset: how many targets, how big, how long.
/// Duration is fixed at 30s across difficulties; only count and size vary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestPreset {
    pub target_count: usize,
    pub target_size: f64,
    pub test_duration: u32,
}

impl TestPreset {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                target_count: 5,
                target_size: 50.0,
                test_duration: 30,
            },
            Difficulty::Medium => Self {
                target_count: 10,
                target_size: 40.0,
                test_duration: 30,
            },
            Difficulty::Hard => Self {
                target_count: 15,
                target_size: 30.0,
                test_duration: 30,
            },
        }
    }
}
