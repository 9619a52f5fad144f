pub mod sim;

use strum_macros::{Display, EnumIter, EnumString};

use crate::config::{SessionTiming, TestPreset};
use crate::scoring;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TestType {
    Accuracy,
    Speed,
    Tracking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Completed,
}

/// Click target for the accuracy/speed tests. Lives for one batch; ids
/// restart at 0 on every regeneration.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub hit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

/// Measured bounds of the interactive area, in pixels. A zero-sized area
/// means layout has not happened yet; generation no-ops until it has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f64,
    pub height: f64,
}

impl PlayArea {
    pub fn is_zero_sized(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// One timed interactive test. Pure state machine: the caller owns the
/// clock and feeds `tick` (1s cadence), `path_tick` (1.5s cadence while
/// tracking) and input events. Nothing here touches wall time, so a test
/// harness can run a 30s session instantly.
pub struct CalibrationSession {
    test_type: TestType,
    preset: TestPreset,
    timing: SessionTiming,
    area: PlayArea,
    state: SessionState,
    score: f64,
    time_left: u32,
    progress: f64,
    targets: Vec<Target>,
    path: Vec<PathPoint>,
    rng: fastrand::Rng,
}

impl CalibrationSession {
    pub fn new(
        test_type: TestType,
        preset: TestPreset,
        timing: SessionTiming,
        area: PlayArea,
    ) -> Self {
        Self::with_rng(test_type, preset, timing, area, fastrand::Rng::new())
    }

    pub fn with_seed(
        test_type: TestType,
        preset: TestPreset,
        timing: SessionTiming,
        area: PlayArea,
        seed: u64,
    ) -> Self {
        Self::with_rng(
            test_type,
            preset,
            timing,
            area,
            fastrand::Rng::with_seed(seed),
        )
    }

    fn with_rng(
        test_type: TestType,
        preset: TestPreset,
        timing: SessionTiming,
        area: PlayArea,
        rng: fastrand::Rng,
    ) -> Self {
        Self {
            test_type,
            preset,
            timing,
            area,
            state: SessionState::Idle,
            score: 0.0,
            time_left: preset.test_duration,
            progress: 0.0,
            targets: Vec::new(),
            path: Vec::new(),
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn test_type(&self) -> TestType {
        self.test_type
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn path(&self) -> &[PathPoint] {
        &self.path
    }

    /// Idle -> Running. Resets score/progress and spawns the first batch of
    /// targets (accuracy/speed) or the first path point (tracking).
    pub fn start(&mut self) {
        self.state = SessionState::Running;
        self.score = 0.0;
        self.time_left = self.preset.test_duration;
        self.progress = 0.0;
        self.targets.clear();
        self.path.clear();

        match self.test_type {
            TestType::Accuracy | TestType::Speed => self.generate_targets(),
            TestType::Tracking => self.spawn_path_point(),
        }
    }

    /// Running -> Idle without finalizing a score. The in-flight batch and
    /// path are discarded; the caller stops feeding ticks.
    pub fn cancel(&mut self) {
        if self.state == SessionState::Running {
            self.state = SessionState::Idle;
            self.targets.clear();
            self.path.clear();
        }
    }

    /// Switching test type discards everything and returns to Idle.
    pub fn switch_test(&mut self, test_type: TestType, preset: TestPreset) {
        self.test_type = test_type;
        self.preset = preset;
        self.state = SessionState::Idle;
        self.score = 0.0;
        self.time_left = preset.test_duration;
        self.progress = 0.0;
        self.targets.clear();
        self.path.clear();
    }

    /// Mark a target of the current batch as hit (accuracy/speed only).
    /// When the whole batch is down, a fresh full batch replaces it within
    /// the same run. Returns false for stale ids or already-hit targets.
    pub fn register_hit(&mut self, target_id: usize) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        if self.test_type == TestType::Tracking {
            return false;
        }

        let Some(target) = self.targets.iter_mut().find(|t| t.id == target_id) else {
            return false;
        };
        if target.hit {
            return false;
        }
        target.hit = true;
        self.score += 1.0;

        if self.targets.iter().all(|t| t.hit) {
            self.generate_targets();
        }
        true
    }

    /// Pointer-move sample (tracking only): proximity to the most recent
    /// path point earns a small score credit.
    pub fn pointer_sample(&mut self, x: f64, y: f64) {
        if self.state != SessionState::Running || self.test_type != TestType::Tracking {
            return;
        }
        if let Some(point) = self.path.last() {
            let distance = ((point.x - x).powi(2) + (point.y - y).powi(2)).sqrt();
            if distance < self.timing.path_proximity {
                self.score += self.timing.proximity_credit;
            }
        }
    }

    /// 1.5s cadence while a tracking run is live: extend the path.
    pub fn path_tick(&mut self) {
        if self.state != SessionState::Running || self.test_type != TestType::Tracking {
            return;
        }
        self.spawn_path_point();
    }

    /// 1s cadence countdown. At zero the run completes and the finalized
    /// 0-100 score is returned; otherwise None.
    pub fn tick(&mut self) -> Option<u8> {
        if self.state != SessionState::Running {
            return None;
        }

        self.time_left = self.time_left.saturating_sub(1);
        let duration = self.preset.test_duration as f64;
        self.progress = (duration - self.time_left as f64) / duration * 100.0;

        if self.time_left == 0 {
            self.state = SessionState::Completed;
            Some(self.finalize())
        } else {
            None
        }
    }

    fn finalize(&self) -> u8 {
        match self.test_type {
            TestType::Accuracy => {
                let hits = self.targets.iter().filter(|t| t.hit).count();
                scoring::accuracy_score(hits, self.targets.len(), self.score)
            }
            TestType::Speed => scoring::speed_score(self.score, self.preset.test_duration),
            TestType::Tracking => scoring::tracking_score(self.score, self.preset.test_duration),
        }
    }

    fn generate_targets(&mut self) {
        if self.area.is_zero_sized() {
            return;
        }
        let size = self.preset.target_size;
        self.targets.clear();
        for id in 0..self.preset.target_count {
            self.targets.push(Target {
                id,
                x: self.rng.f64() * (self.area.width - size).max(0.0),
                y: self.rng.f64() * (self.area.height - size).max(0.0),
                size,
                hit: false,
            });
        }
    }

    fn spawn_path_point(&mut self) {
        if self.area.is_zero_sized() {
            return;
        }
        self.path.push(PathPoint {
            x: self.rng.f64() * (self.area.width - 50.0).max(0.0),
            y: self.rng.f64() * (self.area.height - 50.0).max(0.0),
        });
    }
}
