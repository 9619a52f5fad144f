use tracing::debug;

use crate::config::SessionTiming;
use crate::session::{CalibrationSession, SessionState, TestType};

const STEP_MS: u64 = 100;
const TICK_MS: u64 = 1000;

/// Synthetic player for CLI runs: no real pointer exists, so hits and
/// pointer samples are generated at a configurable skill level, the same
/// way the rest of the device data in this app is simulated.
pub struct SimulatedPlayer {
    skill: f64,
    rng: fastrand::Rng,
}

impl SimulatedPlayer {
    pub fn new(skill: f64) -> Self {
        Self::with_rng(skill, fastrand::Rng::new())
    }

    pub fn with_seed(skill: f64, seed: u64) -> Self {
        Self::with_rng(skill, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(skill: f64, rng: fastrand::Rng) -> Self {
        Self {
            skill: skill.clamp(0.0, 1.0),
            rng,
        }
    }

    /// Drive a session from start to completion over simulated time:
    /// 100ms steps, ticks every second, path points on the tracking
    /// cadence. Returns the finalized 0-100 score.
    pub fn run(&mut self, session: &mut CalibrationSession, timing: &SessionTiming) -> u8 {
        session.start();
        let mut elapsed: u64 = 0;
        let mut next_tick = TICK_MS;
        let mut next_path = timing.path_interval_ms;

        loop {
            elapsed += STEP_MS;

            match session.test_type() {
                TestType::Accuracy | TestType::Speed => self.step_clicks(session),
                TestType::Tracking => self.step_pointer(session, timing),
            }

            if elapsed >= next_path {
                session.path_tick();
                next_path += timing.path_interval_ms;
            }

            if elapsed >= next_tick {
                if let Some(score) = session.tick() {
                    debug!(
                        test = %session.test_type(),
                        raw = session.score(),
                        final_score = score,
                        "simulated run complete"
                    );
                    return score;
                }
                next_tick += TICK_MS;
            }

            if session.state() != SessionState::Running {
                return 0;
            }
        }
    }

    /// Click cadence scales with skill (roughly 0.4 to 1.6 attempts/sec);
    /// each attempt lands with probability tied to skill as well.
    fn step_clicks(&mut self, session: &mut CalibrationSession) {
        let attempts_per_sec = 0.4 + self.skill * 1.2;
        if self.rng.f64() >= attempts_per_sec * (STEP_MS as f64 / 1000.0) {
            return;
        }
        let unhit: Vec<usize> = session
            .targets()
            .iter()
            .filter(|t| !t.hit)
            .map(|t| t.id)
            .collect();
        if unhit.is_empty() {
            return;
        }
        if self.rng.f64() < 0.5 + self.skill / 2.0 {
            let id = unhit[self.rng.usize(..unhit.len())];
            session.register_hit(id);
        }
    }

    /// One pointer sample per step, landing inside the proximity radius
    /// with probability tied to skill.
    fn step_pointer(&mut self, session: &mut CalibrationSession, timing: &SessionTiming) {
        let Some(point) = session.path().last().copied() else {
            return;
        };
        let on_path = self.rng.f64() < 0.3 + self.skill * 0.6;
        let radius = if on_path {
            self.rng.f64() * (timing.path_proximity - 1.0)
        } else {
            timing.path_proximity + 10.0 + self.rng.f64() * 200.0
        };
        let angle = self.rng.f64() * std::f64::consts::TAU;
        session.pointer_sample(point.x + radius * angle.cos(), point.y + radius * angle.sin());
    }
}
