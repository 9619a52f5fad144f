use promousetuner::config::{SessionTiming, TestPreset};
use promousetuner::session::sim::SimulatedPlayer;
use promousetuner::session::{
    CalibrationSession, Difficulty, PlayArea, SessionState, TestType,
};
use rstest::rstest;

const AREA: PlayArea = PlayArea {
    width: 800.0,
    height: 400.0,
};

fn session(test_type: TestType, difficulty: Difficulty) -> CalibrationSession {
    CalibrationSession::with_seed(
        test_type,
        TestPreset::for_difficulty(difficulty),
        SessionTiming::default(),
        AREA,
        42,
    )
}

#[rstest]
#[case(Difficulty::Easy, 5, 50.0)]
#[case(Difficulty::Medium, 10, 40.0)]
#[case(Difficulty::Hard, 15, 30.0)]
fn difficulty_presets(#[case] difficulty: Difficulty, #[case] count: usize, #[case] size: f64) {
    let preset = TestPreset::for_difficulty(difficulty);
    assert_eq!(preset.target_count, count);
    assert_eq!(preset.target_size, size);
    assert_eq!(preset.test_duration, 30);
}

#[test]
fn easy_accuracy_start_spawns_five_targets_of_size_fifty() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    s.start();
    assert_eq!(s.state(), SessionState::Running);
    assert_eq!(s.targets().len(), 5);
    assert!(s.targets().iter().all(|t| t.size == 50.0 && !t.hit));
    assert!(s
        .targets()
        .iter()
        .all(|t| t.x >= 0.0 && t.x <= 750.0 && t.y >= 0.0 && t.y <= 350.0));
}

#[test]
fn hits_mark_targets_and_raise_score() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    s.start();
    assert!(s.register_hit(0));
    assert!(s.register_hit(1));
    assert_eq!(s.score(), 2.0);
    assert!(s.targets()[0].hit);
    // A second click on a dead target is ignored.
    assert!(!s.register_hit(0));
    assert_eq!(s.score(), 2.0);
}

#[test]
fn clearing_a_batch_regenerates_a_fresh_one() {
    let mut s = session(TestType::Speed, Difficulty::Easy);
    s.start();
    for id in 0..5 {
        assert!(s.register_hit(id));
    }
    // Same run, new unhit batch of full size.
    assert_eq!(s.targets().len(), 5);
    assert!(s.targets().iter().all(|t| !t.hit));
    assert_eq!(s.score(), 5.0);
    assert_eq!(s.state(), SessionState::Running);
}

#[test]
fn stale_hits_are_ignored() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    s.start();
    assert!(!s.register_hit(99));
    assert_eq!(s.score(), 0.0);
}

#[test]
fn hits_are_rejected_while_idle_and_for_tracking() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    assert!(!s.register_hit(0));

    let mut t = session(TestType::Tracking, Difficulty::Easy);
    t.start();
    assert!(!t.register_hit(0));
}

#[test]
fn ticks_count_down_and_complete_the_run() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    s.start();
    for id in 0..3 {
        s.register_hit(id);
    }
    for i in 1..30 {
        assert_eq!(s.tick(), None);
        assert_eq!(s.time_left(), 30 - i);
        let expected = i as f64 / 30.0 * 100.0;
        assert!((s.progress() - expected).abs() < 1e-9);
    }
    // 3 hits against a 5-target batch: 3 / (5 + 3 - 3) = 60%.
    assert_eq!(s.tick(), Some(60));
    assert_eq!(s.state(), SessionState::Completed);
    assert_eq!(s.tick(), None);
}

#[test]
fn speed_run_scores_hits_per_second() {
    let mut s = session(TestType::Speed, Difficulty::Hard);
    s.start();
    // 15 hits clears the batch; stop there.
    for id in 0..15 {
        s.register_hit(id);
    }
    let mut finalized = None;
    for _ in 0..30 {
        finalized = s.tick();
    }
    // 15 hits over 30s = 50.
    assert_eq!(finalized, Some(50));
}

#[test]
fn tracking_credits_only_near_the_latest_path_point() {
    let mut s = session(TestType::Tracking, Difficulty::Medium);
    s.start();
    assert_eq!(s.path().len(), 1);

    let point = s.path()[0];
    s.pointer_sample(point.x + 10.0, point.y - 10.0);
    assert!((s.score() - 0.1).abs() < 1e-9);

    s.pointer_sample(point.x + 500.0, point.y);
    assert!((s.score() - 0.1).abs() < 1e-9);

    s.path_tick();
    assert_eq!(s.path().len(), 2);
}

#[test]
fn tracking_run_finalizes_with_the_twenty_x_band() {
    let mut s = session(TestType::Tracking, Difficulty::Medium);
    s.start();
    let point = s.path()[0];
    // 150 on-path samples = 15.0 raw, 15/30*20 = 10.
    for _ in 0..150 {
        s.pointer_sample(point.x, point.y);
    }
    let mut finalized = None;
    for _ in 0..30 {
        finalized = s.tick();
    }
    assert_eq!(finalized, Some(10));
}

#[test]
fn zero_sized_area_noops_generation() {
    let mut s = CalibrationSession::with_seed(
        TestType::Accuracy,
        TestPreset::for_difficulty(Difficulty::Easy),
        SessionTiming::default(),
        PlayArea {
            width: 0.0,
            height: 0.0,
        },
        7,
    );
    s.start();
    assert!(s.targets().is_empty());

    let mut t = CalibrationSession::with_seed(
        TestType::Tracking,
        TestPreset::for_difficulty(Difficulty::Easy),
        SessionTiming::default(),
        PlayArea {
            width: 0.0,
            height: 0.0,
        },
        7,
    );
    t.start();
    t.path_tick();
    assert!(t.path().is_empty());
}

#[test]
fn cancel_discards_the_run_without_a_score() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    s.start();
    s.register_hit(0);
    s.cancel();
    assert_eq!(s.state(), SessionState::Idle);
    assert!(s.targets().is_empty());
    assert_eq!(s.tick(), None);
}

#[test]
fn switching_test_type_resets_to_idle() {
    let mut s = session(TestType::Accuracy, Difficulty::Easy);
    s.start();
    s.register_hit(0);
    s.switch_test(TestType::Tracking, TestPreset::for_difficulty(Difficulty::Hard));
    assert_eq!(s.state(), SessionState::Idle);
    assert_eq!(s.test_type(), TestType::Tracking);
    assert_eq!(s.score(), 0.0);
    assert!(s.targets().is_empty());
    assert!(s.path().is_empty());
}

#[test]
fn simulated_runs_are_reproducible_per_seed() {
    let timing = SessionTiming::default();
    let run = || {
        let mut s = session(TestType::Speed, Difficulty::Medium);
        let mut player = SimulatedPlayer::with_seed(0.8, 1234);
        player.run(&mut s, &timing)
    };
    assert_eq!(run(), run());
}

#[test]
fn simulated_scores_stay_in_band() {
    let timing = SessionTiming::default();
    for (i, test_type) in [TestType::Accuracy, TestType::Speed, TestType::Tracking]
        .into_iter()
        .enumerate()
    {
        let mut s = CalibrationSession::with_seed(
            test_type,
            TestPreset::for_difficulty(Difficulty::Medium),
            SessionTiming::default(),
            AREA,
            100 + i as u64,
        );
        let mut player = SimulatedPlayer::with_seed(0.9, 200 + i as u64);
        let score = player.run(&mut s, &timing);
        assert!(score <= 100);
        assert_eq!(s.state(), SessionState::Completed);
    }
}
