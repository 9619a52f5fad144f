use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use promousetuner::config::{SessionTiming, TestPreset};
use promousetuner::scoring;
use promousetuner::session::sim::SimulatedPlayer;
use promousetuner::session::{CalibrationSession, Difficulty, PlayArea, TestType};

fn bench_primitives(c: &mut Criterion) {
    c.bench_function("accuracy_score", |b| {
        b.iter(|| scoring::accuracy_score(black_box(42), black_box(10), black_box(45.0)))
    });
    c.bench_function("tracking_score", |b| {
        b.iter(|| scoring::tracking_score(black_box(87.3), black_box(30)))
    });
}

fn bench_simulated_run(c: &mut Criterion) {
    let timing = SessionTiming::default();
    let area = PlayArea {
        width: 800.0,
        height: 400.0,
    };
    c.bench_function("simulated_speed_run", |b| {
        b.iter(|| {
            let mut session = CalibrationSession::with_seed(
                TestType::Speed,
                TestPreset::for_difficulty(Difficulty::Medium),
                timing.clone(),
                area,
                7,
            );
            let mut player = SimulatedPlayer::with_seed(0.8, 7);
            black_box(player.run(&mut session, &timing))
        })
    });
}

criterion_group!(benches, bench_primitives, bench_simulated_run);
criterion_main!(benches);
