use promousetuner::config::RuleThresholds;
use promousetuner::recommend::{Impact, RecommendationKind, RecommendationSet};
use promousetuner::scoring::{self, CalibrationResult};
use promousetuner::session::TestType;
use promousetuner::settings::MouseSettings;
use proptest::prelude::*;

proptest! {
    // Every primitive lands in [0,100] after clamping, whatever the raw
    // counters were.
    #[test]
    fn clamped_scores_stay_in_range(raw in -1e6..1e6f64) {
        let s = scoring::clamp_round(raw);
        prop_assert!(s <= 100);
    }

    #[test]
    fn accuracy_score_in_range(
        hits in 0usize..500,
        batch in 0usize..50,
        cumulative in 0.0..500.0f64
    ) {
        prop_assert!(scoring::accuracy_score(hits, batch, cumulative) <= 100);
    }

    #[test]
    fn speed_and_tracking_scores_in_range(
        cumulative in 0.0..10_000.0f64,
        duration in 0u32..120
    ) {
        prop_assert!(scoring::speed_score(cumulative, duration) <= 100);
        prop_assert!(scoring::tracking_score(cumulative, duration) <= 100);
    }

    // overall == round(mean) exactly when all three components are
    // nonzero, else 0.
    #[test]
    fn overall_is_rounded_mean_or_zero(a in 0u8..=100, s in 0u8..=100, t in 0u8..=100) {
        let mut r = CalibrationResult::default();
        r.set_component(TestType::Accuracy, a);
        r.set_component(TestType::Speed, s);
        r.set_component(TestType::Tracking, t);

        if a > 0 && s > 0 && t > 0 {
            let mean = (a as f64 + s as f64 + t as f64) / 3.0;
            prop_assert_eq!(r.overall, mean.round() as u8);
        } else {
            prop_assert_eq!(r.overall, 0);
        }
    }

    // apply() always removes the chosen id from the collection, whatever
    // the entry's kind.
    #[test]
    fn apply_always_removes_the_id(
        kinds in proptest::collection::vec(0u8..4, 1..10),
        pick in any::<prop::sample::Index>()
    ) {
        let mut set = RecommendationSet::new();
        let mut ids = Vec::new();
        for k in &kinds {
            let kind = match k {
                0 => RecommendationKind::Sensitivity,
                1 => RecommendationKind::Polling,
                2 => RecommendationKind::Acceleration,
                _ => RecommendationKind::Other,
            };
            ids.push(set.add("entry", "", Impact::Low, kind, None));
        }

        let id = ids[pick.index(ids.len())].clone();
        let mut settings = MouseSettings::default();
        let applied = set.apply(&id, &mut settings, &RuleThresholds::default());

        prop_assert!(applied.is_some());
        prop_assert!(set.items().iter().all(|r| r.id != id));
        prop_assert_eq!(set.len(), kinds.len() - 1);
    }
}
