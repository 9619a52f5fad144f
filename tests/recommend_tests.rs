use promousetuner::config::RuleThresholds;
use promousetuner::recommend::{
    Impact, LiftOffLevel, RecommendationKind, RecommendationSet, RecommendedSettings,
};
use promousetuner::scoring::CalibrationResult;
use promousetuner::session::TestType;
use promousetuner::settings::MouseSettings;

fn thresholds() -> RuleThresholds {
    RuleThresholds::default()
}

fn result(accuracy: u8, speed: u8, tracking: u8) -> CalibrationResult {
    let mut r = CalibrationResult::default();
    r.set_component(TestType::Accuracy, accuracy);
    r.set_component(TestType::Speed, speed);
    r.set_component(TestType::Tracking, tracking);
    r
}

#[test]
fn low_accuracy_emits_exactly_one_recommendation() {
    // The §8 scenario: 60/90/90 fires only the accuracy rule; overall 80.
    let r = result(60, 90, 90);
    assert_eq!(r.overall, 80);

    let mut set = RecommendationSet::new();
    let added = set.extend_from_calibration(&r, &thresholds());
    assert_eq!(added, 1);
    assert_eq!(set.items()[0].kind, RecommendationKind::Sensitivity);
    assert_eq!(set.items()[0].impact, Impact::High);
}

#[test]
fn both_rules_fire_independently() {
    let mut set = RecommendationSet::new();
    let added = set.extend_from_calibration(&result(50, 50, 90), &thresholds());
    assert_eq!(added, 2);
    assert_eq!(set.items()[0].kind, RecommendationKind::Sensitivity);
    assert_eq!(set.items()[1].kind, RecommendationKind::Polling);
}

#[test]
fn good_scores_emit_nothing() {
    let mut set = RecommendationSet::new();
    assert_eq!(set.extend_from_calibration(&result(85, 85, 85), &thresholds()), 0);
    assert!(set.is_empty());
}

#[test]
fn duplicates_accumulate_across_runs() {
    // No de-duplication: two low-accuracy runs stack two sensitivity entries.
    let mut set = RecommendationSet::new();
    set.extend_from_calibration(&result(60, 90, 90), &thresholds());
    set.extend_from_calibration(&result(65, 95, 95), &thresholds());
    assert_eq!(set.len(), 2);
    assert!(set
        .items()
        .iter()
        .all(|r| r.kind == RecommendationKind::Sensitivity));
    // Ids stay unique even for duplicate kinds.
    assert_ne!(set.items()[0].id, set.items()[1].id);
}

#[test]
fn apply_sensitivity_drops_dpi_ten_percent() {
    let mut set = RecommendationSet::new();
    let id = set.add(
        "Lower DPI",
        "test",
        Impact::High,
        RecommendationKind::Sensitivity,
        None,
    );
    let mut settings = MouseSettings::default();
    assert_eq!(settings.dpi, 800);

    let applied = set.apply(&id, &mut settings, &thresholds());
    assert!(applied.is_some());
    assert_eq!(settings.dpi, 720);
    assert!(set.is_empty());
}

#[test]
fn apply_polling_and_acceleration_kinds() {
    let mut set = RecommendationSet::new();
    let polling = set.add("p", "", Impact::Medium, RecommendationKind::Polling, None);
    let accel = set.add("a", "", Impact::High, RecommendationKind::Acceleration, None);

    let mut settings = MouseSettings {
        polling_rate: 500,
        acceleration: true,
        ..Default::default()
    };
    set.apply(&polling, &mut settings, &thresholds());
    assert_eq!(settings.polling_rate, 1000);
    set.apply(&accel, &mut settings, &thresholds());
    assert!(!settings.acceleration);
    assert!(set.is_empty());
}

#[test]
fn apply_unrecognized_kind_still_removes_the_entry() {
    let mut set = RecommendationSet::new();
    let id = set.add("misc", "", Impact::Low, RecommendationKind::Other, None);
    let mut settings = MouseSettings::default();
    let before = settings.clone();

    let applied = set.apply(&id, &mut settings, &thresholds());
    assert!(applied.is_some());
    assert_eq!(settings, before);
    assert!(set.is_empty());
}

#[test]
fn apply_unknown_id_is_a_noop() {
    let mut set = RecommendationSet::with_defaults();
    let mut settings = MouseSettings::default();
    let before = settings.clone();
    assert!(set.apply("nope", &mut settings, &thresholds()).is_none());
    assert_eq!(settings, before);
    assert_eq!(set.len(), 3);
}

#[test]
fn dismiss_removes_without_touching_settings() {
    let mut set = RecommendationSet::with_defaults();
    let id = set.items()[0].id.clone();
    assert!(set.dismiss(&id));
    assert_eq!(set.len(), 2);
    assert!(!set.dismiss(&id));
}

#[test]
fn bundle_needs_a_complete_result() {
    let mut r = CalibrationResult::default();
    r.set_component(TestType::Accuracy, 90);
    assert!(RecommendedSettings::derive(&r, &thresholds()).is_none());
}

#[test]
fn bundle_thresholds_pick_each_branch() {
    let high = RecommendedSettings::derive(&result(90, 90, 90), &thresholds()).unwrap();
    assert_eq!(high.dpi, 800);
    assert_eq!(high.polling_rate, 1000);
    assert!(!high.acceleration);
    assert_eq!(high.lift_off_distance, LiftOffLevel::Low);

    let low = RecommendedSettings::derive(&result(70, 70, 60), &thresholds()).unwrap();
    assert_eq!(low.dpi, 600);
    assert_eq!(low.polling_rate, 500);
    assert!(low.acceleration);
    assert_eq!(low.lift_off_distance, LiftOffLevel::Medium);
}

#[test]
fn bundle_apply_maps_lift_off_levels() {
    let mut settings = MouseSettings::default();
    let bundle = RecommendedSettings::derive(&result(90, 90, 90), &thresholds()).unwrap();
    bundle.apply_to(&mut settings);
    assert_eq!(settings.lift_off_distance, 1);

    let bundle = RecommendedSettings::derive(&result(70, 70, 90), &thresholds()).unwrap();
    bundle.apply_to(&mut settings);
    assert_eq!(settings.lift_off_distance, 2);
}
