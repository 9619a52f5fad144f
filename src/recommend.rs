use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::info;

use crate::config::RuleThresholds;
use crate::scoring::CalibrationResult;
use crate::settings::MouseSettings;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RecommendationKind {
    Sensitivity,
    Acceleration,
    Polling,
    Other,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
}

/// Ordered active collection. Owns id allocation so ids stay unique for the
/// collection's lifetime; entries are removed on apply/dismiss, never
/// archived. Duplicate kinds may accumulate across repeated calibrations.
#[derive(Debug, Clone, Default)]
pub struct RecommendationSet {
    items: Vec<Recommendation>,
    next_id: u64,
}

impl RecommendationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock advice shipped before any calibration has run.
    pub fn with_defaults() -> Self {
        let mut set = Self::new();
        set.add(
            "Reduce Sensitivity",
            "Lower your sensitivity by 10% to improve precision in FPS games",
            Impact::High,
            RecommendationKind::Sensitivity,
            Some("Counter-Strike 2".to_string()),
        );
        set.add(
            "Increase Polling Rate",
            "Increase polling rate to 1000Hz for smoother tracking",
            Impact::Medium,
            RecommendationKind::Polling,
            None,
        );
        set.add(
            "Disable Acceleration",
            "Turn off mouse acceleration for more consistent movements",
            Impact::High,
            RecommendationKind::Acceleration,
            Some("Valorant".to_string()),
        );
        set
    }

    pub fn items(&self) -> &[Recommendation] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocate the next id and append an entry.
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        impact: Impact,
        kind: RecommendationKind,
        game: Option<String>,
    ) -> String {
        let id = format!("rec{}", self.next_id);
        self.next_id += 1;
        self.items.push(Recommendation {
            id: id.clone(),
            title: title.to_string(),
            description: description.to_string(),
            impact,
            kind,
            game,
        });
        id
    }

    /// Rule set A: low sub-scores emit advice. No de-duplication against
    /// entries already present, so retakes can stack the same kind twice.
    pub fn extend_from_calibration(
        &mut self,
        result: &CalibrationResult,
        thresholds: &RuleThresholds,
    ) -> usize {
        let before = self.items.len();
        if result.accuracy < thresholds.accuracy_floor {
            self.add(
                "Lower DPI for Better Accuracy",
                "Your accuracy test shows you might benefit from a lower DPI setting",
                Impact::High,
                RecommendationKind::Sensitivity,
                None,
            );
        }
        if result.speed < thresholds.speed_floor {
            self.add(
                "Increase Polling Rate",
                "Your speed test indicates a higher polling rate could help",
                Impact::Medium,
                RecommendationKind::Polling,
                None,
            );
        }
        self.items.len() - before
    }

    /// Mutate settings according to the entry's kind, then remove the
    /// entry unconditionally (unrecognized kinds still get removed).
    /// Returns the applied entry, or None for an unknown id.
    pub fn apply(
        &mut self,
        id: &str,
        settings: &mut MouseSettings,
        thresholds: &RuleThresholds,
    ) -> Option<Recommendation> {
        let index = self.items.iter().position(|r| r.id == id)?;
        let rec = self.items.remove(index);

        match rec.kind {
            RecommendationKind::Sensitivity => {
                settings.dpi = (settings.dpi as f64 * thresholds.dpi_scale).round() as u32;
            }
            RecommendationKind::Polling => settings.polling_rate = 1000,
            RecommendationKind::Acceleration => settings.acceleration = false,
            RecommendationKind::Other => {}
        }

        info!(id = %rec.id, kind = %rec.kind, "recommendation applied");
        Some(rec)
    }

    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LiftOffLevel {
    Low,
    Medium,
}

/// Rule set B: the calibration-tab bundle, derived directly from the result
/// record once all three sub-scores are in. Independently defined from rule
/// set A and deliberately kept that way.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSettings {
    pub dpi: u32,
    pub polling_rate: u32,
    pub acceleration: bool,
    pub lift_off_distance: LiftOffLevel,
}

impl RecommendedSettings {
    pub fn derive(result: &CalibrationResult, thresholds: &RuleThresholds) -> Option<Self> {
        if !result.is_complete() {
            return None;
        }
        Some(Self {
            dpi: if result.accuracy > thresholds.dpi_cutoff {
                800
            } else {
                600
            },
            polling_rate: if result.speed > thresholds.polling_cutoff {
                1000
            } else {
                500
            },
            acceleration: result.tracking < thresholds.acceleration_cutoff,
            lift_off_distance: if result.overall > thresholds.lift_off_cutoff {
                LiftOffLevel::Low
            } else {
                LiftOffLevel::Medium
            },
        })
    }

    /// Write the bundle onto the live settings. Low maps to 1, medium to 2.
    pub fn apply_to(&self, settings: &mut MouseSettings) {
        settings.dpi = self.dpi;
        settings.polling_rate = self.polling_rate;
        settings.acceleration = self.acceleration;
        settings.lift_off_distance = match self.lift_off_distance {
            LiftOffLevel::Low => 1,
            LiftOffLevel::Medium => 2,
        };
    }
}
