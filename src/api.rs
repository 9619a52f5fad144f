use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::config::Config;
use crate::error::{TnResult, TunerError};
use crate::profiles::{self, GameProfile};
use crate::recommend::{Recommendation, RecommendationSet, RecommendedSettings};
use crate::scoring::CalibrationResult;
use crate::settings::MouseSettings;
use crate::store::TunerStore;

/// Live per-user state behind the facade: the single settings record, the
/// profile list, the active recommendation collection and the current
/// calibration result.
#[derive(Debug)]
pub struct LiveState {
    pub settings: MouseSettings,
    pub profiles: Vec<GameProfile>,
    pub recommendations: RecommendationSet,
    pub calibration: CalibrationResult,
}

/// Composition root for everything stateful. Owned by the caller and
/// injected into consumers; no module-level globals.
pub struct TunerState {
    store: TunerStore,
    user: Option<String>,
    config: Config,
    live: Mutex<LiveState>,
}

impl TunerState {
    /// Load persisted records where present, defaults otherwise.
    pub fn init(store: TunerStore, user: Option<String>, config: Config) -> TnResult<Self> {
        let user_ref = user.as_deref();
        let settings = store.load_settings(user_ref)?.unwrap_or_default();
        let profile_list = store
            .load_profiles(user_ref)?
            .unwrap_or_else(profiles::default_profiles);
        let calibration = store.load_calibration(user_ref)?.unwrap_or_default();

        Ok(Self {
            store,
            user,
            config,
            live: Mutex::new(LiveState {
                settings,
                profiles: profile_list,
                recommendations: RecommendationSet::with_defaults(),
                calibration,
            }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &TunerStore {
        &self.store
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    fn lock(&self) -> TnResult<MutexGuard<'_, LiveState>> {
        self.live
            .lock()
            .map_err(|e| TunerError::Config(e.to_string()))
    }

    pub fn settings(&self) -> TnResult<MouseSettings> {
        Ok(self.lock()?.settings.clone())
    }

    /// Replace the live settings record. Validated before anything is
    /// persisted or handed on.
    pub fn set_settings(&self, settings: MouseSettings) -> TnResult<MouseSettings> {
        settings.validate()?;
        self.store.save_settings(&settings, self.user.as_deref())?;
        let mut live = self.lock()?;
        live.settings = settings;
        Ok(live.settings.clone())
    }

    pub fn profiles(&self) -> TnResult<Vec<GameProfile>> {
        Ok(self.lock()?.profiles.clone())
    }

    pub fn upsert_profile(&self, profile: GameProfile) -> TnResult<Vec<GameProfile>> {
        let mut live = self.lock()?;
        profiles::upsert_profile(&mut live.profiles, profile);
        self.store
            .save_profiles(&live.profiles, self.user.as_deref())?;
        Ok(live.profiles.clone())
    }

    pub fn delete_profile(&self, id: &str) -> TnResult<bool> {
        let mut live = self.lock()?;
        let removed = profiles::delete_profile(&mut live.profiles, id);
        if removed {
            self.store
                .save_profiles(&live.profiles, self.user.as_deref())?;
        }
        Ok(removed)
    }

    pub fn recommendations(&self) -> TnResult<Vec<Recommendation>> {
        Ok(self.lock()?.recommendations.items().to_vec())
    }

    /// Apply by id: settings mutate per kind, the entry always leaves the
    /// collection, and the mutated settings are persisted.
    pub fn apply_recommendation(&self, id: &str) -> TnResult<Option<Recommendation>> {
        let mut live = self.lock()?;
        let LiveState {
            settings,
            recommendations,
            ..
        } = &mut *live;
        let applied = recommendations.apply(id, settings, &self.config.thresholds);
        if applied.is_some() {
            self.store.save_settings(settings, self.user.as_deref())?;
        }
        Ok(applied)
    }

    pub fn dismiss_recommendation(&self, id: &str) -> TnResult<bool> {
        Ok(self.lock()?.recommendations.dismiss(id))
    }

    pub fn calibration(&self) -> TnResult<CalibrationResult> {
        Ok(self.lock()?.calibration)
    }

    /// Persist a calibration result and run rule set A over it. Returns
    /// how many recommendations the run added.
    pub fn save_calibration(&self, result: CalibrationResult) -> TnResult<usize> {
        self.store.save_calibration(&result, self.user.as_deref())?;
        let mut live = self.lock()?;
        live.calibration = result;
        let added = live
            .recommendations
            .extend_from_calibration(&result, &self.config.thresholds);
        if added > 0 {
            info!(added, "calibration produced new recommendations");
        }
        Ok(added)
    }

    /// Rule set B bundle for the current calibration, if complete.
    pub fn recommended_bundle(&self) -> TnResult<Option<RecommendedSettings>> {
        let live = self.lock()?;
        Ok(RecommendedSettings::derive(
            &live.calibration,
            &self.config.thresholds,
        ))
    }

    /// Write the rule set B bundle onto the live settings and persist.
    pub fn apply_recommended_bundle(&self) -> TnResult<Option<MouseSettings>> {
        let mut live = self.lock()?;
        let Some(bundle) = RecommendedSettings::derive(&live.calibration, &self.config.thresholds)
        else {
            return Ok(None);
        };
        bundle.apply_to(&mut live.settings);
        self.store
            .save_settings(&live.settings, self.user.as_deref())?;
        Ok(Some(live.settings.clone()))
    }
}
