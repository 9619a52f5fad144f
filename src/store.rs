use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TnResult, TunerError};
use crate::profiles::GameProfile;
use crate::scoring::CalibrationResult;
use crate::settings::MouseSettings;

pub const EXPORT_VERSION: &str = "1.0";

const KEY_SETTINGS: &str = "mousetuner_settings";
const KEY_PROFILES: &str = "mousetuner_profiles";
const KEY_CALIBRATION: &str = "mousetuner_calibration";

/// Everything a user can carry between installs. `version` and
/// `export_date` are required on import; the three payload fields apply
/// independently and may each be absent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub settings: Option<MouseSettings>,
    pub profiles: Option<Vec<GameProfile>>,
    pub calibration: Option<CalibrationResult>,
    pub export_date: String,
    pub version: String,
}

/// Key-value persistence: one JSON record per key in a data directory,
/// optionally suffixed by a user id. Last write wins; concurrent writers
/// are out of scope.
#[derive(Debug, Clone)]
pub struct TunerStore {
    dir: PathBuf,
}

impl TunerStore {
    pub fn open(dir: impl Into<PathBuf>) -> TnResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, key: &str, user: Option<&str>) -> PathBuf {
        match user {
            Some(user) => self.dir.join(format!("{}_{}.json", key, user)),
            None => self.dir.join(format!("{}.json", key)),
        }
    }

    fn write_record<T: Serialize>(&self, key: &str, user: Option<&str>, value: &T) -> TnResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.record_path(key, user), json)?;
        Ok(())
    }

    fn read_record<T: DeserializeOwned>(&self, key: &str, user: Option<&str>) -> TnResult<Option<T>> {
        let path = self.record_path(key, user);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    pub fn save_settings(&self, settings: &MouseSettings, user: Option<&str>) -> TnResult<()> {
        settings.validate()?;
        self.write_record(KEY_SETTINGS, user, settings)
    }

    pub fn load_settings(&self, user: Option<&str>) -> TnResult<Option<MouseSettings>> {
        self.read_record(KEY_SETTINGS, user)
    }

    pub fn save_profiles(&self, profiles: &[GameProfile], user: Option<&str>) -> TnResult<()> {
        self.write_record(KEY_PROFILES, user, &profiles)
    }

    pub fn load_profiles(&self, user: Option<&str>) -> TnResult<Option<Vec<GameProfile>>> {
        self.read_record(KEY_PROFILES, user)
    }

    pub fn save_calibration(&self, results: &CalibrationResult, user: Option<&str>) -> TnResult<()> {
        self.write_record(KEY_CALIBRATION, user, results)
    }

    pub fn load_calibration(&self, user: Option<&str>) -> TnResult<Option<CalibrationResult>> {
        self.read_record(KEY_CALIBRATION, user)
    }

    /// Remove the three user records. Missing records are not an error.
    pub fn clear(&self, user: Option<&str>) -> TnResult<()> {
        for key in [KEY_SETTINGS, KEY_PROFILES, KEY_CALIBRATION] {
            let path = self.record_path(key, user);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }

    pub fn export(&self, user: Option<&str>) -> TnResult<ExportBundle> {
        Ok(ExportBundle {
            settings: self.load_settings(user)?,
            profiles: self.load_profiles(user)?,
            calibration: self.load_calibration(user)?,
            export_date: Utc::now().to_rfc3339(),
            version: EXPORT_VERSION.to_string(),
        })
    }

    pub fn export_json(&self, user: Option<&str>) -> TnResult<String> {
        Ok(serde_json::to_string_pretty(&self.export(user)?)?)
    }

    /// Import a previously exported bundle. Rejects payloads missing
    /// `version` or `exportDate` before touching any record; present
    /// payload fields are then applied independently.
    pub fn import_json(&self, data: &str, user: Option<&str>) -> TnResult<()> {
        let raw: serde_json::Value = serde_json::from_str(data)
            .map_err(|e| TunerError::Validation(format!("Invalid export data: {}", e)))?;

        if raw.get("version").is_none() || raw.get("exportDate").is_none() {
            return Err(TunerError::Validation(
                "Invalid export data format: missing version or exportDate".into(),
            ));
        }

        let bundle: ExportBundle = serde_json::from_value(raw)
            .map_err(|e| TunerError::Validation(format!("Invalid export data: {}", e)))?;

        if bundle.version != EXPORT_VERSION {
            warn!(version = %bundle.version, "importing bundle from a different export version");
        }

        if let Some(settings) = &bundle.settings {
            self.save_settings(settings, user)?;
        }
        if let Some(profiles) = &bundle.profiles {
            self.save_profiles(profiles, user)?;
        }
        if let Some(calibration) = &bundle.calibration {
            self.save_calibration(calibration, user)?;
        }
        Ok(())
    }
}
