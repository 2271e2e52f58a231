//! # Settings
//!
//! User preferences kept as camelCase JSON. Loading never fails: a missing
//! file is created with defaults and an unreadable one is logged and replaced
//! by defaults in memory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SongbookError;

use super::{read_json, write_json};

pub const SETTINGS_FILE: &str = "settings.json";

/// Directory under the app dir used when no storage path is configured.
const DEFAULT_DATA_DIR: &str = "data";

/// User settings. Fields missing from the file take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Where songs are stored. `None` means `<app dir>/data`.
    pub storage_path: Option<PathBuf>,
    /// Skip the "unsaved changes" prompt when leaving the editor.
    pub disable_save_warning: bool,
}

/// The settings file and the app directory it belongs to.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    app_dir: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>, app_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            app_dir: app_dir.into(),
        }
    }

    /// `<app_dir>/settings.json`.
    pub fn in_app_dir(app_dir: impl Into<PathBuf>) -> Self {
        let app_dir = app_dir.into();
        Self {
            path: app_dir.join(SETTINGS_FILE),
            app_dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings, writing a default file first if there is none.
    ///
    /// An unreadable or malformed file is logged and the defaults are used.
    pub fn load(&self) -> Settings {
        if let Err(e) = self.ensure_file() {
            tracing::warn!(path = %self.path.display(), error = %e, "creating settings file failed");
        }

        match read_json(&self.path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "reading settings failed");
                Settings::default()
            }
        }
    }

    pub fn update(&self, settings: &Settings) -> Result<(), SongbookError> {
        self.ensure_file()?;
        write_json(&self.path, settings)?;
        tracing::debug!(path = %self.path.display(), "settings updated");
        Ok(())
    }

    pub fn default_storage_root(&self) -> PathBuf {
        self.app_dir.join(DEFAULT_DATA_DIR)
    }

    /// The configured storage path, or the default root when unset or empty.
    pub fn storage_root(&self) -> PathBuf {
        self.load()
            .storage_path
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| self.default_storage_root())
    }

    fn ensure_file(&self) -> Result<(), SongbookError> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SongbookError::io(parent, e))?;
        }
        write_json(&self.path, &Settings::default())
    }
}
