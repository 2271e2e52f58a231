//! # Storage
//!
//! Songs live as one pretty-printed JSON file per song in a storage root,
//! next to an `index.json` listing `{id, title, artist}` for every song.
//!
//! ```text
//! <root>/
//!   index.json
//!   2f1c...e9.json
//!   77ab...01.json
//! ```
//!
//! ## Sub-modules
//! - `store` - [`SongStore`]: list/get/save/delete against one root
//! - `settings` - [`Settings`] and the [`SettingsStore`] file that holds them
//! - `migrate` - [`migrate_data`]: move a storage root to a new directory
//! - `paths` - [`default_app_dir`]: per-platform application data directory
//!
//! The storage root is always passed in. Nothing here keeps process-wide
//! state, so tests can point a store at a temporary directory.
//!
//! There is no locking or journaling. A failed write leaves whatever reached
//! the disk; failures are logged and returned.

mod migrate;
mod paths;
mod settings;
mod store;

pub use migrate::migrate_data;
pub use paths::{default_app_dir, APP_NAME};
pub use settings::{Settings, SettingsStore, SETTINGS_FILE};
pub use store::{SongStore, INDEX_FILE};

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SongbookError;

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SongbookError> {
    let text = fs::read_to_string(path).map_err(|e| SongbookError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| SongbookError::json(path, e))
}

pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SongbookError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| SongbookError::json(path, e))?;
    fs::write(path, text).map_err(|e| SongbookError::io(path, e))
}
