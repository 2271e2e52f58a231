//! # Data Migration
//!
//! Moves the song files to a new storage root when the user picks a new data
//! directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SongbookError;

/// Move every file from `old` into `new`, then remove `old` if it is empty.
///
/// Files are renamed when possible and copied then deleted otherwise (for
/// example across filesystems). A missing `old` directory means there is
/// nothing to migrate.
pub fn migrate_data(old: &Path, new: &Path) -> Result<(), SongbookError> {
    match fs::metadata(old) {
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(from = %old.display(), "no existing data to migrate");
            return Ok(());
        }
        Err(e) => return Err(SongbookError::io(old, e)),
    }
    if old == new {
        return Ok(());
    }

    fs::create_dir_all(new).map_err(|e| SongbookError::io(new, e))?;

    let entries = fs::read_dir(old).map_err(|e| SongbookError::io(old, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| SongbookError::io(old, e))?;
        let from = entry.path();
        let to = new.join(entry.file_name());

        if fs::rename(&from, &to).is_ok() {
            continue;
        }
        if from.is_dir() {
            tracing::warn!(path = %from.display(), "skipping directory that could not be moved");
            continue;
        }
        fs::copy(&from, &to).map_err(|e| SongbookError::io(&from, e))?;
        fs::remove_file(&from).map_err(|e| SongbookError::io(&from, e))?;
    }

    if let Err(e) = fs::remove_dir(old) {
        tracing::debug!(path = %old.display(), error = %e, "old data directory left in place");
    }

    tracing::info!(from = %old.display(), to = %new.display(), "migrated song data");
    Ok(())
}
