//! # Song Store
//!
//! One pretty-printed JSON file per song plus `index.json`, a list of song
//! metadata, under a single root directory. The index is rewritten on every
//! save and delete so it always matches the song files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SongbookError;
use crate::song::{Song, SongMetadata};

use super::{read_json, write_json};

pub const INDEX_FILE: &str = "index.json";

/// Song documents and their index under one storage root.
#[derive(Debug, Clone)]
pub struct SongStore {
    root: PathBuf,
}

impl SongStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    /// File holding the song with `id`. Ids must be plain file names.
    pub fn song_path(&self, id: &str) -> Result<PathBuf, SongbookError> {
        check_id(id)?;
        Ok(self.root.join(format!("{}.json", id)))
    }

    /// Create the root and an empty index if either is missing.
    pub fn ensure_data_dir(&self) -> Result<(), SongbookError> {
        fs::create_dir_all(&self.root).map_err(|e| SongbookError::io(&self.root, e))?;

        let index = self.index_path();
        if !index.exists() {
            tracing::debug!(path = %index.display(), "creating empty song index");
            write_json(&index, &Vec::<SongMetadata>::new())?;
        }
        Ok(())
    }

    /// Every entry of the index, in insertion order.
    pub fn list(&self) -> Result<Vec<SongMetadata>, SongbookError> {
        self.ensure_data_dir()?;
        read_json(&self.index_path())
    }

    /// Load a song. A song with no file is `Ok(None)`.
    pub fn get(&self, id: &str) -> Result<Option<Song>, SongbookError> {
        let path = self.song_path(id)?;
        self.ensure_data_dir()?;

        match read_json::<Song>(&path) {
            Ok(song) => {
                tracing::debug!(id, "loaded song");
                Ok(Some(song))
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(id, "song not found");
                Ok(None)
            }
            Err(e) => {
                tracing::error!(id, error = %e, "reading song failed");
                Err(e)
            }
        }
    }

    /// Write the song file, then add or replace its index entry.
    pub fn save(&self, song: &Song) -> Result<(), SongbookError> {
        if song.title.trim().is_empty() {
            return Err(SongbookError::MissingTitle);
        }
        let path = self.song_path(&song.id)?;
        self.ensure_data_dir()?;

        write_json(&path, song)?;

        let mut songs = self.list()?;
        let metadata = song.metadata();
        match songs.iter_mut().find(|s| s.id == song.id) {
            Some(entry) => *entry = metadata,
            None => songs.push(metadata),
        }
        write_json(&self.index_path(), &songs)?;

        tracing::debug!(id = %song.id, title = %song.title, "saved song");
        Ok(())
    }

    /// Remove the song file and its index entry. A missing file is logged and
    /// the index is still updated.
    pub fn delete(&self, id: &str) -> Result<(), SongbookError> {
        let path = self.song_path(id)?;
        self.ensure_data_dir()?;

        if let Err(e) = fs::remove_file(&path) {
            tracing::warn!(id, path = %path.display(), error = %e, "failed to delete song file");
        }

        let mut songs = self.list()?;
        songs.retain(|s| s.id != id);
        write_json(&self.index_path(), &songs)?;

        tracing::debug!(id, "deleted song");
        Ok(())
    }
}

// Ids become `<id>.json` in the root, so they may not leave it or land on the
// index. The index check ignores case for case-insensitive filesystems.
fn check_id(id: &str) -> Result<(), SongbookError> {
    let bad = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(|c: char| c == '/' || c == '\\' || c == '\0')
        || format!("{}.json", id).eq_ignore_ascii_case(INDEX_FILE);
    if bad {
        return Err(SongbookError::InvalidId(id.to_string()));
    }
    Ok(())
}
