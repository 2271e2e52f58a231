//! # Error Types
//!
//! This module defines all error types for songbook.
//!
//! The layout functions ([`crate::tab`], [`crate::chord_lyric`]) cannot fail.
//! Errors come from the edges: reading and writing song files, parsing
//! documents, and validating user input.
//!
//! ## Error Types
//! - `Io` - a file or directory operation failed, with the path involved
//! - `Json` - a JSON file could not be parsed or written
//! - `InvalidJson` - JSON text could not be parsed
//! - `Yaml` - a YAML song could not be parsed
//! - `InvalidId` - a song id that cannot be used as a file name
//! - `MissingTitle` - a song was saved without a title
//! - `Validation` - user input outside the accepted range, with its location
//!
//! ## Usage
//! ```rust
//! use songbook::{validate_song, Song, SongbookError};
//!
//! let song = Song::new("");
//! match validate_song(&song) {
//!     Ok(()) => println!("ok"),
//!     Err(SongbookError::MissingTitle) => eprintln!("title is required"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SongbookError {
    /// A filesystem operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document (song, index or settings) is malformed.
    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON text that did not come from a file is malformed.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A YAML song is malformed.
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Ids name files in the storage root, so they must be plain file names.
    ///
    /// # Example
    /// ```
    /// # use songbook::SongbookError;
    /// let err = SongbookError::InvalidId("../escape".to_string());
    /// assert_eq!(err.to_string(), "Invalid song id: '../escape'");
    /// ```
    #[error("Invalid song id: '{0}'")]
    InvalidId(String),

    #[error("Title is required")]
    MissingTitle,

    /// Input validation error with its location in the song.
    ///
    /// # Example
    /// ```
    /// # use songbook::SongbookError;
    /// let err = SongbookError::Validation {
    ///     location: "section 1, block 2, note 3".to_string(),
    ///     message: "fret '25' is above 24".to_string(),
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Invalid input at section 1, block 2, note 3: fret '25' is above 24"
    /// );
    /// ```
    #[error("Invalid input at {location}: {message}")]
    Validation { location: String, message: String },
}

impl SongbookError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SongbookError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        SongbookError::Json {
            path: path.into(),
            source,
        }
    }

    /// True for an `Io` error whose cause is a missing file or directory.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SongbookError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
