//! # Public API
//!
//! Top-level entry points for working with song documents outside a store.
//!
//! ## Functions
//!
//! - [`parse_song()`] - Parse a song from JSON or YAML text
//! - [`load_song_file()`] - Read a song file, picking the format from its extension
//! - [`render_song_file()`] - Load and render a song file for reading
//! - [`check_song_file()`] - Load a song file and run input validation on it
//!
//! ## Typical Usage
//!
//! ```rust
//! use songbook::{parse_song, render_song, SongFormat};
//!
//! let source = r#"
//! title: Demo
//! sections:
//!   - id: s1
//!     name: Intro
//!     blocks:
//!       - id: b1
//!         type: tab
//!         tabData:
//!           - strings: { 1: "3" }
//! "#;
//!
//! let song = parse_song(source, SongFormat::Yaml)?;
//! let text = render_song(&song);
//! assert!(text.contains("e|--3---|"));
//! # Ok::<(), songbook::SongbookError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::{render_song, validate_song, Song, SongbookError};

/// Text format of a song document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongFormat {
    Json,
    Yaml,
}

impl SongFormat {
    /// `.yaml` / `.yml` files are YAML; everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                SongFormat::Yaml
            }
            _ => SongFormat::Json,
        }
    }
}

/// Parse a song document.
///
/// Missing song fields take the defaults of a new song; chord positions are
/// put in offset order.
pub fn parse_song(source: &str, format: SongFormat) -> Result<Song, SongbookError> {
    let song = match format {
        SongFormat::Json => serde_json::from_str(source)?,
        SongFormat::Yaml => serde_yaml::from_str(source)?,
    };
    Ok(song)
}

/// Read and parse a song file.
pub fn load_song_file(path: &Path) -> Result<Song, SongbookError> {
    let source = fs::read_to_string(path).map_err(|e| SongbookError::io(path, e))?;
    match SongFormat::from_path(path) {
        SongFormat::Json => serde_json::from_str(&source).map_err(|e| SongbookError::json(path, e)),
        SongFormat::Yaml => Ok(serde_yaml::from_str(&source)?),
    }
}

/// Load a song file and render it as text.
pub fn render_song_file(path: &Path) -> Result<String, SongbookError> {
    let song = load_song_file(path)?;
    Ok(render_song(&song))
}

/// Load a song file and validate it as the editor would.
pub fn check_song_file(path: &Path) -> Result<Song, SongbookError> {
    let song = load_song_file(path)?;
    validate_song(&song)?;
    Ok(song)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlockKind;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(SongFormat::from_path(Path::new("a.yaml")), SongFormat::Yaml);
        assert_eq!(SongFormat::from_path(Path::new("a.YML")), SongFormat::Yaml);
        assert_eq!(SongFormat::from_path(Path::new("a.json")), SongFormat::Json);
        assert_eq!(SongFormat::from_path(Path::new("noext")), SongFormat::Json);
    }

    #[test]
    fn test_parse_yaml_song() {
        let source = r#"
title: Yaml Song
capo: 3
sections:
  - id: s1
    name: Verse
    blocks:
      - id: b1
        type: chords-lyrics
        content: "Hello world"
        chordPositions:
          - { chord: G, position: 6 }
          - { chord: C, position: 0 }
"#;
        let song = parse_song(source, SongFormat::Yaml).unwrap();
        assert_eq!(song.capo, 3);
        assert_eq!(song.tempo, 120);
        match &song.sections[0].blocks[0].kind {
            BlockKind::ChordsLyrics(cl) => {
                assert_eq!(cl.chords.as_slice()[0].chord, "C");
                assert_eq!(cl.render()[0].chords.as_deref(), Some("C     G    "));
            }
            other => panic!("expected chords-lyrics, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_song("{", SongFormat::Json),
            Err(SongbookError::InvalidJson(_))
        ));
        assert!(matches!(
            parse_song("title: [", SongFormat::Yaml),
            Err(SongbookError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_and_check_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("song.json");
        fs::write(
            &path,
            r#"{"id": "1", "title": "File", "sections": [{"id": "s", "name": "A", "blocks": [
                {"id": "b", "type": "tab", "tabData": [{"strings": {"1": "30"}}]}
            ]}]}"#,
        )
        .unwrap();

        assert_eq!(load_song_file(&path).unwrap().title, "File");
        assert!(render_song_file(&path).unwrap().contains("e|--30---|"));
        assert!(matches!(
            check_song_file(&path),
            Err(SongbookError::Validation { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_song_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.is_not_found());
    }
}
