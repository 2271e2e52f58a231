//! # Input Validation
//!
//! The layout functions render whatever they are given. This module holds the
//! checks the editing side applies before data reaches a song:
//! - the title is not blank
//! - tab notes only use strings 1-6
//! - fret labels are whole numbers from 0 to 24, written in digits
//! - chord labels are not blank
//! - chord offsets fall inside the lyrics (`0..=len` in chars)
//!
//! Errors name the offending spot as `section N, block N, note N` (1-based).
//!
//! ## Example
//! ```rust
//! use songbook::validate::parse_fret_input;
//!
//! assert_eq!(parse_fret_input("").unwrap(), None);
//! assert_eq!(parse_fret_input("12").unwrap(), Some("12".to_string()));
//! assert!(parse_fret_input("25").is_err());
//! ```

use crate::error::SongbookError;
use crate::song::{BlockKind, ChordLyricBlock, Song, TabBlock};
use crate::tab::STRING_COUNT;

/// Highest fret accepted for input.
pub const MAX_FRET: u32 = 24;

/// Validate a whole song, stopping at the first problem.
pub fn validate_song(song: &Song) -> Result<(), SongbookError> {
    if song.title.trim().is_empty() {
        return Err(SongbookError::MissingTitle);
    }

    for (s, section) in song.sections.iter().enumerate() {
        for (b, block) in section.blocks.iter().enumerate() {
            let location = format!("section {}, block {}", s + 1, b + 1);
            match &block.kind {
                BlockKind::Tab(tab) => validate_tab(tab, &location)?,
                BlockKind::ChordsLyrics(cl) => validate_chord_lyrics(cl, &location)?,
                BlockKind::Chords(_) | BlockKind::Lyrics(_) => {}
            }
        }
    }
    Ok(())
}

fn validate_tab(tab: &TabBlock, location: &str) -> Result<(), SongbookError> {
    for (n, note) in tab.notes.iter().enumerate() {
        let location = format!("{}, note {}", location, n + 1);
        for (string, label) in &note.strings {
            if *string == 0 || usize::from(*string) > STRING_COUNT {
                return Err(invalid(
                    &location,
                    format!("string {} is not between 1 and {}", string, STRING_COUNT),
                ));
            }
            check_fret(label).map_err(|message| invalid(&location, message))?;
        }
    }
    Ok(())
}

fn validate_chord_lyrics(block: &ChordLyricBlock, location: &str) -> Result<(), SongbookError> {
    let len = block.lyrics.chars().count();
    for (c, chord) in block.chords.iter().enumerate() {
        let location = format!("{}, chord {}", location, c + 1);
        if chord.chord.trim().is_empty() {
            return Err(invalid(&location, "chord name is blank".to_string()));
        }
        if chord.position > len {
            return Err(invalid(
                &location,
                format!(
                    "'{}' at offset {} is past the end of the lyrics ({} chars)",
                    chord.chord, chord.position, len
                ),
            ));
        }
    }
    Ok(())
}

/// Parse the text of a fret input field.
///
/// An empty field clears the string (`Ok(None)`). Otherwise the text must be
/// digits naming a fret up to [`MAX_FRET`]; it is kept verbatim.
pub fn parse_fret_input(value: &str) -> Result<Option<String>, SongbookError> {
    if value.is_empty() {
        return Ok(None);
    }
    check_fret(value).map_err(|message| invalid("fret input", message))?;
    Ok(Some(value.to_string()))
}

fn check_fret(label: &str) -> Result<(), String> {
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("fret '{}' is not a number", label));
    }
    // all digits, so only overflow can fail the parse
    match label.parse::<u32>() {
        Ok(fret) if fret <= MAX_FRET => Ok(()),
        _ => Err(format!("fret '{}' is above {}", label, MAX_FRET)),
    }
}

fn invalid(location: &str, message: String) -> SongbookError {
    SongbookError::Validation {
        location: location.to_string(),
        message,
    }
}
