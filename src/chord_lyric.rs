//! # Chord-over-Lyric Layout
//!
//! Places chord names above the lyric characters they are anchored to.
//!
//! ## Model
//! A [`ChordPosition`] anchors a chord name to a character offset in the
//! whole lyrics text (newlines included). Offsets are counted in chars.
//!
//! ## Layout
//! ```text
//! Am        G
//! Hello world, goodbye
//! ```
//! - Lyrics are split on `'\n'`; each line covers offsets `start..=start+len`.
//!   The upper bound is inclusive, so a chord sitting on a line's trailing
//!   newline stays on that line.
//! - A line with no chords gets no chord row at all.
//! - Chords are written into a row of spaces `len + CHORD_OVERRUN_SLACK`
//!   wide. Characters past the end of that row are dropped.
//! - Chords are written in set order; at overlapping cells the later chord
//!   wins.
//! - The row is cut to `max(len, last written cell + 1)`.
//!
//! Offsets are never renumbered when the lyrics change; a chord may end up
//! over a different syllable after an edit.

use serde::{Deserialize, Deserializer, Serialize};

/// Extra cells after the end of a lyric line that chord names may spill into.
pub const CHORD_OVERRUN_SLACK: usize = 20;

/// A chord name anchored at a character offset of the lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordPosition {
    pub chord: String,
    pub position: usize,
}

impl ChordPosition {
    pub fn new(chord: impl Into<String>, position: usize) -> Self {
        Self {
            chord: chord.into(),
            position,
        }
    }
}

/// Chord positions ordered by ascending offset.
///
/// Insertion is stable: a chord added at an offset that is already used goes
/// after the existing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChordSet(Vec<ChordPosition>);

impl ChordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert in offset order and return the index the chord landed at.
    pub fn insert(&mut self, chord: ChordPosition) -> usize {
        let idx = self.0.partition_point(|c| c.position <= chord.position);
        self.0.insert(idx, chord);
        idx
    }

    pub fn remove(&mut self, index: usize) -> Option<ChordPosition> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[ChordPosition] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChordPosition> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ChordPosition> for ChordSet {
    fn from_iter<I: IntoIterator<Item = ChordPosition>>(iter: I) -> Self {
        let mut set = ChordSet::new();
        for chord in iter {
            set.insert(chord);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ChordSet {
    type Item = &'a ChordPosition;
    type IntoIter = std::slice::Iter<'a, ChordPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for ChordSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut chords = Vec::<ChordPosition>::deserialize(deserializer)?;
        // stable, so equal offsets keep their stored order
        chords.sort_by_key(|c| c.position);
        Ok(Self(chords))
    }
}

/// One lyric line with the chord row that sits above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordLyricLine {
    /// `None` when no chord is anchored on this line.
    pub chords: Option<String>,
    pub lyrics: String,
}

impl ChordLyricLine {
    /// Display rows top to bottom: the chord row (if any), then the lyrics.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.chords
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.lyrics.as_str()))
    }
}

/// Lay out `lyrics` with `chords` above it, one entry per lyric line.
///
/// `chords` is expected in ascending offset order (as kept by [`ChordSet`]).
///
/// # Example
/// ```
/// use songbook::chord_lyric::{render_chord_lyrics, ChordPosition};
///
/// let lines = render_chord_lyrics("Hello world", &[ChordPosition::new("Am", 6)]);
/// assert_eq!(lines.len(), 1);
/// assert_eq!(lines[0].chords.as_deref(), Some("      Am   "));
/// assert_eq!(lines[0].lyrics, "Hello world");
/// ```
pub fn render_chord_lyrics(lyrics: &str, chords: &[ChordPosition]) -> Vec<ChordLyricLine> {
    if lyrics.is_empty() {
        return Vec::new();
    }

    let mut next_start = 0;
    lyrics
        .split('\n')
        .map(|line| {
            let len = line.chars().count();
            let start = next_start;
            let end = start + len;
            next_start = end + 1;

            let on_line = chords
                .iter()
                .filter(|c| c.position >= start && c.position <= end);

            ChordLyricLine {
                chords: chord_row(len, start, on_line),
                lyrics: line.to_string(),
            }
        })
        .collect()
}

fn chord_row<'a>(
    line_len: usize,
    line_start: usize,
    chords: impl Iterator<Item = &'a ChordPosition>,
) -> Option<String> {
    let mut chords = chords.peekable();
    chords.peek()?;

    let mut row = vec![' '; line_len + CHORD_OVERRUN_SLACK];
    let mut last_written = 0;

    for chord in chords {
        let offset = chord.position.saturating_sub(line_start);
        for (i, ch) in chord.chord.chars().enumerate() {
            let idx = offset + i;
            if let Some(cell) = row.get_mut(idx) {
                *cell = ch;
                last_written = last_written.max(idx);
            }
        }
    }

    row.truncate(line_len.max(last_written + 1));
    Some(row.into_iter().collect())
}
