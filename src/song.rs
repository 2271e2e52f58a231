//! # Song Document Types
//!
//! This module defines the document model stored for each song.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   ├── id, title, artist, key, tempo, capo, tuning, favorite
//!   └── Vec<Section>
//!         ├── id, name
//!         └── Vec<Block>
//!               ├── id
//!               └── BlockKind (enum)
//!                     ├── Tab(TabBlock)                -> Vec<TabNote>
//!                     ├── Chords(TextBlock)            -> content
//!                     ├── Lyrics(TextBlock)            -> content
//!                     └── ChordsLyrics(ChordLyricBlock) -> lyrics + ChordSet
//! ```
//!
//! ## JSON Shape
//! Field names follow the files the desktop app has always written:
//! ```json
//! {
//!   "id": "b1",
//!   "type": "chords-lyrics",
//!   "content": "Hello world",
//!   "chordPositions": [{ "chord": "Am", "position": 6 }]
//! }
//! ```
//! Tab blocks keep their notes under `"tabData"`. Every song field is
//! optional on input and falls back to the defaults of a new song.
//!
//! ## Editing
//! Notes and chords are only ever appended, removed whole, or cleared. A
//! lyric edit replaces the text and leaves chord offsets untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chord_lyric::{render_chord_lyrics, ChordLyricLine, ChordPosition, ChordSet};
use crate::tab::{render_tab, TabNote, STRING_COUNT};

pub const DEFAULT_TEMPO: u32 = 120;
pub const DEFAULT_TUNING: &str = "Standard";
pub const NEW_SECTION_NAME: &str = "New Section";

pub(crate) fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub key: String,
    pub tempo: u32,
    pub capo: u32,
    pub tuning: String,
    pub favorite: bool,
    pub sections: Vec<Section>,
}

impl Default for Song {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            artist: String::new(),
            key: String::new(),
            tempo: DEFAULT_TEMPO,
            capo: 0,
            tuning: DEFAULT_TUNING.to_string(),
            favorite: false,
            sections: Vec::new(),
        }
    }
}

impl Song {
    /// A fresh song with a new id and default details.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Append an empty section named "New Section".
    pub fn add_section(&mut self) -> &mut Section {
        self.sections.push(Section::new(NEW_SECTION_NAME));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    pub fn remove_section(&mut self, id: &str) -> Option<Section> {
        let idx = self.sections.iter().position(|s| s.id == id)?;
        Some(self.sections.remove(idx))
    }

    pub fn section_mut(&mut self, id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// The entry kept for this song in the store index.
    pub fn metadata(&self) -> SongMetadata {
        SongMetadata {
            id: self.id.clone(),
            title: self.title.clone(),
            artist: self.artist.clone(),
        }
    }
}

/// Index entry for the song list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongMetadata {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            blocks: Vec::new(),
        }
    }

    pub fn add_block(&mut self, kind: BlockKind) -> &mut Block {
        self.blocks.push(Block::new(kind));
        let last = self.blocks.len() - 1;
        &mut self.blocks[last]
    }

    pub fn remove_block(&mut self, index: usize) -> Option<Block> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    #[serde(flatten)]
    pub kind: BlockKind,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Self { id: new_id(), kind }
    }
}

/// The four kinds of block content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockKind {
    Tab(TabBlock),
    Chords(TextBlock),
    Lyrics(TextBlock),
    ChordsLyrics(ChordLyricBlock),
}

impl BlockKind {
    pub fn tab() -> Self {
        BlockKind::Tab(TabBlock::default())
    }

    pub fn chords(content: impl Into<String>) -> Self {
        BlockKind::Chords(TextBlock::new(content))
    }

    pub fn lyrics(content: impl Into<String>) -> Self {
        BlockKind::Lyrics(TextBlock::new(content))
    }

    pub fn chords_lyrics(lyrics: impl Into<String>) -> Self {
        BlockKind::ChordsLyrics(ChordLyricBlock::new(lyrics))
    }

    /// The `"type"` tag written to JSON.
    pub fn type_name(&self) -> &'static str {
        match self {
            BlockKind::Tab(_) => "tab",
            BlockKind::Chords(_) => "chords",
            BlockKind::Lyrics(_) => "lyrics",
            BlockKind::ChordsLyrics(_) => "chords-lyrics",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBlock {
    #[serde(rename = "tabData", default)]
    pub notes: Vec<TabNote>,
}

impl TabBlock {
    /// Append a note. Notes with no fret are not added.
    pub fn add_note(&mut self, note: TabNote) -> bool {
        if note.is_empty() {
            return false;
        }
        self.notes.push(note);
        true
    }

    pub fn remove_note(&mut self, index: usize) -> Option<TabNote> {
        (index < self.notes.len()).then(|| self.notes.remove(index))
    }

    pub fn clear(&mut self) {
        self.notes.clear();
    }

    pub fn render(&self) -> [String; STRING_COUNT] {
        render_tab(&self.notes)
    }
}

/// Plain text for `chords` and `lyrics` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub content: String,
}

impl TextBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordLyricBlock {
    #[serde(rename = "content", default)]
    pub lyrics: String,
    #[serde(rename = "chordPositions", default)]
    pub chords: ChordSet,
}

impl ChordLyricBlock {
    pub fn new(lyrics: impl Into<String>) -> Self {
        Self {
            lyrics: lyrics.into(),
            chords: ChordSet::new(),
        }
    }

    /// Anchor a chord at `position`. The label is trimmed; a blank label is
    /// ignored and returns `None`, otherwise the chord's index in the set.
    pub fn add_chord(&mut self, label: &str, position: usize) -> Option<usize> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        Some(self.chords.insert(ChordPosition::new(label, position)))
    }

    pub fn remove_chord(&mut self, index: usize) -> Option<ChordPosition> {
        self.chords.remove(index)
    }

    /// Replace the lyrics. Chord offsets are kept as they are.
    pub fn set_lyrics(&mut self, lyrics: impl Into<String>) {
        self.lyrics = lyrics.into();
    }

    pub fn render(&self) -> Vec<ChordLyricLine> {
        render_chord_lyrics(&self.lyrics, self.chords.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_song_defaults() {
        let song = Song::new("Wonderwall");
        assert_eq!(song.title, "Wonderwall");
        assert_eq!(song.tempo, 120);
        assert_eq!(song.capo, 0);
        assert_eq!(song.tuning, "Standard");
        assert!(!song.favorite);
        assert!(song.sections.is_empty());
        assert!(Uuid::parse_str(&song.id).is_ok());
        assert_ne!(song.id, Song::new("Wonderwall").id);
    }

    #[test]
    fn test_sections_and_blocks() {
        let mut song = Song::new("Test");
        let section_id = song.add_section().id.clone();
        assert_eq!(song.sections[0].name, "New Section");

        let section = song.section_mut(&section_id).unwrap();
        section.add_block(BlockKind::tab());
        section.add_block(BlockKind::lyrics("la la"));
        assert_eq!(section.blocks.len(), 2);
        assert!(section.remove_block(5).is_none());
        let removed = section.remove_block(0).unwrap();
        assert_eq!(removed.kind.type_name(), "tab");

        assert!(song.remove_section("missing").is_none());
        assert!(song.remove_section(&section_id).is_some());
        assert!(song.sections.is_empty());
    }

    #[test]
    fn test_tab_block_editing() {
        let mut tab = TabBlock::default();
        assert!(!tab.add_note(TabNote::new()));
        assert!(tab.add_note(TabNote::new().with_fret(1, "3")));
        assert!(tab.add_note(TabNote::new().with_fret(2, "5")));
        assert_eq!(tab.notes.len(), 2);

        assert_eq!(tab.remove_note(0).unwrap().fret(1), Some("3"));
        assert!(tab.remove_note(3).is_none());
        assert_eq!(tab.render()[1], "B|--5---|");

        tab.clear();
        assert_eq!(tab.render()[0], "e|---|");
    }

    #[test]
    fn test_chord_lyric_block_editing() {
        let mut block = ChordLyricBlock::new("Hello world");
        assert_eq!(block.add_chord("   ", 0), None);
        assert_eq!(block.add_chord(" G ", 6), Some(0));
        assert_eq!(block.add_chord("C", 0), Some(0));
        assert_eq!(block.chords.as_slice()[1].chord, "G");

        // offsets stay put when the lyrics change
        block.set_lyrics("Hi world");
        assert_eq!(block.chords.as_slice()[1].position, 6);
        assert_eq!(block.render()[0].chords.as_deref(), Some("C     G "));

        assert_eq!(block.remove_chord(0).unwrap().chord, "C");
        assert_eq!(block.chords.len(), 1);
    }

    #[test]
    fn test_block_json_shape() {
        let mut block = ChordLyricBlock::new("Hello world");
        block.add_chord("Am", 6);
        let block = Block {
            id: "b1".to_string(),
            kind: BlockKind::ChordsLyrics(block),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "b1",
                "type": "chords-lyrics",
                "content": "Hello world",
                "chordPositions": [{ "chord": "Am", "position": 6 }]
            })
        );

        let tab = Block {
            id: "b2".to_string(),
            kind: BlockKind::Tab(TabBlock {
                notes: vec![TabNote::new().with_fret(1, "3")],
            }),
        };
        assert_eq!(
            serde_json::to_value(&tab).unwrap(),
            serde_json::json!({
                "id": "b2",
                "type": "tab",
                "tabData": [{ "strings": { "1": "3" } }]
            })
        );
    }

    #[test]
    fn test_reads_app_written_blocks() {
        let json = r#"[
            {"id": "a", "type": "tab", "content": "", "tabData": [{"strings": {"1": "0", "6": "12"}}]},
            {"id": "b", "type": "chords", "content": "G C D"},
            {"id": "c", "type": "lyrics", "content": "words"},
            {"id": "d", "type": "chords-lyrics", "content": "la la", "chordPositions": [{"chord": "E", "position": 3}]},
            {"id": "e", "type": "chords-lyrics", "content": ""}
        ]"#;
        let blocks: Vec<Block> = serde_json::from_str(json).unwrap();
        match &blocks[0].kind {
            BlockKind::Tab(tab) => assert_eq!(tab.notes[0].fret(6), Some("12")),
            other => panic!("expected tab, got {:?}", other),
        }
        assert_eq!(blocks[1].kind, BlockKind::chords("G C D"));
        assert_eq!(blocks[2].kind, BlockKind::lyrics("words"));
        match &blocks[3].kind {
            BlockKind::ChordsLyrics(cl) => assert_eq!(cl.chords.as_slice()[0].chord, "E"),
            other => panic!("expected chords-lyrics, got {:?}", other),
        }
        assert_eq!(blocks[4].kind, BlockKind::chords_lyrics(""));
    }

    #[test]
    fn test_song_fields_default_on_load() {
        let song: Song = serde_json::from_str(r#"{"id": "x", "title": "Only title"}"#).unwrap();
        assert_eq!(song.tempo, 120);
        assert_eq!(song.tuning, "Standard");
        assert!(song.sections.is_empty());
    }

    #[test]
    fn test_metadata() {
        let mut song = Song::new("Title");
        song.artist = "Artist".to_string();
        let meta = song.metadata();
        assert_eq!(meta.id, song.id);
        assert_eq!(meta.title, "Title");
        assert_eq!(meta.artist, "Artist");

        let old: SongMetadata = serde_json::from_str(r#"{"id":"1","title":"t"}"#).unwrap();
        assert_eq!(old.artist, "");
    }
}
