//! # Text Rendering
//!
//! Display text for blocks and whole songs. [`render_block`] is the one
//! function behind both the editor preview and the read-only view, so a block
//! looks the same while it is being edited and after it is saved.
//!
//! ## Song Layout
//! ```text
//! Title
//! Artist
//! Key: G | Tempo: 96 BPM | Capo: 2
//!
//! [Verse]
//!       Am
//! Hello world
//!
//! e|--3---|
//! ...
//! ```
//! The artist and details lines are left out when empty. `Tempo` and `Capo`
//! only appear when above zero. Blocks inside a section are separated by a
//! blank line; tab blocks without notes and blocks that render no lines are
//! skipped.

use crate::song::{Block, BlockKind, Song};

/// Display lines for one block, exactly as a monospaced view shows them.
pub fn render_block(block: &Block) -> Vec<String> {
    match &block.kind {
        BlockKind::Tab(tab) => tab.render().to_vec(),
        BlockKind::ChordsLyrics(cl) => cl
            .render()
            .iter()
            .flat_map(|line| line.rows().map(str::to_string))
            .collect(),
        BlockKind::Chords(text) | BlockKind::Lyrics(text) => {
            if text.content.is_empty() {
                Vec::new()
            } else {
                text.content.split('\n').map(str::to_string).collect()
            }
        }
    }
}

/// Render a song for reading.
pub fn render_song(song: &Song) -> String {
    let mut out = String::new();

    out.push_str(&song.title);
    out.push('\n');
    if !song.artist.is_empty() {
        out.push_str(&song.artist);
        out.push('\n');
    }

    let details = song_details(song);
    if !details.is_empty() {
        out.push_str(&details.join(" | "));
        out.push('\n');
    }

    for section in &song.sections {
        out.push('\n');
        out.push_str(&format!("[{}]\n", section.name));

        let mut first = true;
        for block in section.blocks.iter().filter(|b| shown_in_viewer(b)) {
            let lines = render_block(block);
            if lines.is_empty() {
                continue;
            }
            if !first {
                out.push('\n');
            }
            first = false;
            for line in lines {
                out.push_str(&line);
                out.push('\n');
            }
        }
    }

    out
}

fn song_details(song: &Song) -> Vec<String> {
    let mut details = Vec::new();
    if !song.key.is_empty() {
        details.push(format!("Key: {}", song.key));
    }
    if song.tempo > 0 {
        details.push(format!("Tempo: {} BPM", song.tempo));
    }
    if song.capo > 0 {
        details.push(format!("Capo: {}", song.capo));
    }
    details
}

// The editor previews an empty tab as a bare border; the viewer leaves it out.
fn shown_in_viewer(block: &Block) -> bool {
    match &block.kind {
        BlockKind::Tab(tab) => !tab.notes.is_empty(),
        BlockKind::Chords(_) | BlockKind::Lyrics(_) | BlockKind::ChordsLyrics(_) => true,
    }
}
