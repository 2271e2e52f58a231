pub mod api;
pub mod chord_lyric;
pub mod error;
pub mod pad;
pub mod render;
pub mod song;
pub mod storage;
pub mod tab;
pub mod validate;

pub use api::{check_song_file, load_song_file, parse_song, render_song_file, SongFormat};
pub use chord_lyric::{render_chord_lyrics, ChordLyricLine, ChordPosition, ChordSet};
pub use error::*;
pub use render::{render_block, render_song};
pub use song::*;
pub use storage::{migrate_data, Settings, SettingsStore, SongStore};
pub use tab::{render_tab, TabNote, STRING_NAMES};
pub use validate::{parse_fret_input, validate_song};
