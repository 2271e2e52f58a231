//! # Tablature Layout
//!
//! Turns a sequence of [`TabNote`]s into six aligned ASCII lines, one per
//! guitar string, high e first.
//!
//! ## Layout
//! ```text
//! e|--3---0---|
//! B|-----12---|
//! G|----------|
//! D|----------|
//! A|----------|
//! E|----------|
//! ```
//! - Every line opens with `<name>|--` and closes with `--|`.
//! - Each note is a column `1 + width` chars wide, where `width` is the
//!   longest fret label in that note (at least 1). All six strings share the
//!   column width so multi-digit frets stay aligned.
//! - Labels are centered with dashes; an odd leftover puts the extra dash on
//!   the right.
//! - Consecutive columns are separated by a single dash.
//! - An empty note list renders an empty border, `e|---|`.
//!
//! Fret labels are rendered verbatim. Range checks belong to the input side
//! (see [`crate::validate`]).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pad::{center_pad, dashes, DASH};

/// Number of strings on a standard guitar.
pub const STRING_COUNT: usize = 6;

/// String names from string 1 (high e) to string 6 (low E).
pub const STRING_NAMES: [&str; STRING_COUNT] = ["e", "B", "G", "D", "A", "E"];

/// Name of a 1-based string index, if it is on the instrument.
pub fn string_name(string: u8) -> Option<&'static str> {
    let idx = usize::from(string).checked_sub(1)?;
    STRING_NAMES.get(idx).copied()
}

/// One column of tablature: the frets played together.
///
/// Keys are string indices (1 = high e ... 6 = low E). A missing key means
/// the string is not played.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabNote {
    #[serde(with = "string_keys")]
    pub strings: BTreeMap<u8, String>,
}

impl TabNote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`TabNote::set_fret`].
    pub fn with_fret(mut self, string: u8, label: impl Into<String>) -> Self {
        self.set_fret(string, label);
        self
    }

    pub fn set_fret(&mut self, string: u8, label: impl Into<String>) {
        self.strings.insert(string, label.into());
    }

    pub fn clear_fret(&mut self, string: u8) -> Option<String> {
        self.strings.remove(&string)
    }

    pub fn fret(&self, string: u8) -> Option<&str> {
        self.strings.get(&string).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Widest fret label in this note, never less than 1.
    pub fn column_width(&self) -> usize {
        self.strings
            .values()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(1)
    }
}

/// Short listing such as `e:3 B:12`, ordered by string.
impl fmt::Display for TabNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (string, label) in &self.strings {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match string_name(*string) {
                Some(name) => write!(f, "{}:{}", name, label)?,
                None => write!(f, "{}:{}", string, label)?,
            }
        }
        Ok(())
    }
}

/// Render notes as six tab lines, ordered `e B G D A E`.
///
/// # Example
/// ```
/// use songbook::tab::{render_tab, TabNote};
///
/// let notes = vec![TabNote::new().with_fret(1, "3")];
/// let lines = render_tab(&notes);
/// assert_eq!(lines[0], "e|--3---|");
/// assert_eq!(lines[1], "B|------|");
/// ```
pub fn render_tab(notes: &[TabNote]) -> [String; STRING_COUNT] {
    if notes.is_empty() {
        return STRING_NAMES.map(|name| format!("{}|{}|", name, dashes(3)));
    }

    let mut lines = STRING_NAMES.map(|name| format!("{}|--", name));

    for (i, note) in notes.iter().enumerate() {
        let total_width = 1 + note.column_width();

        for (line, string) in lines.iter_mut().zip(1u8..) {
            match note.fret(string) {
                Some(label) => line.push_str(&center_pad(label, total_width)),
                None => line.push_str(&dashes(total_width)),
            }
        }

        if i + 1 < notes.len() {
            for line in lines.iter_mut() {
                line.push(DASH);
            }
        }
    }

    for line in lines.iter_mut() {
        line.push_str("--|");
    }
    lines
}

/// Serde for the string map. Keys are written as JSON object keys ("1".."6")
/// and read back from either strings or integers (YAML).
mod string_keys {
    use std::collections::BTreeMap;
    use std::fmt;

    use serde::de::{self, Unexpected, Visitor};
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(PartialEq, Eq, PartialOrd, Ord)]
    struct StringIndex(u8);

    struct StringIndexVisitor;

    impl<'de> Visitor<'de> for StringIndexVisitor {
        type Value = StringIndex;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string number")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<StringIndex, E> {
            u8::try_from(v)
                .map(StringIndex)
                .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<StringIndex, E> {
            u8::try_from(v)
                .map(StringIndex)
                .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<StringIndex, E> {
            v.trim()
                .parse::<u8>()
                .map(StringIndex)
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    impl<'de> Deserialize<'de> for StringIndex {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(StringIndexVisitor)
        }
    }

    pub fn serialize<S: Serializer>(
        strings: &BTreeMap<u8, String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(strings.iter().map(|(k, v)| (k.to_string(), v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<u8, String>, D::Error> {
        let raw = BTreeMap::<StringIndex, String>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|(k, v)| (k.0, v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(frets: &[(u8, &str)]) -> TabNote {
        frets
            .iter()
            .fold(TabNote::new(), |n, (s, f)| n.with_fret(*s, *f))
    }

    #[test]
    fn test_empty_tab() {
        let lines = render_tab(&[]);
        assert_eq!(
            lines,
            ["e|---|", "B|---|", "G|---|", "D|---|", "A|---|", "E|---|"]
        );
    }

    #[test]
    fn test_single_note() {
        let lines = render_tab(&[note(&[(1, "3")])]);
        assert_eq!(lines[0], "e|--3---|");
        for line in &lines[1..] {
            assert!(!line.contains('3'));
            assert_eq!(line.len(), lines[0].len());
        }
        assert_eq!(lines[5], "E|------|");
    }

    #[test]
    fn test_wide_fret_forces_column_width() {
        let lines = render_tab(&[note(&[(1, "3"), (2, "12")])]);
        assert_eq!(lines[0], "e|---3---|");
        assert_eq!(lines[1], "B|--12---|");
        assert_eq!(lines[2], "G|-------|");

        // "<name>|--" + 3-wide cell
        for line in &lines {
            assert_eq!(line.len(), 4 + 3 + 3);
        }
    }

    #[test]
    fn test_separator_between_notes_only() {
        let lines = render_tab(&[note(&[(1, "0")]), note(&[(2, "1")])]);
        assert_eq!(lines[0], "e|--0------|");
        assert_eq!(lines[1], "B|-----1---|");
        assert_eq!(lines[2], "G|---------|");
    }

    #[test]
    fn test_column_widths_are_per_note() {
        let lines = render_tab(&[note(&[(6, "12")]), note(&[(6, "3")])]);
        // 3-wide column, separator, 2-wide column
        assert_eq!(lines[5], "E|--12--3---|");
        assert_eq!(lines[0], "e|----------|");
    }

    #[test]
    fn test_chord_shape_aligned() {
        let c_major = note(&[(2, "1"), (3, "0"), (4, "2"), (5, "3")]);
        let lines = render_tab(&[c_major]);
        assert_eq!(lines[0], "e|------|");
        assert_eq!(lines[1], "B|--1---|");
        assert_eq!(lines[4], "A|--3---|");
    }

    #[test]
    fn test_out_of_range_string_still_widens_column() {
        let lines = render_tab(&[note(&[(1, "5"), (9, "123")])]);
        assert_eq!(lines[0], "e|---5----|");
        assert!(lines.iter().all(|l| !l.contains("123")));
    }

    #[test]
    fn test_render_is_idempotent() {
        let notes = vec![note(&[(1, "3")]), note(&[(2, "10"), (3, "9")])];
        assert_eq!(render_tab(&notes), render_tab(&notes));
    }

    #[test]
    fn test_string_name() {
        assert_eq!(string_name(1), Some("e"));
        assert_eq!(string_name(6), Some("E"));
        assert_eq!(string_name(0), None);
        assert_eq!(string_name(7), None);
    }

    #[test]
    fn test_clear_fret() {
        let mut n = note(&[(1, "3"), (2, "12")]);
        assert_eq!(n.clear_fret(2), Some("12".to_string()));
        assert_eq!(n.clear_fret(2), None);
        assert_eq!(n.fret(2), None);
        assert_eq!(n.column_width(), 1);

        assert_eq!(n.clear_fret(1), Some("3".to_string()));
        assert!(n.is_empty());
        assert_eq!(render_tab(&[n])[0], "e|------|");
    }

    #[test]
    fn test_display_summary() {
        let n = note(&[(3, "2"), (1, "12")]);
        assert_eq!(n.to_string(), "e:12 G:2");
    }

    #[test]
    fn test_json_uses_string_keys() {
        let n = note(&[(1, "3"), (2, "12")]);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, r#"{"strings":{"1":"3","2":"12"}}"#);
        let back: TabNote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }

    #[test]
    fn test_yaml_integer_keys() {
        let n: TabNote = serde_yaml::from_str("strings:\n  1: \"3\"\n  6: \"0\"\n").unwrap();
        assert_eq!(n.fret(1), Some("3"));
        assert_eq!(n.fret(6), Some("0"));
    }
}
