//! Data model for a fretboard diagram.
//!
//! `DiagramConfig` is the only mutable state a diagram holds; the tuning and
//! the arpeggio/scale catalogs are fixed tables built once and borrowed.

use serde::{Deserialize, Serialize};

use crate::catalog;

/// The user's current selection, redrawn in full whenever it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramConfig {
    /// Pitch-class name of the root (e.g. "E", "C#")
    pub root_note: String,
    /// Interval pattern shown when `show_scale_mode` is set
    pub scale: Vec<ScaleInterval>,
    /// Catalog name of the arpeggio shown when `show_scale_mode` is clear
    pub arpeggio: String,
    /// Label markers with note names (true) or scale degrees (false)
    pub show_note_names: bool,
    /// Show the scale (true) or the arpeggio (false)
    pub show_scale_mode: bool,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            root_note: "E".into(),
            scale: catalog::MAJOR_SCALE.to_vec(),
            arpeggio: "Major".into(),
            show_note_names: true,
            show_scale_mode: true,
        }
    }
}

/// One step of a scale or arpeggio pattern, relative to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScaleInterval {
    /// Functional degree (a flattened third is still degree 3)
    pub degree: u8,
    /// Distance above the root in semitones
    pub semitones: u8,
}

impl ScaleInterval {
    pub const fn new(degree: u8, semitones: u8) -> Self {
        Self { degree, semitones }
    }
}

/// A pattern step resolved against a concrete root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalElement {
    pub degree: u8,
    /// Pitch-class name, spelled with sharps
    pub note: String,
}

/// One entry of a tuning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenString {
    /// Note the string sounds unfretted
    pub note: &'static str,
    /// Conventional string number: 1 is the highest-pitched string
    pub string_number: u8,
}

/// A named chord outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arpeggio {
    pub name: &'static str,
    pub intervals: &'static [ScaleInterval],
}

/// A named scale pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub name: &'static str,
    pub intervals: &'static [ScaleInterval],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: DiagramConfig =
            serde_json::from_str(r#"{"root_note": "A", "show_note_names": false}"#).unwrap();
        assert_eq!(cfg.root_note, "A");
        assert!(!cfg.show_note_names);
        assert!(cfg.show_scale_mode);
        assert_eq!(cfg.arpeggio, "Major");
        assert_eq!(cfg.scale.len(), 7);
    }

    #[test]
    fn scale_intervals_deserialize_from_objects() {
        let cfg: DiagramConfig = serde_json::from_str(
            r#"{"scale": [{"degree": 1, "semitones": 0}, {"degree": 3, "semitones": 3}]}"#,
        )
        .unwrap();
        assert_eq!(cfg.scale, vec![ScaleInterval::new(1, 0), ScaleInterval::new(3, 3)]);
    }
}
