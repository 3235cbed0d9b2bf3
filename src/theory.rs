//! Pitch-class arithmetic: resolving interval patterns against a root and
//! locating notes on a string.
//!
//! Everything here is a pure function of its inputs. Note names are spelled
//! with sharps on output and accepted with either accidental on input.

use log::warn;

use crate::model::{IntervalElement, ScaleInterval};

/// The twelve pitch classes, starting at C.
pub const CHROMATIC: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Frets per octave; a string repeats its pitch classes every twelve frets.
pub const OCTAVE: u8 = 12;

/// Parse a pitch-class name ("C", "f#", "Bb", "e") into 0..12 with C = 0.
///
/// Returns `None` for anything that is not a letter A–G followed by
/// optional `#`/`b` accidentals.
pub fn pitch_class(name: &str) -> Option<u8> {
    let mut chars = name.trim().chars();
    let base: i32 = match chars.next()?.to_ascii_uppercase() {
        'C' => 0, 'D' => 2, 'E' => 4, 'F' => 5,
        'G' => 7, 'A' => 9, 'B' => 11,
        _ => return None,
    };
    let mut alter = 0;
    for c in chars {
        match c {
            '#' => alter += 1,
            'b' => alter -= 1,
            _ => return None,
        }
    }
    Some((base + alter).rem_euclid(OCTAVE as i32) as u8)
}

/// Spell a pitch class (taken modulo 12) using sharps.
pub fn note_name(pitch_class: u8) -> &'static str {
    CHROMATIC[(pitch_class % OCTAVE) as usize]
}

/// Resolve an interval pattern against `root` into concrete note names,
/// preserving pattern order.
///
/// An unparseable root yields an empty sequence.
pub fn sequence_notes(root: &str, intervals: &[ScaleInterval]) -> Vec<IntervalElement> {
    let Some(root_pc) = pitch_class(root) else {
        warn!("cannot resolve root note '{root}'");
        return Vec::new();
    };
    intervals
        .iter()
        .map(|iv| IntervalElement {
            degree: iv.degree,
            note: note_name((root_pc + iv.semitones % OCTAVE) % OCTAVE).to_string(),
        })
        .collect()
}

/// Lowest fret (0..12) at which a string tuned to `open_string` sounds `note`.
pub fn fret_position(note: &str, open_string: &str) -> Option<u8> {
    let target = pitch_class(note)? as i32;
    let open = pitch_class(open_string)? as i32;
    Some((target - open).rem_euclid(OCTAVE as i32) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MAJOR_SCALE, MINOR_PENTATONIC_SCALE};

    #[test]
    fn parses_naturals_sharps_and_flats() {
        assert_eq!(pitch_class("C"), Some(0));
        assert_eq!(pitch_class("e"), Some(4));
        assert_eq!(pitch_class("F#"), Some(6));
        assert_eq!(pitch_class("Bb"), Some(10));
        assert_eq!(pitch_class("Cb"), Some(11));
        assert_eq!(pitch_class("B#"), Some(0));
        assert_eq!(pitch_class("H"), None);
        assert_eq!(pitch_class(""), None);
        assert_eq!(pitch_class("C7"), None);
    }

    #[test]
    fn e_major_scale_notes() {
        let notes: Vec<String> = sequence_notes("E", MAJOR_SCALE).into_iter().map(|e| e.note).collect();
        assert_eq!(notes, vec!["E", "F#", "G#", "A", "B", "C#", "D#"]);
    }

    #[test]
    fn degrees_are_carried_through() {
        let seq = sequence_notes("A", MINOR_PENTATONIC_SCALE);
        let pairs: Vec<(u8, &str)> = seq.iter().map(|e| (e.degree, e.note.as_str())).collect();
        assert_eq!(pairs, vec![(1, "A"), (3, "C"), (4, "D"), (5, "E"), (7, "G")]);
    }

    #[test]
    fn flat_root_is_spelled_with_sharps() {
        let seq = sequence_notes("Bb", &[ScaleInterval::new(1, 0), ScaleInterval::new(5, 7)]);
        assert_eq!(seq[0].note, "A#");
        assert_eq!(seq[1].note, "F");
    }

    #[test]
    fn unknown_root_gives_empty_sequence() {
        assert!(sequence_notes("X", MAJOR_SCALE).is_empty());
    }

    #[test]
    fn fret_positions_wrap_within_an_octave() {
        assert_eq!(fret_position("E", "E"), Some(0));
        assert_eq!(fret_position("G", "E"), Some(3));
        assert_eq!(fret_position("D#", "E"), Some(11));
        assert_eq!(fret_position("C", "e"), Some(8));
        assert_eq!(fret_position("Q", "E"), None);
    }
}
