//! Fixed lookup tables: the standard tuning and the arpeggio and scale catalogs.
//!
//! Degrees follow the usual shorthand, so a minor third is degree 3 at three
//! semitones and a flattened seventh is degree 7 at ten.

use crate::error::FretboardError;
use crate::model::{Arpeggio, OpenString, Scale, ScaleInterval};

const fn iv(degree: u8, semitones: u8) -> ScaleInterval {
    ScaleInterval::new(degree, semitones)
}

// ── Tuning ──────────────────────────────────────────────────────────

/// Standard six-string tuning, ordered low E to high e.
pub const STANDARD_TUNING: &[OpenString] = &[
    OpenString { note: "E", string_number: 6 },
    OpenString { note: "A", string_number: 5 },
    OpenString { note: "D", string_number: 4 },
    OpenString { note: "G", string_number: 3 },
    OpenString { note: "B", string_number: 2 },
    OpenString { note: "e", string_number: 1 },
];

// ── Scales ──────────────────────────────────────────────────────────

pub const MAJOR_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 4), iv(4, 5), iv(5, 7), iv(6, 9), iv(7, 11)];
pub const NATURAL_MINOR_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 3), iv(4, 5), iv(5, 7), iv(6, 8), iv(7, 10)];
const HARMONIC_MINOR_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 3), iv(4, 5), iv(5, 7), iv(6, 8), iv(7, 11)];
const MELODIC_MINOR_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 3), iv(4, 5), iv(5, 7), iv(6, 9), iv(7, 11)];
pub const MAJOR_PENTATONIC_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 4), iv(5, 7), iv(6, 9)];
pub const MINOR_PENTATONIC_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(3, 3), iv(4, 5), iv(5, 7), iv(7, 10)];
const BLUES_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(3, 3), iv(4, 5), iv(5, 6), iv(5, 7), iv(7, 10)];
const DORIAN_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 3), iv(4, 5), iv(5, 7), iv(6, 9), iv(7, 10)];
const PHRYGIAN_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 1), iv(3, 3), iv(4, 5), iv(5, 7), iv(6, 8), iv(7, 10)];
const LYDIAN_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 4), iv(4, 6), iv(5, 7), iv(6, 9), iv(7, 11)];
const MIXOLYDIAN_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 2), iv(3, 4), iv(4, 5), iv(5, 7), iv(6, 9), iv(7, 10)];
const LOCRIAN_SCALE: &[ScaleInterval] =
    &[iv(1, 0), iv(2, 1), iv(3, 3), iv(4, 5), iv(5, 6), iv(6, 8), iv(7, 10)];

pub const SCALES: &[Scale] = &[
    Scale { name: "Major", intervals: MAJOR_SCALE },
    Scale { name: "Natural Minor", intervals: NATURAL_MINOR_SCALE },
    Scale { name: "Harmonic Minor", intervals: HARMONIC_MINOR_SCALE },
    Scale { name: "Melodic Minor", intervals: MELODIC_MINOR_SCALE },
    Scale { name: "Major Pentatonic", intervals: MAJOR_PENTATONIC_SCALE },
    Scale { name: "Minor Pentatonic", intervals: MINOR_PENTATONIC_SCALE },
    Scale { name: "Blues", intervals: BLUES_SCALE },
    Scale { name: "Dorian", intervals: DORIAN_SCALE },
    Scale { name: "Phrygian", intervals: PHRYGIAN_SCALE },
    Scale { name: "Lydian", intervals: LYDIAN_SCALE },
    Scale { name: "Mixolydian", intervals: MIXOLYDIAN_SCALE },
    Scale { name: "Locrian", intervals: LOCRIAN_SCALE },
];

// ── Arpeggios ───────────────────────────────────────────────────────

pub const ARPEGGIOS: &[Arpeggio] = &[
    Arpeggio { name: "Major", intervals: &[iv(1, 0), iv(3, 4), iv(5, 7)] },
    Arpeggio { name: "Minor", intervals: &[iv(1, 0), iv(3, 3), iv(5, 7)] },
    Arpeggio { name: "Augmented", intervals: &[iv(1, 0), iv(3, 4), iv(5, 8)] },
    Arpeggio { name: "Diminished", intervals: &[iv(1, 0), iv(3, 3), iv(5, 6)] },
    Arpeggio { name: "Dominant 7th", intervals: &[iv(1, 0), iv(3, 4), iv(5, 7), iv(7, 10)] },
    Arpeggio { name: "Major 7th", intervals: &[iv(1, 0), iv(3, 4), iv(5, 7), iv(7, 11)] },
    Arpeggio { name: "Minor 7th", intervals: &[iv(1, 0), iv(3, 3), iv(5, 7), iv(7, 10)] },
    Arpeggio { name: "Half Diminished", intervals: &[iv(1, 0), iv(3, 3), iv(5, 6), iv(7, 10)] },
    Arpeggio { name: "Diminished 7th", intervals: &[iv(1, 0), iv(3, 3), iv(5, 6), iv(7, 9)] },
];

/// Look up an arpeggio by exact name. There is no fallback pattern.
pub fn find_arpeggio<'a>(catalog: &'a [Arpeggio], name: &str) -> Result<&'a Arpeggio, FretboardError> {
    catalog
        .iter()
        .find(|a| a.name == name)
        .ok_or_else(|| FretboardError::NotFound { name: name.to_string() })
}

/// Look up a scale in [`SCALES`] by exact name.
pub fn find_scale(name: &str) -> Result<&'static Scale, FretboardError> {
    SCALES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FretboardError::NotFound { name: name.to_string() })
}
