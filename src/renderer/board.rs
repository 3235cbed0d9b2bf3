//! String, fret, and inlay (reference dot) rendering.
//!
//! None of these depend on the musical selection; they only depend on the
//! number and names of the open strings.

use crate::model::OpenString;
use super::constants::*;
use super::svg_builder::Surface;

// ═══════════════════════════════════════════════════════════════════════
// Strings
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_strings<S: Surface>(surface: &mut S, tuning: &[OpenString]) {
    for (i, string) in tuning.iter().enumerate() {
        let x = string_x(i);
        surface.line(x, STRING_START_Y, x, STRING_START_Y + STRING_LENGTH, STRING_COLOR, STRING_WIDTH);
        surface.text(x - STRING_LABEL_OFFSET_X, STRING_LABEL_Y, string.note, STRING_LABEL_SIZE, "bold");
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Frets
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_frets<S: Surface>(surface: &mut S, string_count: usize) {
    let end_x = fret_end_x(string_count);
    for fret in 0..FRET_COUNT {
        let y = fret_y(fret);
        surface.line(FRET_START_X, y, end_x, y, FRET_COLOR, FRET_WIDTH);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Reference dots
// ═══════════════════════════════════════════════════════════════════════

/// Centres of the inlay dots, in draw order: one per single-dot fret, then
/// the pair at the octave.
pub(super) fn reference_dot_positions(string_count: usize) -> Vec<(f64, f64)> {
    let width = fret_end_x(string_count);
    // Dots sit midway between fret `n - 1` and fret `n`.
    let between = |fret: usize| fret_y(fret) - FRET_SPACING / 2.0;

    let mut dots: Vec<(f64, f64)> = SINGLE_DOT_FRETS
        .iter()
        .map(|&fret| (width / 2.0 + 3.0 * STRING_WIDTH + 2.0, between(fret)))
        .collect();

    let y = between(DOUBLE_DOT_FRET);
    dots.push((width / 3.0 + 2.0 * STRING_WIDTH + 2.0, y));
    dots.push((2.0 * width / 3.0 + 4.0 * STRING_WIDTH + 4.0, y));
    dots
}

pub(super) fn render_reference_dots<S: Surface>(surface: &mut S, string_count: usize) {
    for (x, y) in reference_dot_positions(string_count) {
        surface.circle(x, y, REFERENCE_DOT_RADIUS, DOT_COLOR, DOT_COLOR, REFERENCE_DOT_STROKE_WIDTH);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_dots_with_a_pair_at_the_octave() {
        let dots = reference_dot_positions(6);
        assert_eq!(dots.len(), 6);

        let (a, b) = (dots[4], dots[5]);
        assert_eq!(a.1, b.1, "octave pair shares a fret");
        assert!(b.0 - a.0 > REFERENCE_DOT_RADIUS * 2.0, "octave pair must not overlap");
    }

    #[test]
    fn single_dots_sit_between_frets() {
        let dots = reference_dot_positions(6);
        // Between fret 2 and fret 3.
        assert_eq!(dots[0].1, (fret_y(2) + fret_y(3)) / 2.0);
        assert!(dots[..4].iter().all(|d| d.0 == dots[0].0));
    }
}
