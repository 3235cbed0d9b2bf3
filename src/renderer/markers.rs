//! Note marker rendering: one labelled circle per (string, pattern note).

use log::warn;

use crate::model::{IntervalElement, OpenString};
use crate::theory::fret_position;
use super::constants::*;
use super::svg_builder::Surface;

/// Marker fill for a scale degree. Root, third, fifth, and seventh each get
/// their own colour; every other degree is white.
pub fn marker_fill_colour(degree: u8) -> &'static str {
    match degree {
        1 => ROOT_COLOR,
        3 => THIRD_COLOR,
        5 => FIFTH_COLOR,
        7 => SEVENTH_COLOR,
        _ => OTHER_DEGREE_COLOR,
    }
}

/// X for a marker label so it reads centred on a marker at `cx`.
/// Sharps are wider than naturals, so they shift further left.
pub fn label_x(label: &str, cx: f64) -> f64 {
    let offset = match label {
        "A" | "B" | "D" | "E" => -5.0,
        "C" | "G" => -6.0,
        "A#" | "F#" => -9.0,
        "C#" | "D#" => -10.0,
        "G#" => -10.5,
        _ => DEFAULT_LABEL_OFFSET_X,
    };
    cx + offset
}

/// X of the string with conventional number `string_number` (1 = rightmost).
fn marker_x(string_count: usize, string_number: u8) -> f64 {
    let slot = string_count as f64 - string_number as f64;
    STRING_START_X + slot * STRING_SPACING
}

/// Draw a marker for every note of `notes` on every string of `tuning`.
/// Returns the number of markers drawn.
pub(super) fn render_note_markers<S: Surface>(
    surface: &mut S,
    tuning: &[OpenString],
    notes: &[IntervalElement],
    show_note_names: bool,
) -> usize {
    let mut drawn = 0;
    for string in tuning {
        let x = marker_x(tuning.len(), string.string_number);
        for element in notes {
            let Some(fret) = fret_position(&element.note, string.note) else {
                warn!(
                    "skipping marker: cannot place '{}' on open string '{}'",
                    element.note, string.note
                );
                continue;
            };
            render_marker(surface, x, fret_y(fret as usize), element, show_note_names);
            drawn += 1;
        }
    }
    drawn
}

fn render_marker<S: Surface>(
    surface: &mut S,
    cx: f64,
    cy: f64,
    element: &IntervalElement,
    show_note_names: bool,
) {
    surface.circle(
        cx, cy, MARKER_RADIUS,
        marker_fill_colour(element.degree),
        MARKER_STROKE_COLOR,
        MARKER_STROKE_WIDTH,
    );

    let label = if show_note_names {
        element.note.clone()
    } else {
        element.degree.to_string()
    };
    surface.text(label_x(&label, cx), cy + MARKER_LABEL_OFFSET_Y, &label, MARKER_LABEL_SIZE, "normal");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::STANDARD_TUNING;
    use crate::renderer::SvgSurface;

    #[test]
    fn fill_colour_by_degree() {
        assert_eq!(marker_fill_colour(1), "#ff7f7f");
        assert_eq!(marker_fill_colour(3), "#7fbf7f");
        assert_eq!(marker_fill_colour(5), "#bfbfbf");
        assert_eq!(marker_fill_colour(7), "#bf7fbf");
        assert_eq!(marker_fill_colour(9), "#fff");
        assert_eq!(marker_fill_colour(2), "#fff");
        assert_eq!(marker_fill_colour(0), "#fff");
    }

    #[test]
    fn label_offsets() {
        assert_eq!(label_x("A", 100.0), 95.0);
        assert_eq!(label_x("C#", 100.0), 90.0);
        assert_eq!(label_x("G#", 100.0), 89.5);
        // Unlisted labels, including degree numbers, use the default.
        assert_eq!(label_x("F", 100.0), 95.5);
        assert_eq!(label_x("3", 100.0), 95.5);
    }

    #[test]
    fn string_one_is_rightmost() {
        assert_eq!(marker_x(6, 6), STRING_START_X);
        assert_eq!(marker_x(6, 1), STRING_START_X + 5.0 * STRING_SPACING);
    }

    #[test]
    fn degree_labels_when_note_names_hidden() {
        let mut svg = SvgSurface::new(400.0, 1200.0);
        let notes = vec![IntervalElement { degree: 5, note: "B".into() }];
        let drawn = render_note_markers(&mut svg, &STANDARD_TUNING[..1], &notes, false);
        assert_eq!(drawn, 1);
        // Open low E string, B is at fret 7.
        assert!(svg.elements()[0].contains(&format!(r#"cy="{:.1}""#, fret_y(7))));
        assert!(svg.elements()[1].ends_with(">5</text>"));
    }

    #[test]
    fn unresolvable_notes_are_skipped() {
        let mut svg = SvgSurface::new(400.0, 1200.0);
        let notes = vec![IntervalElement { degree: 1, note: "?".into() }];
        assert_eq!(render_note_markers(&mut svg, STANDARD_TUNING, &notes, true), 0);
        assert!(svg.elements().is_empty());
    }
}
