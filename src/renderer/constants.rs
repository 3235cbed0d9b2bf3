//! Shared constants for the fretboard renderer (all in SVG user units).
//!
//! Strings run vertically, frets horizontally; fret 0 (the nut) is at the top.

// ── Strings ─────────────────────────────────────────────────────────
pub(super) const STRING_START_X: f64 = 30.0;
pub(super) const STRING_START_Y: f64 = 30.0;
pub(super) const STRING_SPACING: f64 = 60.0; // horizontal distance between strings
pub(super) const STRING_WIDTH: f64 = 2.0;
pub(super) const STRING_LABEL_OFFSET_X: f64 = 7.0; // open-string label sits left of its string
pub(super) const STRING_LABEL_Y: f64 = 15.0;
pub(super) const STRING_LABEL_SIZE: &str = "1.5em";

// ── Frets ───────────────────────────────────────────────────────────
pub const FRET_COUNT: usize = 13; // nut plus twelve frets
pub(super) const FRET_WIDTH: f64 = 6.0;
pub(super) const FRET_START_X: f64 = STRING_START_X;
pub(super) const FRET_START_Y: f64 = STRING_START_Y + FRET_WIDTH / 2.0;
pub(super) const FRET_SPACING: f64 = 80.0; // vertical distance between frets
pub(super) const STRING_LENGTH: f64 = FRET_COUNT as f64 * (FRET_SPACING + 1.0);

// ── Reference dots (inlays) ─────────────────────────────────────────
pub const SINGLE_DOT_FRETS: [usize; 4] = [3, 5, 7, 9];
pub const DOUBLE_DOT_FRET: usize = 12;
pub(super) const REFERENCE_DOT_RADIUS: f64 = 4.0;
pub(super) const REFERENCE_DOT_STROKE_WIDTH: f64 = 3.0;

// ── Note markers ────────────────────────────────────────────────────
pub(super) const MARKER_RADIUS: f64 = 15.0;
pub(super) const MARKER_STROKE_WIDTH: f64 = 3.0;
pub(super) const MARKER_LABEL_OFFSET_Y: f64 = 5.0; // text baseline below marker centre
pub(super) const MARKER_LABEL_SIZE: &str = "1em";
pub(super) const DEFAULT_LABEL_OFFSET_X: f64 = -4.5;

// ── Canvas ──────────────────────────────────────────────────────────
pub(super) const CANVAS_MARGIN_BOTTOM: f64 = 30.0;

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const STRING_COLOR: &str = "white";
pub(super) const FRET_COLOR: &str = "white";
pub(super) const DOT_COLOR: &str = "#000";
pub(super) const MARKER_STROKE_COLOR: &str = "#000";
pub const ROOT_COLOR: &str = "#ff7f7f";
pub const THIRD_COLOR: &str = "#7fbf7f";
pub const FIFTH_COLOR: &str = "#bfbfbf";
pub const SEVENTH_COLOR: &str = "#bf7fbf";
pub const OTHER_DEGREE_COLOR: &str = "#fff";

// ── Derived geometry ────────────────────────────────────────────────

/// X of the string drawn in tuning-table slot `index` (0 = leftmost).
pub(super) fn string_x(index: usize) -> f64 {
    STRING_START_X + index as f64 * STRING_SPACING
}

/// Y of fret line `fret` (0 = nut).
pub(super) fn fret_y(fret: usize) -> f64 {
    FRET_START_Y + fret as f64 * FRET_SPACING
}

/// Right-hand end of every fret line; the fret lines reach just past the
/// last string.
pub(super) fn fret_end_x(string_count: usize) -> f64 {
    string_count as f64 * (STRING_SPACING - 1.0) - 32.0
}

/// Canvas (width, height) needed for `string_count` strings.
pub(super) fn canvas_size(string_count: usize) -> (f64, f64) {
    let width = string_x(string_count.saturating_sub(1)) + STRING_START_X;
    let height = STRING_START_Y + STRING_LENGTH + CANVAS_MARGIN_BOTTOM;
    (width.max(fret_end_x(string_count) + STRING_START_X), height)
}
