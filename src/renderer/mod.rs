//! Fretboard renderer — draws strings, frets, inlay dots, and note markers
//! for the current selection onto a [`Surface`].
//!
//! Every change to the selection clears the surface and redraws the whole
//! diagram; there is no incremental update.

mod board;
mod constants;
mod markers;
mod svg_builder;

use log::{debug, trace, warn};

use crate::catalog::{find_arpeggio, ARPEGGIOS, STANDARD_TUNING};
use crate::error::FretboardError;
use crate::model::*;
use crate::theory::sequence_notes;
use board::{render_frets, render_reference_dots, render_strings};
use markers::render_note_markers;

pub use constants::{
    DOUBLE_DOT_FRET, FIFTH_COLOR, FRET_COUNT, OTHER_DEGREE_COLOR, ROOT_COLOR, SEVENTH_COLOR,
    SINGLE_DOT_FRETS, THIRD_COLOR,
};
pub use markers::{label_x, marker_fill_colour};
pub use svg_builder::{Surface, SvgSurface};

// ═══════════════════════════════════════════════════════════════════════
// FretboardDiagram
// ═══════════════════════════════════════════════════════════════════════

/// A fretboard diagram bound to one drawing surface.
///
/// The tuning and arpeggio catalog are borrowed for the diagram's lifetime;
/// [`FretboardDiagram::new`] uses the built-in static tables.
#[derive(Debug)]
pub struct FretboardDiagram<'a, S: Surface> {
    surface: S,
    config: DiagramConfig,
    tuning: &'a [OpenString],
    arpeggios: &'a [Arpeggio],
}

impl<S: Surface> FretboardDiagram<'static, S> {
    /// Bind `surface` with standard tuning and the built-in arpeggio catalog.
    /// Nothing is drawn until the first update or [`render`](Self::render).
    pub fn new(surface: S, config: DiagramConfig) -> Self {
        Self::with_tables(surface, config, STANDARD_TUNING, ARPEGGIOS)
    }
}

impl<'a, S: Surface> FretboardDiagram<'a, S> {
    pub fn with_tables(
        surface: S,
        config: DiagramConfig,
        tuning: &'a [OpenString],
        arpeggios: &'a [Arpeggio],
    ) -> Self {
        Self { surface, config, tuning, arpeggios }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    // ── Updates ─────────────────────────────────────────────────────

    pub fn set_root(&mut self, root: &str) -> Result<(), FretboardError> {
        self.update(|c| c.root_note = root.to_string())
    }

    /// Replace the scale and switch to scale mode.
    pub fn set_scale(&mut self, scale: Vec<ScaleInterval>) -> Result<(), FretboardError> {
        self.update(|c| {
            c.scale = scale;
            c.show_scale_mode = true;
        })
    }

    /// Select an arpeggio by catalog name and switch to arpeggio mode.
    ///
    /// Fails with [`FretboardError::NotFound`] if the name is not in the
    /// catalog; the previous selection and drawing are kept.
    pub fn set_arpeggio(&mut self, name: &str) -> Result<(), FretboardError> {
        self.update(|c| {
            c.arpeggio = name.to_string();
            c.show_scale_mode = false;
        })
    }

    pub fn show_note_name_labels(&mut self) -> Result<(), FretboardError> {
        self.update(|c| c.show_note_names = true)
    }

    pub fn show_degree_labels(&mut self) -> Result<(), FretboardError> {
        self.update(|c| c.show_note_names = false)
    }

    /// Apply one change and redraw, restoring the previous configuration if
    /// the redraw fails.
    fn update(&mut self, change: impl FnOnce(&mut DiagramConfig)) -> Result<(), FretboardError> {
        let previous = self.config.clone();
        change(&mut self.config);
        if let Err(e) = self.render() {
            warn!("redraw failed ({e}); restoring previous configuration");
            self.config = previous;
            return Err(e);
        }
        Ok(())
    }

    // ── Redraw ──────────────────────────────────────────────────────

    /// The interval pattern currently on display.
    pub fn active_sequence(&self) -> Result<&[ScaleInterval], FretboardError> {
        if self.config.show_scale_mode {
            Ok(&self.config.scale)
        } else {
            Ok(find_arpeggio(self.arpeggios, &self.config.arpeggio)?.intervals)
        }
    }

    /// Clear the surface and draw the full diagram for the current configuration.
    ///
    /// The pattern is resolved before anything is cleared, so a failed lookup
    /// leaves the last drawing in place.
    pub fn render(&mut self) -> Result<(), FretboardError> {
        let notes = sequence_notes(&self.config.root_note, self.active_sequence()?);
        let string_count = self.tuning.len();

        self.surface.clear();

        trace!("drawing {string_count} strings");
        render_strings(&mut self.surface, self.tuning);

        trace!("drawing {FRET_COUNT} frets");
        render_frets(&mut self.surface, string_count);

        trace!("drawing reference dots");
        render_reference_dots(&mut self.surface, string_count);

        let markers = render_note_markers(
            &mut self.surface,
            self.tuning,
            &notes,
            self.config.show_note_names,
        );

        let pattern = if self.config.show_scale_mode {
            "scale".to_string()
        } else {
            format!("arpeggio '{}'", self.config.arpeggio)
        };
        debug!(
            "rendered fretboard: root {}, {pattern} ({} notes), {markers} markers",
            self.config.root_note,
            notes.len(),
        );
        Ok(())
    }
}
