//! fretlib — guitar fretboard diagrams as SVG.
//!
//! Draws strings, frets, and inlay dots, then overlays one marker per note of
//! the selected scale or arpeggio on every string, coloured by scale degree and
//! labelled with either the note name or the degree.
//!
//! # Example
//! ```
//! use fretlib::{DiagramConfig, FretboardDiagram, SvgSurface, STANDARD_TUNING};
//!
//! let surface = SvgSurface::for_strings(STANDARD_TUNING.len());
//! let mut diagram = FretboardDiagram::new(surface, DiagramConfig::default());
//! diagram.set_root("A").unwrap();
//! diagram.set_arpeggio("Minor 7th").unwrap();
//! let svg = diagram.surface().build();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod renderer;
pub mod theory;

#[cfg(target_os = "android")]
pub mod android;

pub use catalog::{find_arpeggio, find_scale, ARPEGGIOS, SCALES, STANDARD_TUNING};
pub use error::FretboardError;
pub use model::*;
pub use renderer::{FretboardDiagram, Surface, SvgSurface};

/// Parse a diagram configuration from JSON. Missing fields take their defaults.
pub fn config_from_json(json: &str) -> Result<DiagramConfig, FretboardError> {
    Ok(serde_json::from_str(json)?)
}

/// Convert a configuration to a JSON string.
pub fn config_to_json(config: &DiagramConfig) -> Result<String, FretboardError> {
    Ok(serde_json::to_string_pretty(config)?)
}

/// Render one configuration against standard tuning and return the SVG.
pub fn render_config_to_svg(config: &DiagramConfig) -> Result<String, FretboardError> {
    let surface = SvgSurface::for_strings(STANDARD_TUNING.len());
    let mut diagram = FretboardDiagram::new(surface, config.clone());
    diagram.render()?;
    Ok(diagram.into_surface().build())
}

/// Parse a JSON configuration and render it to SVG.
/// Convenience function combining parsing and rendering.
pub fn render_json_to_svg(json: &str) -> Result<String, FretboardError> {
    let config = config_from_json(json)?;
    render_config_to_svg(&config)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render a JSON diagram configuration and return SVG as a C string.
/// Returns null on invalid input or an unknown arpeggio.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// # Safety
/// `config_json` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_json(config_json: *const c_char) -> *mut c_char {
    if config_json.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(config_json) };
    let json = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    match render_json_to_svg(json) {
        Ok(svg) => CString::new(svg).unwrap_or_default().into_raw(),
        Err(e) => {
            log::warn!("fretlib_render_json: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
