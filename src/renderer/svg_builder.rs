//! Drawing surface — the primitive calls a diagram issues, and an SVG
//! implementation that accumulates elements and produces the final string.

use super::constants::canvas_size;

// ═══════════════════════════════════════════════════════════════════════
// Surface
// ═══════════════════════════════════════════════════════════════════════

/// Fire-and-forget drawing primitives a diagram renders through.
pub trait Surface {
    /// Remove every element drawn so far.
    fn clear(&mut self);

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64);

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64);

    /// `font_size` is any CSS length ("1.5em", "14"); `weight` a CSS font weight.
    fn text(&mut self, x: f64, y: f64, content: &str, font_size: &str, weight: &str);
}

// ═══════════════════════════════════════════════════════════════════════
// SvgSurface
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    elements: Vec<String>,
    width: f64,
    height: f64,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
        }
    }

    /// A canvas sized to fit a fretboard with `string_count` strings.
    pub fn for_strings(string_count: usize) -> Self {
        let (width, height) = canvas_size(string_count);
        Self::new(width, height)
    }

    /// Elements currently on the surface, in draw order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn build(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}" style="font-family: sans-serif;">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        ));
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, stroke: &str, stroke_width: f64) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{:.1}"/>"#,
            cx, cy, r, fill, stroke, stroke_width
        ));
    }

    fn text(&mut self, x: f64, y: f64, content: &str, font_size: &str, weight: &str) {
        let escaped = content
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        self.elements.push(format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="{}" font-weight="{}">{}</text>"#,
            x, y, font_size, weight, escaped
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_discards_previous_elements() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        svg.line(0.0, 0.0, 10.0, 10.0, "white", 2.0);
        svg.circle(5.0, 5.0, 4.0, "#000", "#000", 3.0);
        assert_eq!(svg.elements().len(), 2);
        svg.clear();
        assert!(svg.elements().is_empty());
    }

    #[test]
    fn text_content_is_escaped() {
        let mut svg = SvgSurface::new(100.0, 100.0);
        svg.text(1.0, 2.0, "<A&B>", "1em", "normal");
        assert!(svg.elements()[0].contains("&lt;A&amp;B&gt;"));
    }

    #[test]
    fn build_wraps_elements_in_svg_root() {
        let mut svg = SvgSurface::new(360.0, 1113.0);
        svg.line(30.0, 30.0, 30.0, 1083.0, "white", 2.0);
        let out = svg.build();
        assert!(out.starts_with("<svg"));
        assert!(out.contains(r#"viewBox="0 0 360 1113""#));
        assert!(out.trim_end().ends_with("</svg>"));
    }
}
