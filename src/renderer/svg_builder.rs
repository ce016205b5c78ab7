//! SVG builder — accumulates SVG elements and produces the final string.
//!
//! This is the crate's own `DrawSurface`: draw commands are translated
//! one-to-one into SVG elements.

use super::commands::{DrawCommand, DrawSurface};
use super::constants::*;

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    zoom: f64,
}

impl SvgBuilder {
    /// A surface of `width × height` logical units, displayed at `zoom`.
    pub fn new(width: f64, height: f64, zoom: f64) -> Self {
        Self {
            elements: Vec::new(),
            width,
            height,
            zoom,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn build(&self) -> String {
        let mut svg = format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" "#,
                r#"width="{:.1}" height="{:.1}" style="border: {}px solid {};">"#,
            ),
            self.width,
            self.height,
            self.width * self.zoom,
            self.height * self.zoom,
            BORDER_WIDTH,
            BORDER_COLOR
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

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.elements.push(format!(
            concat!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" "#,
                r#"stroke="{}" stroke-width="{:.1}"/>"#,
            ),
            x1, y1, x2, y2, escape(color), width
        ));
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}"/>"#,
            cx, cy, r, escape(fill)
        ));
    }

    fn centered_text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        family: &str,
        fill: &str,
    ) {
        self.elements.push(format!(
            concat!(
                r#"<text x="{:.1}" y="{:.1}" font-family="{}" font-size="{:.0}" fill="{}" "#,
                r#"text-anchor="middle" dominant-baseline="central">{}</text>"#,
            ),
            x, y, escape(family), size, escape(fill), escape(content)
        ));
    }
}

impl DrawSurface for SvgBuilder {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Line { x1, y1, x2, y2, color, width } => {
                self.line(*x1, *y1, *x2, *y2, color, *width);
            }
            DrawCommand::Circle { cx, cy, r, fill } => {
                self.circle(*cx, *cy, *r, fill);
            }
            DrawCommand::Text { x, y, content, font_size, font_family, fill } => {
                self.centered_text(*x, *y, content, *font_size, font_family, fill);
            }
        }
    }
}

/// Escape for both text nodes and double-quoted attribute values.
fn escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
