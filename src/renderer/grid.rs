//! Fret wires, strings, and inlay markers.

use crate::model::{FRET_COUNT, STRING_COUNT};
use super::commands::DrawCommand;
use super::constants::*;
use super::geometry::FretboardGeometry;

// ═══════════════════════════════════════════════════════════════════════
// Grid lines
// ═══════════════════════════════════════════════════════════════════════

/// One vertical wire per fret 0..=FRET_COUNT, spanning first to last string.
pub(super) fn render_frets(out: &mut Vec<DrawCommand>, geo: &FretboardGeometry) {
    let top = geo.first_string_y();
    let bottom = geo.last_string_y();
    for fret in 0..=FRET_COUNT {
        let x = geo.fret_line_x(fret);
        out.push(line(x, top, x, bottom));
    }
}

/// One horizontal line per string across the full width.
pub(super) fn render_strings(out: &mut Vec<DrawCommand>, geo: &FretboardGeometry) {
    for string in 0..STRING_COUNT {
        let y = geo.string_y(string);
        out.push(line(0.0, y, geo.width, y));
    }
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> DrawCommand {
    DrawCommand::Line {
        x1,
        y1,
        x2,
        y2,
        color: GRID_COLOR.to_string(),
        width: GRID_LINE_WIDTH,
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Inlay markers
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn render_fret_markers(out: &mut Vec<DrawCommand>, geo: &FretboardGeometry) {
    let cy = geo.center_y();
    for &fret in &MARKER_FRETS {
        out.push(DrawCommand::Circle {
            cx: geo.note_x(fret),
            cy,
            r: MARKER_RADIUS,
            fill: MARKER_COLOR.to_string(),
        });
    }
}
