//! Scale-note circles and their degree labels.

use crate::model::NotePosition;
use super::commands::DrawCommand;
use super::constants::*;
use super::geometry::FretboardGeometry;

/// A filled circle per highlighted position, each immediately followed by
/// its label so the text sits on top of its own circle.
pub(super) fn render_notes(
    out: &mut Vec<DrawCommand>,
    geo: &FretboardGeometry,
    notes: &[NotePosition],
) {
    for note in notes {
        let x = geo.note_x(note.position.fret());
        let y = geo.string_y(note.position.string());
        let fill = if note.is_root { ROOT_COLOR } else { SCALE_COLOR };

        out.push(DrawCommand::Circle {
            cx: x,
            cy: y,
            r: NOTE_RADIUS,
            fill: fill.to_string(),
        });
        out.push(DrawCommand::Text {
            x,
            y,
            content: note.label.to_string(),
            font_size: LABEL_FONT_SIZE,
            font_family: LABEL_FONT_FAMILY.to_string(),
            fill: LABEL_COLOR.to_string(),
        });
    }
}
