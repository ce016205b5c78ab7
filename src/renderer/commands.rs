//! Declarative draw commands and the surface trait that consumes them.

use serde::Serialize;

/// One drawing primitive. The renderer emits these in z-order; a surface
/// paints them in sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Stroked line segment
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    /// Filled circle
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    /// Text centered horizontally and vertically on (x, y)
    Text {
        x: f64,
        y: f64,
        content: String,
        font_size: f64,
        font_family: String,
        fill: String,
    },
}

/// Anything that can paint draw commands: the SVG builder, or a host
/// adapter around a native canvas.
pub trait DrawSurface {
    /// Drop everything drawn so far.
    fn clear(&mut self);

    fn draw(&mut self, command: &DrawCommand);

    fn draw_all(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            self.draw(command);
        }
    }
}

/// Serialize a command list to JSON for hosts that paint natively.
pub fn commands_to_json(commands: &[DrawCommand]) -> crate::Result<String> {
    Ok(serde_json::to_string(commands)?)
}
