//! Fretboard renderer — converts a root key into draw commands or SVG.
//!
//! Rendering is a single deterministic pass: grid lines first, then the
//! inlay markers, then the scale notes with their labels on top. The
//! command list is the primary output; SVG is one surface that can replay
//! it, and hosts with a native canvas can implement `DrawSurface` instead.

mod commands;
mod constants;
mod geometry;
mod grid;
mod notes;
mod svg_builder;

pub use commands::{commands_to_json, DrawCommand, DrawSurface};
pub use geometry::FretboardGeometry;
pub use svg_builder::SvgBuilder;

use crate::error::Result;
use crate::model::{IntoPitchClass, PitchClass, Tuning};
use crate::options::FretboardOptions;
use crate::theory::scale_positions;
use grid::{render_fret_markers, render_frets, render_strings};
use notes::render_notes;

// ═══════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════

/// Render the fretboard for the major scale on `root` onto a
/// `width × height` surface.
pub fn render_fretboard(root: PitchClass, width: f64, height: f64) -> Vec<DrawCommand> {
    let geo = FretboardGeometry::new(width, height);
    let positions = scale_positions(root, &Tuning::STANDARD);

    let mut out = Vec::with_capacity(64 + positions.len() * 2);
    render_frets(&mut out, &geo);
    render_strings(&mut out, &geo);
    render_fret_markers(&mut out, &geo);
    render_notes(&mut out, &geo, &positions);

    log::debug!(
        "rendered {} major at {}x{}: {} notes, {} commands",
        root,
        width,
        height,
        positions.len(),
        out.len()
    );
    out
}

/// Checked entry point: resolves `root` and validates `options` first.
pub fn render_key(
    root: impl IntoPitchClass,
    options: &FretboardOptions,
) -> Result<Vec<DrawCommand>> {
    let root = root.into_pitch_class()?;
    options.validate()?;
    Ok(render_fretboard(root, options.width, options.height))
}

/// Render the fretboard for `root` into a complete SVG string.
pub fn render_key_to_svg(
    root: impl IntoPitchClass,
    options: &FretboardOptions,
) -> Result<String> {
    let commands = render_key(root, options)?;
    Ok(commands_to_svg(&commands, options))
}

/// Replay a command list onto a fresh SVG surface.
pub fn commands_to_svg(commands: &[DrawCommand], options: &FretboardOptions) -> String {
    let mut svg = SvgBuilder::new(options.width, options.height, options.zoom);
    svg.draw_all(commands);
    svg.build()
}
