//! Shared constants for the fretboard renderer (all in surface units).

// ── Grid ────────────────────────────────────────────────────────────
pub(super) const GRID_COLOR: &str = "#000";
pub(super) const GRID_LINE_WIDTH: f64 = 1.0;

// ── Inlay markers ───────────────────────────────────────────────────
pub(super) const MARKER_FRETS: [usize; 5] = [3, 5, 7, 9, 12];
pub(super) const MARKER_RADIUS: f64 = 5.0;
pub(super) const MARKER_COLOR: &str = "#888";

// ── Scale notes ─────────────────────────────────────────────────────
pub(super) const NOTE_RADIUS: f64 = 10.0;
pub(super) const ROOT_COLOR: &str = "#FF0000";
pub(super) const SCALE_COLOR: &str = "#4CAF50";
pub(super) const LABEL_COLOR: &str = "#fff";
pub(super) const LABEL_FONT_SIZE: f64 = 12.0;
pub(super) const LABEL_FONT_FAMILY: &str = "Arial";

// ── Surface chrome ──────────────────────────────────────────────────
pub(super) const BORDER_COLOR: &str = "#ccc";
pub(super) const BORDER_WIDTH: f64 = 1.0;
