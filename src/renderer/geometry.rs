//! Mapping from fret/string indices to surface coordinates.

use crate::model::{FRET_COUNT, STRING_COUNT};

/// Grid spacing derived from the surface size. The surface is divided
/// into `FRET_COUNT + 1` columns and `STRING_COUNT + 1` rows, which leaves
/// one row of margin above the first string and below the last.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FretboardGeometry {
    pub width: f64,
    pub height: f64,
    pub fret_spacing: f64,
    pub string_spacing: f64,
}

impl FretboardGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            fret_spacing: width / (FRET_COUNT as f64 + 1.0),
            string_spacing: height / (STRING_COUNT as f64 + 1.0),
        }
    }

    /// x of the wire for `fret`.
    pub fn fret_line_x(&self, fret: usize) -> f64 {
        fret as f64 * self.fret_spacing
    }

    /// x of a note drawn on `fret`: halfway between its wire and the
    /// previous one. Fret 0 lands half a column left of the surface.
    pub fn note_x(&self, fret: usize) -> f64 {
        fret as f64 * self.fret_spacing - self.fret_spacing / 2.0
    }

    pub fn string_y(&self, string: usize) -> f64 {
        (string as f64 + 1.0) * self.string_spacing
    }

    pub fn first_string_y(&self) -> f64 {
        self.string_y(0)
    }

    pub fn last_string_y(&self) -> f64 {
        self.height - self.string_spacing
    }

    pub fn center_y(&self) -> f64 {
        self.height / 2.0
    }
}
