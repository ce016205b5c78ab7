//! Error type shared by the theory, rendering, and host layers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FretError {
    /// A pitch class outside 0..=11, or a name missing from the note table.
    #[error("Invalid pitch class: {0}")]
    InvalidPitchClass(String),
    #[error("Invalid fret position: string {string}, fret {fret}")]
    InvalidFretPosition { string: usize, fret: usize },
    #[error("Invalid fretboard options: {0}")]
    InvalidOptions(String),
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FretError>;
