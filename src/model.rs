//! Data model for pitch classes, scale degrees, and fretboard positions.
//!
//! These types carry no state beyond their values; everything the
//! renderer needs is derived from a root `PitchClass` and the fixed
//! standard tuning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FretError, Result};

/// Number of strings on the fretboard.
pub const STRING_COUNT: usize = 6;
/// Highest fret. Fret 0 (the open string) is also a position, so each
/// string has `FRET_COUNT + 1` positions.
pub const FRET_COUNT: usize = 22;

/// Note names indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Scale-degree tokens indexed by semitones above the root.
pub const DEGREE_LABELS: [&str; 12] = [
    "1", "1#", "2", "2#", "3", "4", "4#", "5", "5#", "6", "6#", "7",
];

// ═══════════════════════════════════════════════════════════════════════
// PitchClass
// ═══════════════════════════════════════════════════════════════════════

/// A chromatic note without octave, stored as 0..=11 (C = 0).
///
/// Serialized as its name (`"C#"`), so JSON produced for hosts reads the
/// same as the dropdown entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const C_SHARP: PitchClass = PitchClass(1);
    pub const D: PitchClass = PitchClass(2);
    pub const D_SHARP: PitchClass = PitchClass(3);
    pub const E: PitchClass = PitchClass(4);
    pub const F: PitchClass = PitchClass(5);
    pub const F_SHARP: PitchClass = PitchClass(6);
    pub const G: PitchClass = PitchClass(7);
    pub const G_SHARP: PitchClass = PitchClass(8);
    pub const A: PitchClass = PitchClass(9);
    pub const A_SHARP: PitchClass = PitchClass(10);
    pub const B: PitchClass = PitchClass(11);

    /// All pitch classes in note-table order.
    pub const ALL: [PitchClass; 12] = [
        Self::C,
        Self::C_SHARP,
        Self::D,
        Self::D_SHARP,
        Self::E,
        Self::F,
        Self::F_SHARP,
        Self::G,
        Self::G_SHARP,
        Self::A,
        Self::A_SHARP,
        Self::B,
    ];

    /// Checked constructor from a note-table index.
    pub fn new(index: i32) -> Result<Self> {
        if (0..12).contains(&index) {
            Ok(PitchClass(index as u8))
        } else {
            Err(FretError::InvalidPitchClass(index.to_string()))
        }
    }

    /// Look up a pitch class by its name in the note table (e.g. `"F#"`).
    /// The match is exact: no trimming, no case folding, no flats.
    pub fn from_name(name: &str) -> Result<Self> {
        NOTE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| PitchClass(i as u8))
            .ok_or_else(|| FretError::InvalidPitchClass(format!("{name:?}")))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// Move by `semitones` (either direction), wrapping mod 12.
    pub fn transpose(self, semitones: i32) -> PitchClass {
        PitchClass((self.0 as i32 + semitones.rem_euclid(12)).rem_euclid(12) as u8)
    }

    /// Semitones from `root` up to `self`, in 0..=11.
    pub fn semitones_above(self, root: PitchClass) -> u8 {
        (self.0 + 12 - root.0) % 12
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = FretError;

    fn from_str(s: &str) -> Result<Self> {
        PitchClass::from_name(s)
    }
}

impl TryFrom<u8> for PitchClass {
    type Error = FretError;

    fn try_from(value: u8) -> Result<Self> {
        PitchClass::new(value as i32)
    }
}

impl TryFrom<i32> for PitchClass {
    type Error = FretError;

    fn try_from(value: i32) -> Result<Self> {
        PitchClass::new(value)
    }
}

impl TryFrom<String> for PitchClass {
    type Error = FretError;

    fn try_from(value: String) -> Result<Self> {
        PitchClass::from_name(&value)
    }
}

impl From<PitchClass> for &'static str {
    fn from(pc: PitchClass) -> Self {
        pc.name()
    }
}

/// Anything a caller may hand in as a root or note: a typed `PitchClass`,
/// a raw index, or a name from the dropdown.
pub trait IntoPitchClass {
    fn into_pitch_class(self) -> Result<PitchClass>;
}

impl IntoPitchClass for PitchClass {
    fn into_pitch_class(self) -> Result<PitchClass> {
        Ok(self)
    }
}

impl IntoPitchClass for i32 {
    fn into_pitch_class(self) -> Result<PitchClass> {
        PitchClass::new(self)
    }
}

impl IntoPitchClass for u8 {
    fn into_pitch_class(self) -> Result<PitchClass> {
        PitchClass::new(self as i32)
    }
}

impl IntoPitchClass for usize {
    fn into_pitch_class(self) -> Result<PitchClass> {
        if self < 12 {
            Ok(PitchClass(self as u8))
        } else {
            Err(FretError::InvalidPitchClass(self.to_string()))
        }
    }
}

impl IntoPitchClass for &str {
    fn into_pitch_class(self) -> Result<PitchClass> {
        PitchClass::from_name(self)
    }
}

impl IntoPitchClass for &String {
    fn into_pitch_class(self) -> Result<PitchClass> {
        PitchClass::from_name(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// ScaleDegreeLabel
// ═══════════════════════════════════════════════════════════════════════

/// Position of a note relative to a root: `1`..`7`, with sharps for the
/// chromatic steps in between. Serialized as the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub struct ScaleDegreeLabel(u8);

impl ScaleDegreeLabel {
    /// Label of `note` measured against `root`.
    pub fn between(note: PitchClass, root: PitchClass) -> Self {
        ScaleDegreeLabel(note.semitones_above(root))
    }

    pub fn as_str(self) -> &'static str {
        DEGREE_LABELS[self.0 as usize]
    }

    pub fn semitones(self) -> u8 {
        self.0
    }
}

impl fmt::Display for ScaleDegreeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ScaleDegreeLabel> for &'static str {
    fn from(label: ScaleDegreeLabel) -> Self {
        label.as_str()
    }
}

impl PartialEq<&str> for ScaleDegreeLabel {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Tuning & positions
// ═══════════════════════════════════════════════════════════════════════

/// Open-string pitch classes, highest string first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tuning {
    pub strings: [PitchClass; STRING_COUNT],
}

impl Tuning {
    /// Standard tuning E B G D A E (high to low).
    pub const STANDARD: Tuning = Tuning {
        strings: [
            PitchClass::E,
            PitchClass::B,
            PitchClass::G,
            PitchClass::D,
            PitchClass::A,
            PitchClass::E,
        ],
    };

    pub fn open_string(&self, string: usize) -> Option<PitchClass> {
        self.strings.get(string).copied()
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

/// A cell of the fretboard grid.
///
/// Only `new` and `all` build positions, so the indices are always in
/// range:
///
/// ```compile_fail
/// let pos = fretlib::FretPosition { string: 6, fret: 0 };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FretPosition {
    /// 0 = highest string
    string: usize,
    /// 0 = open string
    fret: usize,
}

impl FretPosition {
    pub fn new(string: usize, fret: usize) -> Result<Self> {
        if string >= STRING_COUNT || fret > FRET_COUNT {
            return Err(FretError::InvalidFretPosition { string, fret });
        }
        Ok(FretPosition { string, fret })
    }

    pub fn string(&self) -> usize {
        self.string
    }

    pub fn fret(&self) -> usize {
        self.fret
    }

    /// Pitch class sounding at this position.
    pub fn pitch(&self, tuning: &Tuning) -> PitchClass {
        tuning.strings[self.string].transpose(self.fret as i32)
    }

    /// Every grid cell, string by string, frets ascending.
    pub fn all() -> impl Iterator<Item = FretPosition> {
        (0..STRING_COUNT)
            .flat_map(|string| (0..=FRET_COUNT).map(move |fret| FretPosition { string, fret }))
    }
}

/// A highlighted cell: a grid position whose pitch belongs to the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotePosition {
    pub position: FretPosition,
    pub pitch: PitchClass,
    pub label: ScaleDegreeLabel,
    /// Whether `pitch` is the scale's root
    pub is_root: bool,
}
