//! Major-scale theory: scale membership and scale-degree labels.
//!
//! Everything here is a pure function of its arguments. The checked
//! entry points (`scale_notes`, `degree_label`) accept untyped input from
//! hosts and reject anything outside the note table.

use crate::error::Result;
use crate::model::{
    FretPosition, IntoPitchClass, NotePosition, PitchClass, ScaleDegreeLabel, Tuning,
};

/// Whole/half-step pattern of the major scale (W-W-H-W-W-W-H).
pub const MAJOR_SCALE_PATTERN: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];

/// The 7 notes of the major scale on `root`, in scale order.
pub fn major_scale(root: PitchClass) -> [PitchClass; 7] {
    let mut notes = [root; 7];
    let mut current = root;
    // The last step returns to the octave, so only the first 6 are applied.
    for (i, step) in MAJOR_SCALE_PATTERN[..6].iter().enumerate() {
        current = current.transpose(*step);
        notes[i + 1] = current;
    }
    notes
}

/// Checked form of [`major_scale`].
///
/// Fails with `InvalidPitchClass` when `root` is an index outside 0..=11
/// or a name not in the note table.
pub fn scale_notes(root: impl IntoPitchClass) -> Result<[PitchClass; 7]> {
    Ok(major_scale(root.into_pitch_class()?))
}

/// Checked scale-degree label of `note` relative to `root`.
pub fn degree_label(
    note: impl IntoPitchClass,
    root: impl IntoPitchClass,
) -> Result<ScaleDegreeLabel> {
    let note = note.into_pitch_class()?;
    let root = root.into_pitch_class()?;
    Ok(ScaleDegreeLabel::between(note, root))
}

pub fn is_in_scale(note: PitchClass, root: PitchClass) -> bool {
    major_scale(root).contains(&note)
}

/// Every grid cell whose pitch belongs to the major scale on `root`,
/// string by string with frets ascending. Fret 0 is included.
pub fn scale_positions(root: PitchClass, tuning: &Tuning) -> Vec<NotePosition> {
    let scale = major_scale(root);
    FretPosition::all()
        .filter_map(|position| {
            let pitch = position.pitch(tuning);
            if !scale.contains(&pitch) {
                return None;
            }
            Some(NotePosition {
                position,
                pitch,
                label: ScaleDegreeLabel::between(pitch, root),
                is_root: pitch == root,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FretError;

    #[test]
    fn c_major_is_the_white_keys() {
        let names: Vec<&str> = major_scale(PitchClass::C).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn scale_order_is_not_sorted() {
        let names: Vec<&str> = major_scale(PitchClass::A).iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["A", "B", "C#", "D", "E", "F#", "G#"]);
    }

    #[test]
    fn every_root_gives_seven_distinct_notes() {
        for root in PitchClass::ALL {
            let notes = major_scale(root);
            assert_eq!(notes[0], root);
            let mut sorted = notes.to_vec();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), 7, "duplicate notes in {root} major");
        }
    }

    #[test]
    fn checked_inputs() {
        assert_eq!(scale_notes("G").unwrap()[6], PitchClass::F_SHARP);
        assert_eq!(scale_notes(2u8).unwrap()[0], PitchClass::D);
        assert!(matches!(scale_notes(12), Err(FretError::InvalidPitchClass(_))));
        assert!(matches!(degree_label("C", "Cb"), Err(FretError::InvalidPitchClass(_))));
        assert!(matches!(degree_label(-3, 0), Err(FretError::InvalidPitchClass(_))));
    }

    #[test]
    fn degree_labels() {
        assert_eq!(degree_label("C#", "A").unwrap(), "3");
        assert_eq!(degree_label("G", "C").unwrap(), "5");
        assert_eq!(degree_label("C", "C#").unwrap(), "7");
        assert_eq!(degree_label("F#", "C").unwrap(), "4#");
    }

    #[test]
    fn membership() {
        assert!(is_in_scale(PitchClass::B, PitchClass::C));
        assert!(!is_in_scale(PitchClass::A_SHARP, PitchClass::C));
    }
}
