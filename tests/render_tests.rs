//! Rendering tests — draw commands and SVG output for whole keys.

use fretlib::{
    commands_to_json, is_in_scale, render_fretboard, render_key, render_key_to_svg,
    scale_positions, DrawCommand, FretPosition, FretboardOptions, PitchClass, Tuning,
    FRET_COUNT, STRING_COUNT,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

/// Grid cells whose pitch is in the scale, counted straight from the tuning.
fn expected_note_count(root: PitchClass) -> usize {
    let mut count = 0;
    for string in 0..STRING_COUNT {
        for fret in 0..=FRET_COUNT {
            let pitch = Tuning::STANDARD.strings[string].transpose(fret as i32);
            if is_in_scale(pitch, root) {
                count += 1;
            }
        }
    }
    count
}

fn note_circles(commands: &[DrawCommand]) -> Vec<(f64, f64, String)> {
    commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Circle { cx, cy, r, fill } if *r == 10.0 => Some((*cx, *cy, fill.clone())),
            _ => None,
        })
        .collect()
}

#[test]
fn note_count_matches_grid_for_every_key() {
    for root in PitchClass::ALL {
        let commands = render_fretboard(root, 1200.0, 200.0);
        let circles = note_circles(&commands);
        assert_eq!(circles.len(), expected_note_count(root), "{root} major");
        assert_eq!(scale_positions(root, &Tuning::STANDARD).len(), circles.len());
    }
}

#[test]
fn known_note_counts() {
    assert_eq!(expected_note_count(PitchClass::C), 84);
    assert_eq!(note_circles(&render_fretboard(PitchClass::C, 1200.0, 200.0)).len(), 84);
    // F# sits one semitone under the open G string, so that string loses one.
    assert_eq!(note_circles(&render_fretboard(PitchClass::G, 1200.0, 200.0)).len(), 83);
}

#[test]
fn open_high_e_is_marked_in_c() {
    let positions = scale_positions(PitchClass::C, &Tuning::STANDARD);
    let open_e = positions
        .iter()
        .find(|p| p.position == FretPosition::new(0, 0).unwrap())
        .expect("open high E should be highlighted in C major");
    assert_eq!(open_e.pitch, PitchClass::E);
    assert_eq!(open_e.label.as_str(), "3");
    assert!(!open_e.is_root);
}

#[test]
fn root_notes_are_red_and_labelled_one() {
    let commands = render_fretboard(PitchClass::A, 1150.0, 210.0);
    // A string (index 4), fret 0: x = -25, y = 5 * 30
    let idx = commands
        .iter()
        .position(|c| {
            matches!(c, DrawCommand::Circle { cx, cy, r, .. }
                if *cx == -25.0 && *cy == 150.0 && *r == 10.0)
        })
        .expect("open A should be highlighted");
    match (&commands[idx], &commands[idx + 1]) {
        (
            DrawCommand::Circle { fill, .. },
            DrawCommand::Text { x, y, content, fill: text_fill, .. },
        ) => {
            assert_eq!(fill.as_str(), "#FF0000");
            assert_eq!((*x, *y), (-25.0, 150.0));
            assert_eq!(content.as_str(), "1");
            assert_eq!(text_fill.as_str(), "#fff");
        }
        other => panic!("unexpected pair {other:?}"),
    }

    let roots = note_circles(&commands)
        .into_iter()
        .filter(|(_, _, fill)| fill == "#FF0000")
        .count();
    // Two A's per string across frets 0..=22
    assert_eq!(roots, 12);
}

#[test]
fn non_root_scale_notes_are_green() {
    let commands = render_fretboard(PitchClass::C, 1200.0, 200.0);
    let green = note_circles(&commands)
        .into_iter()
        .filter(|(_, _, fill)| fill == "#4CAF50")
        .count();
    let red = note_circles(&commands).len() - green;
    assert_eq!(red + green, 84);
    assert!(red > 0 && green > red);
}

#[test]
fn notes_are_drawn_after_grid_and_markers() {
    let commands = render_fretboard(PitchClass::E, 1200.0, 200.0);
    let last_line = commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Line { .. }))
        .unwrap();
    let first_marker = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Circle { r, .. } if *r == 5.0))
        .unwrap();
    let last_marker = commands
        .iter()
        .rposition(|c| matches!(c, DrawCommand::Circle { r, .. } if *r == 5.0))
        .unwrap();
    let first_note = commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Circle { r, .. } if *r == 10.0))
        .unwrap();
    assert!(last_line < first_marker);
    assert!(last_marker < first_note);
    assert_eq!(first_note, 23 + 6 + 5);
}

#[test]
fn rendering_is_idempotent() {
    for root in PitchClass::ALL {
        assert_eq!(
            render_fretboard(root, 1200.0, 200.0),
            render_fretboard(root, 1200.0, 200.0)
        );
    }
}

#[test]
fn commands_serialize_with_kind_tags() {
    let commands = render_key("D", &FretboardOptions::default()).unwrap();
    let json = commands_to_json(&commands).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), commands.len());
    assert_eq!(parsed[0]["kind"], "line");
    assert_eq!(parsed.last().unwrap()["kind"], "text");
}

#[test]
fn render_c_major_svg() {
    let svg = render_key_to_svg("C", &FretboardOptions::default()).expect("Failed to render C");

    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert_eq!(svg.matches("<line").count(), 29);
    assert_eq!(svg.matches("<circle").count(), 5 + 84);
    assert_eq!(svg.matches("<text").count(), 84);

    let out = output_dir().join("c-major.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered c-major.svg ({} bytes)", svg.len());
}

#[test]
fn render_f_sharp_major_svg() {
    let svg = render_key_to_svg("F#", &FretboardOptions::with_size(900.0, 150.0)).unwrap();
    assert!(svg.contains(r#"viewBox="0 0 900 150""#));
    assert!(svg.contains(">7</text>"));
    assert!(!svg.contains(">1#</text>"), "only scale members are labelled");

    let out = output_dir().join("f-sharp-major.svg");
    std::fs::write(&out, &svg).expect("Failed to write SVG");
}

#[test]
fn invalid_key_renders_nothing() {
    assert!(render_key_to_svg("Q", &FretboardOptions::default()).is_err());
    assert!(render_key(12, &FretboardOptions::default()).is_err());
}
