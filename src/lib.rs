//! fretlib — major-scale fretboard diagrams for a 6-string guitar.
//!
//! Picks the notes of a major key on a standard-tuned, 22-fret neck and
//! renders them as declarative draw commands or as SVG, each marker
//! labelled with its scale degree (`1`, `2`, … `7`, sharps in between).
//!
//! # Example
//! ```
//! use fretlib::{render_key_to_svg, scale_notes, FretboardOptions};
//!
//! let notes = scale_notes("A").unwrap();
//! assert_eq!(notes[2].name(), "C#");
//!
//! let svg = render_key_to_svg("A", &FretboardOptions::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod error;
pub mod model;
pub mod options;
pub mod renderer;
pub mod selector;
pub mod theory;

#[cfg(target_os = "android")]
pub mod android;

pub use error::{FretError, Result};
pub use model::*;
pub use options::FretboardOptions;
pub use renderer::{
    commands_to_json, commands_to_svg, render_fretboard, render_key, render_key_to_svg,
    DrawCommand, DrawSurface, FretboardGeometry, SvgBuilder,
};
pub use selector::{key_names, FretboardView, KeySelector};
pub use theory::{degree_label, is_in_scale, major_scale, scale_notes, scale_positions};

/// Render `key` and return the draw commands as JSON.
pub fn render_key_to_json(key: &str, options: &FretboardOptions) -> Result<String> {
    let commands = render_key(key, options)?;
    commands_to_json(&commands)
}

/// The 12 dropdown entries as a JSON array, the format both the C and
/// JNI bindings return.
pub fn key_names_json() -> Result<String> {
    Ok(serde_json::to_string(&key_names())?)
}

/// Highlighted positions for `key` as JSON, for hosts that lay out
/// markers themselves.
pub fn scale_positions_to_json(key: &str) -> Result<String> {
    let root = PitchClass::from_name(key)?;
    Ok(serde_json::to_string(&scale_positions(root, &Tuning::STANDARD))?)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI — for iOS (static library) and Android (JNI)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Read a key name from a C string, or None if null or not UTF-8.
///
/// # Safety
/// `key` must be null or a valid null-terminated C string.
unsafe fn key_from_c<'a>(key: *const c_char) -> Option<&'a str> {
    if key.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(key) }.to_str().ok()
}

fn into_c_string(result: Result<String>) -> *mut c_char {
    match result {
        Ok(s) => CString::new(s).unwrap_or_default().into_raw(),
        Err(e) => {
            log::warn!("fretlib: {e}");
            std::ptr::null_mut()
        }
    }
}

/// Render the fretboard for `key` (e.g. "F#") and return SVG as a C string.
/// The caller must free the returned string with `fretlib_free_string`.
///
/// Pass 0.0 for `width` or `height` to use the default surface size.
/// Returns null if `key` is not one of the 12 note names.
///
/// # Safety
/// `key` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_key(
    key: *const c_char,
    width: f64,
    height: f64,
) -> *mut c_char {
    let Some(key) = (unsafe { key_from_c(key) }) else {
        return std::ptr::null_mut();
    };
    let options = FretboardOptions::with_size(width, height);
    into_c_string(render_key_to_svg(key, &options))
}

/// Render the fretboard for `key` and return the draw commands as a JSON
/// array. The caller must free the returned string with
/// `fretlib_free_string`.
///
/// # Safety
/// `key` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn fretlib_render_key_commands(
    key: *const c_char,
    width: f64,
    height: f64,
) -> *mut c_char {
    let Some(key) = (unsafe { key_from_c(key) }) else {
        return std::ptr::null_mut();
    };
    let options = FretboardOptions::with_size(width, height);
    into_c_string(render_key_to_json(key, &options))
}

/// The 12 selectable key names as a JSON array.
/// The caller must free the returned string with `fretlib_free_string`.
#[no_mangle]
pub extern "C" fn fretlib_key_names() -> *mut c_char {
    into_c_string(key_names_json())
}

/// Free a string previously returned by fretlib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a fretlib function, or null.
#[no_mangle]
pub unsafe extern "C" fn fretlib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
