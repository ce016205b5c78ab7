//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{key_names_json, render_key_to_svg, FretboardOptions};

/// Render the fretboard for a key name to SVG.
///
/// Called from Kotlin as:
///   external fun renderKey(keyName: String, width: Float, height: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderKey(
    mut env: JNIEnv,
    _class: JClass,
    key_name: JString,
    width: jfloat,
    height: jfloat,
) -> jstring {
    let key: String = match env.get_string(&key_name) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    let options = FretboardOptions::with_size(width as f64, height as f64);

    match render_key_to_svg(key.as_str(), &options) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("renderKey({key:?}): {e}");
            std::ptr::null_mut()
        }
    }
}

/// The 12 dropdown entries as a JSON array, same as `fretlib_key_names`.
///
/// Called from Kotlin as:
///   external fun keyNames(): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_keyNames(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    let json = match key_names_json() {
        Ok(json) => json,
        Err(e) => {
            log::warn!("keyNames: {e}");
            return std::ptr::null_mut();
        }
    };
    match env.new_string(&json) {
        Ok(js) => js.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}
