//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::jstring;
use jni::JNIEnv;

use crate::render_json_to_svg;

/// Render a JSON diagram configuration to SVG.
///
/// Called from Kotlin as:
///   external fun renderJson(configJson: String): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_renderJson(
    mut env: JNIEnv,
    _class: JClass,
    config_json: JString,
) -> jstring {
    let json: String = match env.get_string(&config_json) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };

    match render_json_to_svg(&json) {
        Ok(svg) => match env.new_string(&svg) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(e) => {
            log::warn!("renderJson: {e}");
            std::ptr::null_mut()
        }
    }
}
