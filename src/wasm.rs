//! WebAssembly bindings for the inspector's decision logic.
//!
//! Rendering stays on the JavaScript side; these functions answer which view
//! to show and how tree nodes start out.

use wasm_bindgen::prelude::*;
use js_sys::Array;

use crate::inspector::{select_view, InspectorProps};
use crate::payload::parse_payload;
use crate::tree::{matching_rule, KeyPath, KeySegment};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn key_path_from_js(keys: &Array) -> KeyPath {
    keys.iter()
        .map(|key| match key.as_f64() {
            Some(n) if n >= 0.0 && n.fract() == 0.0 => KeySegment::Index(n as usize),
            _ => KeySegment::Key(key.as_string().unwrap_or_default()),
        })
        .collect()
}

/// Should a node start expanded? `key_path` runs from the top-level field down.
#[wasm_bindgen]
pub fn should_expand_node(key_path: &Array, level: usize) -> bool {
    crate::tree::should_expand_node_initially(&key_path_from_js(key_path), level)
}

/// Name of the rule that decides a node's initial state.
#[wasm_bindgen]
pub fn expansion_rule(key_path: &Array, level: usize) -> String {
    matching_rule(&key_path_from_js(key_path), level).name.to_string()
}

/// Which view the dialog shows: `"none"`, `"loading"`, `"content"` or `"tree"`.
///
/// A missing or blank payload means no debug data was supplied; a falsy JSON
/// value (`null`, `false`, `0`, `""`) is treated the same way.
#[wasm_bindgen]
pub fn inspector_view(payload_json: Option<String>, loading: bool) -> Result<String, JsError> {
    let payload = match payload_json.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(text) => Some(parse_payload(text).map_err(|e| JsError::new(&e.to_string()))?),
    };

    let props = InspectorProps::<()>::new(payload.as_ref()).loading(loading);
    Ok(select_view(&props).map_or("none", |view| view.name()).to_string())
}
