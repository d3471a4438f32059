//! WASM bindings for session decoding.

use crate::{decode_session_with_config, SessionOptions};
use wasm_bindgen::prelude::*;

/// Verify and decode a session cookie, returning the session as JSON text.
///
/// There is no process environment in WASM, so the secret must be passed.
#[wasm_bindgen(js_name = decodeSession)]
pub fn decode_session_json(
    token: &str,
    secret_key: Option<String>,
    salt: Option<String>,
) -> Result<String, JsValue> {
    let options = SessionOptions { secret_key, salt };
    let config = options
        .resolve_with(|_| None)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let value = decode_session_with_config(token, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&value).map_err(|e| JsValue::from_str(&e.to_string()))
}
