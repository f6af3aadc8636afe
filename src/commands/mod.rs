//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod todo;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Rejects with the command's error string when the command fails.
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Readable text for a rejected invoke
fn rejection_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

// Re-export all public items
pub use todo::*;
