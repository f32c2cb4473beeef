//! WASM bindings for Chordcalc.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { render_song, check_song } from 'chordcalc';
//!
//! await init();
//!
//! if (check_song(songText)) {
//!   pre.textContent = render_song(songText);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::error::ChordError;
use crate::table::TableConfig;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Render the pitch-class table for a song.
///
/// # Returns
/// The table text, or the grammar violation as a JavaScript error.
#[wasm_bindgen]
pub fn render_song(song: &str) -> Result<String, JsValue> {
    crate::calculate(song, &TableConfig::default()).map_err(to_js_error)
}

/// True if the song conforms to the notation grammar.
#[wasm_bindgen]
pub fn check_song(song: &str) -> bool {
    crate::notation::parse(song).is_ok()
}

fn to_js_error(e: ChordError) -> JsValue {
    let wrapped = ChordError::WasmError {
        message: e.to_string(),
    };
    JsValue::from_str(&wrapped.to_string())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
