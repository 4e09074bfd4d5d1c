//! geoblock-wasm — WebAssembly bindings for geoblock-core
//!
//! This crate exposes a small JS/WASM API built on top of `geoblock-core`,
//! so a browser or Node client can validate geohashes and compute the same
//! blocks and neighbors the server will query.
//!
//! What it provides
//! ----------------
//! - `is_valid(geocode, minPrecision)`, `with_max_precision(geocode, n)`
//! - `adjacent(geocode, "n" | "s" | "e" | "w")`
//! - `neighbors(geocode)` → array ordered n, ne, e, se, s, sw, w, nw
//! - `neighbors_labeled(geocode)` → `{ n, ne, e, se, s, sw, w, nw }`
//! - `block_fanout(geocode)` → `[{ block, like }, ...]` for the 1+8 blocks
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { neighbors_labeled, block_fanout } from 'geoblock-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(neighbors_labeled('u33dc'));
//!   console.log(block_fanout('u33dc1v'));
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - Invalid input to `adjacent`/`neighbors*` throws a JS `Error`.
//! - `block_fanout` applies the default precision policy (4 / 5 / 9).
use geoblock_core::{adjacent_str, GeoError, Geocode, PrecisionPolicy};
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing geoblock WASM module...".into());
}

fn js_err(e: GeoError) -> JsError {
    JsError::new(&e.to_string())
}

/* --------------------------------------------------------------------------
   Validation
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn is_valid(geocode: &str, min_precision: i32) -> bool {
    Geocode::new(geocode).is_valid_and_has_precision(min_precision)
}

#[wasm_bindgen]
pub fn with_max_precision(geocode: &str, n: i32) -> String {
    Geocode::new(geocode).with_max_precision(n).into_string()
}

/* --------------------------------------------------------------------------
   Adjacency
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn adjacent(geocode: &str, direction: &str) -> Result<String, JsError> {
    adjacent_str(geocode, direction).map_err(js_err)
}

#[wasm_bindgen]
pub fn neighbors(geocode: &str) -> Result<Vec<String>, JsError> {
    let cells = geoblock_core::neighbors(geocode).map_err(js_err)?;
    Ok(cells.into_iter().map(Geocode::into_string).collect())
}

#[wasm_bindgen]
pub fn neighbors_labeled(geocode: &str) -> Result<JsValue, JsError> {
    let cells = geoblock_core::neighbors_labeled(geocode).map_err(js_err)?;
    Ok(to_value(&cells)?)
}

/* --------------------------------------------------------------------------
   Blocks
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct BlockView {
    block: String,
    like: String,
}

#[wasm_bindgen]
pub fn block_fanout(geocode: &str) -> Result<JsValue, JsError> {
    let policy = PrecisionPolicy::default();
    let block = policy
        .admit_query(&Geocode::new(geocode))
        .ok_or_else(|| JsError::new(&format!("invalid query geohash: {geocode:?}")))?;

    let array = js_sys::Array::new();
    for b in block.surrounding().map_err(js_err)? {
        let view = BlockView {
            like: b.like_pattern(),
            block: b.to_string(),
        };
        array.push(&to_value(&view)?);
    }
    Ok(array.into())
}
