//! JavaScript bindings, enabled by the `wasm` feature.

use wasm_bindgen::prelude::*;

use crate::error::NetworkError;
use crate::Network;

fn to_js(err: NetworkError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Steps along the loop to the tile farthest from the start of the maze given as text.
#[wasm_bindgen(js_name = farthestDistance)]
pub fn farthest_distance(input: &str) -> Result<usize, JsValue> {
    input.parse::<Network>()
        .and_then(|network| network.farthest_distance())
        .map_err(to_js)
}

/// Empty tiles enclosed by the loop of the maze given as text.
#[wasm_bindgen(js_name = enclosedCount)]
pub fn enclosed_count(input: &str) -> Result<usize, JsValue> {
    input.parse::<Network>()
        .and_then(|network| network.enclosed_count())
        .map_err(to_js)
}
