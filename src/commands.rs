//! Browser API Wrappers
//!
//! Async bindings to `fetch` and the clipboard.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{RequestCache, RequestInit, Response};

use crate::models::HistoryIndex;

/// History log written by external tools, served next to the page
pub const HISTORY_URL: &str = "./history.json";

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Fetch the history log, bypassing every cache. A missing log is empty.
pub async fn fetch_history() -> Result<HistoryIndex, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let opts = RequestInit::new();
    opts.set_cache(RequestCache::NoStore);

    let result = JsFuture::from(window.fetch_with_str_and_init(HISTORY_URL, &opts))
        .await
        .map_err(js_error)?;
    let response: Response = result.dyn_into().map_err(js_error)?;
    if !response.ok() {
        log::info!("history log not available (HTTP {})", response.status());
        return Ok(HistoryIndex::new());
    }

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let values: Vec<serde_json::Value> =
        serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?;
    Ok(HistoryIndex::from_values(values))
}

/// `navigator.clipboard.writeText(text)`
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(js_error)?;
    if clipboard.is_undefined() {
        return Err("clipboard API unavailable".to_string());
    }
    let write_text: js_sys::Function = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let promise: js_sys::Promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}
