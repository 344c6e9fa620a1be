//! localStorage Backend
//!
//! `StorageBackend` over the browser's `localStorage`. When storage is
//! disabled every call errors, and the completion store falls back to
//! session-only checkmarks.

use care_core::{CareError, CareResult, ScheduleConfig, StorageBackend};
use wasm_bindgen::JsValue;

/// Optional scheduler override, JSON (see `ScheduleConfig`)
pub const CONFIG_KEY: &str = "plant-care.config";

pub struct LocalStorageBackend {
    storage: Option<web_sys::Storage>,
}

impl LocalStorageBackend {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, checkmarks will not survive a reload");
        }
        Self { storage }
    }

    fn storage(&self) -> CareResult<&web_sys::Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| CareError::Storage("localStorage unavailable".to_string()))
    }
}

impl StorageBackend for LocalStorageBackend {
    fn read(&self, key: &str) -> CareResult<Option<String>> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn write(&self, key: &str, value: &str) -> CareResult<()> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(e: JsValue) -> CareError {
    CareError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// Scheduler config from storage; missing or invalid means defaults
pub fn load_config(backend: &impl StorageBackend) -> ScheduleConfig {
    match backend.read(CONFIG_KEY) {
        Ok(Some(raw)) => ScheduleConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("ignoring {}: {}", CONFIG_KEY, e);
            ScheduleConfig::default()
        }),
        _ => ScheduleConfig::default(),
    }
}
