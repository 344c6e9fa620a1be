//! Completion Store
//!
//! Per-day, per-plant checkmarks. Persisted as one JSON document under a
//! single namespaced key:
//!
//! ```json
//! { "2026-03-14": { "citrus-group": { "water": true, "feed": false } } }
//! ```
//!
//! No operation fails. Unreadable state loads as empty, and a failed write
//! leaves the change in memory for the rest of the session.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::traits::StorageBackend;
use crate::domain::{Completion, CompletionPatch, TaskAction};

/// Default storage key
pub const COMPLETION_KEY: &str = "plant-care.done";

/// Day key (`YYYY-MM-DD`) -> plant key -> checkmarks
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionLog(BTreeMap<String, BTreeMap<String, Completion>>);

impl CompletionLog {
    pub fn day(&self, date: NaiveDate) -> Option<&BTreeMap<String, Completion>> {
        self.0.get(&day_key(date))
    }

    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub struct CompletionStore<B: StorageBackend> {
    backend: B,
    key: String,
    log: CompletionLog,
}

impl<B: StorageBackend> CompletionStore<B> {
    pub fn open(backend: B) -> Self {
        Self::open_with_key(backend, COMPLETION_KEY)
    }

    /// Load the persisted log once; it is the session's source of truth
    pub fn open_with_key(backend: B, key: &str) -> Self {
        let log = load_log(&backend, key);
        Self {
            backend,
            key: key.to_string(),
            log,
        }
    }

    pub fn get(&self, date: NaiveDate, plant_id: &str) -> Completion {
        self.log
            .day(date)
            .and_then(|day| day.get(plant_id))
            .copied()
            .unwrap_or_default()
    }

    /// Merge `patch` into the record, creating the day lazily
    pub fn set(&mut self, date: NaiveDate, plant_id: &str, patch: CompletionPatch) -> Completion {
        let entry = self
            .log
            .0
            .entry(day_key(date))
            .or_default()
            .entry(plant_id.to_string())
            .or_default();
        entry.apply(patch);
        let updated = *entry;

        self.persist();
        updated
    }

    /// Flip one checkmark
    pub fn toggle(&mut self, date: NaiveDate, plant_id: &str, action: TaskAction) -> Completion {
        let current = self.get(date, plant_id).is_marked(action);
        self.set(date, plant_id, CompletionPatch::for_action(action, !current))
    }

    /// Forget the whole day ("reset today")
    pub fn clear(&mut self, date: NaiveDate) {
        if self.log.0.remove(&day_key(date)).is_some() {
            self.persist();
        }
    }

    pub fn log(&self) -> &CompletionLog {
        &self.log
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn persist(&self) {
        let raw = match serde_json::to_string(&self.log) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("completion log not serializable: {}", e);
                return;
            }
        };
        if let Err(e) = self.backend.write(&self.key, &raw) {
            log::warn!("checkmarks kept for this session only: {}", e);
        }
    }
}

fn load_log<B: StorageBackend>(backend: &B, key: &str) -> CompletionLog {
    match backend.read(key) {
        Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding unreadable completion state under {}: {}", key, e);
            CompletionLog::default()
        }),
        Ok(None) => CompletionLog::default(),
        Err(e) => {
            log::warn!("completion storage unavailable: {}", e);
            CompletionLog::default()
        }
    }
}
