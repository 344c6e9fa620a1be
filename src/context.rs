//! Application Context
//!
//! The scheduler and the session's completion store, provided via the Leptos
//! Context API.

use care_core::{Completion, CompletionStore, Scheduler};
use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::models::{PlantRecord, TaskAction, TodayPlan};
use crate::storage::LocalStorageBackend;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    scheduler: StoredValue<Scheduler>,
    /// Opened once per page load; holds a `localStorage` handle
    completions: StoredValue<CompletionStore<LocalStorageBackend>, LocalStorage>,
    /// Bumped on every checkmark change - read
    pub done_version: ReadSignal<u32>,
    /// Bumped on every checkmark change - write
    set_done_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        scheduler: Scheduler,
        completions: CompletionStore<LocalStorageBackend>,
        done_version: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            scheduler: StoredValue::new(scheduler),
            completions: StoredValue::new_local(completions),
            done_version: done_version.0,
            set_done_version: done_version.1,
        }
    }

    pub fn plan_for(&self, plants: &[PlantRecord], date: NaiveDate) -> TodayPlan {
        self.scheduler.with_value(|s| s.plan_for(plants, date))
    }

    /// Checkmarks for a plant; re-runs the caller when any checkmark changes
    pub fn completion(&self, date: NaiveDate, plant_key: &str) -> Completion {
        let _ = self.done_version.get();
        self.completions.with_value(|store| store.get(date, plant_key))
    }

    /// Flip one checkmark
    pub fn toggle(&self, date: NaiveDate, plant_key: &str, action: TaskAction) {
        self.completions.update_value(|store| {
            let now = store.toggle(date, plant_key, action);
            log::debug!("{} {} -> {:?}", plant_key, action.as_str(), now);
        });
        self.bump();
    }

    /// Forget every checkmark of the day
    pub fn clear_day(&self, date: NaiveDate) {
        self.completions.update_value(|store| store.clear(date));
        self.bump();
    }

    fn bump(&self) {
        self.set_done_version.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
