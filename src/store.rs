//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use chrono::NaiveDate;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{HistoryIndex, PlantRecord, View};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Bundled plant list, never changes after startup
    pub plants: Vec<PlantRecord>,
    /// Calendar date every view renders for
    pub today: NaiveDate,
    /// Last-care lookup, filled once the history log arrives
    pub history: HistoryIndex,
    /// Active tab
    pub view: View,
}

impl AppState {
    pub fn new(plants: Vec<PlantRecord>, today: NaiveDate) -> Self {
        Self {
            plants,
            today,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Move to a new calendar day; returns false when the date is unchanged
pub fn store_set_today(store: &AppStore, date: NaiveDate) -> bool {
    if store.today().get_untracked() == date {
        return false;
    }
    store.today().set(date);
    true
}

/// Replace the history lookup
pub fn store_set_history(store: &AppStore, history: HistoryIndex) {
    store.history().set(history);
}
