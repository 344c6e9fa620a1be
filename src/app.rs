//! Plant Care Frontend App
//!
//! Tab layout: Today, Collection, Year.

use care_core::{Clock, CompletionStore, Scheduler};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::clock::BrowserClock;
use crate::commands;
use crate::components::{CollectionView, NavBar, TodayView, YearView};
use crate::context::AppContext;
use crate::models::{bundled_plants, View};
use crate::storage::{self, LocalStorageBackend};
use crate::store::{store_set_history, store_set_today, AppState, AppStateStoreFields};

/// How often to check whether the calendar day has changed
const ROLLOVER_CHECK_MS: u32 = 60_000;

#[component]
pub fn App() -> impl IntoView {
    let backend = LocalStorageBackend::new();
    let config = storage::load_config(&backend);
    let completions = CompletionStore::open(backend);

    let plants = bundled_plants();
    log::info!("{} plants loaded", plants.len());

    let store = Store::new(AppState::new(plants, BrowserClock.today()));
    provide_context(store);
    provide_context(AppContext::new(Scheduler::new(config), completions, signal(0u32)));

    // History log (optional)
    spawn_local(async move {
        match commands::fetch_history().await {
            Ok(history) => {
                log::info!("history for {} plants", history.len());
                store_set_history(&store, history);
            }
            Err(e) => log::warn!("history log skipped: {}", e),
        }
    });

    // Day rollover: yesterday's checkmarks must not carry over
    Interval::new(ROLLOVER_CHECK_MS, move || {
        let today = BrowserClock.today();
        if store_set_today(&store, today) {
            log::info!("new day {}", today);
        }
    })
    .forget();

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match store.view().get() {
                    View::Today => view! { <TodayView /> }.into_any(),
                    View::Collection => view! { <CollectionView /> }.into_any(),
                    View::Year => view! { <YearView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
