//! Collection View Component
//!
//! Stats summary and one card per plant with its last care event.

use care_core::overview::{collection, collection_stats};
use leptos::prelude::*;

use crate::models::CollectionEntry;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CollectionView() -> impl IntoView {
    let store = use_app_store();

    let stats = Memo::new(move |_| collection_stats(&store.plants().read(), store.today().get()));
    let entries = Memo::new(move |_| collection(&store.plants().read(), &store.history().read()));

    view! {
        <section class="view-section">
            <div class="stats-grid">
                <div class="stat-card">
                    <div class="stat-value">{move || stats.get().total}</div>
                    <div class="stat-label">"Plants"</div>
                </div>
                <div class="stat-card">
                    <div class="stat-value">{move || stats.get().to_water_today}</div>
                    <div class="stat-label">"To water today"</div>
                </div>
            </div>

            <div class="plant-grid">
                {move || entries.get().into_iter().map(plant_card).collect_view()}
            </div>
        </section>
    }
}

fn plant_card(entry: CollectionEntry) -> impl IntoView {
    let last = entry
        .last_care
        .map(|e| format!("{} · {}", e.date, e.event))
        .unwrap_or_else(|| "No care recorded".to_string());

    view! {
        <div class="plant-card">
            <div class="plant-name">{entry.name}</div>
            {entry.category.map(|c| view! { <span class="plant-badge">{c}</span> })}
            <div class="plant-meta">"📍 " {entry.location}</div>
            <div class="plant-meta">"💧 " {entry.water_label}</div>
            <div class="plant-last">{last}</div>
        </div>
    }
}
