//! Navigation Bar Component
//!
//! One button per view.

use leptos::prelude::*;

use crate::models::View;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="nav-bar">
            {View::ALL
                .into_iter()
                .map(|v| {
                    let btn_class = move || {
                        if store.view().get() == v { "nav-btn active" } else { "nav-btn" }
                    };
                    view! {
                        <button class=btn_class on:click=move |_| store.view().set(v)>
                            {v.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
