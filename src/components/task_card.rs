//! Task Card Component
//!
//! One plant's due actions with their checkboxes and advice.

use chrono::NaiveDate;
use care_core::overview::water_label;
use leptos::prelude::*;

use crate::components::NoteText;
use crate::context::use_app_context;
use crate::models::{CardState, DueTask, TaskAction};

#[component]
pub fn TaskCard(task: DueTask, date: NaiveDate) -> impl IntoView {
    let ctx = use_app_context();
    let actions = task.actions;

    let done = {
        let key = task.key.clone();
        Memo::new(move |_| ctx.completion(date, &key))
    };
    let card_class = move || CardState::of(&actions, &done.get()).css_class();

    let water_key = task.key.clone();
    let feed_key = task.key.clone();

    view! {
        <div class=card_class>
            <div class="task-head">
                <div class="task-plant">{task.name.clone()}</div>
                <div class="task-meta">{water_label(task.water_freq)}</div>
            </div>

            <div class="task-actions">
                <label class="chip">
                    <input
                        type="checkbox"
                        prop:checked=move || done.get().water
                        on:change=move |_| ctx.toggle(date, &water_key, TaskAction::Water)
                    />
                    "💧 Water"
                </label>
                {actions.feed.then(|| view! {
                    <label class="chip secondary">
                        <input
                            type="checkbox"
                            prop:checked=move || done.get().feed
                            on:change=move |_| ctx.toggle(date, &feed_key, TaskAction::Feed)
                        />
                        "🧪 Feed"
                    </label>
                })}
            </div>

            {task.feed_note.map(|note| view! {
                <div class="task-note">"💊 " <NoteText text=note /></div>
            })}
            {task.stage_hint.map(|hint| view! { <div class="task-note stage">{hint}</div> })}
            {task.warning.map(|warning| view! {
                <div class="task-warning">"⚠️ " <NoteText text=warning /></div>
            })}
            {task.advisories
                .into_iter()
                .map(|advice| view! { <div class="task-advisory">{advice}</div> })
                .collect_view()}
        </div>
    }
}
