//! Today View Component
//!
//! Calendar header, the day's task cards and the month's plan reminders.

use care_core::digest::render_digest;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{PlanList, TaskCard};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodayView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();
    let (copied, set_copied) = signal(false);

    let plan = Memo::new(move |_| {
        let today = store.today().get();
        ctx.plan_for(&store.plants().read(), today)
    });
    let reminders = Signal::derive(move || plan.get().reminders);

    let on_reset = move |_| ctx.clear_day(store.today().get_untracked());

    let on_copy = move |_| {
        let text = render_digest(&plan.get_untracked());
        spawn_local(async move {
            match commands::copy_text(&text).await {
                Ok(()) => {
                    set_copied.set(true);
                    TimeoutFuture::new(1_500).await;
                    set_copied.set(false);
                }
                Err(e) => log::warn!("copy failed: {}", e),
            }
        });
    };

    view! {
        <section class="view-section">
            <div class="calendar-card">
                <div class="calendar-month">
                    {move || store.today().get().format("%B %Y").to_string()}
                </div>
                <div class="calendar-day">{move || store.today().get().format("%-d").to_string()}</div>
                <div class="calendar-weekday">{move || store.today().get().format("%A").to_string()}</div>
            </div>

            <div class="today-tasks">
                {move || {
                    let plan = plan.get();
                    if plan.is_rest_day() {
                        view! {
                            <div class="empty-state">
                                <div class="empty-emoji">"🌿"</div>
                                <div class="empty-title">"Rest day"</div>
                                <div class="empty-text">"Nothing needs water today"</div>
                            </div>
                        }
                            .into_any()
                    } else {
                        let date = plan.date;
                        plan.tasks
                            .into_iter()
                            .map(|task| view! { <TaskCard task=task date=date /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>

            <PlanList reminders=reminders />

            <div class="today-actions">
                <button class="secondary-btn" on:click=on_reset>"Reset today"</button>
                <button class="secondary-btn" on:click=on_copy>
                    {move || if copied.get() { "Copied" } else { "Copy plan" }}
                </button>
            </div>
        </section>
    }
}
