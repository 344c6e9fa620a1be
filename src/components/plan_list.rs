//! Plan List Component
//!
//! Prune/repot reminders for the start of the month.

use leptos::prelude::*;

use crate::models::PlanReminder;

fn reminder_label(reminder: &PlanReminder) -> String {
    match (reminder.prune, reminder.repot) {
        (true, true) => "✂️ Prune · 🪴 Repot".to_string(),
        (true, false) => "✂️ Prune".to_string(),
        _ => "🪴 Repot".to_string(),
    }
}

#[component]
pub fn PlanList(reminders: Signal<Vec<PlanReminder>>) -> impl IntoView {
    view! {
        <Show when=move || !reminders.get().is_empty()>
            <div class="plan-list">
                <h3>"Plan this month"</h3>
                <For
                    each=move || reminders.get()
                    key=|r| (r.key.clone(), r.prune, r.repot)
                    children=move |r| {
                        let label = reminder_label(&r);
                        view! {
                            <div class="plan-item">
                                <span class="plan-plant">{r.name}</span>
                                <span class="plan-actions">{label}</span>
                                {r.note.map(|note| view! { <span class="plan-note">{note}</span> })}
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
