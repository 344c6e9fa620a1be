//! Year View Component
//!
//! Month-by-month grid of feeding, pruning and repotting windows.

use care_core::overview::{year_grid, MONTHS_SHORT};
use chrono::Datelike;
use leptos::prelude::*;

use crate::models::MonthCell;
use crate::store::{use_app_store, AppStateStoreFields};

fn cell_icons(cell: &MonthCell) -> String {
    let mut icons = String::new();
    if cell.feed {
        icons.push('💊');
    }
    if cell.prune {
        icons.push_str("✂️");
    }
    if cell.repot {
        icons.push('🪴');
    }
    icons
}

/// Month column class; months with any planned action are marked active
fn cell_class(cell: &MonthCell, current: bool) -> &'static str {
    match (cell.is_active(), current) {
        (true, true) => "month-col current cell-active",
        (true, false) => "month-col cell-active",
        (false, true) => "month-col current",
        (false, false) => "month-col",
    }
}

#[component]
pub fn YearView() -> impl IntoView {
    let store = use_app_store();

    let current = Memo::new(move |_| store.today().get().month0() as usize);
    let rows = year_grid(&store.plants().get_untracked());

    let column_class = move |month0: usize| {
        if current.get() == month0 {
            "month-col current"
        } else {
            "month-col"
        }
    };

    view! {
        <section class="view-section">
            <div class="year-legend">"💊 feed · ✂️ prune · 🪴 repot"</div>
            <div class="year-scroll">
                <table class="year-table">
                    <thead>
                        <tr>
                            <th class="plant-col">"Plant"</th>
                            {MONTHS_SHORT
                                .iter()
                                .enumerate()
                                .map(|(month0, label)| view! {
                                    <th class=move || column_class(month0)>{*label}</th>
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| view! {
                                <tr>
                                    <td class="plant-col">{row.name}</td>
                                    {row.cells
                                        .iter()
                                        .enumerate()
                                        .map(|(month0, cell)| {
                                            let icons = cell_icons(cell);
                                            let cell = *cell;
                                            view! {
                                                <td class=move || cell_class(&cell, current.get() == month0)>
                                                    {icons}
                                                </td>
                                            }
                                        })
                                        .collect_view()}
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_icons() {
        let cell = MonthCell { feed: true, prune: false, repot: true };
        assert_eq!(cell_icons(&cell), "💊🪴");
        assert_eq!(cell_icons(&MonthCell::default()), "");
    }

    #[test]
    fn test_cell_class_marks_active_months() {
        let feed = MonthCell { feed: true, ..MonthCell::default() };
        assert_eq!(cell_class(&feed, false), "month-col cell-active");
        assert_eq!(cell_class(&feed, true), "month-col current cell-active");
        assert_eq!(cell_class(&MonthCell::default(), true), "month-col current");
        assert_eq!(cell_class(&MonthCell::default(), false), "month-col");
    }
}
