//! Frontend Models
//!
//! Core types used by the components, the bundled plant dataset and the
//! view selector.

pub use care_core::overview::{CollectionEntry, CollectionStats, MonthCell, YearRow};
pub use care_core::{CardState, DueTask, HistoryIndex, PlanReminder, PlantRecord, TaskAction, TodayPlan};

use care_core::dataset::parse_plants;

const PLANTS_JSON: &str = include_str!("../data/plants.json");

/// The static plant list shipped with the page
pub fn bundled_plants() -> Vec<PlantRecord> {
    parse_plants(PLANTS_JSON).unwrap_or_else(|e| {
        log::error!("bundled plant data unreadable: {}", e);
        Vec::new()
    })
}

/// Which tab is showing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Today,
    Collection,
    Year,
}

impl View {
    pub const ALL: [View; 3] = [View::Today, View::Collection, View::Year];

    pub fn label(&self) -> &'static str {
        match self {
            View::Today => "Today",
            View::Collection => "Collection",
            View::Year => "Year",
        }
    }
}
