//! Collection and year views
//!
//! Read-only projections of the dataset for the Collection and Year tabs.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::{CareEvent, PlantRecord};
use crate::history::HistoryIndex;
use crate::schedule::waters_on;

pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total: usize,
    pub to_water_today: usize,
}

pub fn collection_stats(plants: &[PlantRecord], date: NaiveDate) -> CollectionStats {
    let day = date.day();
    CollectionStats {
        total: plants.len(),
        to_water_today: plants.iter().filter(|p| waters_on(p.water_freq, day)).count(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionEntry {
    pub key: String,
    pub name: String,
    pub category: Option<String>,
    pub location: String,
    pub water_label: String,
    pub last_care: Option<CareEvent>,
}

pub fn water_label(water_freq: u32) -> String {
    match water_freq {
        0 => "not scheduled".to_string(),
        1 => "daily".to_string(),
        n => format!("every {} days", n),
    }
}

pub fn collection(plants: &[PlantRecord], history: &HistoryIndex) -> Vec<CollectionEntry> {
    plants
        .iter()
        .map(|p| CollectionEntry {
            key: p.key().to_string(),
            name: p.name.clone(),
            category: p.category.clone(),
            location: p
                .location
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| "Not specified".to_string()),
            water_label: water_label(p.water_freq),
            last_care: history.last_care(p).cloned(),
        })
        .collect()
}

/// One month column of a year-grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthCell {
    pub feed: bool,
    pub prune: bool,
    pub repot: bool,
}

impl MonthCell {
    pub fn is_active(&self) -> bool {
        self.feed || self.prune || self.repot
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRow {
    pub key: String,
    pub name: String,
    pub cells: [MonthCell; 12],
}

pub fn year_grid(plants: &[PlantRecord]) -> Vec<YearRow> {
    plants
        .iter()
        .map(|p| {
            let mut cells = [MonthCell::default(); 12];
            for (month0, cell) in (0u32..).zip(cells.iter_mut()) {
                *cell = MonthCell {
                    feed: p.feed_months.contains(month0),
                    prune: p.prune_months.contains(month0),
                    repot: p.repot_months.contains(month0),
                };
            }
            YearRow {
                key: p.key().to_string(),
                name: p.name.clone(),
                cells,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    #[test]
    fn test_stats_count_waterings() {
        let plants = vec![
            PlantRecord::new("a", "A", 1),
            PlantRecord::new("b", "B", 7),
            PlantRecord::new("c", "C", 3),
            PlantRecord::new("d", "D", 0),
        ];
        assert_eq!(collection_stats(&plants, date(21)), CollectionStats { total: 4, to_water_today: 3 });
        assert_eq!(collection_stats(&plants, date(22)), CollectionStats { total: 4, to_water_today: 1 });
    }

    #[test]
    fn test_collection_entry_defaults() {
        let mut plant = PlantRecord::new("kalanchoe", "Kalanchoe", 7);
        plant.history = vec![CareEvent {
            date: "2026-02-01".to_string(),
            event: "Fed".to_string(),
            note: None,
        }];

        let entries = collection(&[plant], &HistoryIndex::new());
        assert_eq!(entries[0].location, "Not specified");
        assert_eq!(entries[0].water_label, "every 7 days");
        assert_eq!(entries[0].last_care.as_ref().unwrap().event, "Fed");
    }

    #[test]
    fn test_water_label() {
        assert_eq!(water_label(1), "daily");
        assert_eq!(water_label(14), "every 14 days");
        assert_eq!(water_label(0), "not scheduled");
    }

    #[test]
    fn test_year_grid_cells() {
        let mut plant = PlantRecord::new("adenium", "Adenium", 14);
        plant.feed_months = [4, 5].into_iter().collect();
        plant.prune_months = [2].into_iter().collect();
        plant.repot_months = [3, 4].into_iter().collect();

        let rows = year_grid(&[plant]);
        let cells = &rows[0].cells;
        assert!(!cells[0].is_active());
        assert_eq!(cells[2], MonthCell { feed: false, prune: true, repot: false });
        assert_eq!(cells[4], MonthCell { feed: true, prune: false, repot: true });
        assert_eq!(cells.iter().filter(|c| c.is_active()).count(), 4);
    }
}
