//! Care History
//!
//! Answers "when was this plant last cared for?" from two sources:
//! an external history log (`history.json`, appended by other tools) and the
//! plant's own embedded `history` field.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{CareEvent, PlantRecord};

/// One entry of the external history log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "plantId", alias = "plant_id", alias = "id")]
    pub plant_id: String,
    pub date: String,
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl HistoryEntry {
    fn into_event(self) -> CareEvent {
        CareEvent {
            date: self.date,
            event: self.event,
            note: self.note,
        }
    }
}

/// Latest external event per plant key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryIndex {
    latest: HashMap<String, CareEvent>,
}

impl HistoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from log entries. Dates compare as ISO strings (`YYYY-MM-DD`,
    /// optionally with ` HH:MM`); exact ties keep the later entry.
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let mut latest: HashMap<String, CareEvent> = HashMap::new();
        for entry in entries {
            let newer = latest
                .get(&entry.plant_id)
                .map_or(true, |known| entry.date >= known.date);
            if newer {
                let key = entry.plant_id.clone();
                latest.insert(key, entry.into_event());
            }
        }
        Self { latest }
    }

    /// Build from decoded JSON values; entries that do not fit are skipped
    pub fn from_values(values: Vec<Value>) -> Self {
        let total = values.len();
        let entries: Vec<HistoryEntry> = values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        if entries.len() < total {
            log::warn!("skipped {} malformed history entries", total - entries.len());
        }
        Self::from_entries(entries)
    }

    /// Parse a history log; anything but a JSON array yields an empty index
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<Value>>(json) {
            Ok(values) => Self::from_values(values),
            Err(e) => {
                log::warn!("history log ignored: {}", e);
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.latest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latest.is_empty()
    }

    /// External log first, then the plant's embedded history, else no record
    pub fn last_care<'a>(&'a self, plant: &'a PlantRecord) -> Option<&'a CareEvent> {
        self.latest.get(plant.key()).or_else(|| plant.last_event())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(plant_id: &str, date: &str, event: &str) -> HistoryEntry {
        HistoryEntry {
            plant_id: plant_id.to_string(),
            date: date.to_string(),
            event: event.to_string(),
            note: None,
        }
    }

    #[test]
    fn test_picks_most_recent_by_date() {
        let index = HistoryIndex::from_entries(vec![
            entry("kalanchoe", "2026-03-10 08:00", "Watered"),
            entry("kalanchoe", "2026-01-02", "Pruned"),
            entry("gloxinia", "2026-02-01", "Repotted"),
        ]);
        let plant = PlantRecord::new("kalanchoe", "Kalanchoe", 7);

        assert_eq!(index.len(), 2);
        assert_eq!(index.last_care(&plant).unwrap().event, "Watered");
    }

    #[test]
    fn test_same_day_compares_time() {
        let json = r#"[
            {"plantId": "p", "date": "2026-03-10 08:00", "event": "Later"},
            {"plantId": "p", "date": "2026-03-10 07:00", "event": "Earlier"}
        ]"#;
        let index = HistoryIndex::from_json(json);
        let plant = PlantRecord::new("p", "P", 1);
        assert_eq!(index.last_care(&plant).unwrap().event, "Later");
    }

    #[test]
    fn test_exact_tie_keeps_later_entry() {
        let index = HistoryIndex::from_entries(vec![
            entry("p", "2026-03-10 08:00", "First"),
            entry("p", "2026-03-10 08:00", "Second"),
        ]);
        let plant = PlantRecord::new("p", "P", 1);
        assert_eq!(index.last_care(&plant).unwrap().event, "Second");
    }

    #[test]
    fn test_falls_back_to_embedded_history() {
        let mut plant = PlantRecord::new("cactus-adult", "Cacti", 21);
        plant.history = vec![
            CareEvent { date: "2026-01-01".into(), event: "Old".into(), note: None },
            CareEvent { date: "2026-02-01".into(), event: "Dormancy".into(), note: None },
        ];

        let index = HistoryIndex::new();
        assert_eq!(index.last_care(&plant).unwrap().event, "Dormancy");

        let bare = PlantRecord::new("bare", "Bare", 7);
        assert!(index.last_care(&bare).is_none());
    }

    #[test]
    fn test_accepts_id_field_spellings() {
        let json = r#"[
            {"plant_id": "a", "plant_name": "A", "event": "Watered", "date": "2026-03-01 10:00"},
            {"plantId": "b", "date": "2026-03-02", "event": "Fed"},
            {"id": "c", "date": "2026-03-03", "event": "Pruned", "note": "tips only"},
            {"date": "2026-03-04", "event": "no plant"},
            "garbage"
        ]"#;
        let index = HistoryIndex::from_json(json);
        assert_eq!(index.len(), 3);

        let c = PlantRecord::new("c", "C", 7);
        assert_eq!(index.last_care(&c).unwrap().note.as_deref(), Some("tips only"));
    }

    #[test]
    fn test_non_array_log_is_empty() {
        assert!(HistoryIndex::from_json("{}").is_empty());
        assert!(HistoryIndex::from_json("").is_empty());
    }
}
