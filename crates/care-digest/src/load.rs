//! File loaders for the digest command.

use std::fs;
use std::path::Path;

use care_core::dataset::parse_plants;
use care_core::{CareResult, HistoryIndex, PlantRecord, ScheduleConfig};

pub fn load_plants(path: &Path) -> CareResult<Vec<PlantRecord>> {
    let raw = fs::read_to_string(path)?;
    parse_plants(&raw)
}

/// Missing history file means "no records", not an error
pub fn load_history(path: Option<&Path>) -> CareResult<HistoryIndex> {
    match path {
        Some(path) if path.exists() => Ok(HistoryIndex::from_json(&fs::read_to_string(path)?)),
        Some(path) => {
            tracing::info!("history file {} not found, using embedded history", path.display());
            Ok(HistoryIndex::new())
        }
        None => Ok(HistoryIndex::new()),
    }
}

pub fn load_config(path: Option<&Path>) -> CareResult<ScheduleConfig> {
    match path {
        Some(path) => ScheduleConfig::from_json(&fs::read_to_string(path)?),
        None => Ok(ScheduleConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use care_core::CareError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write temp file");
        file
    }

    #[test]
    fn test_load_plants() {
        let file = temp_file(r#"[{"id": "kalanchoe", "name": "Kalanchoe", "waterFreq": 7}]"#);
        let plants = load_plants(file.path()).unwrap();
        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].water_freq, 7);
    }

    #[test]
    fn test_load_plants_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_plants(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CareError::Io(_)));
    }

    #[test]
    fn test_load_history_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let index = load_history(Some(&dir.path().join("history.json"))).unwrap();
        assert!(index.is_empty());
        assert!(load_history(None).unwrap().is_empty());
    }

    #[test]
    fn test_load_history_file() {
        let file = temp_file(r#"[{"plant_id": "a", "event": "Watered", "date": "2026-03-01 10:00"}]"#);
        assert_eq!(load_history(Some(file.path())).unwrap().len(), 1);
    }

    #[test]
    fn test_load_config() {
        let file = temp_file(r#"{"dailyFeedDays": [10]}"#);
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.daily_feed_days, vec![10]);

        let bad = temp_file("42");
        assert!(matches!(load_config(Some(bad.path())), Err(CareError::Config(_))));
    }
}
