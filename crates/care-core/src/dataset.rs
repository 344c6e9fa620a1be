//! Plant dataset loading.

use chrono::NaiveDate;
use serde_json::Value;

use crate::domain::PlantRecord;
use crate::error::{CareError, CareResult};

/// Parse the plant list. The top level must be an array; entries that are
/// not objects are skipped with a warning.
pub fn parse_plants(json: &str) -> CareResult<Vec<PlantRecord>> {
    let values: Vec<Value> =
        serde_json::from_str(json).map_err(|e| CareError::Dataset(e.to_string()))?;

    let mut plants = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_object() {
            log::warn!("plant #{} is not an object, skipped", index);
            continue;
        }
        match serde_json::from_value::<PlantRecord>(value) {
            Ok(plant) => {
                if !plant.is_scheduled() {
                    log::warn!("plant {:?} has no usable waterFreq, never scheduled", plant.key());
                }
                plants.push(plant);
            }
            Err(e) => log::warn!("plant #{} skipped: {}", index, e),
        }
    }
    Ok(plants)
}

/// Parse an ISO calendar date (`YYYY-MM-DD`)
pub fn parse_date(text: &str) -> CareResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|e| CareError::InvalidDate(format!("{:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plants_skips_non_objects() {
        let json = r#"[{"id": "a", "name": "A", "waterFreq": 2}, 7, {"name": "B"}]"#;
        let plants = parse_plants(json).unwrap();

        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].key(), "a");
        assert_eq!(plants[1].key(), "B");
        assert!(!plants[1].is_scheduled());
    }

    #[test]
    fn test_parse_plants_requires_array() {
        assert!(matches!(parse_plants(r#"{"plants": []}"#), Err(CareError::Dataset(_))));
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let plants = parse_plants(include_str!("../../../data/plants.json")).unwrap();
        assert_eq!(plants.len(), 8);
        assert!(plants.iter().all(PlantRecord::is_scheduled));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-03-14").unwrap(), NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert!(matches!(parse_date("14.03.2026"), Err(CareError::InvalidDate(_))));
    }
}
