//! Seasonal advisory rules: (months, which plants) -> advice text.

use serde::{Deserialize, Serialize};

use crate::domain::{MonthSet, PlantRecord};

/// Which plants a rule applies to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "match", content = "value", rename_all = "lowercase")]
pub enum PlantMatcher {
    Any,
    Id(String),
    Category(String),
}

impl PlantMatcher {
    pub fn matches(&self, plant: &PlantRecord) -> bool {
        match self {
            PlantMatcher::Any => true,
            PlantMatcher::Id(id) => plant.key() == id,
            PlantMatcher::Category(category) => plant
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(category)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalRule {
    pub months: MonthSet,
    pub plants: PlantMatcher,
    pub text: String,
}

impl SeasonalRule {
    pub fn new(months: &[u32], plants: PlantMatcher, text: &str) -> Self {
        Self {
            months: months.iter().copied().collect(),
            plants,
            text: text.to_string(),
        }
    }

    pub fn applies(&self, plant: &PlantRecord, month0: u32) -> bool {
        self.months.contains(month0) && self.plants.matches(plant)
    }
}

const WINTER: &[u32] = &[11, 0, 1];

/// Built-in rule table
pub fn default_rules() -> Vec<SeasonalRule> {
    vec![
        SeasonalRule::new(
            WINTER,
            PlantMatcher::Category("fruit".to_string()),
            "Heating dries the air: keep humidity near 50% to avoid leaf drop.",
        ),
        SeasonalRule::new(
            WINTER,
            PlantMatcher::Category("flower".to_string()),
            "Dry air invites spider mites: mist around the plant, not on the leaves.",
        ),
        SeasonalRule::new(
            &[9],
            PlantMatcher::Id("kalanchoe".to_string()),
            "Short-day regime: 14 hours of darkness a night to set buds.",
        ),
        SeasonalRule::new(
            &[10, 11, 0, 1],
            PlantMatcher::Id("gloxinia".to_string()),
            "Tuber rest: keep it dark and cool, barely moist.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: &str, category: &str) -> PlantRecord {
        PlantRecord {
            category: Some(category.to_string()),
            ..PlantRecord::new(id, id, 7)
        }
    }

    #[test]
    fn test_category_rule_needs_month_and_category() {
        let rule = &default_rules()[0];
        let lemon = plant("citrus-group", "fruit");
        let cactus = plant("cactus-adult", "cactus");

        assert!(rule.applies(&lemon, 0));
        assert!(rule.applies(&lemon, 11));
        assert!(!rule.applies(&lemon, 6));
        assert!(!rule.applies(&cactus, 0));
    }

    #[test]
    fn test_id_rule() {
        let rules = default_rules();
        let kalanchoe = plant("kalanchoe", "succulent");
        let hits: Vec<_> = rules.iter().filter(|r| r.applies(&kalanchoe, 9)).collect();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].text.starts_with("Short-day"));
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let matcher = PlantMatcher::Category("Fruit".to_string());
        assert!(matcher.matches(&plant("x", "fruit")));
        assert!(!matcher.matches(&PlantRecord::new("y", "y", 1)));
    }

    #[test]
    fn test_rule_json_shape() {
        let json = r#"{"months": [5, 6], "plants": {"match": "any"}, "text": "Hot"}"#;
        let rule: SeasonalRule = serde_json::from_str(json).unwrap();
        assert_eq!(rule.plants, PlantMatcher::Any);
        assert!(rule.months.contains(6));
    }
}
