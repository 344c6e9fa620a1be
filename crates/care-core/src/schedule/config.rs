//! Scheduler configuration
//!
//! Every field has a default, so a partial JSON override is enough:
//! `{"planWindow": {"firstDay": 5, "lastDay": 7}}`.

use serde::{Deserialize, Serialize};

use crate::error::{CareError, CareResult};

/// Days of the month (inclusive) in which prune/repot reminders show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanWindow {
    pub first_day: u32,
    pub last_day: u32,
}

impl Default for PlanWindow {
    fn default() -> Self {
        Self { first_day: 1, last_day: 5 }
    }
}

impl PlanWindow {
    pub fn contains(&self, day: u32) -> bool {
        (self.first_day..=self.last_day).contains(&day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleConfig {
    pub plan_window: PlanWindow,
    /// Days of the month on which daily-watered plants get fed
    pub daily_feed_days: Vec<u32>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            plan_window: PlanWindow::default(),
            daily_feed_days: vec![1, 15],
        }
    }
}

impl ScheduleConfig {
    pub fn from_json(json: &str) -> CareResult<Self> {
        let config: ScheduleConfig =
            serde_json::from_str(json).map_err(|e| CareError::Config(e.to_string()))?;
        Ok(config.validate())
    }

    /// Clamp the plan window into 1..=31 and drop impossible feed days
    pub fn validate(mut self) -> Self {
        let first = self.plan_window.first_day.clamp(1, 31);
        let last = self.plan_window.last_day.clamp(1, 31);
        self.plan_window = PlanWindow {
            first_day: first.min(last),
            last_day: first.max(last),
        };

        self.daily_feed_days.retain(|d| (1..=31).contains(d));
        self.daily_feed_days.sort_unstable();
        self.daily_feed_days.dedup();
        self
    }

    pub fn is_daily_feed_day(&self, day: u32) -> bool {
        self.daily_feed_days.contains(&day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScheduleConfig::default();
        assert!(config.plan_window.contains(1));
        assert!(config.plan_window.contains(5));
        assert!(!config.plan_window.contains(6));
        assert!(config.is_daily_feed_day(1));
        assert!(config.is_daily_feed_day(15));
        assert!(!config.is_daily_feed_day(10));
    }

    #[test]
    fn test_partial_override() {
        let config =
            ScheduleConfig::from_json(r#"{"planWindow": {"firstDay": 5, "lastDay": 7}}"#).unwrap();
        assert_eq!(config.plan_window, PlanWindow { first_day: 5, last_day: 7 });
        assert_eq!(config.daily_feed_days, vec![1, 15]);
    }

    #[test]
    fn test_validate_clamps() {
        let config = ScheduleConfig::from_json(
            r#"{"planWindow": {"firstDay": 40, "lastDay": 0}, "dailyFeedDays": [15, 0, 1, 15, 32]}"#,
        )
        .unwrap();
        assert_eq!(config.plan_window, PlanWindow { first_day: 1, last_day: 31 });
        assert_eq!(config.daily_feed_days, vec![1, 15]);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ScheduleConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CareError::Config(_)));
    }
}
