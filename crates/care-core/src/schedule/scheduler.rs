//! Due-task evaluation
//!
//! Watering follows a fixed-phase schedule anchored to the day of the month:
//! a plant watered every `f` days is due when `day % f == 0`. This keeps the
//! schedule deterministic without any watering log, at the cost of drift
//! across month ends (a 7-day plant waters on the 28th and again on the 7th).

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::config::ScheduleConfig;
use super::rules::{default_rules, SeasonalRule};
use crate::domain::{DueActions, PlantRecord};

/// One task card: a plant with water (and possibly feed) due today
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueTask {
    pub key: String,
    pub name: String,
    pub water_freq: u32,
    pub actions: DueActions,
    /// Only set when feeding is due
    pub feed_note: Option<String>,
    pub warning: Option<String>,
    pub stage_hint: Option<String>,
    pub advisories: Vec<String>,
}

/// Early-month notice that a prune/repot month has begun
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReminder {
    pub key: String,
    pub name: String,
    pub prune: bool,
    pub repot: bool,
    pub note: Option<String>,
}

/// Everything the Today view renders for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayPlan {
    pub date: NaiveDate,
    pub tasks: Vec<DueTask>,
    pub reminders: Vec<PlanReminder>,
}

impl TodayPlan {
    pub fn is_rest_day(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Watering rule shared by the scheduler and the collection stats
pub fn waters_on(water_freq: u32, day: u32) -> bool {
    match water_freq {
        0 => false,
        1 => true,
        freq => day % freq == 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduler {
    config: ScheduleConfig,
    rules: Vec<SeasonalRule>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(ScheduleConfig::default())
    }
}

impl Scheduler {
    pub fn new(config: ScheduleConfig) -> Self {
        Self::with_rules(config, default_rules())
    }

    pub fn with_rules(config: ScheduleConfig, rules: Vec<SeasonalRule>) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn due_actions(&self, plant: &PlantRecord, date: NaiveDate) -> DueActions {
        let day = date.day();
        let month0 = date.month0();

        let water = waters_on(plant.water_freq, day);
        // Daily plants would be fed every day otherwise
        let feed = water
            && plant.feed_months.contains(month0)
            && (plant.water_freq > 1 || self.config.is_daily_feed_day(day));

        let in_window = self.config.plan_window.contains(day);
        DueActions {
            water,
            feed,
            prune: in_window && plant.prune_months.contains(month0),
            repot: in_window && plant.repot_months.contains(month0),
        }
    }

    /// Seasonal advice for a plant in the given month, in rule-table order
    pub fn advisories(&self, plant: &PlantRecord, date: NaiveDate) -> Vec<String> {
        let month0 = date.month0();
        self.rules
            .iter()
            .filter(|rule| rule.applies(plant, month0))
            .map(|rule| rule.text.clone())
            .collect()
    }

    /// Task cards in dataset order. Plants with nothing due are left out and
    /// a repeated key keeps only its first record.
    pub fn due_tasks(&self, plants: &[PlantRecord], date: NaiveDate) -> Vec<DueTask> {
        unique(plants)
            .filter_map(|plant| {
                let actions = self.due_actions(plant, date);
                if !actions.has_task() {
                    return None;
                }
                Some(DueTask {
                    key: plant.key().to_string(),
                    name: plant.name.clone(),
                    water_freq: plant.water_freq,
                    actions,
                    feed_note: actions
                        .feed
                        .then(|| plant.feed_text().map(str::to_string))
                        .flatten(),
                    warning: plant.warning_text().map(str::to_string),
                    stage_hint: plant.growth_stage().map(|s| s.hint().to_string()),
                    advisories: self.advisories(plant, date),
                })
            })
            .collect()
    }

    pub fn plan_reminders(&self, plants: &[PlantRecord], date: NaiveDate) -> Vec<PlanReminder> {
        unique(plants)
            .filter_map(|plant| {
                let actions = self.due_actions(plant, date);
                if !actions.has_plan() {
                    return None;
                }
                Some(PlanReminder {
                    key: plant.key().to_string(),
                    name: plant.name.clone(),
                    prune: actions.prune,
                    repot: actions.repot,
                    note: actions
                        .repot
                        .then(|| plant.repot_text().map(str::to_string))
                        .flatten(),
                })
            })
            .collect()
    }

    pub fn plan_for(&self, plants: &[PlantRecord], date: NaiveDate) -> TodayPlan {
        let plan = TodayPlan {
            date,
            tasks: self.due_tasks(plants, date),
            reminders: self.plan_reminders(plants, date),
        };
        log::debug!(
            "plan for {}: {} tasks, {} reminders",
            date,
            plan.tasks.len(),
            plan.reminders.len()
        );
        plan
    }
}

fn unique(plants: &[PlantRecord]) -> impl Iterator<Item = &PlantRecord> {
    let mut seen = HashSet::new();
    plants.iter().filter(move |p| seen.insert(p.key()))
}
