//! Scheduling
//!
//! Pure mapping from (plant records, date) to due tasks and plan reminders.

mod config;
mod rules;
mod scheduler;

pub use config::{PlanWindow, ScheduleConfig};
pub use rules::{default_rules, PlantMatcher, SeasonalRule};
pub use scheduler::{waters_on, DueTask, PlanReminder, Scheduler, TodayPlan};
