//! Plant Care Core
//!
//! Layered architecture:
//! - domain: plant records and care/completion value types
//! - schedule: pure due-task evaluation for a given date
//! - repository: the per-day completion store and its storage backends
//! - history, overview, digest: read-only projections used by the views

pub mod clock;
pub mod dataset;
pub mod digest;
pub mod domain;
pub mod error;
pub mod history;
pub mod overview;
pub mod repository;
pub mod schedule;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{
    CardState, CareEvent, Completion, CompletionPatch, DueActions, GrowthStage, MonthSet,
    PlantRecord, TaskAction,
};
pub use error::{CareError, CareResult};
pub use history::{HistoryEntry, HistoryIndex};
pub use repository::{CompletionLog, CompletionStore, MemoryBackend, StorageBackend};
pub use schedule::{
    DueTask, PlanReminder, PlanWindow, PlantMatcher, ScheduleConfig, Scheduler, SeasonalRule,
    TodayPlan,
};
