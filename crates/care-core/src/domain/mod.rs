//! Domain Layer
//!
//! Plant records as supplied by the dataset, plus the small value types the
//! scheduler and completion store exchange.
//! This layer has NO I/O (serde only, for the JSON shapes).

mod care;
mod lenient;
mod plant;
mod stage;

pub use care::{CardState, Completion, CompletionPatch, DueActions, TaskAction};
pub use plant::{CareEvent, MonthSet, PlantRecord};
pub use stage::GrowthStage;
