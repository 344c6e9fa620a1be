//! UI Components
//!
//! Leptos components for the three views.

mod collection_view;
mod nav_bar;
mod note_text;
mod plan_list;
mod task_card;
mod today_view;
mod year_view;

pub use collection_view::CollectionView;
pub use nav_bar::NavBar;
pub use note_text::NoteText;
pub use plan_list::PlanList;
pub use task_card::TaskCard;
pub use today_view::TodayView;
pub use year_view::YearView;
