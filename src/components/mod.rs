//! UI Components
//!
//! Leptos components for the landing and checklist views.

mod checklist_page;
mod item_row;
mod landing_page;
mod load_error;

pub use checklist_page::ChecklistPage;
pub use item_row::{GroupItemRow, SimpleItemRow};
pub use landing_page::LandingPage;
pub use load_error::LoadErrorMessage;
