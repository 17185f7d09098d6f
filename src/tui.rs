//! Terminal front end
//!
//! Presentation adapter for the coordinator: an input box, the suggestion
//! dropdown under it, and the grid of cards that pass the current filter.

mod app;
mod events;
mod render;
mod search_pane;

pub use app::App;
pub use search_pane::SearchPane;
