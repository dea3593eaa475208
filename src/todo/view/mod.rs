//! Presentation snapshots for the to-do list.
//!
//! The view layer turns the manager's entries into what a UI draws: either
//! the empty-list placeholder or one card per item, with overdue cards
//! carrying the highlight colour.

mod config;
mod render;
mod subscriber;

pub use config::TodoListConfig;
pub use render::{TodoCard, TodoListView};
pub use subscriber::TodoView;
