//! Port contracts for to-do list management.
//!
//! Ports define storage- and presentation-agnostic interfaces used by the
//! to-do list manager.

pub mod observer;
pub mod repository;

pub use observer::{TodoListObserver, TodoListSnapshot};
pub use repository::{TodoListError, TodoListRepository, TodoListResult};

#[cfg(test)]
pub use observer::MockTodoListObserver;
