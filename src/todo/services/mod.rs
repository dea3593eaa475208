//! Application services for to-do list management.

mod manager;

pub use manager::{AddTodoRequest, TodoListManager, TodoListServiceError, TodoListServiceResult};
