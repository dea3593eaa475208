//! Repository port for the ordered to-do collection.

use crate::todo::domain::{TodoId, TodoItem, TodoName};
use thiserror::Error;

/// Result type for to-do list repository operations.
pub type TodoListResult<T> = Result<T, TodoListError>;

/// Ordered, session-scoped to-do storage contract.
///
/// Implementations preserve insertion order and never hold two items with
/// the same name.
pub trait TodoListRepository {
    /// Appends an item to the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListError::DuplicateId`] when the identifier already
    /// exists or [`TodoListError::DuplicateName`] when the name is already
    /// taken. The list is left unchanged on error.
    fn insert(&mut self, item: TodoItem) -> TodoListResult<()>;

    /// Removes the item with the given identifier.
    ///
    /// Returns `None` when no such item exists. The relative order of the
    /// remaining items is preserved.
    fn remove(&mut self, id: TodoId) -> Option<TodoItem>;

    /// Finds an item by identifier.
    fn find_by_id(&self, id: TodoId) -> Option<&TodoItem>;

    /// Finds an item by exact name.
    fn find_by_name(&self, name: &TodoName) -> Option<&TodoItem>;

    /// Returns all items in insertion order.
    fn items(&self) -> &[TodoItem];

    /// Returns the number of stored items.
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Returns `true` when the list holds no items.
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

/// Errors returned by to-do list repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoListError {
    /// An item with the same identifier already exists.
    #[error("duplicate todo identifier: {0}")]
    DuplicateId(TodoId),

    /// An item with the same name already exists.
    #[error("duplicate todo name: {0}")]
    DuplicateName(TodoName),
}
