//! Service layer for adding, removing, and listing to-do items.
//!
//! Provides [`TodoListManager`], which validates submissions, enforces name
//! uniqueness through the repository, and notifies subscribed observers
//! with a fresh snapshot after every applied mutation.

use crate::todo::{
    domain::{DueDate, TodoDomainError, TodoEntry, TodoId, TodoItem, TodoName},
    ports::{TodoListError, TodoListObserver, TodoListRepository, TodoListSnapshot},
};
use chrono::NaiveDate;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Due date as submitted, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DueDateInput {
    Missing,
    Date(DueDate),
    Text(String),
}

impl DueDateInput {
    fn resolve(self) -> Result<DueDate, TodoDomainError> {
        match self {
            Self::Missing => Err(TodoDomainError::MissingDueDate),
            Self::Date(date) => Ok(date),
            Self::Text(text) => DueDate::parse(&text),
        }
    }
}

/// Request payload for adding a to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodoRequest {
    name: String,
    due_date: DueDateInput,
}

impl AddTodoRequest {
    /// Creates a request with a name and a calendar due date.
    #[must_use]
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            due_date: DueDateInput::Date(DueDate::new(due_date)),
        }
    }

    /// Creates a request that carries no due date.
    ///
    /// Such a request is always rejected; it models a form submitted with
    /// the date field left blank.
    #[must_use]
    pub fn without_due_date(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: DueDateInput::Missing,
        }
    }

    /// Creates a request from raw form text.
    ///
    /// The date text is parsed during [`TodoListManager::add`] so that a
    /// missing name is reported ahead of a malformed date.
    #[must_use]
    pub fn from_form(name: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            due_date: DueDateInput::Text(due_date.into()),
        }
    }
}

/// Service-level errors for to-do list operations.
///
/// These errors let callers tell rejections apart. Presentation layers treat
/// every variant as a silent no-op.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoListServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TodoDomainError),
    /// Repository rejected the item.
    #[error(transparent)]
    Repository(#[from] TodoListError),
}

/// Result type for to-do list service operations.
pub type TodoListServiceResult<T> = Result<T, TodoListServiceError>;

/// Session-scoped to-do list orchestration service.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use todolist::todo::{
///     adapters::memory::InMemoryTodoList,
///     services::{AddTodoRequest, TodoListManager},
/// };
///
/// let mut manager = TodoListManager::new(InMemoryTodoList::new(), Arc::new(DefaultClock));
/// let item = manager
///     .add(AddTodoRequest::from_form("History Test", "05/30/2023"))
///     .expect("complete submission is accepted");
///
/// // A second item with the same name is declined.
/// assert!(manager.add(AddTodoRequest::from_form("History Test", "06/01/2023")).is_err());
/// assert_eq!(manager.len(), 1);
///
/// manager.remove(item.id());
/// assert!(manager.is_empty());
/// ```
pub struct TodoListManager<R, C>
where
    R: TodoListRepository,
    C: Clock + Send + Sync,
{
    repository: R,
    clock: Arc<C>,
    observers: Vec<Box<dyn TodoListObserver>>,
}

impl<R, C> TodoListManager<R, C>
where
    R: TodoListRepository,
    C: Clock + Send + Sync,
{
    /// Creates a manager over the given repository and clock.
    #[must_use]
    pub const fn new(repository: R, clock: Arc<C>) -> Self {
        Self {
            repository,
            clock,
            observers: Vec::new(),
        }
    }

    /// Registers an observer that receives a snapshot after each applied
    /// mutation.
    pub fn subscribe(&mut self, observer: impl TodoListObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Adds an item to the end of the list.
    ///
    /// Checks run in order: empty name, missing or invalid due date, then
    /// duplicate name. A rejected request leaves the list untouched and
    /// notifies nobody.
    ///
    /// # Errors
    ///
    /// Returns [`TodoListServiceError::Domain`] when the name or due date is
    /// invalid, or [`TodoListServiceError::Repository`] when an item with
    /// the same name already exists.
    pub fn add(&mut self, request: AddTodoRequest) -> TodoListServiceResult<TodoItem> {
        let item = match self.build_item(request) {
            Ok(item) => item,
            Err(err) => {
                debug!(reason = %err, "todo rejected");
                return Err(err);
            }
        };

        if let Err(err) = self.repository.insert(item.clone()) {
            debug!(reason = %err, "todo rejected");
            return Err(err.into());
        }

        info!(todo_id = %item.id(), name = %item.name(), due = %item.due_date(), "todo added");
        self.notify();
        Ok(item)
    }

    /// Removes the item with the given identifier.
    ///
    /// Returns the removed item, or `None` when the identifier is unknown,
    /// in which case nothing changes.
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let Some(removed) = self.repository.remove(id) else {
            debug!(todo_id = %id, "remove ignored: unknown todo");
            return None;
        };
        info!(todo_id = %id, remaining = self.repository.len(), "todo removed");
        self.notify();
        Some(removed)
    }

    /// Returns the items in list order, each with its overdue flag evaluated
    /// against the clock at call time.
    #[must_use]
    pub fn entries(&self) -> Vec<TodoEntry> {
        TodoEntry::evaluate_all(self.repository.items(), self.clock.local().date_naive())
    }

    /// Returns the stored items in list order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        self.repository.items()
    }

    /// Finds an item by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&TodoItem> {
        let todo_name = TodoName::new(name).ok()?;
        self.repository.find_by_name(&todo_name)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    /// Returns `true` when the list is empty and the placeholder should be
    /// shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Copies the current list into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> TodoListSnapshot {
        TodoListSnapshot::new(self.repository.items().to_vec())
    }

    fn build_item(&self, request: AddTodoRequest) -> TodoListServiceResult<TodoItem> {
        let AddTodoRequest { name, due_date } = request;
        let todo_name = TodoName::new(name)?;
        let due = due_date.resolve()?;
        Ok(TodoItem::new(todo_name, due, &*self.clock))
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }
}
