//! Change notification port used by presentation layers to redraw.

use crate::todo::domain::{TodoEntry, TodoItem};
use chrono::NaiveDate;
use mockable::Clock;

/// Immutable copy of the list taken after a mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListSnapshot {
    items: Vec<TodoItem>,
}

impl TodoListSnapshot {
    /// Creates a snapshot from items in list order.
    #[must_use]
    pub const fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Returns the items in list order.
    #[must_use]
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the snapshot holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Evaluates every item against `today`.
    #[must_use]
    pub fn entries_on(&self, today: NaiveDate) -> Vec<TodoEntry> {
        TodoEntry::evaluate_all(&self.items, today)
    }

    /// Evaluates every item against the clock's current local date.
    #[must_use]
    pub fn entries(&self, clock: &impl Clock) -> Vec<TodoEntry> {
        self.entries_on(clock.local().date_naive())
    }
}

/// Receives the list state after every successful mutation.
#[cfg_attr(test, mockall::automock)]
pub trait TodoListObserver {
    /// Called once per applied `add` or `remove`.
    fn on_change(&mut self, snapshot: &TodoListSnapshot);
}
