//! To-do item aggregate.

use super::{DueDate, Highlight, TodoId, TodoName};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single to-do entry with a name and a due date.
///
/// The overdue flag is not stored. It is evaluated against the clock every
/// time it is read so that an item turns overdue as days pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    id: TodoId,
    name: TodoName,
    due_date: DueDate,
    created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Creates a new item with a freshly generated identifier.
    #[must_use]
    pub fn new(name: TodoName, due_date: DueDate, clock: &impl Clock) -> Self {
        Self {
            id: TodoId::new(),
            name,
            due_date,
            created_at: clock.utc(),
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub const fn name(&self) -> &TodoName {
        &self.name
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> DueDate {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when the due date is strictly before `today`.
    #[must_use]
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.due_date.date() < today
    }

    /// Returns `true` when the due date is strictly before the clock's
    /// current local date.
    #[must_use]
    pub fn is_overdue(&self, clock: &impl Clock) -> bool {
        self.is_overdue_on(clock.local().date_naive())
    }

    /// Returns the highlight for the clock's current local date.
    #[must_use]
    pub fn highlight(&self, clock: &impl Clock) -> Highlight {
        Highlight::from_overdue(self.is_overdue(clock))
    }
}
