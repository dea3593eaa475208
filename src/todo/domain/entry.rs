//! Read model pairing an item with its derived overdue flag.

use super::{Highlight, TodoItem};
use chrono::NaiveDate;
use serde::Serialize;

/// An item as seen at a particular date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoEntry {
    /// The stored item.
    pub item: TodoItem,
    /// Whether the item was overdue at evaluation time.
    pub overdue: bool,
}

impl TodoEntry {
    /// Evaluates `item` against `today`.
    #[must_use]
    pub fn evaluate(item: TodoItem, today: NaiveDate) -> Self {
        let overdue = item.is_overdue_on(today);
        Self { item, overdue }
    }

    /// Evaluates every item in order against `today`.
    #[must_use]
    pub fn evaluate_all(items: &[TodoItem], today: NaiveDate) -> Vec<Self> {
        items
            .iter()
            .cloned()
            .map(|item| Self::evaluate(item, today))
            .collect()
    }

    /// Returns the highlight matching the overdue flag.
    #[must_use]
    pub const fn highlight(&self) -> Highlight {
        Highlight::from_overdue(self.overdue)
    }
}
