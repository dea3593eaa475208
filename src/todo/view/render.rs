//! Rendering of entries into placeholder or card views.

use super::TodoListConfig;
use crate::todo::domain::{Highlight, Rgb, TodoEntry, TodoId};
use serde::Serialize;

/// One rendered to-do card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoCard {
    /// Identifier used by the card's delete control.
    pub id: TodoId,
    /// Item name.
    pub name: String,
    /// Due date formatted for display.
    pub due_date: String,
    /// Visual treatment.
    pub highlight: Highlight,
    /// Background override; `None` keeps the default appearance.
    pub background: Option<Rgb>,
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TodoListView {
    /// No items: show the placeholder message.
    Placeholder {
        /// Placeholder text.
        message: String,
    },
    /// One card per item, in list order.
    Collection {
        /// Rendered cards.
        cards: Vec<TodoCard>,
    },
}

impl TodoListView {
    /// Renders entries with the given configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use mockable::DefaultClock;
    /// use todolist::todo::{
    ///     domain::{DueDate, TodoEntry, TodoItem, TodoName},
    ///     view::{TodoListConfig, TodoListView},
    /// };
    ///
    /// let config = TodoListConfig::default();
    /// assert!(TodoListView::render(&[], &config).is_placeholder());
    ///
    /// let due = NaiveDate::from_ymd_opt(2023, 5, 30).expect("valid date");
    /// let name = TodoName::new("History Test").expect("non-empty name");
    /// let item = TodoItem::new(name, DueDate::new(due), &DefaultClock);
    /// let today = NaiveDate::from_ymd_opt(2023, 6, 1).expect("valid date");
    ///
    /// let view = TodoListView::render(&[TodoEntry::evaluate(item, today)], &config);
    /// let card = view.cards().first().expect("one card");
    /// assert_eq!(card.due_date, "05/30/2023");
    /// assert_eq!(card.background.map(|c| c.to_string()).as_deref(), Some("rgb(151, 49, 49)"));
    /// ```
    #[must_use]
    pub fn render(entries: &[TodoEntry], config: &TodoListConfig) -> Self {
        if entries.is_empty() {
            return Self::Placeholder {
                message: config.empty_message.clone(),
            };
        }

        let cards = entries
            .iter()
            .map(|entry| {
                let highlight = entry.highlight();
                TodoCard {
                    id: entry.item.id(),
                    name: entry.item.name().to_string(),
                    due_date: entry.item.due_date().format(&config.date_format),
                    highlight,
                    background: highlight.background(config.overdue_color),
                }
            })
            .collect();
        Self::Collection { cards }
    }

    /// Returns `true` for the placeholder view.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    /// Returns the rendered cards; empty for the placeholder view.
    #[must_use]
    pub fn cards(&self) -> &[TodoCard] {
        match self {
            Self::Placeholder { .. } => &[],
            Self::Collection { cards } => cards,
        }
    }
}
