//! Display configuration for the to-do list.

use crate::todo::domain::{OVERDUE_COLOR, Rgb};
use serde::{Deserialize, Serialize};

/// Message shown when the list holds no items.
pub const DEFAULT_EMPTY_MESSAGE: &str = "You have no todo's left";

/// Date format used on cards, e.g. `05/30/2023`.
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Presentation settings for rendering the list.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// configuration file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoListConfig {
    /// Placeholder text for an empty list.
    pub empty_message: String,
    /// Background colour of overdue cards.
    pub overdue_color: Rgb,
    /// `chrono` format string for due dates on cards.
    pub date_format: String,
}

impl Default for TodoListConfig {
    fn default() -> Self {
        Self {
            empty_message: DEFAULT_EMPTY_MESSAGE.to_owned(),
            overdue_color: OVERDUE_COLOR,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }
}

impl TodoListConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the payload is not
    /// valid JSON or a field has the wrong type.
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }
}
