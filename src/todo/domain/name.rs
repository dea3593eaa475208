//! Validated to-do item name.

use super::TodoDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-empty label of a to-do item.
///
/// The name doubles as the list's deduplication key. It is stored verbatim
/// and compared exactly, so `"History Test"` and `"history test"` are
/// distinct names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TodoName(String);

impl TodoName {
    /// Creates a validated item name.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyName`] when the value is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, TodoDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(TodoDomainError::EmptyName);
        }
        Ok(Self(raw))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TodoName {
    type Error = TodoDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TodoName> for String {
    fn from(name: TodoName) -> Self {
        name.0
    }
}

impl AsRef<str> for TodoName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TodoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
