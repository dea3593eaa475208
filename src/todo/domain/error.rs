//! Error types for to-do domain validation.

use thiserror::Error;

/// Errors returned while constructing to-do domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The item name is empty.
    #[error("todo name must not be empty")]
    EmptyName,

    /// No due date was supplied.
    #[error("todo due date is required")]
    MissingDueDate,

    /// The due date text could not be parsed as a calendar date.
    #[error("invalid due date '{0}', expected mm/dd/yyyy")]
    InvalidDueDate(String),
}
