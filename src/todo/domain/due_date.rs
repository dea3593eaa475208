//! Calendar due date for a to-do item.

use super::TodoDomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};

/// Entry format used by the to-do form, e.g. `05/30/2023`.
const ENTRY_FORMAT: &str = "%m/%d/%Y";

/// Format submitted by HTML date inputs, e.g. `2023-05-30`.
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Date an item is due, without a time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DueDate(NaiveDate);

impl DueDate {
    /// Wraps an already-validated calendar date.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parses a due date from raw form text.
    ///
    /// Accepts the `mm/dd/yyyy` entry format and ISO `yyyy-mm-dd`. The
    /// year must be written with four digits. Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::MissingDueDate`] when the text is blank,
    /// or [`TodoDomainError::InvalidDueDate`] when it matches neither
    /// format.
    pub fn parse(text: &str) -> Result<Self, TodoDomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TodoDomainError::MissingDueDate);
        }

        let entry = trimmed
            .rsplit('/')
            .next()
            .filter(|year| is_full_year(year))
            .and_then(|_| NaiveDate::parse_from_str(trimmed, ENTRY_FORMAT).ok());
        let parsed = entry.or_else(|| {
            trimmed
                .split('-')
                .next()
                .filter(|year| is_full_year(year))
                .and_then(|_| NaiveDate::parse_from_str(trimmed, ISO_FORMAT).ok())
        });

        parsed
            .map(Self)
            .ok_or_else(|| TodoDomainError::InvalidDueDate(text.to_owned()))
    }

    /// Returns the wrapped calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }

    /// Formats the date with a `chrono` format string.
    ///
    /// Falls back to the `mm/dd/yyyy` entry format when `pattern` contains
    /// an unsupported specifier.
    #[must_use]
    pub fn format(self, pattern: &str) -> String {
        let mut rendered = String::new();
        if write!(rendered, "{}", self.0.format(pattern)).is_err() {
            return self.to_string();
        }
        rendered
    }
}

impl fmt::Display for DueDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ENTRY_FORMAT))
    }
}

/// `%Y` also accepts short years such as `23`; the form asks for `yyyy`.
fn is_full_year(segment: &str) -> bool {
    segment.len() == 4 && segment.bytes().all(|b| b.is_ascii_digit())
}
