//! Display highlight derived from an item's due date.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Background colour applied to overdue items: a dark red.
pub const OVERDUE_COLOR: Rgb = Rgb::new(151, 49, 49);

/// An opaque RGB display colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub red: u8,
    /// Green channel.
    pub green: u8,
    /// Blue channel.
    pub blue: u8,
}

impl Rgb {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Visual treatment of a to-do item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// Unhighlighted appearance.
    Default,
    /// The item's due date has passed.
    Overdue,
}

impl Highlight {
    /// Maps an overdue flag onto its highlight.
    #[must_use]
    pub const fn from_overdue(overdue: bool) -> Self {
        if overdue { Self::Overdue } else { Self::Default }
    }

    /// Resolves the background colour, given the colour used for overdue
    /// items. The default appearance has no background override.
    #[must_use]
    pub const fn background(self, overdue_color: Rgb) -> Option<Rgb> {
        match self {
            Self::Default => None,
            Self::Overdue => Some(overdue_color),
        }
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
