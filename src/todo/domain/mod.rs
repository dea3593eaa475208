//! Domain model for to-do list management.
//!
//! The to-do domain models validated item names, calendar due dates, and
//! the derived overdue highlight. Storage and presentation concerns are kept
//! outside of the domain boundary.

mod due_date;
mod entry;
mod error;
mod highlight;
mod ids;
mod item;
mod name;

pub use due_date::DueDate;
pub use entry::TodoEntry;
pub use error::TodoDomainError;
pub use highlight::{Highlight, OVERDUE_COLOR, Rgb};
pub use ids::TodoId;
pub use item::TodoItem;
pub use name::TodoName;
