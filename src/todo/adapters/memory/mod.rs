//! In-memory adapter implementations.
//!
//! The list lives only as long as the session that owns it; nothing is
//! persisted.

mod list;

pub use list::InMemoryTodoList;
