//! Todolist: session-scoped to-do list management.
//!
//! This crate provides the state manager behind a to-do entry form. Items
//! carry a name and a due date, duplicate names are refused, items are
//! deleted by identifier, and past-due items are flagged for highlighting.
//!
//! # Architecture
//!
//! Todolist follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and change notification
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//! - **Services**: The list manager orchestrating domain and ports
//! - **View**: Placeholder and card snapshots for presentation layers
//!
//! # Modules
//!
//! - [`todo`]: To-do items, the list manager, and its rendered views

pub mod todo;
