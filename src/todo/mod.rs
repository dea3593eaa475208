//! To-do list management for the todolist crate.
//!
//! This module owns the ordered, session-scoped list of to-do items behind
//! the entry form: adding validated items, rejecting duplicate names,
//! removing items by identifier, and flagging overdue items for display.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Presentation snapshots in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
