//! Adapter implementations for to-do list ports.

pub mod memory;
