//! Shared test utilities for slotbook
//!
//! - Store and app fixtures (in-memory and SQLite in a temp dir)
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
