//! Integration tests for slotbook
//!
//! These drive the app through key events, render it to a test terminal,
//! reopen the SQLite store, and run the binary.

#[path = "../common/mod.rs"]
pub mod common;

pub mod booking_flow;
pub mod cli;
pub mod persistence;
pub mod rendering;
pub mod repository_props;
