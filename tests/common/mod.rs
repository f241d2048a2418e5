//! Shared test utilities for kinform
//!
//! - Store fixtures with saved user details
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
