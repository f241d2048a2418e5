//! Integration tests for kinform
//!
//! These tests drive the form the way a user would and check what ends up in storage.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod form_flow;
