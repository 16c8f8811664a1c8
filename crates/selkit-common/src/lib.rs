//! Common utilities for the selkit crates.
//!
//! This crate provides shared infrastructure used by the selector builder and
//! the JSON helpers:
//! - **Warning System** - colored terminal output for suspicious but accepted input

pub mod warning;
