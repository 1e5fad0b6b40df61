//! Common utilities for selkit.
//!
//! This crate provides shared infrastructure used by the other selkit crates:
//! - **Warning System** - colored, de-duplicated terminal output for
//!   suspicious-but-accepted input

pub mod warning;
