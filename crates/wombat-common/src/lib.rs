//! Common utilities for the Wombat CSS value engine.
//!
//! This crate provides shared infrastructure used by the value engine and its tools:
//! - **Warning System** - deduplicated, colored terminal diagnostics

pub mod warning;
