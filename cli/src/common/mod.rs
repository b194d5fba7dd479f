//! # RustPal Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared helpers that are not specific to a single command.
//!

/// Utilities for terminal user interface elements (line input).
pub mod ui;
