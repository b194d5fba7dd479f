//! # RustPal UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal interaction helpers shared by the commands. Currently this is
//! line input for the chat loop (`prompts`).
//!
pub mod prompts;
