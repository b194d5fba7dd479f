//! # RustPal CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`ask.rs`, `chat.rs`, ...).
//! Every command built here runs against an explicit configuration file in a
//! temporary directory, so a developer's own `~/.config/rustpal/config.toml`
//! or a stray `.rustpal.toml` can never leak into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// # Get RustPal Command (`rustpal_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `rustpal` binary, with
/// no configuration isolation applied.
pub fn rustpal_cmd() -> Command {
    Command::cargo_bin("rustpal").expect("Failed to find rustpal binary for testing")
}

/// # Isolated RustPal Command (`isolated_cmd`)
///
/// Writes `config_toml` to a temporary `pal.toml`, points `RUSTPAL_CONFIG` at
/// it and returns the command. Keep the returned `TempDir` alive until the
/// command has run.
pub fn isolated_cmd(config_toml: &str) -> (TempDir, Command) {
    let (dir, path) = write_config(config_toml);
    let mut cmd = rustpal_cmd();
    cmd.env("RUSTPAL_CONFIG", &path).env_remove("RUST_LOG");
    (dir, cmd)
}

/// # Write Temporary Config (`write_config`)
///
/// Writes `config_toml` to `pal.toml` in a fresh temporary directory and
/// returns both. For tests that spawn the binary themselves, e.g. to signal it.
pub fn write_config(config_toml: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp config dir");
    let path = dir.path().join("pal.toml");
    fs::write(&path, config_toml).expect("Failed to write temp config");
    (dir, path)
}

/// Isolated command using the built-in defaults.
pub fn default_cmd() -> (TempDir, Command) {
    isolated_cmd("")
}
