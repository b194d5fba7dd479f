//! # RustPal Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the RustPal CLI and the
//! options they share. Each command defines its own arguments structure and
//! handler function; `main.rs` routes to them.
//!
//! ## Commands
//!
//! - `chat`: Interactive conversation (the default when no command is given)
//! - `ask`: Answer a single message and exit
//! - `list`: Print the command catalog (`rustpal commands`)
//!
use crate::core::config::{self, Config};
use crate::core::error::Result;
use crate::responder::Responder;
use anyhow::Context;
use std::path::PathBuf;

/// Command for the interactive read/respond loop.
pub mod chat;
/// Command for answering one message from the command line.
pub mod ask;
/// Command for printing the command catalog.
pub mod list;

/// Options accepted by every command.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit configuration file; replaces the user/project lookup.
    pub config_path: Option<PathBuf>,
    /// Seed for the responder's random choices.
    pub seed: Option<u64>,
}

impl GlobalOptions {
    /// Loads configuration and builds a fresh responder from it.
    pub fn build_responder(&self) -> Result<(Config, Responder)> {
        let cfg = config::load_config(self.config_path.as_deref())
            .context("Failed to load RustPal configuration")?;
        let responder = Responder::from_config(&cfg, self.seed)?;
        Ok((cfg, responder))
    }
}
