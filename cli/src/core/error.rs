//! # RustPal Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the RustPal
//! application. Conversation itself never fails: an input that matches no
//! intent is answered by the fallback path, not by an error. Errors only
//! arise around the conversation, while building a responder, loading
//! configuration, or talking to the terminal.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `PalError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.persona.name.trim().is_empty() {
//!     return Err(PalError::Config("persona.name must not be empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the RustPal application.
#[derive(Error, Debug)]
pub enum PalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Intent pattern failed to compile")]
    Pattern {
        #[from]
        source: regex::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("I/O error")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
