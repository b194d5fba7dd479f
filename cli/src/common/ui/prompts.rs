//! # RustPal Line Input (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! The chat loop reads user lines through the `LineSource` trait so the same
//! loop can run against a terminal, a pipe, or an in-memory buffer in tests.
//!
//! - `EditorSource`: interactive terminal input via `rustyline` (line editing,
//!   history, Ctrl-C / Ctrl-D detection). Prints its own prompt.
//! - `ReaderSource`: any `BufRead`, e.g. piped stdin. Does not print a prompt;
//!   the caller does.
//!
//! Both report end of input and interrupts as `Line` variants rather than
//! errors, because the chat loop treats them as a normal way to leave.
//!
use crate::core::error::{PalError, Result};
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::BufRead;
use tracing::{debug, warn};

/// Outcome of asking for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A line of text, without its trailing newline.
    Text(String),
    /// Input is exhausted.
    Eof,
    /// The user interrupted (Ctrl-C).
    Interrupted,
}

/// Something the chat loop can pull lines from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line>;

    /// True when `read_line` renders `prompt` itself.
    fn shows_prompt(&self) -> bool {
        false
    }
}

/// Reads lines from any buffered reader.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Line> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .map_err(PalError::from)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(Line::Eof);
        }
        // Invalid UTF-8 becomes U+FFFD; one bad byte should not end the session.
        let text = String::from_utf8_lossy(&buf);
        Ok(Line::Text(text.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Interactive terminal input with line editing and history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self> {
        let editor =
            DefaultEditor::new().map_err(|e| PalError::Terminal(e.to_string()))?;
        debug!("Line editor initialized");
        Ok(Self { editor })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str) -> Result<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("Could not record history entry: {}", e);
                    }
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(e) => Err(PalError::Terminal(e.to_string()).into()),
        }
    }

    fn shows_prompt(&self) -> bool {
        true
    }
}
