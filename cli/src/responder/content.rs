//! # Responder Content
//!
//! File: cli/src/responder/content.rs
//!
//! ## Overview
//!
//! Static material the responder draws its replies from:
//! - `ContentPool`: a non-empty list of interchangeable lines (greetings, jokes),
//!   one of which is picked uniformly at random per reply
//! - `CommandCatalog`: the human-readable command hints shown by `help` and
//!   used as the candidate set for "did you mean" suggestions
//! - `Content`: the bundle of both plus the bot's persona name
//!
//! Pools can be replaced through the `[content]` table of the configuration;
//! the command catalog is fixed because it documents the intent table.
//!
use crate::core::config::Config;
use crate::core::error::PalError;
use rand::Rng;

const DEFAULT_GREETINGS: [&str; 5] = ["Hey there!", "Hello!", "Hi!", "Yo!", "Namaste!"];

const DEFAULT_JOKES: [&str; 3] = [
    "Why do programmers prefer dark mode? Because light attracts bugs.",
    "I told my computer I needed a break, and it said 'No problem—I'll go to sleep.'",
    "There are 10 kinds of people: those who understand binary and those who don't.",
];

const COMMANDS: [&str; 10] = [
    "hello",
    "how are you",
    "my name is <Name>",
    "what's your name",
    "time",
    "date",
    "joke",
    "help",
    "thanks",
    "bye",
];

/// A non-empty, ordered list of candidate replies.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentPool {
    items: Vec<String>,
}

impl ContentPool {
    /// Builds a pool, rejecting an empty list. `label` names the pool in the error.
    pub fn new(label: &str, items: Vec<String>) -> Result<Self, PalError> {
        if items.is_empty() {
            return Err(PalError::Config(format!(
                "content pool '{label}' must not be empty."
            )));
        }
        Ok(Self { items })
    }

    fn from_static(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Uniformly random element.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> &str {
        &self.items[rng.gen_range(0..self.items.len())]
    }

    #[cfg(test)]
    pub fn items(&self) -> &[String] {
        &self.items
    }
}

/// Ordered command hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandCatalog {
    entries: &'static [&'static str],
}

impl Default for CommandCatalog {
    fn default() -> Self {
        Self { entries: &COMMANDS }
    }
}

impl CommandCatalog {
    pub fn entries(&self) -> &'static [&'static str] {
        self.entries
    }

    /// Catalog entries joined by ", " as shown in the help reply.
    pub fn joined(&self) -> String {
        self.entries.join(", ")
    }
}

/// Everything a responder needs to phrase its replies.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub bot_name: String,
    pub greetings: ContentPool,
    pub jokes: ContentPool,
    pub commands: CommandCatalog,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            bot_name: "RustPal".to_string(),
            greetings: ContentPool::from_static(&DEFAULT_GREETINGS),
            jokes: ContentPool::from_static(&DEFAULT_JOKES),
            commands: CommandCatalog::default(),
        }
    }
}

impl Content {
    /// Applies the persona name and any replacement pools from `config`.
    pub fn from_config(config: &Config) -> Result<Self, PalError> {
        let mut content = Self {
            bot_name: config.persona.name.trim().to_string(),
            ..Self::default()
        };
        if !config.content.greetings.is_empty() {
            content.greetings = ContentPool::new("greetings", config.content.greetings.clone())?;
        }
        if !config.content.jokes.is_empty() {
            content.jokes = ContentPool::new("jokes", config.content.jokes.clone())?;
        }
        Ok(content)
    }
}
