//! # RustPal Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! The `Responder` turns one line of user text into one `Reply`. It owns:
//! - the ordered intent table (`intents`)
//! - the session memory holding the user's name (`memory`)
//! - the content pools and command catalog (`content`)
//! - a `Clock` and a random source, both injectable for tests
//!
//! ## Dispatch
//!
//! 1. Blank input gets a fixed prompt; no rule is evaluated.
//! 2. Otherwise the trimmed text is searched with each rule in order and the
//!    first match selects the handler.
//! 3. If nothing matches, the closest command hint is offered (`suggest`),
//!    or a generic "didn't understand" message when nothing is close.
//!
//! The goodbye intent is the only one that ends a session. It says so through
//! `Reply::control`, never through the reply text.
//!
//! ## Examples
//!
//! ```rust
//! let mut responder = Responder::from_config(&Config::default(), Some(42))?;
//! let reply = responder.respond("my name is alice");
//! assert_eq!(reply.text, "Nice to meet you, Alice!");
//! assert!(responder.respond("bye").is_exit());
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Captures;
use tracing::debug;

pub mod clock;
pub mod content;
pub mod intents;
pub mod memory;
pub mod suggest;

use clock::{Clock, SystemClock};
use content::Content;
use intents::{Intent, IntentRule};
use memory::{Name, SessionMemory};

const EMPTY_INPUT_PROMPT: &str = "Say something and I'll try to help. Type 'help' for options.";
const NOT_UNDERSTOOD: &str = "I didn't understand that. Type 'help' to see what I can do.";

/// Whether the conversation continues after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Displayable reply text plus the out-of-band session signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub control: Control,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Control::Continue,
        }
    }

    fn farewell(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Control::Exit,
        }
    }

    pub fn is_exit(&self) -> bool {
        self.control == Control::Exit
    }
}

/// One conversation's worth of pattern-matching responder.
pub struct Responder<C = SystemClock, R = StdRng> {
    rules: Vec<IntentRule>,
    memory: SessionMemory,
    content: Content,
    clock: C,
    rng: R,
}

impl Responder<SystemClock, StdRng> {
    /// Builds a responder on the system clock. `seed` makes the random
    /// choices reproducible; `None` seeds from the OS.
    pub fn from_config(config: &Config, seed: Option<u64>) -> Result<Self> {
        let content = Content::from_config(config)?;
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(content, SystemClock, rng)
    }
}

impl<C: Clock, R: Rng> Responder<C, R> {
    pub fn new(content: Content, clock: C, rng: R) -> Result<Self> {
        let rules = intents::compile_rules().context("Failed to build the intent table")?;
        debug!("Compiled {} intent rules", rules.len());
        Ok(Self {
            rules,
            memory: SessionMemory::default(),
            content,
            clock,
            rng,
        })
    }

    pub fn memory(&self) -> &SessionMemory {
        &self.memory
    }

    /// Produces the reply for one line of user input.
    pub fn respond(&mut self, input: &str) -> Reply {
        let text = input.trim();
        if text.is_empty() {
            return Reply::say(EMPTY_INPUT_PROMPT);
        }

        let matched = self.rules.iter().enumerate().find_map(|(index, rule)| {
            rule.pattern
                .captures(text)
                .map(|caps| (index, rule.intent, caps))
        });

        match matched {
            Some((index, intent, caps)) => {
                debug!(rule = index, ?intent, "Matched intent");
                self.handle(intent, &caps, text)
            }
            None => {
                debug!("No intent matched, falling back to suggestions");
                Reply::say(self.fallback(text))
            }
        }
    }

    fn handle(&mut self, intent: Intent, caps: &Captures<'_>, text: &str) -> Reply {
        match intent {
            Intent::Greeting => Reply::say(self.greet()),
            Intent::HowAreYou => {
                Reply::say("Doing great, thanks for asking! How can I help today?")
            }
            Intent::RememberName => match caps.get(1).and_then(|m| Name::parse(m.as_str())) {
                Some(name) => {
                    let stored = self.memory.remember_name(name);
                    debug!(name = %stored, "Remembered user name");
                    Reply::say(format!("Nice to meet you, {stored}!"))
                }
                // The pattern only captures valid shapes; stay graceful regardless.
                None => Reply::say(self.fallback(text)),
            },
            Intent::BotName => Reply::say(format!(
                "I'm a tiny Rust chatbot. You can call me {}.",
                self.content.bot_name
            )),
            Intent::Time => Reply::say(self.clock.now().format("It's %I:%M %p.").to_string()),
            Intent::Date => Reply::say(
                self.clock
                    .now()
                    .format("Today is %A, %B %d, %Y.")
                    .to_string(),
            ),
            Intent::Joke => Reply::say(self.content.jokes.pick(&mut self.rng)),
            Intent::Help => Reply::say(format!(
                "Try: {}.\nTip: Tell me your name with: 'my name is <Name>'.",
                self.content.commands.joined()
            )),
            Intent::Thanks => Reply::say("You're welcome!"),
            Intent::Goodbye => Reply::farewell("Goodbye! See you soon."),
            Intent::Support => Reply::say(
                "I'm sorry you're feeling that way. Want to talk about it a bit more? \
                 I'm here to listen.",
            ),
        }
    }

    fn greet(&mut self) -> String {
        let base = self.content.greetings.pick(&mut self.rng);
        let greeting = match self.memory.name() {
            Some(name) => format!("{base} {name}!"),
            None => base.to_string(),
        };
        greeting.trim().to_string()
    }

    fn fallback(&self, text: &str) -> String {
        let query = text.to_lowercase();
        let candidates: Vec<String> = self
            .content
            .commands
            .entries()
            .iter()
            .map(|c| c.to_lowercase())
            .collect();
        match suggest::closest_match(&query, candidates.iter().map(String::as_str)) {
            Some(suggestion) => format!(
                "Not sure I got that. Did you mean: '{suggestion}'? Type 'help' to see options."
            ),
            None => NOT_UNDERSTOOD.to_string(),
        }
    }
}
