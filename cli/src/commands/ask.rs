//! # RustPal Ask Command
//!
//! File: cli/src/commands/ask.rs
//!
//! Implements `rustpal ask <TEXT>...`: the words are joined with single
//! spaces, answered once by a fresh responder, and the reply text is printed
//! to stdout without the persona label. Nothing is remembered between
//! invocations.
//!
//! ```bash
//! $ rustpal ask "what's your name?"
//! I'm a tiny Rust chatbot. You can call me RustPal.
//! ```
//!
use super::GlobalOptions;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to answer. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// # Handle Ask Command (`handle_ask`)
pub fn handle_ask(args: AskArgs, options: &GlobalOptions) -> Result<()> {
    let message = args.text.join(" ");
    info!("Answering one-shot message: {:?}", message);

    let (_cfg, mut responder) = options.build_responder()?;
    let reply = responder.respond(&message);
    println!("{}", reply.text);
    Ok(())
}
