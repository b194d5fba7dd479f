//! # RustPal Chat Command
//!
//! File: cli/src/commands/chat.rs
//!
//! ## Overview
//!
//! This module implements `rustpal chat`, the interactive session. It prints
//! a banner, then repeatedly reads a line, hands it to the responder and
//! prints the reply behind the persona label.
//!
//! The session ends when:
//! - the responder answers with `Control::Exit` (the user said goodbye), or
//! - input runs out or the user interrupts, in which case a short farewell
//!   is printed and the command still succeeds.
//!
//! ## Examples
//!
//! ```bash
//! rustpal chat
//! echo "my name is alice" | rustpal
//! ```
//!
//! ```
//! RustPal 🦀: Hi! Type 'help' to see what I can do. Type 'bye' to exit.
//! You: my name is alice
//! RustPal 🦀: Nice to meet you, Alice!
//! You: bye
//! RustPal 🦀: Goodbye! See you soon.
//! ```
//!
use super::GlobalOptions;
use crate::common::ui::prompts::{EditorSource, Line, LineSource, ReaderSource};
use crate::core::error::Result;
use crate::responder::clock::Clock;
use crate::responder::Responder;
use anyhow::Context;
use clap::Parser;
use rand::Rng;
use std::io::{self, IsTerminal, Write};
use tracing::{debug, info, warn};

const USER_PROMPT: &str = "You: ";

/// # Chat Arguments (`ChatArgs`)
///
/// `rustpal chat` takes no options of its own; persona and content come from
/// configuration and `--seed` is global.
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {}

/// How a chat session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user said goodbye.
    Farewell,
    /// Input was exhausted or interrupted.
    InputClosed,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Builds a responder from configuration and runs a session on stdin/stdout.
/// Uses the line editor when stdin is a terminal, plain buffered reads
/// otherwise.
pub fn handle_chat(_args: ChatArgs, options: &GlobalOptions) -> Result<()> {
    info!("Starting chat session");
    let (cfg, mut responder) = options.build_responder()?;

    // Not locked for the whole session: the interrupt watcher writes here too.
    let mut out = io::stdout();
    let end = if io::stdin().is_terminal() {
        let mut source = EditorSource::new()?;
        run_session(&mut responder, &mut source, &mut out, &cfg.persona.label)?
    } else {
        // The line editor sees Ctrl-C as a key press; a plain read only sees SIGINT.
        spawn_interrupt_farewell(&cfg.persona.label)?;
        let mut source = ReaderSource::new(io::stdin().lock());
        run_session(&mut responder, &mut source, &mut out, &cfg.persona.label)?
    };

    debug!(
        ?end,
        remembered = responder.memory().name().is_some(),
        "Chat session finished"
    );
    Ok(())
}

/// # Spawn Interrupt Farewell (`spawn_interrupt_farewell`)
///
/// Starts a watcher thread that waits for Ctrl+C (SIGINT) on a small
/// current-thread Tokio runtime. When the signal arrives it prints the same
/// farewell as end of input and exits the process with status 0, since the
/// main thread may be blocked reading stdin.
///
/// On Unix the handler is registered before this function returns, so an
/// interrupt can never slip in between startup and the first read.
fn spawn_interrupt_farewell(label: &str) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start the signal runtime")?;

    #[cfg(unix)]
    let mut interrupt = {
        let _guard = runtime.enter();
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
            .context("Failed to install Ctrl+C handler")?
    };

    let farewell = format!("\n{label}: Goodbye!");
    std::thread::Builder::new()
        .name("interrupt-watch".into())
        .spawn(move || {
            runtime.block_on(async {
                #[cfg(unix)]
                interrupt.recv().await;

                #[cfg(not(unix))]
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                    std::future::pending::<()>().await;
                }
            });
            info!("Received Ctrl+C, ending chat session");
            let mut out = io::stdout().lock();
            let _ = writeln!(out, "{farewell}");
            let _ = out.flush();
            std::process::exit(0);
        })
        .context("Failed to spawn the interrupt watcher")?;
    Ok(())
}

/// Runs one conversation until goodbye, end of input, or interrupt.
pub fn run_session<C, R, S, W>(
    responder: &mut Responder<C, R>,
    source: &mut S,
    out: &mut W,
    label: &str,
) -> Result<SessionEnd>
where
    C: Clock,
    R: Rng,
    S: LineSource,
    W: Write,
{
    writeln!(
        out,
        "{label}: Hi! Type 'help' to see what I can do. Type 'bye' to exit."
    )?;
    loop {
        if !source.shows_prompt() {
            write!(out, "{USER_PROMPT}")?;
        }
        out.flush()?;

        match source.read_line(USER_PROMPT)? {
            Line::Text(line) => {
                let reply = responder.respond(&line);
                writeln!(out, "{label}: {}", reply.text)?;
                if reply.is_exit() {
                    return Ok(SessionEnd::Farewell);
                }
            }
            Line::Eof | Line::Interrupted => {
                writeln!(out, "\n{label}: Goodbye!")?;
                out.flush()?;
                return Ok(SessionEnd::InputClosed);
            }
        }
    }
}
