//! # RustPal Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the RustPal CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! - `responder`: the pattern-matching conversation core
//! - `commands`: one module per CLI command (`chat`, `ask`, `commands`)
//! - `common`: terminal helpers shared by commands
//! - `core`: configuration and error types
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation (same as `rustpal chat`)
//! rustpal
//!
//! # One-shot answer with reproducible randomness
//! rustpal --seed 7 ask tell me a joke
//!
//! # Log at debug level to stderr while chatting
//! rustpal -vv chat
//! ```
//!
//! Logs always go to stderr so stdout carries only the conversation.
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod common;
mod core;
mod responder;

use commands::GlobalOptions;

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "rustpal",
    about = "🦀 RustPal: a tiny pattern-matching chatbot",
    long_about = "Chat with a small rule-based bot that greets you, remembers your name,\n\
                  tells the time and date, and cracks the occasional joke.",
    propagate_version = true,
    version
)]
struct Cli {
    /// Command to run; starts an interactive chat when omitted.
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file to use instead of the user/project files.
    #[arg(long, global = true, env = "RUSTPAL_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for random replies, for reproducible sessions.
    #[arg(long, global = true, value_name = "N")]
    seed: Option<u64>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive conversation.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Answer a single message and exit.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the commands the bot understands.
    #[command(name = "commands")]
    Catalog(commands::list::ListArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let options = GlobalOptions {
        config_path: cli.config,
        seed: cli.seed,
    };

    let command_result = match cli.command {
        None => commands::chat::handle_chat(commands::chat::ChatArgs::default(), &options),
        Some(Commands::Chat(args)) => commands::chat::handle_chat(args, &options),
        Some(Commands::Ask(args)) => commands::ask::handle_ask(args, &options),
        Some(Commands::Catalog(args)) => commands::list::handle_list(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
