//! # RustPal Command Catalog Listing
//!
//! File: cli/src/commands/list.rs
//!
//! Implements `rustpal commands`, which prints the same command hints the
//! `help` intent lists, one per line. Configuration is not consulted because
//! the catalog is fixed.
//!
use crate::core::error::Result;
use crate::responder::content::CommandCatalog;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;

/// # List Arguments (`ListArgs`)
///
/// No options; the struct keeps the command shape consistent with the others.
#[derive(Parser, Debug)]
pub struct ListArgs {}

/// # Handle List Command (`handle_list`)
pub fn handle_list(_args: ListArgs) -> Result<()> {
    info!("Listing command catalog");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_catalog(&CommandCatalog::default(), &mut out)?;
    Ok(())
}

fn write_catalog<W: Write>(catalog: &CommandCatalog, out: &mut W) -> io::Result<()> {
    for entry in catalog.entries() {
        writeln!(out, "{entry}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_catalog_one_per_line() {
        let mut out = Vec::new();
        write_catalog(&CommandCatalog::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "hello");
        assert_eq!(lines[2], "my name is <Name>");
        assert_eq!(lines[9], "bye");
    }
}
