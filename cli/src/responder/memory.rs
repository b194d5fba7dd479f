//! # Session Memory
//!
//! File: cli/src/responder/memory.rs
//!
//! ## Overview
//!
//! The responder remembers exactly one thing per session: the user's name.
//! Memory lives as long as the `Responder` that owns it and is never written
//! to disk.
//!
//! Names are held as a `Name`, whose only constructor checks the shape
//! (a letter followed by letters, hyphens or apostrophes) and normalizes the
//! casing, so memory can never contain anything else.
//!
use std::fmt;

/// A validated, title-cased user name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    /// Validates `raw` and title-cases it.
    ///
    /// Returns `None` unless `raw` (ignoring surrounding whitespace) is an
    /// ASCII letter followed by any number of ASCII letters, `-` or `'`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let mut chars = raw.chars();
        let first = chars.next()?;
        if !first.is_ascii_alphabetic() {
            return None;
        }
        if !chars.all(|c| c.is_ascii_alphabetic() || c == '-' || c == '\'') {
            return None;
        }
        Some(Self(title_case(raw)))
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercases every letter that follows a non-letter and lowercases the rest,
/// so `o'brien` becomes `O'Brien` and `MARY-jane` becomes `Mary-Jane`.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut prev_is_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Per-session state. Only the name-capture intent writes to it.
#[derive(Debug, Default, Clone)]
pub struct SessionMemory {
    name: Option<Name>,
}

impl SessionMemory {
    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    /// Stores `name`, replacing any earlier one, and returns the stored value.
    pub fn remember_name(&mut self, name: Name) -> &Name {
        self.name.insert(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_cases() {
        assert_eq!(Name::parse("alice").unwrap().as_str(), "Alice");
        assert_eq!(Name::parse("ALICE").unwrap().as_str(), "Alice");
        assert_eq!(Name::parse("o'brien").unwrap().as_str(), "O'Brien");
        assert_eq!(Name::parse("MARY-jane").unwrap().as_str(), "Mary-Jane");
        assert_eq!(Name::parse("  bob ").unwrap().as_str(), "Bob");
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(Name::parse("").is_none());
        assert!(Name::parse("   ").is_none());
        assert!(Name::parse("-alice").is_none());
        assert!(Name::parse("'alice").is_none());
        assert!(Name::parse("r2d2").is_none());
        assert!(Name::parse("anne marie").is_none());
        assert!(Name::parse("zoë").is_none());
    }

    #[test]
    fn test_memory_starts_empty_and_remembers_latest() {
        let mut memory = SessionMemory::default();
        assert!(memory.name().is_none());

        memory.remember_name(Name::parse("alice").unwrap());
        assert_eq!(memory.name().map(Name::as_str), Some("Alice"));

        let stored = memory.remember_name(Name::parse("bob").unwrap());
        assert_eq!(stored.as_str(), "Bob");
        assert_eq!(memory.name().map(Name::as_str), Some("Bob"));
    }
}
