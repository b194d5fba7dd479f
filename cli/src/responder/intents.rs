//! # Intent Table
//!
//! File: cli/src/responder/intents.rs
//!
//! ## Overview
//!
//! The ordered list of (pattern, intent) rules the responder scans for every
//! input. Each pattern is a case-insensitive *search*, so a rule fires when
//! its pattern appears anywhere in the text.
//!
//! ## Ordering
//!
//! Several patterns can match the same input ("hey, how are you?" contains
//! both a greeting and a how-are-you). The first rule in `INTENT_PATTERNS`
//! whose pattern matches wins and the rest are not evaluated, so the order
//! below is part of the behavior and must not be shuffled.
//!
use crate::core::error::PalError;
use regex::{Regex, RegexBuilder};

/// One recognized conversational purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    HowAreYou,
    /// Capture group 1 holds the name.
    RememberName,
    BotName,
    Time,
    Date,
    Joke,
    Help,
    Thanks,
    Goodbye,
    Support,
}

/// Rules in priority order.
const INTENT_PATTERNS: [(Intent, &str); 11] = [
    (Intent::Greeting, r"\b(hi|hello|hey|yo)\b"),
    (Intent::HowAreYou, r"\bhow (are|r) (you|u)\b"),
    // ASCII-only name class: case-insensitive Unicode would also admit
    // U+212A KELVIN SIGN and U+017F LONG S.
    (Intent::RememberName, r"\bmy name is\s+((?-u:[a-z][a-z'\-]*))\b"),
    (Intent::BotName, r"\bwhat'?s your name\b|\bwho are you\b"),
    (Intent::Time, r"\bwhat time is it\b|\bcurrent time\b|\btime\?"),
    (Intent::Date, r"\bwhat'?s the date\b|\btoday'?s date\b|\bdate\?"),
    (Intent::Joke, r"\btell me a joke\b|\bjoke\b"),
    (Intent::Help, r"\b(help|commands)\b"),
    (Intent::Thanks, r"\b(thank(s)?|ty)\b"),
    (Intent::Goodbye, r"\b(bye|exit|quit|goodbye)\b"),
    (Intent::Support, r"\b(sad|down|stressed|anxious|depressed)\b"),
];

/// A compiled matcher paired with the intent it selects.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub intent: Intent,
    pub pattern: Regex,
}

/// Compiles the intent table, preserving priority order.
pub fn compile_rules() -> Result<Vec<IntentRule>, PalError> {
    INTENT_PATTERNS
        .iter()
        .map(|&(intent, pattern)| {
            let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
            Ok::<_, PalError>(IntentRule { intent, pattern })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_match(rules: &[IntentRule], text: &str) -> Option<Intent> {
        rules
            .iter()
            .find(|rule| rule.pattern.is_match(text))
            .map(|rule| rule.intent)
    }

    #[test]
    fn test_rules_compile_in_order() {
        let rules = compile_rules().unwrap();
        let order: Vec<Intent> = rules.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Greeting,
                Intent::HowAreYou,
                Intent::RememberName,
                Intent::BotName,
                Intent::Time,
                Intent::Date,
                Intent::Joke,
                Intent::Help,
                Intent::Thanks,
                Intent::Goodbye,
                Intent::Support,
            ]
        );
    }

    #[test]
    fn test_single_intent_inputs() {
        let rules = compile_rules().unwrap();
        let cases = [
            ("HELLO there", Intent::Greeting),
            ("yo", Intent::Greeting),
            ("how r u", Intent::HowAreYou),
            ("so, how are you?", Intent::HowAreYou),
            ("My Name Is alice", Intent::RememberName),
            ("whats your name", Intent::BotName),
            ("who are you", Intent::BotName),
            ("what time is it", Intent::Time),
            ("current time please", Intent::Time),
            ("time?", Intent::Time),
            ("what's the date", Intent::Date),
            ("todays date", Intent::Date),
            ("date?", Intent::Date),
            ("tell me a joke", Intent::Joke),
            ("commands", Intent::Help),
            ("thank you", Intent::Thanks),
            ("ty", Intent::Thanks),
            ("quit", Intent::Goodbye),
            ("goodbye", Intent::Goodbye),
            ("feeling stressed", Intent::Support),
        ];
        for (text, expected) in cases {
            assert_eq!(first_match(&rules, text), Some(expected), "input: {text}");
        }
    }

    #[test]
    fn test_word_boundaries() {
        let rules = compile_rules().unwrap();
        // "you" must not trip the "yo" greeting, nor "this" the "hi" one.
        assert_eq!(first_match(&rules, "this is you"), None);
        assert_eq!(first_match(&rules, "jokes"), None);
        assert_eq!(first_match(&rules, "helpful"), None);
    }

    #[test]
    fn test_name_capture() {
        let rules = compile_rules().unwrap();
        let rule = &rules[2];
        let caps = rule.pattern.captures("well, my name is  o'brien.").unwrap();
        assert_eq!(&caps[1], "o'brien");
        let caps = rule.pattern.captures("my name is mary-jane!").unwrap();
        assert_eq!(&caps[1], "mary-jane");
        assert!(rule.pattern.captures("my name is 42").is_none());
    }
}
