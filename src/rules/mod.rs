//! Password rules
//!
//! Each rule checks one aspect of a candidate password. The kinds are a
//! closed set and [`Rule::check`] is the single place that dispatches them.

mod case;
mod dictionary;
mod entropy;
mod length;
mod number;
mod symbol;

use std::path::Path;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::dictionary::{Dictionary, DictionaryError};

pub use entropy::{ENTROPY_THRESHOLD, estimate_entropy};

/// A rule rejected the password.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{rule} rule failed: {reason}")]
pub struct RuleViolation {
    /// Name of the rule that failed.
    pub rule: &'static str,
    /// Human readable reason.
    pub reason: String,
}

/// Result type for rule checks.
/// - `Ok(())` - Rule passed
/// - `Err(reason)` - Rule failed with reason
type CheckResult = Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Minimum number of characters.
    Length { min_len: usize },
    /// At least one lowercase and one uppercase letter.
    Case,
    /// At least one digit.
    Number,
    /// At least one symbol from the fixed symbol set.
    Symbol,
    /// No word from the dictionary as a substring.
    Dictionary(Dictionary),
    /// Class-presence entropy estimate of at least [`ENTROPY_THRESHOLD`] bits.
    Entropy,
}

impl Rule {
    pub fn length(min_len: usize) -> Self {
        Rule::Length { min_len }
    }

    pub fn dictionary(dictionary: Dictionary) -> Self {
        Rule::Dictionary(dictionary)
    }

    /// Loads the word list once and wraps it in a dictionary rule.
    pub fn dictionary_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Dictionary::from_path(path).map(Rule::Dictionary)
    }

    /// Stable name of the rule kind. Two rules with the same name cannot share a validator.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Length { .. } => "Simple",
            Rule::Case => "Register",
            Rule::Number => "Number",
            Rule::Symbol => "Symbol",
            Rule::Dictionary(_) => "Dictionary",
            Rule::Entropy => "Entropy",
        }
    }

    /// Checks `password` against this rule.
    ///
    /// # Returns
    /// - `Ok(())` if the password satisfies the rule
    /// - `Err(violation)` with the rule's reason otherwise
    pub fn check(&self, password: &SecretString) -> Result<(), RuleViolation> {
        let pwd = password.expose_secret();
        let outcome = match self {
            Rule::Length { min_len } => length::length_rule(pwd, *min_len),
            Rule::Case => case::case_rule(pwd),
            Rule::Number => number::number_rule(pwd),
            Rule::Symbol => symbol::symbol_rule(pwd),
            Rule::Dictionary(words) => dictionary::dictionary_rule(pwd, words),
            Rule::Entropy => entropy::entropy_rule(pwd),
        };
        outcome.map_err(|reason| RuleViolation {
            rule: self.name(),
            reason,
        })
    }
}
