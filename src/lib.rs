//! Password policy validation library
//!
//! This library checks candidate passwords against an ordered policy of
//! named rules, reporting the first rule that rejects the password.
//!
//! # Rules
//!
//! | Rule | Name | Rejects when |
//! |---|---|---|
//! | [`Rule::Length`] | `Simple` | fewer characters than the minimum |
//! | [`Rule::Case`] | `Register` | no lowercase or no uppercase letter |
//! | [`Rule::Number`] | `Number` | no digit |
//! | [`Rule::Symbol`] | `Symbol` | none of `! @ # $ ^ * . - _ +` |
//! | [`Rule::Dictionary`] | `Dictionary` | a dictionary word is a substring |
//! | [`Rule::Entropy`] | `Entropy` | [`estimate_entropy`] below [`ENTROPY_THRESHOLD`] |
//!
//! # Features
//!
//! - `async` (default): Enables channel delivery of check results
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{Rule, Validator};
//! use secrecy::SecretString;
//!
//! let mut validator = Validator::new();
//! validator.add_rule(Rule::length(6));
//! validator.add_rule(Rule::Case);
//! validator.add_rule(Rule::Number);
//! validator.add_rule(Rule::Symbol);
//! validator.add_rule(Rule::dictionary_from_path("assets/pswd-dict.txt").expect("Failed to load dictionary"));
//! validator.add_rule(Rule::Entropy);
//!
//! let password = SecretString::new("eh1fUIDn!ejrj".to_string().into());
//! match validator.check_password(&password) {
//!     Ok(()) => println!("Password accepted"),
//!     Err(e) => println!("Password rejected: {}", e),
//! }
//! ```

// Internal modules
mod charset;
mod dictionary;
mod rules;
mod validator;

// Public API
pub use charset::CharacterClass;
pub use dictionary::{Dictionary, DictionaryError};
pub use rules::{ENTROPY_THRESHOLD, Rule, RuleViolation, estimate_entropy};
pub use validator::{DEFAULT_MIN_LENGTH, PolicyError, ValidationError, Validator};

#[cfg(feature = "async")]
pub use validator::check_password_tx;
