//! Password validator - runs a policy of rules against a candidate password.

use secrecy::SecretString;
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::dictionary::Dictionary;
use crate::rules::{Rule, RuleViolation};

/// Minimum length used by [`Validator::standard`].
pub const DEFAULT_MIN_LENGTH: usize = 6;

/// The validator itself is misconfigured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("There are no rules in validator")]
    NoRules,
    #[error("Rule \"{0}\" is registered more than once")]
    DuplicateRule(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

/// An ordered policy of rules.
///
/// Rules run in the order they were added. Duplicates are accepted by
/// [`add_rule`](Validator::add_rule) and only reported when checking.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: Vec<Rule>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference policy: length of at least [`DEFAULT_MIN_LENGTH`],
    /// mixed case, a digit, a symbol, no dictionary word, and enough entropy.
    pub fn standard(dictionary: Dictionary) -> Self {
        Self::new()
            .with_rule(Rule::length(DEFAULT_MIN_LENGTH))
            .with_rule(Rule::Case)
            .with_rule(Rule::Number)
            .with_rule(Rule::Symbol)
            .with_rule(Rule::dictionary(dictionary))
            .with_rule(Rule::Entropy)
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.add_rule(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks that the policy is usable: at least one rule and no repeated names.
    ///
    /// Every rule is compared with every rule, itself included, so a name
    /// is a duplicate when it is counted twice or more.
    pub fn check_rules(&self) -> Result<(), PolicyError> {
        if self.rules.is_empty() {
            return Err(PolicyError::NoRules);
        }
        for rule in &self.rules {
            let count = self
                .rules
                .iter()
                .filter(|other| other.name() == rule.name())
                .count();
            if count >= 2 {
                return Err(PolicyError::DuplicateRule(rule.name()));
            }
        }
        Ok(())
    }

    /// Validates the policy, then runs every rule against `password`.
    ///
    /// Stops at the first rule that fails; later rules are not run.
    ///
    /// # Returns
    /// - `Ok(())` if the policy is valid and every rule passes
    /// - `Err(ValidationError::Policy(_))` if the policy is empty or has duplicates
    /// - `Err(ValidationError::Rule(_))` with the first failing rule's reason
    pub fn check_password(&self, password: &SecretString) -> Result<(), ValidationError> {
        if let Err(e) = self.check_rules() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Password policy rejected: {}", e);
            return Err(e.into());
        }

        for rule in &self.rules {
            if let Err(violation) = rule.check(password) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by rule {}", violation.rule);
                return Err(violation.into());
            }
        }
        Ok(())
    }
}

impl Extend<Rule> for Validator {
    fn extend<I: IntoIterator<Item = Rule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl FromIterator<Rule> for Validator {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Async version that sends the check outcome via channel.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    validator: &Validator,
    password: &SecretString,
    tx: mpsc::Sender<Result<(), ValidationError>>,
) {
    let outcome = validator.check_password(password);

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
