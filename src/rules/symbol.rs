//! Symbol rule - requires a character from the fixed symbol set.

use crate::charset::CharacterClass;

use super::CheckResult;

/// Checks for at least one of `! @ # $ ^ * . - _ +`.
pub(super) fn symbol_rule(password: &str) -> CheckResult {
    if !CharacterClass::Symbol.is_present_in(password) {
        return Err("no special symbols in password".to_string());
    }
    Ok(())
}
