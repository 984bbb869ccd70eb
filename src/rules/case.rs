//! Case rule - requires both lowercase and uppercase letters.

use crate::charset::CharacterClass;

use super::CheckResult;

/// Checks for at least one lowercase and one uppercase letter.
///
/// Lowercase is checked first, so a password with neither reports the
/// lowercase failure.
pub(super) fn case_rule(password: &str) -> CheckResult {
    if !CharacterClass::Lowercase.is_present_in(password) {
        return Err("no lowercase symbols".to_string());
    }
    if !CharacterClass::Uppercase.is_present_in(password) {
        return Err("no uppercase symbols".to_string());
    }
    Ok(())
}
