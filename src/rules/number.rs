//! Number rule - requires a digit.

use crate::charset::CharacterClass;

use super::CheckResult;

pub(super) fn number_rule(password: &str) -> CheckResult {
    if !CharacterClass::Digit.is_present_in(password) {
        return Err("no numbers in password".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_rule_with_digits() {
        assert_eq!(number_rule("1UwU1"), Ok(()));
    }

    #[test]
    fn test_number_rule_without_digits() {
        assert_eq!(number_rule("uwu"), Err("no numbers in password".to_string()));
    }

    #[test]
    fn test_number_rule_ignores_non_ascii_digits() {
        assert!(number_rule("٣").is_err());
    }
}
