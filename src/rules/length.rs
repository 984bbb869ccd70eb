//! Length rule - checks password minimum length.

use super::CheckResult;

/// Checks that the password has at least `min_len` characters.
///
/// Length counts characters, not bytes.
pub(super) fn length_rule(password: &str, min_len: usize) -> CheckResult {
    if password.chars().count() < min_len {
        return Err(format!(
            "password should be no less than {} symbols",
            min_len
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rule_too_short() {
        assert_eq!(
            length_rule("123", 6),
            Err("password should be no less than 6 symbols".to_string())
        );
    }

    #[test]
    fn test_length_rule_exactly_minimum() {
        assert_eq!(length_rule("123456", 6), Ok(()));
    }

    #[test]
    fn test_length_rule_valid() {
        assert_eq!(length_rule("1234567", 6), Ok(()));
    }

    #[test]
    fn test_length_rule_zero_minimum() {
        assert_eq!(length_rule("", 0), Ok(()));
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // four chars, eight bytes
        assert_eq!(length_rule("жжжж", 4), Ok(()));
        assert!(length_rule("жжжж", 5).is_err());
    }

    #[test]
    fn test_length_rule_boundary_sweep() {
        let pwd = "abcdefghij";
        for min_len in 0..=15 {
            assert_eq!(length_rule(pwd, min_len).is_ok(), pwd.len() >= min_len);
        }
    }
}
