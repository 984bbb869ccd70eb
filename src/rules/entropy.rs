//! Entropy rule - class-presence strength estimate.

use crate::charset::CharacterClass;

use super::CheckResult;

/// Minimum estimate, in bits, a password must reach.
pub const ENTROPY_THRESHOLD: f64 = 5.0;

/// Estimates the entropy of the alphabet implied by the classes present in `password`.
///
/// Each of the four classes found adds the digit class size (10) to the alphabet `N`,
/// regardless of the class's true size, and the estimate is `log2(N)`.
/// This is the closed form of `-Σ_{i=1..N} (1/N)·log2(1/N)`.
/// A password with no recognized class has `N = 0` and is given `0.0`.
pub fn estimate_entropy(password: &str) -> f64 {
    let alphabet: usize = CharacterClass::ALL
        .iter()
        .filter(|class| class.is_present_in(password))
        .map(|_| CharacterClass::Digit.size())
        .sum();

    if alphabet == 0 {
        return 0.0;
    }
    (alphabet as f64).log2()
}

pub(super) fn entropy_rule(password: &str) -> CheckResult {
    if estimate_entropy(password) < ENTROPY_THRESHOLD {
        return Err("amount of entropy is low".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_estimate_by_class_count() {
        assert_eq!(estimate_entropy(""), 0.0);
        assert!(approx(estimate_entropy("111"), 10f64.log2()));
        assert!(approx(estimate_entropy("abc123"), 20f64.log2()));
        assert!(approx(estimate_entropy("Abc123"), 30f64.log2()));
        assert!(approx(estimate_entropy("s*sejhEY-13aH"), 40f64.log2()));
    }

    #[test]
    fn test_estimate_ignores_content_beyond_presence() {
        assert_eq!(estimate_entropy("a1"), estimate_entropy("zzzzzzzzzzzzzzz999999999"));
    }

    #[test]
    fn test_entropy_rule_all_classes_pass() {
        assert_eq!(entropy_rule("s*sejhEY-13aH"), Ok(()));
    }

    #[test]
    fn test_entropy_rule_three_classes_fail() {
        assert_eq!(
            entropy_rule("Abcdef123"),
            Err("amount of entropy is low".to_string())
        );
    }

    #[test]
    fn test_entropy_rule_single_class_fails() {
        assert!(entropy_rule("111").is_err());
    }

    #[test]
    fn test_entropy_rule_no_recognized_class_fails() {
        assert!(entropy_rule("").is_err());
        assert!(entropy_rule("жжж ").is_err());
    }

    #[test]
    fn test_entropy_rule_is_stateless() {
        assert!(entropy_rule("111").is_err());
        assert!(entropy_rule("111").is_err());
        assert_eq!(entropy_rule("aB1!"), Ok(()));
        assert_eq!(entropy_rule("aB1!"), Ok(()));
    }
}
