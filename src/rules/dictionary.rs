//! Dictionary rule - rejects passwords containing a forbidden word.

use crate::dictionary::Dictionary;

use super::CheckResult;

pub(super) fn dictionary_rule(password: &str, dictionary: &Dictionary) -> CheckResult {
    if dictionary.contains_word_of(password) {
        return Err("dictionary word in password".to_string());
    }
    Ok(())
}
