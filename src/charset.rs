//! Character classes shared by the rules.

const UPPERCASE: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

const LOWERCASE: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const SYMBOLS: [char; 10] = ['!', '@', '#', '$', '^', '*', '.', '-', '_', '+'];

/// One fixed category of characters.
///
/// Only ASCII members are recognized: `'É'` is not uppercase and `'٣'` is
/// not a digit as far as the rules are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// All classes, in the order the entropy estimate scans them.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Digit,
        CharacterClass::Symbol,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
    ];

    pub fn members(self) -> &'static [char] {
        match self {
            CharacterClass::Uppercase => &UPPERCASE,
            CharacterClass::Lowercase => &LOWERCASE,
            CharacterClass::Digit => &DIGITS,
            CharacterClass::Symbol => &SYMBOLS,
        }
    }

    pub fn size(self) -> usize {
        self.members().len()
    }

    pub fn contains(self, c: char) -> bool {
        self.members().contains(&c)
    }

    /// Returns `true` if at least one character of `password` belongs to this class.
    pub fn is_present_in(self, password: &str) -> bool {
        password.chars().any(|c| self.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_sizes() {
        assert_eq!(CharacterClass::Uppercase.size(), 26);
        assert_eq!(CharacterClass::Lowercase.size(), 26);
        assert_eq!(CharacterClass::Digit.size(), 10);
        assert_eq!(CharacterClass::Symbol.size(), 10);
    }

    #[test]
    fn test_symbol_set_is_fixed() {
        for c in "!@#$^*.-_+".chars() {
            assert!(CharacterClass::Symbol.contains(c), "{c} should be a symbol");
        }
        for c in "%&()=?~ ".chars() {
            assert!(!CharacterClass::Symbol.contains(c), "{c} should not be a symbol");
        }
    }

    #[test]
    fn test_non_ascii_is_not_classified() {
        for class in CharacterClass::ALL {
            assert!(!class.is_present_in("ÉéΩж٣"));
        }
    }

    #[test]
    fn test_is_present_in() {
        assert!(CharacterClass::Digit.is_present_in("abc1"));
        assert!(!CharacterClass::Digit.is_present_in("abc"));
        assert!(CharacterClass::Uppercase.is_present_in("aBc"));
        assert!(!CharacterClass::Lowercase.is_present_in("ABC"));
        assert!(!CharacterClass::Symbol.is_present_in(""));
    }
}
