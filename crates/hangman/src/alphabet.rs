//! The set of characters a player may guess.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::instrument;

/// Immutable set of single, lower-cased characters legal as guesses.
///
/// Defaults to the ASCII lowercase letters `a`..=`z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Alphabet {
    letters: BTreeSet<char>,
}

impl Alphabet {
    /// Builds an alphabet from any character sequence.
    ///
    /// Whitespace is skipped and every character is lower-cased.
    #[instrument(skip(letters))]
    pub fn new(letters: impl IntoIterator<Item = char>) -> Self {
        Self {
            letters: letters
                .into_iter()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect(),
        }
    }

    /// Returns true if `letter` (already case-folded) is a member.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Returns true if every character of `word` is a member.
    pub fn spells(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    /// Number of letters in the alphabet.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Returns true if the alphabet has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Iterates the letters in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new('a'..='z')
    }
}

impl From<&str> for Alphabet {
    fn from(letters: &str) -> Self {
        Self::new(letters.chars())
    }
}

impl From<String> for Alphabet {
    fn from(letters: String) -> Self {
        Self::from(letters.as_str())
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.letters.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_ascii_lowercase() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 26);
        assert!(alphabet.contains('a'));
        assert!(alphabet.contains('z'));
        assert!(!alphabet.contains('A'));
        assert!(!alphabet.contains('@'));
    }

    #[test]
    fn folds_case_and_skips_whitespace() {
        let alphabet = Alphabet::from("AbC d\n");
        assert_eq!(alphabet.iter().collect::<String>(), "abcd");
    }

    #[test]
    fn spells_checks_every_character() {
        let alphabet = Alphabet::from("act");
        assert!(alphabet.spells("cat"));
        assert!(!alphabet.spells("cab"));
    }
}
