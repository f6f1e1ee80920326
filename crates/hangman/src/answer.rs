//! The secret word of a round.

use crate::alphabet::Alphabet;
use crate::error::InvalidAnswer;
use std::collections::BTreeSet;
use tracing::{instrument, warn};

/// A validated secret word.
///
/// Always non-empty, lower-cased and spelled entirely from the alphabet it
/// was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct Answer(String);

impl Answer {
    /// Trims and case-folds `raw`, then checks it against `alphabet`.
    #[instrument(skip(raw, alphabet))]
    pub fn new(raw: &str, alphabet: &Alphabet) -> Result<Self, InvalidAnswer> {
        let word = raw.trim().to_lowercase();

        if word.is_empty() {
            warn!("Rejected empty answer");
            return Err(InvalidAnswer::new(word, "answer is empty"));
        }

        if let Some(stray) = word.chars().find(|&c| !alphabet.contains(c)) {
            warn!(%word, %stray, "Rejected answer outside alphabet");
            return Err(InvalidAnswer::new(
                word,
                format!("'{}' is not in the alphabet", stray),
            ));
        }

        Ok(Self(word))
    }

    /// Returns the word.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the distinct letters of the word.
    pub fn distinct_letters(&self) -> BTreeSet<char> {
        self.0.chars().collect()
    }
}

impl AsRef<str> for Answer {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
