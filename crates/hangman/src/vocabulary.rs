//! Candidate answers and the random draw.

use crate::alphabet::Alphabet;
use crate::error::{EmptyVocabularyError, VocabularyError};
use crate::session::MAX_GUESSES;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Words that can be drawn as answers, all spelled from one alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    alphabet: Alphabet,
    words: Vec<String>,
    // Indices into `words` of the winnable ones.
    eligible: Vec<usize>,
}

impl Vocabulary {
    /// Builds a vocabulary, keeping only words spelled from `alphabet`.
    ///
    /// Words are trimmed and lower-cased; blank lines are dropped.
    #[instrument(skip(words, alphabet), fields(alphabet_len = alphabet.len()))]
    pub fn new<I, S>(words: I, alphabet: Alphabet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let words: Vec<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| {
                let keep = !w.is_empty() && alphabet.spells(w);
                if !keep {
                    skipped += 1;
                }
                keep
            })
            .collect();

        let eligible: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| is_eligible(w))
            .map(|(i, _)| i)
            .collect();

        debug!(
            kept = words.len(),
            eligible = eligible.len(),
            skipped,
            "Vocabulary built"
        );
        Self {
            alphabet,
            words,
            eligible,
        }
    }

    /// Loads a vocabulary file with one word per line.
    #[instrument(skip(path, alphabet), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>, alphabet: Alphabet) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            VocabularyError::new(
                path.display().to_string(),
                format!("Failed to read vocabulary file: {}", e),
            )
        })?;

        let vocabulary = Self::new(content.lines(), alphabet);
        info!(words = vocabulary.len(), "Vocabulary loaded");
        Ok(vocabulary)
    }

    /// Returns the alphabet every word is spelled from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns every word, eligible or not.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if there are no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates words winnable within the guess budget.
    ///
    /// Repeated letters cost one guess, so the limit applies to distinct
    /// letters rather than word length.
    pub fn eligible(&self) -> impl Iterator<Item = &str> + '_ {
        self.eligible.iter().map(|&i| self.words[i].as_str())
    }

    /// Number of eligible words.
    pub fn eligible_len(&self) -> usize {
        self.eligible.len()
    }

    /// Draws one eligible word uniformly at random.
    #[instrument(skip(self, rng), fields(words = self.words.len()))]
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, EmptyVocabularyError> {
        self.eligible
            .choose(rng)
            .map(|&i| self.words[i].as_str())
            .ok_or(EmptyVocabularyError {
            total: self.words.len(),
            max_distinct: MAX_GUESSES as usize,
        })
    }

    /// Fails unless at least one word is eligible.
    pub fn ensure_playable(&self) -> Result<(), EmptyVocabularyError> {
        if !self.eligible.is_empty() {
            Ok(())
        } else {
            Err(EmptyVocabularyError {
                total: self.words.len(),
                max_distinct: MAX_GUESSES as usize,
            })
        }
    }
}

fn is_eligible(word: &str) -> bool {
    word.chars().collect::<BTreeSet<_>>().len() <= MAX_GUESSES as usize
}
