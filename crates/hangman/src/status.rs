//! Round status and the rule that derives it.

use crate::session::MAX_GUESSES;
use serde::{Deserialize, Serialize};

/// Current status of a round.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Letters remain and the guess budget is not spent.
    Ongoing,
    /// Every letter of the answer was revealed.
    Won,
    /// The guess budget ran out first.
    Lost,
}

impl GameStatus {
    /// Derives the status from the number of unrevealed distinct letters and
    /// the number of incorrect guesses.
    ///
    /// A fully revealed word wins even if the budget is spent.
    pub fn compute(letters_left: usize, incorrect_guesses: u32) -> Self {
        if letters_left == 0 {
            GameStatus::Won
        } else if incorrect_guesses >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::Ongoing
        }
    }

    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }
}
