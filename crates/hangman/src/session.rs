//! A single player's hangman session.

use crate::alphabet::Alphabet;
use crate::answer::Answer;
use crate::error::{GuessError, GuessErrorKind, InvalidAnswer};
use crate::status::GameStatus;
use crate::view::GameStateView;
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Incorrect guesses allowed per round.
pub const MAX_GUESSES: u32 = 10;

/// Glyph shown in place of an unrevealed letter.
pub const BLANK: char = '_';

/// One player's current round plus their lifetime tally.
///
/// Per-round fields are reset by [`GameSession::start_round`]; `won` and
/// `lost` survive for as long as the session does.
#[derive(Debug, Clone)]
pub struct GameSession {
    answer: Answer,
    alphabet: Alphabet,
    letters_guessed: BTreeSet<char>,
    letters_left: BTreeSet<char>,
    incorrect_guesses: u32,
    status: GameStatus,
    won: u32,
    lost: u32,
}

impl GameSession {
    /// Creates a session whose first round is played on `answer`.
    #[instrument(skip(answer, alphabet))]
    pub fn new(answer: &str, alphabet: Alphabet) -> Result<Self, InvalidAnswer> {
        let answer = Answer::new(answer, &alphabet)?;
        Ok(Self::from_answer(answer, alphabet))
    }

    /// Creates a session from an answer already checked against `alphabet`.
    #[instrument(skip(answer, alphabet))]
    pub fn from_answer(answer: Answer, alphabet: Alphabet) -> Self {
        let letters_left = answer.distinct_letters();
        debug!(distinct = letters_left.len(), "Creating game session");
        Self {
            answer,
            alphabet,
            letters_guessed: BTreeSet::new(),
            letters_left,
            incorrect_guesses: 0,
            status: GameStatus::Ongoing,
            won: 0,
            lost: 0,
        }
    }

    /// Starts a new round on `answer`, keeping the lifetime counters.
    ///
    /// `alphabet` replaces the session's alphabet when given. The session is
    /// left untouched if the answer does not validate.
    #[instrument(skip(self, answer, alphabet), fields(won = self.won, lost = self.lost))]
    pub fn start_round(
        &mut self,
        answer: &str,
        alphabet: Option<Alphabet>,
    ) -> Result<GameStateView, InvalidAnswer> {
        let alphabet = alphabet.unwrap_or_else(|| self.alphabet.clone());
        let answer = Answer::new(answer, &alphabet)?;

        self.letters_left = answer.distinct_letters();
        self.letters_guessed.clear();
        self.incorrect_guesses = 0;
        self.status = GameStatus::compute(self.letters_left.len(), 0);
        self.answer = answer;
        self.alphabet = alphabet;

        info!(length = self.answer.as_str().chars().count(), "Round started");
        Ok(self.state())
    }

    /// Applies a guess and returns the resulting state.
    ///
    /// Checks run in order: round over, malformed or foreign letter, repeat
    /// guess. A rejected guess leaves the session unchanged.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn guess(&mut self, letter: &str) -> Result<GameStateView, GuessError> {
        if self.status.is_terminal() {
            warn!("Guess after game over");
            return Err(GuessError::new(GuessErrorKind::GameOver, self.state()));
        }

        let folded = letter.to_lowercase();
        let mut chars = folded.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if self.alphabet.contains(c) => c,
            _ => {
                warn!(guess = %folded, "Invalid guess");
                return Err(GuessError::new(
                    GuessErrorKind::InvalidLetter(folded),
                    self.state(),
                ));
            }
        };

        if self.letters_guessed.contains(&letter) {
            warn!(%letter, "Duplicate guess");
            return Err(GuessError::new(
                GuessErrorKind::DuplicateGuess(letter),
                self.state(),
            ));
        }

        let hit = self.letters_left.remove(&letter);
        if !hit {
            self.incorrect_guesses += 1;
        }
        self.letters_guessed.insert(letter);

        let next = GameStatus::compute(self.letters_left.len(), self.incorrect_guesses);
        if self.status == GameStatus::Ongoing {
            match next {
                GameStatus::Won => self.won += 1,
                GameStatus::Lost => self.lost += 1,
                GameStatus::Ongoing => {}
            }
        }
        self.status = next;

        debug!(
            %letter,
            hit,
            incorrect = self.incorrect_guesses,
            letters_left = self.letters_left.len(),
            status = %self.status,
            "Guess applied"
        );
        if next.is_terminal() {
            info!(status = %next, won = self.won, lost = self.lost, "Round finished");
        }

        Ok(self.state())
    }

    /// Returns a snapshot of the session. Never mutates anything.
    pub fn state(&self) -> GameStateView {
        let terminal = self.status.is_terminal();
        GameStateView {
            status: self.status,
            max_guesses: MAX_GUESSES,
            guesses_left: MAX_GUESSES.saturating_sub(self.incorrect_guesses),
            letters_guessed: self.letters_guessed.iter().copied().collect(),
            word_with_blanks: self.word_with_blanks(),
            won: self.won,
            lost: self.lost,
            letters_left: terminal.then(|| self.letters_left.iter().copied().collect()),
            answer: terminal.then(|| self.answer.to_string()),
        }
    }

    fn word_with_blanks(&self) -> String {
        self.answer
            .as_str()
            .chars()
            .map(|c| if self.letters_left.contains(&c) { BLANK } else { c })
            .collect()
    }

    /// Returns the current answer.
    pub fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Returns the alphabet guesses are checked against.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the letters guessed this round.
    pub fn letters_guessed(&self) -> &BTreeSet<char> {
        &self.letters_guessed
    }

    /// Returns the distinct answer letters not yet guessed.
    pub fn letters_left(&self) -> &BTreeSet<char> {
        &self.letters_left
    }

    /// Returns the number of wrong guesses this round.
    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    /// Returns the lifetime win count.
    pub fn won(&self) -> u32 {
        self.won
    }

    /// Returns the lifetime loss count.
    pub fn lost(&self) -> u32 {
        self.lost
    }
}
