//! Hangman game logic.
//!
//! This crate holds the state machine for a single player's hangman
//! session and nothing else: no networking, no rendering.
//!
//! # Architecture
//!
//! - **Alphabet**: the characters accepted as guesses
//! - **Answer**: a validated secret word
//! - **GameSession**: one round plus lifetime won/lost counters
//! - **GameStateView**: the serializable snapshot every operation returns
//! - **Vocabulary**: candidate words and the random draw
//!
//! # Example
//!
//! ```
//! use hangman::{Alphabet, GameSession, GameStatus};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = GameSession::new("cat", Alphabet::default())?;
//! session.guess("c")?;
//! session.guess("a")?;
//! let state = session.guess("t")?;
//! assert_eq!(state.status, GameStatus::Won);
//! assert_eq!(state.won, 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod alphabet;
mod answer;
mod error;
mod session;
mod status;
mod view;
mod vocabulary;

// Crate-level exports - Letters and words
pub use alphabet::Alphabet;
pub use answer::Answer;

// Crate-level exports - Errors
pub use error::{EmptyVocabularyError, GuessError, GuessErrorKind, InvalidAnswer, VocabularyError};

// Crate-level exports - Game state machine
pub use session::{BLANK, GameSession, MAX_GUESSES};
pub use status::GameStatus;
pub use view::GameStateView;

// Crate-level exports - Word supply
pub use vocabulary::Vocabulary;
