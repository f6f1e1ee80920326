//! Per-player session registry.

use derive_more::{Display, Error, From};
use hangman::{
    Answer, EmptyVocabularyError, GameSession, GameStateView, GuessError, InvalidAnswer,
    Vocabulary,
};
use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Opaque identifier of a player.
pub type PlayerId = String;

/// Shared handle to one player's session.
///
/// Hold the lock for the whole of a guess or round start.
pub type SessionHandle = Arc<Mutex<GameSession>>;

/// Failure to start a new round.
#[derive(Debug, Clone, Display, Error, From)]
pub enum RegistryError {
    /// No word in the vocabulary is winnable.
    #[display("{}", _0)]
    EmptyVocabulary(EmptyVocabularyError),
    /// The drawn word did not fit the alphabet.
    #[display("{}", _0)]
    InvalidAnswer(InvalidAnswer),
}

#[derive(Debug)]
struct Slot {
    session: SessionHandle,
    last_seen: Instant,
}

/// Maps player ids to their sessions, creating sessions on first contact.
///
/// The map lock is only held for lookups and inserts. Each session has its
/// own lock, so players never wait on each other.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<HashMap<PlayerId, Slot>>>,
    vocabulary: Arc<Vocabulary>,
    // Eligible words of `vocabulary`, never empty.
    answers: Arc<[Answer]>,
}

impl SessionRegistry {
    /// Creates a registry that seeds new sessions from `vocabulary`.
    ///
    /// Fails if the vocabulary has no eligible word.
    #[instrument(skip(vocabulary), fields(words = vocabulary.len()))]
    pub fn new(vocabulary: Vocabulary) -> Result<Self, RegistryError> {
        vocabulary.ensure_playable()?;
        let answers = vocabulary
            .eligible()
            .map(|word| Answer::new(word, vocabulary.alphabet()))
            .collect::<Result<Vec<_>, _>>()?;

        info!(eligible = answers.len(), "Creating session registry");
        Ok(Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            vocabulary: Arc::new(vocabulary),
            answers: answers.into(),
        })
    }

    /// Returns the vocabulary new sessions are seeded from.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Returns the session for `player_id`, creating it if absent.
    ///
    /// A new session starts with a round on a randomly drawn word.
    #[instrument(skip(self))]
    pub fn resolve(&self, player_id: &str) -> SessionHandle {
        self.resolve_with(player_id, &mut rand::thread_rng())
    }

    /// Like [`SessionRegistry::resolve`] with an explicit random source.
    #[instrument(skip(self, rng))]
    pub fn resolve_with<R: Rng + ?Sized>(&self, player_id: &str, rng: &mut R) -> SessionHandle {
        if let Some(slot) = lock(&self.sessions).get_mut(player_id) {
            slot.last_seen = Instant::now();
            return Arc::clone(&slot.session);
        }

        // Built outside the map lock; discarded if another request wins the insert.
        let fresh = Arc::new(Mutex::new(self.fresh_session(rng)));

        let mut sessions = lock(&self.sessions);
        let slot = sessions
            .entry(player_id.to_string())
            .or_insert_with(|| Slot {
                session: Arc::clone(&fresh),
                last_seen: Instant::now(),
            });
        slot.last_seen = Instant::now();
        let handle = Arc::clone(&slot.session);

        if Arc::ptr_eq(&handle, &fresh) {
            info!(player_id, sessions = sessions.len(), "Created new session");
        }
        handle
    }

    fn fresh_session<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSession {
        // `new` guarantees at least one answer.
        let answer = &self.answers[rng.gen_range(0..self.answers.len())];
        GameSession::from_answer(answer.clone(), self.vocabulary.alphabet().clone())
    }

    /// Starts a new round for `player_id` on a word drawn from `vocabulary`.
    #[instrument(skip(self, vocabulary), fields(words = vocabulary.len()))]
    pub fn new_round(
        &self,
        player_id: &str,
        vocabulary: &Vocabulary,
    ) -> Result<GameStateView, RegistryError> {
        self.new_round_with(player_id, vocabulary, &mut rand::thread_rng())
    }

    /// Like [`SessionRegistry::new_round`] with an explicit random source.
    #[instrument(skip(self, vocabulary, rng))]
    pub fn new_round_with<R: Rng + ?Sized>(
        &self,
        player_id: &str,
        vocabulary: &Vocabulary,
        rng: &mut R,
    ) -> Result<GameStateView, RegistryError> {
        let handle = self.resolve_with(player_id, rng);
        let word = vocabulary.draw(rng).map_err(|e| {
            warn!(error = %e, "Cannot start a round");
            e
        })?;

        let state = lock(&handle).start_round(word, Some(vocabulary.alphabet().clone()))?;
        debug!(player_id, won = state.won, lost = state.lost, "New round ready");
        Ok(state)
    }

    /// Applies a guess to the player's session.
    #[instrument(skip(self))]
    pub fn guess(&self, player_id: &str, letter: &str) -> Result<GameStateView, GuessError> {
        let handle = self.resolve(player_id);
        let mut session = lock(&handle);
        session.guess(letter)
    }

    /// Returns the player's current state.
    #[instrument(skip(self))]
    pub fn state(&self, player_id: &str) -> GameStateView {
        let handle = self.resolve(player_id);
        let session = lock(&handle);
        session.state()
    }

    /// Drops sessions not touched for longer than `max_idle`.
    ///
    /// Returns how many sessions were removed.
    #[instrument(skip(self))]
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut sessions = lock(&self.sessions);
        let before = sessions.len();
        sessions.retain(|_, slot| slot.last_seen.elapsed() <= max_idle);
        let evicted = before - sessions.len();

        if evicted > 0 {
            info!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }
        evicted
    }

    /// Returns true if `player_id` currently has a session.
    pub fn contains(&self, player_id: &str) -> bool {
        lock(&self.sessions).contains_key(player_id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        lock(&self.sessions).len()
    }

    /// Returns true if no player has a session.
    pub fn is_empty(&self) -> bool {
        lock(&self.sessions).is_empty()
    }
}

// Every mutation validates before it writes, so a poisoned guard still
// holds a consistent value.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
