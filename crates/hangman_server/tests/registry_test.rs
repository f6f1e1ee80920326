//! Tests for the per-player session registry.

use hangman::{Alphabet, GameStatus, GuessErrorKind, MAX_GUESSES, Vocabulary};
use hangman_server::{RegistryError, SessionRegistry};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

fn cat_registry() -> SessionRegistry {
    SessionRegistry::new(Vocabulary::new(["cat"], Alphabet::default()))
        .expect("playable vocabulary")
}

#[test]
fn test_registry_rejects_unplayable_vocabulary() {
    let vocabulary = Vocabulary::new(["abcdefghijk", "uncopyrightable"], Alphabet::default());
    let result = SessionRegistry::new(vocabulary);
    assert!(matches!(result, Err(RegistryError::EmptyVocabulary(_))));
}

#[test]
fn test_new_round_with_only_unwinnable_words_fails() {
    let registry = cat_registry();
    let unwinnable = Vocabulary::new(["abcdefghijk", "lmnopqrstuvw"], Alphabet::default());

    let err = registry.new_round("p1", &unwinnable).unwrap_err();
    match err {
        RegistryError::EmptyVocabulary(e) => {
            assert_eq!(e.total, 2);
            assert_eq!(e.max_distinct, MAX_GUESSES as usize);
        }
        other => panic!("unexpected error: {other}"),
    }
    // The session still exists and is untouched.
    assert_eq!(registry.state("p1").word_with_blanks, "___");
}

#[test]
fn test_new_round_draws_from_given_vocabulary() {
    let registry = cat_registry();
    let vocabulary = Vocabulary::new(["dog", "cow", "abcdefghijk"], Alphabet::default());
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..20 {
        let state = registry
            .new_round_with("p1", &vocabulary, &mut rng)
            .expect("eligible word");
        assert_eq!(state.status, GameStatus::Ongoing);
        assert_eq!(state.word_with_blanks, "___");
    }

    let answer = registry.resolve("p1").lock().expect("lock").answer().to_string();
    assert!(answer == "dog" || answer == "cow", "drew {answer}");
}

#[test]
fn test_new_round_adopts_vocabulary_alphabet() {
    let registry = cat_registry();
    let vocabulary = Vocabulary::new(["ñu"], Alphabet::from("abcdefghijklmnñopqrstuvwxyz"));

    registry.new_round("p1", &vocabulary).expect("eligible word");
    let state = registry.guess("p1", "Ñ").expect("valid guess");
    assert_eq!(state.word_with_blanks, "ñ_");
}

#[test]
fn test_lifetime_tally_survives_new_rounds() {
    let registry = cat_registry();
    let vocabulary = registry.vocabulary().clone();

    for letter in ["c", "a", "t"] {
        registry.guess("p1", letter).expect("valid guess");
    }
    registry.new_round("p1", &vocabulary).expect("eligible word");
    for letter in ["b", "d", "e", "f", "g", "h", "i", "j", "k", "l"] {
        registry.guess("p1", letter).expect("valid guess");
    }

    let state = registry.state("p1");
    assert_eq!(state.status, GameStatus::Lost);
    assert_eq!((state.won, state.lost), (1, 1));

    let err = registry.guess("p1", "a").unwrap_err();
    assert_eq!(err.kind(), &GuessErrorKind::GameOver);
}

#[test]
fn test_concurrent_first_contact_creates_one_session() {
    let registry = Arc::new(cat_registry());

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.resolve("newcomer"))
        })
        .collect();
    let sessions: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .collect();

    assert_eq!(registry.len(), 1);
    assert!(sessions.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

fn base26(mut n: usize) -> String {
    let mut word = String::new();
    for _ in 0..4 {
        word.push(char::from(b'a' + (n % 26) as u8));
        n /= 26;
    }
    word
}

#[test]
fn test_new_players_do_not_rescan_large_vocabulary() {
    let words: Vec<String> = (0..200_000).map(base26).collect();
    let registry = SessionRegistry::new(Vocabulary::new(&words, Alphabet::default()))
        .expect("playable vocabulary");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let started = Instant::now();
    for i in 0..2_000 {
        registry.resolve_with(&format!("player-{i}"), &mut rng);
    }
    let elapsed = started.elapsed();

    assert_eq!(registry.len(), 2_000);
    assert!(
        elapsed < Duration::from_secs(5),
        "creating 2000 sessions took {elapsed:?}"
    );
}

#[test]
fn test_concurrent_guesses_are_serialized() {
    let registry = Arc::new(cat_registry());
    let letters = ["b", "d", "e", "f", "g", "h", "i", "j"];

    let handles: Vec<_> = letters
        .iter()
        .map(|&letter| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.guess("p1", letter).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().expect("thread finished"));
    }

    let state = registry.state("p1");
    assert_eq!(state.guesses_left, MAX_GUESSES - letters.len() as u32);
    assert_eq!(state.letters_guessed.len(), letters.len());
}

#[test]
fn test_concurrent_duplicate_guess_counts_once() {
    let registry = Arc::new(cat_registry());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.guess("p1", "z").is_ok())
        })
        .collect();
    let accepted = handles
        .into_iter()
        .map(|h| h.join().expect("thread finished"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(accepted, 1);
    assert_eq!(registry.state("p1").guesses_left, MAX_GUESSES - 1);
}
