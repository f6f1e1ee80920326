//! Tests for the hangman session state machine.

use hangman::{
    Alphabet, BLANK, GameSession, GameStatus, GuessErrorKind, MAX_GUESSES, Vocabulary,
};
use std::io::Write;

fn cat() -> GameSession {
    GameSession::new("cat", Alphabet::default()).expect("valid answer")
}

const WRONG: [&str; 10] = ["b", "d", "e", "f", "g", "h", "i", "j", "k", "l"];

#[test]
fn test_win_scenario() {
    let mut game = cat();

    let state = game.guess("a").expect("valid guess");
    assert_eq!(state.word_with_blanks, "_a_");
    assert_eq!(state.status, GameStatus::Ongoing);
    assert_eq!(state.guesses_left, MAX_GUESSES);

    game.guess("c").expect("valid guess");
    let state = game.guess("t").expect("valid guess");
    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.word_with_blanks, "cat");
    assert_eq!(state.won, 1);
    assert_eq!(state.lost, 0);
    assert_eq!(state.answer.as_deref(), Some("cat"));
    assert_eq!(state.letters_left, Some(vec![]));
}

#[test]
fn test_loss_scenario() {
    let mut game = cat();

    let mut state = game.state();
    for (i, letter) in WRONG.iter().enumerate() {
        state = game.guess(letter).expect("valid guess");
        let expected = if i + 1 < WRONG.len() {
            GameStatus::Ongoing
        } else {
            GameStatus::Lost
        };
        assert_eq!(state.status, expected, "after {} wrong guesses", i + 1);
    }

    assert_eq!(state.guesses_left, 0);
    assert_eq!(state.lost, 1);
    assert_eq!(state.won, 0);
    assert_eq!(state.answer.as_deref(), Some("cat"));
    assert_eq!(state.letters_left, Some(vec!['a', 'c', 't']));
    assert_eq!(state.letters_guessed.len(), WRONG.len());
}

#[test]
fn test_invalid_letter_leaves_state_unchanged() {
    let mut game = cat();
    let before = game.state();

    let err = game.guess("@").unwrap_err();
    assert_eq!(err.kind(), &GuessErrorKind::InvalidLetter("@".to_string()));
    assert_eq!(err.state(), &before);
    assert_eq!(err.to_string(), "Invalid guess '@' was made");
    assert_eq!(game.state(), before);
}

#[test]
fn test_duplicate_correct_guess() {
    let mut game = cat();
    let after_first = game.guess("c").expect("valid guess");

    let err = game.guess("c").unwrap_err();
    assert_eq!(err.kind(), &GuessErrorKind::DuplicateGuess('c'));
    assert_eq!(err.to_string(), "You already guessed 'c'");
    assert_eq!(game.state(), after_first);
}

#[test]
fn test_duplicate_wrong_guess_costs_nothing() {
    let mut game = cat();
    let after_first = game.guess("z").expect("valid guess");
    assert_eq!(after_first.guesses_left, MAX_GUESSES - 1);

    assert!(game.guess("Z").is_err());
    assert_eq!(game.state(), after_first);
    assert_eq!(game.incorrect_guesses(), 1);
}

#[test]
fn test_guess_after_game_over_is_rejected_and_idempotent() {
    let mut game = cat();
    for letter in WRONG {
        game.guess(letter).expect("valid guess");
    }
    let finished = game.state();

    for letter in ["a", "@", "b"] {
        let err = game.guess(letter).unwrap_err();
        assert_eq!(err.kind(), &GuessErrorKind::GameOver);
        assert_eq!(err.to_string(), "Game is already over");
    }
    assert_eq!(game.state(), finished);
    assert_eq!(game.lost(), 1);
}

#[test]
fn test_state_query_never_counts_twice() {
    let mut game = cat();
    for letter in ["c", "a", "t"] {
        game.guess(letter).expect("valid guess");
    }
    for _ in 0..3 {
        assert_eq!(game.state().won, 1);
    }
}

#[test]
fn test_blanks_round_trip_to_answer() {
    let mut game = GameSession::new("balloon", Alphabet::default()).expect("valid answer");
    assert_eq!(
        game.state().word_with_blanks,
        BLANK.to_string().repeat("balloon".len())
    );

    let mut state = game.state();
    for letter in ["b", "a", "l", "o", "n"] {
        state = game.guess(letter).expect("valid guess");
    }
    assert!(game.letters_left().is_empty());
    assert_eq!(state.word_with_blanks, "balloon");
    assert_eq!(state.status, GameStatus::Won);
}

#[test]
fn test_lifetime_counters_across_rounds() {
    let mut game = cat();
    let mut completed = 0;

    for answer in ["dog", "pig", "cow"] {
        for letter in ["c", "a", "t"] {
            let _ = game.guess(letter);
        }
        if game.status().is_terminal() {
            completed += 1;
        }
        assert!(game.won() + game.lost() <= completed);
        game.start_round(answer, None).expect("valid answer");
    }

    for letter in WRONG {
        let _ = game.guess(letter);
    }
    completed += 1;

    assert_eq!(game.won(), 1);
    assert_eq!(game.lost(), 1);
    assert!(game.won() + game.lost() <= completed);
}

#[test]
fn test_serialized_view_uses_wire_names() {
    let mut game = cat();
    let ongoing = serde_json::to_value(game.state()).expect("serializable");
    assert_eq!(ongoing["status"], "ongoing");
    assert_eq!(ongoing["max_guesses"], 10);
    assert_eq!(ongoing["word_with_blanks"], "___");
    assert!(ongoing.get("answer").is_none());
    assert!(ongoing.get("letters_left").is_none());

    for letter in ["c", "a", "t"] {
        game.guess(letter).expect("valid guess");
    }
    let won = serde_json::to_value(game.state()).expect("serializable");
    assert_eq!(won["status"], "won");
    assert_eq!(won["answer"], "cat");
    assert_eq!(won["letters_guessed"], serde_json::json!(["a", "c", "t"]));
}

#[test]
fn test_vocabulary_without_winnable_words() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "abcdefghijk").expect("write");
    writeln!(file, "Uncopyrightable").expect("write");
    writeln!(file, "it's").expect("write");

    let vocabulary = Vocabulary::from_file(file.path(), Alphabet::default()).expect("readable");
    assert_eq!(vocabulary.len(), 2);
    assert!(vocabulary.ensure_playable().is_err());
}

#[test]
fn test_vocabulary_missing_file() {
    let err = Vocabulary::from_file("/definitely/not/here.txt", Alphabet::default()).unwrap_err();
    assert_eq!(err.path, "/definitely/not/here.txt");
}
