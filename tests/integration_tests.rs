// Integration tests for the word-scramble application
// These tests verify that all modules work together correctly

use proptest::prelude::*;
use std::io::Cursor;
use std::sync::Arc;
use word_scramble::cli::CliInterface;
use word_scramble::wordbank::EMBEDDED_WORDBANK;
use word_scramble::*;

fn embedded_game() -> Game<WordListDictionary> {
    Game::new(WordListDictionary::embedded(), "en")
}

fn reason(outcome: SubmitOutcome) -> Rejection {
    match outcome {
        SubmitOutcome::Rejected { reason, .. } => reason,
        other => panic!("Expected rejection, got {other:?}"),
    }
}

#[test]
fn test_silkworm_scenario_with_embedded_dictionary() {
    let mut game = embedded_game();
    game.start_round("silkworm").unwrap();

    assert_eq!(
        game.submit("silk").unwrap(),
        SubmitOutcome::Accepted("silk".to_string())
    );
    assert_eq!(reason(game.submit("silk").unwrap()), Rejection::AlreadyUsed);
    assert_eq!(
        reason(game.submit("silkworms").unwrap()),
        Rejection::NotSpellableFromRoot
    );
    assert_eq!(reason(game.submit("ow").unwrap()), Rejection::TooShort);
    assert_eq!(reason(game.submit("wilks").unwrap()), Rejection::NotARealWord);

    let round = game.round().unwrap();
    assert_eq!(round.attempts(), 5);
    assert_eq!(round.accepted_words(), ["silk"]);
    assert_eq!(round.status(), RoundStatus::InProgress);
    assert_eq!(round.score(), None);
}

#[test]
fn test_full_round_scores_sixty_percent() {
    let mut game = embedded_game();
    game.start_round("silkworm").unwrap();

    for word in ["silk", "milk", "worm", "work", "slow", "owls"] {
        assert!(matches!(
            game.submit(word).unwrap(),
            SubmitOutcome::Accepted(_)
        ));
    }
    for word in ["silk", "owl", "books", "wsilk"] {
        assert!(matches!(
            game.submit(word).unwrap(),
            SubmitOutcome::Rejected { .. }
        ));
    }

    let round = game.round().unwrap();
    assert!(round.is_finished());
    assert_eq!(round.score(), Some(60.0));
    assert_eq!(
        round.accepted_words(),
        ["owls", "slow", "work", "worm", "milk", "silk"]
    );
    assert_eq!(game.submit("worms"), Err(GameError::RoundFinished));
}

#[test]
fn test_every_embedded_root_word_is_playable() {
    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let dictionary = WordListDictionary::embedded();

    for root in &wordbank {
        let mut game = Game::new(dictionary.clone(), "en");
        game.start_round(root).unwrap();
        // The root word itself is always in the embedded dictionary.
        assert_eq!(
            game.submit(root).unwrap(),
            SubmitOutcome::Accepted(root.clone()),
            "root word {root} should be accepted"
        );
    }
}

#[test]
fn test_everyday_words_are_accepted_from_embedded_roots() {
    let dictionary = Arc::new(WordListDictionary::embedded());
    let rounds: [(&str, &[&str]); 8] = [
        ("triangle", &["rail", "gale", "tiger", "train", "alert", "angle"]),
        ("computer", &["coupe", "route", "court", "metro"]),
        ("absolute", &["table", "beast", "about", "lotus"]),
        ("hospital", &["pilot", "shoal", "split"]),
        ("daughter", &["guard", "heart", "earth"]),
        ("umbrella", &["lumber", "blame", "album"]),
        ("keyboard", &["bread", "beard", "broke"]),
        ("sandwich", &["hands", "chain", "winds", "dash"]),
    ];

    for (root, words) in rounds {
        let mut game = Game::with_shared_dictionary(Arc::clone(&dictionary), "en");
        game.start_round(root).unwrap();
        for word in words {
            assert_eq!(
                game.submit(word).unwrap(),
                SubmitOutcome::Accepted(word.to_string()),
                "{word} should be accepted from {root}"
            );
        }
    }
}

#[test]
fn test_random_root_word_round_through_cli() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let wordbank = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = embedded_game();
    let input = "aaaa\n".repeat(ATTEMPT_LIMIT as usize);
    let mut interface = CliInterface::new(Cursor::new(input));

    game_loop(&mut game, &mut interface, || {
        choose_root_word(&wordbank, &mut rng).map(str::to_string)
    });

    let round = game.round().unwrap();
    assert!(wordbank.iter().any(|w| w == round.root_word()));
    assert!(round.is_finished());
    assert_eq!(round.score(), Some(0.0));
}

#[test]
fn test_custom_wordbank_and_dictionary_files() {
    use std::fs::File;
    use std::io::Write;

    let temp_dir = std::env::temp_dir();
    let wordbank_path = temp_dir.join("word_scramble_it_wordbank.txt");
    let dictionary_path = temp_dir.join("word_scramble_it_dictionary.txt");
    {
        let mut file = File::create(&wordbank_path).unwrap();
        writeln!(file, "Notebook").unwrap();
        let mut file = File::create(&dictionary_path).unwrap();
        writeln!(file, "book").unwrap();
        writeln!(file, "note").unwrap();
    }

    let wordbank = load_wordbank_from_file(&wordbank_path).unwrap();
    let dictionary = WordListDictionary::from_file("en", &dictionary_path).unwrap();
    assert_eq!(wordbank, vec!["notebook".to_string()]);

    let mut game = Game::new(dictionary, "en");
    let input = "book\nNOTE\nboot\nexit\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    game_loop(&mut game, &mut interface, || wordbank.first().cloned());

    let round = game.round().unwrap();
    assert_eq!(round.root_word(), "notebook");
    assert_eq!(round.attempts(), 3);
    assert_eq!(round.accepted_words(), ["note", "book"]);

    std::fs::remove_file(&wordbank_path).unwrap();
    std::fs::remove_file(&dictionary_path).unwrap();
}

#[test]
fn test_language_tag_reaches_dictionary() {
    let mut game = Game::new(WordListDictionary::embedded(), "fr");
    game.start_round("silkworm").unwrap();
    assert_eq!(reason(game.submit("silk").unwrap()), Rejection::NotARealWord);
}

#[test]
fn test_sessions_share_dictionary_but_not_rounds() {
    let dictionary = Arc::new(WordListDictionary::embedded());
    let mut sessions = SessionRegistry::new(Arc::clone(&dictionary), "en");

    sessions.start_round(1u32, "silkworm").unwrap();
    sessions.start_round(2u32, "silkworm").unwrap();
    sessions.submit(&1, "silk").unwrap();

    assert_eq!(
        sessions.submit(&2, "silk").unwrap(),
        SubmitOutcome::Accepted("silk".to_string())
    );
    assert_eq!(sessions.get(&1).unwrap().attempts(), 1);
    assert_eq!(sessions.get(&2).unwrap().attempts(), 1);
    assert_eq!(Arc::strong_count(&dictionary), 4);
}

proptest! {
    #[test]
    fn prop_round_counters_stay_ordered(
        submissions in prop::collection::vec("[a-z ]{0,9}", 0..20),
    ) {
        let mut game = embedded_game();
        game.start_round("silkworm").unwrap();

        for candidate in &submissions {
            let _ = game.submit(candidate);
            let round = game.round().unwrap();
            let accepted = round.accepted_words().len() as u32;
            prop_assert!(accepted <= round.attempts());
            prop_assert!(round.attempts() <= ATTEMPT_LIMIT);
            prop_assert_eq!(round.is_finished(), round.attempts() == ATTEMPT_LIMIT);
            prop_assert_eq!(round.score().is_some(), round.is_finished());
        }

        let round = game.round().unwrap();
        if let Some(score) = round.score() {
            prop_assert!(score >= 0.0);
            prop_assert!(score <= 100.0);
        }
    }

    #[test]
    fn prop_accepted_words_are_unique_and_spellable(
        submissions in prop::collection::vec("[iklmorsw]{4,6}", 0..10),
    ) {
        let mut game = embedded_game();
        game.start_round("silkworm").unwrap();
        for candidate in &submissions {
            game.submit(candidate).unwrap();
        }

        let round = game.round().unwrap();
        let words = round.accepted_words();
        for (i, word) in words.iter().enumerate() {
            prop_assert!(is_possible(word, round.root_word()));
            prop_assert!(!words[i + 1..].contains(word));
        }
    }
}
