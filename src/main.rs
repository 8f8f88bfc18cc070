use std::io;
use std::path::{Path, PathBuf};

use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::dictionary::{DEFAULT_LANGUAGE, WordListDictionary};
use word_scramble::game_state::{Game, game_loop};
use word_scramble::logging::init_logging;
use word_scramble::tui::TuiInterface;
use word_scramble::wordbank::{
    EMBEDDED_WORDBANK, choose_root_word, get_dictionary_override_path, get_wordbank_override_path,
    load_wordbank_from_file, load_wordbank_from_str,
};

fn resolve_path(explicit: Option<&str>, fallback: fn() -> Option<PathBuf>) -> Option<PathBuf> {
    explicit.map(PathBuf::from).or_else(fallback)
}

fn load_wordbank(path: Option<&Path>) -> io::Result<Vec<String>> {
    match path {
        Some(path) => {
            log::info!("loading root words from {}", path.display());
            load_wordbank_from_file(path)
        }
        None => Ok(load_wordbank_from_str(EMBEDDED_WORDBANK)),
    }
}

fn load_dictionary(path: Option<&Path>, language: &str) -> io::Result<WordListDictionary> {
    match path {
        Some(path) => {
            log::info!("loading dictionary from {}", path.display());
            WordListDictionary::from_file(language, path)
        }
        None => {
            if !language.to_lowercase().starts_with(DEFAULT_LANGUAGE) {
                log::warn!("built-in dictionary is English only; language '{language}' will reject every word");
            }
            Ok(WordListDictionary::embedded())
        }
    }
}

fn main() {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let wordbank_path = resolve_path(cli.wordbank_path.as_deref(), get_wordbank_override_path);
    let wordbank = match load_wordbank(wordbank_path.as_deref()) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Failed to load root words: {e}");
            return;
        }
    };

    let dictionary_path =
        resolve_path(cli.dictionary_path.as_deref(), get_dictionary_override_path);
    let dictionary = match load_dictionary(dictionary_path.as_deref(), &cli.language) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("Failed to load dictionary: {e}");
            return;
        }
    };
    log::debug!(
        "{} root words, {} dictionary words",
        wordbank.len(),
        dictionary.len()
    );

    let mut game = Game::new(dictionary, &cli.language);
    let mut rng = rand::thread_rng();
    let next_root = || match &cli.root_word {
        Some(root) => Some(root.clone()),
        None => choose_root_word(&wordbank, &mut rng).map(str::to_string),
    };

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to initialize terminal: {e}");
                return;
            }
        };
        game_loop(&mut game, &mut interface, next_root);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut game, &mut interface, next_root);
    }
}
