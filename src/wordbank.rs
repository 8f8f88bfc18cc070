use rand::Rng;
use rand::seq::SliceRandom;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::round::MIN_WORD_LENGTH;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/start.txt");

const APP_DIR_NAME: &str = "word-scramble";
const WORDBANK_FILE_NAME: &str = "start.txt";
const DICTIONARY_FILE_NAME: &str = "dictionary.txt";

/// Normalize one line of a root word list, dropping lines that can't be played.
fn parse_root_word(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    (word.chars().count() > MIN_WORD_LENGTH && word.chars().all(char::is_alphabetic))
        .then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(parse_root_word).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = parse_root_word(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Pick a root word at random. `None` when the list is empty.
pub fn choose_root_word<'a, R: Rng + ?Sized>(
    wordbank: &'a [String],
    rng: &mut R,
) -> Option<&'a str> {
    wordbank.choose(rng).map(String::as_str)
}

/// Directory holding user overrides, e.g. `~/.config/word-scramble`.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME))
}

/// User override for the root word list, if one exists on disk.
#[must_use]
pub fn get_wordbank_override_path() -> Option<PathBuf> {
    get_config_dir()
        .map(|dir| dir.join(WORDBANK_FILE_NAME))
        .filter(|path| path.is_file())
}

/// User override for the dictionary, if one exists on disk.
#[must_use]
pub fn get_dictionary_override_path() -> Option<PathBuf> {
    get_config_dir()
        .map(|dir| dir.join(DICTIONARY_FILE_NAME))
        .filter(|path| path.is_file())
}
