use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_LANGUAGE: &str = "en";

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary_en.txt");

/// Answers whether a word is a real word in the given language.
///
/// Any backend works here: a static list, a spell-check library or a remote
/// service. Closures of the same shape implement it too, which keeps tests
/// short.
pub trait Dictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Lowercased primary subtag of a language tag: "en-GB" and "en_us" give "en".
fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Dictionary backed by an in-memory word list for one language.
#[derive(Clone, Debug, Default)]
pub struct WordListDictionary {
    language: String,
    words: HashSet<String>,
}

impl WordListDictionary {
    pub fn new(language: &str) -> Self {
        Self {
            language: primary_subtag(language),
            words: HashSet::new(),
        }
    }

    /// The built-in English list.
    pub fn embedded() -> Self {
        Self::from_list(DEFAULT_LANGUAGE, EMBEDDED_DICTIONARY)
    }

    pub fn from_list(language: &str, data: &str) -> Self {
        let mut dictionary = Self::new(language);
        dictionary.extend(data.lines());
        dictionary
    }

    pub fn from_file<P: AsRef<Path>>(language: &str, path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut dictionary = Self::new(language);
        for line in reader.lines() {
            dictionary.insert(&line?);
        }
        Ok(dictionary)
    }

    pub fn insert(&mut self, word: &str) {
        let word = word.trim().to_lowercase();
        if !word.is_empty() {
            self.words.insert(word);
        }
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        // Regional variants share one list: "en-GB" and "en" both match.
        primary_subtag(language) == self.language && self.words.contains(&word.to_lowercase())
    }
}
