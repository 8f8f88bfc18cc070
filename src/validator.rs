//! Candidate validation.
//!
//! A candidate runs through four checks in a fixed order and stops at the
//! first failure, so a borderline word always gets the same rejection:
//!
//! 1. length (`is_word_allowed`)
//! 2. not already accepted (`is_original`)
//! 3. spellable from the root word's letters (`is_possible`)
//! 4. known to the dictionary (`is_real`)
//!
//! Nothing here mutates the round; the caller records the attempt.

use std::fmt;

use crate::dictionary::Dictionary;
use crate::round::{MIN_WORD_LENGTH, RoundState};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    AlreadyUsed,
    NotSpellableFromRoot,
    NotARealWord,
}

impl Rejection {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word not allowed",
            Self::AlreadyUsed => "Word used already",
            Self::NotSpellableFromRoot => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    #[must_use]
    pub fn message(self, root_word: &str) -> String {
        match self {
            Self::TooShort => {
                format!("Words shorter than {MIN_WORD_LENGTH} letters are not allowed!")
            }
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotSpellableFromRoot => {
                format!("You can't spell that word from '{root_word}'!")
            }
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl std::error::Error for Rejection {}

/// Lowercase and trim a raw submission. `None` for blank input, which is not
/// an attempt at all.
#[must_use]
pub fn normalize_candidate(raw: &str) -> Option<String> {
    let candidate = raw.trim().to_lowercase();
    (!candidate.is_empty()).then_some(candidate)
}

#[must_use]
pub fn is_word_allowed(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}

#[must_use]
pub fn is_original(word: &str, accepted_words: &[String]) -> bool {
    !accepted_words.iter().any(|used| used == word)
}

/// Whether `word` can be spelled from the letters of `root_word`, each letter
/// used at most as many times as it appears in the root.
#[must_use]
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut pool: Vec<char> = root_word.chars().collect();
    for letter in word.chars() {
        match pool.iter().position(|&c| c == letter) {
            Some(pos) => {
                pool.remove(pos);
            }
            None => return false,
        }
    }
    true
}

#[must_use]
pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D, language: &str) -> bool {
    dictionary.is_real_word(word, language)
}

/// Run the check pipeline on an already normalized candidate.
pub fn validate<D: Dictionary + ?Sized>(
    candidate: &str,
    round: &RoundState,
    dictionary: &D,
    language: &str,
) -> Result<String, Rejection> {
    if !is_word_allowed(candidate) {
        return Err(Rejection::TooShort);
    }
    if !is_original(candidate, round.accepted_words()) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(candidate, round.root_word()) {
        return Err(Rejection::NotSpellableFromRoot);
    }
    if !is_real(candidate, dictionary, language) {
        return Err(Rejection::NotARealWord);
    }
    Ok(candidate.to_string())
}
