//! Round state for a single game of word scramble.
//!
//! A round owns the root word, the words accepted so far (newest first) and
//! the attempt counter. It finishes once `ATTEMPT_LIMIT` attempts have been
//! recorded, at which point the score becomes available.

use thiserror::Error;

/// Number of attempts allowed per round.
pub const ATTEMPT_LIMIT: u32 = 10;

/// Shortest candidate the length check lets through.
pub const MIN_WORD_LENGTH: usize = 4;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("invalid root word '{root}': must have more than {MIN_WORD_LENGTH} letters")]
    InvalidRootWord { root: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Finished,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    root_word: String,
    accepted_words: Vec<String>,
    attempts: u32,
    status: RoundStatus,
    score: Option<f64>,
}

impl RoundState {
    /// Start a fresh round. The root word is trimmed and lowercased first.
    pub fn start(root: &str) -> Result<Self, RoundError> {
        let root_word = root.trim().to_lowercase();
        // Strictly longer than the shortest allowed candidate.
        if root_word.chars().count() <= MIN_WORD_LENGTH {
            return Err(RoundError::InvalidRootWord { root: root_word });
        }
        log::debug!("round started with root word '{root_word}'");
        Ok(Self {
            root_word,
            accepted_words: Vec::new(),
            attempts: 0,
            status: RoundStatus::InProgress,
            score: None,
        })
    }

    /// Count one attempt, prepending `accepted` to the word list when present.
    ///
    /// Reaching `ATTEMPT_LIMIT` finishes the round and fixes the score.
    /// Attempts recorded after that are ignored.
    pub fn record_attempt(&mut self, accepted: Option<&str>) {
        if self.is_finished() {
            log::warn!("attempt recorded after round finished; ignoring");
            return;
        }

        self.attempts += 1;
        if let Some(word) = accepted {
            self.accepted_words.insert(0, word.to_string());
        }

        if self.attempts >= ATTEMPT_LIMIT {
            self.status = RoundStatus::Finished;
            self.score = Some(score_for(self.accepted_words.len()));
            log::info!(
                "round '{}' finished: {} of {} accepted",
                self.root_word,
                self.accepted_words.len(),
                ATTEMPT_LIMIT
            );
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == RoundStatus::Finished
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recently accepted first.
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted_words
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Percentage score; `None` until the round is finished.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.score
    }
}

#[allow(clippy::cast_precision_loss)]
fn score_for(accepted: usize) -> f64 {
    accepted as f64 / f64::from(ATTEMPT_LIMIT) * 100.0
}
