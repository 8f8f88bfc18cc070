//! Keyed registry of independent games, for hosting many players at once.
//!
//! Every session owns its own round. Only the dictionary is shared, read-only.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use crate::dictionary::Dictionary;
use crate::game_state::{Game, GameError, SubmitOutcome};
use crate::round::RoundState;

pub struct SessionRegistry<K, D: Dictionary + ?Sized> {
    dictionary: Arc<D>,
    language: String,
    sessions: HashMap<K, Game<D>>,
}

impl<K, D> SessionRegistry<K, D>
where
    K: Eq + Hash,
    D: Dictionary + ?Sized,
{
    pub fn new(dictionary: Arc<D>, language: &str) -> Self {
        Self {
            dictionary,
            language: language.to_string(),
            sessions: HashMap::new(),
        }
    }

    /// Start (or restart) the round for `key`, creating the session if needed.
    /// An invalid root leaves the registry untouched.
    pub fn start_round(&mut self, key: K, root: &str) -> Result<&RoundState, GameError> {
        RoundState::start(root)?;
        let dictionary = &self.dictionary;
        let language = &self.language;
        self.sessions
            .entry(key)
            .or_insert_with(|| Game::with_shared_dictionary(Arc::clone(dictionary), language))
            .start_round(root)
    }

    /// Submit a candidate for `key`. Unknown sessions have no round yet.
    pub fn submit(&mut self, key: &K, candidate: &str) -> Result<SubmitOutcome, GameError> {
        self.sessions
            .get_mut(key)
            .ok_or(GameError::RoundNotStarted)?
            .submit(candidate)
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&RoundState> {
        self.sessions.get(key).and_then(Game::round)
    }

    /// Drop a session, returning its last round if it had one.
    pub fn end(&mut self, key: &K) -> Option<RoundState> {
        self.sessions
            .remove(key)
            .and_then(|game| game.round().cloned())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
