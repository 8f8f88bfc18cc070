use std::sync::Arc;

use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::round::{RoundError, RoundState};
use crate::validator::{Rejection, normalize_candidate, validate};
use crate::{debug_log, info_log};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("no round has been started")]
    RoundNotStarted,
    #[error("the round is finished")]
    RoundFinished,
    #[error("the root word list is empty")]
    NoRootWords,
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl GameError {
    /// Alert title shown to the player.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::RoundNotStarted => "Oops!!",
            Self::RoundFinished => "Round over",
            Self::NoRootWords => "No root words",
            Self::Round(_) => "Invalid root word",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::RoundNotStarted => "Start game to continue!".to_string(),
            Self::RoundFinished => "Start a new game to keep playing!".to_string(),
            Self::NoRootWords => "Add some words to the root word list and try again.".to_string(),
            Self::Round(e) => e.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(String),
    Rejected {
        reason: Rejection,
        title: &'static str,
        message: String,
    },
    /// Blank submission; not counted as an attempt.
    Ignored,
}

/// One player's game: the dictionary, the language tag handed to it and the
/// current round, if any. Starting a round replaces the previous one.
pub struct Game<D: Dictionary + ?Sized> {
    dictionary: Arc<D>,
    language: String,
    round: Option<RoundState>,
}

impl<D: Dictionary> Game<D> {
    pub fn new(dictionary: D, language: &str) -> Self {
        Self::with_shared_dictionary(Arc::new(dictionary), language)
    }
}

impl<D: Dictionary + ?Sized> Game<D> {
    pub fn with_shared_dictionary(dictionary: Arc<D>, language: &str) -> Self {
        Self {
            dictionary,
            language: language.to_string(),
            round: None,
        }
    }

    pub fn start_round(&mut self, root: &str) -> Result<&RoundState, GameError> {
        let round = RoundState::start(root)?;
        info_log!("Game::start_round() - root word '{}'", round.root_word());
        Ok(&*self.round.insert(round))
    }

    /// Validate a raw submission against the current round and record the
    /// attempt. Blank input is ignored and costs nothing.
    pub fn submit(&mut self, candidate: &str) -> Result<SubmitOutcome, GameError> {
        let round = self.round.as_mut().ok_or(GameError::RoundNotStarted)?;

        let Some(candidate) = normalize_candidate(candidate) else {
            debug_log!("Game::submit() - blank submission ignored");
            return Ok(SubmitOutcome::Ignored);
        };

        if round.is_finished() {
            log::warn!("submission '{candidate}' after round finished");
            return Err(GameError::RoundFinished);
        }

        match validate(&candidate, round, &*self.dictionary, &self.language) {
            Ok(word) => {
                round.record_attempt(Some(&word));
                info_log!("Game::submit() - accepted '{}'", word);
                Ok(SubmitOutcome::Accepted(word))
            }
            Err(reason) => {
                round.record_attempt(None);
                info_log!("Game::submit() - rejected '{}': {:?}", candidate, reason);
                Ok(SubmitOutcome::Rejected {
                    reason,
                    title: reason.title(),
                    message: reason.message(round.root_word()),
                })
            }
        }
    }

    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewGame,
    Exit,
}

/// Presentation seam. The game loop only talks to the player through this.
pub trait GameInterface {
    /// Next player action. `None` means nothing actionable was entered.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_round_started(&mut self, round: &RoundState);
    fn display_accepted(&mut self, word: &str, round: &RoundState);
    fn display_alert(&mut self, title: &str, message: &str);
    fn display_progress(&mut self, round: &RoundState);
    fn display_score(&mut self, score: f64);
    fn display_exit_message(&mut self);
}

/// Drive a game until the player exits.
///
/// `next_root` supplies the root word for each new round; a round is started
/// right away so the player can begin typing.
pub fn game_loop<D, I, F>(game: &mut Game<D>, interface: &mut I, mut next_root: F)
where
    D: Dictionary + ?Sized,
    I: GameInterface + ?Sized,
    F: FnMut() -> Option<String>,
{
    start_new_round(game, interface, &mut next_root);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewGame => start_new_round(game, interface, &mut next_root),
            UserAction::Submit(candidate) => handle_submission(game, interface, &candidate),
        }
    }
}

fn start_new_round<D, I, F>(game: &mut Game<D>, interface: &mut I, next_root: &mut F)
where
    D: Dictionary + ?Sized,
    I: GameInterface + ?Sized,
    F: FnMut() -> Option<String>,
{
    let result = next_root()
        .ok_or(GameError::NoRootWords)
        .and_then(|root| game.start_round(&root).map(|_| ()));

    match result {
        Ok(()) => {
            if let Some(round) = game.round() {
                interface.display_round_started(round);
                interface.display_progress(round);
            }
        }
        Err(e) => {
            log::warn!("could not start round: {e}");
            interface.display_alert(e.title(), &e.message());
        }
    }
}

fn handle_submission<D, I>(game: &mut Game<D>, interface: &mut I, candidate: &str)
where
    D: Dictionary + ?Sized,
    I: GameInterface + ?Sized,
{
    match game.submit(candidate) {
        Ok(SubmitOutcome::Ignored) => return,
        Ok(SubmitOutcome::Accepted(word)) => {
            if let Some(round) = game.round() {
                interface.display_accepted(&word, round);
            }
        }
        Ok(SubmitOutcome::Rejected { title, message, .. }) => {
            interface.display_alert(title, &message);
        }
        Err(e) => {
            interface.display_alert(e.title(), &e.message());
            return;
        }
    }

    if let Some(round) = game.round() {
        interface.display_progress(round);
        if let Some(score) = round.score() {
            interface.display_score(score);
        }
    }
}
