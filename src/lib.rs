// Library interface for word-scramble
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod round;
pub mod sessions;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use dictionary::{Dictionary, WordListDictionary};
pub use game_state::{Game, GameError, GameInterface, SubmitOutcome, UserAction, game_loop};
pub use round::{ATTEMPT_LIMIT, MIN_WORD_LENGTH, RoundError, RoundState, RoundStatus};
pub use sessions::SessionRegistry;
pub use validator::{Rejection, is_possible, normalize_candidate, validate};
pub use wordbank::{choose_root_word, load_wordbank_from_file, load_wordbank_from_str};
