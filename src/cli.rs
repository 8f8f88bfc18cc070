use clap::Parser;
use crate::dictionary::DEFAULT_LANGUAGE;
use crate::game_state::{GameInterface, UserAction};
use crate::round::{ATTEMPT_LIMIT, RoundState};
use std::io::BufRead;

/// Word Scramble CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of root words
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to a newline-delimited dictionary of accepted words
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<String>,

    /// Language tag passed to the dictionary check
    #[arg(short = 'l', long = "language", default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    /// Play every round with this root word instead of a random one
    #[arg(short = 'r', long = "root")]
    pub root_word: Option<String>,

    /// Use the full-screen terminal interface
    #[arg(long = "tui")]
    pub tui: bool,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Render a score without trailing zeros: 60.0 -> "60", 12.5 -> "12.5".
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score}%")
}

fn parse_action(input: &str) -> UserAction {
    match input.trim().to_lowercase().as_str() {
        "exit" => UserAction::Exit,
        "new" => UserAction::NewGame,
        _ => UserAction::Submit(input.to_string()),
    }
}

/// Read one line. End of input or a read error means the player is gone.
pub fn read_action<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    println!("\nEnter your word ('new' for a new game, 'exit' to quit):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => Some(UserAction::Exit),
        Ok(_) if input.trim().is_empty() => None,
        Ok(_) => Some(parse_action(&input)),
        Err(e) => {
            log::warn!("failed to read input: {e}");
            Some(UserAction::Exit)
        }
    }
}

pub fn display_round_started(round: &RoundState) {
    println!("\n=== {} ===", round.root_word().to_uppercase());
    println!(
        "Make words from the letters of '{}'. You have {} attempts.",
        round.root_word(),
        ATTEMPT_LIMIT
    );
}

pub fn display_accepted(word: &str, round: &RoundState) {
    println!("Accepted: {word}");
    for used in round.accepted_words() {
        println!("  ({}) {}", used.chars().count(), used);
    }
}

pub fn display_alert(title: &str, message: &str) {
    println!("{title}: {message}");
}

pub fn display_progress(round: &RoundState) {
    println!("Attempt(s): {}", round.attempts());
    println!("Accepted word(s): {}", round.accepted_words().len());
}

pub fn display_score(score: f64) {
    println!("\nResult");
    println!("{}", format_score(score));
}

pub fn display_exit_message() {
    println!("Exiting.");
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn read_action(&mut self) -> Option<UserAction> {
        read_action(&mut self.reader)
    }

    fn display_round_started(&mut self, round: &RoundState) {
        display_round_started(round);
    }

    fn display_accepted(&mut self, word: &str, round: &RoundState) {
        display_accepted(word, round);
    }

    fn display_alert(&mut self, title: &str, message: &str) {
        display_alert(title, message);
    }

    fn display_progress(&mut self, round: &RoundState) {
        display_progress(round);
    }

    fn display_score(&mut self, score: f64) {
        display_score(score);
    }

    fn display_exit_message(&mut self) {
        display_exit_message();
    }
}
