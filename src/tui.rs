//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `EnteringWord`: letters go into the input field, ENTER submits
//! - `RoundOver`: the score is shown, only a new game or quit is accepted
//! - `NoRound`: no round could be started, same keys as `RoundOver`

use crate::cli::format_score;
use crate::game_state::{GameInterface, UserAction};
use crate::round::{ATTEMPT_LIMIT, RoundState};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 24;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    RoundOver,
    NoRound,
}

#[derive(Debug)]
struct Alert {
    title: String,
    message: String,
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    current_input: &'a str,
    state: TuiState,
    accepted_words: &'a [String],
    attempts: u32,
    score: Option<f64>,
    message: &'a str,
    alert: Option<&'a Alert>,
    status: &'a str,
}

/// Full-screen interface: input field, accepted words, counters and result.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    current_input: String,
    state: TuiState,
    accepted_words: Vec<String>,
    attempts: u32,
    score: Option<f64>,
    message: String,
    alert: Option<Alert>,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal backend created");

        Ok(Self {
            terminal,
            root_word: String::new(),
            current_input: String::new(),
            state: TuiState::NoRound,
            accepted_words: Vec::new(),
            attempts: 0,
            score: None,
            message: String::new(),
            alert: None,
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            current_input: &self.current_input,
            state: self.state,
            accepted_words: &self.accepted_words,
            attempts: self.attempts,
            score: self.score,
            message: &self.message,
            alert: self.alert.as_ref(),
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input field
                Constraint::Min(6),    // Accepted words + round info
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input, ctx.state);
        Self::render_accepted(f, middle[0], ctx.accepted_words);
        Self::render_info(f, middle[1], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let text = if root_word.is_empty() {
            "WORD SCRAMBLE".to_string()
        } else {
            root_word.to_uppercase()
        };
        let title = Paragraph::new(text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Word Scramble"));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str, state: TuiState) {
        let line = if state == TuiState::EnteringWord {
            Line::from(vec![
                Span::raw(current_input.to_string()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ])
        } else {
            Line::from(Span::styled("", Style::default().fg(Color::DarkGray)))
        };
        let paragraph = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Enter your word"));
        f.render_widget(paragraph, area);
    }

    fn render_accepted(f: &mut Frame, area: Rect, accepted_words: &[String]) {
        let lines: Vec<Line> = accepted_words
            .iter()
            .map(|word| {
                Line::from(vec![
                    Span::styled(format!("({}) ", word.chars().count()), INFO_STYLE),
                    Span::raw(word.clone()),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Accepted words").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = vec![
            Line::from(format!("Attempt(s): {} / {}", ctx.attempts, ATTEMPT_LIMIT)),
            Line::from(format!("Accepted word(s): {}", ctx.accepted_words.len())),
            Line::from(""),
        ];

        if let Some(score) = ctx.score {
            lines.push(Line::from(Span::styled("Result", HEADER_STYLE)));
            lines.push(Line::from(Span::styled(format_score(score), SUCCESS_STYLE)));
            lines.push(Line::from(""));
        }

        if !ctx.message.is_empty() {
            lines.push(Line::from(Span::styled(ctx.message, MESSAGE_STYLE)));
        }

        if let Some(alert) = ctx.alert {
            lines.push(Line::from(Span::styled(
                alert.title.as_str(),
                ERROR_STYLE.add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(alert.message.as_str(), ERROR_STYLE)));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Round").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let text = match state {
            TuiState::EnteringWord => "Type a word | ENTER: Submit | CTRL+N: New game | ESC: Quit",
            TuiState::RoundOver | TuiState::NoRound => "N: New game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!(
                    "handle_input() - Key event received: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                Ok(match self.state {
                    TuiState::EnteringWord => self.handle_word_input(key),
                    TuiState::RoundOver | TuiState::NoRound => Self::handle_round_over_input(key),
                })
            }
            other => {
                debug_log!("handle_input() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let has_alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => Some(UserAction::Exit),
            KeyCode::Char('n' | 'N') if has_ctrl => Some(UserAction::NewGame),
            KeyCode::Char(c)
                if c.is_alphabetic()
                    && !has_ctrl
                    && !has_alt
                    && self.current_input.chars().count() < MAX_INPUT_LENGTH =>
            {
                self.current_input.extend(c.to_lowercase());
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                // Blank input is not an attempt; keep waiting.
                if self.current_input.trim().is_empty() {
                    return None;
                }
                let word = std::mem::take(&mut self.current_input);
                info_log!("handle_word_input() - Submitting '{}'", word);
                Some(UserAction::Submit(word))
            }
            _ => None,
        }
    }

    fn handle_round_over_input(key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char('n' | 'N') => Some(UserAction::NewGame),
            KeyCode::Esc => Some(UserAction::Exit),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => return Some(action),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("terminal input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_round_started(&mut self, round: &RoundState) {
        self.root_word = round.root_word().to_string();
        self.current_input.clear();
        self.accepted_words.clear();
        self.attempts = round.attempts();
        self.score = None;
        self.alert = None;
        self.state = TuiState::EnteringWord;
        self.message = format!("Make words from the letters of '{}'", round.root_word());
        self.status = format!("New game - {ATTEMPT_LIMIT} attempts");
        self.draw_or_log();
    }

    fn display_accepted(&mut self, word: &str, round: &RoundState) {
        self.accepted_words = round.accepted_words().to_vec();
        self.alert = None;
        self.message = format!("Accepted: {word}");
        self.draw_or_log();
    }

    fn display_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
        if self.root_word.is_empty() {
            self.state = TuiState::NoRound;
        }
        self.draw_or_log();
    }

    fn display_progress(&mut self, round: &RoundState) {
        self.attempts = round.attempts();
        self.accepted_words = round.accepted_words().to_vec();
        self.status = format!(
            "{} attempt(s) left",
            ATTEMPT_LIMIT.saturating_sub(round.attempts())
        );
        self.draw_or_log();
    }

    fn display_score(&mut self, score: f64) {
        self.score = Some(score);
        self.state = TuiState::RoundOver;
        self.current_input.clear();
        self.status = format!("Round over - {}", format_score(score));
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.message = "Exiting...".to_string();
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
