//! # age-quiz
//!
//! A terminal quiz that asks how old each student in a public character
//! dataset is, by multiple choice or typed answer, and reports a score.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use age_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Fetches the default dataset lazily when the first quiz starts
//!     let quiz = Quiz::new(QuizConfig::default());
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The logic core can be driven without a terminal:
//!
//! ```rust
//! use age_quiz::{AnswerMode, Character, QuestionOrder, QuizSession, QuizSettings};
//!
//! let characters = vec![Character::new("1", "Aru", 16), Character::new("2", "Hina", 17)];
//! let settings = QuizSettings::new(2, AnswerMode::TypeIn, QuestionOrder::Random);
//!
//! let mut session = QuizSession::with_seed(7);
//! session.start(settings, &characters).unwrap();
//! while let Some(question) = session.current_question() {
//!     let age = question.correct_answer();
//!     session.submit_answer(i64::from(age)).unwrap();
//!     session.advance().unwrap();
//! }
//! assert_eq!(session.summarize().unwrap().percentage, 100);
//! ```

mod app;
mod config;
mod data;
mod error;
mod models;
mod preferences;
mod quiz;
pub mod random;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, SetupField};
pub use config::QuizConfig;
pub use data::{DEFAULT_DATA_URL, DataSource, DatasetCache, normalize, portrait_url};
pub use error::QuizError;
pub use models::{
    AnswerMode, AnswerRecord, AppState, Character, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT,
    Question, QuestionOrder, QuizSettings, SessionState,
};
pub use preferences::{DEFAULT_PREFERENCES_PATH, PreferenceStore, Preferences, Theme};
pub use quiz::{
    AGE_MAX, AGE_MIN, Evaluation, NUM_OPTIONS, Progress, QuizSession, QuizSummary, build,
    evaluate, generate_options, parse_answer, summarize,
};

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            app: App::new(config),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal and returns when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Continue,
    StartQuiz,
    Quit,
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(app, key.code) {
                Command::Continue => {}
                Command::StartQuiz => {
                    app.begin_loading();
                    terminal.draw(|frame| ui::render(frame, app))?;
                    app.start_quiz().await;
                }
                Command::Quit => break,
            }
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) -> Command {
    match app.state() {
        AppState::Setup => handle_setup_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_setup_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Enter => return Command::StartQuiz,
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_field(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_field(),
        KeyCode::Left | KeyCode::Char('h') => app.adjust_setting(false),
        KeyCode::Right | KeyCode::Char('l') => app.adjust_setting(true),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Command::Quit,
        _ => {}
    }
    Command::Continue
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Command {
    if key == KeyCode::Esc {
        return Command::Quit;
    }

    if app.session().is_answered() {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') | KeyCode::Right => {
                app.advance()
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return Command::Quit,
            _ => {}
        }
        return Command::Continue;
    }

    match app.session().settings().answer_mode {
        AnswerMode::MultipleChoice => match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => app.submit_selected(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Command::Quit,
            _ => {}
        },
        AnswerMode::TypeIn => match key {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => app.input_push(c),
            KeyCode::Backspace => app.input_pop(),
            KeyCode::Enter => app.submit_input(),
            KeyCode::Char('q') | KeyCode::Char('Q') => return Command::Quit,
            _ => {}
        },
    }
    Command::Continue
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Command {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Command::Quit,
        _ => {}
    }
    Command::Continue
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn app(mode: AnswerMode) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::with_parts(
            QuizSession::with_seed(4),
            DatasetCache::new(DataSource::Inline(json!([
                {"Id": 1, "Name": "Serika", "Age": "15"},
                {"Id": 2, "Name": "Nonomi", "Age": "16"},
            ]))),
            PreferenceStore::open(dir.path().join("prefs.json")),
            QuizSettings::new(2, mode, QuestionOrder::Random),
        );
        (app, dir)
    }

    #[test]
    fn enter_on_setup_requests_start() {
        let (mut app, _dir) = app(AnswerMode::MultipleChoice);
        assert_eq!(handle_input(&mut app, KeyCode::Enter), Command::StartQuiz);
        assert_eq!(handle_input(&mut app, KeyCode::Char('q')), Command::Quit);
    }

    #[tokio::test]
    async fn keys_drive_a_type_in_quiz_to_results() {
        let (mut app, _dir) = app(AnswerMode::TypeIn);
        app.start_quiz().await;

        for _ in 0..2 {
            let age = app.session().current_question().unwrap().correct_answer();
            for c in age.to_string().chars() {
                handle_input(&mut app, KeyCode::Char(c));
            }
            handle_input(&mut app, KeyCode::Enter);
            assert!(app.session().is_answered());
            handle_input(&mut app, KeyCode::Enter);
        }

        assert_eq!(app.state(), AppState::Result);
        assert_eq!(app.session().summarize().unwrap().percentage, 100);

        handle_input(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state(), AppState::Setup);
    }

    #[tokio::test]
    async fn letters_are_not_typed_into_the_answer() {
        let (mut app, _dir) = app(AnswerMode::TypeIn);
        app.start_quiz().await;

        handle_input(&mut app, KeyCode::Char('x'));
        assert!(app.input().is_empty());
        assert_eq!(handle_input(&mut app, KeyCode::Char('q')), Command::Quit);
    }
}
