use tracing::{debug, warn};

use crate::config::QuizConfig;
use crate::data::DatasetCache;
use crate::error::QuizError;
use crate::models::{AnswerMode, AppState, MAX_QUESTION_COUNT, QuizSettings, SessionState};
use crate::preferences::{PreferenceStore, Theme};
use crate::quiz::QuizSession;

const MAX_INPUT_LENGTH: usize = 4;

/// Setting highlighted on the setup screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupField {
    QuestionCount,
    AnswerMode,
    Ordering,
}

impl SetupField {
    pub const ALL: [SetupField; 3] = [
        SetupField::QuestionCount,
        SetupField::AnswerMode,
        SetupField::Ordering,
    ];

    fn index(self) -> usize {
        match self {
            SetupField::QuestionCount => 0,
            SetupField::AnswerMode => 1,
            SetupField::Ordering => 2,
        }
    }
}

pub struct App {
    session: QuizSession,
    dataset: DatasetCache,
    preferences: PreferenceStore,
    settings: QuizSettings,
    setup_field: SetupField,
    selected_option: usize,
    input: String,
    loading: bool,
    error: Option<String>,
    result_scroll: usize,
}

impl App {
    pub fn new(config: QuizConfig) -> Self {
        let session = match config.seed {
            Some(seed) => QuizSession::with_seed(seed),
            None => QuizSession::new(),
        };

        Self::with_parts(
            session,
            DatasetCache::new(config.source),
            PreferenceStore::open(&config.preferences_path),
            config.settings,
        )
    }

    pub fn with_parts(
        session: QuizSession,
        dataset: DatasetCache,
        preferences: PreferenceStore,
        settings: QuizSettings,
    ) -> Self {
        Self {
            session,
            dataset,
            preferences,
            settings,
            setup_field: SetupField::QuestionCount,
            selected_option: 0,
            input: String::new(),
            loading: false,
            error: None,
            result_scroll: 0,
        }
    }

    pub fn state(&self) -> AppState {
        self.session.state().into()
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn dataset(&self) -> &DatasetCache {
        &self.dataset
    }

    pub fn setup_field(&self) -> SetupField {
        self.setup_field
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn select_next_field(&mut self) {
        let next = (self.setup_field.index() + 1) % SetupField::ALL.len();
        self.setup_field = SetupField::ALL[next];
    }

    pub fn select_previous_field(&mut self) {
        let len = SetupField::ALL.len();
        let previous = (self.setup_field.index() + len - 1) % len;
        self.setup_field = SetupField::ALL[previous];
    }

    /// Changes the highlighted setting; `forward` is right/up, otherwise left/down.
    pub fn adjust_setting(&mut self, forward: bool) {
        match self.setup_field {
            SetupField::QuestionCount => {
                let count = self.settings.question_count;
                self.settings.question_count = if forward {
                    (count + 1).min(MAX_QUESTION_COUNT)
                } else {
                    count.saturating_sub(1).max(1)
                };
            }
            SetupField::AnswerMode => {
                self.settings.answer_mode = self.settings.answer_mode.toggled();
            }
            SetupField::Ordering => {
                self.settings.ordering = if forward {
                    self.settings.ordering.next()
                } else {
                    self.settings.ordering.previous()
                };
            }
        }
    }

    pub fn toggle_theme(&mut self) {
        match self.preferences.toggle_theme() {
            Ok(theme) => debug!(?theme, "theme changed"),
            Err(e) => {
                warn!(error = %e, "theme not saved");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Marks the app as loading so the next frame shows it.
    pub fn begin_loading(&mut self) {
        self.loading = !self.dataset.is_loaded();
        self.error = None;
    }

    /// Loads the characters if needed and starts a session.
    ///
    /// Failures keep the setup screen and leave a retryable message.
    pub async fn start_quiz(&mut self) {
        self.error = None;
        let result = match self.dataset.characters().await {
            Ok(characters) => self.session.start(self.settings, characters),
            Err(e) => Err(e),
        };
        self.loading = false;

        match result {
            Ok(()) => self.reset_answer_input(),
            Err(e) => {
                warn!(error = %e, "quiz could not start");
                self.error = Some(start_failure_message(&e));
            }
        }
    }

    pub fn select_next_option(&mut self) {
        if let Some(count) = self.open_option_count() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(count) = self.open_option_count() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submits the highlighted multiple-choice option.
    pub fn submit_selected(&mut self) {
        let Some(value) = self
            .session
            .current_options()
            .and_then(|options| options.get(self.selected_option))
            .copied()
        else {
            return;
        };
        log_rejection(self.session.submit_answer(i64::from(value)).map(|_| ()));
    }

    pub fn input_push(&mut self, c: char) {
        if self.accepts_typing() && self.input.chars().count() < MAX_INPUT_LENGTH {
            self.input.push(c);
        }
    }

    pub fn input_pop(&mut self) {
        if self.accepts_typing() {
            self.input.pop();
        }
    }

    /// Submits the typed answer. Text that is not a number is ignored.
    pub fn submit_input(&mut self) {
        if !self.accepts_typing() {
            return;
        }
        let input = self.input.clone();
        log_rejection(self.session.submit_text(&input).map(|_| ()));
    }

    pub fn advance(&mut self) {
        match self.session.advance() {
            Ok(SessionState::Completed) => self.result_scroll = 0,
            Ok(_) => self.reset_answer_input(),
            Err(e) => debug!(error = %e, "advance ignored"),
        }
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.answers().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.reset_answer_input();
        self.result_scroll = 0;
        self.error = None;
    }

    fn accepts_typing(&self) -> bool {
        self.session.state() == SessionState::InProgress
            && self.session.settings().answer_mode == AnswerMode::TypeIn
            && !self.session.is_answered()
    }

    fn open_option_count(&self) -> Option<usize> {
        if self.session.is_answered() {
            return None;
        }
        self.session.current_options().map(|options| options.len())
    }

    fn reset_answer_input(&mut self) {
        self.selected_option = 0;
        self.input.clear();
    }
}

fn log_rejection(result: Result<(), QuizError>) {
    if let Err(e) = result {
        debug!(error = %e, "submission ignored");
    }
}

fn start_failure_message(error: &QuizError) -> String {
    if error.is_retryable() {
        format!("Error loading student data: {error}. Please try again.")
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::data::DataSource;
    use crate::models::QuestionOrder;

    fn app_with(document: serde_json::Value, settings: QuizSettings) -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let app = App::with_parts(
            QuizSession::with_seed(21),
            DatasetCache::new(DataSource::Inline(document)),
            PreferenceStore::open(dir.path().join("prefs.json")),
            settings,
        );
        (app, dir)
    }

    fn students() -> serde_json::Value {
        json!([
            {"Id": 1, "Name": "Aru", "Age": "16"},
            {"Id": 2, "Name": "Mutsuki", "Age": "16"},
            {"Id": 3, "Name": "Kayoko", "Age": "17"},
        ])
    }

    #[tokio::test]
    async fn start_moves_to_quiz_screen() {
        let (mut app, _dir) = app_with(students(), QuizSettings::default());
        assert_eq!(app.state(), AppState::Setup);

        app.begin_loading();
        assert!(app.is_loading());
        app.start_quiz().await;

        assert!(!app.is_loading());
        assert_eq!(app.state(), AppState::Quiz);
        assert_eq!(app.session().total(), 3);
    }

    #[tokio::test]
    async fn unusable_data_stays_on_setup_with_message() {
        let (mut app, _dir) = app_with(json!([{"Name": "?", "Age": "?"}]), QuizSettings::default());

        app.start_quiz().await;

        assert_eq!(app.state(), AppState::Setup);
        assert!(app.error().unwrap().contains("Please try again"));
    }

    #[tokio::test]
    async fn type_in_ignores_non_numeric_submission() {
        let settings = QuizSettings::new(1, AnswerMode::TypeIn, QuestionOrder::Random);
        let (mut app, _dir) = app_with(students(), settings);
        app.start_quiz().await;

        app.input_push('-');
        app.submit_input();
        assert!(!app.session().is_answered());

        app.input_pop();
        let age = app.session().current_question().unwrap().correct_answer();
        for c in age.to_string().chars() {
            app.input_push(c);
        }
        app.submit_input();
        assert_eq!(app.session().score(), 1);

        app.advance();
        assert_eq!(app.state(), AppState::Result);
    }

    #[tokio::test]
    async fn multiple_choice_selection_wraps() {
        let (mut app, _dir) = app_with(students(), QuizSettings::default());
        app.start_quiz().await;

        app.select_previous_option();
        assert_eq!(app.selected_option(), 3);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);

        app.submit_selected();
        assert!(app.session().is_answered());

        // Locked once answered.
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[tokio::test]
    async fn restart_returns_to_setup_and_reuses_cache() {
        let settings = QuizSettings::new(1, AnswerMode::TypeIn, QuestionOrder::Reverse);
        let (mut app, _dir) = app_with(students(), settings);
        app.start_quiz().await;
        app.input_push('1');
        app.submit_input();
        app.advance();
        assert_eq!(app.state(), AppState::Result);

        app.restart();
        assert_eq!(app.state(), AppState::Setup);

        app.begin_loading();
        assert!(!app.is_loading());
        app.start_quiz().await;
        assert_eq!(app.state(), AppState::Quiz);
    }

    #[test]
    fn setup_adjustments_stay_in_bounds() {
        let settings = QuizSettings::new(1, AnswerMode::MultipleChoice, QuestionOrder::Random);
        let (mut app, _dir) = app_with(students(), settings);

        app.adjust_setting(false);
        assert_eq!(app.settings().question_count, 1);
        for _ in 0..100 {
            app.adjust_setting(true);
        }
        assert_eq!(app.settings().question_count, MAX_QUESTION_COUNT);

        app.select_next_field();
        app.adjust_setting(true);
        assert_eq!(app.settings().answer_mode, AnswerMode::TypeIn);

        app.select_next_field();
        app.adjust_setting(false);
        assert_eq!(app.settings().ordering, QuestionOrder::Reverse);

        app.select_next_field();
        assert_eq!(app.setup_field(), SetupField::QuestionCount);
        app.select_previous_field();
        assert_eq!(app.setup_field(), SetupField::Ordering);
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let (mut app, dir) = app_with(students(), QuizSettings::default());
        app.toggle_theme();
        assert_eq!(app.theme(), Theme::Dark);
        assert_eq!(
            PreferenceStore::open(dir.path().join("prefs.json")).theme(),
            Theme::Dark
        );
    }
}
