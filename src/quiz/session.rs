//! Quiz session state machine.
//!
//! `Setup → InProgress → Completed`, with `reset` returning to `Setup` from
//! anywhere. Every question must be answered before advancing, and there is
//! no way back to a previous question.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info};

use super::builder::build;
use super::evaluator::{Evaluation, NUM_OPTIONS, evaluate, generate_options, parse_answer};
use super::results::{QuizSummary, summarize};
use crate::error::QuizError;
use crate::models::{AnswerMode, AnswerRecord, Character, Question, QuizSettings, SessionState};

/// Position within a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    /// 1-based number of the current question.
    pub current: usize,
    pub total: usize,
    pub score: usize,
    pub answered: bool,
}

/// One run through a fixed sequence of questions.
pub struct QuizSession {
    state: SessionState,
    settings: QuizSettings,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
    options: Option<[u32; NUM_OPTIONS]>,
    rng: StdRng,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Session whose question order and options are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            state: SessionState::Setup,
            settings: QuizSettings::default(),
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            answers: Vec::new(),
            options: None,
            rng,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Builds the questions and enters `InProgress` at the first one.
    ///
    /// Starting over discards any session in progress, but only once the new
    /// one has been built; on error the previous state is left untouched.
    pub fn start(
        &mut self,
        settings: QuizSettings,
        characters: &[Character],
    ) -> Result<(), QuizError> {
        settings.validate()?;
        if characters.is_empty() {
            return Err(QuizError::NoValidData);
        }

        let questions = build(characters, &settings, &mut self.rng);
        info!(
            questions = questions.len(),
            pool = characters.len(),
            mode = ?settings.answer_mode,
            ordering = ?settings.ordering,
            "quiz started"
        );

        self.settings = settings;
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        self.state = SessionState::InProgress;
        self.prepare_options();
        Ok(())
    }

    /// The question being asked, while the session is running.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.questions.get(self.current_index)
    }

    /// Multiple-choice options for the current question.
    pub fn current_options(&self) -> Option<&[u32]> {
        self.options.as_ref().map(|options| options.as_slice())
    }

    /// The recorded answer for the current question, once it is answered.
    pub fn last_answer(&self) -> Option<&AnswerRecord> {
        if self.state != SessionState::InProgress {
            return None;
        }
        self.answers.get(self.current_index)
    }

    pub fn is_answered(&self) -> bool {
        self.answers.len() > self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    pub fn progress(&self) -> Progress {
        Progress {
            current: (self.current_index + 1).min(self.total()),
            total: self.total(),
            score: self.score,
            answered: self.is_answered(),
        }
    }

    /// Records an answer for the current question.
    ///
    /// Only one answer per question is accepted. In multiple-choice mode the
    /// value must be one of [`current_options`](Self::current_options).
    pub fn submit_answer(&mut self, user_answer: i64) -> Result<Evaluation, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NotInProgress);
        }
        if self.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }
        if let Some(options) = &self.options {
            if !options.iter().any(|option| i64::from(*option) == user_answer) {
                return Err(QuizError::NotAnOption(user_answer));
            }
        }

        let question = self
            .questions
            .get(self.current_index)
            .ok_or(QuizError::NotInProgress)?;
        let correct_answer = question.correct_answer();
        let evaluation = evaluate(user_answer, correct_answer);

        self.answers.push(AnswerRecord {
            question: question.character.clone(),
            user_answer,
            correct_answer,
            is_correct: evaluation.is_correct,
        });
        if evaluation.is_correct {
            self.score += 1;
        }

        debug!(
            question = self.current_index + 1,
            user_answer,
            correct_answer,
            correct = evaluation.is_correct,
            "answer recorded"
        );
        Ok(evaluation)
    }

    /// Parses and submits a typed answer. Unparseable text changes nothing.
    pub fn submit_text(&mut self, text: &str) -> Result<Evaluation, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NotInProgress);
        }
        let value = parse_answer(text)?;
        self.submit_answer(value)
    }

    /// Moves past an answered question, completing the session after the last.
    pub fn advance(&mut self) -> Result<SessionState, QuizError> {
        if self.state != SessionState::InProgress {
            return Err(QuizError::NotInProgress);
        }
        if !self.is_answered() {
            return Err(QuizError::NotAnswered);
        }

        self.current_index += 1;
        if self.current_index >= self.questions.len() {
            self.state = SessionState::Completed;
            self.options = None;
            info!(score = self.score, total = self.total(), "quiz completed");
        } else {
            self.prepare_options();
        }
        Ok(self.state)
    }

    /// Discards the session and returns to `Setup`.
    pub fn reset(&mut self) {
        self.state = SessionState::Setup;
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        self.options = None;
    }

    /// Final results, available once the session is completed.
    pub fn summarize(&self) -> Option<QuizSummary> {
        if self.state != SessionState::Completed {
            return None;
        }
        Some(summarize(&self.answers, self.questions.len()))
    }

    fn prepare_options(&mut self) {
        self.options = match (self.settings.answer_mode, self.questions.get(self.current_index)) {
            (AnswerMode::MultipleChoice, Some(question)) => {
                Some(generate_options(question.correct_answer(), &mut self.rng))
            }
            _ => None,
        };
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::QuestionOrder;

    fn pool(ages: &[u32]) -> Vec<Character> {
        ages.iter()
            .enumerate()
            .map(|(i, age)| Character::new(i.to_string(), format!("Student {i}"), *age))
            .collect()
    }

    fn type_in(count: usize) -> QuizSettings {
        QuizSettings::new(count, AnswerMode::TypeIn, QuestionOrder::Random)
    }

    fn answer_correctly(session: &mut QuizSession) -> Evaluation {
        let age = session.current_question().unwrap().correct_answer();
        session.submit_answer(i64::from(age)).unwrap()
    }

    #[test]
    fn new_session_is_in_setup() {
        let session = QuizSession::with_seed(0);
        assert_eq!(session.state(), SessionState::Setup);
        assert!(session.current_question().is_none());
        assert!(session.summarize().is_none());
    }

    #[test]
    fn all_correct_type_in_run_scores_full_marks() {
        let characters = pool(&[10, 12, 14, 16, 18]);
        let mut session = QuizSession::with_seed(1);
        session.start(type_in(3), &characters).unwrap();

        let mut seen = HashSet::new();
        for _ in 0..3 {
            seen.insert(session.current_question().unwrap().character.id.clone());
            assert!(answer_correctly(&mut session).is_correct);
            session.advance().unwrap();
        }

        assert_eq!(seen.len(), 3);
        assert_eq!(session.state(), SessionState::Completed);

        let summary = session.summarize().unwrap();
        assert_eq!(summary.score, 3);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage, 100);
    }

    #[test]
    fn second_submission_is_rejected() {
        let characters = pool(&[10, 12]);
        let mut session = QuizSession::with_seed(2);
        session.start(type_in(2), &characters).unwrap();

        answer_correctly(&mut session);
        let age = session.current_question().unwrap().correct_answer();

        assert!(matches!(
            session.submit_answer(i64::from(age)),
            Err(QuizError::AlreadyAnswered)
        ));
        assert_eq!(session.score(), 1);
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn wrong_answer_is_recorded_without_score() {
        let characters = pool(&[15]);
        let mut session = QuizSession::with_seed(3);
        session.start(type_in(1), &characters).unwrap();

        let evaluation = session.submit_answer(14).unwrap();
        assert!(!evaluation.is_correct);

        let record = session.last_answer().unwrap();
        assert_eq!(record.user_answer, 14);
        assert_eq!(record.correct_answer, 15);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn cannot_advance_without_answering() {
        let characters = pool(&[10, 12]);
        let mut session = QuizSession::with_seed(4);
        session.start(type_in(2), &characters).unwrap();

        assert!(matches!(session.advance(), Err(QuizError::NotAnswered)));
        assert_eq!(session.progress().current, 1);
    }

    #[test]
    fn non_numeric_text_changes_nothing() {
        let characters = pool(&[10, 12]);
        let mut session = QuizSession::with_seed(5);
        session.start(type_in(2), &characters).unwrap();

        assert!(matches!(
            session.submit_text("sixteen"),
            Err(QuizError::InvalidInput(_))
        ));
        assert!(!session.is_answered());
        assert!(session.answers().is_empty());

        let age = session.current_question().unwrap().correct_answer();
        assert!(session.submit_text(&age.to_string()).unwrap().is_correct);
    }

    #[test]
    fn negative_typed_answer_is_recorded_as_wrong() {
        let mut session = QuizSession::with_seed(14);
        session.start(type_in(1), &pool(&[15])).unwrap();

        let evaluation = session.submit_text("-5").unwrap();
        assert!(!evaluation.is_correct);

        assert_eq!(session.answers().len(), 1);
        let record = session.last_answer().unwrap();
        assert_eq!(record.user_answer, -5);
        assert_eq!(record.correct_answer, 15);
        assert!(!record.is_correct);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn multiple_choice_offers_the_answer_and_rejects_other_values() {
        let characters = pool(&[1, 25, 13]);
        let settings = QuizSettings::new(3, AnswerMode::MultipleChoice, QuestionOrder::Random);
        let mut session = QuizSession::with_seed(6);
        session.start(settings, &characters).unwrap();

        for _ in 0..3 {
            let correct = session.current_question().unwrap().correct_answer();
            let options = session.current_options().unwrap().to_vec();
            assert_eq!(options.len(), NUM_OPTIONS);
            assert!(options.contains(&correct));

            let outsider = (1..=30).find(|age| !options.contains(age)).unwrap();
            assert!(matches!(
                session.submit_answer(i64::from(outsider)),
                Err(QuizError::NotAnOption(_))
            ));

            session.submit_answer(i64::from(correct)).unwrap();
            session.advance().unwrap();
        }

        assert!(session.current_options().is_none());
        assert_eq!(session.summarize().unwrap().score, 3);
    }

    #[test]
    fn type_in_has_no_options() {
        let mut session = QuizSession::with_seed(7);
        session.start(type_in(1), &pool(&[9])).unwrap();
        assert!(session.current_options().is_none());
    }

    #[test]
    fn score_matches_correct_records() {
        let characters = pool(&[10, 11, 12, 13]);
        let mut session = QuizSession::with_seed(8);
        session.start(type_in(4), &characters).unwrap();

        for round in 0..4 {
            let age = session.current_question().unwrap().correct_answer();
            let guess = if round % 2 == 0 { age } else { age + 1 };
            session.submit_answer(i64::from(guess)).unwrap();
            session.advance().unwrap();
        }

        let correct = session.answers().iter().filter(|a| a.is_correct).count();
        assert_eq!(session.score(), correct);
        assert_eq!(correct, 2);
        assert_eq!(session.summarize().unwrap().percentage, 50);
    }

    #[test]
    fn failed_start_keeps_setup() {
        let mut session = QuizSession::with_seed(9);

        assert!(matches!(
            session.start(type_in(3), &[]),
            Err(QuizError::NoValidData)
        ));
        assert!(matches!(
            session.start(type_in(0), &pool(&[10])),
            Err(QuizError::InvalidSettings(_))
        ));
        assert_eq!(session.state(), SessionState::Setup);
        assert_eq!(session.total(), 0);
    }

    #[test]
    fn submissions_outside_a_run_are_rejected() {
        let mut session = QuizSession::with_seed(10);
        assert!(matches!(
            session.submit_answer(10),
            Err(QuizError::NotInProgress)
        ));

        session.start(type_in(1), &pool(&[10])).unwrap();
        session.submit_answer(10).unwrap();
        session.advance().unwrap();

        assert!(matches!(
            session.submit_answer(10),
            Err(QuizError::NotInProgress)
        ));
        assert!(matches!(session.advance(), Err(QuizError::NotInProgress)));
    }

    #[test]
    fn reset_returns_to_setup() {
        let mut session = QuizSession::with_seed(11);
        session.start(type_in(1), &pool(&[10])).unwrap();
        session.submit_answer(10).unwrap();
        session.advance().unwrap();

        session.reset();
        assert_eq!(session.state(), SessionState::Setup);
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
        assert!(session.questions().is_empty());
    }

    #[test]
    fn progress_tracks_answered_flag() {
        let mut session = QuizSession::with_seed(12);
        session.start(type_in(2), &pool(&[10, 11])).unwrap();

        let before = session.progress();
        assert_eq!((before.current, before.total, before.answered), (1, 2, false));

        answer_correctly(&mut session);
        assert!(session.progress().answered);

        session.advance().unwrap();
        let next = session.progress();
        assert_eq!((next.current, next.score, next.answered), (2, 1, false));
    }

    #[test]
    fn summarize_is_idempotent() {
        let mut session = QuizSession::with_seed(13);
        session.start(type_in(2), &pool(&[10, 11])).unwrap();
        for _ in 0..2 {
            session.submit_answer(10).unwrap();
            session.advance().unwrap();
        }

        assert_eq!(session.summarize(), session.summarize());
        assert_eq!(session.summarize().unwrap().score, 1);
    }
}
