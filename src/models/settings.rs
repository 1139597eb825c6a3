use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::QuizError;

pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const MAX_QUESTION_COUNT: usize = 50;

/// How the player answers each question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum AnswerMode {
    /// Pick one of four ages.
    #[default]
    #[value(alias = "mc")]
    MultipleChoice,
    /// Type the age.
    TypeIn,
}

impl AnswerMode {
    pub fn toggled(self) -> Self {
        match self {
            AnswerMode::MultipleChoice => AnswerMode::TypeIn,
            AnswerMode::TypeIn => AnswerMode::MultipleChoice,
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::MultipleChoice => write!(f, "Multiple choice"),
            AnswerMode::TypeIn => write!(f, "Type in"),
        }
    }
}

/// Order in which characters are asked.
///
/// The dataset carries no popularity metric, so `Forward` ("popular first")
/// is a plain shuffle and `Reverse` ("unpopular first") is a shuffle followed
/// by a reversal. If a real popularity field appears it belongs on
/// [`Character`](super::Character) as a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum QuestionOrder {
    #[default]
    Random,
    #[value(alias = "popular")]
    Forward,
    #[value(alias = "unpopular")]
    Reverse,
}

impl QuestionOrder {
    pub fn next(self) -> Self {
        match self {
            QuestionOrder::Random => QuestionOrder::Forward,
            QuestionOrder::Forward => QuestionOrder::Reverse,
            QuestionOrder::Reverse => QuestionOrder::Random,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            QuestionOrder::Random => QuestionOrder::Reverse,
            QuestionOrder::Forward => QuestionOrder::Random,
            QuestionOrder::Reverse => QuestionOrder::Forward,
        }
    }
}

impl fmt::Display for QuestionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionOrder::Random => write!(f, "Random"),
            QuestionOrder::Forward => write!(f, "Popular first"),
            QuestionOrder::Reverse => write!(f, "Unpopular first"),
        }
    }
}

/// Settings chosen on the setup screen. Fixed for the length of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSettings {
    pub question_count: usize,
    pub answer_mode: AnswerMode,
    pub ordering: QuestionOrder,
}

impl QuizSettings {
    pub fn new(question_count: usize, answer_mode: AnswerMode, ordering: QuestionOrder) -> Self {
        Self {
            question_count,
            answer_mode,
            ordering,
        }
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.question_count == 0 {
            return Err(QuizError::InvalidSettings(
                "question count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::new(
            DEFAULT_QUESTION_COUNT,
            AnswerMode::default(),
            QuestionOrder::default(),
        )
    }
}
