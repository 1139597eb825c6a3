mod character;
mod question;
mod settings;
mod state;

pub use character::Character;
pub use question::{AnswerRecord, Question};
pub use settings::{
    AnswerMode, DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT, QuestionOrder, QuizSettings,
};
pub use state::{AppState, SessionState};
