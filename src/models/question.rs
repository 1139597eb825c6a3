use serde::Serialize;

use super::Character;

/// One character selected for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub character: Character,
}

impl Question {
    pub fn new(character: Character) -> Self {
        Self { character }
    }

    pub fn correct_answer(&self) -> u32 {
        self.character.age
    }
}

/// Outcome of a single answered question. Never mutated after it is recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question: Character,
    pub user_answer: i64,
    pub correct_answer: u32,
    pub is_correct: bool,
}
