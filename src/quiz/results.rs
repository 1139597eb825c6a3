use serde::Serialize;

use crate::models::AnswerRecord;

/// Final outcome of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    /// `100 * score / total`, rounded half up.
    pub percentage: u32,
    pub per_question: Vec<AnswerRecord>,
}

impl QuizSummary {
    pub fn incorrect(&self) -> usize {
        self.total - self.score
    }
}

/// Summarizes an answer history against the number of questions asked.
pub fn summarize(answers: &[AnswerRecord], total: usize) -> QuizSummary {
    let score = answers.iter().filter(|answer| answer.is_correct).count();

    QuizSummary {
        score,
        total,
        percentage: percentage(score, total),
        per_question: answers.to_vec(),
    }
}

fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * score + total) / (2 * total)) as u32
}
