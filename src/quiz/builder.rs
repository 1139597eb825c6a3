use rand::Rng;

use crate::models::{Character, Question, QuestionOrder, QuizSettings};
use crate::random::shuffle;

/// Builds the question sequence for a session.
///
/// Characters are sampled without replacement, so the result has
/// `min(settings.question_count, characters.len())` distinct entries.
pub fn build<R: Rng + ?Sized>(
    characters: &[Character],
    settings: &QuizSettings,
    rng: &mut R,
) -> Vec<Question> {
    let mut ordered = shuffle(characters, rng);
    if settings.ordering == QuestionOrder::Reverse {
        ordered.reverse();
    }

    ordered.truncate(settings.question_count.min(characters.len()));
    ordered.into_iter().map(Question::new).collect()
}
