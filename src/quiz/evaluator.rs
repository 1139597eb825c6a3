use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::data::parse_leading_int;
use crate::error::QuizError;
use crate::random::bounded;

pub const NUM_OPTIONS: usize = 4;
/// Smallest age offered as a multiple-choice option.
pub const AGE_MIN: u32 = 1;
/// Largest age offered as a multiple-choice option.
pub const AGE_MAX: u32 = 25;

const BASE_SPREAD: i64 = 3;
const ATTEMPTS_PER_SPREAD: usize = 64;

/// Result of judging one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub is_correct: bool,
}

/// Exact-match comparison. There is no tolerance band.
pub fn evaluate(user_answer: i64, correct_answer: u32) -> Evaluation {
    Evaluation {
        is_correct: user_answer == i64::from(correct_answer),
    }
}

/// Parses a typed answer. Any leading integer is accepted, negative included;
/// only text without one is invalid.
pub fn parse_answer(text: &str) -> Result<i64, QuizError> {
    parse_leading_int(text).ok_or_else(|| QuizError::InvalidInput(text.to_string()))
}

/// Four distinct ages, one of them `correct_age`, in random order.
///
/// Distractors are the correct age moved by up to three years, kept inside
/// `AGE_MIN..=AGE_MAX`. Near the edges of that range (or for ages outside it)
/// the spread widens after every batch of failed draws, and a final
/// deterministic pass takes the closest unused ages.
pub fn generate_options<R: Rng + ?Sized>(correct_age: u32, rng: &mut R) -> [u32; NUM_OPTIONS] {
    let mut options = Vec::with_capacity(NUM_OPTIONS);
    options.push(correct_age);

    let mut spread = BASE_SPREAD;
    while options.len() < NUM_OPTIONS && spread <= i64::from(AGE_MAX) {
        for _ in 0..ATTEMPTS_PER_SPREAD {
            let candidate = i64::from(correct_age) + bounded(rng, -spread, spread);
            let Some(age) = in_range(candidate) else {
                continue;
            };
            if !options.contains(&age) {
                options.push(age);
                if options.len() == NUM_OPTIONS {
                    break;
                }
            }
        }
        spread += 1;
    }

    if options.len() < NUM_OPTIONS {
        fill_nearest(&mut options, correct_age);
    }

    options.shuffle(rng);
    let mut result = [0; NUM_OPTIONS];
    result.copy_from_slice(&options[..NUM_OPTIONS]);
    result
}

fn in_range(candidate: i64) -> Option<u32> {
    u32::try_from(candidate)
        .ok()
        .filter(|age| (AGE_MIN..=AGE_MAX).contains(age))
}

fn fill_nearest(options: &mut Vec<u32>, correct_age: u32) {
    let mut remaining: Vec<u32> = (AGE_MIN..=AGE_MAX)
        .filter(|age| !options.contains(age))
        .collect();
    remaining.sort_by_key(|age| age.abs_diff(correct_age));

    let missing = NUM_OPTIONS - options.len();
    options.extend(remaining.into_iter().take(missing));
}
