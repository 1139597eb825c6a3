//! Randomness helpers shared by the question builder and the evaluator.
//!
//! Every helper takes the generator as an argument so sessions can run on a
//! seeded [`StdRng`](rand::rngs::StdRng) in tests and with `--seed`.

use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Draws an integer uniformly from `min..=max`.
pub fn bounded<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}
