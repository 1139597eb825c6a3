//! Quiz logic: question building, answer evaluation, the session state
//! machine, and result aggregation.

mod builder;
mod evaluator;
mod results;
mod session;

pub use builder::build;
pub use evaluator::{
    AGE_MAX, AGE_MIN, Evaluation, NUM_OPTIONS, evaluate, generate_options, parse_answer,
};
pub use results::{QuizSummary, summarize};
pub use session::{Progress, QuizSession};
