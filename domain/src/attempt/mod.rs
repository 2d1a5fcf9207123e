//! Quiz attempt: answer validation and the question-flow state machine

pub mod answer;
pub mod entities;

pub use answer::{AnswerError, parse_choice};
pub use entities::{AcceptedAnswer, Attempt, AttemptPhase};
