//! Domain layer for warband-quiz
//!
//! This crate contains the core quiz logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Category
//!
//! The fixed faction set an answer scores toward. [`Category::ALL`] is the
//! single enumeration order used everywhere: tally layout, report lines,
//! and dominant-category tie-breaking.
//!
//! ## Attempt
//!
//! One pass through the [`QuestionBank`]. The [`Attempt`] state machine
//! validates answers, owns the [`ScoreTally`], and tracks whether the last
//! answer was invalid so the question body is not re-rendered.
//!
//! ## Report
//!
//! [`AlignmentReport`] turns a finished tally into per-category
//! percentages and the dominant category.

pub mod attempt;
pub mod core;
pub mod scoring;

// Re-export commonly used types
pub use attempt::{AcceptedAnswer, AnswerError, Attempt, AttemptPhase, parse_choice};
pub use core::{
    category::Category,
    error::DomainError,
    question::{AnswerOption, Question, QuestionBank},
};
pub use scoring::{AlignmentReport, BAR_WIDTH, CategoryShare, ScoreTally, percent_of};
