//! Scoring: the per-attempt tally and the report derived from it

pub mod report;
pub mod tally;

pub use report::{AlignmentReport, BAR_WIDTH, CategoryShare, percent_of};
pub use tally::ScoreTally;
