//! Core domain concepts shared across all subdomains.
//!
//! - [`category::Category`]: the fixed faction set
//! - [`question::Question`] / [`question::QuestionBank`]: the static quiz data
//! - [`error::DomainError`]: domain-level errors

pub mod category;
pub mod error;
pub mod question;
