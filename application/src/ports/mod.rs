//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod answer_input;
pub mod presenter;
pub mod question_source;
pub mod result_sink;
