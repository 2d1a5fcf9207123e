//! Question bank adapters

mod json_loader;

pub use json_loader::JsonQuestionBank;
