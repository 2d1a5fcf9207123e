//! Console output: formatting, the typewriter effect, and the presenter

pub mod console;
pub mod presenter;
pub mod typewriter;
