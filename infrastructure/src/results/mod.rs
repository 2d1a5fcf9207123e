//! Result persistence adapters

mod file_writer;

pub use file_writer::FileResultWriter;
