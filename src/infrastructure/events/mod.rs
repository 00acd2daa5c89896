//! Event Sink Implementations
//!
//! - ConsoleEventSink: human-readable per-file progress

mod console;

pub use console::ConsoleEventSink;
