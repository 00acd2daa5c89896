//! Confirmation Prompt Implementations

mod line;

pub use line::LinePrompt;
