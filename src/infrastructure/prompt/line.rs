//! Line Prompt
//!
//! Writes a question and reads a single line of answer. Generic over the
//! reader and writer so the decision contract is testable without a TTY.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use crate::domain::ports::{ConfirmDecision, Confirmation};

/// Confirmation prompt over any line reader and writer.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on stdout, read from stdin.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirmation for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<ConfirmDecision> {
        write!(self.output, "{question} [Y/n] ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        let line = (read > 0).then_some(line.as_str());
        Ok(ConfirmDecision::from_line(line))
    }
}
