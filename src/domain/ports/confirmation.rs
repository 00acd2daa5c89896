//! Confirmation Port
//!
//! The operator's go/no-go decision before any remote work starts.

use std::io;

/// Outcome of the confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Proceed,
    Cancel,
}

impl ConfirmDecision {
    /// Decide from one line of operator input.
    ///
    /// Only an empty line, `y` or `Y` proceed (surrounding whitespace,
    /// including the line terminator, is ignored). `yes`, `n` and anything
    /// else cancel. `None` means input ended before a line was read.
    pub fn from_line(line: Option<&str>) -> Self {
        match line.map(str::trim) {
            Some("") | Some("y") | Some("Y") => Self::Proceed,
            _ => Self::Cancel,
        }
    }

    pub fn proceeds(self) -> bool {
        self == Self::Proceed
    }
}

/// Asks the operator whether to go ahead.
pub trait Confirmation {
    fn confirm(&mut self, question: &str) -> io::Result<ConfirmDecision>;
}

/// Always proceeds without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmation for AutoConfirm {
    fn confirm(&mut self, _question: &str) -> io::Result<ConfirmDecision> {
        Ok(ConfirmDecision::Proceed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_proceeds() {
        assert_eq!(ConfirmDecision::from_line(Some("")), ConfirmDecision::Proceed);
        assert_eq!(ConfirmDecision::from_line(Some("\n")), ConfirmDecision::Proceed);
    }

    #[test]
    fn single_y_proceeds_in_either_case() {
        assert!(ConfirmDecision::from_line(Some("y\n")).proceeds());
        assert!(ConfirmDecision::from_line(Some("Y")).proceeds());
        assert!(ConfirmDecision::from_line(Some("  y  \r\n")).proceeds());
    }

    #[test]
    fn other_affirmatives_cancel() {
        for input in ["yes", "YES", "Yes", "yy", "ok", "sure", "1"] {
            assert_eq!(
                ConfirmDecision::from_line(Some(input)),
                ConfirmDecision::Cancel,
                "{input:?} must cancel"
            );
        }
    }

    #[test]
    fn negatives_cancel() {
        assert!(!ConfirmDecision::from_line(Some("n")).proceeds());
        assert!(!ConfirmDecision::from_line(Some("N\n")).proceeds());
    }

    #[test]
    fn end_of_input_cancels() {
        assert_eq!(ConfirmDecision::from_line(None), ConfirmDecision::Cancel);
    }

    #[test]
    fn auto_confirm_always_proceeds() {
        let mut auto = AutoConfirm;
        assert!(auto.confirm("go?").unwrap().proceeds());
    }
}
