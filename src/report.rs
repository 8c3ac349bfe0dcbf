use derive_more::Display;
use log::debug;

/// Receives every problem found while running a piece of source.
///
/// `location` is either empty or starts with a space (` at end`,
/// ` at 'x'`) so it can be glued right after the word `Error`.
pub trait Reporter {
    fn report(&mut self, line: usize, location: &str, message: &str);
}

/// A problem that knows where in the source it happened.
pub trait Diagnostic: std::fmt::Display {
    fn line(&self) -> usize;
    fn location(&self) -> String;
}

pub fn emit(reporter: &mut dyn Reporter, diagnostic: &dyn Diagnostic) {
    reporter.report(
        diagnostic.line(),
        &diagnostic.location(),
        &diagnostic.to_string(),
    );
}

/// Writes `[line L] Error<where>: <message>` to stderr.
#[derive(Debug, Default)]
pub struct StderrReporter;

impl Reporter for StderrReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        debug!("line {}{}: {}", line, location, message);
        eprintln!("{}", Report::new(line, location, message));
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display(fmt = "[line {}] Error{}: {}", line, location, message)]
pub struct Report {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl Report {
    pub fn new(line: usize, location: &str, message: &str) -> Self {
        Self {
            line,
            location: location.to_string(),
            message: message.to_string(),
        }
    }
}

/// Keeps reports in memory instead of printing them.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub reports: Vec<Report>,
}

impl Reporter for CollectingReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.reports.push(Report::new(line, location, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseError;
    use crate::token::{Token, TokenKind};

    #[test]
    fn report_format() {
        assert_eq!(
            Report::new(3, " at end", "Expect `)` after expression").to_string(),
            "[line 3] Error at end: Expect `)` after expression"
        );
        assert_eq!(
            Report::new(1, "", "Unterminated string").to_string(),
            "[line 1] Error: Unterminated string"
        );
    }

    #[test]
    fn emit_parse_error() {
        let mut reporter = CollectingReporter::default();
        let err = ParseError::Unfinished(Token::new(TokenKind::Number, "2", 4));
        emit(&mut reporter, &err);
        assert_eq!(
            reporter.reports,
            vec![Report::new(
                4,
                " at '2'",
                "Unfinished expression, leftover tokens start with `2`"
            )]
        );
    }
}
