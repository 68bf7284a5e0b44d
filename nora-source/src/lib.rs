//! Source text and the syntax-error channel shared between the parser
//! and its callers.
//!
//! A [`Source`] couples the text being parsed with the errors reported
//! against it. The parser never fails outright: every problem it finds is
//! pushed into the [`ErrorReporter`] and parsing continues, so one pass can
//! surface several independent errors. Callers check
//! [`Source::has_no_errors`] before trusting the resulting tree.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;

/// A borrowed piece of source text plus its error channel.
pub struct Source<'a> {
    pub content: &'a str,
    pub errors: ErrorReporter,
}

impl<'a> Source<'a> {
    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            errors: ErrorReporter::new(),
        }
    }

    /// `true` when parsing recorded no syntax errors.
    pub fn has_no_errors(&self) -> bool {
        self.errors.is_empty()
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(content: &'a str) -> Self {
        Source::new(content)
    }
}

/// One syntax error: what went wrong, and where.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    message: String,
    span: Range<usize>,
}

impl SyntaxError {
    pub fn new(message: impl ToString, span: Range<usize>) -> Self {
        Self {
            message: message.to_string(),
            span,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte range of the offending token in the source text.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ERROR: {} at position {}",
            self.message(),
            self.span().start
        )
    }
}

/// Ordered sink for [`SyntaxError`]s.
///
/// Reporting takes `&self`: the parser's sub-routines only ever hold a
/// shared borrow of the [`Source`], so the list lives behind a `RefCell`
/// that `report` alone borrows mutably.
pub struct ErrorReporter {
    errors: RefCell<Vec<SyntaxError>>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Appends an error. Report order is preserved.
    pub fn report(&self, error: SyntaxError) {
        self.errors.borrow_mut().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.borrow().is_empty()
    }

    /// Everything reported so far, in report order.
    pub fn reported(&self) -> Vec<SyntaxError> {
        self.errors.borrow().clone()
    }

    /// The reported messages, in report order.
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .borrow()
            .iter()
            .map(|error| error.message().to_string())
            .collect()
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in self.errors.borrow().iter() {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_order_is_preserved() {
        let source = Source::new("let x 5;");
        assert!(source.has_no_errors());

        source.errors.report(SyntaxError::new("first", 4..5));
        source.errors.report(SyntaxError::new("second", 6..7));

        assert!(!source.has_no_errors());
        assert_eq!(source.errors.messages(), vec!["first", "second"]);
        assert_eq!(source.errors.reported()[1].span(), 6..7);
    }

    #[test]
    fn test_display_renders_message_and_position() {
        let error = SyntaxError::new("expected `=`", 6..7);
        assert_eq!(error.to_string(), "ERROR: expected `=` at position 6");

        let errors = ErrorReporter::new();
        errors.report(error);
        assert_eq!(errors.to_string(), "ERROR: expected `=` at position 6\n");
    }
}
