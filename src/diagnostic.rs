//! Warn-and-continue results.
//!
//! Most problems found while compiling a schema only invalidate one enum,
//! message, field or annotation. They are collected as [`Diagnostic`]s next
//! to the best-effort value instead of aborting the run.

use std::fmt;

use tracing::warn;

use crate::error::Error;

/// A non-fatal problem attached to the definition it was found on.
#[derive(Debug)]
pub struct Diagnostic {
    /// Name of the enum, message, field or file the problem belongs to.
    pub subject: String,
    pub error: Error,
}

impl Diagnostic {
    pub fn new(subject: impl Into<String>, error: Error) -> Self {
        Self {
            subject: subject.into(),
            error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subject, self.error)
    }
}

/// A value together with the diagnostics collected while producing it.
#[derive(Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Outcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, subject: impl Into<String>, error: Error) {
        self.diagnostics.push(Diagnostic::new(subject, error));
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Emit every diagnostic as a `warn` event.
    pub fn log(&self) {
        for diagnostic in &self.diagnostics {
            warn!(subject = %diagnostic.subject, error = %diagnostic.error, "problem in definition");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_value() {
        let mut outcome = Outcome::new(vec![7]);
        assert!(outcome.is_clean());

        outcome.push("Book.author_id", Error::MalformedReference("bad".to_string()));

        assert_eq!(outcome.value, vec![7]);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].subject, "Book.author_id");
        assert!(!outcome.is_clean());
    }

    #[test]
    fn test_display_includes_subject() {
        let diagnostic = Diagnostic::new("books", Error::TableNotFound("Book".to_string()));
        assert_eq!(
            diagnostic.to_string(),
            "books: table not found for message Book"
        );
    }
}
