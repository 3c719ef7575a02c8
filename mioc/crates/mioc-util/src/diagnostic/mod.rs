//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! compiler diagnostics (errors, warnings, and notes).
//!
//! # Example
//!
//! ```
//! use mioc_util::diagnostic::{DiagnosticBuilder, Handler};
//! use mioc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("duplicated dot in number literal")
//!     .span(Span::new(0, 4, 1, 1))
//!     .note("a number literal may contain at most one '.'")
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;

pub use builder::DiagnosticBuilder;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents compilation.
    Error,
    /// A warning that doesn't prevent compilation.
    Warning,
    /// Additional information about a diagnostic.
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location.
    pub span: Span,
    /// Additional notes for context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use mioc_util::diagnostic::{Diagnostic, Level};
    /// use mioc_util::Span;
    ///
    /// let diag = Diagnostic::error("unterminated string literal", Span::DUMMY);
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Add a note to the diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} at {}", self.level, self.message, self.span)
    }
}

/// Handler for collecting and reporting diagnostics.
///
/// The `Handler` collects diagnostics and provides methods for querying
/// their counts. Emission takes `&self`; interior mutability lets the
/// scanner hold a shared reference while it mutates its own state.
///
/// # Examples
///
/// ```
/// use mioc_util::diagnostic::{Diagnostic, Handler};
/// use mioc_util::Span;
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("bad literal", Span::DUMMY));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Default)]
pub struct Handler {
    /// Collected diagnostics.
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get a copy of all collected diagnostics.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all collected diagnostics.
    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_handler() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_emit_error() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("bad", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_warning_is_not_error() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::warning("meh", Span::DUMMY));
        assert!(!handler.has_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }

    #[test]
    fn test_take_diagnostics_drains() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("one", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("two", Span::DUMMY));

        let taken = handler.take_diagnostics();
        assert_eq!(taken.len(), 2);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_notes() {
        let diag = Diagnostic::error("bad escape", Span::DUMMY)
            .with_note("supported escapes are \\r, \\n, \\t and \\xHH");
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("oops", Span::new(0, 1, 2, 3));
        assert_eq!(format!("{}", diag), "error: oops at 2:3");
    }
}
