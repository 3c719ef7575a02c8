//! Fluent builder for diagnostics.

use super::{Diagnostic, Handler, Level};
use crate::Span;

/// Fluent builder for constructing diagnostics.
///
/// # Examples
///
/// ```
/// use mioc_util::diagnostic::DiagnosticBuilder;
/// use mioc_util::Span;
///
/// let diag = DiagnosticBuilder::error("floating number has integral suffix")
///     .span(Span::new(0, 5, 1, 1))
///     .note("use 'F' or 'D' for floating literals")
///     .build();
///
/// assert_eq!(diag.notes.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start building an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(Level::Error, message, Span::DUMMY),
        }
    }

    /// Start building a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(Level::Warning, message, Span::DUMMY),
        }
    }

    /// Set the source location.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Attach a note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.diagnostic.notes.push(note.into());
        self
    }

    /// Finish building and return the diagnostic.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and emit the diagnostic to a handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error() {
        let diag = DiagnosticBuilder::error("bad").span(Span::new(1, 2, 1, 2)).build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "bad");
        assert_eq!(diag.span.start, 1);
    }

    #[test]
    fn test_emit_to_handler() {
        let handler = Handler::new();
        DiagnosticBuilder::error("bad").emit(&handler);
        DiagnosticBuilder::warning("meh").emit(&handler);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics().len(), 2);
    }
}
