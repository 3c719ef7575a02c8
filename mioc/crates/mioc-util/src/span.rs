//! Span module - Source location tracking.
//!
//! This module provides the [`Span`] type used to attach source locations
//! to diagnostics. Offsets are measured in characters from the start of
//! the source that produced the token, matching the scanner's per-source
//! position counters.

use std::fmt;

/// Source location span.
///
/// A `Span` represents a range in source code, identified by:
/// - Character offsets (start, end), local to one source
/// - Line and column numbers (1-based, for human-readable output)
///
/// # Examples
///
/// ```
/// use mioc_util::Span;
///
/// let span = Span::new(10, 20, 1, 11);
/// assert_eq!(span.len(), 10);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start character offset in source.
    pub start: usize,
    /// End character offset in source (exclusive).
    pub end: usize,
    /// Line number (1-based, 0 when unknown).
    pub line: u32,
    /// Column number (1-based, 0 when unknown).
    pub column: u32,
}

impl Span {
    /// Dummy span for testing.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span.
    ///
    /// # Arguments
    ///
    /// * `start` - Start character offset
    /// * `end` - End character offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a zero-length span at a single location.
    ///
    /// # Examples
    ///
    /// ```
    /// use mioc_util::Span;
    ///
    /// let point = Span::point(5, 2, 1);
    /// assert_eq!(point.len(), 0);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns the number of characters covered by this span.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
