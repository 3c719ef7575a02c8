//! Character sources.
//!
//! The scanner pulls characters one at a time through the [`CharSource`]
//! trait, so it never cares whether the text comes from a file, a memory
//! buffer, or anything else. Two providers are included: [`FileSource`]
//! and [`BufferSource`].

use std::fs;
use std::io;
use std::path::Path;

/// A producer of one character at a time.
///
/// Implementations report end-of-input by returning `None` from
/// [`read_one`](CharSource::read_one); a non-empty
/// [`error_message`](CharSource::error_message) distinguishes a read
/// failure from ordinary end-of-input.
pub trait CharSource {
    /// Read and consume the next character, or `None` at end-of-input.
    fn read_one(&mut self) -> Option<char>;

    /// Returns true once the source is exhausted.
    fn at_eof(&self) -> bool;

    /// The current error string; empty when no error has occurred.
    fn error_message(&self) -> &str;

    /// A human-readable name for diagnostics.
    fn source_name(&self) -> &str;
}

/// A fixed in-memory character source.
///
/// # Examples
///
/// ```
/// use mioc_lex::source::{BufferSource, CharSource};
///
/// let mut source = BufferSource::new("ab");
/// assert_eq!(source.read_one(), Some('a'));
/// assert_eq!(source.read_one(), Some('b'));
/// assert_eq!(source.read_one(), None);
/// assert!(source.at_eof());
/// ```
pub struct BufferSource {
    name: String,
    chars: Vec<char>,
    next: usize,
}

impl BufferSource {
    /// Create a buffer source over the given text.
    pub fn new(text: &str) -> Self {
        Self::named(text, "<buffer>")
    }

    /// Create a buffer source with an explicit diagnostic name.
    pub fn named(text: &str, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chars: text.chars().collect(),
            next: 0,
        }
    }
}

impl CharSource for BufferSource {
    fn read_one(&mut self) -> Option<char> {
        let c = self.chars.get(self.next).copied()?;
        self.next += 1;
        Some(c)
    }

    fn at_eof(&self) -> bool {
        self.next >= self.chars.len()
    }

    fn error_message(&self) -> &str {
        ""
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// A file-backed character source.
///
/// The file content is read eagerly on open; character delivery itself
/// therefore never fails, which keeps the scanner's read path synchronous
/// and non-blocking.
pub struct FileSource {
    name: String,
    chars: Vec<char>,
    next: usize,
}

impl FileSource {
    /// Open a file and load its content.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Ok(Self {
            name: path.display().to_string(),
            chars: content.chars().collect(),
            next: 0,
        })
    }
}

impl CharSource for FileSource {
    fn read_one(&mut self) -> Option<char> {
        let c = self.chars.get(self.next).copied()?;
        self.next += 1;
        Some(c)
    }

    fn at_eof(&self) -> bool {
        self.next >= self.chars.len()
    }

    fn error_message(&self) -> &str {
        ""
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}

/// An owned-or-borrowed source handle held by one scanner scope.
///
/// The scanner releases an `Owned` source when its scope is popped (or on
/// scanner teardown) simply by dropping the box; a `Borrowed` source is
/// returned to the caller untouched. Because the two cases are separate
/// variants of a move-only type, releasing a source twice or using it
/// after release cannot be expressed.
pub enum SourceHandle<'a> {
    /// The scanner owns the source and drops it on pop.
    Owned(Box<dyn CharSource + 'a>),
    /// The caller retains ownership; the scanner only borrows.
    Borrowed(&'a mut dyn CharSource),
}

impl<'a> SourceHandle<'a> {
    /// Wrap a source the scanner should own.
    pub fn owned(source: impl CharSource + 'a) -> Self {
        SourceHandle::Owned(Box::new(source))
    }

    /// Wrap a caller-owned source.
    pub fn borrowed(source: &'a mut dyn CharSource) -> Self {
        SourceHandle::Borrowed(source)
    }

    /// Access the underlying source.
    pub fn get(&self) -> &dyn CharSource {
        match self {
            SourceHandle::Owned(source) => source.as_ref(),
            SourceHandle::Borrowed(source) => *source,
        }
    }

    /// Mutable access to the underlying source.
    pub fn get_mut(&mut self) -> &mut dyn CharSource {
        match self {
            SourceHandle::Owned(source) => source.as_mut(),
            SourceHandle::Borrowed(source) => *source,
        }
    }
}
