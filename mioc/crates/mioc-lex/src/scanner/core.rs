//! Core scanner implementation.
//!
//! This module contains the main Scanner struct, its scope stack, and the
//! per-token dispatch.

use mioc_util::{DiagnosticBuilder, Handler, Span};

use crate::scanner::identifier::is_ident_start;
use crate::source::{CharSource, SourceHandle};
use crate::token::{Token, TokenKind, Value};

/// One active character source with its own scanning state.
///
/// A scope is created when a source is pushed; construction immediately
/// primes the lookahead by reading one character. Position, line, and
/// column are all local to the scope, so token positions restart at 0 for
/// every pushed source.
struct Scope<'a> {
    /// The source this scope reads from.
    handle: SourceHandle<'a>,

    /// The next unconsumed character, eagerly primed.
    lookahead: Option<char>,

    /// Line of the last consumed character (0 until the first read).
    line: u32,

    /// Column of the last consumed character (0 until the first read).
    column: u32,

    /// Characters consumed so far; the offset of `lookahead`.
    position: usize,

    /// Set once a source read failure has been surfaced.
    failed: bool,
}

impl<'a> Scope<'a> {
    fn new(mut handle: SourceHandle<'a>) -> Self {
        let lookahead = handle.get_mut().read_one();
        Self {
            handle,
            lookahead,
            line: 0,
            column: 0,
            position: 0,
            failed: false,
        }
    }

    /// Consume the lookahead character and prime the next one.
    fn bump(&mut self) -> Option<char> {
        let c = self.lookahead?;
        self.position += 1;
        if self.line == 0 {
            self.line = 1;
        }
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.lookahead = self.handle.get_mut().read_one();
        Some(c)
    }
}

/// The scanner (lexer) for mio source code.
///
/// The scanner owns a stack of scopes, one per pushed character source,
/// and always reads from the top of the stack. Each call to
/// [`produce_next`](Scanner::produce_next) classifies one token,
/// converting numeric and string literal text into typed values on the
/// fly. Lexical failures are reported twice: as an `Error` token and as a
/// diagnostic on the shared [`Handler`].
///
/// # Example
///
/// ```
/// use mioc_lex::source::BufferSource;
/// use mioc_lex::token::{Token, TokenKind};
/// use mioc_lex::Scanner;
/// use mioc_util::Handler;
///
/// let handler = Handler::new();
/// let mut scanner = Scanner::new(&handler);
/// scanner.push_owned(BufferSource::new("val x = 42"));
///
/// let mut token = Token::default();
/// assert!(scanner.produce_next(&mut token));
/// assert_eq!(token.kind, TokenKind::KwVal);
/// ```
pub struct Scanner<'a> {
    /// Stack of active scopes; the last entry is the current one.
    scopes: Vec<Scope<'a>>,

    /// Whether `#...` runs are emitted as tokens or silently skipped.
    emit_line_comments: bool,

    /// Diagnostic sink for scan errors.
    handler: &'a Handler,

    /// Position of the current token within the current scope.
    token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner with no sources and comment emission off.
    pub fn new(handler: &'a Handler) -> Self {
        Self {
            scopes: Vec::new(),
            emit_line_comments: false,
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Configure whether `#...` runs are returned as line-comment tokens
    /// instead of being silently skipped.
    pub fn set_emit_line_comments(&mut self, emit: bool) {
        self.emit_line_comments = emit;
    }

    /// Installs a new top-of-stack scope over `handle`.
    ///
    /// Priming the lookahead is always attempted; end-of-input is a valid
    /// initial state, so there is no failure path. Tokens already
    /// returned are unaffected.
    pub fn push(&mut self, handle: SourceHandle<'a>) {
        self.scopes.push(Scope::new(handle));
    }

    /// Push a source the scanner takes ownership of.
    pub fn push_owned(&mut self, source: impl CharSource + 'a) {
        self.push(SourceHandle::owned(source));
    }

    /// Push a source the caller retains ownership of.
    pub fn push_borrowed(&mut self, source: &'a mut dyn CharSource) {
        self.push(SourceHandle::borrowed(source));
    }

    /// Removes the current scope, releasing the source if it was owned.
    ///
    /// Silent no-op when the stack is empty. Popping the last scope is
    /// legal and leaves an internally-inert scanner.
    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    /// Number of active scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Name of the current source, for diagnostics.
    pub fn source_name(&self) -> Option<&str> {
        self.scopes.last().map(|s| s.handle.get().source_name())
    }

    /// Character offset of the next unconsumed character in the current
    /// scope (0 with no scope).
    ///
    /// Named `offset` rather than `position`: the scanner is an iterator,
    /// and through a `&mut Scanner` receiver `Iterator::position` would
    /// shadow an inherent method of that name.
    pub fn offset(&self) -> usize {
        self.scopes.last().map_or(0, |s| s.position)
    }

    /// Current line in the current scope (0 before the first read).
    pub fn line(&self) -> u32 {
        self.scopes.last().map_or(0, |s| s.line)
    }

    /// Current column in the current scope (0 before the first read).
    pub fn column(&self) -> u32 {
        self.scopes.last().map_or(0, |s| s.column)
    }

    /// Produces the next token from the current scope.
    ///
    /// Returns true when a real token was produced. Returns false at
    /// end-of-input, with `token` set to an `Eof` token of zero length at
    /// the current position, and for fatal scan errors, with `token.kind`
    /// set to `Error` and the diagnostic message in `token.text` —
    /// callers must check `kind` first, not only the boolean. Every call
    /// fully overwrites all of `token`'s fields.
    pub fn produce_next(&mut self, token: &mut Token) -> bool {
        loop {
            if self.scopes.is_empty() {
                *token = Token::eof(0);
                return false;
            }

            while let Some(c) = self.peek() {
                if c.is_whitespace() {
                    self.bump();
                } else {
                    break;
                }
            }

            self.mark_token_start();

            match self.peek() {
                Some('#') => {
                    if self.emit_line_comments {
                        return self.scan_line_comment(token);
                    }
                    self.skip_line_comment();
                },
                Some(c) => return self.scan_token(token, c),
                None => {
                    let mut read_failure = None;
                    let mut position = 0;
                    if let Some(scope) = self.scopes.last_mut() {
                        position = scope.position;
                        let message = scope.handle.get().error_message();
                        if !scope.failed && !message.is_empty() {
                            scope.failed = true;
                            read_failure = Some(message.to_string());
                        }
                    }
                    if let Some(message) = read_failure {
                        return self.error_token(token, message);
                    }
                    *token = Token::eof(position);
                    return false;
                },
            }
        }
    }

    /// Returns the next token, allocating a fresh one.
    pub fn next_token(&mut self) -> Token {
        let mut token = Token::default();
        self.produce_next(&mut token);
        token
    }

    /// Dispatch on the first character of a token.
    fn scan_token(&mut self, token: &mut Token, first: char) -> bool {
        match first {
            '(' | ')' | '[' | ']' | '{' | '}' | ',' | '?' | '!' | '+' | '*' | '%' | '/' | '~'
            | '^' | '&' => {
                let kind = match first {
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    '[' => TokenKind::LBracket,
                    ']' => TokenKind::RBracket,
                    '{' => TokenKind::LBrace,
                    '}' => TokenKind::RBrace,
                    ',' => TokenKind::Comma,
                    '?' => TokenKind::Question,
                    '!' => TokenKind::Bang,
                    '+' => TokenKind::Plus,
                    '*' => TokenKind::Star,
                    '%' => TokenKind::Percent,
                    '/' => TokenKind::Slash,
                    '~' => TokenKind::Tilde,
                    '^' => TokenKind::Caret,
                    _ => TokenKind::Amp,
                };
                self.bump();
                self.finish_punct(token, kind)
            },
            '=' => self.scan_equals(token),
            '<' => self.scan_less(token),
            '>' => self.scan_greater(token),
            '|' => self.scan_pipe(token),
            '.' => self.scan_dot(token),
            ':' => self.scan_colon(token),
            '-' => self.scan_minus(token),
            '\'' => self.scan_string(token),
            c if c.is_ascii_digit() => self.scan_number(token, false),
            c if is_ident_start(c) => self.scan_identifier(token),
            c => {
                self.bump();
                self.error_token(token, format!("unexpected character '{}'", c))
            },
        }
    }

    /// Record the start position of the token about to be scanned.
    fn mark_token_start(&mut self) {
        if let Some(scope) = self.scopes.last() {
            self.token_start = scope.position;
            if scope.line == 0 {
                self.token_start_line = 1;
                self.token_start_column = 1;
            } else {
                self.token_start_line = scope.line;
                self.token_start_column = scope.column + 1;
            }
        }
    }

    /// The next unconsumed character of the current scope.
    pub(crate) fn peek(&self) -> Option<char> {
        self.scopes.last().and_then(|s| s.lookahead)
    }

    /// Consume one character from the current scope.
    pub(crate) fn bump(&mut self) -> Option<char> {
        self.scopes.last_mut().and_then(Scope::bump)
    }

    /// Consume the expected character if it is next.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Fill in a completed token, spanning from the recorded start to the
    /// current position.
    pub(crate) fn emit(
        &mut self,
        token: &mut Token,
        kind: TokenKind,
        text: String,
        value: Value,
    ) -> bool {
        token.kind = kind;
        token.position = self.token_start;
        token.length = self.offset() - self.token_start;
        token.text = text;
        token.value = value;
        true
    }

    /// Finish a punctuation or operator token whose text is fixed.
    pub(crate) fn finish_punct(&mut self, token: &mut Token, kind: TokenKind) -> bool {
        let text = kind.fixed_text().unwrap_or_default().to_string();
        self.emit(token, kind, text, Value::None)
    }

    /// Report a scan error: emits a diagnostic and fills in an `Error`
    /// token at the current token start. Always returns false.
    pub(crate) fn error_token(&mut self, token: &mut Token, message: String) -> bool {
        let span = Span::new(
            self.token_start,
            self.offset(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message.clone()).span(span).emit(self.handler);

        token.kind = TokenKind::Error;
        token.position = self.token_start;
        token.length = 0;
        token.text = message;
        token.value = Value::None;
        false
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let mut token = Token::default();
        let produced = self.produce_next(&mut token);
        if produced || token.kind == TokenKind::Error {
            Some(token)
        } else {
            None
        }
    }
}
