//! Line comment scanning and skipping.
//!
//! Comments begin with `#` and run to end-of-line or end-of-input. When
//! the scanner is configured to emit them, the token text is the literal
//! comment body including the `#` and the terminating newline when
//! present; otherwise the whole run is consumed silently.

use crate::token::{Token, TokenKind, Value};
use crate::Scanner;

impl Scanner<'_> {
    /// Scans a `#...` run into a line-comment token.
    pub(crate) fn scan_line_comment(&mut self, token: &mut Token) -> bool {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            self.bump();
            text.push(c);
            if c == '\n' {
                break;
            }
        }
        self.emit(token, TokenKind::LineComment, text, Value::None)
    }

    /// Consumes a `#...` run without producing a token.
    pub(crate) fn skip_line_comment(&mut self) {
        while let Some(c) = self.bump() {
            if c == '\n' {
                break;
            }
        }
    }
}
