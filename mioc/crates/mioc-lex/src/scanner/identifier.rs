//! Identifier and keyword scanning.

use crate::token::{keyword_kind, Token, TokenKind, Value};
use crate::Scanner;

/// Returns true for characters that may begin an identifier.
///
/// Identifiers are ASCII only: `$`, `_`, or a letter. Digits may appear
/// anywhere but the lead position.
pub(crate) fn is_ident_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_ascii_alphabetic()
}

/// Returns true for characters that may continue an identifier.
pub(crate) fn is_ident_continue(c: char) -> bool {
    c == '$' || c == '_' || c.is_ascii_alphanumeric()
}

impl Scanner<'_> {
    /// Scans an identifier or keyword.
    ///
    /// Reads the whole `[$_a-zA-Z0-9]` run, then looks the exact text up
    /// in the reserved-word table. A match reclassifies the token to the
    /// keyword kind; `true`/`false` become bool literals with their
    /// value filled in. No match leaves a generic identifier.
    pub(crate) fn scan_identifier(&mut self, token: &mut Token) -> bool {
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.bump();
                text.push(c);
            } else {
                break;
            }
        }

        match keyword_kind(&text) {
            Some(TokenKind::LitBool) => {
                let value = Value::Bool(text == "true");
                self.emit(token, TokenKind::LitBool, text, value)
            },
            Some(kind) => self.emit(token, kind, text, Value::None),
            None => self.emit(token, TokenKind::Ident, text, Value::None),
        }
    }
}
