//! String literal scanning.
//!
//! Strings are delimited by `'`. The token's text is the decoded payload
//! with escapes resolved; its length is the full source span including
//! both delimiters and the raw escape sequences.

use crate::token::{Token, TokenKind, Value};
use crate::Scanner;

impl Scanner<'_> {
    /// Scans a `'...'` string literal.
    pub(crate) fn scan_string(&mut self, token: &mut Token) -> bool {
        self.bump();

        let mut content = String::new();
        loop {
            match self.peek() {
                None => {
                    return self.error_token(token, "unterminated string literal".to_string());
                },
                Some('\'') => {
                    self.bump();
                    break;
                },
                Some('\\') => {
                    self.bump();
                    match self.scan_escape() {
                        Ok(c) => content.push(c),
                        Err(message) => return self.error_token(token, message),
                    }
                },
                Some(c) => {
                    self.bump();
                    content.push(c);
                },
            }
        }

        self.emit(token, TokenKind::LitString, content, Value::None)
    }

    /// Decodes one escape sequence; the leading `\` is already consumed.
    ///
    /// Recognized forms are `\r`, `\n`, `\t`, and `\xHH` with exactly two
    /// hex digits. Anything else is a lexical error.
    ///
    /// The `\xHH` byte is widened to the Unicode scalar U+00HH, so values
    /// of 0x80 and above occupy two UTF-8 bytes in the token text.
    fn scan_escape(&mut self) -> Result<char, String> {
        let Some(c) = self.bump() else {
            return Err("unterminated string literal".to_string());
        };
        match c {
            'r' => Ok('\r'),
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'x' => {
                let mut byte: u8 = 0;
                for _ in 0..2 {
                    let digit = self.peek().and_then(|h| h.to_digit(16));
                    match digit {
                        Some(d) => {
                            self.bump();
                            byte = byte * 16 + d as u8;
                        },
                        None => {
                            return Err(
                                "incorrect hex escape in string literal".to_string()
                            );
                        },
                    }
                }
                Ok(byte as char)
            },
            other => Err(format!(
                "unrecognized escape character '{}' in string literal",
                other
            )),
        }
    }
}
