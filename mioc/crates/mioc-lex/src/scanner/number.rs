//! Numeric literal scanning.
//!
//! Decimal literals accumulate digits and at most one `.`, optionally
//! followed by a one-character width suffix (`b` `w` `d` `q` for i8/i16/
//! i32/i64, `F` `D` for f32/f64), and must end at a termination
//! character: end-of-input, whitespace, or one of `{` `}` `(` `)`.
//! Hexadecimal literals (`0x` prefix) pick the narrowest width whose
//! nibble capacity covers the digit count.

use crate::convert::{self, IntWidth};
use crate::token::{Token, TokenKind, Value};
use crate::Scanner;

impl Scanner<'_> {
    /// Scans a numeric literal.
    ///
    /// Entered with the lookahead on a decimal digit; when `negative` is
    /// true the caller has already consumed a leading `-`.
    pub(crate) fn scan_number(&mut self, token: &mut Token, negative: bool) -> bool {
        let mut text = String::new();
        if negative {
            text.push('-');
        }

        // Hex form: `0x` prefix, only recognized without a sign.
        if !negative && self.peek() == Some('0') {
            self.bump();
            text.push('0');
            if self.peek() == Some('x') {
                self.bump();
                text.push('x');
                return self.scan_hex(token, text);
            }
        }

        let mut saw_dot = false;
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_digit() => {
                    self.bump();
                    text.push(c);
                },
                Some('.') => {
                    if saw_dot {
                        return self
                            .error_token(token, "duplicated dot in number literal".to_string());
                    }
                    saw_dot = true;
                    self.bump();
                    text.push('.');
                },
                _ => break,
            }
        }

        let suffix = match self.peek() {
            Some(c @ ('b' | 'w' | 'd' | 'q' | 'F' | 'D')) => {
                self.bump();
                text.push(c);
                Some(c)
            },
            _ => None,
        };

        if let Some(suffix) = suffix {
            let integral = matches!(suffix, 'b' | 'w' | 'd' | 'q');
            if saw_dot && integral {
                return self.error_token(token, "floating number has integral suffix".to_string());
            }
            if !self.at_termination() {
                return self.error_token(
                    token,
                    "incorrect integral/floating number literal".to_string(),
                );
            }

            let digits = &text[..text.len() - 1];
            return match suffix {
                'b' => self.emit_int(token, text.clone(), digits, IntWidth::I8),
                'w' => self.emit_int(token, text.clone(), digits, IntWidth::I16),
                'd' => self.emit_int(token, text.clone(), digits, IntWidth::I32),
                'q' => self.emit_int(token, text.clone(), digits, IntWidth::I64),
                'F' => {
                    let value = Value::F32(convert::parse_f32(digits));
                    self.emit(token, TokenKind::LitF32, text, value)
                },
                _ => {
                    let value = Value::F64(convert::parse_f64(digits));
                    self.emit(token, TokenKind::LitF64, text, value)
                },
            };
        }

        if !self.at_termination() {
            return self
                .error_token(token, "incorrect integral/floating number literal".to_string());
        }

        if saw_dot {
            // Unsuffixed floats are 32-bit.
            let value = Value::F32(convert::parse_f32(&text));
            return self.emit(token, TokenKind::LitF32, text, value);
        }

        match convert::parse_decimal(&text, IntWidth::I64) {
            Ok(v) => self.emit(token, TokenKind::LitInt, text, Value::Int(v)),
            Err(err) => {
                let message = format!("incorrect number literal '{}': {}", text, err);
                self.error_token(token, message)
            },
        }
    }

    /// Scans the digits of a hexadecimal literal; `text` already holds
    /// the consumed `0x` prefix.
    fn scan_hex(&mut self, token: &mut Token, mut text: String) -> bool {
        let mut digits = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_hexdigit() {
                self.bump();
                digits.push(c);
                text.push(c);
            } else {
                break;
            }
        }

        if digits.is_empty() || !self.at_termination() {
            return self
                .error_token(token, "incorrect integral/floating number literal".to_string());
        }

        // Width selection is by digit count alone, not magnitude.
        let Some(width) = IntWidth::for_nibbles(digits.len()) else {
            let message = format!(
                "incorrect number literal '{}': {}",
                text,
                convert::ConvertError::OutOfRange(IntWidth::I64)
            );
            return self.error_token(token, message);
        };

        match convert::parse_hex(&digits, width) {
            Ok(v) => {
                let (kind, value) = width_value(width, v);
                self.emit(token, kind, text, value)
            },
            Err(err) => {
                let message = format!("incorrect number literal '{}': {}", text, err);
                self.error_token(token, message)
            },
        }
    }

    /// Range-check and emit a suffixed decimal integer literal.
    fn emit_int(
        &mut self,
        token: &mut Token,
        text: String,
        digits: &str,
        width: IntWidth,
    ) -> bool {
        match convert::parse_decimal(digits, width) {
            Ok(v) => {
                let (kind, value) = width_value(width, v);
                self.emit(token, kind, text, value)
            },
            Err(err) => {
                let message = format!("incorrect number literal '{}': {}", text, err);
                self.error_token(token, message)
            },
        }
    }

    /// Returns true when the lookahead ends a numeric literal.
    fn at_termination(&self) -> bool {
        match self.peek() {
            None => true,
            Some(c) => c.is_whitespace() || matches!(c, '{' | '}' | '(' | ')'),
        }
    }
}

/// Maps a converted value onto its literal kind and tagged value.
fn width_value(width: IntWidth, v: i64) -> (TokenKind, Value) {
    match width {
        IntWidth::I8 => (TokenKind::LitI8, Value::I8(v as i8)),
        IntWidth::I16 => (TokenKind::LitI16, Value::I16(v as i16)),
        IntWidth::I32 => (TokenKind::LitI32, Value::I32(v as i32)),
        IntWidth::I64 => (TokenKind::LitI64, Value::I64(v)),
    }
}

#[cfg(test)]
mod tests {
    use crate::source::BufferSource;
    use crate::token::{Token, TokenKind, Value};
    use crate::Scanner;
    use mioc_util::Handler;

    fn first(source: &str) -> Token {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        scanner.push_owned(BufferSource::new(source));
        scanner.next_token()
    }

    #[test]
    fn test_unsuffixed_integer() {
        let token = first("123");
        assert_eq!(token.kind, TokenKind::LitInt);
        assert_eq!(token.value, Value::Int(123));
        assert_eq!(token.length, 3);
        assert_eq!(token.text, "123");
    }

    #[test]
    fn test_negative_integer() {
        let token = first("-5");
        assert_eq!(token.kind, TokenKind::LitInt);
        assert_eq!(token.value, Value::Int(-5));
        assert_eq!(token.length, 2);
    }

    #[test]
    fn test_suffixed_integers() {
        let token = first("64b");
        assert_eq!(token.kind, TokenKind::LitI8);
        assert_eq!(token.value, Value::I8(64));
        assert_eq!(token.length, 3);

        let token = first("1000w");
        assert_eq!(token.kind, TokenKind::LitI16);
        assert_eq!(token.value, Value::I16(1000));

        let token = first("-70000d");
        assert_eq!(token.kind, TokenKind::LitI32);
        assert_eq!(token.value, Value::I32(-70000));

        let token = first("5000000000q");
        assert_eq!(token.kind, TokenKind::LitI64);
        assert_eq!(token.value, Value::I64(5_000_000_000));
    }

    #[test]
    fn test_float_literals() {
        let token = first("1.5");
        assert_eq!(token.kind, TokenKind::LitF32);
        assert_eq!(token.value, Value::F32(1.5));

        let token = first("1.5F");
        assert_eq!(token.kind, TokenKind::LitF32);
        assert_eq!(token.value, Value::F32(1.5));

        let token = first("1.5D");
        assert_eq!(token.kind, TokenKind::LitF64);
        assert_eq!(token.value, Value::F64(1.5));

        let token = first("-0.25");
        assert_eq!(token.kind, TokenKind::LitF32);
        assert_eq!(token.value, Value::F32(-0.25));
    }

    #[test]
    fn test_hex_width_by_digit_count() {
        let token = first("0x1");
        assert_eq!(token.kind, TokenKind::LitI8);
        assert_eq!(token.value, Value::I8(1));
        assert_eq!(token.length, 3);

        let token = first("0x001");
        assert_eq!(token.kind, TokenKind::LitI16);
        assert_eq!(token.value, Value::I16(1));
        assert_eq!(token.length, 5);

        let token = first("0x00001");
        assert_eq!(token.kind, TokenKind::LitI32);
        assert_eq!(token.value, Value::I32(1));
        assert_eq!(token.length, 7);
    }

    #[test]
    fn test_hex_bit_pattern_is_signed() {
        let token = first("0x80");
        assert_eq!(token.kind, TokenKind::LitI8);
        assert_eq!(token.value, Value::I8(-128));

        let token = first("0xffff");
        assert_eq!(token.kind, TokenKind::LitI16);
        assert_eq!(token.value, Value::I16(-1));
    }

    #[test]
    fn test_duplicated_dot_is_error() {
        let token = first("1.2.3");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.text, "duplicated dot in number literal");
        assert_eq!(token.length, 0);
    }

    #[test]
    fn test_float_with_integral_suffix_is_error() {
        let token = first("1.5b");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.text, "floating number has integral suffix");
    }

    #[test]
    fn test_suffix_must_be_terminated() {
        let token = first("64bx");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.text, "incorrect integral/floating number literal");
    }

    #[test]
    fn test_run_must_be_terminated() {
        let token = first("12z");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(token.text, "incorrect integral/floating number literal");
    }

    #[test]
    fn test_out_of_range_suffix_is_error() {
        let token = first("128b");
        assert_eq!(token.kind, TokenKind::Error);
        assert!(token.text.starts_with("incorrect number literal '128b'"));

        let token = first("-129b");
        assert_eq!(token.kind, TokenKind::Error);
    }

    #[test]
    fn test_termination_characters() {
        // Parens and braces terminate a literal; the literal itself is valid.
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        scanner.push_owned(BufferSource::new("(42)"));
        let tokens: Vec<Token> = scanner.collect();
        assert_eq!(tokens[0].kind, TokenKind::LParen);
        assert_eq!(tokens[1].kind, TokenKind::LitInt);
        assert_eq!(tokens[1].value, Value::Int(42));
        assert_eq!(tokens[2].kind, TokenKind::RParen);
    }

    #[test]
    fn test_hex_with_no_digits_is_error() {
        let token = first("0x");
        assert_eq!(token.kind, TokenKind::Error);
    }

    #[test]
    fn test_hex_too_many_digits_is_error() {
        let token = first("0x00000000000000001");
        assert_eq!(token.kind, TokenKind::Error);
    }

    #[test]
    fn test_int64_range() {
        let token = first("9223372036854775807");
        assert_eq!(token.value, Value::Int(i64::MAX));

        let token = first("9223372036854775808");
        assert_eq!(token.kind, TokenKind::Error);
    }
}
