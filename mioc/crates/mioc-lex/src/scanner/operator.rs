//! Operator and punctuation scanning.
//!
//! Maximal munch with a single character of lookahead: each method
//! consumes its lead character, then greedily tries the two-character
//! forms before falling back to the one-character token.

use crate::token::{Token, TokenKind};
use crate::Scanner;

impl Scanner<'_> {
    /// Scans `-`, `->`, or the start of a negative numeric literal.
    pub(crate) fn scan_minus(&mut self, token: &mut Token) -> bool {
        self.bump();
        match self.peek() {
            Some('>') => {
                self.bump();
                self.finish_punct(token, TokenKind::Arrow)
            },
            Some(c) if c.is_ascii_digit() => self.scan_number(token, true),
            _ => self.finish_punct(token, TokenKind::Minus),
        }
    }

    /// Scans `=` or `==`.
    pub(crate) fn scan_equals(&mut self, token: &mut Token) -> bool {
        self.bump();
        if self.eat('=') {
            self.finish_punct(token, TokenKind::Eq)
        } else {
            self.finish_punct(token, TokenKind::Assign)
        }
    }

    /// Scans `<`, `<<`, `<=`, `<>`, or `<-`.
    pub(crate) fn scan_less(&mut self, token: &mut Token) -> bool {
        self.bump();
        if self.eat('<') {
            self.finish_punct(token, TokenKind::Shl)
        } else if self.eat('=') {
            self.finish_punct(token, TokenKind::Le)
        } else if self.eat('>') {
            self.finish_punct(token, TokenKind::Ne)
        } else if self.eat('-') {
            self.finish_punct(token, TokenKind::LeftArrow)
        } else {
            self.finish_punct(token, TokenKind::Lt)
        }
    }

    /// Scans `>`, `>>`, or `>=`.
    pub(crate) fn scan_greater(&mut self, token: &mut Token) -> bool {
        self.bump();
        if self.eat('>') {
            self.finish_punct(token, TokenKind::Shr)
        } else if self.eat('=') {
            self.finish_punct(token, TokenKind::Ge)
        } else {
            self.finish_punct(token, TokenKind::Gt)
        }
    }

    /// Scans `|` or `|>` (logical right shift).
    pub(crate) fn scan_pipe(&mut self, token: &mut Token) -> bool {
        self.bump();
        if self.eat('>') {
            self.finish_punct(token, TokenKind::Lshr)
        } else {
            self.finish_punct(token, TokenKind::Pipe)
        }
    }

    /// Scans `.` or `..`.
    pub(crate) fn scan_dot(&mut self, token: &mut Token) -> bool {
        self.bump();
        if self.eat('.') {
            self.finish_punct(token, TokenKind::DotDot)
        } else {
            self.finish_punct(token, TokenKind::Dot)
        }
    }

    /// Scans `:` or `::`.
    pub(crate) fn scan_colon(&mut self, token: &mut Token) -> bool {
        self.bump();
        if self.eat(':') {
            self.finish_punct(token, TokenKind::ColonColon)
        } else {
            self.finish_punct(token, TokenKind::Colon)
        }
    }
}
