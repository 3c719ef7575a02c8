//! Token type definitions.
//!
//! This module defines the token kinds produced by the scanner, the typed
//! literal values carried by literal tokens, and the reserved-word lookup
//! table.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// The kind of a token.
///
/// This is the closed set of classifications the scanner can produce.
/// Downstream phases (parser, compiler) dispatch on kind identity and
/// trust the scanner's token boundaries without re-validating them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Structural punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `->`
    Arrow,
    /// `<-`
    LeftArrow,
    /// `?`
    Question,
    /// `!`
    Bang,

    // Operators
    /// `=` (assignment)
    Assign,
    /// `==`
    Eq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `<`
    Lt,
    /// `<<`
    Shl,
    /// `<=`
    Le,
    /// `<>`
    Ne,
    /// `>`
    Gt,
    /// `>>` (arithmetic right shift)
    Shr,
    /// `|>` (logical right shift)
    Lshr,
    /// `>=`
    Ge,
    /// `|`
    Pipe,
    /// `&`
    Amp,
    /// `^`
    Caret,
    /// `~`
    Tilde,

    // Word operators
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,

    // Literals
    /// `true` / `false`
    LitBool,
    /// Integer literal with `b` suffix
    LitI8,
    /// Integer literal with `w` suffix
    LitI16,
    /// Integer literal with `d` suffix
    LitI32,
    /// Integer literal with `q` suffix
    LitI64,
    /// Unsuffixed decimal integer literal (64-bit)
    LitInt,
    /// Float literal with `F` suffix, or unsuffixed with a `.`
    LitF32,
    /// Float literal with `D` suffix
    LitF64,
    /// `'...'` string literal
    LitString,

    /// Identifier: `[$_a-zA-Z][$_a-zA-Z0-9]*`
    Ident,

    // Keywords
    /// `package`
    KwPackage,
    /// `with`
    KwWith,
    /// `as`
    KwAs,
    /// `is`
    KwIs,
    /// `bool`
    KwBool,
    /// `i8`
    KwI8,
    /// `i16`
    KwI16,
    /// `i32`
    KwI32,
    /// `int`
    KwInt,
    /// `i64`
    KwI64,
    /// `f32`
    KwF32,
    /// `f64`
    KwF64,
    /// `string`
    KwString,
    /// `void`
    KwVoid,
    /// `union`
    KwUnion,
    /// `map`
    KwMap,
    /// `slice`
    KwSlice,
    /// `array`
    KwArray,
    /// `struct`
    KwStruct,
    /// `error`
    KwError,
    /// `weak`
    KwWeak,
    /// `strong`
    KwStrong,
    /// `if`
    KwIf,
    /// `else`
    KwElse,
    /// `while`
    KwWhile,
    /// `for`
    KwFor,
    /// `match`
    KwMatch,
    /// `in`
    KwIn,
    /// `return`
    KwReturn,
    /// `break`
    KwBreak,
    /// `continue`
    KwContinue,
    /// `val`
    KwVal,
    /// `var`
    KwVar,
    /// `function`
    KwFunction,
    /// `lambda`
    KwLambda,
    /// `native`
    KwNative,
    /// `export`
    KwExport,
    /// `def`
    KwDef,

    /// `#...` line comment (emitted only when configured)
    LineComment,
    /// End of input for the current source
    Eof,
    /// Scan error; the token text holds the diagnostic message
    Error,
}

impl TokenKind {
    /// The literal source text of punctuation and operator kinds, or
    /// `None` for kinds whose text varies.
    pub fn fixed_text(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Colon => ":",
            TokenKind::ColonColon => "::",
            TokenKind::Arrow => "->",
            TokenKind::LeftArrow => "<-",
            TokenKind::Question => "?",
            TokenKind::Bang => "!",
            TokenKind::Assign => "=",
            TokenKind::Eq => "==",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Lt => "<",
            TokenKind::Shl => "<<",
            TokenKind::Le => "<=",
            TokenKind::Ne => "<>",
            TokenKind::Gt => ">",
            TokenKind::Shr => ">>",
            TokenKind::Lshr => "|>",
            TokenKind::Ge => ">=",
            TokenKind::Pipe => "|",
            TokenKind::Amp => "&",
            TokenKind::Caret => "^",
            TokenKind::Tilde => "~",
            _ => return None,
        })
    }

    /// Returns true for the literal kinds that carry a typed [`Value`].
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::LitBool
                | TokenKind::LitI8
                | TokenKind::LitI16
                | TokenKind::LitI32
                | TokenKind::LitI64
                | TokenKind::LitInt
                | TokenKind::LitF32
                | TokenKind::LitF64
                | TokenKind::LitString
        )
    }
}

/// Typed value of a literal token.
///
/// The active variant is implied by the token's [`TokenKind`]: a `LitI8`
/// token always carries `Value::I8`, a `LitInt` token always carries
/// `Value::Int`, and non-literal tokens carry `Value::None`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Value {
    /// No value; all non-literal kinds, and string literals (their decoded
    /// payload lives in the token text).
    #[default]
    None,
    /// Boolean literal value.
    Bool(bool),
    /// 8-bit integer literal value.
    I8(i8),
    /// 16-bit integer literal value.
    I16(i16),
    /// 32-bit integer literal value.
    I32(i32),
    /// 64-bit integer literal value (`q` suffix).
    I64(i64),
    /// Unsuffixed 64-bit decimal integer literal value.
    Int(i64),
    /// 32-bit float literal value.
    F32(f32),
    /// 64-bit float literal value.
    F64(f64),
}

/// A single scanned token.
///
/// Produced once per call to [`Scanner::produce_next`]; every call fully
/// overwrites all fields, so a caller may reuse one `Token` across calls
/// without staleness.
///
/// [`Scanner::produce_next`]: crate::Scanner::produce_next
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,
    /// Character offset from the start of the current source.
    pub position: usize,
    /// Number of source characters spanned (0 for Eof and Error).
    pub length: usize,
    /// Raw token text; decoded payload for string literals; diagnostic
    /// message for Error tokens.
    pub text: String,
    /// Typed value for literal kinds, `Value::None` otherwise.
    pub value: Value,
}

impl Token {
    /// Create an end-of-input token at the given position.
    pub fn eof(position: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            position,
            length: 0,
            text: String::new(),
            value: Value::None,
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::eof(0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}+{}", self.kind, self.position, self.length)
    }
}

/// The reserved words of mio, including the word operators.
///
/// `true` and `false` map to the bool-literal kind; the scanner fills in
/// the corresponding `Value::Bool` when it reclassifies the identifier.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("package", TokenKind::KwPackage),
    ("with", TokenKind::KwWith),
    ("as", TokenKind::KwAs),
    ("is", TokenKind::KwIs),
    ("bool", TokenKind::KwBool),
    ("i8", TokenKind::KwI8),
    ("i16", TokenKind::KwI16),
    ("i32", TokenKind::KwI32),
    ("int", TokenKind::KwInt),
    ("i64", TokenKind::KwI64),
    ("f32", TokenKind::KwF32),
    ("f64", TokenKind::KwF64),
    ("string", TokenKind::KwString),
    ("void", TokenKind::KwVoid),
    ("union", TokenKind::KwUnion),
    ("map", TokenKind::KwMap),
    ("slice", TokenKind::KwSlice),
    ("array", TokenKind::KwArray),
    ("struct", TokenKind::KwStruct),
    ("error", TokenKind::KwError),
    ("weak", TokenKind::KwWeak),
    ("strong", TokenKind::KwStrong),
    ("true", TokenKind::LitBool),
    ("false", TokenKind::LitBool),
    ("if", TokenKind::KwIf),
    ("else", TokenKind::KwElse),
    ("while", TokenKind::KwWhile),
    ("for", TokenKind::KwFor),
    ("match", TokenKind::KwMatch),
    ("in", TokenKind::KwIn),
    ("return", TokenKind::KwReturn),
    ("break", TokenKind::KwBreak),
    ("continue", TokenKind::KwContinue),
    ("val", TokenKind::KwVal),
    ("var", TokenKind::KwVar),
    ("function", TokenKind::KwFunction),
    ("lambda", TokenKind::KwLambda),
    ("native", TokenKind::KwNative),
    ("export", TokenKind::KwExport),
    ("def", TokenKind::KwDef),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
];

static KEYWORD_TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

/// Look up a reserved word, returning its token kind.
///
/// Exact-match and case-sensitive: anything not byte-identical to a table
/// entry is an ordinary identifier. Lookup is a single hash probe,
/// independent of table size.
///
/// # Examples
///
/// ```
/// use mioc_lex::token::{keyword_kind, TokenKind};
///
/// assert_eq!(keyword_kind("while"), Some(TokenKind::KwWhile));
/// assert_eq!(keyword_kind("While"), None);
/// assert_eq!(keyword_kind("whiles"), None);
/// ```
pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    let table = KEYWORD_TABLE.get_or_init(|| KEYWORDS.iter().copied().collect());
    table.get(ident).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_kind("package"), Some(TokenKind::KwPackage));
        assert_eq!(keyword_kind("function"), Some(TokenKind::KwFunction));
        assert_eq!(keyword_kind("def"), Some(TokenKind::KwDef));
        assert_eq!(keyword_kind("i64"), Some(TokenKind::KwI64));
    }

    #[test]
    fn test_word_operators() {
        assert_eq!(keyword_kind("and"), Some(TokenKind::And));
        assert_eq!(keyword_kind("or"), Some(TokenKind::Or));
        assert_eq!(keyword_kind("not"), Some(TokenKind::Not));
    }

    #[test]
    fn test_bool_literals_are_reserved() {
        assert_eq!(keyword_kind("true"), Some(TokenKind::LitBool));
        assert_eq!(keyword_kind("false"), Some(TokenKind::LitBool));
    }

    #[test]
    fn test_no_prefix_or_fuzzy_match() {
        assert_eq!(keyword_kind("pack"), None);
        assert_eq!(keyword_kind("packages"), None);
        assert_eq!(keyword_kind("AND"), None);
        assert_eq!(keyword_kind(""), None);
    }

    #[test]
    fn test_every_table_entry_round_trips() {
        for (word, kind) in KEYWORDS {
            assert_eq!(keyword_kind(word), Some(*kind), "keyword {word}");
        }
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::LitI8.is_literal());
        assert!(TokenKind::LitString.is_literal());
        assert!(!TokenKind::Ident.is_literal());
        assert!(!TokenKind::KwVal.is_literal());
        assert!(!TokenKind::Error.is_literal());
    }

    #[test]
    fn test_token_overwrite_defaults() {
        let token = Token::default();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.length, 0);
        assert_eq!(token.value, Value::None);
    }
}
