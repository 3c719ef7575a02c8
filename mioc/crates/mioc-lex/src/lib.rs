//! mioc-lex - Lexical Analyzer for the mio Programming Language
//!
//! This crate provides a complete scanner (tokenizer) for the mio
//! programming language. It transforms source code into a stream of
//! classified tokens that can be consumed by the parser.
//!
//! # Overview
//!
//! The scanner reads characters one at a time from a [`CharSource`] and
//! groups them into tokens with a single character of lookahead. Numeric
//! and string literals are converted into typed values during scanning, so
//! downstream phases never re-parse literal text.
//!
//! Sources are stacked: pushing a new source (for example when one file
//! includes another) suspends the current one, and popping resumes it
//! exactly where it left off. Positions, lines, and columns are always
//! relative to the source they were produced from.
//!
//! # Example Usage
//!
//! ```
//! use mioc_lex::source::BufferSource;
//! use mioc_lex::{Scanner, Token, TokenKind};
//! use mioc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut scanner = Scanner::new(&handler);
//! scanner.push_owned(BufferSource::new("val answer = 42"));
//!
//! // Iterate through tokens
//! for token in &mut scanner {
//!     println!("{}", token);
//! }
//!
//! // Or drive the scanner one token at a time
//! let mut scanner = Scanner::new(&handler);
//! scanner.push_owned(BufferSource::new("val answer = 42"));
//! let mut token = Token::default();
//! assert!(scanner.produce_next(&mut token));
//! assert_eq!(token.kind, TokenKind::KwVal);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the reserved-word table
//! - [`scanner`] - Main scanner implementation
//! - [`source`] - Character source trait and providers
//! - [`convert`] - Width-checked numeric literal conversion
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words with special meaning, including the type names
//! (`bool`, `i8` .. `i64`, `int`, `f32`, `f64`, `string`, `void`) and the
//! word operators `and`, `or`, `not`. `true` and `false` are reserved but
//! scan as bool literals.
//!
//! ## Identifiers
//!
//! Pattern: `[$_a-zA-Z][$_a-zA-Z0-9]*`
//!
//! ## Literals
//!
//! - **Integer**: `42`, `-5`, `64b`, `1000w`, `70000d`, `1q`, `0xFF`
//! - **Float**: `1.5`, `1.5F`, `1.5D`
//! - **String**: `'hello'`, `'tab\t'`, `'\x41'`
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `<>`, `<`, `>`, `<=`, `>=`
//! - **Bitwise**: `&`, `|`, `^`, `~`, `<<`, `>>`, `|>`
//! - **Assignment**: `=`
//!
//! ## Delimiters
//!
//! - **Grouping**: `()`, `{}`, `[]`
//! - **Separation**: `,`
//! - **Type annotation**: `:`, `::`
//! - **Access and flow**: `.`, `..`, `->`, `<-`
//!
//! ## Special
//!
//! - **LineComment**: `#...` runs, emitted only when configured
//! - **Eof**: end of input for the current source
//! - **Error**: scan failure; the token text holds the message

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod scanner;
pub mod source;
pub mod token;

// Re-export main types for convenience
pub use scanner::Scanner;
pub use source::{BufferSource, CharSource, FileSource, SourceHandle};
pub use token::{keyword_kind, Token, TokenKind, Value};
