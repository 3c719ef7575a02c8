//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused
//! components:
//! - `core` - Scanner struct, scope stack, and dispatch
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Numeric literal scanning
//! - `string` - String literal scanning
//! - `operator` - Operator and punctuation scanning
//! - `comment` - Line comment scanning and skipping

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::Scanner;
