//! mioc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! mioc compiler: source location spans and the diagnostic reporting
//! infrastructure.
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking
//! - [`diagnostic`] - Error and warning reporting
//!
//! # Example
//!
//! ```
//! use mioc_util::{DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '@'")
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

// Re-export main types for convenience
pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler, Level};
pub use span::Span;
