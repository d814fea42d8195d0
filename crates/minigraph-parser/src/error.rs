//! Error and diagnostic system for the minigraph parser.
//!
//! Decoding and tree walking report problems as [`Diagnostic`]s: a severity,
//! an optional [`ErrorCode`], a message, the [`FragmentPath`] of the offending
//! fragment and optional help text. One or more fatal diagnostics are wrapped
//! in a [`ParseError`].
//!
//! Interpreting a single fragment fails with the lighter [`FragmentError`];
//! the tree walker decides whether that is recoverable (an ambiguous fragment
//! is simply transparent) or fatal (a malformed fragment).
//!
//! # Example
//!
//! ```
//! # use minigraph_parser::error::{Diagnostic, ErrorCode};
//! # use minigraph_parser::FragmentPath;
//!
//! let path = FragmentPath::root().child("graph").child("parent");
//!
//! let diag = Diagnostic::error("integer value cannot be part of a node tree")
//!     .with_code(ErrorCode::E100)
//!     .with_path(path)
//!     .with_help("use a string, a mapping or a list");
//!
//! assert_eq!(diag.to_string(), "error[E100]: integer value cannot be part of a node tree");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod fragment;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use fragment::FragmentError;
pub use parse_error::ParseError;
