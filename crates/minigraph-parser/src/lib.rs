//! Tree-to-graph translation for minigraph documents.
//!
//! A minigraph document is a loosely typed tree: nodes are plain strings,
//! single-key mappings or lists of either, and reserved key prefixes mark
//! attributes. This crate decodes such a document and builds the graph it
//! describes.
//!
//! # Pipeline
//!
//! 1. **Decoding** ([`parse`]): YAML or JSON text into a
//!    [`Value`](minigraph_core::value::Value) tree, split into sections.
//! 2. **Interpretation** ([`tree`]): each fragment is given a name, children
//!    and attributes.
//! 3. **Partitioning** ([`namespace`]): attributes are split into edge,
//!    cascade and plain groups by their key prefixes.
//! 4. **Building**: the tree is walked and nodes and edges are merged into a
//!    [`GraphModel`](minigraph_core::graph::GraphModel) per graph root.
//!
//! # Example
//!
//! ```
//! use minigraph_core::identifier::Id;
//! use minigraph_parser::{ParseConfig, parse};
//!
//! let source = "
//! graph:
//!   parent:
//!     _attr: 0
//!     child: ~
//! ";
//!
//! let document = parse(source, &ParseConfig::default()).unwrap();
//! let model = document.sections()[0].model();
//!
//! assert_eq!(model.nodes_count(), 2);
//! assert!(model.edge(Id::new("parent"), Id::new("child")).is_some());
//! ```

pub mod error;
pub mod namespace;
pub mod tree;

mod builder;
mod config;
mod document;
mod path;

use minigraph_core::document::Document;

pub use builder::TreeWalker;
pub use config::{DEFAULT_MAX_DEPTH, ParseConfig};
pub use path::FragmentPath;

use error::ParseError;

/// Decodes a document and builds its graph sections.
///
/// # Errors
///
/// Returns a [`ParseError`] holding every fatal diagnostic: invalid syntax,
/// a malformed top level or auxiliary section, a malformed fragment, or
/// nesting deeper than [`ParseConfig::max_depth`]. Warnings are logged.
pub fn parse(source: &str, config: &ParseConfig) -> Result<Document, ParseError> {
    document::parse_document(source, config)
}
