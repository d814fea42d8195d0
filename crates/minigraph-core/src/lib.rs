//! Minigraph Core Types and Definitions
//!
//! This crate provides the neutral data model shared by the minigraph parser,
//! the renderer hand-off and the command line tool:
//!
//! - **Identifiers**: Interned node names ([`identifier::Id`])
//! - **Values**: The closed variant type for document fragments ([`value::Value`])
//! - **Attributes**: Ordered attribute mappings with update-merge semantics ([`attribute`])
//! - **Markers**: Reserved key prefixes that partition attributes ([`markers::Markers`])
//! - **Graph**: Nodes, edges and graph sections ([`graph`] module)
//! - **Document**: A fully decoded input document ([`document::Document`])

pub mod attribute;
pub mod document;
pub mod graph;
pub mod identifier;
pub mod markers;
pub mod value;
