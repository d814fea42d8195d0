//! Neutral graph model.
//!
//! The graph model is what the tree walker produces and what a renderer
//! consumes: named nodes with attributes, and directed `(parent, child)` edges
//! with attributes. It carries no layout and no rendering decisions other than
//! the [`Direction`] of the section it belongs to.
//!
//! # Merge semantics
//!
//! Nodes are identified by name and edges by their ordered endpoint pair.
//! Registering an existing node or edge merges the new attributes into the
//! existing set (later writes win), so merging a model into itself is a no-op.

use indexmap::IndexMap;

use crate::{
    attribute::{Attributes, merge_attributes},
    identifier::Id,
};

/// Which way the edges of a graph section are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Edges are drawn from the descendant toward the ancestor.
    #[default]
    Forward,
    /// Edges are drawn from the ancestor toward the descendant.
    Reverse,
}

impl Direction {
    /// Returns the `(from, to)` pair a renderer should draw for a
    /// `(parent, child)` edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use minigraph_core::graph::Direction;
    ///
    /// assert_eq!(Direction::Forward.orient("parent", "child"), ("child", "parent"));
    /// assert_eq!(Direction::Reverse.orient("parent", "child"), ("parent", "child"));
    /// ```
    pub fn orient<T>(self, parent: T, child: T) -> (T, T) {
        match self {
            Direction::Forward => (child, parent),
            Direction::Reverse => (parent, child),
        }
    }
}

/// Nodes and edges accumulated from a document tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphModel {
    nodes: IndexMap<Id, Attributes>,
    edges: IndexMap<(Id, Id), Attributes>,
}

impl GraphModel {
    /// Creates an empty graph model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node, merging `attrs` into any attributes it already has.
    pub fn add_node(&mut self, id: Id, attrs: &Attributes) {
        merge_attributes(self.nodes.entry(id).or_default(), attrs);
    }

    /// Registers a `(parent, child)` edge, merging `attrs` into any attributes
    /// it already has.
    ///
    /// Endpoints that are not yet known are created with empty attributes.
    pub fn add_edge(&mut self, parent: Id, child: Id, attrs: &Attributes) {
        self.nodes.entry(parent).or_default();
        self.nodes.entry(child).or_default();
        merge_attributes(self.edges.entry((parent, child)).or_default(), attrs);
    }

    /// Merges every node and edge of `other` into this model.
    pub fn merge(&mut self, other: &GraphModel) {
        for (id, attrs) in &other.nodes {
            self.add_node(*id, attrs);
        }
        for ((parent, child), attrs) in &other.edges {
            self.add_edge(*parent, *child, attrs);
        }
    }

    /// Returns the attributes of a node, if it exists.
    pub fn node(&self, id: Id) -> Option<&Attributes> {
        self.nodes.get(&id)
    }

    /// Returns the attributes of a `(parent, child)` edge, if it exists.
    pub fn edge(&self, parent: Id, child: Id) -> Option<&Attributes> {
        self.edges.get(&(parent, child))
    }

    /// Iterates over nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (Id, &Attributes)> {
        self.nodes.iter().map(|(id, attrs)| (*id, attrs))
    }

    /// Iterates over `(parent, child)` edges in registration order.
    pub fn edges(&self) -> impl Iterator<Item = (Id, Id, &Attributes)> {
        self.edges
            .iter()
            .map(|((parent, child), attrs)| (*parent, *child, attrs))
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// One processed graph root of a document.
///
/// Holds the graph-level attribute groups found on the root key itself next
/// to the nodes and edges built from its body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphSection {
    direction: Direction,
    graph_attributes: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
    model: GraphModel,
}

impl GraphSection {
    pub fn new(direction: Direction, model: GraphModel) -> Self {
        Self {
            direction,
            model,
            ..Self::default()
        }
    }

    pub fn with_graph_attributes(mut self, attrs: Attributes) -> Self {
        self.graph_attributes = attrs;
        self
    }

    pub fn with_node_defaults(mut self, attrs: Attributes) -> Self {
        self.node_defaults = attrs;
        self
    }

    pub fn with_edge_defaults(mut self, attrs: Attributes) -> Self {
        self.edge_defaults = attrs;
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    pub fn node_defaults(&self) -> &Attributes {
        &self.node_defaults
    }

    pub fn edge_defaults(&self) -> &Attributes {
        &self.edge_defaults
    }

    pub fn model(&self) -> &GraphModel {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), Value::from(*value)))
            .collect()
    }

    #[test]
    fn test_add_node_merges() {
        let mut model = GraphModel::new();
        let id = Id::new("node");

        model.add_node(id, &attrs(&[("color", "red"), ("shape", "box")]));
        model.add_node(id, &attrs(&[("color", "blue")]));

        assert_eq!(model.nodes_count(), 1);
        assert_eq!(
            model.node(id),
            Some(&attrs(&[("color", "blue"), ("shape", "box")]))
        );
    }

    #[test]
    fn test_add_edge_creates_missing_endpoints() {
        let mut model = GraphModel::new();
        let parent = Id::new("edge_parent");
        let child = Id::new("edge_child");

        model.add_edge(parent, child, &attrs(&[("label", "uses")]));

        assert_eq!(model.nodes_count(), 2);
        assert_eq!(model.node(parent), Some(&Attributes::new()));
        assert_eq!(model.node(child), Some(&Attributes::new()));
        assert_eq!(model.edge(parent, child), Some(&attrs(&[("label", "uses")])));
        assert_eq!(model.edge(child, parent), None);
    }

    #[test]
    fn test_add_edge_keeps_existing_node_attributes() {
        let mut model = GraphModel::new();
        let parent = Id::new("kept_parent");
        let child = Id::new("kept_child");

        model.add_node(child, &attrs(&[("color", "red")]));
        model.add_edge(parent, child, &Attributes::new());

        assert_eq!(model.node(child), Some(&attrs(&[("color", "red")])));
    }

    #[test]
    fn test_self_loop() {
        let mut model = GraphModel::new();
        let id = Id::new("self_loop");

        model.add_edge(id, id, &Attributes::new());

        assert_eq!(model.nodes_count(), 1);
        assert_eq!(model.edges_count(), 1);
        assert!(model.edge(id, id).is_some());
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut model = GraphModel::new();
        model.add_node(Id::new("m_a"), &attrs(&[("x", "1")]));
        model.add_edge(Id::new("m_a"), Id::new("m_b"), &attrs(&[("y", "2")]));

        let mut merged = model.clone();
        merged.merge(&model);

        assert_eq!(merged, model);
    }

    #[test]
    fn test_iteration_order() {
        let mut model = GraphModel::new();
        model.add_node(Id::new("order_c"), &Attributes::new());
        model.add_node(Id::new("order_a"), &Attributes::new());
        model.add_node(Id::new("order_b"), &Attributes::new());

        let names: Vec<String> = model.nodes().map(|(id, _)| id.to_string()).collect();
        assert_eq!(names, ["order_c", "order_a", "order_b"]);
    }

    #[test]
    fn test_direction_orient() {
        let parent = Id::new("dir_parent");
        let child = Id::new("dir_child");

        assert_eq!(Direction::Forward.orient(parent, child), (child, parent));
        assert_eq!(Direction::Reverse.orient(parent, child), (parent, child));
    }

    #[test]
    fn test_section_builders() {
        let section = GraphSection::new(Direction::Reverse, GraphModel::new())
            .with_graph_attributes(attrs(&[("rankdir", "LR")]))
            .with_node_defaults(attrs(&[("shape", "box")]));

        assert_eq!(section.direction(), Direction::Reverse);
        assert_eq!(section.graph_attributes(), &attrs(&[("rankdir", "LR")]));
        assert_eq!(section.node_defaults(), &attrs(&[("shape", "box")]));
        assert!(section.edge_defaults().is_empty());
        assert!(section.model().is_empty());
    }
}
