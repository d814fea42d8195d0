//! Graph building from interpreted node trees.
//!
//! The [`TreeWalker`] walks a graph root's body depth first and accumulates a
//! [`GraphModel`]. At every fragment it:
//!
//! 1. partitions the fragment's own attributes into edge-destined, cascade
//!    and plain groups;
//! 2. extends the inherited cascade context with the fragment's cascade group;
//! 3. walks every child with the extended context;
//! 4. registers the fragment's node with its plain attributes on top of the
//!    cascade context (the node's own attributes win);
//! 5. registers an edge to every child, carrying the child's edge-destined
//!    attributes.
//!
//! Fragments that do not name a single node (multi-key mappings, lists) are
//! transparent: they register nothing themselves, and their parent links to
//! each of their subtrees instead.
//!
//! Children are registered before their parent, so when the same node or
//! edge receives the same attribute key at several places in the tree, the
//! write visited last wins.

use log::trace;

use minigraph_core::{
    attribute::{Attributes, overlay_attributes},
    graph::GraphModel,
    identifier::Id,
    markers::Markers,
};

use crate::{
    config::ParseConfig,
    error::{Diagnostic, ErrorCode, FragmentError},
    namespace::partition,
    path::FragmentPath,
    tree::{Fragment, NodeTree},
};

/// Walks node trees and accumulates their nodes and edges.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'c> {
    tree: NodeTree<'c>,
    markers: &'c Markers,
    max_depth: usize,
}

impl<'c> TreeWalker<'c> {
    pub fn new(config: &'c ParseConfig) -> Self {
        Self {
            tree: NodeTree::new(config.markers().attribute()),
            markers: config.markers(),
            max_depth: config.max_depth(),
        }
    }

    /// Builds the graph of a root's body.
    ///
    /// The body is read as the value of a single-key mapping whose key is
    /// the root itself: its children are walked, but the root never becomes
    /// a node. Its attributes are graph-level and are not handled here.
    ///
    /// # Errors
    ///
    /// Returns a [`Diagnostic`] for a malformed fragment (`E100`) or for
    /// nesting deeper than the configured limit (`E101`). No partial graph is
    /// returned.
    pub fn build_root(&self, body: Fragment<'_>, path: &FragmentPath) -> Result<GraphModel, Diagnostic> {
        let root = match body {
            Fragment::Value(value) => Fragment::Entry("", value),
            entry @ Fragment::Entry(..) => entry,
        };
        let children = self
            .tree
            .children(root)
            .map_err(|err| fragment_diagnostic(err, path))?;

        let cascade = Attributes::new();
        children
            .into_iter()
            .enumerate()
            .try_fold(GraphModel::new(), |model, (idx, child)| {
                let child_path = self.child_path(child, idx, path);
                self.walk(child, &cascade, model, &child_path, 1)
            })
    }

    /// Builds the graph of a single fragment and its descendants.
    ///
    /// # Errors
    ///
    /// Same as [`TreeWalker::build_root`].
    pub fn build(&self, fragment: Fragment<'_>) -> Result<GraphModel, Diagnostic> {
        let path = match self.tree.name(fragment) {
            Ok(name) => FragmentPath::root().child(name),
            Err(_) => FragmentPath::root(),
        };
        self.walk(fragment, &Attributes::new(), GraphModel::new(), &path, 0)
    }

    fn walk(
        &self,
        fragment: Fragment<'_>,
        inherited: &Attributes,
        model: GraphModel,
        path: &FragmentPath,
        depth: usize,
    ) -> Result<GraphModel, Diagnostic> {
        if depth > self.max_depth {
            return Err(Diagnostic::error(format!(
                "nesting depth exceeds the limit of {}",
                self.max_depth
            ))
            .with_code(ErrorCode::E101)
            .with_path(path.clone())
            .with_help("flatten the document or raise `limits.max_depth`"));
        }

        let mut groups = partition(
            &self.tree.attrs(fragment),
            &[self.markers.edge(), self.markers.cascade()],
        );
        let cascade = overlay_attributes(inherited, &groups.take(self.markers.cascade()));

        let children = self
            .tree
            .children(fragment)
            .map_err(|err| fragment_diagnostic(err, path))?;

        let mut model = model;
        for (idx, child) in children.iter().enumerate() {
            let child_path = self.child_path(*child, idx, path);
            model = self.walk(*child, &cascade, model, &child_path, depth + 1)?;
        }

        let name = match self.tree.name(fragment) {
            Ok(name) => name,
            Err(err) if err.is_ambiguous() => {
                trace!(path = path.to_string(); "Transparent fragment");
                return Ok(model);
            }
            Err(err) => return Err(fragment_diagnostic(err, path)),
        };

        let id = Id::new(name);
        model.add_node(id, &overlay_attributes(&cascade, groups.unmatched()));
        trace!(node = name, depth = depth; "Registered node");

        for child in children {
            self.add_edges(id, child, &mut model, path)?;
        }

        Ok(model)
    }

    /// Registers the edge from `parent` to a child, or to every subtree of a
    /// child that names no node.
    fn add_edges(
        &self,
        parent: Id,
        child: Fragment<'_>,
        model: &mut GraphModel,
        path: &FragmentPath,
    ) -> Result<(), Diagnostic> {
        match self.tree.name(child) {
            Ok(child_name) => {
                let edge_attrs =
                    partition(&self.tree.attrs(child), &[self.markers.edge()]).take(self.markers.edge());
                model.add_edge(parent, Id::new(child_name), &edge_attrs);
                Ok(())
            }
            Err(err) if err.is_ambiguous() => {
                let subtrees = self
                    .tree
                    .children(child)
                    .map_err(|err| fragment_diagnostic(err, path))?;
                for subtree in subtrees {
                    self.add_edges(parent, subtree, model, path)?;
                }
                Ok(())
            }
            Err(err) => Err(fragment_diagnostic(err, path)),
        }
    }

    fn child_path(&self, child: Fragment<'_>, idx: usize, parent: &FragmentPath) -> FragmentPath {
        match self.tree.name(child) {
            Ok(name) => parent.child(name),
            Err(_) => parent.index(idx),
        }
    }
}

fn fragment_diagnostic(err: FragmentError, path: &FragmentPath) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.to_string()).with_path(path.clone());
    match err {
        FragmentError::Malformed { .. } => diagnostic
            .with_code(ErrorCode::E100)
            .with_help("quote the value to use it as a node name"),
        FragmentError::AmbiguousNode { .. } => diagnostic,
    }
}
