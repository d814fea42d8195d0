//! Node tree interpretation of document fragments.
//!
//! A document fragment means different things depending on its shape:
//!
//! | Fragment                    | Name      | Subtrees                                   |
//! |-----------------------------|-----------|--------------------------------------------|
//! | `"a"`                       | `a`       | none                                       |
//! | `{a: null}`                 | `a`       | none                                       |
//! | `{a: "b"}`                  | `a`       | `["b"]`                                    |
//! | `{a: [x, y]}`               | `a`       | `[x, y]`                                   |
//! | `{a: {b: .., c: ..}}`       | `a`       | `[{b: ..}, {c: ..}]`                       |
//! | `{a: .., b: ..}`            | ambiguous | `[{a: ..}, {b: ..}]` (explosion)           |
//! | `[x, y]`                    | ambiguous | `[x, y]`                                   |
//!
//! Subtrees whose single key starts with the attribute marker are attributes
//! of the enclosing node rather than children.
//!
//! Explosion never copies: an exploded entry is represented by
//! [`Fragment::Entry`], which borrows the key and value of the original
//! mapping.

use minigraph_core::{attribute::Attributes, value::Value};

use crate::error::FragmentError;

/// A borrowed view of one fragment of a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment<'v> {
    /// A value as it appears in the document.
    Value(&'v Value),
    /// One entry of a mapping, standing for the single-key mapping `{key: value}`.
    Entry(&'v str, &'v Value),
}

impl<'v> Fragment<'v> {
    /// Returns the key and body if the fragment is a single-key mapping.
    fn as_entry(self) -> Option<(&'v str, &'v Value)> {
        match self {
            Fragment::Entry(key, value) => Some((key, value)),
            Fragment::Value(value) => value.single_entry(),
        }
    }

    /// Returns the value a fragment that is not a single-key mapping stands for.
    ///
    /// For an entry this is its body; callers check [`Fragment::as_entry`] first.
    fn to_ref(self) -> &'v Value {
        match self {
            Fragment::Value(value) => value,
            Fragment::Entry(_, value) => value,
        }
    }

    /// Materialises the fragment as an owned value.
    pub fn to_value(self) -> Value {
        match self {
            Fragment::Value(value) => value.clone(),
            Fragment::Entry(key, value) => Value::single(key, value.clone()),
        }
    }
}

impl<'v> From<&'v Value> for Fragment<'v> {
    fn from(value: &'v Value) -> Self {
        Fragment::Value(value)
    }
}

/// Splits a mapping into one single-key fragment per entry, in order.
fn explode(entries: &[(String, Value)]) -> Vec<Fragment<'_>> {
    entries
        .iter()
        .map(|(key, value)| Fragment::Entry(key, value))
        .collect()
}

fn malformed(value: &Value) -> FragmentError {
    FragmentError::Malformed { kind: value.kind() }
}

/// Interprets fragments as a tree of named nodes.
///
/// # Examples
///
/// ```
/// use minigraph_core::value::Value;
/// use minigraph_parser::tree::NodeTree;
///
/// let tree = NodeTree::new("_");
/// let fragment = Value::single(
///     "node",
///     Value::mapping([("_color", Value::from("red")), ("child", Value::Null)]),
/// );
///
/// assert_eq!(tree.name((&fragment).into()), Ok("node"));
/// assert_eq!(tree.attrs((&fragment).into())["color"], Value::from("red"));
///
/// let children: Vec<Value> = tree
///     .children((&fragment).into())
///     .unwrap()
///     .into_iter()
///     .map(|child| child.to_value())
///     .collect();
/// assert_eq!(children, [Value::single("child", Value::Null)]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NodeTree<'m> {
    attribute_marker: &'m str,
}

impl<'m> NodeTree<'m> {
    /// Creates an interpreter using `attribute_marker` to recognise attribute keys.
    pub fn new(attribute_marker: &'m str) -> Self {
        Self { attribute_marker }
    }

    /// Returns the node name of a fragment.
    ///
    /// # Errors
    ///
    /// - [`FragmentError::AmbiguousNode`] for a mapping without exactly one
    ///   entry, or a sequence.
    /// - [`FragmentError::Malformed`] for null, boolean and numeric values.
    pub fn name<'v>(&self, fragment: Fragment<'v>) -> Result<&'v str, FragmentError> {
        if let Some((key, _)) = fragment.as_entry() {
            return Ok(key);
        }
        match fragment.to_ref() {
            Value::String(name) => Ok(name),
            Value::Mapping(entries) => Err(FragmentError::AmbiguousNode {
                kind: "mapping",
                entries: entries.len(),
            }),
            Value::Sequence(items) => Err(FragmentError::AmbiguousNode {
                kind: "sequence",
                entries: items.len(),
            }),
            other => Err(malformed(other)),
        }
    }

    /// Returns every subtree of a fragment, attributes included.
    ///
    /// # Errors
    ///
    /// Returns [`FragmentError::Malformed`] if the fragment, or the body of a
    /// single-key mapping, is null (where a tree is required), boolean or
    /// numeric.
    pub fn subtrees<'v>(
        &self,
        fragment: Fragment<'v>,
    ) -> Result<Vec<Fragment<'v>>, FragmentError> {
        if let Some((_, body)) = fragment.as_entry() {
            return match body {
                Value::Null => Ok(Vec::new()),
                Value::String(_) => Ok(vec![Fragment::Value(body)]),
                Value::Sequence(items) => Ok(items.iter().map(Fragment::Value).collect()),
                Value::Mapping(entries) => Ok(explode(entries)),
                other => Err(malformed(other)),
            };
        }
        match fragment.to_ref() {
            Value::String(_) => Ok(Vec::new()),
            Value::Mapping(entries) => Ok(explode(entries)),
            Value::Sequence(items) => Ok(items.iter().map(Fragment::Value).collect()),
            other => Err(malformed(other)),
        }
    }

    /// Returns the subtrees of a fragment that are child nodes.
    ///
    /// A subtree is an attribute, not a child, when it is a single-key
    /// mapping whose key starts with the attribute marker.
    ///
    /// # Errors
    ///
    /// Same as [`NodeTree::subtrees`].
    pub fn children<'v>(
        &self,
        fragment: Fragment<'v>,
    ) -> Result<Vec<Fragment<'v>>, FragmentError> {
        let mut subtrees = self.subtrees(fragment)?;
        subtrees.retain(|subtree| !self.is_attribute(*subtree));
        Ok(subtrees)
    }

    /// Returns the attributes a fragment declares for itself, with the
    /// attribute marker stripped from their keys.
    ///
    /// Only a single-key mapping whose body is a mapping can declare
    /// attributes; every other fragment has none.
    pub fn attrs(&self, fragment: Fragment<'_>) -> Attributes {
        let Some((_, Value::Mapping(entries))) = fragment.as_entry() else {
            return Attributes::new();
        };

        entries
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(self.attribute_marker)
                    .map(|stripped| (stripped.to_string(), value.clone()))
            })
            .collect()
    }

    fn is_attribute(&self, fragment: Fragment<'_>) -> bool {
        fragment
            .as_entry()
            .is_some_and(|(key, _)| key.starts_with(self.attribute_marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TREE: NodeTree<'static> = NodeTree { attribute_marker: "_" };

    fn values(fragments: Vec<Fragment<'_>>) -> Vec<Value> {
        fragments.into_iter().map(Fragment::to_value).collect()
    }

    fn children(value: &Value) -> Vec<Value> {
        values(TREE.children(value.into()).expect("fragment should be a node tree"))
    }

    #[test]
    fn test_scalar() {
        let value = Value::from("node");

        assert_eq!(TREE.name((&value).into()), Ok("node"));
        assert!(children(&value).is_empty());
        assert!(TREE.attrs((&value).into()).is_empty());
    }

    #[test]
    fn test_single_key_null() {
        let value = Value::single("node", Value::Null);

        assert_eq!(TREE.name((&value).into()), Ok("node"));
        assert!(children(&value).is_empty());
        assert!(TREE.attrs((&value).into()).is_empty());
    }

    #[test]
    fn test_single_key_scalar_body() {
        let value = Value::single("node", "child");
        assert_eq!(children(&value), [Value::from("child")]);
    }

    #[test]
    fn test_single_key_list_body() {
        let value = Value::single("node", Value::sequence(["child1", "child2"]));
        assert_eq!(children(&value), [Value::from("child1"), Value::from("child2")]);

        let single = Value::single("node", Value::sequence(["child"]));
        assert_eq!(children(&single), [Value::from("child")]);
    }

    #[test]
    fn test_single_key_mapping_body() {
        let value = Value::single("node", Value::single("child", Value::Null));
        assert_eq!(children(&value), [Value::single("child", Value::Null)]);
    }

    #[test]
    fn test_mapping_body_is_exploded_in_order() {
        let value = Value::single(
            "p",
            Value::mapping([("c1", Value::Null), ("c2", Value::Sequence(Vec::new()))]),
        );

        assert_eq!(
            children(&value),
            [
                Value::single("c1", Value::Null),
                Value::single("c2", Value::Sequence(Vec::new())),
            ]
        );
    }

    #[test]
    fn test_attributes_are_not_children() {
        let value = Value::single(
            "node",
            Value::mapping([("_attr", Value::from("val")), ("child", Value::Null)]),
        );

        assert_eq!(children(&value), [Value::single("child", Value::Null)]);
        assert_eq!(
            TREE.attrs((&value).into()),
            Attributes::from([("attr".to_string(), Value::from("val"))])
        );
    }

    #[test]
    fn test_attribute_subtrees_are_subtrees() {
        let value = Value::single(
            "node",
            Value::mapping([("_attr", Value::from("val")), ("child", Value::Null)]),
        );

        let subtrees = TREE.subtrees((&value).into()).unwrap();
        assert_eq!(subtrees.len(), 2);
    }

    #[test]
    fn test_scalar_children_with_marker_are_kept() {
        let value = Value::single("node", Value::sequence(["_plain"]));
        assert_eq!(children(&value), [Value::from("_plain")]);
    }

    #[test]
    fn test_multi_key_mapping_is_ambiguous_and_explodes() {
        let value = Value::mapping([("a", Value::Null), ("b", Value::from("c"))]);

        assert_eq!(
            TREE.name((&value).into()),
            Err(FragmentError::AmbiguousNode {
                kind: "mapping",
                entries: 2
            })
        );
        assert_eq!(
            children(&value),
            [Value::single("a", Value::Null), Value::single("b", "c")]
        );
        assert!(TREE.attrs((&value).into()).is_empty());
    }

    #[test]
    fn test_sequence_is_transparent() {
        let value = Value::sequence(["a", "b"]);

        assert!(TREE.name((&value).into()).unwrap_err().is_ambiguous());
        assert_eq!(children(&value), [Value::from("a"), Value::from("b")]);
    }

    #[test]
    fn test_attrs_only_for_mapping_body() {
        let list_body = Value::single("node", Value::sequence([Value::single("_attr", 1i64)]));
        assert!(TREE.attrs((&list_body).into()).is_empty());
    }

    #[test]
    fn test_malformed_fragments() {
        for value in [Value::from(1i64), Value::from(true), Value::from(1.5), Value::Null] {
            assert_eq!(
                TREE.name((&value).into()),
                Err(FragmentError::Malformed { kind: value.kind() })
            );
            assert!(TREE.children((&value).into()).is_err());
        }

        let numeric_body = Value::single("node", 5i64);
        assert_eq!(TREE.name((&numeric_body).into()), Ok("node"));
        assert_eq!(
            TREE.children((&numeric_body).into()),
            Err(FragmentError::Malformed { kind: "integer" })
        );
    }

    #[test]
    fn test_entry_behaves_like_single_key_mapping() {
        let body = Value::mapping([("_x", Value::from(1i64)), ("leaf", Value::Null)]);
        let entry = Fragment::Entry("node", &body);
        let value = Value::single("node", body.clone());

        assert_eq!(TREE.name(entry), TREE.name((&value).into()));
        assert_eq!(TREE.attrs(entry), TREE.attrs((&value).into()));
        assert_eq!(values(TREE.children(entry).unwrap()), children(&value));
    }

    #[test]
    fn test_custom_attribute_marker() {
        let tree = NodeTree::new("@");
        let value = Value::single(
            "node",
            Value::mapping([("@shape", Value::from("box")), ("_child", Value::Null)]),
        );

        assert_eq!(
            tree.attrs((&value).into()),
            Attributes::from([("shape".to_string(), Value::from("box"))])
        );
        assert_eq!(
            values(tree.children((&value).into()).unwrap()),
            [Value::single("_child", Value::Null)]
        );
    }
}
