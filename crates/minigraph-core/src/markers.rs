//! Reserved key prefixes.
//!
//! A document mixes child nodes and attributes as sibling keys of the same
//! mapping. Markers are the prefixes that tell them apart and route attributes
//! to the node, its incoming edge, the cascade context or the graph defaults.

use serde::Deserialize;
use thiserror::Error;

/// Errors for an unusable marker set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkerError {
    #[error("the attribute marker must not be empty")]
    EmptyAttributeMarker,

    #[error("markers `{first}` and `{second}` must be distinct")]
    Duplicate {
        first: &'static str,
        second: &'static str,
    },

    #[error("marker `{prefix}` is a prefix of marker `{marker}`, so `{marker}` keys could never be told apart")]
    Overlap {
        prefix: &'static str,
        marker: &'static str,
    },
}

/// The set of reserved key prefixes.
///
/// Attribute keys are first recognised by the [`attribute`](Markers::attribute)
/// prefix, which is stripped. The remaining key is then partitioned by the
/// namespace markers.
///
/// # Example
///
/// ```
/// use minigraph_core::markers::Markers;
///
/// let markers = Markers::default();
/// assert_eq!(markers.attribute(), "_");
/// assert_eq!(markers.edge(), "arrow_");
/// assert_eq!(markers.cascade(), "cascade_");
/// assert!(markers.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Prefix distinguishing an attribute key from a child node key.
    attribute: String,
    /// Namespace of attributes destined for the edge to the parent node.
    edge: String,
    /// Namespace of attributes inherited by every descendant.
    cascade: String,
    /// Namespace of graph-level default node attributes.
    node_defaults: String,
    /// Namespace of graph-level default edge attributes.
    edge_defaults: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            attribute: "_".to_string(),
            edge: "arrow_".to_string(),
            cascade: "cascade_".to_string(),
            node_defaults: "node_".to_string(),
            edge_defaults: "edge_".to_string(),
        }
    }
}

impl Markers {
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn edge(&self) -> &str {
        &self.edge
    }

    pub fn cascade(&self) -> &str {
        &self.cascade
    }

    pub fn node_defaults(&self) -> &str {
        &self.node_defaults
    }

    pub fn edge_defaults(&self) -> &str {
        &self.edge_defaults
    }

    /// Returns a copy with a different attribute marker.
    pub fn with_attribute(mut self, marker: impl Into<String>) -> Self {
        self.attribute = marker.into();
        self
    }

    /// Returns a copy with a different edge marker.
    pub fn with_edge(mut self, marker: impl Into<String>) -> Self {
        self.edge = marker.into();
        self
    }

    /// Returns a copy with a different cascade marker.
    pub fn with_cascade(mut self, marker: impl Into<String>) -> Self {
        self.cascade = marker.into();
        self
    }

    /// Checks that the marker set can partition attributes unambiguously.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError`] if the attribute marker is empty, or if the
    /// node-level namespaces (`edge`, `cascade`) or the graph-level namespaces
    /// (`node_defaults`, `edge_defaults`) are equal or one is a prefix of the
    /// other.
    pub fn validate(&self) -> Result<(), MarkerError> {
        if self.attribute.is_empty() {
            return Err(MarkerError::EmptyAttributeMarker);
        }
        check_disjoint(("edge", &self.edge), ("cascade", &self.cascade))?;
        check_disjoint(
            ("node_defaults", &self.node_defaults),
            ("edge_defaults", &self.edge_defaults),
        )
    }
}

/// Namespaces are matched by prefix in order, so a marker that starts another
/// one would claim all of its keys. An empty marker is unused.
fn check_disjoint(
    (first, first_marker): (&'static str, &str),
    (second, second_marker): (&'static str, &str),
) -> Result<(), MarkerError> {
    if first_marker.is_empty() || second_marker.is_empty() {
        return Ok(());
    }
    if first_marker == second_marker {
        return Err(MarkerError::Duplicate { first, second });
    }
    if second_marker.starts_with(first_marker) {
        return Err(MarkerError::Overlap {
            prefix: first,
            marker: second,
        });
    }
    if first_marker.starts_with(second_marker) {
        return Err(MarkerError::Overlap {
            prefix: second,
            marker: first,
        });
    }
    Ok(())
}
