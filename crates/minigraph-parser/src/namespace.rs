//! Attribute namespace partitioning.
//!
//! A flat attribute mapping is split into disjoint groups by key prefix. A key
//! belongs to the first marker (in caller order) it starts with; the group
//! key is what follows the *last* occurrence of that marker, so
//! `arrow_arrow_color` under `arrow_` becomes `color`. Keys matching no
//! marker stay in the unmatched group, unmodified.
//!
//! Partitioning is total: it never fails and never drops an attribute.

use indexmap::IndexMap;

use minigraph_core::attribute::Attributes;

/// The marker of the group holding attributes that matched no marker.
pub const UNMATCHED: &str = "";

/// Attributes grouped by namespace marker.
///
/// Always holds the [`UNMATCHED`] group and one group per marker passed to
/// [`partition`], even if empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeGroups {
    groups: IndexMap<String, Attributes>,
}

impl AttributeGroups {
    /// Returns the group of a marker, or `None` if it was not partitioned on.
    pub fn get(&self, marker: &str) -> Option<&Attributes> {
        self.groups.get(marker)
    }

    /// Returns the attributes that matched no marker.
    pub fn unmatched(&self) -> &Attributes {
        &self.groups[UNMATCHED]
    }

    /// Moves the attributes out of a marker's group, leaving it empty.
    pub fn take(&mut self, marker: &str) -> Attributes {
        self.groups
            .get_mut(marker)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Returns the underlying marker → group mapping.
    pub fn into_inner(self) -> IndexMap<String, Attributes> {
        self.groups
    }
}

/// Returns the stripped key if `key` belongs to the namespace `marker`.
fn strip_namespace<'k>(key: &'k str, marker: &str) -> Option<&'k str> {
    if marker.is_empty() || !key.starts_with(marker) {
        return None;
    }
    key.rsplit_once(marker).map(|(_, stripped)| stripped)
}

/// Splits `attrs` into groups by namespace marker.
///
/// Empty markers are ignored: the empty marker always names the unmatched
/// group.
///
/// # Examples
///
/// ```
/// use minigraph_core::{attribute::Attributes, value::Value};
/// use minigraph_parser::namespace::partition;
///
/// let attrs = Attributes::from([
///     ("ns_check".to_string(), Value::from(2i64)),
///     ("test".to_string(), Value::from(1i64)),
/// ]);
///
/// let groups = partition(&attrs, &["ns_"]);
///
/// assert_eq!(groups.unmatched()["test"], Value::from(1i64));
/// assert_eq!(groups.get("ns_").unwrap()["check"], Value::from(2i64));
/// ```
pub fn partition(attrs: &Attributes, markers: &[&str]) -> AttributeGroups {
    let mut groups: IndexMap<String, Attributes> = IndexMap::with_capacity(markers.len() + 1);
    groups.insert(UNMATCHED.to_string(), Attributes::new());
    for marker in markers.iter().filter(|marker| !marker.is_empty()) {
        groups.entry(marker.to_string()).or_default();
    }

    for (key, value) in attrs {
        let matched = markers.iter().find_map(|marker| {
            strip_namespace(key, marker).map(|stripped| (*marker, stripped))
        });
        let (marker, group_key) = matched.unwrap_or((UNMATCHED, key.as_str()));

        groups
            .entry(marker.to_string())
            .or_default()
            .insert(group_key.to_string(), value.clone());
    }

    AttributeGroups { groups }
}
