//! Attribute mappings.
//!
//! Attributes are render hints attached to nodes, edges and graphs. The core
//! never interprets their values; it only routes them by key prefix and merges
//! them. Merging has *update* semantics: for colliding keys the later write
//! wins, and merging the same mapping twice is the same as merging it once.

use indexmap::IndexMap;

use crate::value::Value;

/// Ordered mapping from attribute name to value.
pub type Attributes = IndexMap<String, Value>;

/// Merges `update` into `target`, overwriting colliding keys.
///
/// # Examples
///
/// ```
/// use minigraph_core::attribute::{Attributes, merge_attributes};
/// use minigraph_core::value::Value;
///
/// let mut target = Attributes::from([("color".to_string(), Value::from("red"))]);
/// let update = Attributes::from([("color".to_string(), Value::from("blue"))]);
///
/// merge_attributes(&mut target, &update);
/// merge_attributes(&mut target, &update);
///
/// assert_eq!(target.len(), 1);
/// assert_eq!(target["color"], Value::from("blue"));
/// ```
pub fn merge_attributes(target: &mut Attributes, update: &Attributes) {
    target.extend(update.iter().map(|(key, value)| (key.clone(), value.clone())));
}

/// Returns a new mapping holding `base` overlaid with `overlay`.
pub fn overlay_attributes(base: &Attributes, overlay: &Attributes) -> Attributes {
    let mut merged = base.clone();
    merge_attributes(&mut merged, overlay);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, i64)]) -> Attributes {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), Value::from(*value)))
            .collect()
    }

    #[test]
    fn test_merge_overwrites_colliding_keys() {
        let mut target = attrs(&[("a", 1), ("b", 2)]);
        merge_attributes(&mut target, &attrs(&[("b", 3), ("c", 4)]));

        assert_eq!(target, attrs(&[("a", 1), ("b", 3), ("c", 4)]));
    }

    #[test]
    fn test_merge_keeps_first_insertion_position() {
        let mut target = attrs(&[("a", 1), ("b", 2)]);
        merge_attributes(&mut target, &attrs(&[("a", 5)]));

        let keys: Vec<&str> = target.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
    }

    #[test]
    fn test_overlay_leaves_inputs_untouched() {
        let base = attrs(&[("a", 1)]);
        let overlay = attrs(&[("a", 2), ("b", 3)]);

        let merged = overlay_attributes(&base, &overlay);

        assert_eq!(merged, attrs(&[("a", 2), ("b", 3)]));
        assert_eq!(base, attrs(&[("a", 1)]));
    }
}
