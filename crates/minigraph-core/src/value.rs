//! Document values.
//!
//! [`Value`] is the closed variant type every fragment of an input document is
//! decoded into. It is intentionally smaller than a general YAML value: mapping
//! keys are always strings, and mappings keep their entries in document order
//! because the order of sibling nodes is meaningful.
//!
//! # Example
//!
//! ```
//! use minigraph_core::value::Value;
//!
//! let tree = Value::mapping([("parent", Value::sequence(["a", "b"]))]);
//!
//! assert_eq!(tree.single_entry().map(|(key, _)| key), Some("parent"));
//! assert_eq!(tree.to_string(), "{parent: [a, b]}");
//! ```

use std::fmt;

/// One fragment of a decoded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    /// Ordered key/value entries.
    Mapping(Vec<(String, Value)>),
}

impl Value {
    /// Builds a [`Value::Mapping`] from key/value pairs, keeping their order.
    pub fn mapping<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Builds a [`Value::Sequence`] from its elements.
    pub fn sequence<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Builds a mapping with exactly one entry.
    pub fn single(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Value::Mapping(vec![(key.into(), value.into())])
    }

    /// Returns the string payload of a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the entries of a [`Value::Mapping`].
    pub fn as_mapping(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the key and value of a mapping that has exactly one entry.
    pub fn single_entry(&self) -> Option<(&str, &Value)> {
        match self {
            Value::Mapping(entries) if entries.len() == 1 => {
                let (key, value) = &entries[0];
                Some((key.as_str(), value))
            }
            _ => None,
        }
    }

    /// Looks up a key in a mapping, returning the first matching entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping()?
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Human readable name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }
}

impl fmt::Display for Value {
    /// Scalars print bare, collections print in YAML flow style.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Mapping(entries) => {
                f.write_str("{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}
