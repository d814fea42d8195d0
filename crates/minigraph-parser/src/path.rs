//! Locations of fragments inside a document.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// The chain of mapping keys and list positions leading to a fragment.
///
/// # Examples
///
/// ```
/// use minigraph_parser::FragmentPath;
///
/// let path = FragmentPath::root().child("graph").child("parent").index(1);
/// assert_eq!(path.to_string(), "graph > parent > [1]");
/// assert_eq!(path.depth(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentPath {
    segments: Vec<Segment>,
}

impl FragmentPath {
    /// The document itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the path of a mapping entry or named node below this one.
    pub fn child(&self, key: impl Into<String>) -> Self {
        self.extended(Segment::Key(key.into()))
    }

    /// Returns the path of a list element or unnamed fragment below this one.
    pub fn index(&self, idx: usize) -> Self {
        self.extended(Segment::Index(idx))
    }

    /// Number of segments from the document root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    fn extended(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(segment);
        Self { segments }
    }
}

impl fmt::Display for FragmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<document>");
        }
        for (idx, segment) in self.segments.iter().enumerate() {
            if idx > 0 {
                f.write_str(" > ")?;
            }
            match segment {
                Segment::Key(key) => f.write_str(key)?,
                Segment::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(FragmentPath::root().to_string(), "<document>");
        assert_eq!(FragmentPath::root().depth(), 0);
    }

    #[test]
    fn test_child_does_not_modify_parent() {
        let parent = FragmentPath::root().child("reverse graph");
        let child = parent.child("node");

        assert_eq!(parent.to_string(), "reverse graph");
        assert_eq!(child.to_string(), "reverse graph > node");
    }
}
