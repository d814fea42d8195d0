//! Parser configuration.

use minigraph_core::markers::Markers;

/// Default limit on document nesting depth.
///
/// Depth counts node levels below a graph root. A mapping body adds one YAML
/// nesting level per node level and a list body adds two, so the default
/// keeps list-heavy trees under the decoder's own limit of 128 levels.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings controlling how a document is turned into graph sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    markers: Markers,
    max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(Markers::default(), DEFAULT_MAX_DEPTH)
    }
}

impl ParseConfig {
    /// Creates a configuration.
    ///
    /// # Arguments
    ///
    /// * `markers` - Reserved key prefixes used to recognise attributes.
    /// * `max_depth` - Deepest nesting level accepted below a graph root.
    pub fn new(markers: Markers, max_depth: usize) -> Self {
        Self { markers, max_depth }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
