//! Configuration types for minigraph.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the command line tool.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining markers and limits.
//! - [`Markers`] - Reserved key prefixes recognised in documents.
//! - [`LimitsConfig`] - Resource limits applied while building graphs.
//!
//! # Example
//!
//! ```
//! # use minigraph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.markers().attribute(), "_");
//! assert_eq!(config.limits().max_depth(), 64);
//! ```

use serde::Deserialize;

use minigraph_parser::{DEFAULT_MAX_DEPTH, ParseConfig};

pub use minigraph_core::markers::Markers;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Marker configuration section.
    #[serde(default)]
    markers: Markers,

    /// Limits configuration section.
    #[serde(default)]
    limits: LimitsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `markers` - Reserved key prefixes.
    /// * `limits` - Resource limits.
    pub fn new(markers: Markers, limits: LimitsConfig) -> Self {
        Self { markers, limits }
    }

    /// Returns the marker configuration.
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Returns the limits configuration.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Returns the settings the parser runs with.
    pub(crate) fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.markers.clone(), self.limits.max_depth)
    }
}

/// Resource limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Deepest nesting accepted below a graph root.
    max_depth: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LimitsConfig {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the maximum nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.markers(), &Markers::default());
        assert_eq!(config.limits().max_depth(), DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_partial_sections() {
        let source = r#"
            [markers]
            attribute = "@"
            cascade = "all_"

            [limits]
            max_depth = 12
        "#;
        let config: AppConfig = toml::from_str(source).unwrap();

        assert_eq!(config.markers().attribute(), "@");
        assert_eq!(config.markers().cascade(), "all_");
        assert_eq!(config.markers().edge(), "arrow_");
        assert_eq!(config.limits().max_depth(), 12);
        assert_eq!(config.parse_config().max_depth(), 12);
    }
}
