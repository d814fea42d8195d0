//! Minigraph - Draw graphs from loosely structured YAML trees.
//!
//! Parsing, graph building and rendering for minigraph documents. A document
//! describes a graph as a tree of names, with reserved key prefixes for node,
//! edge and cascading attributes; the result is rendered with Graphviz.

pub mod config;
pub mod export;

mod error;

pub use minigraph_core::{attribute, document, graph, identifier, value};

pub use error::MinigraphError;
pub use export::OutputFormat;

use log::{debug, info, trace};

use minigraph_core::document::Document;

use config::AppConfig;
use export::dot::{self, DotRenderer};

/// Builder for parsing and rendering minigraph documents.
///
/// # Examples
///
/// ```rust
/// use minigraph::{GraphBuilder, config::AppConfig};
///
/// let source = "graph: {parent: {_color: red, child: ~}}";
///
/// let builder = GraphBuilder::new(AppConfig::default());
///
/// // Parse source to a built document
/// let document = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Print it as DOT source
/// let dot = builder.render_dot(&document)
///     .expect("Failed to render");
/// assert!(dot.contains("\"child\" -> \"parent\""));
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    config: AppConfig,
}

impl GraphBuilder {
    /// Create a new graph builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration with markers and limits
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse source text into a document with built graph sections.
    ///
    /// # Arguments
    ///
    /// * `source` - YAML or JSON document text
    ///
    /// # Errors
    ///
    /// Returns [`MinigraphError::Config`] if the configured markers are
    /// unusable, and [`MinigraphError::Parse`] for every problem found in the
    /// document.
    pub fn parse(&self, source: &str) -> Result<Document, MinigraphError> {
        info!("Parsing document");

        self.config
            .markers()
            .validate()
            .map_err(|err| MinigraphError::Config(err.to_string()))?;

        let document = minigraph_parser::parse(source, &self.config.parse_config())
            .map_err(|err| MinigraphError::new_parse_error(err, source))?;

        debug!(sections = document.sections().len(); "Document parsed successfully");
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Render a document to DOT source.
    ///
    /// # Errors
    ///
    /// Returns [`MinigraphError::Export`] if an `html` or `csv` section cannot
    /// be turned into a label.
    pub fn render_dot(&self, document: &Document) -> Result<String, MinigraphError> {
        let mut renderer = DotRenderer::new();
        export::render_document(document, &mut renderer)?;
        Ok(renderer.to_dot())
    }

    /// Render a document to the given output format.
    ///
    /// Every format other than [`OutputFormat::Dot`] runs the Graphviz `dot`
    /// executable, which must be installed.
    ///
    /// # Errors
    ///
    /// Returns [`MinigraphError::Export`] for label errors, or if Graphviz
    /// cannot be run.
    pub fn render(
        &self,
        document: &Document,
        format: OutputFormat,
    ) -> Result<Vec<u8>, MinigraphError> {
        info!(format:% = format; "Rendering document");
        let source = self.render_dot(document)?;
        let output = dot::exec(source, format)?;
        info!(bytes = output.len(); "Document rendered successfully");
        Ok(output)
    }
}
