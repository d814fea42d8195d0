//! Hand-off of built documents to graph renderers.

pub mod dot;
pub mod markup;

use std::{fmt, str::FromStr};

use log::{debug, trace};

use minigraph_core::{attribute::Attributes, document::Document, value::Value};

use markup::MarkupError;

const HTML_SECTION: &str = "html";
const CSV_SECTION: &str = "csv";

/// A renderer that draws named nodes and directed edges.
///
/// Every call merges into what the renderer has already received: setting
/// graph attributes twice keeps the keys of both calls, later values win.
pub trait GraphRenderer {
    fn set_graph_attributes(&mut self, attrs: &Attributes);

    fn set_node_defaults(&mut self, attrs: &Attributes);

    fn set_edge_defaults(&mut self, attrs: &Attributes);

    fn add_node(&mut self, name: &str, attrs: &Attributes);

    /// Adds an edge drawn from `from` to `to`.
    fn add_edge(&mut self, from: &str, to: &str, attrs: &Attributes);
}

/// Feeds a document to a renderer.
///
/// Graph sections come first, in document order: their graph-level
/// attributes, then every node, then every edge oriented by the section's
/// direction. The `html` and `csv` sections follow as plain-shaped nodes
/// labelled with their markup.
///
/// # Errors
///
/// Returns [`Error::Markup`] if an `html` or `csv` entry cannot be turned into
/// a label.
pub fn render_document<R>(document: &Document, renderer: &mut R) -> Result<(), Error>
where
    R: GraphRenderer + ?Sized,
{
    for section in document.sections() {
        renderer.set_graph_attributes(section.graph_attributes());
        renderer.set_node_defaults(section.node_defaults());
        renderer.set_edge_defaults(section.edge_defaults());

        let model = section.model();
        for (id, attrs) in model.nodes() {
            renderer.add_node(&id.name(), attrs);
        }
        for (parent, child, attrs) in model.edges() {
            let (from, to) = section.direction().orient(parent, child);
            renderer.add_edge(&from.name(), &to.name(), attrs);
        }
        debug!(
            direction:? = section.direction(),
            nodes = model.nodes_count(),
            edges = model.edges_count();
            "Section handed to renderer"
        );
    }

    for (name, tree) in document.html() {
        let label = markup::html_label(tree)
            .map_err(|source| Error::markup(HTML_SECTION, name, source))?;
        renderer.add_node(name, &label_attributes(label));
        trace!(name = name.as_str(); "Added html node");
    }

    for (name, text) in document.csv() {
        let label = markup::csv_label(text)
            .map_err(|source| Error::markup(CSV_SECTION, name, source))?;
        renderer.add_node(name, &label_attributes(label));
        trace!(name = name.as_str(); "Added csv node");
    }

    Ok(())
}

fn label_attributes(label: String) -> Attributes {
    Attributes::from([
        ("label".to_string(), Value::String(label)),
        ("shape".to_string(), Value::from("plaintext")),
    ])
}

/// Output formats of a rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
    Pdf,
    /// The DOT source itself, without running Graphviz.
    Dot,
}

impl OutputFormat {
    /// File extension conventionally used for the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "pdf" => Ok(OutputFormat::Pdf),
            "dot" | "gv" => Ok(OutputFormat::Dot),
            other => Err(format!(
                "unknown output format `{other}`, expected one of: png, svg, pdf, dot"
            )),
        }
    }
}

/// Records every renderer call in memory.
///
/// Useful for inspecting exactly what a document hands to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingRenderer {
    graph_attributes: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
    nodes: Vec<(String, Attributes)>,
    edges: Vec<(String, String, Attributes)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    pub fn node_defaults(&self) -> &Attributes {
        &self.node_defaults
    }

    pub fn edge_defaults(&self) -> &Attributes {
        &self.edge_defaults
    }

    /// Nodes in the order they were added, repeats included.
    pub fn nodes(&self) -> &[(String, Attributes)] {
        &self.nodes
    }

    /// `(from, to, attrs)` edges in the order they were added.
    pub fn edges(&self) -> &[(String, String, Attributes)] {
        &self.edges
    }

    /// Returns the attributes of the last node added under `name`.
    pub fn node(&self, name: &str) -> Option<&Attributes> {
        self.nodes
            .iter()
            .rev()
            .find(|(node, _)| node == name)
            .map(|(_, attrs)| attrs)
    }
}

impl GraphRenderer for RecordingRenderer {
    fn set_graph_attributes(&mut self, attrs: &Attributes) {
        self.graph_attributes.extend(attrs.clone());
    }

    fn set_node_defaults(&mut self, attrs: &Attributes) {
        self.node_defaults.extend(attrs.clone());
    }

    fn set_edge_defaults(&mut self, attrs: &Attributes) {
        self.edge_defaults.extend(attrs.clone());
    }

    fn add_node(&mut self, name: &str, attrs: &Attributes) {
        self.nodes.push((name.to_string(), attrs.clone()));
    }

    fn add_edge(&mut self, from: &str, to: &str, attrs: &Attributes) {
        self.edges
            .push((from.to_string(), to.to_string(), attrs.clone()));
    }
}

#[derive(Debug)]
pub enum Error {
    /// An `html` or `csv` entry that cannot be turned into a label.
    Markup {
        section: &'static str,
        name: String,
        source: MarkupError,
    },
    Io(std::io::Error),
}

impl Error {
    fn markup(section: &'static str, name: &str, source: MarkupError) -> Self {
        Self::Markup {
            section,
            name: name.to_string(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup {
                section,
                name,
                source,
            } => write!(f, "Markup error: {section} `{name}`: {source}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Markup { source, .. } => Some(source),
            Self::Io(err) => Some(err),
        }
    }
}
