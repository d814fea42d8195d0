//! Graphviz DOT renderer.

use dot_structures::{
    Attribute, Edge, EdgeTy, Graph, GraphAttributes, Id, Node, NodeId, Stmt, Vertex,
};
use graphviz_rust::{
    cmd::{CommandArg, Format},
    printer::{DotPrinter, PrinterContext},
};
use log::{debug, info};

use minigraph_core::{attribute::Attributes, value::Value};

use crate::export::{Error, GraphRenderer, OutputFormat};

/// Builds a directed DOT graph from renderer calls.
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    graph_attributes: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
    stmts: Vec<Stmt>,
}

impl DotRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the graph built so far.
    ///
    /// Graph-level statements come first, then nodes and edges in the order
    /// they were added.
    pub fn graph(&self) -> Graph {
        let mut stmts = Vec::with_capacity(self.stmts.len() + 3);
        if !self.graph_attributes.is_empty() {
            stmts.push(Stmt::GAttribute(GraphAttributes::Graph(attributes(
                &self.graph_attributes,
            ))));
        }
        if !self.node_defaults.is_empty() {
            stmts.push(Stmt::GAttribute(GraphAttributes::Node(attributes(
                &self.node_defaults,
            ))));
        }
        if !self.edge_defaults.is_empty() {
            stmts.push(Stmt::GAttribute(GraphAttributes::Edge(attributes(
                &self.edge_defaults,
            ))));
        }
        stmts.extend(self.stmts.iter().cloned());

        Graph::DiGraph {
            id: Id::Anonymous(String::new()),
            strict: false,
            stmts,
        }
    }

    /// Prints the graph as DOT source.
    pub fn to_dot(&self) -> String {
        self.graph().print(&mut PrinterContext::default())
    }
}

impl GraphRenderer for DotRenderer {
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
        self.stmts.push(Stmt::Node(Node {
            id: node_id(name),
            attributes: attributes(attrs),
        }));
    }

    fn add_edge(&mut self, from: &str, to: &str, attrs: &Attributes) {
        self.stmts.push(Stmt::Edge(Edge {
            ty: EdgeTy::Pair(Vertex::N(node_id(from)), Vertex::N(node_id(to))),
            attributes: attributes(attrs),
        }));
    }
}

/// Runs Graphviz `dot` on DOT source.
///
/// [`OutputFormat::Dot`] returns the source unchanged.
///
/// # Errors
///
/// Returns [`Error::Io`] if the `dot` executable cannot be run or fails.
pub fn exec(dot: String, format: OutputFormat) -> Result<Vec<u8>, Error> {
    let format = match format {
        OutputFormat::Dot => return Ok(dot.into_bytes()),
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
    };

    info!(format:? = format; "Running Graphviz");
    let output = graphviz_rust::exec_dot(dot, vec![CommandArg::Format(format)]).map_err(Error::Io)?;
    debug!(bytes = output.len(); "Graphviz finished");
    Ok(output)
}

fn node_id(name: &str) -> NodeId {
    NodeId(quoted(name), None)
}

fn attributes(attrs: &Attributes) -> Vec<Attribute> {
    attrs
        .iter()
        .map(|(key, value)| Attribute(quoted(key), attribute_value(value)))
        .collect()
}

/// Values written between angle brackets are HTML labels, everything else
/// is a quoted string.
fn attribute_value(value: &Value) -> Id {
    match value {
        Value::String(s) if s.starts_with('<') && s.ends_with('>') => Id::Html(s.clone()),
        other => quoted(&other.to_string()),
    }
}

/// Quotes `text` as a DOT string.
///
/// Quotes are escaped. Backslashes stay as written so Graphviz escapes such
/// as `\l` keep working, except for a run that ends the text or precedes a
/// quote, which is doubled so it cannot swallow the quote after it.
fn quoted(text: &str) -> Id {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('"');
    let mut backslashes = 0;
    for ch in text.chars() {
        match ch {
            '\\' => backslashes += 1,
            '"' => {
                escaped.push_str(&"\\".repeat(backslashes * 2));
                escaped.push_str("\\\"");
                backslashes = 0;
            }
            other => {
                escaped.push_str(&"\\".repeat(backslashes));
                escaped.push(other);
                backslashes = 0;
            }
        }
    }
    escaped.push_str(&"\\".repeat(backslashes * 2));
    escaped.push('"');
    Id::Escaped(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, Value)]) -> Attributes {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_quoted_ids() {
        assert_eq!(quoted("plain"), Id::Escaped("\"plain\"".to_string()));
        assert_eq!(
            quoted("say \"hi\""),
            Id::Escaped("\"say \\\"hi\\\"\"".to_string())
        );
    }

    #[test]
    fn test_quoted_backslashes() {
        assert_eq!(quoted("dir\\"), Id::Escaped("\"dir\\\\\"".to_string()));
        assert_eq!(
            quoted("a\\\"b"),
            Id::Escaped("\"a\\\\\\\"b\"".to_string())
        );
        assert_eq!(quoted("left\\l"), Id::Escaped("\"left\\l\"".to_string()));
    }

    #[test]
    fn test_backslash_names_produce_valid_dot() {
        let mut renderer = DotRenderer::new();
        renderer.add_node("dir\\", &attrs(&[("label", Value::from("C:\\"))]));
        renderer.add_edge("dir\\", "quote\\\"", &Attributes::new());

        let dot = renderer.to_dot();

        assert!(graphviz_rust::parse(&dot).is_ok(), "invalid DOT:\n{dot}");
    }

    #[test]
    fn test_html_values() {
        assert_eq!(
            attribute_value(&Value::from("<<b>x</b>>")),
            Id::Html("<<b>x</b>>".to_string())
        );
        assert_eq!(
            attribute_value(&Value::from(3i64)),
            Id::Escaped("\"3\"".to_string())
        );
    }

    #[test]
    fn test_dot_output() {
        let mut renderer = DotRenderer::new();
        renderer.set_graph_attributes(&attrs(&[("rankdir", Value::from("LR"))]));
        renderer.set_node_defaults(&attrs(&[("shape", Value::from("box"))]));
        renderer.add_node("dot_a", &attrs(&[("color", Value::from("red"))]));
        renderer.add_node("dot_b", &Attributes::new());
        renderer.add_edge("dot_b", "dot_a", &attrs(&[("label", Value::from("uses"))]));

        let dot = renderer.to_dot();

        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("\"rankdir\"=\"LR\""));
        assert!(dot.contains("\"shape\"=\"box\""));
        assert!(dot.contains("\"dot_a\""));
        assert!(dot.contains("\"dot_b\" -> \"dot_a\""));
        assert!(dot.contains("\"label\"=\"uses\""));
    }

    #[test]
    fn test_graph_statement_order() {
        let mut renderer = DotRenderer::new();
        renderer.add_node("order_x", &Attributes::new());
        renderer.set_edge_defaults(&attrs(&[("color", Value::from("gray"))]));

        let Graph::DiGraph { stmts, .. } = renderer.graph() else {
            panic!("expected a directed graph");
        };
        assert!(matches!(stmts[0], Stmt::GAttribute(GraphAttributes::Edge(_))));
        assert!(matches!(stmts[1], Stmt::Node(_)));
    }

    #[test]
    fn test_dot_format_skips_graphviz() {
        let bytes = exec("digraph {}".to_string(), OutputFormat::Dot).unwrap();
        assert_eq!(bytes, b"digraph {}");
    }
}
