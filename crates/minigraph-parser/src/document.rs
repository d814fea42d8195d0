//! Document decoding.
//!
//! Turns YAML (or JSON) text into a [`Document`]: the `graph` and
//! `reverse graph` roots are built into graph sections, the `html` and `csv`
//! sections are checked and kept as they are.

use log::{debug, info, warn};

use minigraph_core::{
    attribute::Attributes,
    document::Document,
    graph::{Direction, GraphSection},
    value::Value,
};

use crate::{
    builder::TreeWalker,
    config::ParseConfig,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    namespace::{UNMATCHED, partition},
    path::FragmentPath,
    tree::{Fragment, NodeTree},
};

const GRAPH: &str = "graph";
const REVERSE_GRAPH: &str = "reverse graph";
const HTML: &str = "html";
const CSV: &str = "csv";

/// Message `serde_yaml` gives when a document nests past its recursion limit.
const DECODER_RECURSION_LIMIT: &str = "recursion limit exceeded";

/// Sections of a document, before any graph is built.
#[derive(Debug, Default)]
struct Sections {
    graph: Option<Value>,
    reverse_graph: Option<Value>,
    html: Vec<(String, Value)>,
    csv: Vec<(String, String)>,
}

pub fn parse_document(source: &str, config: &ParseConfig) -> Result<Document, ParseError> {
    info!("Decoding document");
    if source.trim().is_empty() {
        debug!("Empty document");
        return Ok(Document::default());
    }

    let raw: serde_yaml::Value = serde_yaml::from_str(source).map_err(|err| {
        if err.to_string().contains(DECODER_RECURSION_LIMIT) {
            return Diagnostic::error(format!("nesting depth exceeds the decoder limit: {err}"))
                .with_code(ErrorCode::E101)
                .with_help("flatten the document; it nests deeper than any graph can");
        }
        let diagnostic = Diagnostic::error(format!("invalid document: {err}")).with_code(ErrorCode::E001);
        match err.location() {
            Some(location) => diagnostic.with_help(format!(
                "check the syntax near line {}, column {}",
                location.line(),
                location.column()
            )),
            None => diagnostic,
        }
    })?;

    let mut collector = DiagnosticCollector::new();
    let root = convert(raw, &FragmentPath::root(), &mut collector);
    let sections = split_sections(root, &mut collector);
    collector.finish()?;

    let Some(sections) = sections else {
        return Ok(Document::default());
    };

    info!("Building graph sections");
    let walker = TreeWalker::new(config);
    let roots = [
        (GRAPH, Direction::Forward, sections.graph),
        (REVERSE_GRAPH, Direction::Reverse, sections.reverse_graph),
    ];
    let mut graph_sections = Vec::new();
    for (key, direction, body) in roots {
        if let Some(body) = body {
            graph_sections.push(build_section(&walker, config, key, &body, direction)?);
        }
    }

    debug!(
        sections = graph_sections.len(),
        html = sections.html.len(),
        csv = sections.csv.len();
        "Document decoded"
    );
    Ok(Document::new(graph_sections)
        .with_html(sections.html)
        .with_csv(sections.csv))
}

/// Builds one graph root.
///
/// The attributes declared directly in the root's body are graph-level: the
/// node and edge defaults are split off by their markers, and the rest apply
/// to the graph itself.
fn build_section(
    walker: &TreeWalker<'_>,
    config: &ParseConfig,
    key: &str,
    body: &Value,
    direction: Direction,
) -> Result<GraphSection, Diagnostic> {
    let markers = config.markers();
    let root = Fragment::Entry(key, body);

    let attrs = NodeTree::new(markers.attribute()).attrs(root);
    for warning in root_namespace_warnings(&attrs, config, key) {
        warn!(root = key; "{warning}");
    }
    let mut groups = partition(&attrs, &[markers.node_defaults(), markers.edge_defaults()]);

    let model = walker.build_root(root, &FragmentPath::root().child(key))?;
    debug!(
        root = key,
        nodes = model.nodes_count(),
        edges = model.edges_count();
        "Graph root built"
    );

    Ok(GraphSection::new(direction, model)
        .with_graph_attributes(groups.take(UNMATCHED))
        .with_node_defaults(groups.take(markers.node_defaults()))
        .with_edge_defaults(groups.take(markers.edge_defaults())))
}

/// Warns about edge and cascade attributes on a graph root.
///
/// A root is not a node, so these keys end up as graph-level attributes with
/// their namespace prefix intact.
fn root_namespace_warnings(attrs: &Attributes, config: &ParseConfig, key: &str) -> Vec<Diagnostic> {
    let markers = config.markers();
    let namespaces = [markers.edge(), markers.cascade()];
    attrs
        .keys()
        .filter(|name| {
            namespaces
                .iter()
                .any(|marker| !marker.is_empty() && name.starts_with(marker))
        })
        .map(|name| {
            Diagnostic::warning(format!(
                "`{name}` is passed to the graph as is; a graph root has no node or edge to apply it to"
            ))
            .with_code(ErrorCode::E102)
            .with_path(FragmentPath::root().child(key))
            .with_help("move the attribute onto a node, or use the `node_`/`edge_` defaults")
        })
        .collect()
}

/// Splits the top-level mapping into its sections.
///
/// Returns `None` for a null document.
fn split_sections(root: Value, collector: &mut DiagnosticCollector) -> Option<Sections> {
    let entries = match root {
        Value::Null => return None,
        Value::Mapping(entries) => entries,
        other => {
            collector.emit(
                Diagnostic::error(format!("document is a {}, not a mapping", other.kind()))
                    .with_code(ErrorCode::E002)
                    .with_path(FragmentPath::root())
                    .with_help("start the document with a `graph:` or `reverse graph:` key"),
            );
            return None;
        }
    };

    let mut sections = Sections::default();
    for (key, value) in entries {
        let path = FragmentPath::root().child(key.as_str());
        match key.as_str() {
            GRAPH => sections.graph = Some(value),
            REVERSE_GRAPH => sections.reverse_graph = Some(value),
            HTML => sections.html = html_section(value, &path, collector),
            CSV => sections.csv = csv_section(value, &path, collector),
            _ => collector.emit(
                Diagnostic::warning(format!("unknown section `{key}` is ignored"))
                    .with_code(ErrorCode::E005)
                    .with_path(path)
                    .with_help("known sections are `graph`, `reverse graph`, `html` and `csv`"),
            ),
        }
    }
    Some(sections)
}

fn html_section(
    value: Value,
    path: &FragmentPath,
    collector: &mut DiagnosticCollector,
) -> Vec<(String, Value)> {
    match value {
        Value::Null => Vec::new(),
        Value::Mapping(entries) => entries,
        other => {
            collector.emit(auxiliary_error(HTML, &other, path));
            Vec::new()
        }
    }
}

fn csv_section(
    value: Value,
    path: &FragmentPath,
    collector: &mut DiagnosticCollector,
) -> Vec<(String, String)> {
    let entries = match value {
        Value::Null => return Vec::new(),
        Value::Mapping(entries) => entries,
        other => {
            collector.emit(auxiliary_error(CSV, &other, path));
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(name, table)| match table {
            Value::String(text) => Some((name, text)),
            other => {
                collector.emit(
                    Diagnostic::error(format!("table `{name}` is a {}, not text", other.kind()))
                        .with_code(ErrorCode::E004)
                        .with_path(path.child(name.as_str()))
                        .with_help("write the table as a block string of comma separated rows"),
                );
                None
            }
        })
        .collect()
}

fn auxiliary_error(section: &str, value: &Value, path: &FragmentPath) -> Diagnostic {
    Diagnostic::error(format!("`{section}` section is a {}, not a mapping", value.kind()))
        .with_code(ErrorCode::E004)
        .with_path(path.clone())
        .with_help(format!("`{section}` maps node names to their content"))
}

/// Converts a decoded YAML value, reporting unsupported mapping keys.
fn convert(value: serde_yaml::Value, path: &FragmentPath, collector: &mut DiagnosticCollector) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(number) => number
            .as_i64()
            .map(Value::Integer)
            .or_else(|| number.as_f64().map(Value::Float))
            .unwrap_or(Value::Null),
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .enumerate()
                .map(|(idx, item)| convert(item, &path.index(idx), collector))
                .collect(),
        ),
        serde_yaml::Value::Mapping(mapping) => Value::Mapping(
            mapping
                .into_iter()
                .filter_map(|(key, value)| {
                    let key = mapping_key(key, path, collector)?;
                    let value = convert(value, &path.child(key.as_str()), collector);
                    Some((key, value))
                })
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => convert(tagged.value, path, collector),
    }
}

fn mapping_key(
    key: serde_yaml::Value,
    path: &FragmentPath,
    collector: &mut DiagnosticCollector,
) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(number) => Some(number.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Tagged(tagged) => mapping_key(tagged.value, path, collector),
        other => {
            let kind = match other {
                serde_yaml::Value::Null => "null",
                serde_yaml::Value::Sequence(_) => "sequence",
                _ => "mapping",
            };
            collector.emit(
                Diagnostic::error(format!("{kind} cannot be used as a mapping key"))
                    .with_code(ErrorCode::E003)
                    .with_path(path.clone())
                    .with_help("node names must be strings; quote the key"),
            );
            None
        }
    }
}
