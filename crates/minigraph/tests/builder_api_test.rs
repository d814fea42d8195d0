//! Integration tests for the GraphBuilder API
//!
//! These tests verify that the public API works and is usable.

use minigraph::{
    GraphBuilder, MinigraphError, OutputFormat,
    config::{AppConfig, LimitsConfig, Markers},
    export::{RecordingRenderer, markup::MarkupError, render_document},
    identifier::Id,
    value::Value,
};

#[test]
fn test_builder_api_exists() {
    let _builder = GraphBuilder::default();
}

#[test]
fn test_parse_simple_document() {
    let source = "graph:\n  parent:\n    _attr: 0\n    child: ~\n";

    let builder = GraphBuilder::default();
    let result = builder.parse(source);
    assert!(
        result.is_ok(),
        "Should parse valid document: {:?}",
        result.err()
    );

    let document = result.unwrap();
    let model = document.sections()[0].model();
    assert_eq!(model.node(Id::new("parent")).unwrap()["attr"], Value::from(0i64));
    assert!(model.node(Id::new("child")).unwrap().is_empty());
    assert!(model.edge(Id::new("parent"), Id::new("child")).unwrap().is_empty());
}

#[test]
fn test_render_dot() {
    let source = r#"
graph:
  _rankdir: LR
  _node_shape: box
  web:
    _cascade_color: blue
    api:
      _arrow_label: calls
      db: ~
reverse graph:
  start: finish
"#;

    let builder = GraphBuilder::default();
    let document = builder.parse(source).expect("Failed to parse document");
    let dot = builder.render_dot(&document).expect("Failed to render");

    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("\"rankdir\"=\"LR\""));
    assert!(dot.contains("\"shape\"=\"box\""));
    assert!(dot.contains("\"api\" -> \"web\""));
    assert!(dot.contains("\"db\" -> \"api\""));
    assert!(dot.contains("\"start\" -> \"finish\""));
    assert!(dot.contains("\"label\"=\"calls\""));
    assert!(dot.contains("\"color\"=\"blue\""));
}

#[test]
fn test_render_dot_format_does_not_need_graphviz() {
    let builder = GraphBuilder::default();
    let document = builder.parse("graph: lonely").unwrap();

    let bytes = builder
        .render(&document, OutputFormat::Dot)
        .expect("Failed to render");

    let dot = String::from_utf8(bytes).unwrap();
    assert!(dot.contains("\"lonely\""));
}

#[test]
fn test_auxiliary_sections_become_labels() {
    let source = r##"
html:
  legend:
    font:
      "@color": red
      "#text": Legend
csv:
  table: |
    name,kind
    web,service
"##;

    let builder = GraphBuilder::default();
    let document = builder.parse(source).unwrap();

    let mut renderer = RecordingRenderer::new();
    render_document(&document, &mut renderer).unwrap();

    let legend = renderer.node("legend").unwrap();
    assert_eq!(
        legend["label"],
        Value::from("<\n<font color=\"red\">Legend</font>\n>")
    );
    let table = renderer.node("table").unwrap();
    assert!(table["label"].as_str().unwrap().contains("<td>service</td>"));
    assert_eq!(table["shape"], Value::from("plaintext"));
}

#[test]
fn test_builder_with_config() {
    let config: AppConfig = toml::from_str(
        r#"
        [markers]
        attribute = "."

        [limits]
        max_depth = 2
        "#,
    )
    .unwrap();
    let builder = GraphBuilder::new(config);

    let document = builder.parse("graph:\n  a:\n    .color: red\n").unwrap();
    assert_eq!(
        document.sections()[0].model().node(Id::new("a")).unwrap()["color"],
        Value::from("red")
    );

    let result = builder.parse("graph:\n  a:\n    b:\n      c: ~\n");
    assert!(matches!(result, Err(MinigraphError::Parse { .. })));
}

#[test]
fn test_invalid_markers_are_a_config_error() {
    let config = AppConfig::new(Markers::default().with_attribute(""), LimitsConfig::default());
    let builder = GraphBuilder::new(config);

    let result = builder.parse("graph: a");
    assert!(matches!(result, Err(MinigraphError::Config(_))));
}

#[test]
fn test_parse_invalid_document_returns_error() {
    let builder = GraphBuilder::default();

    let result = builder.parse("graph: [unclosed");
    match result {
        Err(MinigraphError::Parse { err, src }) => {
            assert_eq!(err.diagnostics().len(), 1);
            assert_eq!(src, "graph: [unclosed");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_builder_reusability() {
    let builder = GraphBuilder::default();

    let first = builder.parse("graph: {one: two}").unwrap();
    let second = builder.parse("graph: {three: four}").unwrap();

    let dot1 = builder.render_dot(&first).unwrap();
    let dot2 = builder.render_dot(&second).unwrap();

    assert!(dot1.contains("\"two\" -> \"one\""));
    assert!(dot2.contains("\"four\" -> \"three\""));
    assert!(!dot2.contains("\"one\""));
}

#[test]
fn test_markup_error_keeps_its_source() {
    let builder = GraphBuilder::default();
    let document = builder.parse("html:\n  broken: just text\n").unwrap();

    let err = builder.render(&document, OutputFormat::Dot).unwrap_err();
    assert!(matches!(err, MinigraphError::Export(_)));

    let export_err = std::error::Error::source(&err).expect("export error is the source");
    assert!(export_err.to_string().contains("broken"));
    let markup_err = export_err.source().expect("markup error is kept");
    assert!(markup_err.downcast_ref::<MarkupError>().is_some());
}
