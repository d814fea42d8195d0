//! HTML-like node labels.
//!
//! A markup tree is a mapping from element name to content:
//!
//! - a scalar is the element's text;
//! - a mapping holds child elements, with `@`-prefixed keys as element
//!   attributes and `#text` as the element's text;
//! - a sequence repeats the element once per item;
//! - null is an empty element.
//!
//! Nested elements are written one per line, indented with tabs.

use thiserror::Error;

use minigraph_core::value::Value;

const INDENT: &str = "\t";
const ATTRIBUTE_PREFIX: char = '@';
const TEXT_KEY: &str = "#text";

#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("markup must map element names to content, found a {0}")]
    NotAnElement(&'static str),

    #[error("cannot read table: {0}")]
    Table(#[from] csv::Error),
}

/// Renders a markup tree as a DOT HTML label.
///
/// # Examples
///
/// ```
/// use minigraph::export::markup::html_label;
/// use minigraph_core::value::Value;
///
/// let tree = Value::single("b", "bold");
/// assert_eq!(html_label(&tree).unwrap(), "<\n<b>bold</b>\n>");
/// ```
///
/// # Errors
///
/// Returns [`MarkupError::NotAnElement`] if `tree` is not a mapping.
pub fn html_label(tree: &Value) -> Result<String, MarkupError> {
    Ok(format!("<\n{}\n>", unparse(tree)?))
}

/// Renders comma separated rows as a DOT HTML table label.
///
/// Rows may have different lengths. Surrounding whitespace of the whole text
/// is ignored, cells are kept as written.
///
/// # Errors
///
/// Returns [`MarkupError::Table`] if the text is not valid CSV.
pub fn csv_label(text: &str) -> Result<String, MarkupError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.trim().as_bytes());

    let rows = reader
        .records()
        .map(|record| record.map(|record| Value::single("td", Value::sequence(record.iter()))))
        .collect::<Result<Vec<_>, _>>()?;

    let table = Value::single(
        "table",
        Value::mapping([
            (format!("{ATTRIBUTE_PREFIX}cellspacing"), Value::from("0")),
            ("tr".to_string(), Value::Sequence(rows)),
        ]),
    );
    html_label(&table)
}

/// Serialises a markup tree without the label delimiters.
fn unparse(tree: &Value) -> Result<String, MarkupError> {
    let Value::Mapping(roots) = tree else {
        return Err(MarkupError::NotAnElement(tree.kind()));
    };

    let mut out = String::new();
    for (name, content) in roots {
        write_element(&mut out, name, content, 0);
    }
    Ok(out)
}

fn write_element(out: &mut String, name: &str, content: &Value, depth: usize) {
    match content {
        Value::Sequence(items) => {
            for item in items {
                write_single(out, name, item, depth);
            }
        }
        other => write_single(out, name, other, depth),
    }
}

fn write_single(out: &mut String, name: &str, content: &Value, depth: usize) {
    let mut attributes = Vec::new();
    let mut text = None;
    let mut children = Vec::new();
    match content {
        Value::Null => {}
        Value::Mapping(entries) => {
            for (key, value) in entries {
                if key == TEXT_KEY {
                    text = Some(value.to_string());
                } else if let Some(attribute) = key.strip_prefix(ATTRIBUTE_PREFIX) {
                    attributes.push((attribute, value.to_string()));
                } else {
                    children.push((key.as_str(), value));
                }
            }
        }
        scalar => text = Some(scalar.to_string()),
    }

    out.push_str(&INDENT.repeat(depth));
    out.push('<');
    out.push_str(name);
    for (attribute, value) in &attributes {
        out.push_str(&format!(
            " {attribute}=\"{}\"",
            htmlize::escape_attribute(value.as_str())
        ));
    }
    out.push('>');

    if !children.is_empty() {
        out.push('\n');
        for (child, value) in &children {
            write_element(out, child, value, depth + 1);
        }
    }
    if let Some(text) = &text {
        out.push_str(&htmlize::escape_text(text.as_str()));
    }
    if !children.is_empty() {
        out.push_str(&INDENT.repeat(depth));
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
    if depth > 0 {
        out.push('\n');
    }
}
