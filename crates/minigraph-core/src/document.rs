//! Decoded input documents.

use crate::{graph::GraphSection, value::Value};

/// A fully processed input document.
///
/// Graph sections hold the built nodes and edges. The auxiliary `html` and
/// `csv` sections are kept unprocessed; turning them into node labels is a
/// rendering concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    sections: Vec<GraphSection>,
    html: Vec<(String, Value)>,
    csv: Vec<(String, String)>,
}

impl Document {
    pub fn new(sections: Vec<GraphSection>) -> Self {
        Self {
            sections,
            ..Self::default()
        }
    }

    /// Attaches named markup trees to be rendered as HTML-label nodes.
    pub fn with_html(mut self, html: Vec<(String, Value)>) -> Self {
        self.html = html;
        self
    }

    /// Attaches named comma separated tables to be rendered as table nodes.
    pub fn with_csv(mut self, csv: Vec<(String, String)>) -> Self {
        self.csv = csv;
        self
    }

    /// Graph sections in document processing order: forward root first.
    pub fn sections(&self) -> &[GraphSection] {
        &self.sections
    }

    pub fn html(&self) -> &[(String, Value)] {
        &self.html
    }

    pub fn csv(&self) -> &[(String, String)] {
        &self.csv
    }

    /// Returns `true` if the document produces nothing to render.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|section| section.model().is_empty())
            && self.html.is_empty()
            && self.csv.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        attribute::Attributes,
        graph::{Direction, GraphModel},
        identifier::Id,
    };

    #[test]
    fn test_empty_document() {
        assert!(Document::default().is_empty());
        assert!(Document::new(vec![GraphSection::default()]).is_empty());
    }

    #[test]
    fn test_document_with_content() {
        let mut model = GraphModel::new();
        model.add_node(Id::new("doc_node"), &Attributes::new());

        let document = Document::new(vec![GraphSection::new(Direction::Forward, model)]);
        assert!(!document.is_empty());
        assert_eq!(document.sections().len(), 1);
    }

    #[test]
    fn test_auxiliary_sections() {
        let document = Document::default()
            .with_csv(vec![("table".to_string(), "a,b".to_string())])
            .with_html(vec![("label".to_string(), Value::single("b", "bold"))]);

        assert!(!document.is_empty());
        assert_eq!(document.csv()[0].0, "table");
        assert_eq!(document.html()[0].0, "label");
    }
}
