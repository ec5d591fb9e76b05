// crates/datex2-rs/src/xml/reader.rs

//! Builds an owned [`XmlElement`] tree from XML text using `roxmltree`.

use super::element::{XmlAttribute, XmlElement, XmlName};
use crate::error::DatexError;
use roxmltree::Node;

impl XmlElement {
    /// Parses a complete XML document and returns its root element.
    ///
    /// # Errors
    /// Returns `DatexError::XmlParsing` if the text is not well-formed XML
    /// or uses undeclared namespace prefixes.
    pub fn parse_str(xml_content: &str) -> Result<XmlElement, DatexError> {
        let document = roxmltree::Document::parse(xml_content)?;
        Ok(convert_node(document.root_element()))
    }
}

fn convert_name(namespace: Option<&str>, local_name: &str) -> XmlName {
    XmlName {
        namespace: namespace.map(str::to_string),
        local_name: local_name.to_string(),
    }
}

fn convert_node(node: Node<'_, '_>) -> XmlElement {
    let tag = node.tag_name();

    let attributes = node
        .attributes()
        .map(|a| XmlAttribute {
            name: convert_name(a.namespace(), a.name()),
            value: a.value().to_string(),
        })
        .collect();

    let mut children = Vec::new();
    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            children.push(convert_node(child));
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }

    // Leaf text is whitespace-normalized at the edges, so indentation around
    // child elements never counts as content.
    let trimmed = text.trim();
    XmlElement {
        name: convert_name(tag.namespace(), tag.name()),
        attributes,
        children,
        text: (!trimmed.is_empty()).then(|| trimmed.to_string()),
    }
}
