// crates/datex2-rs/src/xml/writer.rs

//! Serializes an [`XmlElement`] tree to text with the `quick-xml` event writer.
//!
//! All namespaces used anywhere in the tree are declared once on the root.
//! Known DATEX II namespaces get their conventional prefixes; any other
//! namespace (typically inside extension content) gets `ns0`, `ns1`, ...

use super::element::{XmlElement, XmlName};
use super::namespace::Namespace;
use crate::error::DatexError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Bound to the `xml` prefix by definition; it must never be declared.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Maps namespace URIs to the prefixes used in the written document.
#[derive(Debug, Default)]
struct PrefixMap {
    entries: Vec<(String, String)>,
    generated: usize,
}

impl PrefixMap {
    fn collect(root: &XmlElement) -> Self {
        let mut map = PrefixMap::default();
        map.visit(root);
        // Keep declarations in a stable order: known namespaces first.
        map.entries.sort_by_key(|(uri, _)| {
            Namespace::from_uri(uri)
                .and_then(|ns| Namespace::ALL.iter().position(|n| *n == ns))
                .unwrap_or(Namespace::ALL.len())
        });
        map
    }

    fn visit(&mut self, element: &XmlElement) {
        self.add_name(&element.name);
        for attribute in &element.attributes {
            self.add_name(&attribute.name);
            // `xsi:type` values reference a namespace by prefix.
            if attribute.name.is_in(Namespace::XmlSchemaInstance) && attribute.name.local_name == "type" {
                if let Some(ns) = attribute
                    .value
                    .split_once(':')
                    .and_then(|(prefix, _)| Namespace::from_prefix(prefix))
                {
                    self.add_uri(ns.uri());
                }
            }
        }
        for child in &element.children {
            self.visit(child);
        }
    }

    fn add_name(&mut self, name: &XmlName) {
        if let Some(uri) = name.namespace.as_deref() {
            self.add_uri(uri);
        }
    }

    fn add_uri(&mut self, uri: &str) {
        if uri == XML_NAMESPACE || self.entries.iter().any(|(u, _)| u == uri) {
            return;
        }
        let prefix = match Namespace::from_uri(uri) {
            Some(ns) => ns.prefix().to_string(),
            None => {
                let p = format!("ns{}", self.generated);
                self.generated += 1;
                p
            }
        };
        self.entries.push((uri.to_string(), prefix));
    }

    fn qualify(&self, name: &XmlName) -> String {
        match name.namespace.as_deref() {
            None => name.local_name.clone(),
            Some(XML_NAMESPACE) => format!("xml:{}", name.local_name),
            Some(uri) => {
                let prefix = self
                    .entries
                    .iter()
                    .find(|(u, _)| u == uri)
                    .map(|(_, p)| p.as_str())
                    .unwrap_or_default();
                format!("{}:{}", prefix, name.local_name)
            }
        }
    }
}

impl XmlElement {
    /// Writes this element as a complete, indented UTF-8 XML document.
    ///
    /// # Errors
    /// Returns an error if the underlying writer fails.
    pub fn to_xml_string(&self) -> Result<String, DatexError> {
        let prefixes = PrefixMap::collect(self);
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut writer, self, &prefixes, true)?;

        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &XmlElement,
    prefixes: &PrefixMap,
    is_root: bool,
) -> Result<(), DatexError> {
    let tag = prefixes.qualify(&element.name);
    let mut start = BytesStart::new(tag.as_str());

    if is_root {
        for (uri, prefix) in &prefixes.entries {
            let key = format!("xmlns:{}", prefix);
            start.push_attribute((key.as_str(), uri.as_str()));
        }
    }
    for attribute in &element.attributes {
        let key = prefixes.qualify(&attribute.name);
        start.push_attribute((key.as_str(), attribute.value.as_str()));
    }

    if element.children.is_empty() && element.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(writer, child, prefixes, false)?;
    }
    writer.write_event(Event::End(BytesEnd::new(tag.as_str())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declares_used_namespaces_on_root() {
        let mut root = XmlElement::new(Namespace::Facilities.name("operatingHours"));
        root.set_xsi_type(Namespace::Facilities, "OpenAllHours");

        let xml = root.to_xml_string().unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("xmlns:fac=\"http://datex2.eu/schema/3/facilities\""));
        assert!(xml.contains("xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""));
        assert!(xml.contains("xsi:type=\"fac:OpenAllHours\""));
        assert!(!xml.contains("xmlns:egi"));
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let mut root = XmlElement::with_text(Namespace::Common.name("value"), "a < b & c");
        root.set_attribute(XmlName::unqualified("lang"), "\"en\"");

        let xml = root.to_xml_string().unwrap();
        assert!(xml.contains("a &lt; b &amp; c"));
        assert!(xml.contains("lang=\"&quot;en&quot;\""));
    }

    #[test]
    fn test_unknown_namespace_gets_generated_prefix() {
        let mut root = XmlElement::new(Namespace::Facilities.name("_facilityObjectExtension"));
        root.push(XmlElement::with_text(XmlName::with_uri("urn:vendor", "tariff"), "A1"));

        let xml = root.to_xml_string().unwrap();
        assert!(xml.contains("xmlns:ns0=\"urn:vendor\""));
        assert!(xml.contains("<ns0:tariff>A1</ns0:tariff>"));
    }

    #[test]
    fn test_xml_prefix_is_never_declared() {
        let mut root = XmlElement::new(Namespace::Facilities.name("_facilityObjectExtension"));
        let mut note = XmlElement::with_text(XmlName::with_uri("urn:vendor", "note"), "Hallo");
        note.set_attribute(XmlName::with_uri(XML_NAMESPACE, "lang"), "de");
        root.push(note);

        let xml = root.to_xml_string().unwrap();
        assert!(!xml.contains(XML_NAMESPACE), "Reserved namespace declared:\n{}", xml);
        assert!(xml.contains("<ns0:note xml:lang=\"de\">Hallo</ns0:note>"));

        let parsed = XmlElement::parse_str(&xml).unwrap();
        assert_eq!(parsed, root);
    }

    #[test]
    fn test_write_then_read_preserves_tree() {
        let mut root = XmlElement::new(Namespace::Common.name("values"));
        let mut value = XmlElement::with_text(Namespace::Common.name("value"), "Bahnhof");
        value.set_attribute(XmlName::unqualified("lang"), "de");
        root.push(value);

        let xml = root.to_xml_string().unwrap();
        let parsed = XmlElement::parse_str(&xml).unwrap();
        assert_eq!(parsed, root);
    }
}
