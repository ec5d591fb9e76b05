// crates/datex2-rs/src/xml/element.rs

//! An owned, namespace-aware XML element tree.
//!
//! This is the in-memory form that the resolver reads from and the builder
//! produces. It keeps only what DATEX II needs: qualified names, attributes,
//! child elements and (trimmed) text content.

use super::namespace::Namespace;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A qualified XML name: optional namespace URI plus local name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XmlName {
    pub namespace: Option<String>,
    pub local_name: String,
}

impl XmlName {
    pub fn new(namespace: Namespace, local_name: &str) -> Self {
        Self {
            namespace: Some(namespace.uri().to_string()),
            local_name: local_name.to_string(),
        }
    }

    /// A name with an arbitrary namespace URI.
    pub fn with_uri(uri: &str, local_name: &str) -> Self {
        Self {
            namespace: Some(uri.to_string()),
            local_name: local_name.to_string(),
        }
    }

    /// A name without a namespace.
    pub fn unqualified(local_name: &str) -> Self {
        Self {
            namespace: None,
            local_name: local_name.to_string(),
        }
    }

    pub fn is_in(&self, namespace: Namespace) -> bool {
        self.namespace.as_deref() == Some(namespace.uri())
    }

    /// Matches on local name, and on namespace unless `allow_unqualified`
    /// lets a name without any namespace through.
    pub fn matches(&self, namespace: Namespace, local_name: &str, allow_unqualified: bool) -> bool {
        if self.local_name != local_name {
            return false;
        }
        match self.namespace.as_deref() {
            Some(uri) => uri == namespace.uri(),
            None => allow_unqualified,
        }
    }
}

impl fmt::Display for XmlName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace.as_deref() {
            None => f.write_str(&self.local_name),
            Some(uri) => match Namespace::from_uri(uri) {
                Some(ns) => write!(f, "{}:{}", ns.prefix(), self.local_name),
                None => write!(f, "{{{}}}{}", uri, self.local_name),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XmlAttribute {
    pub name: XmlName,
    pub value: String,
}

/// An XML element with its attributes, child elements and text.
///
/// Namespace declarations are not stored as attributes; the writer derives
/// them from the names used in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct XmlElement {
    pub name: XmlName,
    pub attributes: Vec<XmlAttribute>,
    pub children: Vec<XmlElement>,
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(name: XmlName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// A leaf element holding only text.
    pub fn with_text(name: XmlName, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(name)
        }
    }

    pub fn set_attribute(&mut self, name: XmlName, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(XmlAttribute { name, value }),
        }
    }

    /// Sets `xsi:type` to `prefix:TypeName`.
    pub fn set_xsi_type(&mut self, namespace: Namespace, type_name: &str) {
        self.set_attribute(
            Namespace::XmlSchemaInstance.name("type"),
            namespace.type_name(type_name),
        );
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Looks up an unqualified attribute (the DATEX II default) by local name.
    pub fn attribute(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local_name == local_name && a.name.namespace.is_none())
            .map(|a| a.value.as_str())
    }

    pub fn attribute_ns(&self, namespace: Namespace, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.local_name == local_name && a.name.is_in(namespace))
            .map(|a| a.value.as_str())
    }

    /// The local part of the `xsi:type` attribute, if present.
    ///
    /// The prefix is not resolved; DATEX II type names are unique across
    /// the namespaces this crate binds.
    pub fn xsi_type(&self) -> Option<&str> {
        self.attribute_ns(Namespace::XmlSchemaInstance, "type")
            .map(|value| match value.rsplit_once(':') {
                Some((_, local)) => local,
                None => value,
            })
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Child elements matching `namespace` and `local_name`.
    pub fn children_named<'a>(
        &'a self,
        namespace: Namespace,
        local_name: &'a str,
        allow_unqualified: bool,
    ) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children
            .iter()
            .filter(move |c| c.name.matches(namespace, local_name, allow_unqualified))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matching() {
        let qualified = Namespace::Common.name("values");
        let bare = XmlName::unqualified("values");

        assert!(qualified.matches(Namespace::Common, "values", false));
        assert!(!qualified.matches(Namespace::Facilities, "values", true));
        assert!(bare.matches(Namespace::Common, "values", true));
        assert!(!bare.matches(Namespace::Common, "values", false));
        assert!(!qualified.matches(Namespace::Common, "value", true));
    }

    #[test]
    fn test_name_display() {
        assert_eq!(Namespace::Facilities.name("name").to_string(), "fac:name");
        assert_eq!(XmlName::unqualified("x").to_string(), "x");
        assert_eq!(XmlName::with_uri("urn:a", "x").to_string(), "{urn:a}x");
    }

    #[test]
    fn test_xsi_type_local_part() {
        let mut el = XmlElement::new(Namespace::Facilities.name("operatingHours"));
        assert_eq!(el.xsi_type(), None);
        el.set_xsi_type(Namespace::Facilities, "OpenAllHours");
        assert_eq!(el.xsi_type(), Some("OpenAllHours"));
        assert_eq!(
            el.attribute_ns(Namespace::XmlSchemaInstance, "type"),
            Some("fac:OpenAllHours")
        );
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut el = XmlElement::new(XmlName::unqualified("a"));
        el.set_attribute(XmlName::unqualified("id"), "1");
        el.set_attribute(XmlName::unqualified("id"), "2");
        assert_eq!(el.attributes.len(), 1);
        assert_eq!(el.attribute("id"), Some("2"));
    }
}
