// crates/datex2-rs/src/builder/mod.rs

//! Builds namespace-qualified `XmlElement` trees from the public `types`.
//!
//! Absent optional fields produce no element, collections become repeated
//! siblings (duplicates dropped), and members of abstract families carry an
//! `xsi:type` naming their concrete type. Children are written in schema
//! order.

mod common;
mod energy;
mod facilities;
mod location;

use crate::types::distinct;
use crate::xml::{Namespace, XmlElement, XmlName, XmlValue};

/// Serializes a value into an element.
pub trait ToXml {
    /// The element name used by [`ToXml::to_xml`].
    fn element_name() -> XmlName
    where
        Self: Sized;

    /// Serializes under a caller-chosen element name.
    fn to_xml_as(&self, name: XmlName) -> XmlElement;

    fn to_xml(&self) -> XmlElement
    where
        Self: Sized,
    {
        self.to_xml_as(Self::element_name())
    }
}

/// Accumulates the children and attributes of one element.
///
/// Child names are qualified with the builder's current namespace, which
/// can be switched for fields declared by a different type.
pub(super) struct ElementBuilder {
    element: XmlElement,
    namespace: Namespace,
}

impl ElementBuilder {
    pub(super) fn new(name: XmlName, namespace: Namespace) -> Self {
        Self {
            element: XmlElement::new(name),
            namespace,
        }
    }

    pub(super) fn in_namespace(mut self, namespace: Namespace) -> Self {
        self.namespace = namespace;
        self
    }

    pub(super) fn xsi_type(mut self, namespace: Namespace, type_name: &str) -> Self {
        self.element.set_xsi_type(namespace, type_name);
        self
    }

    // --- Attributes ---

    pub(super) fn attribute<T: XmlValue>(mut self, name: &str, value: &T) -> Self {
        self.element
            .set_attribute(XmlName::unqualified(name), value.to_xml_text());
        self
    }

    pub(super) fn optional_attribute<T: XmlValue>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.attribute(name, v),
            None => self,
        }
    }

    // --- Leaf values ---

    pub(super) fn value<T: XmlValue>(mut self, name: &str, value: &T) -> Self {
        self.element.push(XmlElement::with_text(
            self.namespace.name(name),
            value.to_xml_text(),
        ));
        self
    }

    pub(super) fn optional_value<T: XmlValue>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.value(name, v),
            None => self,
        }
    }

    pub(super) fn values<T: XmlValue + PartialEq>(self, name: &str, values: &[T]) -> Self {
        distinct(values.iter()).into_iter().fold(self, |b, v| b.value(name, v))
    }

    // --- Child elements ---

    pub(super) fn child<T: ToXml>(mut self, name: &str, value: &T) -> Self {
        let child = value.to_xml_as(self.namespace.name(name));
        self.element.push(child);
        self
    }

    pub(super) fn optional_child<T: ToXml>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            Some(v) => self.child(name, v),
            None => self,
        }
    }

    pub(super) fn children<T: ToXml + PartialEq>(self, name: &str, values: &[T]) -> Self {
        distinct(values.iter()).into_iter().fold(self, |b, v| b.child(name, v))
    }

    /// Appends an already-built element unchanged.
    pub(super) fn raw(mut self, element: Option<&XmlElement>) -> Self {
        if let Some(element) = element {
            self.element.push(element.clone());
        }
        self
    }

    /// Appends an element built by `build`, named in the current namespace.
    pub(super) fn nested(
        mut self,
        name: &str,
        namespace: Namespace,
        build: impl FnOnce(ElementBuilder) -> ElementBuilder,
    ) -> Self {
        let nested = build(ElementBuilder::new(self.namespace.name(name), namespace));
        self.element.push(nested.build());
        self
    }

    pub(super) fn build(self) -> XmlElement {
        self.element
    }
}
