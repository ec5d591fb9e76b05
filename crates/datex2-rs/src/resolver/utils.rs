// crates/datex2-rs/src/resolver/utils.rs

//! Field accessors shared by all resolvers.

use super::FromXml;
use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::types::distinct;
use crate::xml::{Namespace, XmlElement, XmlValue};

/// A view of one element's children in the namespace of the type being read.
///
/// Optional accessors return `Ok(None)` when the child is absent and an
/// error when it is present but malformed.
#[derive(Clone, Copy)]
pub(super) struct Fields<'e, 'o> {
    element: &'e XmlElement,
    namespace: Namespace,
    options: &'o ParseOptions<'o>,
}

impl<'e, 'o> Fields<'e, 'o> {
    pub(super) fn new(element: &'e XmlElement, namespace: Namespace, options: &'o ParseOptions<'o>) -> Self {
        Self {
            element,
            namespace,
            options,
        }
    }

    /// The same element, read with fields declared in another namespace.
    pub(super) fn in_namespace(self, namespace: Namespace) -> Self {
        Self { namespace, ..self }
    }

    pub(super) fn options(&self) -> &'o ParseOptions<'o> {
        self.options
    }

    fn matching(&self, name: &'e str) -> impl Iterator<Item = &'e XmlElement> + 'e {
        self.element
            .children_named(self.namespace, name, self.options.allow_unqualified())
    }

    // --- Elements ---

    /// A child that may occur at most once.
    pub(super) fn optional_child(&self, name: &'static str) -> Result<Option<&'e XmlElement>, DatexError> {
        let mut matches = self.matching(name);
        let first = matches.next();
        let repeats = matches.count();
        if repeats > 0 {
            return Err(DatexError::TooMany {
                element: name,
                max: 1,
                actual: repeats + 1,
            });
        }
        Ok(first)
    }

    pub(super) fn mandatory_child(&self, name: &'static str) -> Result<&'e XmlElement, DatexError> {
        self.optional_child(name)?.ok_or_else(|| DatexError::MissingElement {
            parent: self.element.name.to_string(),
            element: name,
        })
    }

    pub(super) fn mandatory<T: FromXml>(&self, name: &'static str) -> Result<T, DatexError> {
        T::from_xml_with(self.mandatory_child(name)?, self.options)
    }

    pub(super) fn optional<T: FromXml>(&self, name: &'static str) -> Result<Option<T>, DatexError> {
        self.optional_child(name)?
            .map(|child| T::from_xml_with(child, self.options))
            .transpose()
    }

    /// All occurrences of a repeated child, de-duplicated.
    pub(super) fn collection<T: FromXml + PartialEq>(&self, name: &'static str) -> Result<Vec<T>, DatexError> {
        let parsed = self
            .matching(name)
            .map(|child| T::from_xml_with(child, self.options))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(distinct(parsed))
    }

    /// A repeated child with schema cardinality `min..=max`, checked after
    /// de-duplication.
    pub(super) fn bounded_collection<T: FromXml + PartialEq>(
        &self,
        name: &'static str,
        min: usize,
        max: Option<usize>,
    ) -> Result<Vec<T>, DatexError> {
        let items = self.collection(name)?;
        check_cardinality(name, items.len(), min, max)?;
        Ok(items)
    }

    // --- Leaf values ---

    pub(super) fn mandatory_value<T: XmlValue>(&self, name: &'static str) -> Result<T, DatexError> {
        text_value(self.mandatory_child(name)?, self.options)
    }

    pub(super) fn optional_value<T: XmlValue>(&self, name: &'static str) -> Result<Option<T>, DatexError> {
        self.optional_child(name)?
            .map(|child| text_value(child, self.options))
            .transpose()
    }

    pub(super) fn values<T: XmlValue + PartialEq>(&self, name: &'static str) -> Result<Vec<T>, DatexError> {
        let parsed = self
            .matching(name)
            .map(|child| text_value(child, self.options))
            .collect::<Result<Vec<T>, _>>()?;
        Ok(distinct(parsed))
    }

    pub(super) fn bounded_values<T: XmlValue + PartialEq>(
        &self,
        name: &'static str,
        min: usize,
        max: Option<usize>,
    ) -> Result<Vec<T>, DatexError> {
        let items = self.values(name)?;
        check_cardinality(name, items.len(), min, max)?;
        Ok(items)
    }

    // --- Attributes ---

    pub(super) fn mandatory_attribute<T: XmlValue>(&self, name: &'static str) -> Result<T, DatexError> {
        let raw = self.element.attribute(name).ok_or_else(|| DatexError::MissingAttribute {
            element: self.element.name.to_string(),
            attribute: name,
        })?;
        self.attribute_value(name, raw)
    }

    pub(super) fn optional_attribute<T: XmlValue>(&self, name: &'static str) -> Result<Option<T>, DatexError> {
        self.element
            .attribute(name)
            .map(|raw| self.attribute_value(name, raw))
            .transpose()
    }

    /// A mandatory attribute that must also be non-empty, such as `@id`.
    pub(super) fn identifier_attribute(&self, name: &'static str) -> Result<String, DatexError> {
        let value: String = self.mandatory_attribute(name)?;
        if value.trim().is_empty() {
            return Err(DatexError::InvalidValue {
                element: format!("{}/@{}", self.element.name, name),
                value,
                expected: "a non-empty identifier",
            });
        }
        Ok(value)
    }

    fn attribute_value<T: XmlValue>(&self, name: &'static str, raw: &str) -> Result<T, DatexError> {
        T::from_xml_text(raw, self.options).map_err(|expected| DatexError::InvalidValue {
            element: format!("{}/@{}", self.element.name, name),
            value: raw.to_string(),
            expected,
        })
    }
}

/// Converts an element's text into a leaf value.
pub(super) fn text_value<T: XmlValue>(element: &XmlElement, options: &ParseOptions<'_>) -> Result<T, DatexError> {
    T::from_xml_text(element.text(), options).map_err(|expected| DatexError::InvalidValue {
        element: element.name.to_string(),
        value: element.text().to_string(),
        expected,
    })
}

pub(super) fn check_cardinality(
    element: &'static str,
    actual: usize,
    min: usize,
    max: Option<usize>,
) -> Result<(), DatexError> {
    if actual < min {
        return Err(DatexError::TooFew { element, min, actual });
    }
    if let Some(max) = max {
        if actual > max {
            return Err(DatexError::TooMany { element, max, actual });
        }
    }
    Ok(())
}

/// The variant name used for dispatch: the local part of `xsi:type`, or the
/// element's own local name when no `xsi:type` is given.
pub(super) fn variant_name<'e>(element: &'e XmlElement, family: &'static str) -> &'e str {
    match element.xsi_type() {
        Some(type_name) => type_name,
        None => {
            log::warn!(
                "No xsi:type on {} element '{}'; dispatching on element name",
                family,
                element.name
            );
            &element.name.local_name
        }
    }
}
