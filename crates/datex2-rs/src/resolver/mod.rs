// crates/datex2-rs/src/resolver/mod.rs

//! Resolves the public `types` from an `XmlElement` tree.
//!
//! Every type implements [`FromXml`]. Parsing stops at the first missing
//! mandatory element or attribute, or at the first child that fails, and the
//! child's error is returned unchanged. Child elements are matched by name,
//! so their order in the document does not matter and unknown elements are
//! ignored.

use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::xml::XmlElement;

// --- Sub-modules ---

mod common;
mod energy;
mod facilities;
mod location;
mod utils;

/// Parses a value from an element. The element's own name is not checked,
/// so the same type can be read from any element that carries it.
pub trait FromXml: Sized {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError>;

    /// Parses with the default (lenient) options.
    fn from_xml(element: &XmlElement) -> Result<Self, DatexError> {
        Self::from_xml_with(element, &ParseOptions::default())
    }
}
