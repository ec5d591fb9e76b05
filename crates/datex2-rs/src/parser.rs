// crates/datex2-rs/src/parser.rs

//! Entry points that read and write whole XML documents.
//!
//! Text is converted to an `XmlElement` tree first and then resolved into the
//! public types; writing goes the opposite way through the builder.

use crate::builder::ToXml;
use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::resolver::FromXml;
use crate::types::EnergyInfrastructureTablePublication;
use crate::xml::XmlElement;

/// Parses an energy infrastructure table publication from an XML document.
///
/// Uses the default, lenient [`ParseOptions`]: unknown code tokens are kept
/// and unqualified children are accepted.
///
/// # Errors
/// Returns a `DatexError` if the document is not well-formed XML, a
/// mandatory element is missing, or a value does not satisfy its type.
pub fn load_publication_from_str(
    xml_content: &str,
) -> Result<EnergyInfrastructureTablePublication, DatexError> {
    load_publication_from_str_with(xml_content, &ParseOptions::default())
}

/// Parses an energy infrastructure table publication with explicit options.
pub fn load_publication_from_str_with(
    xml_content: &str,
    options: &ParseOptions<'_>,
) -> Result<EnergyInfrastructureTablePublication, DatexError> {
    let publication: EnergyInfrastructureTablePublication =
        parse_from_str_with(xml_content, options)?;
    log::debug!(
        "Loaded publication with {} table(s) and {} site(s)",
        publication.tables.len(),
        publication.sites().count()
    );
    Ok(publication)
}

/// Serializes a publication into a complete XML document.
///
/// # Errors
/// Returns a `DatexError` only if the XML writer fails.
pub fn save_publication_to_string(
    publication: &EnergyInfrastructureTablePublication,
) -> Result<String, DatexError> {
    let xml = write_to_string(publication)?;
    log::debug!("Saved publication ({} bytes)", xml.len());
    Ok(xml)
}

/// Parses any model type from an XML document whose root element holds it.
pub fn parse_from_str<T: FromXml>(xml_content: &str) -> Result<T, DatexError> {
    parse_from_str_with(xml_content, &ParseOptions::default())
}

pub fn parse_from_str_with<T: FromXml>(
    xml_content: &str,
    options: &ParseOptions<'_>,
) -> Result<T, DatexError> {
    let root = XmlElement::parse_str(xml_content)?;
    T::from_xml_with(&root, options)
}

/// Serializes any model type as the root of an XML document, using its
/// default element name.
pub fn write_to_string<T: ToXml>(value: &T) -> Result<String, DatexError> {
    value.to_xml().to_xml_string()
}
