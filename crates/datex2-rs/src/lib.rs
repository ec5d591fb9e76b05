// crates/datex2-rs/src/lib.rs

#![doc = "Parses, validates and generates DATEX II v3 energy infrastructure publications."]
#![doc = ""]
#![doc = "The crate maps the `common`, `facilities`, `energyInfrastructure`,"]
#![doc = "`locationReferencing` and `locationExtension` namespaces onto plain Rust types."]
#![doc = ""]
#![doc = "It provides:"]
#![doc = "- `load_publication_from_str`: Parsing a table publication from an XML document."]
#![doc = "- `save_publication_to_string`: Serializing a publication back into XML."]
#![doc = "- `FromXml` / `ToXml`: Element-level conversion for every model type."]
#![doc = "- Open code lists (`types::CodeList`) that keep unknown tokens, and an"]
#![doc = "  explicit `CodeListRegistry` for strict parsing with extensions."]
#![doc = "- Validity evaluation of periods and operating hours (`schedule`)."]

// --- Crate Modules ---

mod builder;
mod error;
mod options;
mod parser;
mod resolver;
mod schedule;
pub mod types;
mod xml;

// --- Public API Re-exports ---

pub use builder::ToXml;
pub use error::DatexError;
pub use options::{CodeListPolicy, NamespacePolicy, ParseOptions};
pub use parser::{
    load_publication_from_str, load_publication_from_str_with, parse_from_str,
    parse_from_str_with, save_publication_to_string, write_to_string,
};
pub use resolver::FromXml;
pub use schedule::{NoSpecialDays, SpecialDayCalendar};
pub use types::{CodeList, CodeListRegistry, EnergyInfrastructureTablePublication};
pub use xml::{Namespace, XmlAttribute, XmlElement, XmlName, XmlValue};
