// crates/datex2-rs/src/xml/mod.rs

//! The XML layer: an owned element tree, the DATEX II namespaces, reading
//! via `roxmltree`, writing via `quick-xml`, and leaf value conversion.

mod element;
mod namespace;
mod reader;
mod value;
mod writer;

pub use element::{XmlAttribute, XmlElement, XmlName};
pub use namespace::Namespace;
pub use value::XmlValue;
