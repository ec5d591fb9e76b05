// crates/datex2-rs/src/error.rs

//! The single error type returned by every parse, build and validation path.

use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur while reading, validating or writing DATEX II data.
#[derive(Debug, Error)]
pub enum DatexError {
    /// The input text was not well-formed XML.
    #[error("XML parsing error: {0}")]
    XmlParsing(#[from] roxmltree::Error),

    /// An I/O error from the `quick-xml` writer.
    #[error("XML writing error: {0}")]
    XmlWriting(#[from] std::io::Error),

    /// An encoding error from the `quick-xml` writer.
    #[error("XML encoding error: {0}")]
    XmlEncoding(#[from] quick_xml::Error),

    /// The serialized document was not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// A mandatory child element was absent (e.g. `informationStatus`).
    #[error("missing mandatory element `{element}` in `{parent}`")]
    MissingElement {
        parent: String,
        element: &'static str,
    },

    /// A mandatory attribute was absent (e.g. `@id`).
    #[error("missing mandatory attribute `{attribute}` on `{element}`")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// An element or attribute held text that could not be converted.
    #[error("invalid value {value:?} in `{element}`: expected {expected}")]
    InvalidValue {
        element: String,
        value: String,
        expected: &'static str,
    },

    /// Fewer occurrences than the schema's lower bound.
    #[error("`{element}` must occur at least {min} time(s), found {actual}")]
    TooFew {
        element: &'static str,
        min: usize,
        actual: usize,
    },

    /// More occurrences than the schema's upper bound.
    #[error("`{element}` may occur at most {max} time(s), found {actual}")]
    TooMany {
        element: &'static str,
        max: usize,
        actual: usize,
    },

    /// An `xsi:type` or element name that no variant of the family accepts.
    #[error("unknown {family} variant `{name}`")]
    UnknownVariant { family: &'static str, name: String },

    /// A token outside a code list while parsing strictly.
    #[error("unknown {code_list} code `{value}`")]
    UnknownCode {
        code_list: &'static str,
        value: String,
    },

    /// A numeric quantity outside its permitted range.
    #[error("{quantity} value {value} is outside {min}..={max}")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A cross-field constraint was violated.
    #[error("validation error: {0}")]
    Validation(String),
}
