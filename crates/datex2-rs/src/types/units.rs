// crates/datex2-rs/src/types/units.rs

//! Range-checked physical quantities and other simple value types.

use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::xml::XmlValue;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
        pub struct $name(f64);

        impl $name {
            pub const MIN: f64 = $min;
            pub const MAX: f64 = $max;

            /// # Errors
            /// Returns `DatexError::OutOfRange` for non-finite or out-of-range values.
            pub fn new(value: f64) -> Result<Self, DatexError> {
                if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
                    Ok(Self(value))
                } else {
                    Err(DatexError::OutOfRange {
                        quantity: stringify!($name),
                        value,
                        min: Self::MIN,
                        max: Self::MAX,
                    })
                }
            }

            pub fn value(self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $name {
            type Error = DatexError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(q: $name) -> f64 {
                q.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl XmlValue for $name {
            fn from_xml_text(text: &str, options: &ParseOptions<'_>) -> Result<Self, &'static str> {
                let raw = f64::from_xml_text(text, options)?;
                Self::new(raw).map_err(|_| concat!("a ", stringify!($name), " value within range"))
            }

            fn to_xml_text(&self) -> String {
                self.0.to_string()
            }
        }
    };
}

quantity!(
    /// A length in metres.
    Meter, 0.0, f64::MAX
);
quantity!(
    /// A power in watts.
    Watt, 0.0, f64::MAX
);
quantity!(Volt, 0.0, f64::MAX);
quantity!(Ampere, 0.0, f64::MAX);
quantity!(
    /// A mass in metric tonnes.
    Tonnes, 0.0, f64::MAX
);
quantity!(Percentage, 0.0, 100.0);
quantity!(
    /// An angle measured clockwise from true north.
    AngleInDegrees, 0.0, 360.0
);

/// A two-letter ISO 3166-1 alpha-2 country code, stored in lower case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CountryCode(String);

impl CountryCode {
    /// # Errors
    /// Returns `DatexError::InvalidValue` unless `code` is exactly two ASCII letters.
    pub fn new(code: &str) -> Result<Self, DatexError> {
        let code = code.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_lowercase()))
        } else {
            Err(DatexError::InvalidValue {
                element: "CountryCode".into(),
                value: code.to_string(),
                expected: "a two-letter country code",
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DatexError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> String {
        code.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl XmlValue for CountryCode {
    fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
        Self::new(text).map_err(|_| "a two-letter country code")
    }

    fn to_xml_text(&self) -> String {
        self.0.clone()
    }
}
