// crates/datex2-rs/src/xml/value.rs

//! Conversion between leaf element (or attribute) text and typed values.

use crate::options::ParseOptions;
use chrono::{DateTime, FixedOffset, NaiveTime, SecondsFormat};

/// A value that is carried as the text of a single element or attribute.
///
/// `from_xml_text` returns the expected format on failure; the resolver
/// wraps it into a `DatexError::InvalidValue` naming the element.
pub trait XmlValue: Sized {
    fn from_xml_text(text: &str, options: &ParseOptions<'_>) -> Result<Self, &'static str>;

    fn to_xml_text(&self) -> String;
}

/// Free text is taken as the reader hands it over, which is with leading and
/// trailing whitespace removed. A value that starts or ends with whitespace
/// therefore reloads without it; inner whitespace is kept as written.
impl XmlValue for String {
    fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
        Ok(text.to_string())
    }

    fn to_xml_text(&self) -> String {
        self.clone()
    }
}

impl XmlValue for bool {
    fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err("a boolean (true, false, 1 or 0)"),
        }
    }

    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

macro_rules! integer_value {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl XmlValue for $ty {
                fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
                    text.trim().parse::<$ty>().map_err(|_| $expected)
                }

                fn to_xml_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_value! {
    u16 => "a non-negative integer (0..=65535)",
    u32 => "a non-negative integer",
    i32 => "an integer",
}

impl XmlValue for f64 {
    fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
        match text.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err("a finite decimal number"),
        }
    }

    fn to_xml_text(&self) -> String {
        self.to_string()
    }
}

/// `xs:dateTime` with a mandatory UTC offset.
impl XmlValue for DateTime<FixedOffset> {
    fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
        DateTime::parse_from_rfc3339(text.trim())
            .map_err(|_| "an ISO 8601 timestamp with UTC offset")
    }

    fn to_xml_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, false)
    }
}

/// `xs:time` without offset, e.g. `08:30:00`.
impl XmlValue for NaiveTime {
    fn from_xml_text(text: &str, _: &ParseOptions<'_>) -> Result<Self, &'static str> {
        NaiveTime::parse_from_str(text.trim(), "%H:%M:%S%.f")
            .map_err(|_| "a time of day (hh:mm:ss)")
    }

    fn to_xml_text(&self) -> String {
        self.format("%H:%M:%S%.f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: XmlValue>(text: &str) -> Result<T, &'static str> {
        T::from_xml_text(text, &ParseOptions::default())
    }

    #[test]
    fn test_boolean_forms() {
        assert_eq!(parse::<bool>("true"), Ok(true));
        assert_eq!(parse::<bool>("0"), Ok(false));
        assert!(parse::<bool>("yes").is_err());
        assert!(parse::<bool>("True").is_err());
    }

    #[test]
    fn test_timestamp_requires_offset() {
        let ts = parse::<DateTime<FixedOffset>>("2025-02-02T15:00:00+01:00").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), 3600);
        assert_eq!(ts.to_xml_text(), "2025-02-02T15:00:00+01:00");

        assert!(parse::<DateTime<FixedOffset>>("2025-02-02T15:00:00").is_err());
        assert!(parse::<DateTime<FixedOffset>>("02/02/2025").is_err());
    }

    #[test]
    fn test_timestamp_utc_is_written_as_offset() {
        let ts = parse::<DateTime<FixedOffset>>("2025-02-02T14:00:00Z").unwrap();
        assert_eq!(ts.to_xml_text(), "2025-02-02T14:00:00+00:00");
    }

    #[test]
    fn test_time_of_day() {
        let t = parse::<NaiveTime>("08:30:00").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(t.to_xml_text(), "08:30:00");
        assert!(parse::<NaiveTime>("25:00:00").is_err());
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse::<u32>(" 12 "), Ok(12));
        assert!(parse::<u32>("-1").is_err());
        assert_eq!(parse::<f64>("22.5"), Ok(22.5));
        assert!(parse::<f64>("NaN").is_err());
        assert!(parse::<f64>("inf").is_err());
    }
}
