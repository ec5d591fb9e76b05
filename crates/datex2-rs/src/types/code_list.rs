// crates/datex2-rs/src/types/code_list.rs

//! Open, string-backed DATEX II code lists.
//!
//! Every code list is a newtype over its token with associated constants for
//! the values defined by the schema. Unknown tokens are representable (the
//! schema is extended by vendors and national profiles), but nothing is added
//! to a code list implicitly: extensions live in a caller-owned
//! [`CodeListRegistry`].

use crate::error::DatexError;
use dashmap::DashMap;
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

/// Common behaviour of all generated code-list types.
pub trait CodeList: Sized + Clone + Eq + Hash + fmt::Display {
    /// The XSD enumeration name, e.g. `AreaPlaceEnum`.
    const NAME: &'static str;

    /// The canonical tokens defined by the schema.
    const TOKENS: &'static [&'static str];

    fn as_str(&self) -> &str;

    #[doc(hidden)]
    fn from_token(token: Cow<'static, str>) -> Self;

    /// The canonical spelling of a known token, compared case-insensitively.
    fn canonical(token: &str) -> Option<&'static str> {
        let token = token.trim();
        Self::TOKENS
            .iter()
            .find(|known| known.eq_ignore_ascii_case(token))
            .copied()
    }

    /// Strict parse: only tokens defined by the schema are accepted.
    ///
    /// # Errors
    /// Returns `DatexError::UnknownCode` for any other token.
    fn parse(token: &str) -> Result<Self, DatexError> {
        Self::canonical(token)
            .map(|known| Self::from_token(Cow::Borrowed(known)))
            .ok_or_else(|| DatexError::UnknownCode {
                code_list: Self::NAME,
                value: token.to_string(),
            })
    }

    /// Lenient parse: any non-empty token is accepted.
    ///
    /// Known tokens map to their canonical spelling; unknown tokens are kept
    /// verbatim. No state is modified, so repeated calls with the same input
    /// yield equal values.
    fn try_parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(match Self::canonical(token) {
            Some(known) => Self::from_token(Cow::Borrowed(known)),
            None => Self::from_token(Cow::Owned(token.to_string())),
        })
    }

    /// Whether this value is one of the tokens defined by the schema.
    fn is_known(&self) -> bool {
        Self::TOKENS.contains(&self.as_str())
    }

    fn known_values() -> Vec<Self> {
        Self::TOKENS
            .iter()
            .map(|token| Self::from_token(Cow::Borrowed(token)))
            .collect()
    }
}

/// Generates a code-list newtype with one associated constant per token.
macro_rules! code_list {
    (
        $(#[$meta:meta])*
        $name:ident = $xsd:literal {
            $($konst:ident = $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(::std::borrow::Cow<'static, str>);

        impl $name {
            $(pub const $konst: $name = $name(::std::borrow::Cow::Borrowed($token));)+
        }

        impl $crate::types::code_list::CodeList for $name {
            const NAME: &'static str = $xsd;
            const TOKENS: &'static [&'static str] = &[$($token),+];

            fn as_str(&self) -> &str {
                &self.0
            }

            fn from_token(token: ::std::borrow::Cow<'static, str>) -> Self {
                $name(token)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::DatexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::types::code_list::CodeList>::parse(s)
            }
        }

        impl $crate::xml::XmlValue for $name {
            fn from_xml_text(
                text: &str,
                options: &$crate::options::ParseOptions<'_>,
            ) -> Result<Self, &'static str> {
                $crate::types::code_list::parse_with_policy::<$name>(text, options)
                    .ok_or(concat!("a token of ", $xsd))
            }

            fn to_xml_text(&self) -> String {
                self.0.to_string()
            }
        }
    };
}

pub(crate) use code_list;

/// Applies the configured `CodeListPolicy` to a token read from XML.
pub(crate) fn parse_with_policy<C: CodeList>(
    text: &str,
    options: &crate::options::ParseOptions<'_>,
) -> Option<C> {
    use crate::options::CodeListPolicy;

    match options.code_lists {
        CodeListPolicy::Open => {
            let value = C::try_parse(text)?;
            if !value.is_known() {
                log::debug!("Accepting unknown {} token '{}'", C::NAME, value);
            }
            Some(value)
        }
        CodeListPolicy::Strict { extensions } => C::parse(text).ok().or_else(|| {
            extensions.and_then(|registry| registry.parse::<C>(text).ok())
        }),
    }
}

/// A thread-safe set of extension tokens, keyed per code list.
///
/// Tokens are matched case-insensitively; the first registered spelling is
/// the one returned.
#[derive(Debug, Default)]
pub struct CodeListRegistry {
    tokens: DashMap<(&'static str, String), String>,
}

impl CodeListRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `token` to the value space of `C` and returns the resulting value.
    ///
    /// Registering a token already defined by the schema is a no-op that
    /// returns the canonical value.
    ///
    /// # Errors
    /// Returns `DatexError::InvalidValue` for an empty token.
    pub fn register<C: CodeList>(&self, token: &str) -> Result<C, DatexError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DatexError::InvalidValue {
                element: C::NAME.to_string(),
                value: String::new(),
                expected: "a non-empty token",
            });
        }
        if let Some(known) = C::canonical(token) {
            return Ok(C::from_token(Cow::Borrowed(known)));
        }

        let entry = self
            .tokens
            .entry((C::NAME, token.to_ascii_lowercase()))
            .or_insert_with(|| token.to_string());
        log::debug!("Registered {} extension token '{}'", C::NAME, entry.value());
        Ok(C::from_token(Cow::Owned(entry.value().clone())))
    }

    pub fn is_registered<C: CodeList>(&self, token: &str) -> bool {
        self.tokens
            .contains_key(&(C::NAME, token.trim().to_ascii_lowercase()))
    }

    /// Strict parse that also accepts registered extension tokens.
    ///
    /// # Errors
    /// Returns `DatexError::UnknownCode` for tokens neither known nor registered.
    pub fn parse<C: CodeList>(&self, token: &str) -> Result<C, DatexError> {
        if let Ok(value) = C::parse(token) {
            return Ok(value);
        }
        self.tokens
            .get(&(C::NAME, token.trim().to_ascii_lowercase()))
            .map(|entry| C::from_token(Cow::Owned(entry.value().clone())))
            .ok_or_else(|| DatexError::UnknownCode {
                code_list: C::NAME,
                value: token.to_string(),
            })
    }

    /// All extension tokens registered for `C`, sorted.
    pub fn registered<C: CodeList>(&self) -> Vec<C> {
        let mut values: Vec<String> = self
            .tokens
            .iter()
            .filter(|entry| entry.key().0 == C::NAME)
            .map(|entry| entry.value().clone())
            .collect();
        values.sort();
        values
            .into_iter()
            .map(|token| C::from_token(Cow::Owned(token)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CodeListPolicy, ParseOptions};
    use crate::types::location::AreaPlace;
    use crate::types::{ConnectorType, Day, InformationStatus};
    use crate::xml::XmlValue;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_constant_tokens() {
        assert_eq!(AreaPlace::IN_TUNNELS.to_string(), "inTunnels");
        assert_eq!(AreaPlace::IN_TUNNELS.as_str(), "inTunnels");
        assert_eq!(AreaPlace::NAME, "AreaPlaceEnum");
    }

    #[test]
    fn test_known_values_round_trip() {
        fn check<C: CodeList + fmt::Debug>() {
            for value in C::known_values() {
                assert_eq!(C::try_parse(&value.to_string()), Some(value.clone()));
                assert_eq!(C::parse(&value.to_string()).unwrap(), value);
                assert!(value.is_known());
            }
        }
        check::<AreaPlace>();
        check::<Day>();
        check::<InformationStatus>();
        check::<ConnectorType>();
    }

    #[test]
    fn test_parse_is_case_insensitive_and_canonicalizes() {
        assert_eq!(Day::parse("MONDAY").unwrap(), Day::MONDAY);
        assert_eq!(Day::try_parse(" monday ").unwrap().as_str(), "monday");
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        let err = Day::parse("funday").unwrap_err();
        assert!(matches!(
            err,
            DatexError::UnknownCode { code_list: "DayEnum", ref value } if value == "funday"
        ));
        assert!("funday".parse::<Day>().is_err());
    }

    #[test]
    fn test_try_parse_unknown_is_idempotent() {
        let first = AreaPlace::try_parse("myVendorSpecificCode").unwrap();
        let second = AreaPlace::try_parse("myVendorSpecificCode").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_str(), "myVendorSpecificCode");
        assert!(!first.is_known());
        // Lenient parsing never widens the strict value space.
        assert!(AreaPlace::parse("myVendorSpecificCode").is_err());
    }

    #[test]
    fn test_try_parse_rejects_empty() {
        assert_eq!(AreaPlace::try_parse(""), None);
        assert_eq!(AreaPlace::try_parse("   "), None);
    }

    #[test]
    fn test_registry_extends_strict_parsing() {
        let registry = CodeListRegistry::new();
        assert!(registry.parse::<AreaPlace>("onFerries").is_err());

        let registered = registry.register::<AreaPlace>("onFerries").unwrap();
        assert_eq!(registered.as_str(), "onFerries");
        assert!(registry.is_registered::<AreaPlace>("ONFERRIES"));
        assert_eq!(registry.parse::<AreaPlace>("onferries").unwrap(), registered);

        // Registration is scoped to one code list.
        assert!(registry.parse::<Day>("onFerries").is_err());
        assert_eq!(registry.registered::<AreaPlace>(), vec![registered]);
    }

    #[test]
    fn test_registry_known_token_is_not_stored() {
        let registry = CodeListRegistry::new();
        let value = registry.register::<Day>("Friday").unwrap();
        assert_eq!(value, Day::FRIDAY);
        assert!(registry.is_empty());
        assert!(registry.register::<Day>("  ").is_err());
    }

    #[test]
    fn test_registry_concurrent_registration() {
        let registry = Arc::new(CodeListRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || registry.register::<AreaPlace>("onFerries").unwrap())
            })
            .collect();
        let values: Vec<AreaPlace> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert!(values.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_xml_value_respects_policy() {
        let open = ParseOptions::default();
        let strict = ParseOptions::default().with_code_lists(CodeListPolicy::Strict { extensions: None });
        let registry = CodeListRegistry::new();
        registry.register::<AreaPlace>("onFerries").unwrap();
        let extended = ParseOptions::default().with_code_lists(CodeListPolicy::Strict {
            extensions: Some(&registry),
        });

        assert!(AreaPlace::from_xml_text("onFerries", &open).is_ok());
        assert_eq!(
            AreaPlace::from_xml_text("onFerries", &strict),
            Err("a token of AreaPlaceEnum")
        );
        assert!(AreaPlace::from_xml_text("onFerries", &extended).is_ok());
        assert_eq!(
            AreaPlace::from_xml_text("intunnels", &strict),
            Ok(AreaPlace::IN_TUNNELS)
        );
    }
}
