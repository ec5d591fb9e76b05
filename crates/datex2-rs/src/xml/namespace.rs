// crates/datex2-rs/src/xml/namespace.rs

//! The fixed DATEX II v3 namespaces and their conventional prefixes.

use super::element::XmlName;

/// A namespace known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Common,
    Facilities,
    EnergyInfrastructure,
    LocationReferencing,
    LocationExtension,
    XmlSchemaInstance,
}

impl Namespace {
    /// Every known namespace, in the order they are declared on a written root element.
    pub const ALL: [Namespace; 6] = [
        Namespace::Common,
        Namespace::Facilities,
        Namespace::EnergyInfrastructure,
        Namespace::LocationReferencing,
        Namespace::LocationExtension,
        Namespace::XmlSchemaInstance,
    ];

    pub const fn uri(self) -> &'static str {
        match self {
            Namespace::Common => "http://datex2.eu/schema/3/common",
            Namespace::Facilities => "http://datex2.eu/schema/3/facilities",
            Namespace::EnergyInfrastructure => "http://datex2.eu/schema/3/energyInfrastructure",
            Namespace::LocationReferencing => "http://datex2.eu/schema/3/locationReferencing",
            Namespace::LocationExtension => "http://datex2.eu/schema/3/locationExtension",
            Namespace::XmlSchemaInstance => "http://www.w3.org/2001/XMLSchema-instance",
        }
    }

    pub const fn prefix(self) -> &'static str {
        match self {
            Namespace::Common => "com",
            Namespace::Facilities => "fac",
            Namespace::EnergyInfrastructure => "egi",
            Namespace::LocationReferencing => "loc",
            Namespace::LocationExtension => "locx",
            Namespace::XmlSchemaInstance => "xsi",
        }
    }

    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.uri() == uri)
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ns| ns.prefix() == prefix)
    }

    /// Builds a qualified name in this namespace.
    pub fn name(self, local_name: &str) -> XmlName {
        XmlName::new(self, local_name)
    }

    /// The `prefix:TypeName` form used as an `xsi:type` value.
    pub fn type_name(self, type_name: &str) -> String {
        format!("{}:{}", self.prefix(), type_name)
    }
}
