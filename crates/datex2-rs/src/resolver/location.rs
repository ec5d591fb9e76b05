// crates/datex2-rs/src/resolver/location.rs

//! Resolvers for location referencing (`loc`) and its extension (`locx`).

use super::FromXml;
use super::utils::{Fields, variant_name};
use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::types::location::check_range;
use crate::types::{
    Address, AddressLine, Altitude, AreaLocation, FacilityLocation, LocationReference, NamedArea,
    NutsCode, PointByCoordinates, PointCoordinates, PointLocation,
};
use crate::xml::{Namespace, XmlElement};

const NS: Namespace = Namespace::LocationReferencing;
const NS_EXT: Namespace = Namespace::LocationExtension;

impl FromXml for LocationReference {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        match variant_name(element, "LocationReference") {
            "PointLocation" | "pointLocation" => {
                PointLocation::from_xml_with(element, options).map(LocationReference::Point)
            }
            "AreaLocation" | "areaLocation" => {
                AreaLocation::from_xml_with(element, options).map(LocationReference::Area)
            }
            other => Err(DatexError::UnknownVariant {
                family: "LocationReference",
                name: other.to_string(),
            }),
        }
    }
}

impl FromXml for PointLocation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let facility_location = match f.optional_child("_pointLocationExtension")? {
            Some(extension) => Fields::new(extension, NS_EXT, options).optional("facilityLocation")?,
            None => None,
        };

        Ok(PointLocation {
            point_by_coordinates: f.mandatory("pointByCoordinates")?,
            facility_location,
        })
    }
}

impl FromXml for PointByCoordinates {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(PointByCoordinates {
            bearing: f.optional_value("bearing")?,
            point_coordinates: f.mandatory("pointCoordinates")?,
        })
    }
}

impl FromXml for PointCoordinates {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let latitude = f.mandatory_value("latitude")?;
        let longitude = f.mandatory_value("longitude")?;
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;

        Ok(PointCoordinates {
            latitude,
            longitude,
            altitude: f.optional("altitude")?,
        })
    }
}

impl FromXml for Altitude {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(Altitude {
            altitude_value: f.mandatory_value("altitudeValue")?,
            altitude_accuracy: f.optional_value("altitudeAccuracy")?,
        })
    }
}

impl FromXml for AreaLocation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(AreaLocation {
            named_areas: f.bounded_collection("namedArea", 1, None)?,
        })
    }
}

impl FromXml for NamedArea {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(NamedArea {
            area_name: f.optional("areaName")?,
            named_area_type: f.optional_value("namedAreaType")?,
            subdivision_type: f.optional_value("subdivisionType")?,
            country: f.optional_value("country")?,
            nuts: f.optional("nuts")?,
            area_places: f.values("areaPlace")?,
        })
    }
}

impl FromXml for NutsCode {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(NutsCode {
            nuts_code_type: f.mandatory_value("nutsCodeType")?,
            value: f.mandatory_value("nutsCodeValue")?,
        })
    }
}

// --- Location extension ---

impl FromXml for FacilityLocation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS_EXT, options);
        Ok(FacilityLocation {
            address: f.optional("address")?,
            time_zone: f.optional_value("timeZone")?,
        })
    }
}

impl FromXml for Address {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS_EXT, options);
        Ok(Address {
            postcode: f.optional_value("postcode")?,
            city: f.optional("city")?,
            country_code: f.optional_value("countryCode")?,
            address_lines: f.collection("addressLine")?,
        })
    }
}

impl FromXml for AddressLine {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS_EXT, options);
        Ok(AddressLine {
            order: f.mandatory_attribute("order")?,
            line_type: f.optional_value("type")?,
            text: f.mandatory("text")?,
        })
    }
}
