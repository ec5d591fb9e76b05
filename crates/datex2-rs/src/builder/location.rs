// crates/datex2-rs/src/builder/location.rs

//! Builders for location referencing (`loc`) and its extension (`locx`).

use super::{ElementBuilder, ToXml};
use crate::types::{
    Address, AddressLine, Altitude, AreaLocation, FacilityLocation, LocationReference, NamedArea,
    NutsCode, PointByCoordinates, PointCoordinates, PointLocation,
};
use crate::xml::{Namespace, XmlElement, XmlName};

const NS: Namespace = Namespace::LocationReferencing;
const NS_EXT: Namespace = Namespace::LocationExtension;

impl ToXml for LocationReference {
    fn element_name() -> XmlName {
        NS.name("locationReference")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        match self {
            LocationReference::Point(point) => point.to_xml_as(name),
            LocationReference::Area(area) => area.to_xml_as(name),
        }
    }
}

impl ToXml for PointLocation {
    fn element_name() -> XmlName {
        NS.name("pointLocation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let b = ElementBuilder::new(name, NS)
            .xsi_type(NS, "PointLocation")
            .child("pointByCoordinates", &self.point_by_coordinates);
        match &self.facility_location {
            Some(location) => b
                .nested("_pointLocationExtension", NS_EXT, |ext| {
                    ext.child("facilityLocation", location)
                })
                .build(),
            None => b.build(),
        }
    }
}

impl ToXml for PointByCoordinates {
    fn element_name() -> XmlName {
        NS.name("pointByCoordinates")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_value("bearing", self.bearing.as_ref())
            .child("pointCoordinates", &self.point_coordinates)
            .build()
    }
}

impl ToXml for PointCoordinates {
    fn element_name() -> XmlName {
        NS.name("pointCoordinates")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("latitude", &self.latitude)
            .value("longitude", &self.longitude)
            .optional_child("altitude", self.altitude.as_ref())
            .build()
    }
}

impl ToXml for Altitude {
    fn element_name() -> XmlName {
        NS.name("altitude")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("altitudeValue", &self.altitude_value)
            .optional_value("altitudeAccuracy", self.altitude_accuracy.as_ref())
            .build()
    }
}

impl ToXml for AreaLocation {
    fn element_name() -> XmlName {
        NS.name("areaLocation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .xsi_type(NS, "AreaLocation")
            .children("namedArea", &self.named_areas)
            .build()
    }
}

impl ToXml for NamedArea {
    fn element_name() -> XmlName {
        NS.name("namedArea")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_child("areaName", self.area_name.as_ref())
            .optional_value("namedAreaType", self.named_area_type.as_ref())
            .optional_value("subdivisionType", self.subdivision_type.as_ref())
            .optional_value("country", self.country.as_ref())
            .optional_child("nuts", self.nuts.as_ref())
            .values("areaPlace", &self.area_places)
            .build()
    }
}

impl ToXml for NutsCode {
    fn element_name() -> XmlName {
        NS.name("nuts")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("nutsCodeType", &self.nuts_code_type)
            .value("nutsCodeValue", &self.value)
            .build()
    }
}

// --- Location extension ---

impl ToXml for FacilityLocation {
    fn element_name() -> XmlName {
        NS_EXT.name("facilityLocation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS_EXT)
            .optional_child("address", self.address.as_ref())
            .optional_value("timeZone", self.time_zone.as_ref())
            .build()
    }
}

impl ToXml for Address {
    fn element_name() -> XmlName {
        NS_EXT.name("address")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS_EXT)
            .optional_value("postcode", self.postcode.as_ref())
            .optional_child("city", self.city.as_ref())
            .optional_value("countryCode", self.country_code.as_ref())
            .children("addressLine", &self.address_lines)
            .build()
    }
}

impl ToXml for AddressLine {
    fn element_name() -> XmlName {
        NS_EXT.name("addressLine")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS_EXT)
            .attribute("order", &self.order)
            .optional_value("type", self.line_type.as_ref())
            .child("text", &self.text)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::FromXml;
    use crate::types::{AddressLineType, AltitudeAccuracy, AngleInDegrees, AreaPlace, CountryCode, MultilingualString};

    fn point() -> LocationReference {
        let mut coordinates = PointCoordinates::new(47.3769, 8.5417).unwrap();
        coordinates.altitude = Some(Altitude {
            altitude_value: 408.0,
            altitude_accuracy: Some(AltitudeAccuracy::EQUAL_TO_OR_BETTER_THAN_5_METRES),
        });
        LocationReference::Point(PointLocation {
            point_by_coordinates: PointByCoordinates {
                bearing: Some(AngleInDegrees::new(270.0).unwrap()),
                point_coordinates: coordinates,
            },
            facility_location: Some(FacilityLocation {
                address: Some(Address {
                    postcode: Some("8001".into()),
                    city: Some(MultilingualString::in_language("de", "Zürich")),
                    country_code: Some(CountryCode::new("ch").unwrap()),
                    address_lines: vec![AddressLine {
                        order: 1,
                        line_type: Some(AddressLineType::STREET),
                        text: MultilingualString::new("Bahnhofstrasse 1"),
                    }],
                }),
                time_zone: Some("Europe/Zurich".into()),
            }),
        })
    }

    #[test]
    fn test_point_round_trip_through_text() {
        let location = point();
        let text = location.to_xml().to_xml_string().unwrap();
        assert!(text.contains("xsi:type=\"loc:PointLocation\""));
        assert!(text.contains("<loc:_pointLocationExtension>"));
        assert!(text.contains("<locx:facilityLocation>"));

        let parsed = LocationReference::from_xml(&XmlElement::parse_str(&text).unwrap()).unwrap();
        assert_eq!(parsed, location);
    }

    #[test]
    fn test_area_round_trip() {
        let area = LocationReference::Area(AreaLocation {
            named_areas: vec![NamedArea {
                country: Some(CountryCode::new("nl").unwrap()),
                area_places: vec![AreaPlace::ON_BRIDGES, AreaPlace::IN_TUNNELS],
                ..Default::default()
            }],
        });
        let parsed = LocationReference::from_xml(&area.to_xml()).unwrap();
        assert_eq!(parsed, area);
    }
}
