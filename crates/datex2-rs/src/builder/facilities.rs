// crates/datex2-rs/src/builder/facilities.rs

//! Builders for the `facilities` namespace.

use super::{ElementBuilder, ToXml};
use crate::types::{
    ContactInformation, DedicatedParkingSpaces, Dimension, Facility, FacilityObject, OperatingHours,
    OperatingHoursSpecification, Organisation, OrganisationSpecification, SupplementalEquipment,
    SupplementalFacility, SupplementalService,
};
use crate::xml::{Namespace, XmlElement, XmlName};

const NS: Namespace = Namespace::Facilities;

/// Writes the identity attributes and the shared facility object fields.
///
/// Leaves the builder in the `fac` namespace.
pub(super) fn write_facility_object(b: ElementBuilder, object: &FacilityObject) -> ElementBuilder {
    b.in_namespace(NS)
        .attribute("id", &object.id)
        .attribute("version", &object.version)
        .optional_child("name", object.name.as_ref())
        .children("alias", &object.aliases)
        .optional_child("description", object.description.as_ref())
        .values("photoUrl", &object.photo_urls)
        .values("accessibility", &object.accessibility)
        .optional_value("lastUpdated", object.last_updated.as_ref())
        .optional_child("operatingHours", object.operating_hours.as_ref())
        .optional_child("locationReference", object.location_reference.as_ref())
        .optional_child("owner", object.owner.as_ref())
        .optional_child("operator", object.operator.as_ref())
        .optional_child("helpdesk", object.helpdesk.as_ref())
        .children("applicableForVehicles", &object.applicable_for_vehicles)
        .optional_child("dimension", object.dimension.as_ref())
        .raw(object.extension.as_ref())
}

pub(super) fn write_facility(b: ElementBuilder, facility: &Facility) -> ElementBuilder {
    write_facility_object(b, &facility.object)
        .children("supplementalFacility", &facility.supplemental_facilities)
        .children("dedicatedParkingSpaces", &facility.dedicated_parking_spaces)
}

impl ToXml for FacilityObject {
    fn element_name() -> XmlName {
        NS.name("facilityObject")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        write_facility_object(ElementBuilder::new(name, NS), self).build()
    }
}

impl ToXml for Facility {
    fn element_name() -> XmlName {
        NS.name("facility")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        write_facility(ElementBuilder::new(name, NS), self).build()
    }
}

impl ToXml for DedicatedParkingSpaces {
    fn element_name() -> XmlName {
        NS.name("dedicatedParkingSpaces")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("numberOfSpaces", &self.number_of_spaces)
            .optional_child("applicableForVehicles", self.applicable_for_vehicles.as_ref())
            .optional_child("description", self.description.as_ref())
            .build()
    }
}

impl ToXml for Dimension {
    fn element_name() -> XmlName {
        NS.name("dimension")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_value("length", self.length.as_ref())
            .optional_value("width", self.width.as_ref())
            .optional_value("height", self.height.as_ref())
            .build()
    }
}

// --- Supplemental facilities ---

impl ToXml for SupplementalFacility {
    fn element_name() -> XmlName {
        NS.name("supplementalFacility")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        match self {
            SupplementalFacility::Equipment(equipment) => equipment.to_xml_as(name),
            SupplementalFacility::Service(service) => service.to_xml_as(name),
        }
    }
}

impl ToXml for SupplementalEquipment {
    fn element_name() -> XmlName {
        NS.name("supplementalFacility")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let b = ElementBuilder::new(name, NS).xsi_type(NS, "SupplementalEquipment");
        write_facility_object(b, &self.object)
            .value("equipmentType", &self.equipment_type)
            .optional_value("numberOfEquipment", self.number_of_equipment.as_ref())
            .build()
    }
}

impl ToXml for SupplementalService {
    fn element_name() -> XmlName {
        NS.name("supplementalFacility")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let b = ElementBuilder::new(name, NS).xsi_type(NS, "SupplementalService");
        write_facility_object(b, &self.object)
            .value("serviceType", &self.service_type)
            .build()
    }
}

// --- Operating hours ---

impl ToXml for OperatingHours {
    fn element_name() -> XmlName {
        NS.name("operatingHours")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let marker = |type_name: &str| ElementBuilder::new(name.clone(), NS).xsi_type(NS, type_name);
        match self {
            OperatingHours::OpenAllHours => marker("OpenAllHours").build(),
            OperatingHours::Undefined => marker("UndefinedOperatingHours").build(),
            OperatingHours::Unknown => marker("UnknownOperatingHours").build(),
            OperatingHours::Specification(spec) => spec.to_xml_as(name.clone()),
            OperatingHours::ByReference(reference) => marker("OperatingHoursByReference")
                .child("operatingHoursReference", reference)
                .build(),
        }
    }
}

impl ToXml for OperatingHoursSpecification {
    fn element_name() -> XmlName {
        NS.name("operatingHours")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .xsi_type(NS, "OperatingHoursSpecification")
            .optional_child("regularHours", self.regular_hours.as_ref())
            .children("exceptionalHours", &self.exceptional_hours)
            .optional_value("lastUpdated", self.last_updated.as_ref())
            .build()
    }
}

// --- Organisations ---

impl ToXml for Organisation {
    fn element_name() -> XmlName {
        NS.name("organisation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        match self {
            Organisation::Specification(spec) => spec.to_xml_as(name),
            Organisation::ByReference(reference) => ElementBuilder::new(name, NS)
                .xsi_type(NS, "OrganisationByReference")
                .child("organisationReference", reference)
                .build(),
            Organisation::Undefined => ElementBuilder::new(name, NS)
                .xsi_type(NS, "UndefinedOrganisation")
                .build(),
        }
    }
}

impl ToXml for OrganisationSpecification {
    fn element_name() -> XmlName {
        NS.name("organisation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .xsi_type(NS, "OrganisationSpecification")
            .child("name", &self.name)
            .optional_value("nationalOrganisationNumber", self.national_organisation_number.as_ref())
            .children("contactInformation", &self.contact_information)
            .build()
    }
}

impl ToXml for ContactInformation {
    fn element_name() -> XmlName {
        NS.name("contactInformation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_value("telephoneNumber", self.telephone_number.as_ref())
            .optional_value("eMail", self.email.as_ref())
            .optional_value("urlLinkAddress", self.url_link_address.as_ref())
            .values("contactDetailsLanguage", &self.contact_details_languages)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::FromXml;
    use crate::types::{
        Accessibility, EquipmentType, MultilingualString, ServiceType, VersionedReference,
    };

    fn round_trip<T: ToXml + FromXml + PartialEq + std::fmt::Debug>(value: &T) {
        let text = value.to_xml().to_xml_string().unwrap();
        let parsed = T::from_xml(&XmlElement::parse_str(&text).unwrap()).unwrap();
        assert_eq!(&parsed, value, "Round trip changed the value:\n{}", text);
    }

    #[test]
    fn test_operating_hours_variants_round_trip() {
        round_trip(&OperatingHours::OpenAllHours);
        round_trip(&OperatingHours::Undefined);
        round_trip(&OperatingHours::Unknown);
        round_trip(&OperatingHours::ByReference(VersionedReference::new("OH-1", "4")));
        round_trip(&OperatingHours::Specification(OperatingHoursSpecification::default()));
    }

    #[test]
    fn test_organisation_variants_round_trip() {
        let mut spec = OrganisationSpecification::new(MultilingualString::new("Stadtwerke"));
        spec.contact_information.push(ContactInformation {
            email: Some("info@example.org".into()),
            contact_details_languages: vec!["de".into(), "en".into()],
            ..Default::default()
        });
        round_trip(&Organisation::Specification(spec));
        round_trip(&Organisation::ByReference(VersionedReference::new("ORG-1", "1")));
        round_trip(&Organisation::Undefined);
    }

    #[test]
    fn test_facility_round_trip() {
        let mut facility = Facility::new("SITE-9", "2");
        facility.object.name = Some(MultilingualString::in_language("en", "Hub"));
        facility.object.accessibility = vec![Accessibility::BARRIER_FREE_ACCESSIBLE];
        facility.object.operating_hours = Some(OperatingHours::OpenAllHours);
        facility.supplemental_facilities = vec![
            SupplementalFacility::Equipment(SupplementalEquipment {
                object: FacilityObject::new("EQ-1", "1"),
                equipment_type: EquipmentType::TOILET,
                number_of_equipment: Some(2),
            }),
            SupplementalFacility::Service(SupplementalService {
                object: FacilityObject::new("SV-1", "1"),
                service_type: ServiceType::CAFE,
            }),
        ];
        facility.dedicated_parking_spaces.push(DedicatedParkingSpaces {
            number_of_spaces: 3,
            applicable_for_vehicles: None,
            description: None,
        });
        round_trip(&facility);
    }

    #[test]
    fn test_extension_is_written_back() {
        let extension = XmlElement::parse_str(
            r#"<fac:_facilityObjectExtension xmlns:fac="http://datex2.eu/schema/3/facilities">
                 <v:rating xmlns:v="urn:vendor">5</v:rating>
               </fac:_facilityObjectExtension>"#,
        )
        .unwrap();
        let mut object = FacilityObject::new("F", "1");
        object.extension = Some(extension.clone());

        let element = object.to_xml();
        assert_eq!(element.children.last(), Some(&extension));
        round_trip(&object);
    }
}
