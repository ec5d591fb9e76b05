// crates/datex2-rs/src/resolver/facilities.rs

//! Resolvers for the `facilities` namespace, including the dispatchers for
//! the `OperatingHours`, `Organisation` and `SupplementalFacility` families.

use super::FromXml;
use super::utils::{Fields, variant_name};
use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::types::{
    ContactInformation, DedicatedParkingSpaces, Dimension, Facility, FacilityObject, OperatingHours,
    OperatingHoursSpecification, Organisation, OrganisationSpecification, SupplementalEquipment,
    SupplementalFacility, SupplementalService,
};
use crate::xml::{Namespace, XmlElement};

const NS: Namespace = Namespace::Facilities;

/// Reads the fields every facility object carries.
pub(super) fn resolve_facility_object(f: &Fields<'_, '_>) -> Result<FacilityObject, DatexError> {
    let f = f.in_namespace(NS);
    Ok(FacilityObject {
        id: f.identifier_attribute("id")?,
        version: f.identifier_attribute("version")?,
        name: f.optional("name")?,
        aliases: f.collection("alias")?,
        description: f.optional("description")?,
        photo_urls: f.values("photoUrl")?,
        accessibility: f.values("accessibility")?,
        last_updated: f.optional_value("lastUpdated")?,
        operating_hours: f.optional("operatingHours")?,
        location_reference: f.optional("locationReference")?,
        owner: f.optional("owner")?,
        operator: f.optional("operator")?,
        helpdesk: f.optional("helpdesk")?,
        applicable_for_vehicles: f.collection("applicableForVehicles")?,
        dimension: f.optional("dimension")?,
        extension: f.optional_child("_facilityObjectExtension")?.cloned(),
    })
}

/// Reads a facility object plus the `Facility` level fields.
pub(super) fn resolve_facility(f: &Fields<'_, '_>) -> Result<Facility, DatexError> {
    let object = resolve_facility_object(f)?;
    let f = f.in_namespace(NS);
    Ok(Facility {
        object,
        supplemental_facilities: f.collection("supplementalFacility")?,
        dedicated_parking_spaces: f.collection("dedicatedParkingSpaces")?,
    })
}

impl FromXml for FacilityObject {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        resolve_facility_object(&Fields::new(element, NS, options))
    }
}

impl FromXml for Facility {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        resolve_facility(&Fields::new(element, NS, options))
    }
}

impl FromXml for DedicatedParkingSpaces {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(DedicatedParkingSpaces {
            number_of_spaces: f.mandatory_value("numberOfSpaces")?,
            applicable_for_vehicles: f.optional("applicableForVehicles")?,
            description: f.optional("description")?,
        })
    }
}

impl FromXml for Dimension {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(Dimension {
            length: f.optional_value("length")?,
            width: f.optional_value("width")?,
            height: f.optional_value("height")?,
        })
    }
}

// --- Supplemental facilities ---

impl FromXml for SupplementalFacility {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        match variant_name(element, "SupplementalFacility") {
            "SupplementalEquipment" | "supplementalEquipment" => {
                Ok(SupplementalFacility::Equipment(SupplementalEquipment {
                    object: resolve_facility_object(&f)?,
                    equipment_type: f.mandatory_value("equipmentType")?,
                    number_of_equipment: f.optional_value("numberOfEquipment")?,
                }))
            }
            "SupplementalService" | "supplementalService" => {
                Ok(SupplementalFacility::Service(SupplementalService {
                    object: resolve_facility_object(&f)?,
                    service_type: f.mandatory_value("serviceType")?,
                }))
            }
            other => Err(DatexError::UnknownVariant {
                family: "SupplementalFacility",
                name: other.to_string(),
            }),
        }
    }
}

// --- Operating hours ---

impl FromXml for OperatingHours {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        match variant_name(element, "OperatingHours") {
            "OpenAllHours" | "openAllHours" => Ok(OperatingHours::OpenAllHours),
            "UndefinedOperatingHours" | "undefinedOperatingHours" => Ok(OperatingHours::Undefined),
            "UnknownOperatingHours" | "unknownOperatingHours" => Ok(OperatingHours::Unknown),
            "OperatingHoursSpecification" | "operatingHoursSpecification" => {
                OperatingHoursSpecification::from_xml_with(element, options)
                    .map(OperatingHours::Specification)
            }
            "OperatingHoursByReference" | "operatingHoursByReference" => {
                Fields::new(element, NS, options)
                    .mandatory("operatingHoursReference")
                    .map(OperatingHours::ByReference)
            }
            other => Err(DatexError::UnknownVariant {
                family: "OperatingHours",
                name: other.to_string(),
            }),
        }
    }
}

impl FromXml for OperatingHoursSpecification {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(OperatingHoursSpecification {
            regular_hours: f.optional("regularHours")?,
            exceptional_hours: f.collection("exceptionalHours")?,
            last_updated: f.optional_value("lastUpdated")?,
        })
    }
}

// --- Organisations ---

impl FromXml for Organisation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        match variant_name(element, "Organisation") {
            "OrganisationSpecification" | "organisationSpecification" => {
                Ok(Organisation::Specification(OrganisationSpecification {
                    name: f.mandatory("name")?,
                    national_organisation_number: f.optional_value("nationalOrganisationNumber")?,
                    contact_information: f.collection("contactInformation")?,
                }))
            }
            "OrganisationByReference" | "organisationByReference" => f
                .mandatory("organisationReference")
                .map(Organisation::ByReference),
            "UndefinedOrganisation" | "undefinedOrganisation" => Ok(Organisation::Undefined),
            other => Err(DatexError::UnknownVariant {
                family: "Organisation",
                name: other.to_string(),
            }),
        }
    }
}

impl FromXml for ContactInformation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(ContactInformation {
            telephone_number: f.optional_value("telephoneNumber")?,
            email: f.optional_value("eMail")?,
            url_link_address: f.optional_value("urlLinkAddress")?,
            contact_details_languages: f.values("contactDetailsLanguage")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AsFacilityObject, EquipmentType, LocationReference};

    fn parse<T: FromXml>(xml: &str) -> Result<T, DatexError> {
        T::from_xml(&XmlElement::parse_str(xml).unwrap())
    }

    #[test]
    fn test_operating_hours_dispatch_by_xsi_type() {
        let hours: OperatingHours = parse(
            r#"<operatingHours xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                   xsi:type="fac:OpenAllHours"/>"#,
        )
        .unwrap();
        assert_eq!(hours, OperatingHours::OpenAllHours);
    }

    #[test]
    fn test_operating_hours_dispatch_by_element_name() {
        let hours: OperatingHours = parse("<unknownOperatingHours/>").unwrap();
        assert_eq!(hours, OperatingHours::Unknown);
        let result: Result<OperatingHours, _> = parse("<sometimesOpen/>");
        assert!(matches!(
            result,
            Err(DatexError::UnknownVariant { family: "OperatingHours", .. })
        ));
    }

    #[test]
    fn test_operating_hours_specification() {
        let hours: OperatingHours = parse(
            r#"<operatingHours xmlns="http://datex2.eu/schema/3/facilities"
                   xmlns:com="http://datex2.eu/schema/3/common"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                   xsi:type="fac:OperatingHoursSpecification">
                 <regularHours>
                   <com:overallStartTime>2024-01-01T00:00:00+01:00</com:overallStartTime>
                 </regularHours>
                 <exceptionalHours>
                   <com:startOfPeriod>2024-12-24T00:00:00+01:00</com:startOfPeriod>
                 </exceptionalHours>
               </operatingHours>"#,
        )
        .unwrap();
        let OperatingHours::Specification(spec) = hours else {
            panic!("Expected a specification");
        };
        assert!(spec.regular_hours.is_some());
        assert_eq!(spec.exceptional_hours.len(), 1);
    }

    #[test]
    fn test_operating_hours_by_reference() {
        let hours: OperatingHours = parse(
            r#"<operatingHours xmlns="http://datex2.eu/schema/3/facilities"
                   xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                   xsi:type="fac:OperatingHoursByReference">
                 <operatingHoursReference id="OH-7" version="2"/>
               </operatingHours>"#,
        )
        .unwrap();
        let OperatingHours::ByReference(reference) = hours else {
            panic!("Expected a reference");
        };
        assert_eq!(reference.id, "OH-7");
    }

    #[test]
    fn test_facility_object() {
        let facility: Facility = parse(
            r#"<site xmlns="http://datex2.eu/schema/3/facilities"
                     xmlns:com="http://datex2.eu/schema/3/common"
                     xmlns:loc="http://datex2.eu/schema/3/locationReferencing"
                     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                     id="SITE-1" version="3">
                 <name><com:values><com:value lang="en">Rest area</com:value></com:values></name>
                 <accessibility>wheelChairAccessible</accessibility>
                 <accessibility>wheelChairAccessible</accessibility>
                 <operatingHours xsi:type="fac:OpenAllHours"/>
                 <locationReference xsi:type="loc:PointLocation">
                   <loc:pointByCoordinates>
                     <loc:pointCoordinates>
                       <loc:latitude>48.1</loc:latitude>
                       <loc:longitude>11.5</loc:longitude>
                     </loc:pointCoordinates>
                   </loc:pointByCoordinates>
                 </locationReference>
                 <operator xsi:type="fac:OrganisationSpecification">
                   <name><com:values><com:value>Autobahn GmbH</com:value></com:values></name>
                   <contactInformation><telephoneNumber>+49 30 1234</telephoneNumber></contactInformation>
                 </operator>
                 <supplementalFacility xsi:type="fac:SupplementalEquipment" id="EQ-1" version="1">
                   <equipmentType>toilet</equipmentType>
                   <numberOfEquipment>4</numberOfEquipment>
                 </supplementalFacility>
                 <dedicatedParkingSpaces><numberOfSpaces>2</numberOfSpaces></dedicatedParkingSpaces>
                 <_facilityObjectExtension><vendorField xmlns="urn:vendor">x</vendorField></_facilityObjectExtension>
               </site>"#,
        )
        .unwrap();

        assert_eq!(facility.id(), "SITE-1");
        assert_eq!(facility.name().and_then(|n| n.get("en")), Some("Rest area"));
        assert_eq!(facility.object.accessibility.len(), 1);
        assert_eq!(facility.operating_hours(), Some(&OperatingHours::OpenAllHours));
        assert!(matches!(facility.location_reference(), Some(LocationReference::Point(_))));
        assert!(matches!(facility.object.operator, Some(Organisation::Specification(_))));
        assert!(facility.object.owner.is_none());

        let SupplementalFacility::Equipment(equipment) = &facility.supplemental_facilities[0] else {
            panic!("Expected equipment");
        };
        assert_eq!(equipment.equipment_type, EquipmentType::TOILET);
        assert_eq!(equipment.number_of_equipment, Some(4));
        assert_eq!(facility.dedicated_parking_spaces[0].number_of_spaces, 2);

        let extension = facility.object.extension.as_ref().unwrap();
        assert_eq!(extension.children[0].name.namespace.as_deref(), Some("urn:vendor"));
    }

    #[test]
    fn test_facility_object_requires_version() {
        let result: Result<FacilityObject, _> = parse(r#"<site id="S"/>"#);
        assert!(matches!(
            result,
            Err(DatexError::MissingAttribute { attribute: "version", .. })
        ));
    }

    #[test]
    fn test_organisation_specification_requires_name() {
        let result: Result<Organisation, _> = parse(
            r#"<owner xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                      xsi:type="fac:OrganisationSpecification"/>"#,
        );
        assert!(matches!(
            result,
            Err(DatexError::MissingElement { element: "name", .. })
        ));
    }
}
