//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure the parser reports malformed XML, missing mandatory
//! elements and attributes, cardinality violations and out-of-range values
//! without panicking.

use datex2_rs::types::{HeaderInformation, OverallPeriod, TypeOfSite};
use datex2_rs::{
    DatexError, NamespacePolicy, ParseOptions, load_publication_from_str,
    load_publication_from_str_with, parse_from_str,
};

/// A minimal valid publication used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<egi:energyInfrastructureTablePublication
    xmlns:egi="http://datex2.eu/schema/3/energyInfrastructure"
    xmlns:com="http://datex2.eu/schema/3/common"
    xmlns:fac="http://datex2.eu/schema/3/facilities"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    lang="en" modelBaseVersion="3">
  <egi:publicationTime>2025-03-01T08:00:00Z</egi:publicationTime>
  <egi:publicationCreator>
    <com:country>nl</com:country>
    <com:nationalIdentifier>NDW</com:nationalIdentifier>
  </egi:publicationCreator>
  <egi:energyInfrastructureTable id="T" version="1">
    <egi:energyInfrastructureSite id="S" version="1">
      <egi:typeOfSite>onstreet</egi:typeOfSite>
      <egi:energyInfrastructureStation id="ST" version="1">
        <egi:refillPoint xsi:type="egi:ElectricChargingPoint" id="CP" version="1">
          <egi:connector>
            <egi:connectorType>iec62196T2</egi:connectorType>
            <egi:maxPowerAtSocket>11000</egi:maxPowerAtSocket>
          </egi:connector>
        </egi:refillPoint>
      </egi:energyInfrastructureStation>
    </egi:energyInfrastructureSite>
  </egi:energyInfrastructureTable>
</egi:energyInfrastructureTablePublication>"#;

#[test]
fn test_minimal_publication_is_valid() {
    let publication = load_publication_from_str(MINIMAL_VALID_XML).expect("Minimal XML should parse");
    assert!(publication.header_information.is_none());
    let site = &publication.tables[0].sites[0];
    assert!(site.facility.supplemental_facilities.is_empty());
    assert!(site.facility.object.aliases.is_empty());
    assert_eq!(site.types_of_site, vec![TypeOfSite::ONSTREET]);
}

/// Verifies that the parser catches malformed XML syntax (e.g., unclosed tags).
#[test]
fn test_malformed_xml_syntax() {
    let xml = r#"<egi:energyInfrastructureTablePublication> ... missing closing tags"#;
    let result = load_publication_from_str(xml);
    assert!(
        matches!(result, Err(DatexError::XmlParsing(_))),
        "Expected XmlParsing error, got {:?}",
        result
    );
}

#[test]
fn test_missing_publication_time() {
    let xml = MINIMAL_VALID_XML.replace(
        "<egi:publicationTime>2025-03-01T08:00:00Z</egi:publicationTime>",
        "",
    );
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::MissingElement { element: "publicationTime", .. })),
        "Expected MissingElement, got {:?}",
        result
    );
}

#[test]
fn test_invalid_timestamp() {
    let xml = MINIMAL_VALID_XML.replace("2025-03-01T08:00:00Z", "yesterday");
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::InvalidValue { ref value, .. }) if value == "yesterday"),
        "Expected InvalidValue, got {:?}",
        result
    );
}

#[test]
fn test_missing_lang_attribute() {
    let xml = MINIMAL_VALID_XML.replace(r#"lang="en" "#, "");
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::MissingAttribute { attribute: "lang", .. })),
        "Expected MissingAttribute, got {:?}",
        result
    );
}

#[test]
fn test_empty_facility_id() {
    let xml = MINIMAL_VALID_XML.replace(r#"id="S""#, r#"id="""#);
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::InvalidValue { .. })),
        "Expected InvalidValue for an empty id, got {:?}",
        result
    );
}

#[test]
fn test_site_without_station() {
    let start = MINIMAL_VALID_XML.find("<egi:energyInfrastructureStation").unwrap();
    let end_tag = "</egi:energyInfrastructureStation>";
    let end = MINIMAL_VALID_XML.find(end_tag).unwrap() + end_tag.len();
    let xml = format!("{}{}", &MINIMAL_VALID_XML[..start], &MINIMAL_VALID_XML[end..]);

    let result = load_publication_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(DatexError::TooFew { element: "energyInfrastructureStation", min: 1, actual: 0 })
        ),
        "Expected TooFew, got {:?}",
        result
    );
}

#[test]
fn test_unknown_refill_point_type() {
    let xml = MINIMAL_VALID_XML.replace("egi:ElectricChargingPoint", "egi:HydrogenTeleporter");
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::UnknownVariant { family: "RefillPoint", ref name }) if name == "HydrogenTeleporter"),
        "Expected UnknownVariant, got {:?}",
        result
    );
}

#[test]
fn test_negative_power() {
    let xml = MINIMAL_VALID_XML.replace(">11000<", ">-5<");
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::InvalidValue { ref value, .. }) if value == "-5"),
        "Expected InvalidValue, got {:?}",
        result
    );
}

#[test]
fn test_invalid_country_code() {
    let xml = MINIMAL_VALID_XML.replace("<com:country>nl</com:country>", "<com:country>NLD</com:country>");
    let result = load_publication_from_str(&xml);
    assert!(matches!(result, Err(DatexError::InvalidValue { .. })), "got {:?}", result);
}

#[test]
fn test_empty_code_token() {
    let xml = MINIMAL_VALID_XML.replace(">onstreet<", "><");
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(result, Err(DatexError::InvalidValue { .. })),
        "Expected InvalidValue for an empty token, got {:?}",
        result
    );
}

#[test]
fn test_unqualified_children_depend_on_policy() {
    let xml = MINIMAL_VALID_XML.replace("<egi:typeOfSite>onstreet</egi:typeOfSite>", "<typeOfSite>onstreet</typeOfSite>");

    let lenient = load_publication_from_str(&xml).unwrap();
    assert_eq!(lenient.tables[0].sites[0].types_of_site.len(), 1);

    let options = ParseOptions::default().with_namespaces(NamespacePolicy::Strict);
    let strict = load_publication_from_str_with(&xml, &options).unwrap();
    assert!(strict.tables[0].sites[0].types_of_site.is_empty());
}

#[test]
fn test_header_without_information_status() {
    let result: Result<HeaderInformation, _> = parse_from_str(
        r#"<headerInformation xmlns="http://datex2.eu/schema/3/common">
             <confidentiality>restrictedToAuthorities</confidentiality>
           </headerInformation>"#,
    );
    assert!(
        matches!(result, Err(DatexError::MissingElement { element: "informationStatus", .. })),
        "Expected MissingElement, got {:?}",
        result
    );
}

#[test]
fn test_repeated_single_element() {
    let result: Result<HeaderInformation, _> = parse_from_str(
        r#"<headerInformation xmlns="http://datex2.eu/schema/3/common">
             <confidentiality>restrictedToAuthorities</confidentiality>
             <informationStatus>real</informationStatus>
             <informationStatus>test</informationStatus>
           </headerInformation>"#,
    );
    assert!(
        matches!(
            result,
            Err(DatexError::TooMany { element: "informationStatus", max: 1, actual: 2 })
        ),
        "Expected TooMany, got {:?}",
        result
    );

    let xml = MINIMAL_VALID_XML.replace(
        "<egi:maxPowerAtSocket>11000</egi:maxPowerAtSocket>",
        "<egi:maxPowerAtSocket>11000</egi:maxPowerAtSocket>\n<egi:maxPowerAtSocket>22000</egi:maxPowerAtSocket>",
    );
    let result = load_publication_from_str(&xml);
    assert!(
        matches!(
            result,
            Err(DatexError::TooMany { element: "maxPowerAtSocket", max: 1, actual: 2 })
        ),
        "Expected TooMany, got {:?}",
        result
    );
}

#[test]
fn test_overall_period_end_before_start() {
    let result: Result<OverallPeriod, _> = parse_from_str(
        "<overallPeriod>\
           <overallStartTime>2025-02-02T17:00:00+01:00</overallStartTime>\
           <overallEndTime>2025-02-02T15:00:00+01:00</overallEndTime>\
         </overallPeriod>",
    );
    assert!(matches!(result, Err(DatexError::Validation(_))), "got {:?}", result);
}

#[test]
fn test_error_messages_are_readable() {
    let xml = MINIMAL_VALID_XML.replace(r#"lang="en" "#, "");
    let message = load_publication_from_str(&xml).unwrap_err().to_string();
    assert!(message.contains("lang"), "Unhelpful message: {}", message);
}
