// crates/datex2-rs/tests/parsing.rs

use chrono::DateTime;
use datex2_rs::types::{
    AsFacilityObject, ChargingMode, CodeList, ConnectorType, FaultSeverity, InformationStatus,
    LocationReference, OperatingHours, Organisation, RefillPoint, SupplementalFacility, TypeOfSite,
};
use datex2_rs::{
    CodeListRegistry, DatexError, NoSpecialDays, ParseOptions, load_publication_from_str,
    load_publication_from_str_with, save_publication_to_string,
};
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_load_full_publication() {
    init_logger();
    let xml = load_test_file("publication.xml");
    let publication = load_publication_from_str(&xml).expect("Failed to parse publication");

    assert_eq!(publication.lang, "de");
    assert_eq!(publication.model_base_version, "3");
    assert_eq!(publication.publication_creator.country.as_str(), "de");
    assert_eq!(
        publication.header_information.as_ref().map(|h| &h.information_status),
        Some(&InformationStatus::REAL)
    );

    let table = &publication.tables[0];
    assert_eq!(table.id, "TABLE-1");
    assert_eq!(table.version, "7");
    assert_eq!(
        table.table_name.as_ref().and_then(|n| n.get("EN")),
        Some("Charging infrastructure Musterstadt")
    );
    assert_eq!(publication.sites().count(), 2);
}

#[test]
fn test_site_facility_fields() {
    let publication = load_publication_from_str(&load_test_file("publication.xml")).unwrap();
    let site = &publication.tables[0].sites[0];

    assert_eq!(site.id(), "SITE-100");
    assert_eq!(site.name().and_then(|n| n.get("de")), Some("Parkhaus Marktplatz"));
    assert_eq!(site.types_of_site, vec![TypeOfSite::PARKING_GARAGE]);

    // Location with address extension.
    let Some(LocationReference::Point(point)) = site.location_reference() else {
        panic!("Expected a point location, got {:?}", site.location_reference());
    };
    assert_eq!(point.point_by_coordinates.point_coordinates.latitude, 50.1109);
    let address = point
        .facility_location
        .as_ref()
        .and_then(|l| l.address.as_ref())
        .expect("Missing address");
    assert_eq!(address.postcode.as_deref(), Some("60311"));
    assert_eq!(address.address_lines[0].text.first(), Some("Marktplatz 5"));

    // Organisations.
    let Some(Organisation::Specification(operator)) = &site.facility.object.operator else {
        panic!("Expected an operator specification");
    };
    assert_eq!(operator.contact_information[0].contact_details_languages, vec!["de", "en"]);
    assert!(matches!(
        &site.facility.object.helpdesk,
        Some(Organisation::ByReference(r)) if r.id == "ORG-HOTLINE"
    ));

    // Amenities.
    assert_eq!(site.facility.supplemental_facilities.len(), 2);
    let SupplementalFacility::Service(cafe) = &site.facility.supplemental_facilities[1] else {
        panic!("Expected a service");
    };
    assert_eq!(cafe.operating_hours(), Some(&OperatingHours::OpenAllHours));

    // Extension content is kept as-is.
    let extension = site.facility.object.extension.as_ref().expect("Missing extension");
    assert_eq!(extension.children[0].name.local_name, "tariffZone");
    assert_eq!(extension.children[0].text(), "innenstadt");
}

#[test]
fn test_stations_and_refill_points() {
    let publication = load_publication_from_str(&load_test_file("publication.xml")).unwrap();
    let site = &publication.tables[0].sites[0];
    assert_eq!(site.stations.len(), 2);

    let station = &site.stations[0];
    assert_eq!(station.total_maximum_power.map(|w| w.value()), Some(150_000.0));
    assert_eq!(station.authentication_and_identification_methods.len(), 2);

    let RefillPoint::ElectricCharging(point) = &station.refill_points[0] else {
        panic!("Expected an electric charging point");
    };
    assert_eq!(point.id(), "CP-100-A-1");
    assert_eq!(point.charging_modes, vec![ChargingMode::MODE_4_DC]);
    assert_eq!(point.connectors.len(), 2);
    assert_eq!(point.connectors[0].connector_type, ConnectorType::IEC_62196_T2_COMBO);
    assert_eq!(point.connectors[0].voltage.map(|v| v.value()), Some(920.0));
    let energy = point.electric_energy.as_ref().expect("Missing electric energy");
    assert_eq!(energy.mix_total(), 100.0);
    assert_eq!(energy.is_green_energy, Some(true));

    let faulty = &site.stations[1].refill_points[0];
    assert_eq!(faulty.base().faults[0].fault_severity, Some(FaultSeverity::MEDIUM));
}

#[test]
fn test_unknown_site_type_is_kept() {
    let publication = load_publication_from_str(&load_test_file("publication.xml")).unwrap();
    let site = &publication.tables[0].sites[1];

    assert_eq!(site.types_of_site.len(), 2);
    assert!(site.types_of_site[0].is_known());
    assert!(!site.types_of_site[1].is_known());
    assert_eq!(site.types_of_site[1].as_str(), "musterstadtTruckHub");
    assert!(matches!(site.location_reference(), Some(LocationReference::Area(_))));
    assert_eq!(site.operating_hours(), Some(&OperatingHours::Unknown));
    assert!(matches!(site.stations[0].refill_points[0], RefillPoint::Fuel(_)));
}

#[test]
fn test_strict_code_lists_with_registered_extension() {
    let xml = load_test_file("publication.xml");

    let result = load_publication_from_str_with(&xml, &ParseOptions::strict(None));
    assert!(
        matches!(result, Err(DatexError::InvalidValue { ref value, .. }) if value == "musterstadtTruckHub"),
        "Expected InvalidValue for the vendor token, got {:?}",
        result
    );

    let registry = CodeListRegistry::new();
    registry.register::<TypeOfSite>("musterstadtTruckHub").unwrap();
    let publication = load_publication_from_str_with(&xml, &ParseOptions::strict(Some(&registry)))
        .expect("Registered token should be accepted");
    assert_eq!(publication.tables[0].sites[1].types_of_site[1].as_str(), "musterstadtTruckHub");
}

#[test]
fn test_operating_hours_evaluation() {
    let publication = load_publication_from_str(&load_test_file("publication.xml")).unwrap();
    let hours = publication.tables[0].sites[0]
        .operating_hours()
        .expect("Missing operating hours");

    let at = |s: &str| DateTime::parse_from_rfc3339(s).unwrap();
    assert_eq!(hours.is_open_at(&at("2025-03-04T10:00:00+01:00"), &NoSpecialDays), Some(true));
    assert_eq!(hours.is_open_at(&at("2025-03-04T23:30:00+01:00"), &NoSpecialDays), Some(false));

    // Sunday public holidays are excluded from the regular hours.
    let holidays = |d: chrono::NaiveDate, _: &datex2_rs::types::SpecialDay| {
        d == chrono::NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
    };
    assert_eq!(hours.is_open_at(&at("2025-04-20T10:00:00+02:00"), &holidays), Some(false));
    assert_eq!(hours.is_open_at(&at("2025-04-20T10:00:00+02:00"), &NoSpecialDays), Some(true));
}

/// Load, save and load again: the two publications must be identical.
#[test]
fn test_round_trip_full_publication() {
    init_logger();
    let original = load_publication_from_str(&load_test_file("publication.xml")).unwrap();

    let saved = save_publication_to_string(&original).expect("Failed to save publication");
    assert!(saved.contains("<egi:energyInfrastructureTablePublication"));
    assert!(saved.contains("xmlns:egi=\"http://datex2.eu/schema/3/energyInfrastructure\""));
    assert!(saved.contains("xsi:type=\"egi:ElectricChargingPoint\""));

    let reloaded = load_publication_from_str(&saved).expect("Failed to reload saved publication");
    assert_eq!(reloaded, original);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_json_representation() {
    let publication = load_publication_from_str(&load_test_file("publication.xml")).unwrap();
    let json = serde_json::to_value(&publication).expect("Failed to serialize to JSON");

    assert_eq!(json["lang"], "de");
    assert_eq!(json["tables"][0]["id"], "TABLE-1");
    // Code lists serialize as their bare token.
    assert_eq!(json["tables"][0]["sites"][1]["types_of_site"][1], "musterstadtTruckHub");
}
