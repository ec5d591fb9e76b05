// crates/datex2-rs/src/types/location.rs

//! Location referencing (`loc`) and its extension (`locx`).

use super::code_list::code_list;
use super::common::MultilingualString;
use super::units::{AngleInDegrees, CountryCode};
use crate::error::DatexError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// --- Code lists ---

code_list! {
    AltitudeAccuracy = "AltitudeAccuracyEnum" {
        EQUAL_TO_OR_BETTER_THAN_1_METRE = "equalToOrBetterThan1Metre",
        EQUAL_TO_OR_BETTER_THAN_2_METRES = "equalToOrBetterThan2Metres",
        EQUAL_TO_OR_BETTER_THAN_5_METRES = "equalToOrBetterThan5Metres",
        EQUAL_TO_OR_BETTER_THAN_10_METRES = "equalToOrBetterThan10Metres",
        EQUAL_TO_OR_BETTER_THAN_20_METRES = "equalToOrBetterThan20Metres",
        EQUAL_TO_OR_BETTER_THAN_50_METRES = "equalToOrBetterThan50Metres",
        EQUAL_TO_OR_BETTER_THAN_100_METRES = "equalToOrBetterThan100Metres",
        EQUAL_TO_OR_BETTER_THAN_200_METRES = "equalToOrBetterThan200Metres",
        OUT_OF_RANGE = "outOfRange",
        UNAVAILABLE = "unavailable",
    }
}

code_list! {
    /// Kinds of places within an area.
    AreaPlace = "AreaPlaceEnum" {
        IN_HIGH_ALTITUDE_AREAS = "inHighAltitudeAreas",
        IN_LOW_LYING_AREAS = "inLowLyingAreas",
        IN_MOUNTAINOUS_AREAS = "inMountainousAreas",
        IN_SHADED_AREAS = "inShadedAreas",
        IN_THE_CITY_CENTRE = "inTheCityCentre",
        IN_TUNNELS = "inTunnels",
        IN_URBAN_AREAS = "inUrbanAreas",
        ON_BRIDGES = "onBridges",
        ON_MOTORWAYS = "onMotorways",
        OTHER = "other",
    }
}

code_list! {
    NamedAreaType = "NamedAreaTypeEnum" {
        ADMINISTRATIVE_AREA = "administrativeArea",
        CITY = "city",
        COUNTRY = "country",
        COUNTY = "county",
        DISTRICT = "district",
        MUNICIPALITY = "municipality",
        PROVINCE = "province",
        REGION = "region",
        TOWN = "town",
        OTHER = "other",
    }
}

code_list! {
    /// Levels of the EU NUTS and LAU classifications.
    NutsCodeType = "NutsCodeTypeEnum" {
        NUTS_1 = "nuts1",
        NUTS_2 = "nuts2",
        NUTS_3 = "nuts3",
        LAU_1 = "lau1",
        LAU_2 = "lau2",
    }
}

code_list! {
    SubdivisionType = "SubdivisionTypeEnum" {
        AUTONOMOUS_COMMUNITY = "autonomousCommunity",
        CANTON = "canton",
        COUNTY = "county",
        DEPARTMENT = "department",
        DISTRICT = "district",
        FEDERAL_STATE = "federalState",
        MUNICIPALITY = "municipality",
        PROVINCE = "province",
        REGION = "region",
        STATE = "state",
        OTHER = "other",
    }
}

code_list! {
    AddressLineType = "AddressLineTypeEnum" {
        APARTMENT = "apartment",
        BUILDING = "building",
        DISTRICT_TERRITORY = "districtTerritory",
        FLOOR = "floor",
        PO_BOX = "poBox",
        REGION_STATE = "regionState",
        STREET = "street",
        TOWN_CITY = "townCity",
        UNIT = "unit",
    }
}

// --- Location references ---

/// `loc:LocationReference`, selected by `xsi:type`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocationReference {
    Point(PointLocation),
    Area(AreaLocation),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointLocation {
    pub point_by_coordinates: PointByCoordinates,
    /// Carried in `loc:_pointLocationExtension/locx:facilityLocation`.
    pub facility_location: Option<FacilityLocation>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointByCoordinates {
    pub bearing: Option<AngleInDegrees>,
    pub point_coordinates: PointCoordinates,
}

/// WGS 84 coordinates in decimal degrees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCoordinates {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Option<Altitude>,
}

impl PointCoordinates {
    /// # Errors
    /// Returns `DatexError::OutOfRange` if either coordinate is outside its range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DatexError> {
        check_range("latitude", latitude, 90.0)?;
        check_range("longitude", longitude, 180.0)?;
        Ok(Self {
            latitude,
            longitude,
            altitude: None,
        })
    }
}

pub(crate) fn check_range(quantity: &'static str, value: f64, bound: f64) -> Result<(), DatexError> {
    if value.is_finite() && (-bound..=bound).contains(&value) {
        Ok(())
    } else {
        Err(DatexError::OutOfRange {
            quantity,
            value,
            min: -bound,
            max: bound,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Altitude {
    /// Metres above the WGS 84 ellipsoid; may be negative.
    pub altitude_value: f64,
    pub altitude_accuracy: Option<AltitudeAccuracy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AreaLocation {
    pub named_areas: Vec<NamedArea>,
}

/// An area identified by name or administrative code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedArea {
    pub area_name: Option<MultilingualString>,
    pub named_area_type: Option<NamedAreaType>,
    pub subdivision_type: Option<SubdivisionType>,
    pub country: Option<CountryCode>,
    pub nuts: Option<NutsCode>,
    pub area_places: Vec<AreaPlace>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NutsCode {
    pub nuts_code_type: NutsCodeType,
    pub value: String,
}

// --- Location extension ---

/// Postal location of a facility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FacilityLocation {
    pub address: Option<Address>,
    /// An IANA time zone name, e.g. `Europe/Berlin`.
    pub time_zone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    pub postcode: Option<String>,
    pub city: Option<MultilingualString>,
    pub country_code: Option<CountryCode>,
    pub address_lines: Vec<AddressLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AddressLine {
    pub order: u32,
    pub line_type: Option<AddressLineType>,
    pub text: MultilingualString,
}
