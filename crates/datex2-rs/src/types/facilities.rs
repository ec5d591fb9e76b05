// crates/datex2-rs/src/types/facilities.rs

//! Facility objects (`fac`) shared by all site, station and amenity types.
//!
//! The schema's abstract `FacilityObject` / `Facility` classes are modelled
//! by composition: every concrete facility type holds the shared part as a
//! field and exposes it through [`AsFacilityObject`]. The schema's choice
//! groups (`OperatingHours`, `Organisation`, `SupplementalFacility`) are
//! closed enums.

use super::code_list::code_list;
use super::common::{MultilingualString, OverallPeriod, Period, VehicleCharacteristics, VersionedReference};
use super::location::LocationReference;
use super::units::Meter;
use crate::xml::XmlElement;
use chrono::{DateTime, FixedOffset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// --- Code lists ---

code_list! {
    Accessibility = "AccessibilityEnum" {
        BARRIER_FREE_ACCESSIBLE = "barrierFreeAccessible",
        HANDICAPPED_ACCESSIBLE = "handicappedAccessible",
        HANDICAPPED_EASEMENTS = "handicappedEasements",
        HANDICAPPED_MARKED = "handicappedMarked",
        ORIENTATION_SYSTEM_FOR_BLIND_PEOPLE = "orientationSystemForBlindPeople",
        WHEEL_CHAIR_ACCESSIBLE = "wheelChairAccessible",
        NONE = "none",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

code_list! {
    EquipmentType = "EquipmentTypeEnum" {
        BIKE_PARKING = "bikeParking",
        CASH_MACHINE = "cashMachine",
        DEFIBRILLATOR = "defibrillator",
        DUMPING_STATION = "dumpingStation",
        ELECTRIC_CHARGING_STATION = "electricChargingStation",
        ELEVATOR = "elevator",
        FIRE_EXTINGUISHER = "fireExtinguisher",
        FIRST_AID_EQUIPMENT = "firstAidEquipment",
        FRESH_WATER = "freshWater",
        INFORMATION_POINT = "informationPoint",
        INTERNET_TERMINAL = "internetTerminal",
        INTERNET_WIRELESS = "internetWireless",
        LUGGAGE_LOCKER = "luggageLocker",
        PAY_DESK = "payDesk",
        PAYMENT_MACHINE = "paymentMachine",
        PICNIC_FACILITIES = "picnicFacilities",
        PLAYGROUND = "playground",
        PUBLIC_PHONE = "publicPhone",
        REFUSE_BIN = "refuseBin",
        SHOWER = "shower",
        TOILET = "toilet",
        VENDING_MACHINE = "vendingMachine",
        WASTE_DISPOSAL = "wasteDisposal",
        NONE = "none",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

code_list! {
    ServiceType = "ServiceTypeEnum" {
        BAR = "bar",
        BIKE_SHARING = "bikeSharing",
        CAFE = "cafe",
        CAR_WASH = "carWash",
        FAST_FOOD = "fastFood",
        FOOD_SHOPPING = "foodShopping",
        HOTEL = "hotel",
        KIOSK = "kiosk",
        LAUNDRY = "laundry",
        LEISURE_ACTIVITIES = "leisureActivities",
        MEDICAL_FACILITY = "medicalFacility",
        MOTEL = "motel",
        PETROL_STATION = "petrolStation",
        PHARMACY = "pharmacy",
        POLICE = "police",
        RESTAURANT = "restaurant",
        TOURIST_INFORMATION = "touristInformation",
        TRUCK_REPAIR = "truckRepair",
        TRUCK_WASH = "truckWash",
        TYRE_REPAIR = "tyreRepair",
        VEHICLE_MAINTENANCE = "vehicleMaintenance",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

// --- Facility objects ---

/// Fields shared by every facility-like object.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FacilityObject {
    pub id: String,
    pub version: String,
    pub name: Option<MultilingualString>,
    pub aliases: Vec<MultilingualString>,
    pub description: Option<MultilingualString>,
    pub photo_urls: Vec<String>,
    pub accessibility: Vec<Accessibility>,
    pub last_updated: Option<DateTime<FixedOffset>>,
    pub operating_hours: Option<OperatingHours>,
    pub location_reference: Option<LocationReference>,
    pub owner: Option<Organisation>,
    pub operator: Option<Organisation>,
    pub helpdesk: Option<Organisation>,
    pub applicable_for_vehicles: Vec<VehicleCharacteristics>,
    pub dimension: Option<Dimension>,
    /// The `_facilityObjectExtension` element, kept verbatim.
    pub extension: Option<XmlElement>,
}

impl FacilityObject {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            name: None,
            aliases: Vec::new(),
            description: None,
            photo_urls: Vec::new(),
            accessibility: Vec::new(),
            last_updated: None,
            operating_hours: None,
            location_reference: None,
            owner: None,
            operator: None,
            helpdesk: None,
            applicable_for_vehicles: Vec::new(),
            dimension: None,
            extension: None,
        }
    }
}

/// A facility: a facility object plus its amenities and reserved parking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Facility {
    pub object: FacilityObject,
    pub supplemental_facilities: Vec<SupplementalFacility>,
    pub dedicated_parking_spaces: Vec<DedicatedParkingSpaces>,
}

impl Facility {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self::from(FacilityObject::new(id, version))
    }
}

impl From<FacilityObject> for Facility {
    fn from(object: FacilityObject) -> Self {
        Self {
            object,
            supplemental_facilities: Vec::new(),
            dedicated_parking_spaces: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DedicatedParkingSpaces {
    pub number_of_spaces: u32,
    pub applicable_for_vehicles: Option<VehicleCharacteristics>,
    pub description: Option<MultilingualString>,
}

/// An amenity belonging to a facility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SupplementalFacility {
    Equipment(SupplementalEquipment),
    Service(SupplementalService),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SupplementalEquipment {
    pub object: FacilityObject,
    pub equipment_type: EquipmentType,
    pub number_of_equipment: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SupplementalService {
    pub object: FacilityObject,
    pub service_type: ServiceType,
}

/// External measurements of a facility.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimension {
    pub length: Option<Meter>,
    pub width: Option<Meter>,
    pub height: Option<Meter>,
}

// --- Operating hours ---

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatingHours {
    OpenAllHours,
    Undefined,
    Unknown,
    Specification(OperatingHoursSpecification),
    ByReference(VersionedReference),
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperatingHoursSpecification {
    pub regular_hours: Option<OverallPeriod>,
    pub exceptional_hours: Vec<Period>,
    pub last_updated: Option<DateTime<FixedOffset>>,
}

// --- Organisations ---

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Organisation {
    Specification(OrganisationSpecification),
    ByReference(VersionedReference),
    Undefined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrganisationSpecification {
    pub name: MultilingualString,
    pub national_organisation_number: Option<String>,
    pub contact_information: Vec<ContactInformation>,
}

impl OrganisationSpecification {
    pub fn new(name: MultilingualString) -> Self {
        Self {
            name,
            national_organisation_number: None,
            contact_information: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactInformation {
    pub telephone_number: Option<String>,
    pub email: Option<String>,
    pub url_link_address: Option<String>,
    pub contact_details_languages: Vec<String>,
}

// --- Shared accessors ---

/// Access to the shared facility-object fields of any facility type.
pub trait AsFacilityObject {
    fn facility_object(&self) -> &FacilityObject;

    fn facility_object_mut(&mut self) -> &mut FacilityObject;

    fn id(&self) -> &str {
        &self.facility_object().id
    }

    fn version(&self) -> &str {
        &self.facility_object().version
    }

    fn name(&self) -> Option<&MultilingualString> {
        self.facility_object().name.as_ref()
    }

    fn operating_hours(&self) -> Option<&OperatingHours> {
        self.facility_object().operating_hours.as_ref()
    }

    fn location_reference(&self) -> Option<&LocationReference> {
        self.facility_object().location_reference.as_ref()
    }
}

impl AsFacilityObject for FacilityObject {
    fn facility_object(&self) -> &FacilityObject {
        self
    }

    fn facility_object_mut(&mut self) -> &mut FacilityObject {
        self
    }
}

impl AsFacilityObject for Facility {
    fn facility_object(&self) -> &FacilityObject {
        &self.object
    }

    fn facility_object_mut(&mut self) -> &mut FacilityObject {
        &mut self.object
    }
}

impl AsFacilityObject for SupplementalEquipment {
    fn facility_object(&self) -> &FacilityObject {
        &self.object
    }

    fn facility_object_mut(&mut self) -> &mut FacilityObject {
        &mut self.object
    }
}

impl AsFacilityObject for SupplementalService {
    fn facility_object(&self) -> &FacilityObject {
        &self.object
    }

    fn facility_object_mut(&mut self) -> &mut FacilityObject {
        &mut self.object
    }
}

impl AsFacilityObject for SupplementalFacility {
    fn facility_object(&self) -> &FacilityObject {
        match self {
            SupplementalFacility::Equipment(e) => &e.object,
            SupplementalFacility::Service(s) => &s.object,
        }
    }

    fn facility_object_mut(&mut self) -> &mut FacilityObject {
        match self {
            SupplementalFacility::Equipment(e) => &mut e.object,
            SupplementalFacility::Service(s) => &mut s.object,
        }
    }
}
