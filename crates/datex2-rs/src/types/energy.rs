// crates/datex2-rs/src/types/energy.rs

//! Energy infrastructure (`egi`): publications, tables, sites, stations,
//! refill points and connectors.
//!
//! Ownership is strictly top-down; each level owns its children.

use super::code_list::code_list;
use super::common::{Fault, FuelType, HeaderInformation, InternationalIdentifier, MultilingualString};
use super::facilities::{AsFacilityObject, Facility, FacilityObject};
use super::units::{Ampere, Meter, Percentage, Volt, Watt};
use chrono::{DateTime, FixedOffset};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// --- Code lists ---

code_list! {
    TypeOfSite = "TypeOfSiteEnum" {
        ONSTREET = "onstreet",
        PARKING_LOT = "parkingLot",
        PARKING_GARAGE = "parkingGarage",
        UNDERGROUND_PARKING_GARAGE = "undergroundParkingGarage",
        SERVICE_AREA = "serviceArea",
        PRIVATE_PROPERTY = "privateProperty",
        OTHER = "other",
    }
}

code_list! {
    /// Plug and socket standards.
    ConnectorType = "ConnectorTypeEnum" {
        CHADEMO = "chademo",
        CEE3 = "cee3",
        CEE5 = "cee5",
        DOMESTIC = "domestic",
        DOMESTIC_A = "domesticA",
        DOMESTIC_B = "domesticB",
        DOMESTIC_C = "domesticC",
        DOMESTIC_E = "domesticE",
        DOMESTIC_F = "domesticF",
        DOMESTIC_G = "domesticG",
        DOMESTIC_J = "domesticJ",
        DOMESTIC_L = "domesticL",
        IEC_60309X2_SINGLE_16 = "iec60309x2single16",
        IEC_60309X2_THREE_16 = "iec60309x2three16",
        IEC_60309X2_THREE_32 = "iec60309x2three32",
        IEC_60309X2_THREE_64 = "iec60309x2three64",
        IEC_62196_T1 = "iec62196T1",
        IEC_62196_T1_COMBO = "iec62196T1COMBO",
        IEC_62196_T2 = "iec62196T2",
        IEC_62196_T2_COMBO = "iec62196T2COMBO",
        IEC_62196_T3A = "iec62196T3A",
        IEC_62196_T3C = "iec62196T3C",
        PANTOGRAPH_BOTTOM_UP = "pantographBottomUp",
        PANTOGRAPH_TOP_DOWN = "pantographTopDown",
        TESLA_CONNECTOR_EUROPE = "teslaConnectorEurope",
        TESLA_R = "teslaR",
        TESLA_S = "teslaS",
        YAZAKI = "yazaki",
        OTHER = "other",
    }
}

code_list! {
    ConnectorFormat = "ConnectorFormatEnum" {
        SOCKET = "socket",
        CABLE_MODE_2 = "cableMode2",
        CABLE_MODE_3 = "cableMode3",
    }
}

code_list! {
    /// IEC 61851 charging modes and related DC protocols.
    ChargingMode = "ChargingModeEnum" {
        MODE_1_AC_1P = "mode1AC1p",
        MODE_1_AC_3P = "mode1AC3p",
        MODE_2_AC_1P = "mode2AC1p",
        MODE_2_AC_3P = "mode2AC3p",
        MODE_3_AC_1P = "mode3AC1p",
        MODE_3_AC_3P = "mode3AC3p",
        MODE_4_DC = "mode4DC",
        CCS = "ccs",
        LEGACY_INDUCTIVE = "legacyInductive",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

code_list! {
    AuthenticationAndIdentification = "AuthenticationAndIdentificationEnum" {
        APPS = "apps",
        CALLING = "calling",
        CASH_PAYMENT = "cashPayment",
        CREDIT_CARD = "creditCard",
        DEBIT_CARD = "debitCard",
        ISO_14443 = "iso14443",
        ISO_15118_PLUG_AND_CHARGE = "iso15118PlugAndCharge",
        NFC = "nfc",
        OVER_THE_AIR = "overTheAir",
        PINPAD = "pinpad",
        RFID = "rfid",
        SHORT_MESSAGE_SERVICE = "shortMessageService",
        WEBSITE = "website",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

code_list! {
    EnergySourceType = "EnergySourceTypeEnum" {
        BIOMASS = "biomass",
        COAL = "coal",
        GENERAL_FOSSIL = "generalFossil",
        GENERAL_RENEWABLE = "generalRenewable",
        GEOTHERMAL = "geothermal",
        HYDRO = "hydro",
        NATURAL_GAS = "naturalGas",
        NUCLEAR = "nuclear",
        SOLAR = "solar",
        WIND = "wind",
        OTHER = "other",
    }
}

code_list! {
    DeliveryUnit = "DeliveryUnitEnum" {
        CUBIC_METRE = "cubicMetre",
        KILOGRAM = "kilogram",
        KWH = "kWh",
        LITRE = "litre",
        MINUTE = "minute",
        OTHER = "other",
    }
}

// --- Publication tree ---

/// The root of an energy infrastructure table publication.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnergyInfrastructureTablePublication {
    pub lang: String,
    /// Written as the `modelBaseVersion` attribute; `"3"` for this schema.
    pub model_base_version: String,
    pub publication_time: DateTime<FixedOffset>,
    pub publication_creator: InternationalIdentifier,
    pub header_information: Option<HeaderInformation>,
    pub tables: Vec<EnergyInfrastructureTable>,
}

impl EnergyInfrastructureTablePublication {
    pub const MODEL_BASE_VERSION: &'static str = "3";

    pub fn new(
        lang: impl Into<String>,
        publication_time: DateTime<FixedOffset>,
        publication_creator: InternationalIdentifier,
    ) -> Self {
        Self {
            lang: lang.into(),
            model_base_version: Self::MODEL_BASE_VERSION.to_string(),
            publication_time,
            publication_creator,
            header_information: None,
            tables: Vec::new(),
        }
    }

    /// Every site across all tables.
    pub fn sites(&self) -> impl Iterator<Item = &EnergyInfrastructureSite> {
        self.tables.iter().flat_map(|t| t.sites.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnergyInfrastructureTable {
    pub id: String,
    pub version: String,
    pub table_name: Option<MultilingualString>,
    pub sites: Vec<EnergyInfrastructureSite>,
}

impl EnergyInfrastructureTable {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            table_name: None,
            sites: Vec::new(),
        }
    }
}

/// A physical site with one or more stations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnergyInfrastructureSite {
    pub facility: Facility,
    pub types_of_site: Vec<TypeOfSite>,
    pub stations: Vec<EnergyInfrastructureStation>,
}

impl EnergyInfrastructureSite {
    pub fn new(facility: Facility) -> Self {
        Self {
            facility,
            types_of_site: Vec::new(),
            stations: Vec::new(),
        }
    }
}

/// A group of refill points sharing power supply and user interface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnergyInfrastructureStation {
    pub facility: Facility,
    pub total_maximum_power: Option<Watt>,
    pub authentication_and_identification_methods: Vec<AuthenticationAndIdentification>,
    pub user_interface_languages: Vec<String>,
    pub refill_points: Vec<RefillPoint>,
}

impl EnergyInfrastructureStation {
    pub fn new(facility: Facility) -> Self {
        Self {
            facility,
            total_maximum_power: None,
            authentication_and_identification_methods: Vec::new(),
            user_interface_languages: Vec::new(),
            refill_points: Vec::new(),
        }
    }
}

// --- Refill points ---

/// `egi:RefillPoint`, selected by `xsi:type`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RefillPoint {
    ElectricCharging(ElectricChargingPoint),
    Fuel(FuelRefillPoint),
}

impl RefillPoint {
    pub fn base(&self) -> &RefillPointBase {
        match self {
            RefillPoint::ElectricCharging(p) => &p.base,
            RefillPoint::Fuel(p) => &p.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut RefillPointBase {
        match self {
            RefillPoint::ElectricCharging(p) => &mut p.base,
            RefillPoint::Fuel(p) => &mut p.base,
        }
    }
}

/// Fields shared by every kind of refill point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RefillPointBase {
    pub facility: Facility,
    pub fuel_types: Vec<FuelType>,
    pub delivery_unit: Option<DeliveryUnit>,
    pub faults: Vec<Fault>,
}

impl RefillPointBase {
    pub fn new(facility: Facility) -> Self {
        Self {
            facility,
            fuel_types: Vec::new(),
            delivery_unit: None,
            faults: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElectricChargingPoint {
    pub base: RefillPointBase,
    pub available_charging_power: Option<Watt>,
    pub charging_modes: Vec<ChargingMode>,
    pub electric_energy: Option<ElectricEnergy>,
    pub connectors: Vec<Connector>,
}

impl ElectricChargingPoint {
    pub fn new(base: RefillPointBase, connectors: Vec<Connector>) -> Self {
        Self {
            base,
            available_charging_power: None,
            charging_modes: Vec::new(),
            electric_energy: None,
            connectors,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FuelRefillPoint {
    pub base: RefillPointBase,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Connector {
    pub connector_type: ConnectorType,
    pub connector_format: Option<ConnectorFormat>,
    pub charging_mode: Option<ChargingMode>,
    pub max_power_at_socket: Watt,
    pub voltage: Option<Volt>,
    pub maximum_current: Option<Ampere>,
    pub cable_length: Option<Meter>,
}

impl Connector {
    pub fn new(connector_type: ConnectorType, max_power_at_socket: Watt) -> Self {
        Self {
            connector_type,
            connector_format: None,
            charging_mode: None,
            max_power_at_socket,
            voltage: None,
            maximum_current: None,
            cable_length: None,
        }
    }
}

/// Origin and environmental impact of the supplied electricity.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElectricEnergy {
    pub energy_mix: Vec<EnergySourceShare>,
    pub is_green_energy: Option<bool>,
    /// Grams of CO2 per kWh.
    pub carbon_dioxide_impact: Option<f64>,
    /// Milligrams of nuclear waste per kWh.
    pub nuclear_waste_impact: Option<f64>,
}

impl ElectricEnergy {
    /// The sum of all mix percentages.
    pub fn mix_total(&self) -> f64 {
        self.energy_mix.iter().map(|s| s.percentage.value()).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnergySourceShare {
    pub energy_source: EnergySourceType,
    pub percentage: Percentage,
}

// --- Shared accessors ---

macro_rules! facility_accessor {
    ($($ty:ty => $($field:ident).+),* $(,)?) => {
        $(
            impl AsFacilityObject for $ty {
                fn facility_object(&self) -> &FacilityObject {
                    &self.$($field).+
                }

                fn facility_object_mut(&mut self) -> &mut FacilityObject {
                    &mut self.$($field).+
                }
            }
        )*
    };
}

facility_accessor! {
    EnergyInfrastructureSite => facility.object,
    EnergyInfrastructureStation => facility.object,
    RefillPointBase => facility.object,
    ElectricChargingPoint => base.facility.object,
    FuelRefillPoint => base.facility.object,
}

impl AsFacilityObject for RefillPoint {
    fn facility_object(&self) -> &FacilityObject {
        &self.base().facility.object
    }

    fn facility_object_mut(&mut self) -> &mut FacilityObject {
        &mut self.base_mut().facility.object
    }
}
