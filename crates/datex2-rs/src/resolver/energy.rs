// crates/datex2-rs/src/resolver/energy.rs

//! Resolvers for the `energyInfrastructure` namespace.

use super::FromXml;
use super::facilities::resolve_facility;
use super::utils::{Fields, variant_name};
use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::types::{
    Connector, ElectricChargingPoint, ElectricEnergy, EnergyInfrastructureSite,
    EnergyInfrastructureStation, EnergyInfrastructureTable, EnergyInfrastructureTablePublication,
    EnergySourceShare, FuelRefillPoint, RefillPoint, RefillPointBase,
};
use crate::xml::{Namespace, XmlElement};

const NS: Namespace = Namespace::EnergyInfrastructure;

/// Tolerance for rounding in published mix percentages.
const MIX_TOLERANCE: f64 = 1e-6;

impl FromXml for EnergyInfrastructureTablePublication {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let model_base_version = f
            .optional_attribute("modelBaseVersion")?
            .unwrap_or_else(|| EnergyInfrastructureTablePublication::MODEL_BASE_VERSION.to_string());

        Ok(EnergyInfrastructureTablePublication {
            lang: f.identifier_attribute("lang")?,
            model_base_version,
            publication_time: f.mandatory_value("publicationTime")?,
            publication_creator: f.mandatory("publicationCreator")?,
            header_information: f.optional("headerInformation")?,
            tables: f.bounded_collection("energyInfrastructureTable", 1, None)?,
        })
    }
}

impl FromXml for EnergyInfrastructureTable {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(EnergyInfrastructureTable {
            id: f.identifier_attribute("id")?,
            version: f.identifier_attribute("version")?,
            table_name: f.optional("tableName")?,
            sites: f.bounded_collection("energyInfrastructureSite", 1, None)?,
        })
    }
}

impl FromXml for EnergyInfrastructureSite {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(EnergyInfrastructureSite {
            facility: resolve_facility(&f)?,
            types_of_site: f.values("typeOfSite")?,
            stations: f.bounded_collection("energyInfrastructureStation", 1, None)?,
        })
    }
}

impl FromXml for EnergyInfrastructureStation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(EnergyInfrastructureStation {
            facility: resolve_facility(&f)?,
            total_maximum_power: f.optional_value("totalMaximumPower")?,
            authentication_and_identification_methods: f
                .values("authenticationAndIdentificationMethods")?,
            user_interface_languages: f.values("userInterfaceLanguage")?,
            refill_points: f.bounded_collection("refillPoint", 1, None)?,
        })
    }
}

// --- Refill points ---

fn resolve_refill_point_base(f: &Fields<'_, '_>) -> Result<RefillPointBase, DatexError> {
    Ok(RefillPointBase {
        facility: resolve_facility(f)?,
        fuel_types: f.values("fuelType")?,
        delivery_unit: f.optional_value("deliveryUnit")?,
        faults: f.collection("fault")?,
    })
}

impl FromXml for RefillPoint {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        match variant_name(element, "RefillPoint") {
            "ElectricChargingPoint" | "electricChargingPoint" => {
                Ok(RefillPoint::ElectricCharging(ElectricChargingPoint {
                    base: resolve_refill_point_base(&f)?,
                    available_charging_power: f.optional_value("availableChargingPower")?,
                    charging_modes: f.values("chargingModes")?,
                    electric_energy: f.optional("electricEnergy")?,
                    connectors: f.bounded_collection("connector", 1, None)?,
                }))
            }
            "FuelRefillPoint" | "fuelRefillPoint" => Ok(RefillPoint::Fuel(FuelRefillPoint {
                base: resolve_refill_point_base(&f)?,
            })),
            other => Err(DatexError::UnknownVariant {
                family: "RefillPoint",
                name: other.to_string(),
            }),
        }
    }
}

impl FromXml for Connector {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(Connector {
            connector_type: f.mandatory_value("connectorType")?,
            connector_format: f.optional_value("connectorFormat")?,
            charging_mode: f.optional_value("chargingMode")?,
            max_power_at_socket: f.mandatory_value("maxPowerAtSocket")?,
            voltage: f.optional_value("voltage")?,
            maximum_current: f.optional_value("maximumCurrent")?,
            cable_length: f.optional_value("cableLength")?,
        })
    }
}

impl FromXml for ElectricEnergy {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let energy = ElectricEnergy {
            energy_mix: f.collection("energyMix")?,
            is_green_energy: f.optional_value("isGreenEnergy")?,
            carbon_dioxide_impact: f.optional_value("carbonDioxideImpact")?,
            nuclear_waste_impact: f.optional_value("nuclearWasteImpact")?,
        };

        let total = energy.mix_total();
        if total > 100.0 + MIX_TOLERANCE {
            return Err(DatexError::Validation(format!(
                "energy mix percentages sum to {}, more than 100",
                total
            )));
        }
        Ok(energy)
    }
}

impl FromXml for EnergySourceShare {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(EnergySourceShare {
            energy_source: f.mandatory_value("energySource")?,
            percentage: f.mandatory_value("percentage")?,
        })
    }
}
