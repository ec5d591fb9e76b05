// crates/datex2-rs/src/builder/energy.rs

//! Builders for the `energyInfrastructure` namespace.

use super::facilities::write_facility;
use super::{ElementBuilder, ToXml};
use crate::types::{
    Connector, ElectricChargingPoint, ElectricEnergy, EnergyInfrastructureSite,
    EnergyInfrastructureStation, EnergyInfrastructureTable, EnergyInfrastructureTablePublication,
    EnergySourceShare, FuelRefillPoint, RefillPoint, RefillPointBase,
};
use crate::xml::{Namespace, XmlElement, XmlName};

const NS: Namespace = Namespace::EnergyInfrastructure;

impl ToXml for EnergyInfrastructureTablePublication {
    fn element_name() -> XmlName {
        NS.name("energyInfrastructureTablePublication")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .attribute("lang", &self.lang)
            .attribute("modelBaseVersion", &self.model_base_version)
            .value("publicationTime", &self.publication_time)
            .child("publicationCreator", &self.publication_creator)
            .optional_child("headerInformation", self.header_information.as_ref())
            .children("energyInfrastructureTable", &self.tables)
            .build()
    }
}

impl ToXml for EnergyInfrastructureTable {
    fn element_name() -> XmlName {
        NS.name("energyInfrastructureTable")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .attribute("id", &self.id)
            .attribute("version", &self.version)
            .optional_child("tableName", self.table_name.as_ref())
            .children("energyInfrastructureSite", &self.sites)
            .build()
    }
}

impl ToXml for EnergyInfrastructureSite {
    fn element_name() -> XmlName {
        NS.name("energyInfrastructureSite")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        write_facility(ElementBuilder::new(name, NS), &self.facility)
            .in_namespace(NS)
            .values("typeOfSite", &self.types_of_site)
            .children("energyInfrastructureStation", &self.stations)
            .build()
    }
}

impl ToXml for EnergyInfrastructureStation {
    fn element_name() -> XmlName {
        NS.name("energyInfrastructureStation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        write_facility(ElementBuilder::new(name, NS), &self.facility)
            .in_namespace(NS)
            .optional_value("totalMaximumPower", self.total_maximum_power.as_ref())
            .values(
                "authenticationAndIdentificationMethods",
                &self.authentication_and_identification_methods,
            )
            .values("userInterfaceLanguage", &self.user_interface_languages)
            .children("refillPoint", &self.refill_points)
            .build()
    }
}

// --- Refill points ---

fn write_refill_point_base(b: ElementBuilder, base: &RefillPointBase) -> ElementBuilder {
    write_facility(b, &base.facility)
        .in_namespace(NS)
        .values("fuelType", &base.fuel_types)
        .optional_value("deliveryUnit", base.delivery_unit.as_ref())
        .children("fault", &base.faults)
}

impl ToXml for RefillPoint {
    fn element_name() -> XmlName {
        NS.name("refillPoint")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        match self {
            RefillPoint::ElectricCharging(point) => point.to_xml_as(name),
            RefillPoint::Fuel(point) => point.to_xml_as(name),
        }
    }
}

impl ToXml for ElectricChargingPoint {
    fn element_name() -> XmlName {
        NS.name("refillPoint")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let b = ElementBuilder::new(name, NS).xsi_type(NS, "ElectricChargingPoint");
        write_refill_point_base(b, &self.base)
            .optional_value("availableChargingPower", self.available_charging_power.as_ref())
            .values("chargingModes", &self.charging_modes)
            .optional_child("electricEnergy", self.electric_energy.as_ref())
            .children("connector", &self.connectors)
            .build()
    }
}

impl ToXml for FuelRefillPoint {
    fn element_name() -> XmlName {
        NS.name("refillPoint")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let b = ElementBuilder::new(name, NS).xsi_type(NS, "FuelRefillPoint");
        write_refill_point_base(b, &self.base).build()
    }
}

impl ToXml for Connector {
    fn element_name() -> XmlName {
        NS.name("connector")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("connectorType", &self.connector_type)
            .optional_value("connectorFormat", self.connector_format.as_ref())
            .optional_value("chargingMode", self.charging_mode.as_ref())
            .value("maxPowerAtSocket", &self.max_power_at_socket)
            .optional_value("voltage", self.voltage.as_ref())
            .optional_value("maximumCurrent", self.maximum_current.as_ref())
            .optional_value("cableLength", self.cable_length.as_ref())
            .build()
    }
}

impl ToXml for ElectricEnergy {
    fn element_name() -> XmlName {
        NS.name("electricEnergy")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .children("energyMix", &self.energy_mix)
            .optional_value("isGreenEnergy", self.is_green_energy.as_ref())
            .optional_value("carbonDioxideImpact", self.carbon_dioxide_impact.as_ref())
            .optional_value("nuclearWasteImpact", self.nuclear_waste_impact.as_ref())
            .build()
    }
}

impl ToXml for EnergySourceShare {
    fn element_name() -> XmlName {
        NS.name("energyMix")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("energySource", &self.energy_source)
            .value("percentage", &self.percentage)
            .build()
    }
}
