// crates/datex2-rs/src/builder/common.rs

//! Builders for the `common` namespace.

use super::{ElementBuilder, ToXml};
use crate::types::{
    DayWeekMonth, Fault, GrossWeightCharacteristic, HeaderInformation, HeightCharacteristic,
    InternationalIdentifier, LengthCharacteristic, LocalizedText, MultilingualString, OverallPeriod,
    Period, SpecialDay, TimePeriodByHour, VehicleCharacteristics, VersionedReference,
    WidthCharacteristic,
};
use crate::xml::{Namespace, XmlElement, XmlName};

const NS: Namespace = Namespace::Common;

impl ToXml for LocalizedText {
    fn element_name() -> XmlName {
        NS.name("value")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        let mut element = XmlElement::with_text(name, self.text.clone());
        if let Some(lang) = &self.lang {
            element.set_attribute(XmlName::unqualified("lang"), lang.clone());
        }
        element
    }
}

impl ToXml for MultilingualString {
    fn element_name() -> XmlName {
        NS.name("multilingualString")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .nested("values", NS, |b| b.children("value", &self.values))
            .build()
    }
}

impl ToXml for VersionedReference {
    fn element_name() -> XmlName {
        NS.name("versionedReference")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .attribute("id", &self.id)
            .attribute("version", &self.version)
            .optional_attribute("targetClass", self.target_class.as_ref())
            .build()
    }
}

impl ToXml for InternationalIdentifier {
    fn element_name() -> XmlName {
        NS.name("internationalIdentifier")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("country", &self.country)
            .value("nationalIdentifier", &self.national_identifier)
            .build()
    }
}

impl ToXml for HeaderInformation {
    fn element_name() -> XmlName {
        NS.name("headerInformation")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_value("confidentiality", self.confidentiality.as_ref())
            .value("informationStatus", &self.information_status)
            .optional_value("urgency", self.urgency.as_ref())
            .build()
    }
}

// --- Validity periods ---

impl ToXml for OverallPeriod {
    fn element_name() -> XmlName {
        NS.name("overallPeriod")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("overallStartTime", &self.overall_start_time)
            .optional_value("overallEndTime", self.overall_end_time.as_ref())
            .children("validPeriod", &self.valid_periods)
            .children("exceptionPeriod", &self.exception_periods)
            .build()
    }
}

impl ToXml for Period {
    fn element_name() -> XmlName {
        NS.name("period")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_value("startOfPeriod", self.start_of_period.as_ref())
            .optional_value("endOfPeriod", self.end_of_period.as_ref())
            .optional_child("periodName", self.period_name.as_ref())
            .children("recurringTimePeriodOfDay", &self.recurring_time_periods_of_day)
            .children("recurringDayWeekMonthPeriod", &self.recurring_day_week_month_periods)
            .children("recurringSpecialDay", &self.recurring_special_days)
            .build()
    }
}

impl ToXml for TimePeriodByHour {
    fn element_name() -> XmlName {
        NS.name("recurringTimePeriodOfDay")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .xsi_type(NS, "TimePeriodByHour")
            .value("startTimeOfPeriod", &self.start_time_of_period)
            .value("endTimeOfPeriod", &self.end_time_of_period)
            .build()
    }
}

fn write_day_week_month(b: ElementBuilder, dwm: &DayWeekMonth) -> ElementBuilder {
    b.values("applicableDay", &dwm.applicable_days)
        .values("applicableWeek", &dwm.applicable_weeks)
        .values("applicableMonth", &dwm.applicable_months)
}

impl ToXml for DayWeekMonth {
    fn element_name() -> XmlName {
        NS.name("recurringDayWeekMonthPeriod")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        write_day_week_month(ElementBuilder::new(name, NS), self).build()
    }
}

impl ToXml for SpecialDay {
    fn element_name() -> XmlName {
        NS.name("recurringSpecialDay")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        write_day_week_month(ElementBuilder::new(name, NS), &self.day_week_month)
            .value("intersectWithApplicableDays", &self.intersect_with_applicable_days)
            .value("specialDayType", &self.special_day_type)
            .optional_value("publicEvent", self.public_event.as_ref())
            .children("namedArea", &self.named_areas)
            .build()
    }
}

// --- Vehicles ---

impl ToXml for VehicleCharacteristics {
    fn element_name() -> XmlName {
        NS.name("vehicleCharacteristics")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .values("fuelType", &self.fuel_types)
            .values("loadType", &self.load_types)
            .values("vehicleEquipment", &self.vehicle_equipment)
            .values("vehicleType", &self.vehicle_types)
            .values("vehicleUsage", &self.vehicle_usages)
            .children("grossWeightCharacteristic", &self.gross_weight_characteristics)
            .children("heightCharacteristic", &self.height_characteristics)
            .children("lengthCharacteristic", &self.length_characteristics)
            .children("widthCharacteristic", &self.width_characteristics)
            .build()
    }
}

impl ToXml for GrossWeightCharacteristic {
    fn element_name() -> XmlName {
        NS.name("grossWeightCharacteristic")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("comparisonOperator", &self.comparison_operator)
            .value("grossVehicleWeight", &self.gross_vehicle_weight)
            .optional_value("typeOfWeight", self.type_of_weight.as_ref())
            .build()
    }
}

impl ToXml for HeightCharacteristic {
    fn element_name() -> XmlName {
        NS.name("heightCharacteristic")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("comparisonOperator", &self.comparison_operator)
            .value("vehicleHeight", &self.vehicle_height)
            .build()
    }
}

impl ToXml for LengthCharacteristic {
    fn element_name() -> XmlName {
        NS.name("lengthCharacteristic")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("comparisonOperator", &self.comparison_operator)
            .value("vehicleLength", &self.vehicle_length)
            .build()
    }
}

impl ToXml for WidthCharacteristic {
    fn element_name() -> XmlName {
        NS.name("widthCharacteristic")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .value("comparisonOperator", &self.comparison_operator)
            .value("vehicleWidth", &self.vehicle_width)
            .build()
    }
}

impl ToXml for Fault {
    fn element_name() -> XmlName {
        NS.name("fault")
    }

    fn to_xml_as(&self, name: XmlName) -> XmlElement {
        ElementBuilder::new(name, NS)
            .optional_value("faultIdentifier", self.fault_identifier.as_ref())
            .optional_child("faultDescription", self.fault_description.as_ref())
            .optional_value("faultCreationTime", self.fault_creation_time.as_ref())
            .value("faultLastUpdateTime", &self.fault_last_update_time)
            .optional_value("faultSeverity", self.fault_severity.as_ref())
            .build()
    }
}
