// crates/datex2-rs/src/resolver/common.rs

//! Resolvers for the `common` namespace.

use super::FromXml;
use super::utils::Fields;
use crate::error::DatexError;
use crate::options::ParseOptions;
use crate::types::{
    DayWeekMonth, Fault, GrossWeightCharacteristic, HeaderInformation, HeightCharacteristic,
    InternationalIdentifier, LengthCharacteristic, LocalizedText, MultilingualString, OverallPeriod,
    Period, SpecialDay, TimePeriodByHour, VehicleCharacteristics, VersionedReference,
    WidthCharacteristic,
};
use crate::xml::{Namespace, XmlElement};
use chrono::{DateTime, FixedOffset};

const NS: Namespace = Namespace::Common;

/// Rejects an end instant earlier than its start.
fn check_order(
    what: &str,
    start: Option<&DateTime<FixedOffset>>,
    end: Option<&DateTime<FixedOffset>>,
) -> Result<(), DatexError> {
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            return Err(DatexError::Validation(format!(
                "{} ends ({}) before it starts ({})",
                what,
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }
    }
    Ok(())
}

impl FromXml for LocalizedText {
    fn from_xml_with(element: &XmlElement, _: &ParseOptions<'_>) -> Result<Self, DatexError> {
        Ok(LocalizedText {
            lang: element.attribute("lang").map(str::to_string),
            text: element.text().to_string(),
        })
    }
}

impl FromXml for MultilingualString {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let values = f.mandatory_child("values")?;
        let values = Fields::new(values, NS, options).bounded_collection("value", 1, None)?;
        Ok(MultilingualString { values })
    }
}

impl FromXml for VersionedReference {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(VersionedReference {
            id: f.identifier_attribute("id")?,
            version: f.identifier_attribute("version")?,
            target_class: f.optional_attribute("targetClass")?,
        })
    }
}

impl FromXml for InternationalIdentifier {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(InternationalIdentifier {
            country: f.mandatory_value("country")?,
            national_identifier: f.mandatory_value("nationalIdentifier")?,
        })
    }
}

impl FromXml for HeaderInformation {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(HeaderInformation {
            confidentiality: f.optional_value("confidentiality")?,
            information_status: f.mandatory_value("informationStatus")?,
            urgency: f.optional_value("urgency")?,
        })
    }
}

// --- Validity periods ---

impl FromXml for OverallPeriod {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let overall_start_time = f.mandatory_value("overallStartTime")?;
        let overall_end_time = f.optional_value("overallEndTime")?;
        check_order("overallPeriod", Some(&overall_start_time), overall_end_time.as_ref())?;

        Ok(OverallPeriod {
            overall_start_time,
            overall_end_time,
            valid_periods: f.collection("validPeriod")?,
            exception_periods: f.collection("exceptionPeriod")?,
        })
    }
}

impl FromXml for Period {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        let start_of_period = f.optional_value("startOfPeriod")?;
        let end_of_period = f.optional_value("endOfPeriod")?;
        check_order("period", start_of_period.as_ref(), end_of_period.as_ref())?;

        Ok(Period {
            start_of_period,
            end_of_period,
            period_name: f.optional("periodName")?,
            recurring_time_periods_of_day: f.collection("recurringTimePeriodOfDay")?,
            recurring_day_week_month_periods: f.collection("recurringDayWeekMonthPeriod")?,
            recurring_special_days: f.collection("recurringSpecialDay")?,
        })
    }
}

impl FromXml for TimePeriodByHour {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(TimePeriodByHour {
            start_time_of_period: f.mandatory_value("startTimeOfPeriod")?,
            end_time_of_period: f.mandatory_value("endTimeOfPeriod")?,
        })
    }
}

fn day_week_month(f: &Fields<'_, '_>) -> Result<DayWeekMonth, DatexError> {
    Ok(DayWeekMonth {
        applicable_days: f.bounded_values("applicableDay", 0, Some(7))?,
        applicable_weeks: f.bounded_values("applicableWeek", 0, Some(5))?,
        applicable_months: f.bounded_values("applicableMonth", 0, Some(12))?,
    })
}

impl FromXml for DayWeekMonth {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        day_week_month(&Fields::new(element, NS, options))
    }
}

impl FromXml for SpecialDay {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(SpecialDay {
            day_week_month: day_week_month(&f)?,
            intersect_with_applicable_days: f.mandatory_value("intersectWithApplicableDays")?,
            special_day_type: f.mandatory_value("specialDayType")?,
            public_event: f.optional_value("publicEvent")?,
            named_areas: f.collection("namedArea")?,
        })
    }
}

// --- Vehicles ---

impl FromXml for VehicleCharacteristics {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(VehicleCharacteristics {
            fuel_types: f.values("fuelType")?,
            load_types: f.values("loadType")?,
            vehicle_equipment: f.values("vehicleEquipment")?,
            vehicle_types: f.values("vehicleType")?,
            vehicle_usages: f.values("vehicleUsage")?,
            gross_weight_characteristics: f.bounded_collection("grossWeightCharacteristic", 0, Some(2))?,
            height_characteristics: f.bounded_collection("heightCharacteristic", 0, Some(2))?,
            length_characteristics: f.bounded_collection("lengthCharacteristic", 0, Some(2))?,
            width_characteristics: f.bounded_collection("widthCharacteristic", 0, Some(2))?,
        })
    }
}

impl FromXml for GrossWeightCharacteristic {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(GrossWeightCharacteristic {
            comparison_operator: f.mandatory_value("comparisonOperator")?,
            gross_vehicle_weight: f.mandatory_value("grossVehicleWeight")?,
            type_of_weight: f.optional_value("typeOfWeight")?,
        })
    }
}

impl FromXml for HeightCharacteristic {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(HeightCharacteristic {
            comparison_operator: f.mandatory_value("comparisonOperator")?,
            vehicle_height: f.mandatory_value("vehicleHeight")?,
        })
    }
}

impl FromXml for LengthCharacteristic {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(LengthCharacteristic {
            comparison_operator: f.mandatory_value("comparisonOperator")?,
            vehicle_length: f.mandatory_value("vehicleLength")?,
        })
    }
}

impl FromXml for WidthCharacteristic {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(WidthCharacteristic {
            comparison_operator: f.mandatory_value("comparisonOperator")?,
            vehicle_width: f.mandatory_value("vehicleWidth")?,
        })
    }
}

impl FromXml for Fault {
    fn from_xml_with(element: &XmlElement, options: &ParseOptions<'_>) -> Result<Self, DatexError> {
        let f = Fields::new(element, NS, options);
        Ok(Fault {
            fault_identifier: f.optional_value("faultIdentifier")?,
            fault_description: f.optional("faultDescription")?,
            fault_creation_time: f.optional_value("faultCreationTime")?,
            fault_last_update_time: f.mandatory_value("faultLastUpdateTime")?,
            fault_severity: f.optional_value("faultSeverity")?,
        })
    }
}
