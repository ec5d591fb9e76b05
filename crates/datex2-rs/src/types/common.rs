// crates/datex2-rs/src/types/common.rs

//! Types from the DATEX II `common` namespace: texts, references, header
//! information, validity periods, vehicle characteristics and faults.

use super::code_list::code_list;
use super::location::NamedArea;
use super::units::{CountryCode, Meter, Tonnes};
use chrono::{DateTime, FixedOffset, NaiveTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// --- Code lists ---

code_list! {
    /// Who may receive the information.
    ConfidentialityValue = "ConfidentialityValueEnum" {
        INTERNAL_USE = "internalUse",
        NO_RESTRICTION = "noRestriction",
        RESTRICTED_TO_AUTHORITIES = "restrictedToAuthorities",
        RESTRICTED_TO_AUTHORITIES_AND_TRAFFIC_OPERATORS = "restrictedToAuthoritiesAndTrafficOperators",
        RESTRICTED_TO_AUTHORITIES_TRAFFIC_OPERATORS_AND_PUBLISHERS = "restrictedToAuthoritiesTrafficOperatorsAndPublishers",
        RESTRICTED_TO_AUTHORITIES_TRAFFIC_OPERATORS_AND_VMS = "restrictedToAuthoritiesTrafficOperatorsAndVms",
    }
}

code_list! {
    InformationStatus = "InformationStatusEnum" {
        REAL = "real",
        SECURITY_EXERCISE = "securityExercise",
        TECHNICAL_EXERCISE = "technicalExercise",
        TEST = "test",
    }
}

code_list! {
    Urgency = "UrgencyEnum" {
        EXTREMELY_URGENT = "extremelyUrgent",
        URGENT = "urgent",
        NORMAL_URGENCY = "normalUrgency",
    }
}

code_list! {
    Day = "DayEnum" {
        MONDAY = "monday",
        TUESDAY = "tuesday",
        WEDNESDAY = "wednesday",
        THURSDAY = "thursday",
        FRIDAY = "friday",
        SATURDAY = "saturday",
        SUNDAY = "sunday",
    }
}

code_list! {
    /// The week of a month, counting days 1-7 as the first week.
    WeekOfMonth = "WeekOfMonthEnum" {
        FIRST_WEEK_OF_MONTH = "firstWeekOfMonth",
        SECOND_WEEK_OF_MONTH = "secondWeekOfMonth",
        THIRD_WEEK_OF_MONTH = "thirdWeekOfMonth",
        FOURTH_WEEK_OF_MONTH = "fourthWeekOfMonth",
        FIFTH_WEEK_OF_MONTH = "fifthWeekOfMonth",
    }
}

code_list! {
    MonthOfYear = "MonthOfYearEnum" {
        JANUARY = "january",
        FEBRUARY = "february",
        MARCH = "march",
        APRIL = "april",
        MAY = "may",
        JUNE = "june",
        JULY = "july",
        AUGUST = "august",
        SEPTEMBER = "september",
        OCTOBER = "october",
        NOVEMBER = "november",
        DECEMBER = "december",
    }
}

code_list! {
    SpecialDayType = "SpecialDayTypeEnum" {
        DAY_BEFORE_PUBLIC_HOLIDAY = "dayBeforePublicHoliday",
        DAY_FOLLOWING_PUBLIC_HOLIDAY = "dayFollowingPublicHoliday",
        IN_LIEU_OF_PUBLIC_HOLIDAY = "inLieuOfPublicHoliday",
        LONG_WEEKEND_DAY = "longWeekendDay",
        PUBLIC_EVENT_DAY = "publicEventDay",
        PUBLIC_HOLIDAY = "publicHoliday",
        SCHOOL_DAY = "schoolDay",
        SCHOOL_HOLIDAYS = "schoolHolidays",
        OTHER = "other",
    }
}

code_list! {
    PublicEventType = "PublicEventTypeEnum" {
        AGRICULTURAL_SHOW = "agriculturalShow",
        AIR_SHOW = "airShow",
        ART_EVENT = "artEvent",
        ATHLETICS_MEETING = "athleticsMeeting",
        BALL_GAME = "ballGame",
        BICYCLE_RACE = "bicycleRace",
        BOAT_RACE = "boatRace",
        BOAT_SHOW = "boatShow",
        CEREMONIAL_EVENT = "ceremonialEvent",
        COMMERCIAL_EVENT = "commercialEvent",
        CONCERT = "concert",
        CULTURAL_EVENT = "culturalEvent",
        EXHIBITION = "exhibition",
        FAIR = "fair",
        FESTIVAL = "festival",
        FOOTBALL_MATCH = "footballMatch",
        FUNFAIR = "funfair",
        MAJOR_EVENT = "majorEvent",
        MARATHON = "marathon",
        MARKET = "market",
        MOTOR_SHOW = "motorShow",
        MOTOR_SPORT_RACE_MEETING = "motorSportRaceMeeting",
        PARADE = "parade",
        PROCESSION = "procession",
        SPORTS_MEETING = "sportsMeeting",
        STATE_OCCASION = "stateOccasion",
        TRADE_FAIR = "tradeFair",
        OTHER = "other",
    }
}

code_list! {
    FuelType = "FuelTypeEnum" {
        ALL = "all",
        BATTERY = "battery",
        BIODIESEL = "biodiesel",
        CNG = "cng",
        DIESEL = "diesel",
        DIESEL_BATTERY_HYBRID = "dieselBatteryHybrid",
        ETHANOL = "ethanol",
        HYDROGEN = "hydrogen",
        LIQUID_GAS = "liquidGas",
        LNG = "lng",
        LPG = "lpg",
        METHANE = "methane",
        PETROL = "petrol",
        PETROL_95_OCTANE = "petrol95Octane",
        PETROL_98_OCTANE = "petrol98Octane",
        PETROL_BATTERY_HYBRID = "petrolBatteryHybrid",
        PETROL_LEADED = "petrolLeaded",
        PETROL_UNLEADED = "petrolUnleaded",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

code_list! {
    LoadType = "LoadTypeEnum" {
        ABNORMAL_LOAD = "abnormalLoad",
        AMMUNITION = "ammunition",
        CHEMICALS = "chemicals",
        COMBUSTIBLE_MATERIALS = "combustibleMaterials",
        CORROSIVE_MATERIALS = "corrosiveMaterials",
        DEBRIS = "debris",
        EMPTY = "empty",
        EXPLOSIVE_MATERIALS = "explosiveMaterials",
        EXTRA_HIGH_LOAD = "extraHighLoad",
        EXTRA_LONG_LOAD = "extraLongLoad",
        EXTRA_WIDE_LOAD = "extraWideLoad",
        FUEL = "fuel",
        GLASS = "glass",
        GOODS = "goods",
        HAZARDOUS_MATERIALS = "hazardousMaterials",
        LIQUID = "liquid",
        LIVESTOCK = "livestock",
        MATERIALS = "materials",
        OIL = "oil",
        ORDINARY = "ordinary",
        PERISHABLE_PRODUCTS = "perishableProducts",
        RADIOACTIVE_MATERIALS = "radioactiveMaterials",
        REFRIGERATED_GOODS = "refrigeratedGoods",
        REFUSE = "refuse",
        TOXIC_MATERIALS = "toxicMaterials",
        VEHICLES = "vehicles",
        OTHER = "other",
    }
}

code_list! {
    VehicleType = "VehicleTypeEnum" {
        AGRICULTURAL_VEHICLE = "agriculturalVehicle",
        ANY_VEHICLE = "anyVehicle",
        ARTICULATED_VEHICLE = "articulatedVehicle",
        BICYCLE = "bicycle",
        BUS = "bus",
        CAR = "car",
        CARAVAN = "caravan",
        CAR_OR_LIGHT_VEHICLE = "carOrLightVehicle",
        CAR_WITH_CARAVAN = "carWithCaravan",
        CAR_WITH_TRAILER = "carWithTrailer",
        CONSTRUCTION_OR_MAINTENANCE_VEHICLE = "constructionOrMaintenanceVehicle",
        FOUR_WHEEL_DRIVE = "fourWheelDrive",
        HIGH_SIDED_VEHICLE = "highSidedVehicle",
        LORRY = "lorry",
        MOPED = "moped",
        MOTORCYCLE = "motorcycle",
        MOTORCYCLE_WITH_SIDE_CAR = "motorcycleWithSideCar",
        MOTORSCOOTER = "motorscooter",
        TANKER = "tanker",
        THREE_WHEELED_VEHICLE = "threeWheeledVehicle",
        TRAILER = "trailer",
        TRAM = "tram",
        TWO_WHEELED_VEHICLE = "twoWheeledVehicle",
        VAN = "van",
        VEHICLE_WITH_CARAVAN = "vehicleWithCaravan",
        VEHICLE_WITH_TRAILER = "vehicleWithTrailer",
        UNKNOWN = "unknown",
        OTHER = "other",
    }
}

code_list! {
    VehicleUsage = "VehicleUsageEnum" {
        AGRICULTURAL = "agricultural",
        CAR_SHARING = "carSharing",
        CITY_LOGISTICS = "cityLogistics",
        COMMERCIAL = "commercial",
        EMERGENCY_SERVICES = "emergencyServices",
        MILITARY = "military",
        NON_COMMERCIAL = "nonCommercial",
        PATROL = "patrol",
        RECOVERY_SERVICES = "recoveryServices",
        ROAD_MAINTENANCE_OR_CONSTRUCTION = "roadMaintenanceOrConstruction",
        ROAD_OPERATOR = "roadOperator",
        TAXI = "taxi",
    }
}

code_list! {
    VehicleEquipment = "VehicleEquipmentEnum" {
        NOT_USING_SNOW_CHAINS = "notUsingSnowChains",
        NOT_USING_SNOW_CHAINS_OR_TYRES = "notUsingSnowChainsOrTyres",
        SNOW_CHAINS_IN_USE = "snowChainsInUse",
        SNOW_CHAINS_OR_TYRES_IN_USE = "snowChainsOrTyresInUse",
        SNOW_TYRES_IN_USE = "snowTyresInUse",
        WITHOUT_SNOW_TYRES_OR_CHAINS_ON_BOARD = "withoutSnowTyresOrChainsOnBoard",
    }
}

code_list! {
    ComparisonOperator = "ComparisonOperatorEnum" {
        EQUAL_TO = "equalTo",
        GREATER_THAN = "greaterThan",
        GREATER_THAN_OR_EQUAL_TO = "greaterThanOrEqualTo",
        LESS_THAN = "lessThan",
        LESS_THAN_OR_EQUAL_TO = "lessThanOrEqualTo",
    }
}

code_list! {
    WeightType = "WeightTypeEnum" {
        ACTUAL = "actual",
        MAXIMUM_PERMITTED = "maximumPermitted",
    }
}

code_list! {
    FaultSeverity = "FaultSeverityEnum" {
        HIGH = "high",
        MEDIUM = "medium",
        LOW = "low",
        UNKNOWN = "unknown",
    }
}

// --- Texts and references ---

/// A text in one language. `lang` is absent for language-neutral text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalizedText {
    pub lang: Option<String>,
    pub text: String,
}

/// `com:MultilingualString`: at least one text, optionally per language.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultilingualString {
    pub values: Vec<LocalizedText>,
}

impl MultilingualString {
    /// A string with a single language-neutral value.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            values: vec![LocalizedText {
                lang: None,
                text: text.into(),
            }],
        }
    }

    /// A string with a single value in `lang`.
    pub fn in_language(lang: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            values: vec![LocalizedText {
                lang: Some(lang.into()),
                text: text.into(),
            }],
        }
    }

    /// Adds a translation.
    pub fn with(mut self, lang: impl Into<String>, text: impl Into<String>) -> Self {
        self.values.push(LocalizedText {
            lang: Some(lang.into()),
            text: text.into(),
        });
        self
    }

    /// The text for `lang`, compared case-insensitively.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.lang.as_deref().is_some_and(|l| l.eq_ignore_ascii_case(lang)))
            .map(|v| v.text.as_str())
    }

    pub fn first(&self) -> Option<&str> {
        self.values.first().map(|v| v.text.as_str())
    }
}

/// A reference to an object published elsewhere, by identifier and version.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VersionedReference {
    pub id: String,
    pub version: String,
    pub target_class: Option<String>,
}

impl VersionedReference {
    pub fn new(id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            target_class: None,
        }
    }
}

/// A supplier or publisher identified within a country.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InternationalIdentifier {
    pub country: CountryCode,
    pub national_identifier: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeaderInformation {
    pub confidentiality: Option<ConfidentialityValue>,
    pub information_status: InformationStatus,
    pub urgency: Option<Urgency>,
}

impl HeaderInformation {
    pub fn new(information_status: InformationStatus) -> Self {
        Self {
            confidentiality: None,
            information_status,
            urgency: None,
        }
    }
}

// --- Validity periods ---

/// The overall window of validity, refined by valid and exception periods.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OverallPeriod {
    pub overall_start_time: DateTime<FixedOffset>,
    pub overall_end_time: Option<DateTime<FixedOffset>>,
    pub valid_periods: Vec<Period>,
    pub exception_periods: Vec<Period>,
}

impl OverallPeriod {
    pub fn new(overall_start_time: DateTime<FixedOffset>) -> Self {
        Self {
            overall_start_time,
            overall_end_time: None,
            valid_periods: Vec::new(),
            exception_periods: Vec::new(),
        }
    }
}

/// A period bounded by optional instants and refined by recurring patterns.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Period {
    pub start_of_period: Option<DateTime<FixedOffset>>,
    pub end_of_period: Option<DateTime<FixedOffset>>,
    pub period_name: Option<MultilingualString>,
    pub recurring_time_periods_of_day: Vec<TimePeriodByHour>,
    pub recurring_day_week_month_periods: Vec<DayWeekMonth>,
    pub recurring_special_days: Vec<SpecialDay>,
}

/// A daily window between two times of day. An end before the start runs
/// past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimePeriodByHour {
    pub start_time_of_period: NaiveTime,
    pub end_time_of_period: NaiveTime,
}

/// Days, weeks of month and months. An empty list matches every value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayWeekMonth {
    pub applicable_days: Vec<Day>,
    pub applicable_weeks: Vec<WeekOfMonth>,
    pub applicable_months: Vec<MonthOfYear>,
}

impl DayWeekMonth {
    /// Builds the pattern, dropping duplicate entries.
    pub fn new(
        applicable_days: impl IntoIterator<Item = Day>,
        applicable_weeks: impl IntoIterator<Item = WeekOfMonth>,
        applicable_months: impl IntoIterator<Item = MonthOfYear>,
    ) -> Self {
        Self {
            applicable_days: super::distinct(applicable_days),
            applicable_weeks: super::distinct(applicable_weeks),
            applicable_months: super::distinct(applicable_months),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.applicable_days.is_empty()
            && self.applicable_weeks.is_empty()
            && self.applicable_months.is_empty()
    }
}

/// A day that is special (holiday, event day, ...), optionally combined with
/// a day/week/month pattern.
///
/// With `intersect_with_applicable_days` set, a date must be both special and
/// inside the pattern; otherwise either is enough.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpecialDay {
    pub day_week_month: DayWeekMonth,
    pub intersect_with_applicable_days: bool,
    pub special_day_type: SpecialDayType,
    pub public_event: Option<PublicEventType>,
    pub named_areas: Vec<NamedArea>,
}

impl SpecialDay {
    pub fn new(special_day_type: SpecialDayType, intersect_with_applicable_days: bool) -> Self {
        Self {
            day_week_month: DayWeekMonth::default(),
            intersect_with_applicable_days,
            special_day_type,
            public_event: None,
            named_areas: Vec::new(),
        }
    }
}

// --- Vehicles ---

/// The vehicles a facility or restriction applies to.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VehicleCharacteristics {
    pub fuel_types: Vec<FuelType>,
    pub load_types: Vec<LoadType>,
    pub vehicle_equipment: Vec<VehicleEquipment>,
    pub vehicle_types: Vec<VehicleType>,
    pub vehicle_usages: Vec<VehicleUsage>,
    pub gross_weight_characteristics: Vec<GrossWeightCharacteristic>,
    pub height_characteristics: Vec<HeightCharacteristic>,
    pub length_characteristics: Vec<LengthCharacteristic>,
    pub width_characteristics: Vec<WidthCharacteristic>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GrossWeightCharacteristic {
    pub comparison_operator: ComparisonOperator,
    pub gross_vehicle_weight: Tonnes,
    pub type_of_weight: Option<WeightType>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeightCharacteristic {
    pub comparison_operator: ComparisonOperator,
    pub vehicle_height: Meter,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LengthCharacteristic {
    pub comparison_operator: ComparisonOperator,
    pub vehicle_length: Meter,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WidthCharacteristic {
    pub comparison_operator: ComparisonOperator,
    pub vehicle_width: Meter,
}

// --- Faults ---

/// A fault reported for a piece of equipment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fault {
    pub fault_identifier: Option<String>,
    pub fault_description: Option<MultilingualString>,
    pub fault_creation_time: Option<DateTime<FixedOffset>>,
    pub fault_last_update_time: DateTime<FixedOffset>,
    pub fault_severity: Option<FaultSeverity>,
}

impl Fault {
    pub fn new(fault_last_update_time: DateTime<FixedOffset>) -> Self {
        Self {
            fault_identifier: None,
            fault_description: None,
            fault_creation_time: None,
            fault_last_update_time,
            fault_severity: None,
        }
    }
}
