// crates/datex2-rs/src/schedule.rs

//! Evaluates validity periods and operating hours at a given instant.
//!
//! Dates and times of day are taken in the instant's own offset, so a
//! publication written with `+01:00` timestamps is evaluated in that local
//! time. Unknown code tokens in a pattern never match.

use crate::types::{
    Day, DayWeekMonth, MonthOfYear, OperatingHours, OverallPeriod, Period, SpecialDay,
    TimePeriodByHour, WeekOfMonth,
};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Weekday};

/// Decides whether a date is a special day (public holiday, event day, ...).
///
/// Implemented for closures `Fn(NaiveDate, &SpecialDay) -> bool`, so a
/// lookup table can be passed inline.
pub trait SpecialDayCalendar {
    fn is_special_day(&self, date: NaiveDate, special_day: &SpecialDay) -> bool;
}

impl<F> SpecialDayCalendar for F
where
    F: Fn(NaiveDate, &SpecialDay) -> bool,
{
    fn is_special_day(&self, date: NaiveDate, special_day: &SpecialDay) -> bool {
        self(date, special_day)
    }
}

/// A calendar without any special days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoSpecialDays;

impl SpecialDayCalendar for NoSpecialDays {
    fn is_special_day(&self, _date: NaiveDate, _special_day: &SpecialDay) -> bool {
        false
    }
}

// --- Calendar mapping ---

fn day_of(date: NaiveDate) -> Day {
    match date.weekday() {
        Weekday::Mon => Day::MONDAY,
        Weekday::Tue => Day::TUESDAY,
        Weekday::Wed => Day::WEDNESDAY,
        Weekday::Thu => Day::THURSDAY,
        Weekday::Fri => Day::FRIDAY,
        Weekday::Sat => Day::SATURDAY,
        Weekday::Sun => Day::SUNDAY,
    }
}

/// Days 1-7 are the first week, 8-14 the second, and so on.
fn week_of(date: NaiveDate) -> WeekOfMonth {
    match date.day0() / 7 {
        0 => WeekOfMonth::FIRST_WEEK_OF_MONTH,
        1 => WeekOfMonth::SECOND_WEEK_OF_MONTH,
        2 => WeekOfMonth::THIRD_WEEK_OF_MONTH,
        3 => WeekOfMonth::FOURTH_WEEK_OF_MONTH,
        _ => WeekOfMonth::FIFTH_WEEK_OF_MONTH,
    }
}

fn month_of(date: NaiveDate) -> MonthOfYear {
    const MONTHS: [MonthOfYear; 12] = [
        MonthOfYear::JANUARY,
        MonthOfYear::FEBRUARY,
        MonthOfYear::MARCH,
        MonthOfYear::APRIL,
        MonthOfYear::MAY,
        MonthOfYear::JUNE,
        MonthOfYear::JULY,
        MonthOfYear::AUGUST,
        MonthOfYear::SEPTEMBER,
        MonthOfYear::OCTOBER,
        MonthOfYear::NOVEMBER,
        MonthOfYear::DECEMBER,
    ];
    MONTHS[date.month0() as usize].clone()
}

fn dimension_matches<T: PartialEq>(allowed: &[T], value: &T) -> bool {
    allowed.is_empty() || allowed.contains(value)
}

fn within(
    instant: &DateTime<FixedOffset>,
    start: Option<&DateTime<FixedOffset>>,
    end: Option<&DateTime<FixedOffset>>,
) -> bool {
    start.is_none_or(|s| instant >= s) && end.is_none_or(|e| instant < e)
}

// --- Patterns ---

impl DayWeekMonth {
    /// Whether the date falls inside every non-empty dimension.
    pub fn matches(&self, date: NaiveDate) -> bool {
        dimension_matches(&self.applicable_days, &day_of(date))
            && dimension_matches(&self.applicable_weeks, &week_of(date))
            && dimension_matches(&self.applicable_months, &month_of(date))
    }
}

impl SpecialDay {
    pub fn matches(&self, date: NaiveDate, calendar: &dyn SpecialDayCalendar) -> bool {
        let special = calendar.is_special_day(date, self);
        if self.intersect_with_applicable_days {
            special && self.day_week_month.matches(date)
        } else {
            special || (!self.day_week_month.is_empty() && self.day_week_month.matches(date))
        }
    }
}

impl TimePeriodByHour {
    /// Whether `time` lies in `[start, end)`.
    ///
    /// An end before the start wraps past midnight; equal bounds cover the
    /// whole day.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let (start, end) = (self.start_time_of_period, self.end_time_of_period);
        if start < end {
            start <= time && time < end
        } else if start > end {
            time >= start || time < end
        } else {
            true
        }
    }
}

// --- Periods ---

impl Period {
    pub fn is_active_at(
        &self,
        instant: &DateTime<FixedOffset>,
        calendar: &dyn SpecialDayCalendar,
    ) -> bool {
        if !within(instant, self.start_of_period.as_ref(), self.end_of_period.as_ref()) {
            return false;
        }

        let date = instant.date_naive();
        let time = instant.time();
        let times = &self.recurring_time_periods_of_day;
        let patterns = &self.recurring_day_week_month_periods;
        let special_days = &self.recurring_special_days;

        (times.is_empty() || times.iter().any(|t| t.contains(time)))
            && (patterns.is_empty() || patterns.iter().any(|p| p.matches(date)))
            && (special_days.is_empty() || special_days.iter().any(|s| s.matches(date, calendar)))
    }
}

impl OverallPeriod {
    /// Whether the instant is inside the overall window, inside some valid
    /// period (if any are given) and outside every exception period.
    pub fn is_active_at(
        &self,
        instant: &DateTime<FixedOffset>,
        calendar: &dyn SpecialDayCalendar,
    ) -> bool {
        within(instant, Some(&self.overall_start_time), self.overall_end_time.as_ref())
            && (self.valid_periods.is_empty()
                || self.valid_periods.iter().any(|p| p.is_active_at(instant, calendar)))
            && !self
                .exception_periods
                .iter()
                .any(|p| p.is_active_at(instant, calendar))
    }
}

impl OperatingHours {
    /// Whether the facility is open at `instant`.
    ///
    /// Returns `None` when the hours cannot be evaluated locally: unknown,
    /// undefined, held by reference, or a specification without regular
    /// hours. Exceptional hours are treated as closures.
    pub fn is_open_at(
        &self,
        instant: &DateTime<FixedOffset>,
        calendar: &dyn SpecialDayCalendar,
    ) -> Option<bool> {
        match self {
            OperatingHours::OpenAllHours => Some(true),
            OperatingHours::Specification(spec) => {
                let regular = spec.regular_hours.as_ref()?;
                let closed = spec
                    .exceptional_hours
                    .iter()
                    .any(|p| p.is_active_at(instant, calendar));
                Some(regular.is_active_at(instant, calendar) && !closed)
            }
            OperatingHours::Undefined | OperatingHours::Unknown | OperatingHours::ByReference(_) => {
                log::trace!("Operating hours cannot be evaluated: {:?}", self);
                None
            }
        }
    }
}
