//! Small validated calendar field value types.
//!
//! Every type in this module is an immutable value wrapper around a single
//! raw field. Factories validate against the field's static range and fail
//! with a field range error; composite validity (day-of-month against a
//! year and month) is the concern of the date types.

use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    epoch::{self, MAX_YEAR, MIN_YEAR},
    CalendricsError, CalendricsResult,
};

/// A calendar year in the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    /// The minimum supported `Year`.
    pub const MIN: Year = Year(MIN_YEAR);
    /// The maximum supported `Year`.
    pub const MAX: Year = Year(MAX_YEAR);

    /// Creates a `Year`, validating the supported range.
    pub fn try_new(year: i32) -> CalendricsResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendricsError::field_out_of_range(
                "year",
                i64::from(year),
                i64::from(MIN_YEAR),
                i64::from(MAX_YEAR),
            ));
        }
        Ok(Self(year))
    }

    /// Returns the raw year value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Returns whether this year is a leap year under the proleptic
    /// Gregorian rule: divisible by 4, and not by 100 unless also by 400.
    #[inline]
    #[must_use]
    pub fn is_leap(self) -> bool {
        epoch::is_leap_year(self.0)
    }

    /// Returns the length of this year in days (365 or 366).
    #[inline]
    #[must_use]
    pub fn length_in_days(self) -> u16 {
        epoch::days_in_year(self.0)
    }
}

/// A month-of-year, January through December.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MonthOfYear {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl MonthOfYear {
    /// Creates a `MonthOfYear` from its 1-based month number.
    pub fn try_from_number(month: u8) -> CalendricsResult<Self> {
        match month {
            1 => Ok(Self::January),
            2 => Ok(Self::February),
            3 => Ok(Self::March),
            4 => Ok(Self::April),
            5 => Ok(Self::May),
            6 => Ok(Self::June),
            7 => Ok(Self::July),
            8 => Ok(Self::August),
            9 => Ok(Self::September),
            10 => Ok(Self::October),
            11 => Ok(Self::November),
            12 => Ok(Self::December),
            _ => Err(CalendricsError::field_out_of_range(
                "month",
                i64::from(month),
                1,
                12,
            )),
        }
    }

    /// Returns the 1-based month number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the short month code for this month.
    #[must_use]
    pub const fn code(self) -> TinyAsciiStr<4> {
        match self {
            Self::January => tinystr!(4, "M01"),
            Self::February => tinystr!(4, "M02"),
            Self::March => tinystr!(4, "M03"),
            Self::April => tinystr!(4, "M04"),
            Self::May => tinystr!(4, "M05"),
            Self::June => tinystr!(4, "M06"),
            Self::July => tinystr!(4, "M07"),
            Self::August => tinystr!(4, "M08"),
            Self::September => tinystr!(4, "M09"),
            Self::October => tinystr!(4, "M10"),
            Self::November => tinystr!(4, "M11"),
            Self::December => tinystr!(4, "M12"),
        }
    }

    /// Returns the length of this month in days given whether the owning
    /// year is a leap year.
    #[must_use]
    pub const fn length_in_days(self, leap_year: bool) -> u8 {
        match self {
            Self::February => {
                if leap_year {
                    29
                } else {
                    28
                }
            }
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    /// Returns the month after this one, wrapping December to January.
    #[must_use]
    pub fn next(self) -> Self {
        self.plus(1)
    }

    /// Returns the month before this one, wrapping January to December.
    #[must_use]
    pub fn previous(self) -> Self {
        self.plus(-1)
    }

    /// Cyclically advances this month by `months`.
    #[must_use]
    pub fn plus(self, months: i64) -> Self {
        let number = (i64::from(self.number() - 1) + months).rem_euclid(12) as u8 + 1;
        // A value in 1..=12 always converts back.
        match Self::try_from_number(number) {
            Ok(month) => month,
            Err(_) => unreachable!("cyclic month arithmetic stays in range"),
        }
    }
}

/// An ISO day-of-week, Monday (1) through Sunday (7).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    /// Creates a `DayOfWeek` from its 1-based ISO number.
    pub fn try_from_number(day: u8) -> CalendricsResult<Self> {
        match day {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(CalendricsError::field_out_of_range(
                "day-of-week",
                i64::from(day),
                1,
                7,
            )),
        }
    }

    /// Returns the 1-based ISO day number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Cyclically advances this day by `days`.
    #[must_use]
    pub fn plus(self, days: i64) -> Self {
        let number = (i64::from(self.number() - 1) + days).rem_euclid(7) as u8 + 1;
        match Self::try_from_number(number) {
            Ok(day) => day,
            Err(_) => unreachable!("cyclic day-of-week arithmetic stays in range"),
        }
    }

    /// Returns the day after this one, wrapping Sunday to Monday.
    #[must_use]
    pub fn next(self) -> Self {
        self.plus(1)
    }

    /// Returns the day before this one, wrapping Monday to Sunday.
    #[must_use]
    pub fn previous(self) -> Self {
        self.plus(-1)
    }
}

/// An hour-of-day, 0 through 23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub fn try_new(hour: u8) -> CalendricsResult<Self> {
        if hour > 23 {
            return Err(CalendricsError::field_out_of_range(
                "hour",
                i64::from(hour),
                0,
                23,
            ));
        }
        Ok(Self(hour))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A minute-of-hour, 0 through 59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinuteOfHour(u8);

impl MinuteOfHour {
    pub fn try_new(minute: u8) -> CalendricsResult<Self> {
        if minute > 59 {
            return Err(CalendricsError::field_out_of_range(
                "minute",
                i64::from(minute),
                0,
                59,
            ));
        }
        Ok(Self(minute))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A second-of-minute, 0 through 59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SecondOfMinute(u8);

impl SecondOfMinute {
    pub fn try_new(second: u8) -> CalendricsResult<Self> {
        if second > 59 {
            return Err(CalendricsError::field_out_of_range(
                "second",
                i64::from(second),
                0,
                59,
            ));
        }
        Ok(Self(second))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// A nanosecond-of-second, 0 through 999,999,999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NanoOfSecond(u32);

impl NanoOfSecond {
    pub fn try_new(nanosecond: u32) -> CalendricsResult<Self> {
        if nanosecond > 999_999_999 {
            return Err(CalendricsError::field_out_of_range(
                "nanosecond",
                i64::from(nanosecond),
                0,
                999_999_999,
            ));
        }
        Ok(Self(nanosecond))
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

/// The ISO-8601 chronology marker.
///
/// The chronology carries no state; it exists so that APIs which are
/// chronology-aware in name have a value to hang that meaning on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IsoChronology;

impl IsoChronology {
    /// Returns whether the provided year is a leap year.
    #[must_use]
    pub fn is_leap_year(self, year: i32) -> bool {
        epoch::is_leap_year(year)
    }

    /// Returns the number of days in the provided year.
    #[must_use]
    pub fn days_in_year(self, year: i32) -> u16 {
        epoch::days_in_year(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_leap_rule() {
        assert!(!Year::try_new(1900).unwrap().is_leap());
        assert!(Year::try_new(2000).unwrap().is_leap());
        assert!(Year::try_new(2004).unwrap().is_leap());
        assert!(Year::try_new(1904).unwrap().is_leap());
        assert!(!Year::try_new(1901).unwrap().is_leap());
        assert_eq!(Year::try_new(2004).unwrap().length_in_days(), 366);
        assert!(Year::try_new(MAX_YEAR + 1).is_err());
        assert!(Year::try_new(MIN_YEAR - 1).is_err());
        assert!(IsoChronology.is_leap_year(2000));
        assert_eq!(IsoChronology.days_in_year(1900), 365);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(MonthOfYear::February.length_in_days(false), 28);
        assert_eq!(MonthOfYear::February.length_in_days(true), 29);
        assert_eq!(MonthOfYear::April.length_in_days(true), 30);
        assert_eq!(MonthOfYear::December.length_in_days(false), 31);
    }

    #[test]
    fn month_cycle() {
        assert_eq!(MonthOfYear::December.next(), MonthOfYear::January);
        assert_eq!(MonthOfYear::January.previous(), MonthOfYear::December);
        assert_eq!(MonthOfYear::March.plus(25), MonthOfYear::April);
        assert_eq!(MonthOfYear::March.plus(-14), MonthOfYear::January);
        assert_eq!(MonthOfYear::July.code().as_str(), "M07");
    }

    #[test]
    fn month_number_bounds() {
        assert!(MonthOfYear::try_from_number(0).is_err());
        assert!(MonthOfYear::try_from_number(13).is_err());
        assert_eq!(
            MonthOfYear::try_from_number(6).unwrap(),
            MonthOfYear::June
        );
    }

    #[test]
    fn day_of_week_cycle() {
        assert_eq!(DayOfWeek::Sunday.next(), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::Monday.previous(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Friday.plus(7), DayOfWeek::Friday);
        assert_eq!(DayOfWeek::Friday.plus(-9), DayOfWeek::Wednesday);
    }

    #[test]
    fn time_field_ranges() {
        assert!(HourOfDay::try_new(24).is_err());
        assert!(MinuteOfHour::try_new(60).is_err());
        assert!(SecondOfMinute::try_new(60).is_err());
        assert!(NanoOfSecond::try_new(1_000_000_000).is_err());
        assert_eq!(HourOfDay::try_new(23).unwrap().value(), 23);
        assert_eq!(NanoOfSecond::try_new(999_999_999).unwrap().value(), 999_999_999);
    }
}
