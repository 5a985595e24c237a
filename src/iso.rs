//! Internal ISO field records.
//!
//! The two records in this module are the canonical representation behind
//! every public value type:
//!
//!   - `IsoDate` holds a validated `(year, month, day)` triple.
//!   - `IsoTime` holds a validated `(hour, minute, second, nanosecond)`.
//!
//! `IsoDateTime` composes the two. All field arithmetic bottoms out here:
//! the records know how to regulate raw triples against a `DateResolver`,
//! balance overflowing fields with day carry, and convert to and from the
//! signed day count and local nanosecond forms.

use crate::{
    epoch::{self, MAX_EPOCH_DAYS, MAX_YEAR, MIN_YEAR},
    error::ErrorMessage,
    options::DateResolver,
    CalendricsError, CalendricsResult, Period, NS_PER_DAY,
};

/// `IsoDate` is a validated year, month, day record.
///
/// Invariant: `1 <= day <= days_in_month(year, month)`, `1 <= month <= 12`,
/// and the date's day count is within the supported day range. A record
/// violating the invariant is never constructed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoDate {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without validating the invariant.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Validates a raw `(year, month, day)` triple into an `IsoDate`,
    /// repairing a jointly-invalid day through the provided resolver.
    ///
    /// Static field ranges (year, month 1-12, day 1-31) always reject; the
    /// resolver only governs a day that exceeds the resolved month length.
    pub(crate) fn regulate(
        year: i32,
        month: u8,
        day: u8,
        resolver: DateResolver,
    ) -> CalendricsResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendricsError::field_range().with_enum(ErrorMessage::YearOutOfRange));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendricsError::field_out_of_range(
                "month",
                i64::from(month),
                1,
                12,
            ));
        }
        if !(1..=31).contains(&day) {
            return Err(CalendricsError::field_out_of_range(
                "day",
                i64::from(day),
                1,
                31,
            ));
        }

        let length = epoch::days_in_month(year, month);
        let day = if day > length {
            match resolver {
                DateResolver::Strict if month == 2 && day == 29 => {
                    return Err(CalendricsError::invalid_date()
                        .with_enum(ErrorMessage::DayOfMonthInvalidLeap));
                }
                DateResolver::Strict => {
                    return Err(
                        CalendricsError::invalid_date().with_enum(ErrorMessage::DayOfMonthInvalid)
                    );
                }
                DateResolver::PreviousValid => length,
            }
        } else {
            day
        };

        let date = Self::new_unchecked(year, month, day);
        if date.to_epoch_days().abs() > MAX_EPOCH_DAYS {
            return Err(CalendricsError::field_range().with_enum(ErrorMessage::DayCountOutOfRange));
        }
        Ok(date)
    }

    /// Converts this date into its signed epoch day count.
    #[inline]
    pub(crate) fn to_epoch_days(self) -> i64 {
        epoch::epoch_days_from_gregorian(self.year, self.month, self.day)
    }

    /// Converts a signed epoch day count back into a date.
    pub(crate) fn from_epoch_days(days: i64) -> CalendricsResult<Self> {
        if days.abs() > MAX_EPOCH_DAYS {
            return Err(CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange));
        }
        let (year, month, day) = epoch::gregorian_from_epoch_days(days);
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Balances a valid year and month with an arbitrary day number into a
    /// date, carrying day overflow and underflow across month and year
    /// boundaries.
    pub(crate) fn balance(year: i32, month: u8, day: i64) -> CalendricsResult<Self> {
        let days = epoch::epoch_days_from_gregorian(year, month, 1) + (day - 1);
        Self::from_epoch_days(days)
    }

    /// Adds whole years and months to this date, resolving the day-of-month
    /// against the resulting month through the provided resolver.
    pub(crate) fn add_years_months(
        self,
        years: i64,
        months: i64,
        resolver: DateResolver,
    ) -> CalendricsResult<Self> {
        let year = i64::from(self.year)
            .checked_add(years)
            .ok_or_else(|| CalendricsError::overflow().with_enum(ErrorMessage::YearOutOfRange))?;
        let month = i64::from(self.month)
            .checked_add(months)
            .ok_or_else(|| CalendricsError::overflow().with_enum(ErrorMessage::YearOutOfRange))?;
        let (year, month) = balance_year_month(year, month)?;
        let (day, _) = resolve_day(year, month, self.day, resolver)?;
        let date = Self::new_unchecked(year, month, day);
        if date.to_epoch_days().abs() > MAX_EPOCH_DAYS {
            return Err(CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange));
        }
        Ok(date)
    }

    /// Adds a combined period to this date.
    ///
    /// Years and months are applied together as a single month delta and
    /// the day-of-month is resolved against the resulting month; the day
    /// component (with weeks folded in) is applied afterwards by exact day
    /// count arithmetic. A negative day component is first absorbed by the
    /// amount the day-of-month was clamped, so stepping over a short month
    /// lands on its last day rather than before it:
    /// `2010-01-30` plus one month and minus one day is `2010-02-28`.
    pub(crate) fn add_period(self, period: &Period, resolver: DateResolver) -> CalendricsResult<Self> {
        let overflow = || CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange);
        let mut days = period
            .weeks
            .checked_mul(7)
            .and_then(|w| period.days.checked_add(w))
            .ok_or_else(overflow)?;

        if period.years == 0 && period.months == 0 {
            let total = self.to_epoch_days().checked_add(days).ok_or_else(overflow)?;
            return Self::from_epoch_days(total);
        }

        let year = i64::from(self.year)
            .checked_add(period.years)
            .ok_or_else(|| CalendricsError::overflow().with_enum(ErrorMessage::YearOutOfRange))?;
        let month = i64::from(self.month)
            .checked_add(period.months)
            .ok_or_else(|| CalendricsError::overflow().with_enum(ErrorMessage::YearOutOfRange))?;
        let (year, month) = balance_year_month(year, month)?;
        let (day, clamped_by) = resolve_day(year, month, self.day, resolver)?;

        if days < 0 && clamped_by > 0 {
            days = (days + i64::from(clamped_by)).min(0);
        }

        let day = i64::from(day).checked_add(days).ok_or_else(overflow)?;
        Self::balance(year, month, day)
    }

    /// Returns the ISO day of week for this date.
    #[inline]
    pub(crate) fn day_of_week(self) -> u8 {
        epoch::day_of_week_from_epoch_days(self.to_epoch_days())
    }

    /// Returns the 1-based ordinal day of the year for this date.
    #[inline]
    pub(crate) fn day_of_year(self) -> u16 {
        epoch::day_of_year(self.year, self.month, self.day)
    }
}

/// Normalizes an unbalanced year and month pair, checking the year range.
pub(crate) fn balance_year_month(year: i64, month: i64) -> CalendricsResult<(i32, u8)> {
    let year = year + (month - 1).div_euclid(12);
    let month = ((month - 1).rem_euclid(12) + 1) as u8;
    let year = i32::try_from(year)
        .ok()
        .filter(|y| (MIN_YEAR..=MAX_YEAR).contains(y))
        .ok_or_else(|| CalendricsError::overflow().with_enum(ErrorMessage::YearOutOfRange))?;
    Ok((year, month))
}

/// Resolves a day-of-month against a valid year and month, returning the
/// resolved day and how far it was clamped.
fn resolve_day(
    year: i32,
    month: u8,
    day: u8,
    resolver: DateResolver,
) -> CalendricsResult<(u8, u8)> {
    let length = epoch::days_in_month(year, month);
    if day <= length {
        return Ok((day, 0));
    }
    match resolver {
        DateResolver::Strict if month == 2 && day == 29 => {
            Err(CalendricsError::invalid_date().with_enum(ErrorMessage::DayOfMonthInvalidLeap))
        }
        DateResolver::Strict => {
            Err(CalendricsError::invalid_date().with_enum(ErrorMessage::DayOfMonthInvalid))
        }
        DateResolver::PreviousValid => Ok((length, day - length)),
    }
}

/// `IsoTime` is a validated hour, minute, second, nanosecond record.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoTime {
    pub(crate) hour: u8,        // 0..=23
    pub(crate) minute: u8,      // 0..=59
    pub(crate) second: u8,      // 0..=59
    pub(crate) nanosecond: u32, // 0..=999_999_999
}

impl IsoTime {
    pub(crate) const fn new_unchecked(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
        Self {
            hour,
            minute,
            second,
            nanosecond,
        }
    }

    /// Creates a new `IsoTime`, validating each field against its own
    /// static range.
    pub(crate) fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> CalendricsResult<Self> {
        if hour > 23 {
            return Err(CalendricsError::field_out_of_range(
                "hour",
                i64::from(hour),
                0,
                23,
            ));
        }
        if minute > 59 {
            return Err(CalendricsError::field_out_of_range(
                "minute",
                i64::from(minute),
                0,
                59,
            ));
        }
        if second > 59 {
            return Err(CalendricsError::field_out_of_range(
                "second",
                i64::from(second),
                0,
                59,
            ));
        }
        if nanosecond > 999_999_999 {
            return Err(CalendricsError::field_out_of_range(
                "nanosecond",
                i64::from(nanosecond),
                0,
                999_999_999,
            ));
        }
        Ok(Self::new_unchecked(hour, minute, second, nanosecond))
    }

    /// Returns an `IsoTime` set to 12:00:00.
    pub(crate) const fn noon() -> Self {
        Self::new_unchecked(12, 0, 0, 0)
    }

    /// Returns the nanosecond of the day for this time.
    pub(crate) fn nano_of_day(self) -> u64 {
        let seconds =
            u64::from(self.hour) * 3600 + u64::from(self.minute) * 60 + u64::from(self.second);
        seconds * 1_000_000_000 + u64::from(self.nanosecond)
    }

    /// Rebuilds a time from a nanosecond of the day.
    pub(crate) fn from_nano_of_day(nanos: u64) -> Self {
        debug_assert!(nanos < NS_PER_DAY);
        let second_of_day = nanos / 1_000_000_000;
        Self::new_unchecked(
            (second_of_day / 3600) as u8,
            (second_of_day / 60 % 60) as u8,
            (second_of_day % 60) as u8,
            (nanos % 1_000_000_000) as u32,
        )
    }

    /// Adds a signed nanosecond delta, returning the day carry and the
    /// wrapped time.
    pub(crate) fn add(self, nanos: i128) -> (i64, Self) {
        let total = i128::from(self.nano_of_day()) + nanos;
        let days = total.div_euclid(NS_PER_DAY as i128);
        let time = Self::from_nano_of_day(total.rem_euclid(NS_PER_DAY as i128) as u64);
        (days as i64, time)
    }
}

/// `IsoDateTime` composes an `IsoDate` and an `IsoTime`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct IsoDateTime {
    pub(crate) date: IsoDate,
    pub(crate) time: IsoTime,
}

impl IsoDateTime {
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Adds a signed nanosecond delta, carrying whole days into the date.
    pub(crate) fn add_nanoseconds(self, nanos: i128) -> CalendricsResult<Self> {
        let (carry, time) = self.time.add(nanos);
        let date = IsoDate::balance(
            self.date.year,
            self.date.month,
            i64::from(self.date.day) + carry,
        )?;
        Ok(Self::new_unchecked(date, time))
    }

    /// Returns the nanosecond count of this local date-time measured from
    /// the epoch with no offset applied.
    pub(crate) fn local_nanoseconds(self) -> i128 {
        i128::from(self.date.to_epoch_days()) * NS_PER_DAY as i128
            + i128::from(self.time.nano_of_day())
    }

    /// Rebuilds a local date-time from an unzoned nanosecond count.
    pub(crate) fn from_local_nanoseconds(nanos: i128) -> CalendricsResult<Self> {
        let days = nanos.div_euclid(NS_PER_DAY as i128);
        let in_day = nanos.rem_euclid(NS_PER_DAY as i128) as u64;
        let date = IsoDate::from_epoch_days(days as i64)?;
        Ok(Self::new_unchecked(date, IsoTime::from_nano_of_day(in_day)))
    }

    /// Returns the whole-second count of this local date-time measured from
    /// the epoch with no offset applied. Sub-second precision is floored;
    /// zone transitions occur on whole seconds.
    pub(crate) fn local_seconds(self) -> i64 {
        self.date.to_epoch_days() * 86_400
            + i64::from(self.time.hour) * 3600
            + i64::from(self.time.minute) * 60
            + i64::from(self.time.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regulate_static_ranges_always_reject() {
        assert!(IsoDate::regulate(2020, 13, 1, DateResolver::PreviousValid).is_err());
        assert!(IsoDate::regulate(2020, 0, 1, DateResolver::PreviousValid).is_err());
        assert!(IsoDate::regulate(2020, 1, 0, DateResolver::PreviousValid).is_err());
        assert!(IsoDate::regulate(2020, 1, 32, DateResolver::PreviousValid).is_err());
        assert!(IsoDate::regulate(MAX_YEAR + 1, 1, 1, DateResolver::PreviousValid).is_err());
    }

    #[test]
    fn regulate_resolves_composite_invalidity() {
        let err = IsoDate::regulate(2009, 2, 29, DateResolver::Strict).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidDate);

        let clamped = IsoDate::regulate(2009, 2, 29, DateResolver::PreviousValid).unwrap();
        assert_eq!(clamped, IsoDate::new_unchecked(2009, 2, 28));

        let valid = IsoDate::regulate(2008, 2, 29, DateResolver::Strict).unwrap();
        assert_eq!(valid, IsoDate::new_unchecked(2008, 2, 29));
    }

    #[test]
    fn balance_carries_days() {
        assert_eq!(
            IsoDate::balance(2008, 12, 32).unwrap(),
            IsoDate::new_unchecked(2009, 1, 1)
        );
        assert_eq!(
            IsoDate::balance(2008, 3, 0).unwrap(),
            IsoDate::new_unchecked(2008, 2, 29)
        );
        assert_eq!(
            IsoDate::balance(2008, 1, -30).unwrap(),
            IsoDate::new_unchecked(2007, 12, 1)
        );
    }

    #[test]
    fn balance_year_month_normalizes() {
        assert_eq!(balance_year_month(2020, 13).unwrap(), (2021, 1));
        assert_eq!(balance_year_month(2020, 0).unwrap(), (2019, 12));
        assert_eq!(balance_year_month(2020, -11).unwrap(), (2019, 1));
        assert_eq!(balance_year_month(2020, 24).unwrap(), (2021, 12));
        assert!(balance_year_month(i64::from(MAX_YEAR), 13).is_err());
    }

    #[test]
    fn time_nano_of_day_round_trip() {
        let time = IsoTime::new(23, 59, 59, 999_999_999).unwrap();
        assert_eq!(IsoTime::from_nano_of_day(time.nano_of_day()), time);
        assert_eq!(IsoTime::from_nano_of_day(0), IsoTime::default());
    }

    #[test]
    fn time_add_carries_days() {
        let time = IsoTime::new(23, 0, 0, 0).unwrap();
        let (carry, result) = time.add(2 * 3_600_000_000_000);
        assert_eq!(carry, 1);
        assert_eq!(result, IsoTime::new_unchecked(1, 0, 0, 0));

        let (carry, result) = time.add(-24 * 3_600_000_000_000);
        assert_eq!(carry, -1);
        assert_eq!(result, IsoTime::new_unchecked(23, 0, 0, 0));
    }

    #[test]
    fn local_nanoseconds_round_trip() {
        let iso = IsoDateTime::new_unchecked(
            IsoDate::new_unchecked(1969, 12, 31),
            IsoTime::new_unchecked(23, 59, 59, 1),
        );
        let nanos = iso.local_nanoseconds();
        assert_eq!(nanos, -999_999_999);
        assert_eq!(IsoDateTime::from_local_nanoseconds(nanos).unwrap(), iso);
    }
}
