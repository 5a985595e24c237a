//! This module implements `LocalDateTime` and any directly related
//! algorithms.

use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    builtins::core::{LocalDate, LocalTime},
    fields::DayOfWeek,
    iso::{IsoDateTime, IsoTime},
    options::DateResolver,
    CalendricsResult, Period,
};

/// An immutable date and time-of-day without a zone.
///
/// A `LocalDateTime` is the composition of a [`LocalDate`] and a
/// [`LocalTime`]; both components are individually valid by construction.
/// Date arithmetic follows the date rules (including resolver-governed
/// day-of-month repair); time arithmetic carries whole days into the date
/// rather than wrapping.
///
/// ## Examples
///
/// ```rust
/// use calendrics::LocalDateTime;
///
/// let dt = LocalDateTime::try_new(2008, 12, 31, 23, 30, 0, 0).unwrap();
/// let later = dt.plus_hours(1).unwrap();
/// assert_eq!(later.year(), 2009);
/// assert_eq!(later.day(), 1);
/// assert_eq!(later.hour(), 0);
/// assert_eq!(later.minute(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalDateTime {
    pub(crate) iso: IsoDateTime,
}

// ==== Private API ====

impl LocalDateTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDateTime) -> Self {
        Self { iso }
    }

    // Time-unit arithmetic with day carry into the date.
    fn plus_nanos(&self, nanos: i128) -> CalendricsResult<Self> {
        Ok(Self::new_unchecked(self.iso.add_nanoseconds(nanos)?))
    }
}

// ==== Public API ====

impl LocalDateTime {
    /// The minimum supported `LocalDateTime`.
    pub const MIN: LocalDateTime = LocalDateTime::new_unchecked(IsoDateTime::new_unchecked(
        LocalDate::MIN.iso,
        IsoTime::new_unchecked(0, 0, 0, 0),
    ));

    /// The maximum supported `LocalDateTime`.
    pub const MAX: LocalDateTime = LocalDateTime::new_unchecked(IsoDateTime::new_unchecked(
        LocalDate::MAX.iso,
        IsoTime::new_unchecked(23, 59, 59, 999_999_999),
    ));

    /// Creates a new `LocalDateTime` from a date and a time.
    #[inline]
    #[must_use]
    pub const fn new(date: LocalDate, time: LocalTime) -> Self {
        Self::new_unchecked(IsoDateTime::new_unchecked(date.iso, time.iso))
    }

    /// Creates a new `LocalDateTime` from raw fields, rejecting any
    /// invalid combination.
    #[inline]
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> CalendricsResult<Self> {
        let date = LocalDate::try_new(year, month, day)?;
        let time = LocalTime::try_new(hour, minute, second, nanosecond)?;
        Ok(Self::new(date, time))
    }

    /// Returns the date component.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        LocalDate::new_unchecked(self.iso.date)
    }

    /// Returns the time component.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        LocalTime::new_unchecked(self.iso.time)
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.date.year
    }

    /// Returns the month number, 1 through 12.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.date.month
    }

    /// Returns the day-of-month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.date.day
    }

    /// Returns the hour-of-day.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.time.hour
    }

    /// Returns the minute-of-hour.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.time.minute
    }

    /// Returns the second-of-minute.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.time.second
    }

    /// Returns the nanosecond-of-second.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.time.nanosecond
    }

    /// Returns the day-of-week.
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        self.date().day_of_week()
    }

    /// Returns this date-time with the date component replaced.
    #[inline]
    #[must_use]
    pub const fn with_date(&self, date: LocalDate) -> Self {
        Self::new(date, self.time())
    }

    /// Returns this date-time with the time component replaced.
    #[inline]
    #[must_use]
    pub const fn with_time(&self, time: LocalTime) -> Self {
        Self::new(self.date(), time)
    }

    /// Returns this date-time with the year replaced; see
    /// [`LocalDate::with_year`].
    pub fn with_year(&self, year: i32, resolver: Option<DateResolver>) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().with_year(year, resolver)?))
    }

    /// Returns this date-time with the month replaced; see
    /// [`LocalDate::with_month`].
    pub fn with_month(&self, month: u8, resolver: Option<DateResolver>) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().with_month(month, resolver)?))
    }

    /// Returns this date-time with the day-of-month replaced; see
    /// [`LocalDate::with_day_of_month`].
    pub fn with_day_of_month(
        &self,
        day: u8,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().with_day_of_month(day, resolver)?))
    }

    /// Returns this date-time with the hour-of-day replaced.
    pub fn with_hour(&self, hour: u8) -> CalendricsResult<Self> {
        Ok(self.with_time(self.time().with_hour(hour)?))
    }

    /// Returns this date-time with the minute-of-hour replaced.
    pub fn with_minute(&self, minute: u8) -> CalendricsResult<Self> {
        Ok(self.with_time(self.time().with_minute(minute)?))
    }

    /// Returns this date-time with the second-of-minute replaced.
    pub fn with_second(&self, second: u8) -> CalendricsResult<Self> {
        Ok(self.with_time(self.time().with_second(second)?))
    }

    /// Returns this date-time with the nanosecond-of-second replaced.
    pub fn with_nanosecond(&self, nanosecond: u32) -> CalendricsResult<Self> {
        Ok(self.with_time(self.time().with_nanosecond(nanosecond)?))
    }

    /// Adds whole years; see [`LocalDate::plus_years`].
    pub fn plus_years(&self, years: i64, resolver: Option<DateResolver>) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().plus_years(years, resolver)?))
    }

    /// Adds whole months; see [`LocalDate::plus_months`].
    pub fn plus_months(
        &self,
        months: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().plus_months(months, resolver)?))
    }

    /// Adds whole weeks; see [`LocalDate::plus_weeks`].
    pub fn plus_weeks(&self, weeks: i64) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().plus_weeks(weeks)?))
    }

    /// Adds whole days; see [`LocalDate::plus_days`].
    pub fn plus_days(&self, days: i64) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().plus_days(days)?))
    }

    /// Subtracts whole years; see [`LocalDate::minus_years`].
    pub fn minus_years(
        &self,
        years: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().minus_years(years, resolver)?))
    }

    /// Subtracts whole months; see [`LocalDate::minus_months`].
    pub fn minus_months(
        &self,
        months: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().minus_months(months, resolver)?))
    }

    /// Subtracts whole weeks; see [`LocalDate::minus_weeks`].
    pub fn minus_weeks(&self, weeks: i64) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().minus_weeks(weeks)?))
    }

    /// Subtracts whole days; see [`LocalDate::minus_days`].
    pub fn minus_days(&self, days: i64) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().minus_days(days)?))
    }

    /// Adds hours, carrying whole days into the date.
    pub fn plus_hours(&self, hours: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(hours) * 3_600_000_000_000)
    }

    /// Adds minutes, carrying whole days into the date.
    pub fn plus_minutes(&self, minutes: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(minutes) * 60_000_000_000)
    }

    /// Adds seconds, carrying whole days into the date.
    pub fn plus_seconds(&self, seconds: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(seconds) * 1_000_000_000)
    }

    /// Adds nanoseconds, carrying whole days into the date.
    pub fn plus_nanoseconds(&self, nanoseconds: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(nanoseconds))
    }

    /// Subtracts hours, carrying whole days out of the date.
    pub fn minus_hours(&self, hours: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(hours) * -3_600_000_000_000)
    }

    /// Subtracts minutes, carrying whole days out of the date.
    pub fn minus_minutes(&self, minutes: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(minutes) * -60_000_000_000)
    }

    /// Subtracts seconds, carrying whole days out of the date.
    pub fn minus_seconds(&self, seconds: i64) -> CalendricsResult<Self> {
        self.plus_nanos(i128::from(seconds) * -1_000_000_000)
    }

    /// Subtracts nanoseconds, carrying whole days out of the date.
    pub fn minus_nanoseconds(&self, nanoseconds: i64) -> CalendricsResult<Self> {
        self.plus_nanos(-i128::from(nanoseconds))
    }

    /// Adds a combined period to the date component; see
    /// [`LocalDate::add`].
    pub fn add(&self, period: &Period, resolver: Option<DateResolver>) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().add(period, resolver)?))
    }

    /// Subtracts a combined period from the date component; see
    /// [`LocalDate::subtract`].
    pub fn subtract(
        &self,
        period: &Period,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        Ok(self.with_date(self.date().subtract(period, resolver)?))
    }
}

// ==== Trait impls ====

impl From<LocalDate> for LocalDateTime {
    fn from(value: LocalDate) -> Self {
        value.at_start_of_day()
    }
}

impl Writeable for LocalDateTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.date().write_to(sink)?;
        sink.write_char('T')?;
        self.time().write_to(sink)
    }
}

impl_display_with_writeable!(LocalDateTime);
