//! This module implements `LocalDate` and any directly related algorithms.

use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    builtins::core::{LocalDateTime, LocalTime},
    display,
    epoch::MJD_EPOCH_OFFSET,
    error::ErrorMessage,
    fields::{DayOfWeek, MonthOfYear},
    iso::{IsoDate, IsoDateTime},
    options::DateResolver,
    CalendricsError, CalendricsResult, Period,
};

/// An immutable calendar date without a time or zone: a year, month and
/// day in the proleptic Gregorian calendar.
///
/// A `LocalDate` can never hold an invalid day-of-month. The strict
/// factories reject a jointly-invalid triple such as February 30; the
/// field mutators and month/year arithmetic repair one through a
/// [`DateResolver`], clamping to the last valid day of the month by
/// default.
///
/// ## Examples
///
/// ### Creating dates
///
/// ```rust
/// use calendrics::LocalDate;
///
/// let date = LocalDate::try_new(2008, 2, 29).unwrap();
/// assert_eq!(date.year(), 2008);
/// assert_eq!(date.month(), 2);
/// assert_eq!(date.day(), 29);
///
/// // 2009 is not a leap year.
/// assert!(LocalDate::try_new(2009, 2, 29).is_err());
/// ```
///
/// ### Date arithmetic
///
/// ```rust
/// use calendrics::{LocalDate, Period};
///
/// let date = LocalDate::try_new(2007, 3, 31).unwrap();
///
/// // Adding a month clamps to April's last day.
/// let next = date.plus_months(1, None).unwrap();
/// assert_eq!(next, LocalDate::try_new(2007, 4, 30).unwrap());
///
/// // Day arithmetic is always exact.
/// let later = date.plus_days(400).unwrap();
/// assert_eq!(later.plus_days(-400).unwrap(), date);
///
/// // Combined periods resolve the month first, then apply days.
/// let start = LocalDate::try_new(2010, 1, 30).unwrap();
/// let result = start.add(&Period::new(0, 1, 0, 2), None).unwrap();
/// assert_eq!(result, LocalDate::try_new(2010, 3, 2).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalDate {
    pub(crate) iso: IsoDate,
}

// ==== Private API ====

impl LocalDate {
    /// Create a new `LocalDate` from a validated record.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoDate) -> Self {
        Self { iso }
    }
}

// ==== Public API ====

impl LocalDate {
    /// The minimum supported `LocalDate`.
    pub const MIN: LocalDate =
        LocalDate::new_unchecked(IsoDate::new_unchecked(crate::MIN_YEAR, 4, 19));
    /// The maximum supported `LocalDate`.
    pub const MAX: LocalDate =
        LocalDate::new_unchecked(IsoDate::new_unchecked(crate::MAX_YEAR, 9, 13));

    /// Creates a new `LocalDate`, rejecting any jointly-invalid triple.
    #[inline]
    pub fn try_new(year: i32, month: u8, day: u8) -> CalendricsResult<Self> {
        Self::new_with_resolver(year, month, day, DateResolver::Strict)
    }

    /// Creates a new `LocalDate`, repairing a jointly-invalid day through
    /// the default resolver.
    #[inline]
    pub fn new(year: i32, month: u8, day: u8) -> CalendricsResult<Self> {
        Self::new_with_resolver(year, month, day, DateResolver::default())
    }

    /// Creates a new `LocalDate` with the specified resolver.
    ///
    /// Static field ranges are always enforced regardless of the resolver.
    #[inline]
    pub fn new_with_resolver(
        year: i32,
        month: u8,
        day: u8,
        resolver: DateResolver,
    ) -> CalendricsResult<Self> {
        Ok(Self::new_unchecked(IsoDate::regulate(
            year, month, day, resolver,
        )?))
    }

    /// Creates a new `LocalDate` from a year and a 1-based day-of-year.
    pub fn of_year_day(year: i32, day_of_year: u16) -> CalendricsResult<Self> {
        // Probe January 1 first so the year range is checked up front.
        let first = IsoDate::regulate(year, 1, 1, DateResolver::Strict)?;
        if day_of_year == 0 || day_of_year > crate::epoch::days_in_year(year) {
            return Err(CalendricsError::invalid_date().with_enum(ErrorMessage::DayOfYearInvalid));
        }
        let (month, day) = crate::epoch::month_day_from_day_of_year(year, day_of_year);
        Ok(Self::new_unchecked(IsoDate::new_unchecked(
            first.year, month, day,
        )))
    }

    /// Creates a new `LocalDate` from a signed day count with day 0 at
    /// 1970-01-01.
    #[inline]
    pub fn from_epoch_days(epoch_days: i64) -> CalendricsResult<Self> {
        Ok(Self::new_unchecked(IsoDate::from_epoch_days(epoch_days)?))
    }

    /// Creates a new `LocalDate` from a Modified Julian Day number, with
    /// day 0 at 1858-11-17.
    #[inline]
    pub fn from_modified_julian_days(modified_julian_days: i64) -> CalendricsResult<Self> {
        let epoch_days = modified_julian_days
            .checked_sub(MJD_EPOCH_OFFSET)
            .ok_or_else(|| {
                CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange)
            })?;
        Self::from_epoch_days(epoch_days)
    }

    /// Converts this date into its signed epoch day count.
    #[inline]
    #[must_use]
    pub fn to_epoch_days(&self) -> i64 {
        self.iso.to_epoch_days()
    }

    /// Converts this date into its Modified Julian Day number.
    #[inline]
    #[must_use]
    pub fn to_modified_julian_days(&self) -> i64 {
        self.iso.to_epoch_days() + MJD_EPOCH_OFFSET
    }

    /// Returns this date's year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.iso.year
    }

    /// Returns this date's month number, 1 through 12.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.iso.month
    }

    /// Returns this date's month as a [`MonthOfYear`].
    #[must_use]
    pub fn month_of_year(&self) -> MonthOfYear {
        match MonthOfYear::try_from_number(self.iso.month) {
            Ok(month) => month,
            Err(_) => unreachable!("a constructed date always holds a valid month"),
        }
    }

    /// Returns this date's day-of-month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.iso.day
    }

    /// Returns this date's day-of-week.
    #[must_use]
    pub fn day_of_week(&self) -> DayOfWeek {
        match DayOfWeek::try_from_number(self.iso.day_of_week()) {
            Ok(day) => day,
            Err(_) => unreachable!("day-of-week computation always lands in 1..=7"),
        }
    }

    /// Returns this date's 1-based day-of-year.
    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.iso.day_of_year()
    }

    /// Returns whether this date's year is a leap year.
    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        crate::epoch::is_leap_year(self.iso.year)
    }

    /// Returns the length of this date's month in days.
    #[inline]
    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        crate::epoch::days_in_month(self.iso.year, self.iso.month)
    }

    /// Returns the length of this date's year in days.
    #[inline]
    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        crate::epoch::days_in_year(self.iso.year)
    }

    /// Returns this date with the year replaced.
    ///
    /// A day-of-month made invalid by the change (February 29 moved to a
    /// standard year) is resolved through the provided resolver, clamping
    /// by default.
    pub fn with_year(
        &self,
        year: i32,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        if year == self.iso.year {
            return Ok(*self);
        }
        Self::new_with_resolver(year, self.iso.month, self.iso.day, resolver.unwrap_or_default())
    }

    /// Returns this date with the month-of-year replaced.
    ///
    /// A day-of-month made invalid by the change is resolved through the
    /// provided resolver, clamping by default.
    pub fn with_month(
        &self,
        month: u8,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        if month == self.iso.month {
            return Ok(*self);
        }
        Self::new_with_resolver(self.iso.year, month, self.iso.day, resolver.unwrap_or_default())
    }

    /// Returns this date with the day-of-month replaced.
    ///
    /// A day beyond the month's length is resolved through the provided
    /// resolver, clamping by default.
    pub fn with_day_of_month(
        &self,
        day: u8,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        if day == self.iso.day {
            return Ok(*self);
        }
        Self::new_with_resolver(self.iso.year, self.iso.month, day, resolver.unwrap_or_default())
    }

    /// Returns this date with the day-of-year replaced.
    pub fn with_day_of_year(&self, day_of_year: u16) -> CalendricsResult<Self> {
        if day_of_year == self.day_of_year() {
            return Ok(*self);
        }
        Self::of_year_day(self.iso.year, day_of_year)
    }

    /// Adds whole years, resolving the day-of-month against the resulting
    /// month.
    pub fn plus_years(
        &self,
        years: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        if years == 0 {
            return Ok(*self);
        }
        Ok(Self::new_unchecked(self.iso.add_years_months(
            years,
            0,
            resolver.unwrap_or_default(),
        )?))
    }

    /// Adds whole months, resolving the day-of-month against the resulting
    /// month.
    pub fn plus_months(
        &self,
        months: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        if months == 0 {
            return Ok(*self);
        }
        Ok(Self::new_unchecked(self.iso.add_years_months(
            0,
            months,
            resolver.unwrap_or_default(),
        )?))
    }

    /// Adds whole weeks by exact day-count arithmetic.
    pub fn plus_weeks(&self, weeks: i64) -> CalendricsResult<Self> {
        let days = weeks.checked_mul(7).ok_or_else(|| {
            CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange)
        })?;
        self.plus_days(days)
    }

    /// Adds whole days by exact day-count arithmetic.
    ///
    /// This path can never produce an invalid intermediate date, so no
    /// resolver is involved.
    pub fn plus_days(&self, days: i64) -> CalendricsResult<Self> {
        if days == 0 {
            return Ok(*self);
        }
        let total = self.iso.to_epoch_days().checked_add(days).ok_or_else(|| {
            CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange)
        })?;
        Self::from_epoch_days(total)
    }

    /// Subtracts whole years; see [`Self::plus_years`].
    pub fn minus_years(
        &self,
        years: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        self.plus_years(negate(years)?, resolver)
    }

    /// Subtracts whole months; see [`Self::plus_months`].
    pub fn minus_months(
        &self,
        months: i64,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        self.plus_months(negate(months)?, resolver)
    }

    /// Subtracts whole weeks; see [`Self::plus_weeks`].
    pub fn minus_weeks(&self, weeks: i64) -> CalendricsResult<Self> {
        self.plus_weeks(negate(weeks)?)
    }

    /// Subtracts whole days; see [`Self::plus_days`].
    pub fn minus_days(&self, days: i64) -> CalendricsResult<Self> {
        self.plus_days(negate(days)?)
    }

    /// Adds a combined period to this date.
    ///
    /// The years and months components are applied together as a single
    /// month delta and the day-of-month is resolved against the resulting
    /// month; the days component (with weeks folded in) is then applied by
    /// exact day-count arithmetic. When the day-of-month had to be clamped
    /// down and the days component is negative, the clamped amount absorbs
    /// the subtraction before any days are walked back:
    ///
    /// ```rust
    /// use calendrics::{LocalDate, Period};
    ///
    /// let start = LocalDate::try_new(2010, 1, 30).unwrap();
    /// let one_month_back_a_day = Period::new(0, 1, 0, -1);
    /// assert_eq!(
    ///     start.add(&one_month_back_a_day, None).unwrap(),
    ///     LocalDate::try_new(2010, 2, 28).unwrap(),
    /// );
    /// ```
    pub fn add(&self, period: &Period, resolver: Option<DateResolver>) -> CalendricsResult<Self> {
        if period.is_zero() {
            return Ok(*self);
        }
        Ok(Self::new_unchecked(
            self.iso.add_period(period, resolver.unwrap_or_default())?,
        ))
    }

    /// Subtracts a combined period from this date; see [`Self::add`].
    pub fn subtract(
        &self,
        period: &Period,
        resolver: Option<DateResolver>,
    ) -> CalendricsResult<Self> {
        self.add(&period.negated(), resolver)
    }

    /// Combines this date with a time-of-day into a `LocalDateTime`.
    #[inline]
    #[must_use]
    pub fn at_time(&self, time: LocalTime) -> LocalDateTime {
        LocalDateTime::new_unchecked(IsoDateTime::new_unchecked(self.iso, time.iso))
    }

    /// Combines this date with midnight into a `LocalDateTime`.
    #[inline]
    #[must_use]
    pub fn at_start_of_day(&self) -> LocalDateTime {
        self.at_time(LocalTime::MIDNIGHT)
    }
}

fn negate(value: i64) -> CalendricsResult<i64> {
    value
        .checked_neg()
        .ok_or_else(|| CalendricsError::overflow().with_enum(ErrorMessage::DayCountOutOfRange))
}

// ==== Trait impls ====

impl From<LocalDateTime> for LocalDate {
    fn from(value: LocalDateTime) -> Self {
        LocalDate::new_unchecked(value.iso.date)
    }
}

impl Writeable for LocalDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        display::write_year(sink, self.iso.year)?;
        sink.write_char('-')?;
        display::write_two_digit(sink, self.iso.month)?;
        sink.write_char('-')?;
        display::write_two_digit(sink, self.iso.day)
    }
}

impl_display_with_writeable!(LocalDate);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn new_date_limits() {
        assert!(LocalDate::try_new(-271_821, 4, 18).is_err());
        assert!(LocalDate::try_new(275_760, 9, 14).is_err());
        assert_eq!(
            LocalDate::try_new(-271_821, 4, 19),
            Ok(LocalDate::MIN)
        );
        assert_eq!(LocalDate::try_new(275_760, 9, 13), Ok(LocalDate::MAX));
    }

    #[test]
    fn strict_versus_lenient_construction() {
        let err = LocalDate::try_new(2009, 2, 29).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);

        let clamped = LocalDate::new(2009, 2, 29).unwrap();
        assert_eq!(clamped, LocalDate::try_new(2009, 2, 28).unwrap());

        // Static field ranges reject regardless of the resolver.
        assert_eq!(
            LocalDate::new(2009, 13, 1).unwrap_err().kind(),
            ErrorKind::FieldRange
        );
        assert_eq!(
            LocalDate::new(2009, 1, 32).unwrap_err().kind(),
            ErrorKind::FieldRange
        );
    }

    #[test]
    fn epoch_day_round_trip() {
        let date = LocalDate::try_new(1970, 1, 1).unwrap();
        assert_eq!(date.to_epoch_days(), 0);
        for days in [-100_000_000, -719_468, -1, 0, 1, 11_017, 100_000_000] {
            let date = LocalDate::from_epoch_days(days).unwrap();
            assert_eq!(date.to_epoch_days(), days);
        }
        assert!(LocalDate::from_epoch_days(100_000_001).is_err());
        assert!(LocalDate::from_epoch_days(-100_000_001).is_err());
    }

    #[test]
    fn modified_julian_day_round_trip() {
        let date = LocalDate::try_new(1858, 11, 17).unwrap();
        assert_eq!(date.to_modified_julian_days(), 0);
        let date = LocalDate::from_modified_julian_days(40_587).unwrap();
        assert_eq!(date, LocalDate::try_new(1970, 1, 1).unwrap());
        assert_eq!(date.to_modified_julian_days(), 40_587);
    }

    #[test]
    fn plus_years_resolves_leap_day() {
        let leap_day = LocalDate::try_new(2008, 2, 29).unwrap();
        assert_eq!(
            leap_day.plus_years(1, None).unwrap(),
            LocalDate::try_new(2009, 2, 28).unwrap()
        );
        assert_eq!(
            leap_day.plus_years(4, None).unwrap(),
            LocalDate::try_new(2012, 2, 29).unwrap()
        );
        assert_eq!(
            leap_day
                .plus_years(1, Some(DateResolver::Strict))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidDate
        );
    }

    #[test]
    fn plus_months_resolves_short_months() {
        let date = LocalDate::try_new(2007, 3, 31).unwrap();
        assert_eq!(
            date.plus_months(1, None).unwrap(),
            LocalDate::try_new(2007, 4, 30).unwrap()
        );
        assert_eq!(
            date.plus_months(-1, None).unwrap(),
            LocalDate::try_new(2007, 2, 28).unwrap()
        );
        assert_eq!(
            date.plus_months(23, None).unwrap(),
            LocalDate::try_new(2009, 2, 28).unwrap()
        );
        assert_eq!(
            date.plus_months(-13, None).unwrap(),
            LocalDate::try_new(2006, 2, 28).unwrap()
        );
    }

    #[test]
    fn plus_days_is_exact() {
        let date = LocalDate::try_new(2008, 12, 31).unwrap();
        assert_eq!(
            date.plus_days(1).unwrap(),
            LocalDate::try_new(2009, 1, 1).unwrap()
        );
        assert_eq!(
            date.plus_weeks(1).unwrap(),
            LocalDate::try_new(2009, 1, 7).unwrap()
        );
        for days in [-400, -1, 1, 365, 1461] {
            assert_eq!(
                date.plus_days(days).unwrap().plus_days(-days).unwrap(),
                date
            );
        }
    }

    #[test]
    fn plus_days_limits() {
        assert!(LocalDate::MAX.plus_days(1).is_err());
        assert!(LocalDate::MIN.plus_days(-1).is_err());
        assert_eq!(
            LocalDate::MAX.plus_days(-1).unwrap().plus_days(1).unwrap(),
            LocalDate::MAX
        );
        assert_eq!(
            LocalDate::MAX.plus_days(1).unwrap_err().kind(),
            ErrorKind::Overflow
        );
    }

    // The combined add applies years and months first, clamps, and lets a
    // negative day component be absorbed by the clamp.
    #[test]
    fn combined_period_add_table() {
        let cases: &[((i32, u8, u8), (i64, i64, i64), (i32, u8, u8))] = &[
            // Push forward over February, leap year.
            ((2008, 1, 30), (0, 1, 1), (2008, 3, 1)),
            ((2008, 1, 30), (0, 1, 2), (2008, 3, 2)),
            ((2008, 1, 31), (0, 1, 1), (2008, 3, 1)),
            ((2008, 2, 1), (0, 1, 1), (2008, 3, 2)),
            // Push back into the clamp, leap year.
            ((2008, 1, 31), (0, 1, -1), (2008, 2, 29)),
            ((2008, 1, 31), (0, 1, -2), (2008, 2, 29)),
            ((2008, 1, 31), (0, 1, -3), (2008, 2, 28)),
            ((2008, 1, 31), (0, 1, -4), (2008, 2, 27)),
            ((2008, 1, 31), (0, 1, -31), (2008, 1, 31)),
            // Push back into the clamp, standard year.
            ((2009, 1, 31), (0, 1, -1), (2009, 2, 28)),
            ((2009, 1, 31), (0, 1, -2), (2009, 2, 28)),
            ((2009, 1, 31), (0, 1, -3), (2009, 2, 28)),
            ((2009, 1, 31), (0, 1, -4), (2009, 2, 27)),
            ((2009, 1, 16), (0, 1, -8), (2009, 2, 8)),
            // No clamp involved.
            ((2008, 2, 1), (0, 1, -1), (2008, 2, 29)),
            ((2008, 2, 2), (0, 1, -2), (2008, 2, 29)),
            ((2008, 1, 20), (0, 1, -2), (2008, 2, 18)),
            // Negative months.
            ((2008, 3, 31), (0, -1, 1), (2008, 3, 1)),
            ((2008, 3, 31), (0, -1, -1), (2008, 2, 29)),
            ((2008, 4, 2), (0, -1, -1), (2008, 3, 1)),
            // Years and months together.
            ((2008, 1, 29), (1, 1, 0), (2009, 2, 28)),
            ((2008, 1, 27), (1, 1, 1), (2009, 2, 28)),
            ((2008, 1, 28), (1, 1, 1), (2009, 3, 1)),
        ];
        for &((y, m, d), (years, months, days), (ey, em, ed)) in cases {
            let start = LocalDate::try_new(y, m, d).unwrap();
            let period = Period::new(years, months, 0, days);
            let expected = LocalDate::try_new(ey, em, ed).unwrap();
            assert_eq!(
                start.add(&period, None).unwrap(),
                expected,
                "{start} + {period}"
            );
        }
    }

    #[test]
    fn combined_period_matches_documented_examples() {
        let start = LocalDate::try_new(2010, 1, 30).unwrap();
        let expect = |y, m, d| LocalDate::try_new(y, m, d).unwrap();
        assert_eq!(start.add(&Period::new(0, 1, 0, 2), None).unwrap(), expect(2010, 3, 2));
        assert_eq!(start.add(&Period::new(0, 1, 0, 1), None).unwrap(), expect(2010, 3, 1));
        assert_eq!(start.add(&Period::new(0, 1, 0, 0), None).unwrap(), expect(2010, 2, 28));
        assert_eq!(start.add(&Period::new(0, 1, 0, -1), None).unwrap(), expect(2010, 2, 28));
        assert_eq!(start.add(&Period::new(0, 1, 0, -2), None).unwrap(), expect(2010, 2, 28));
        assert_eq!(start.add(&Period::new(0, 1, 0, -3), None).unwrap(), expect(2010, 2, 27));
    }

    #[test]
    fn subtract_negates_the_period() {
        let date = LocalDate::try_new(2019, 11, 18).unwrap();
        assert_eq!(
            date.subtract(&Period::of_years(43), None).unwrap(),
            LocalDate::try_new(1976, 11, 18).unwrap()
        );
        assert_eq!(
            date.subtract(&Period::of_months(11), None).unwrap(),
            LocalDate::try_new(2018, 12, 18).unwrap()
        );
        assert_eq!(
            date.subtract(&Period::of_days(20), None).unwrap(),
            LocalDate::try_new(2019, 10, 29).unwrap()
        );
    }

    #[test]
    fn with_field_mutators() {
        let date = LocalDate::try_new(2012, 2, 29).unwrap();
        // Identity edits return the value unchanged.
        assert_eq!(date.with_year(2012, None).unwrap(), date);
        assert_eq!(date.with_day_of_month(29, None).unwrap(), date);
        // The lenient default clamps.
        assert_eq!(
            date.with_year(2013, None).unwrap(),
            LocalDate::try_new(2013, 2, 28).unwrap()
        );
        // The strict resolver rejects instead.
        assert_eq!(
            date.with_year(2013, Some(DateResolver::Strict))
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidDate
        );
        let date = LocalDate::try_new(2007, 1, 31).unwrap();
        assert_eq!(
            date.with_month(4, None).unwrap(),
            LocalDate::try_new(2007, 4, 30).unwrap()
        );
        assert_eq!(
            date.with_day_of_month(20, None).unwrap(),
            LocalDate::try_new(2007, 1, 20).unwrap()
        );
    }

    #[test]
    fn day_of_year_round_trip() {
        let date = LocalDate::try_new(2008, 12, 31).unwrap();
        assert_eq!(date.day_of_year(), 366);
        assert_eq!(LocalDate::of_year_day(2008, 366).unwrap(), date);
        assert_eq!(date.with_day_of_year(60).unwrap(), LocalDate::try_new(2008, 2, 29).unwrap());
        assert!(LocalDate::of_year_day(2009, 366).is_err());
        assert!(LocalDate::of_year_day(2009, 0).is_err());
    }

    #[test]
    fn day_of_week_progression() {
        use crate::fields::DayOfWeek;
        // 1970-01-01 was a Thursday.
        let date = LocalDate::try_new(1970, 1, 1).unwrap();
        assert_eq!(date.day_of_week(), DayOfWeek::Thursday);
        assert_eq!(date.plus_days(3).unwrap().day_of_week(), DayOfWeek::Sunday);
        assert_eq!(date.plus_days(4).unwrap().day_of_week(), DayOfWeek::Monday);
        assert_eq!(date.minus_days(1).unwrap().day_of_week(), DayOfWeek::Wednesday);
    }

    #[test]
    fn ordering_is_total_and_lexicographic() {
        let dates = [
            LocalDate::try_new(2007, 12, 31).unwrap(),
            LocalDate::try_new(2008, 1, 1).unwrap(),
            LocalDate::try_new(2008, 1, 2).unwrap(),
            LocalDate::try_new(2008, 2, 1).unwrap(),
        ];
        for window in dates.windows(2) {
            assert!(window[0] < window[1]);
        }
        for a in dates {
            for b in dates {
                let lt = a < b;
                let eq = a == b;
                let gt = a > b;
                assert_eq!(u8::from(lt) + u8::from(eq) + u8::from(gt), 1);
            }
        }
    }

    #[test]
    fn rendering() {
        assert_eq!(LocalDate::try_new(2010, 2, 28).unwrap().to_string(), "2010-02-28");
        assert_eq!(LocalDate::try_new(-25, 1, 2).unwrap().to_string(), "-000025-01-02");
    }
}
