//! This module implements `LocalTime` and any directly related algorithms.

use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    display,
    iso::IsoTime,
    CalendricsError, CalendricsResult, NS_PER_DAY,
};

/// An immutable time-of-day without a date or zone: hour, minute, second
/// and nanosecond-of-second.
///
/// Every `(hour, minute, second, nanosecond)` combination inside the field
/// ranges is valid, so time arithmetic never needs a resolver; the
/// `plus_*` operations wrap around midnight and discard the day carry.
///
/// ## Examples
///
/// ```rust
/// use calendrics::LocalTime;
///
/// let time = LocalTime::try_new(23, 30, 15, 0).unwrap();
/// assert_eq!(time.hour(), 23);
/// assert_eq!(time.plus_hours(2), LocalTime::try_new(1, 30, 15, 0).unwrap());
/// assert!(LocalTime::try_new(24, 0, 0, 0).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocalTime {
    pub(crate) iso: IsoTime,
}

// ==== Private API ====

impl LocalTime {
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(iso: IsoTime) -> Self {
        Self { iso }
    }

    // Wrapping arithmetic: apply the delta and drop the day carry.
    fn plus_nanos_wrapping(self, nanos: i128) -> Self {
        let (_, time) = self.iso.add(nanos);
        Self::new_unchecked(time)
    }
}

// ==== Public API ====

impl LocalTime {
    /// Midnight, the start of the day.
    pub const MIDNIGHT: LocalTime = LocalTime::new_unchecked(IsoTime::new_unchecked(0, 0, 0, 0));

    /// Noon.
    pub const NOON: LocalTime = LocalTime::new_unchecked(IsoTime::noon());

    /// Creates a new `LocalTime`, validating each field against its own
    /// range.
    #[inline]
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> CalendricsResult<Self> {
        Ok(Self::new_unchecked(IsoTime::new(
            hour, minute, second, nanosecond,
        )?))
    }

    /// Creates a new `LocalTime` from a second-of-day value.
    pub fn of_second_of_day(second_of_day: u32) -> CalendricsResult<Self> {
        if second_of_day >= 86_400 {
            return Err(CalendricsError::field_out_of_range(
                "second-of-day",
                i64::from(second_of_day),
                0,
                86_399,
            ));
        }
        Ok(Self::new_unchecked(IsoTime::from_nano_of_day(
            u64::from(second_of_day) * 1_000_000_000,
        )))
    }

    /// Creates a new `LocalTime` from a nanosecond-of-day value.
    pub fn of_nano_of_day(nano_of_day: u64) -> CalendricsResult<Self> {
        if nano_of_day >= NS_PER_DAY {
            return Err(CalendricsError::field_out_of_range(
                "nanosecond-of-day",
                nano_of_day as i64,
                0,
                NS_PER_DAY as i64 - 1,
            ));
        }
        Ok(Self::new_unchecked(IsoTime::from_nano_of_day(nano_of_day)))
    }

    /// Returns the hour-of-day.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.iso.hour
    }

    /// Returns the minute-of-hour.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.iso.minute
    }

    /// Returns the second-of-minute.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.iso.second
    }

    /// Returns the nanosecond-of-second.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.iso.nanosecond
    }

    /// Returns the second-of-day.
    #[must_use]
    pub fn second_of_day(&self) -> u32 {
        u32::from(self.iso.hour) * 3600
            + u32::from(self.iso.minute) * 60
            + u32::from(self.iso.second)
    }

    /// Returns the nanosecond-of-day.
    #[must_use]
    pub fn nano_of_day(&self) -> u64 {
        self.iso.nano_of_day()
    }

    /// Returns this time with the hour-of-day replaced.
    pub fn with_hour(&self, hour: u8) -> CalendricsResult<Self> {
        if hour == self.iso.hour {
            return Ok(*self);
        }
        Self::try_new(hour, self.iso.minute, self.iso.second, self.iso.nanosecond)
    }

    /// Returns this time with the minute-of-hour replaced.
    pub fn with_minute(&self, minute: u8) -> CalendricsResult<Self> {
        if minute == self.iso.minute {
            return Ok(*self);
        }
        Self::try_new(self.iso.hour, minute, self.iso.second, self.iso.nanosecond)
    }

    /// Returns this time with the second-of-minute replaced.
    pub fn with_second(&self, second: u8) -> CalendricsResult<Self> {
        if second == self.iso.second {
            return Ok(*self);
        }
        Self::try_new(self.iso.hour, self.iso.minute, second, self.iso.nanosecond)
    }

    /// Returns this time with the nanosecond-of-second replaced.
    pub fn with_nanosecond(&self, nanosecond: u32) -> CalendricsResult<Self> {
        if nanosecond == self.iso.nanosecond {
            return Ok(*self);
        }
        Self::try_new(self.iso.hour, self.iso.minute, self.iso.second, nanosecond)
    }

    /// Adds hours, wrapping around midnight.
    #[must_use]
    pub fn plus_hours(&self, hours: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(hours) * 3_600_000_000_000)
    }

    /// Adds minutes, wrapping around midnight.
    #[must_use]
    pub fn plus_minutes(&self, minutes: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(minutes) * 60_000_000_000)
    }

    /// Adds seconds, wrapping around midnight.
    #[must_use]
    pub fn plus_seconds(&self, seconds: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(seconds) * 1_000_000_000)
    }

    /// Adds nanoseconds, wrapping around midnight.
    #[must_use]
    pub fn plus_nanoseconds(&self, nanoseconds: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(nanoseconds))
    }

    /// Subtracts hours, wrapping around midnight.
    #[must_use]
    pub fn minus_hours(&self, hours: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(hours) * -3_600_000_000_000)
    }

    /// Subtracts minutes, wrapping around midnight.
    #[must_use]
    pub fn minus_minutes(&self, minutes: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(minutes) * -60_000_000_000)
    }

    /// Subtracts seconds, wrapping around midnight.
    #[must_use]
    pub fn minus_seconds(&self, seconds: i64) -> Self {
        self.plus_nanos_wrapping(i128::from(seconds) * -1_000_000_000)
    }

    /// Subtracts nanoseconds, wrapping around midnight.
    #[must_use]
    pub fn minus_nanoseconds(&self, nanoseconds: i64) -> Self {
        self.plus_nanos_wrapping(-i128::from(nanoseconds))
    }
}

impl Writeable for LocalTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        display::write_two_digit(sink, self.iso.hour)?;
        sink.write_char(':')?;
        display::write_two_digit(sink, self.iso.minute)?;
        sink.write_char(':')?;
        display::write_two_digit(sink, self.iso.second)?;
        display::write_subsecond(sink, self.iso.nanosecond)
    }
}

impl_display_with_writeable!(LocalTime);
