//! This module implements `OffsetDateTime`.

use core::cmp::Ordering;
use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    builtins::core::{Instant, LocalDate, LocalDateTime, LocalTime, ZoneOffset},
    iso::IsoDateTime,
    CalendricsResult,
};

/// An immutable date-time with a fixed UTC offset.
///
/// The offset is asserted, not validated against any zone's rules; pairing
/// the local fields with an offset is enough to identify an exact instant.
/// For a value whose offset is checked against a zone, see
/// [`ZonedDateTime`](crate::ZonedDateTime).
///
/// ## Examples
///
/// ```rust
/// use calendrics::{LocalDateTime, OffsetDateTime, ZoneOffset};
///
/// let local = LocalDateTime::try_new(1970, 1, 1, 1, 0, 0, 0).unwrap();
/// let offset = ZoneOffset::try_from_hours(1).unwrap();
/// let odt = OffsetDateTime::new(local, offset);
///
/// // 01:00 at +01:00 is midnight UTC.
/// assert_eq!(odt.to_instant().unwrap().epoch_seconds(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetDateTime {
    datetime: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {
    /// Creates a new `OffsetDateTime` from a local date-time and an
    /// asserted offset.
    #[inline]
    #[must_use]
    pub const fn new(datetime: LocalDateTime, offset: ZoneOffset) -> Self {
        Self { datetime, offset }
    }

    /// Creates an `OffsetDateTime` holding the local fields the provided
    /// instant has at the provided offset.
    pub fn from_instant(instant: &Instant, offset: ZoneOffset) -> CalendricsResult<Self> {
        let local = IsoDateTime::from_local_nanoseconds(instant.as_i128() + offset.nanoseconds())?;
        Ok(Self::new(LocalDateTime::new_unchecked(local), offset))
    }

    /// Returns the local date-time component.
    #[inline]
    #[must_use]
    pub const fn date_time(&self) -> LocalDateTime {
        self.datetime
    }

    /// Returns the date component.
    #[inline]
    #[must_use]
    pub const fn date(&self) -> LocalDate {
        self.datetime.date()
    }

    /// Returns the time component.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> LocalTime {
        self.datetime.time()
    }

    /// Returns the offset.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> ZoneOffset {
        self.offset
    }

    /// Returns the exact nanosecond position of this value on the UTC
    /// time-line. The local fields are bounded, so this cannot overflow.
    #[inline]
    pub(crate) fn instant_nanoseconds(&self) -> i128 {
        self.datetime.iso.local_nanoseconds() - self.offset.nanoseconds()
    }

    /// Converts this value into an `Instant`.
    pub fn to_instant(&self) -> CalendricsResult<Instant> {
        Instant::try_new(self.instant_nanoseconds())
    }

    /// Returns this value with a different asserted offset and the same
    /// local fields, changing the instant it represents.
    #[inline]
    #[must_use]
    pub const fn with_offset_same_local(&self, offset: ZoneOffset) -> Self {
        Self::new(self.datetime, offset)
    }

    /// Returns this value with a different offset and the same instant,
    /// changing the local fields it shows.
    pub fn with_offset_same_instant(&self, offset: ZoneOffset) -> CalendricsResult<Self> {
        if offset == self.offset {
            return Ok(*self);
        }
        let shift = offset.nanoseconds() - self.offset.nanoseconds();
        let local = self.datetime.iso.add_nanoseconds(shift)?;
        Ok(Self::new(LocalDateTime::new_unchecked(local), offset))
    }
}

impl PartialOrd for OffsetDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OffsetDateTime {
    /// Orders by instant, breaking ties between equal instants by local
    /// date-time; consistent with equality because equal instants with
    /// equal local fields imply equal offsets.
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant_nanoseconds()
            .cmp(&other.instant_nanoseconds())
            .then_with(|| self.datetime.cmp(&other.datetime))
    }
}

impl Writeable for OffsetDateTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.datetime.write_to(sink)?;
        self.offset.write_to(sink)
    }
}

impl_display_with_writeable!(OffsetDateTime);
