//! This module contains the core implementation of the `ZonedDateTime`
//! type.

use core::cmp::Ordering;
use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    builtins::core::{
        Instant, LocalDate, LocalDateTime, LocalTime, OffsetDateTime, TimeZone, ZoneOffset,
    },
    error::ErrorMessage,
    options::{DateResolver, ZoneResolver},
    provider::{LocalOffsets, ZoneRulesProvider},
    CalendricsError, CalendricsResult, Period,
};

/// An immutable date-time in a specific time zone.
///
/// A `ZonedDateTime` is an [`OffsetDateTime`] paired with the identity of
/// the [`TimeZone`] it belongs to, with one extra invariant: the stored
/// offset is always one of the offsets the zone's rules consider valid for
/// the stored local date-time. The invariant is enforced whenever a value
/// is constructed or its local fields change, which is why every such
/// operation takes a [`ZoneRulesProvider`].
///
/// Local-field edits re-resolve against the zone rules with the
/// [`ZoneResolver::RetainOffset`] strategy: an edit that lands on an
/// ambiguous (overlapping) local time keeps the offset the value already
/// had whenever the rules still allow it.
///
/// ## Examples
///
/// ```rust
/// use calendrics::provider::{InMemoryZoneProvider, ZoneTable};
/// use calendrics::{LocalDateTime, TimeZone, ZonedDateTime};
///
/// // A fictional zone fixed at +02:00.
/// let provider = InMemoryZoneProvider::new().with_zone("Europe/Testing", ZoneTable::fixed(7200));
/// let zone = TimeZone::named("Europe/Testing");
///
/// let local = LocalDateTime::try_new(2010, 6, 1, 12, 0, 0, 0).unwrap();
/// let zdt = ZonedDateTime::from_local_with_provider(local, zone, None, &provider).unwrap();
/// assert_eq!(zdt.offset().seconds(), 7200);
/// assert_eq!(zdt.hour(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedDateTime {
    datetime: OffsetDateTime,
    zone: TimeZone,
}

// ==== Private API ====

impl ZonedDateTime {
    /// Creates a `ZonedDateTime` without consulting the zone rules.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(datetime: OffsetDateTime, zone: TimeZone) -> Self {
        Self { datetime, zone }
    }

    // Builds the result of a resolution step, re-validating the instant
    // range.
    fn from_resolution(
        iso: crate::iso::IsoDateTime,
        offset: ZoneOffset,
        zone: TimeZone,
    ) -> CalendricsResult<Self> {
        let datetime = OffsetDateTime::new(LocalDateTime::new_unchecked(iso), offset);
        datetime.to_instant()?;
        Ok(Self::new_unchecked(datetime, zone))
    }

    // Applies a local-field edit and re-resolves against the zone rules,
    // retaining the current offset where it remains valid.
    fn map_local(
        &self,
        provider: &impl ZoneRulesProvider,
        op: impl FnOnce(LocalDateTime) -> CalendricsResult<LocalDateTime>,
    ) -> CalendricsResult<Self> {
        let local = op(self.datetime.date_time())?;
        let (iso, offset) = self.zone.resolve_local(
            local.iso,
            ZoneResolver::RetainOffset,
            Some(self.datetime.offset()),
            provider,
        )?;
        Self::from_resolution(iso, offset, self.zone.clone())
    }
}

// ==== Public API ====

impl ZonedDateTime {
    /// Creates a `ZonedDateTime` by reconciling a local date-time against
    /// the zone's rules.
    ///
    /// The resolver settles gaps and overlaps; the default rejects
    /// nothing, repairing gaps forward and taking the earlier offset at an
    /// overlap.
    pub fn from_local_with_provider(
        datetime: LocalDateTime,
        zone: TimeZone,
        resolver: Option<ZoneResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        let (iso, offset) =
            zone.resolve_local(datetime.iso, resolver.unwrap_or_default(), None, provider)?;
        Self::from_resolution(iso, offset, zone)
    }

    /// Creates a `ZonedDateTime` holding the local fields the provided
    /// instant has in the provided zone. An instant always has exactly one
    /// valid offset, so this never consults a resolver.
    pub fn from_instant_with_provider(
        instant: &Instant,
        zone: TimeZone,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        let offset = zone.offset_for_instant_with_provider(instant, provider)?;
        let datetime = OffsetDateTime::from_instant(instant, offset)?;
        Ok(Self::new_unchecked(datetime, zone))
    }

    /// Creates a `ZonedDateTime` from a local date-time and an explicit
    /// offset, validating that the offset is one the zone's rules consider
    /// valid for that local date-time.
    pub fn try_new_with_provider(
        datetime: LocalDateTime,
        offset: ZoneOffset,
        zone: TimeZone,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        let valid = match zone.local_offsets(datetime.iso, provider)? {
            LocalOffsets::Single(single) => ZoneOffset::try_from(single)? == offset,
            LocalOffsets::Overlap(transition) => {
                ZoneOffset::try_from(transition.offset_before)? == offset
                    || ZoneOffset::try_from(transition.offset_after)? == offset
            }
            LocalOffsets::Gap(_) => false,
        };
        if !valid {
            return Err(
                CalendricsError::invalid_date().with_enum(ErrorMessage::OffsetInvalidForZone)
            );
        }
        Self::from_resolution(datetime.iso, offset, zone)
    }

    /// Returns the offset date-time component.
    #[inline]
    #[must_use]
    pub const fn offset_date_time(&self) -> OffsetDateTime {
        self.datetime
    }

    /// Returns the local date-time component.
    #[inline]
    #[must_use]
    pub const fn local_date_time(&self) -> LocalDateTime {
        self.datetime.date_time()
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

    /// Returns the stored offset.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> ZoneOffset {
        self.datetime.offset()
    }

    /// Returns the time zone identity.
    #[inline]
    #[must_use]
    pub const fn timezone(&self) -> &TimeZone {
        &self.zone
    }

    /// Returns the year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.datetime.date().year()
    }

    /// Returns the month number, 1 through 12.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.datetime.date().month()
    }

    /// Returns the day-of-month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.datetime.date().day()
    }

    /// Returns the hour-of-day.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.datetime.time().hour()
    }

    /// Returns the minute-of-hour.
    #[inline]
    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.datetime.time().minute()
    }

    /// Returns the second-of-minute.
    #[inline]
    #[must_use]
    pub const fn second(&self) -> u8 {
        self.datetime.time().second()
    }

    /// Returns the nanosecond-of-second.
    #[inline]
    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.datetime.time().nanosecond()
    }

    /// Converts this value into the `Instant` it represents.
    #[inline]
    pub fn to_instant(&self) -> CalendricsResult<Instant> {
        self.datetime.to_instant()
    }

    /// Returns the whole-second count since the epoch.
    pub fn epoch_seconds(&self) -> CalendricsResult<i64> {
        Ok(self.to_instant()?.epoch_seconds())
    }

    /// Returns the millisecond count since the epoch.
    pub fn epoch_milliseconds(&self) -> CalendricsResult<i64> {
        Ok(self.to_instant()?.epoch_milliseconds())
    }

    /// Compares two values by the instant they represent.
    #[inline]
    #[must_use]
    pub fn compare_instant(&self, other: &Self) -> Ordering {
        self.datetime
            .instant_nanoseconds()
            .cmp(&other.datetime.instant_nanoseconds())
    }

    /// Returns this value with the earlier of the two valid offsets, if
    /// the local date-time is currently inside an overlap; otherwise
    /// returns the value unchanged.
    ///
    /// Whether the local date-time sits in an overlap is re-derived from
    /// the zone rules on every call.
    pub fn with_earlier_offset_at_overlap_with_provider(
        &self,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        match self.zone.local_offsets(self.datetime.date_time().iso, provider)? {
            LocalOffsets::Overlap(transition) => {
                let earlier = ZoneOffset::try_from(transition.offset_before)?;
                if earlier == self.offset() {
                    return Ok(self.clone());
                }
                Ok(Self::new_unchecked(
                    self.datetime.with_offset_same_local(earlier),
                    self.zone.clone(),
                ))
            }
            _ => Ok(self.clone()),
        }
    }

    /// Returns this value with the later of the two valid offsets, if the
    /// local date-time is currently inside an overlap; otherwise returns
    /// the value unchanged.
    pub fn with_later_offset_at_overlap_with_provider(
        &self,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        match self.zone.local_offsets(self.datetime.date_time().iso, provider)? {
            LocalOffsets::Overlap(transition) => {
                let later = ZoneOffset::try_from(transition.offset_after)?;
                if later == self.offset() {
                    return Ok(self.clone());
                }
                Ok(Self::new_unchecked(
                    self.datetime.with_offset_same_local(later),
                    self.zone.clone(),
                ))
            }
            _ => Ok(self.clone()),
        }
    }

    /// Moves this value to another zone, keeping the instant and
    /// recomputing the local fields. This never consults a resolver.
    pub fn with_zone_same_instant_with_provider(
        &self,
        zone: TimeZone,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        let instant = self.to_instant()?;
        Self::from_instant_with_provider(&instant, zone, provider)
    }

    /// Moves this value to another zone, keeping the local fields and
    /// re-resolving the offset against the new zone's rules.
    pub fn with_zone_same_local_with_provider(
        &self,
        zone: TimeZone,
        resolver: Option<ZoneResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        let (iso, offset) = zone.resolve_local(
            self.datetime.date_time().iso,
            resolver.unwrap_or_default(),
            Some(self.offset()),
            provider,
        )?;
        Self::from_resolution(iso, offset, zone)
    }

    /// Replaces the local date-time, retaining the current offset where
    /// the zone rules still allow it.
    pub fn with_local_date_time_with_provider(
        &self,
        datetime: LocalDateTime,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |_| Ok(datetime))
    }

    /// Returns this value with the year replaced; see
    /// [`LocalDate::with_year`].
    pub fn with_year_with_provider(
        &self,
        year: i32,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.with_year(year, resolver))
    }

    /// Returns this value with the month replaced; see
    /// [`LocalDate::with_month`].
    pub fn with_month_with_provider(
        &self,
        month: u8,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.with_month(month, resolver))
    }

    /// Returns this value with the day-of-month replaced; see
    /// [`LocalDate::with_day_of_month`].
    pub fn with_day_of_month_with_provider(
        &self,
        day: u8,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.with_day_of_month(day, resolver))
    }

    /// Returns this value with the time-of-day replaced.
    pub fn with_time_with_provider(
        &self,
        time: LocalTime,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| Ok(local.with_time(time)))
    }

    /// Adds whole years to the local fields; see [`LocalDate::plus_years`].
    pub fn plus_years_with_provider(
        &self,
        years: i64,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_years(years, resolver))
    }

    /// Adds whole months to the local fields; see
    /// [`LocalDate::plus_months`].
    pub fn plus_months_with_provider(
        &self,
        months: i64,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_months(months, resolver))
    }

    /// Adds whole weeks to the local fields; see [`LocalDate::plus_weeks`].
    pub fn plus_weeks_with_provider(
        &self,
        weeks: i64,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_weeks(weeks))
    }

    /// Adds whole days to the local fields; see [`LocalDate::plus_days`].
    pub fn plus_days_with_provider(
        &self,
        days: i64,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_days(days))
    }

    /// Adds hours to the local fields, carrying into the date.
    pub fn plus_hours_with_provider(
        &self,
        hours: i64,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_hours(hours))
    }

    /// Adds minutes to the local fields, carrying into the date.
    pub fn plus_minutes_with_provider(
        &self,
        minutes: i64,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_minutes(minutes))
    }

    /// Adds seconds to the local fields, carrying into the date.
    pub fn plus_seconds_with_provider(
        &self,
        seconds: i64,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_seconds(seconds))
    }

    /// Adds nanoseconds to the local fields, carrying into the date.
    pub fn plus_nanoseconds_with_provider(
        &self,
        nanoseconds: i64,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.plus_nanoseconds(nanoseconds))
    }

    /// Adds a combined period to the local fields; see [`LocalDate::add`].
    pub fn add_with_provider(
        &self,
        period: &Period,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.add(period, resolver))
    }

    /// Subtracts a combined period from the local fields; see
    /// [`LocalDate::subtract`].
    pub fn subtract_with_provider(
        &self,
        period: &Period,
        resolver: Option<DateResolver>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        self.map_local(provider, |local| local.subtract(period, resolver))
    }
}

impl Writeable for ZonedDateTime {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.datetime.write_to(sink)?;
        sink.write_char('[')?;
        match &self.zone {
            TimeZone::Named(identifier) => sink.write_str(identifier)?,
            TimeZone::Fixed(offset) => offset.write_to(sink)?,
        }
        sink.write_char(']')
    }
}

impl_display_with_writeable!(ZonedDateTime);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{InMemoryZoneProvider, ZoneTable};
    use crate::ErrorKind;
    use alloc::string::ToString;

    const ZONE_ID: &str = "Europe/Testing";

    fn local(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
    ) -> LocalDateTime {
        LocalDateTime::try_new(year, month, day, hour, minute, 0, 0).unwrap()
    }

    fn local_seconds(datetime: &LocalDateTime) -> i64 {
        datetime.iso.local_seconds()
    }

    // A synthetic zone with one fall-back and one spring-forward:
    //   - 2010-10-31: the offset changes +02:00 -> +01:00 at local 03:00,
    //     so the local hour [02:00, 03:00) repeats.
    //   - 2011-03-27: the offset changes +01:00 -> +02:00 at local 01:00,
    //     so the local hour [01:00, 02:00) is skipped.
    fn provider() -> InMemoryZoneProvider {
        let fall_back = local_seconds(&local(2010, 10, 31, 3, 0)) - 7200;
        let spring_forward = local_seconds(&local(2011, 3, 27, 1, 0)) - 3600;
        let table = ZoneTable::fixed(7200)
            .with_transition(fall_back, 3600)
            .with_transition(spring_forward, 7200);
        InMemoryZoneProvider::new().with_zone(ZONE_ID, table)
    }

    fn zone() -> TimeZone {
        TimeZone::named(ZONE_ID)
    }

    fn offset(hours: i32) -> ZoneOffset {
        ZoneOffset::try_from_hours(hours).unwrap()
    }

    #[test]
    fn unambiguous_local_resolution() {
        let provider = provider();
        // Identifier lookup is case-insensitive but canonicalizing.
        let zone = TimeZone::try_named_with_provider("europe/testing", &provider).unwrap();
        assert_eq!(zone.identifier(), ZONE_ID);
        let zdt = ZonedDateTime::from_local_with_provider(
            local(2010, 6, 1, 12, 0),
            zone,
            None,
            &provider,
        )
        .unwrap();
        assert_eq!(zdt.offset(), offset(2));
        assert_eq!(zdt.hour(), 12);
        assert_eq!(zdt.timezone().identifier(), ZONE_ID);
    }

    #[test]
    fn overlap_resolver_strategies() {
        let provider = provider();
        let ambiguous = local(2010, 10, 31, 2, 30);

        let earlier = ZonedDateTime::from_local_with_provider(
            ambiguous,
            zone(),
            Some(ZoneResolver::EarlierOffset),
            &provider,
        )
        .unwrap();
        assert_eq!(earlier.offset(), offset(2));
        assert_eq!(earlier.local_date_time(), ambiguous);

        let later = ZonedDateTime::from_local_with_provider(
            ambiguous,
            zone(),
            Some(ZoneResolver::LaterOffset),
            &provider,
        )
        .unwrap();
        assert_eq!(later.offset(), offset(1));
        assert_eq!(later.local_date_time(), ambiguous);

        // The repeated hour names two instants one hour apart.
        let delta = later.to_instant().unwrap().epoch_seconds()
            - earlier.to_instant().unwrap().epoch_seconds();
        assert_eq!(delta, 3600);

        let strict = ZonedDateTime::from_local_with_provider(
            ambiguous,
            zone(),
            Some(ZoneResolver::Strict),
            &provider,
        );
        assert_eq!(strict.unwrap_err().kind(), ErrorKind::Overlap);

        // The default with nothing to retain takes the earlier offset.
        let default = ZonedDateTime::from_local_with_provider(ambiguous, zone(), None, &provider)
            .unwrap();
        assert_eq!(default.offset(), offset(2));
    }

    #[test]
    fn overlap_offset_switching_is_idempotent() {
        let provider = provider();
        let ambiguous = local(2010, 10, 31, 2, 30);
        let earlier = ZonedDateTime::from_local_with_provider(
            ambiguous,
            zone(),
            Some(ZoneResolver::EarlierOffset),
            &provider,
        )
        .unwrap();
        let later = ZonedDateTime::from_local_with_provider(
            ambiguous,
            zone(),
            Some(ZoneResolver::LaterOffset),
            &provider,
        )
        .unwrap();

        let switched = later
            .with_earlier_offset_at_overlap_with_provider(&provider)
            .unwrap();
        assert_eq!(switched, earlier);
        let again = switched
            .with_earlier_offset_at_overlap_with_provider(&provider)
            .unwrap();
        assert_eq!(again, earlier);

        let back = again
            .with_later_offset_at_overlap_with_provider(&provider)
            .unwrap();
        assert_eq!(back, later);

        // Outside an overlap both switches are no-ops.
        let plain = ZonedDateTime::from_local_with_provider(
            local(2010, 6, 1, 12, 0),
            zone(),
            None,
            &provider,
        )
        .unwrap();
        assert_eq!(
            plain
                .with_earlier_offset_at_overlap_with_provider(&provider)
                .unwrap(),
            plain
        );
        assert_eq!(
            plain
                .with_later_offset_at_overlap_with_provider(&provider)
                .unwrap(),
            plain
        );
    }

    #[test]
    fn gap_resolver_strategies() {
        let provider = provider();
        let skipped = local(2011, 3, 27, 1, 30);

        let strict = ZonedDateTime::from_local_with_provider(
            skipped,
            zone(),
            Some(ZoneResolver::Strict),
            &provider,
        );
        assert_eq!(strict.unwrap_err().kind(), ErrorKind::Gap);

        // A repairing resolver lands after the gap with the post-gap
        // offset.
        let repaired = ZonedDateTime::from_local_with_provider(
            skipped,
            zone(),
            Some(ZoneResolver::LaterOffset),
            &provider,
        )
        .unwrap();
        assert_eq!(repaired.local_date_time(), local(2011, 3, 27, 2, 30));
        assert_eq!(repaired.offset(), offset(2));

        let back_shifted = ZonedDateTime::from_local_with_provider(
            skipped,
            zone(),
            Some(ZoneResolver::EarlierOffset),
            &provider,
        )
        .unwrap();
        assert_eq!(back_shifted.local_date_time(), local(2011, 3, 27, 0, 30));
        assert_eq!(back_shifted.offset(), offset(1));

        let default =
            ZonedDateTime::from_local_with_provider(skipped, zone(), None, &provider).unwrap();
        assert_eq!(default.local_date_time(), local(2011, 3, 27, 2, 30));
        assert_eq!(default.offset(), offset(2));
    }

    #[test]
    fn local_edits_retain_offset_through_overlap() {
        let provider = provider();

        // Starting one hour before the repeated hour, the pre-transition
        // offset survives the edit.
        let before = ZonedDateTime::from_local_with_provider(
            local(2010, 10, 31, 1, 30),
            zone(),
            None,
            &provider,
        )
        .unwrap();
        assert_eq!(before.offset(), offset(2));
        let edited = before.plus_hours_with_provider(1, &provider).unwrap();
        assert_eq!(edited.local_date_time(), local(2010, 10, 31, 2, 30));
        assert_eq!(edited.offset(), offset(2));

        // Starting after the transition, the post-transition offset
        // survives the edit back into the repeated hour.
        let after = ZonedDateTime::from_local_with_provider(
            local(2010, 10, 31, 3, 30),
            zone(),
            None,
            &provider,
        )
        .unwrap();
        assert_eq!(after.offset(), offset(1));
        let edited = after
            .plus_minutes_with_provider(-60, &provider)
            .unwrap();
        assert_eq!(edited.local_date_time(), local(2010, 10, 31, 2, 30));
        assert_eq!(edited.offset(), offset(1));
    }

    #[test]
    fn instant_round_trip() {
        let provider = provider();
        let zdt = ZonedDateTime::from_local_with_provider(
            local(2010, 10, 31, 2, 30),
            zone(),
            Some(ZoneResolver::LaterOffset),
            &provider,
        )
        .unwrap();
        let instant = zdt.to_instant().unwrap();
        let back =
            ZonedDateTime::from_instant_with_provider(&instant, zone(), &provider).unwrap();
        assert_eq!(back, zdt);
    }

    #[test]
    fn explicit_offset_validation() {
        let provider = provider();
        let plain = local(2010, 6, 1, 12, 0);

        let ok = ZonedDateTime::try_new_with_provider(plain, offset(2), zone(), &provider);
        assert!(ok.is_ok());

        let err = ZonedDateTime::try_new_with_provider(plain, offset(1), zone(), &provider);
        assert_eq!(err.unwrap_err().kind(), ErrorKind::InvalidDate);

        // Both overlap offsets validate; a gap validates neither.
        let ambiguous = local(2010, 10, 31, 2, 30);
        assert!(
            ZonedDateTime::try_new_with_provider(ambiguous, offset(2), zone(), &provider).is_ok()
        );
        assert!(
            ZonedDateTime::try_new_with_provider(ambiguous, offset(1), zone(), &provider).is_ok()
        );
        let skipped = local(2011, 3, 27, 1, 30);
        assert!(
            ZonedDateTime::try_new_with_provider(skipped, offset(1), zone(), &provider).is_err()
        );
    }

    #[test]
    fn zone_moves() {
        let provider = provider();
        let zdt = ZonedDateTime::from_local_with_provider(
            local(2010, 6, 1, 12, 0),
            zone(),
            None,
            &provider,
        )
        .unwrap();

        // Same instant in a fixed -05:00 zone: 12:00+02:00 is 05:00-05:00.
        let fixed = TimeZone::fixed(offset(-5));
        let moved = zdt
            .with_zone_same_instant_with_provider(fixed.clone(), &provider)
            .unwrap();
        assert_eq!(moved.local_date_time(), local(2010, 6, 1, 5, 0));
        assert_eq!(moved.compare_instant(&zdt), Ordering::Equal);

        // Same local fields in the fixed zone name a different instant.
        let relabeled = zdt
            .with_zone_same_local_with_provider(fixed, None, &provider)
            .unwrap();
        assert_eq!(relabeled.local_date_time(), zdt.local_date_time());
        assert_eq!(
            relabeled.to_instant().unwrap().epoch_seconds()
                - zdt.to_instant().unwrap().epoch_seconds(),
            7 * 3600
        );
    }

    #[test]
    fn date_arithmetic_through_the_zone() {
        let provider = provider();
        let zdt = ZonedDateTime::from_local_with_provider(
            local(2010, 1, 30, 10, 0),
            zone(),
            None,
            &provider,
        )
        .unwrap();
        let added = zdt
            .add_with_provider(&Period::new(0, 1, 0, -1), None, &provider)
            .unwrap();
        assert_eq!(added.date(), LocalDate::try_new(2010, 2, 28).unwrap());
        assert_eq!(added.hour(), 10);

        let bumped = zdt
            .with_day_of_month_with_provider(31, None, &provider)
            .unwrap();
        assert_eq!(bumped.day(), 31);
    }

    #[test]
    fn rendering() {
        let provider = provider();
        let zdt = ZonedDateTime::from_local_with_provider(
            local(2010, 6, 1, 12, 0),
            zone(),
            None,
            &provider,
        )
        .unwrap();
        assert_eq!(zdt.to_string(), "2010-06-01T12:00:00+02:00[Europe/Testing]");
    }
}
