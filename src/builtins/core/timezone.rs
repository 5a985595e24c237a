//! This module implements `TimeZone`, `ZoneOffset` and the local-offset
//! resolution engine.

use alloc::string::String;
use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    builtins::core::Instant,
    display,
    error::ErrorMessage,
    iso::IsoDateTime,
    options::ZoneResolver,
    provider::{LocalOffsets, UtcOffsetSeconds, ZoneRulesProvider},
    CalendricsError, CalendricsResult,
};

/// The largest supported offset magnitude, eighteen hours in seconds.
const MAX_OFFSET_SECONDS: i32 = 18 * 60 * 60;

/// A fixed, signed offset from UTC in seconds, bounded to +/-18:00.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZoneOffset {
    seconds: i32,
}

impl ZoneOffset {
    /// The UTC offset, +00:00.
    pub const UTC: ZoneOffset = ZoneOffset { seconds: 0 };

    /// Creates a `ZoneOffset` from a total signed second count.
    pub fn try_from_seconds(seconds: i32) -> CalendricsResult<Self> {
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(CalendricsError::field_out_of_range(
                "zone offset",
                i64::from(seconds),
                i64::from(-MAX_OFFSET_SECONDS),
                i64::from(MAX_OFFSET_SECONDS),
            ));
        }
        Ok(Self { seconds })
    }

    /// Creates a `ZoneOffset` from whole hours.
    pub fn try_from_hours(hours: i32) -> CalendricsResult<Self> {
        Self::try_from_seconds(hours.saturating_mul(3600))
    }

    /// Creates a `ZoneOffset` from hours and minutes.
    ///
    /// The minutes must be zero or carry the same sign as the hours and
    /// be at most 59 in magnitude.
    pub fn try_from_hours_minutes(hours: i32, minutes: i32) -> CalendricsResult<Self> {
        if minutes.abs() > 59 {
            return Err(CalendricsError::field_out_of_range(
                "offset minutes",
                i64::from(minutes),
                -59,
                59,
            ));
        }
        if minutes != 0 && hours != 0 && minutes.signum() != hours.signum() {
            return Err(CalendricsError::field_range()
                .with_message("offset hours and minutes must carry the same sign"));
        }
        Self::try_from_seconds(hours.saturating_mul(3600) + minutes * 60)
    }

    /// Returns the total signed second count.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    /// Returns the offset as a signed nanosecond count.
    #[inline]
    pub(crate) fn nanoseconds(&self) -> i128 {
        i128::from(self.seconds) * 1_000_000_000
    }

    /// Returns the offset rendered as `+HH:MM` or `+HH:MM:SS`.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.write_to_string().into_owned()
    }
}

impl TryFrom<UtcOffsetSeconds> for ZoneOffset {
    type Error = CalendricsError;
    fn try_from(value: UtcOffsetSeconds) -> Result<Self, Self::Error> {
        let seconds = i32::try_from(value.0).map_err(|_| {
            CalendricsError::field_range().with_message("provider offset exceeds supported range")
        })?;
        Self::try_from_seconds(seconds)
    }
}

impl From<ZoneOffset> for UtcOffsetSeconds {
    fn from(value: ZoneOffset) -> Self {
        UtcOffsetSeconds(i64::from(value.seconds))
    }
}

impl Writeable for ZoneOffset {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        sink.write_char(sign)?;
        let magnitude = self.seconds.unsigned_abs();
        display::write_two_digit(sink, (magnitude / 3600) as u8)?;
        sink.write_char(':')?;
        display::write_two_digit(sink, (magnitude / 60 % 60) as u8)?;
        if magnitude % 60 != 0 {
            sink.write_char(':')?;
            display::write_two_digit(sink, (magnitude % 60) as u8)?;
        }
        Ok(())
    }
}

impl_display_with_writeable!(ZoneOffset);

/// A time zone: either a named zone whose rules live in an external
/// provider, or a fixed offset from UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeZone {
    /// A named zone, identified by an IANA-style identifier. Resolving
    /// offsets for a named zone requires a [`ZoneRulesProvider`].
    Named(String),
    /// A fixed offset zone with no transitions.
    Fixed(ZoneOffset),
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::Fixed(ZoneOffset::UTC)
    }
}

impl TimeZone {
    /// Creates a named `TimeZone` without consulting any provider.
    #[must_use]
    pub fn named(identifier: &str) -> Self {
        Self::Named(String::from(identifier))
    }

    /// Creates a named `TimeZone`, validating and canonicalizing the
    /// identifier against the provider.
    pub fn try_named_with_provider(
        identifier: &str,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<Self> {
        let normalized = provider.normalize_identifier(identifier.as_bytes())?;
        Ok(Self::Named(normalized.into_owned()))
    }

    /// Creates a fixed-offset `TimeZone`.
    #[must_use]
    pub const fn fixed(offset: ZoneOffset) -> Self {
        Self::Fixed(offset)
    }

    /// Returns this zone's identifier.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Self::Named(identifier) => identifier.clone(),
            Self::Fixed(offset) => offset.identifier(),
        }
    }

    /// Returns the offsets the zone rules consider valid for the provided
    /// local date-time.
    pub(crate) fn local_offsets(
        &self,
        iso: IsoDateTime,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<LocalOffsets> {
        match self {
            Self::Fixed(offset) => Ok(LocalOffsets::Single((*offset).into())),
            Self::Named(identifier) => {
                provider.local_offsets_for(identifier, iso.local_seconds())
            }
        }
    }

    /// Returns the single offset in force at the provided instant.
    pub fn offset_for_instant_with_provider(
        &self,
        instant: &Instant,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<ZoneOffset> {
        match self {
            Self::Fixed(offset) => Ok(*offset),
            Self::Named(identifier) => {
                let offset =
                    provider.offset_for_epoch_seconds(identifier, instant.epoch_seconds())?;
                ZoneOffset::try_from(offset)
            }
        }
    }

    /// Reconciles a local date-time against this zone's rules.
    ///
    /// This is the decision procedure every offset acquisition goes
    /// through: a single valid offset is used as-is; gaps and overlaps are
    /// settled by the resolver, consulting `previous_offset` (the offset
    /// the value held before a local-field edit) where the strategy calls
    /// for it. The result is the possibly-shifted local date-time together
    /// with the chosen offset.
    pub(crate) fn resolve_local(
        &self,
        iso: IsoDateTime,
        resolver: ZoneResolver,
        previous_offset: Option<ZoneOffset>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<(IsoDateTime, ZoneOffset)> {
        match self.local_offsets(iso, provider)? {
            LocalOffsets::Single(offset) => Ok((iso, ZoneOffset::try_from(offset)?)),
            LocalOffsets::Overlap(transition) => {
                crate::calendrics_assert!(
                    transition.is_overlap(),
                    "provider returned a non-overlap transition for an overlap result"
                );
                let earlier = ZoneOffset::try_from(transition.offset_before)?;
                let later = ZoneOffset::try_from(transition.offset_after)?;
                match resolver {
                    ZoneResolver::Strict => {
                        Err(CalendricsError::overlap().with_enum(ErrorMessage::OverlapRejected))
                    }
                    ZoneResolver::EarlierOffset => Ok((iso, earlier)),
                    ZoneResolver::LaterOffset => Ok((iso, later)),
                    ZoneResolver::RetainOffset => match previous_offset {
                        Some(previous) if previous == earlier || previous == later => {
                            Ok((iso, previous))
                        }
                        Some(_) => Ok((iso, later)),
                        None => Ok((iso, earlier)),
                    },
                }
            }
            LocalOffsets::Gap(transition) => {
                crate::calendrics_assert!(
                    transition.is_gap(),
                    "provider returned a non-gap transition for a gap result"
                );
                let gap_nanos = i128::from(transition.duration_seconds()) * 1_000_000_000;
                match resolver {
                    ZoneResolver::Strict => {
                        Err(CalendricsError::gap().with_enum(ErrorMessage::GapRejected))
                    }
                    ZoneResolver::EarlierOffset => Ok((
                        iso.add_nanoseconds(-gap_nanos)?,
                        ZoneOffset::try_from(transition.offset_before)?,
                    )),
                    ZoneResolver::LaterOffset | ZoneResolver::RetainOffset => Ok((
                        iso.add_nanoseconds(gap_nanos)?,
                        ZoneOffset::try_from(transition.offset_after)?,
                    )),
                }
            }
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(identifier) => f.write_str(identifier),
            Self::Fixed(offset) => fmt::Display::fmt(offset, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn offset_bounds() {
        assert!(ZoneOffset::try_from_seconds(MAX_OFFSET_SECONDS).is_ok());
        assert!(ZoneOffset::try_from_seconds(MAX_OFFSET_SECONDS + 1).is_err());
        assert!(ZoneOffset::try_from_seconds(-MAX_OFFSET_SECONDS - 1).is_err());
        assert!(ZoneOffset::try_from_hours(19).is_err());
    }

    #[test]
    fn offset_component_factories() {
        assert_eq!(ZoneOffset::try_from_hours(2).unwrap().seconds(), 7200);
        assert_eq!(
            ZoneOffset::try_from_hours_minutes(-9, -30).unwrap().seconds(),
            -34_200
        );
        assert_eq!(
            ZoneOffset::try_from_hours_minutes(0, 45).unwrap().seconds(),
            2700
        );
        assert!(ZoneOffset::try_from_hours_minutes(2, -30).is_err());
        assert!(ZoneOffset::try_from_hours_minutes(2, 60).is_err());
    }

    #[test]
    fn offset_rendering() {
        assert_eq!(ZoneOffset::UTC.to_string(), "+00:00");
        assert_eq!(ZoneOffset::try_from_hours(2).unwrap().to_string(), "+02:00");
        assert_eq!(
            ZoneOffset::try_from_hours_minutes(-9, -30).unwrap().to_string(),
            "-09:30"
        );
        assert_eq!(
            ZoneOffset::try_from_seconds(5 * 3600 + 45 * 60 + 30)
                .unwrap()
                .to_string(),
            "+05:45:30"
        );
    }

    #[test]
    fn zone_identifiers() {
        let zone = TimeZone::named("Europe/Zurich");
        assert_eq!(zone.identifier(), "Europe/Zurich");
        let zone = TimeZone::fixed(ZoneOffset::try_from_hours(-5).unwrap());
        assert_eq!(zone.identifier(), "-05:00");
        assert_eq!(TimeZone::default().identifier(), "+00:00");
    }
}
