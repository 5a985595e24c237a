//! The current-moment component.

use crate::provider::ZoneRulesProvider;
use crate::unix_time::EpochNanoseconds;
use crate::{CalendricsError, CalendricsResult};

use super::{Instant, LocalDate, LocalDateTime, LocalTime, TimeZone, ZonedDateTime};

/// Assembles a [`Now`] from a clock reading and a zone.
#[derive(Debug, Default)]
pub struct NowBuilder {
    clock: Option<EpochNanoseconds>,
    zone: Option<TimeZone>,
}

impl NowBuilder {
    /// Sets the clock reading.
    #[must_use]
    pub fn with_clock(mut self, nanoseconds: EpochNanoseconds) -> Self {
        self.clock = Some(nanoseconds);
        self
    }

    /// Sets the zone the readings are interpreted in.
    #[must_use]
    pub fn with_zone(mut self, zone: TimeZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// Builds the `Now`, defaulting the zone to UTC.
    #[must_use]
    pub fn build(self) -> Now {
        Now {
            clock: self.clock,
            zone: self.zone.unwrap_or_default(),
        }
    }
}

/// A captured clock reading paired with a zone, convertible into any of
/// the value types.
///
/// Readings come either from the system clock (see
/// [`Clock`](crate::Clock), feature `sys`) or from an explicit
/// [`NowBuilder`], which makes every conversion below deterministic and
/// testable.
#[derive(Debug)]
pub struct Now {
    clock: Option<EpochNanoseconds>,
    zone: TimeZone,
}

impl Now {
    fn clock(self) -> CalendricsResult<EpochNanoseconds> {
        self.clock
            .ok_or_else(|| CalendricsError::general("system clock unavailable"))
    }

    /// Returns the zone this `Now` interprets readings in.
    #[must_use]
    pub fn time_zone(self) -> TimeZone {
        self.zone
    }

    /// Converts this `Now` into an [`Instant`].
    pub fn instant(self) -> CalendricsResult<Instant> {
        Ok(Instant::from(self.clock()?))
    }

    /// Converts this `Now` into a [`ZonedDateTime`] in the provided zone,
    /// or this `Now`'s own zone.
    pub fn zoned_date_time_with_provider(
        self,
        time_zone: Option<TimeZone>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<ZonedDateTime> {
        let Now { clock, zone } = self;
        let clock = clock.ok_or_else(|| CalendricsError::general("system clock unavailable"))?;
        let zone = time_zone.unwrap_or(zone);
        ZonedDateTime::from_instant_with_provider(&Instant::from(clock), zone, provider)
    }

    /// Converts this `Now` into the current [`LocalDateTime`].
    pub fn local_date_time_with_provider(
        self,
        time_zone: Option<TimeZone>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<LocalDateTime> {
        Ok(self
            .zoned_date_time_with_provider(time_zone, provider)?
            .local_date_time())
    }

    /// Converts this `Now` into the current [`LocalDate`].
    pub fn local_date_with_provider(
        self,
        time_zone: Option<TimeZone>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<LocalDate> {
        Ok(self
            .zoned_date_time_with_provider(time_zone, provider)?
            .date())
    }

    /// Converts this `Now` into the current [`LocalTime`].
    pub fn local_time_with_provider(
        self,
        time_zone: Option<TimeZone>,
        provider: &impl ZoneRulesProvider,
    ) -> CalendricsResult<LocalTime> {
        Ok(self
            .zoned_date_time_with_provider(time_zone, provider)?
            .time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::NeverProvider;
    use crate::ZoneOffset;

    #[test]
    fn builder_defaults_to_utc() {
        let now = NowBuilder::default()
            .with_clock(EpochNanoseconds::try_from(0i128).unwrap())
            .build();
        assert_eq!(now.time_zone(), TimeZone::Fixed(ZoneOffset::UTC));
    }

    #[test]
    fn conversions_from_a_fixed_reading() {
        // 2021-01-01T00:00:00Z.
        let clock = EpochNanoseconds::try_from(1_609_459_200_000_000_000i128).unwrap();
        let now = NowBuilder::default().with_clock(clock).build();
        assert_eq!(now.instant().unwrap().epoch_seconds(), 1_609_459_200);

        let zone = TimeZone::fixed(ZoneOffset::try_from_hours(-5).unwrap());
        let now = NowBuilder::default().with_clock(clock).with_zone(zone).build();
        let local = now
            .local_date_time_with_provider(None, &NeverProvider)
            .unwrap();
        assert_eq!(
            local,
            LocalDateTime::try_new(2020, 12, 31, 19, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn missing_clock_errors() {
        let now = NowBuilder::default().build();
        assert!(now.instant().is_err());
    }
}
