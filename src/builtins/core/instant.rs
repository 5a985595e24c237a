//! This module implements `Instant`.

use crate::{unix_time::EpochNanoseconds, CalendricsResult};

/// An exact point on the UTC time-line, stored as a bounded count of
/// nanoseconds since the Unix epoch.
///
/// An `Instant` carries no calendar or zone information; projecting it
/// into local fields requires a [`TimeZone`](crate::TimeZone) and zone
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant {
    pub(crate) epoch_nanoseconds: EpochNanoseconds,
}

impl Instant {
    /// Creates a new `Instant`, validating the supported instant range.
    #[inline]
    pub fn try_new(epoch_nanoseconds: i128) -> CalendricsResult<Self> {
        Ok(Self::from(EpochNanoseconds::try_from(epoch_nanoseconds)?))
    }

    /// Creates a new `Instant` from a count of whole seconds since the
    /// epoch.
    #[inline]
    pub fn from_epoch_seconds(epoch_seconds: i64) -> CalendricsResult<Self> {
        Self::try_new(i128::from(epoch_seconds) * 1_000_000_000)
    }

    /// Creates a new `Instant` from a count of milliseconds since the
    /// epoch.
    #[inline]
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> CalendricsResult<Self> {
        Self::try_new(i128::from(epoch_milliseconds) * 1_000_000)
    }

    /// Returns the nanosecond count since the epoch.
    #[inline]
    #[must_use]
    pub fn epoch_nanoseconds(&self) -> EpochNanoseconds {
        self.epoch_nanoseconds
    }

    /// Returns the raw nanosecond count since the epoch.
    #[inline]
    #[must_use]
    pub fn as_i128(&self) -> i128 {
        self.epoch_nanoseconds.0
    }

    /// Returns the whole-second count since the epoch, rounding toward
    /// negative infinity.
    #[inline]
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.epoch_nanoseconds.0.div_euclid(1_000_000_000) as i64
    }

    /// Returns the millisecond count since the epoch, rounding toward
    /// negative infinity.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.epoch_nanoseconds.0.div_euclid(1_000_000) as i64
    }

    /// Adds a signed nanosecond delta, validating the instant range.
    #[inline]
    pub fn add_nanoseconds(&self, nanoseconds: i128) -> CalendricsResult<Self> {
        Self::try_new(self.epoch_nanoseconds.0 + nanoseconds)
    }
}

impl From<EpochNanoseconds> for Instant {
    fn from(epoch_nanoseconds: EpochNanoseconds) -> Self {
        Self { epoch_nanoseconds }
    }
}
