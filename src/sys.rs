use alloc::string::ToString;

use web_time::{SystemTime, UNIX_EPOCH};

use crate::builtins::core::{Now, NowBuilder, TimeZone};
use crate::unix_time::EpochNanoseconds;
use crate::{CalendricsError, CalendricsResult};

/// The system clock entry point.
pub struct Clock;

impl Clock {
    /// Returns a [`Now`] with the system time and time zone.
    ///
    /// ## Panics
    ///
    /// This API can panic if reading the values from the system fails or
    /// the retrieved values are not valid.
    ///
    /// For the non-panicking version of this API, see [`Self::try_now`].
    #[must_use]
    pub fn now() -> Now {
        Self::try_now().expect("failed to retrieve and validate system values.")
    }

    /// Returns a [`Now`] with the system time and time zone.
    pub fn try_now() -> CalendricsResult<Now> {
        Ok(NowBuilder::default()
            .with_zone(get_system_timezone()?)
            .with_clock(get_system_nanoseconds()?)
            .build())
    }
}

// The identifier is taken as the platform reports it; canonicalization
// against a rule set happens when the zone is first used with a provider.
#[inline]
pub(crate) fn get_system_timezone() -> CalendricsResult<TimeZone> {
    iana_time_zone::get_timezone()
        .map(|identifier| TimeZone::Named(identifier))
        .map_err(|e| CalendricsError::general(e.to_string()))
}

/// Returns the system time in nanoseconds.
pub(crate) fn get_system_nanoseconds() -> CalendricsResult<EpochNanoseconds> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| CalendricsError::general(e.to_string()))
        .map(|d| EpochNanoseconds::try_from(d.as_nanos()))?
}
