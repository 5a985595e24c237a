//! An immutable, proleptic-Gregorian calendar date/time arithmetic engine.
//!
//! `calendrics` provides a family of immutable value types — [`LocalDate`],
//! [`LocalTime`], [`LocalDateTime`], [`OffsetDateTime`], [`ZonedDateTime`]
//! and [`Instant`] — built on an exact day-count core, together with two
//! pluggable strategy sets: [`DateResolver`](options::DateResolver) for
//! repairing jointly-invalid dates (February 30) and
//! [`ZoneResolver`](options::ZoneResolver) for settling the gaps and
//! overlaps daylight-saving transitions cut into the local time-line.
//!
//! Zone transition tables are not bundled: the engine consumes the
//! [`provider::ZoneRulesProvider`] interface, and any preloaded table (see
//! [`provider::InMemoryZoneProvider`]) can back it.
//!
//! ## Examples
//!
//! ### Calendar-correct field arithmetic
//!
//! ```rust
//! use calendrics::LocalDate;
//!
//! // Adding a month to March 31 clamps to April's last day.
//! let date = LocalDate::try_new(2007, 3, 31).unwrap();
//! assert_eq!(
//!     date.plus_months(1, None).unwrap(),
//!     LocalDate::try_new(2007, 4, 30).unwrap(),
//! );
//!
//! // Day-count arithmetic is exact and always reversible.
//! assert_eq!(date.plus_days(365).unwrap().plus_days(-365).unwrap(), date);
//! ```
//!
//! ### Combined period addition
//!
//! ```rust
//! use calendrics::{LocalDate, Period};
//!
//! // The month step resolves first; a negative day component is absorbed
//! // by the clamp before any days are walked back.
//! let start = LocalDate::try_new(2010, 1, 30).unwrap();
//! assert_eq!(
//!     start.add(&Period::new(0, 1, 0, -1), None).unwrap(),
//!     LocalDate::try_new(2010, 2, 28).unwrap(),
//! );
//! ```
//!
//! ### Resolving an ambiguous local time
//!
//! ```rust
//! use calendrics::options::ZoneResolver;
//! use calendrics::provider::{InMemoryZoneProvider, ZoneTable};
//! use calendrics::{LocalDateTime, TimeZone, ZonedDateTime};
//!
//! // A zone that falls back from +02:00 to +01:00 at local 03:00 on
//! // 1970-10-25, repeating the 02:00-03:00 hour.
//! let provider = InMemoryZoneProvider::new().with_zone(
//!     "Europe/Testing",
//!     ZoneTable::fixed(7200).with_transition(25_664_400, 3600),
//! );
//! let zone = TimeZone::named("Europe/Testing");
//! let ambiguous = LocalDateTime::try_new(1970, 10, 25, 2, 30, 0, 0).unwrap();
//!
//! let earlier = ZonedDateTime::from_local_with_provider(
//!     ambiguous,
//!     zone.clone(),
//!     Some(ZoneResolver::EarlierOffset),
//!     &provider,
//! )
//! .unwrap();
//! assert_eq!(earlier.offset().seconds(), 7200);
//!
//! let later = ZonedDateTime::from_local_with_provider(
//!     ambiguous,
//!     zone,
//!     Some(ZoneResolver::LaterOffset),
//!     &provider,
//! )
//! .unwrap();
//! assert_eq!(later.offset().seconds(), 3600);
//! ```
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Field values are kept in the smallest integer that fits them, so
    // narrowing casts at the record boundaries are pervasive.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fields;
pub mod options;
pub mod provider;

#[cfg(feature = "sys")]
pub(crate) mod sys;

mod builtins;
pub(crate) mod display;
pub(crate) mod epoch;
mod epoch_nanoseconds;
pub(crate) mod iso;

/// The `calendrics` result type.
pub type CalendricsResult<T> = Result<T, CalendricsError>;

#[doc(inline)]
pub use error::{CalendricsError, ErrorKind};

#[cfg(feature = "sys")]
#[doc(inline)]
pub use sys::Clock;

pub use epoch::{MAX_YEAR, MIN_YEAR};

pub mod unix_time {
    //! The bounded epoch-nanosecond representation behind
    //! [`Instant`](crate::Instant).
    pub use crate::epoch_nanoseconds::EpochNanoseconds;
}

pub use crate::builtins::{
    Instant, LocalDate, LocalDateTime, LocalTime, Now, NowBuilder, OffsetDateTime, Period,
    TimeZone, ZoneOffset, ZonedDateTime,
};
pub use crate::fields::{DayOfWeek, IsoChronology, MonthOfYear, Year};
pub use crate::options::{DateResolver, ZoneResolver};

#[doc(hidden)]
#[macro_export]
macro_rules! calendrics_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::CalendricsError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::CalendricsError::assert());
        }
    };
}

// Relevant numeric constants
/// Seconds per day constant: 86,400
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: u32 = 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: u64 = SECONDS_PER_DAY as u64 * NS_PER_SECOND as u64;
/// Max instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY as i128 * 100_000_000i128;
/// Min instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
