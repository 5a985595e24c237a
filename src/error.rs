//! This module implements `CalendricsError`.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

/// `CalendricsError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum ErrorKind {
    /// A single field's raw value is outside its static valid range.
    #[default]
    FieldRange,
    /// A field combination is individually in range but jointly invalid.
    InvalidDate,
    /// Arithmetic produced a result outside the supported range.
    Overflow,
    /// A local date-time falls in a gap on the local time-line.
    Gap,
    /// A local date-time falls in an overlap on the local time-line.
    Overlap,
    /// A failure outside the calendrical taxonomy, such as an unavailable
    /// system clock.
    Generic,
    /// An internal invariant failed.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldRange => "FieldRangeError",
            Self::InvalidDate => "InvalidDateError",
            Self::Overflow => "OverflowError",
            Self::Gap => "GapError",
            Self::Overlap => "OverlapError",
            Self::Generic => "Error",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `calendrics`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendricsError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl CalendricsError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a field range error.
    #[inline]
    #[must_use]
    pub const fn field_range() -> Self {
        Self::new(ErrorKind::FieldRange)
    }

    /// Create a field range error carrying the field name, offending value
    /// and valid range.
    #[inline]
    #[must_use]
    pub fn field_out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        Self::field_range()
            .with_message(format!("{field} value {value} is not in the range {min}..={max}"))
    }

    /// Create an invalid date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an overflow error.
    #[inline]
    #[must_use]
    pub const fn overflow() -> Self {
        Self::new(ErrorKind::Overflow)
    }

    /// Create a gap error.
    #[inline]
    #[must_use]
    pub const fn gap() -> Self {
        Self::new(ErrorKind::Gap)
    }

    /// Create an overlap error.
    #[inline]
    #[must_use]
    pub const fn overlap() -> Self {
        Self::new(ErrorKind::Overlap)
    }

    /// Create a generic error.
    #[inline]
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Creates an assertion error.
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: Cow::Borrowed(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg.to_str().into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for CalendricsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalendricsError {}

/// The error message
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    // Range
    YearOutOfRange,
    DayCountOutOfRange,
    InstantOutOfRange,

    // Composite invalidity
    DayOfMonthInvalid,
    DayOfMonthInvalidLeap,
    DayOfYearInvalid,
    OffsetInvalidForZone,

    // Zone resolution
    GapRejected,
    OverlapRejected,
    ZoneRulesUnavailable,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::YearOutOfRange => "year is outside the supported year range.",
            Self::DayCountOutOfRange => "day count is outside the supported day range.",
            Self::InstantOutOfRange => "instant nanoseconds are not within the valid epoch range.",
            Self::DayOfMonthInvalid => "day-of-month is not valid for the given year and month.",
            Self::DayOfMonthInvalidLeap => {
                "day-of-month 29 is not valid because the year is not a leap year."
            }
            Self::DayOfYearInvalid => "day-of-year is not valid for the given year.",
            Self::OffsetInvalidForZone => {
                "offset is not valid for the local date-time in this zone."
            }
            Self::GapRejected => "local date-time falls in a gap and the resolver is strict.",
            Self::OverlapRejected => {
                "local date-time falls in an overlap and the resolver is strict."
            }
            Self::ZoneRulesUnavailable => "no zone rules are available for the zone identifier.",
        }
    }
}
