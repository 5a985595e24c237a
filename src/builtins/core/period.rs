//! This module implements `Period`.

use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

/// A date-based amount of years, months, weeks and days.
///
/// Unlike the value types, a `Period` is a free-standing amount: its
/// components may carry mixed signs (one month minus one day is a valid
/// period) and are not normalized against each other. The meaning of
/// applying a period to a date is defined by the date arithmetic it is
/// applied with; see [`LocalDate::add`](crate::LocalDate::add).
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    /// The years component.
    pub years: i64,
    /// The months component.
    pub months: i64,
    /// The weeks component; folded into days when the period is applied.
    pub weeks: i64,
    /// The days component.
    pub days: i64,
}

impl Period {
    /// A period of zero length.
    pub const ZERO: Period = Period::new(0, 0, 0, 0);

    /// Creates a new `Period` from its components.
    #[inline]
    #[must_use]
    pub const fn new(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Creates a `Period` of whole years.
    #[inline]
    #[must_use]
    pub const fn of_years(years: i64) -> Self {
        Self::new(years, 0, 0, 0)
    }

    /// Creates a `Period` of whole months.
    #[inline]
    #[must_use]
    pub const fn of_months(months: i64) -> Self {
        Self::new(0, months, 0, 0)
    }

    /// Creates a `Period` of whole weeks.
    #[inline]
    #[must_use]
    pub const fn of_weeks(weeks: i64) -> Self {
        Self::new(0, 0, weeks, 0)
    }

    /// Creates a `Period` of whole days.
    #[inline]
    #[must_use]
    pub const fn of_days(days: i64) -> Self {
        Self::new(0, 0, 0, days)
    }

    /// Returns whether every component is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0
    }

    /// Returns a `Period` with every component negated.
    #[inline]
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            years: self.years.saturating_neg(),
            months: self.months.saturating_neg(),
            weeks: self.weeks.saturating_neg(),
            days: self.days.saturating_neg(),
        }
    }
}

impl Writeable for Period {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        if self.is_zero() {
            return sink.write_str("P0D");
        }
        sink.write_char('P')?;
        if self.years != 0 {
            write!(sink, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(sink, "{}M", self.months)?;
        }
        if self.weeks != 0 {
            write!(sink, "{}W", self.weeks)?;
        }
        if self.days != 0 {
            write!(sink, "{}D", self.days)?;
        }
        Ok(())
    }
}

impl_display_with_writeable!(Period);
