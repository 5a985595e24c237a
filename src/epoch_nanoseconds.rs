use crate::{error::ErrorMessage, CalendricsError, NS_MAX_INSTANT};

/// A count of nanoseconds since the Unix epoch, bounded to the supported
/// instant range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EpochNanoseconds(pub(crate) i128);

impl TryFrom<i128> for EpochNanoseconds {
    type Error = CalendricsError;
    fn try_from(value: i128) -> Result<Self, Self::Error> {
        if !is_valid_epoch_nanos(&value) {
            return Err(CalendricsError::overflow().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(Self(value))
    }
}

impl TryFrom<u128> for EpochNanoseconds {
    type Error = CalendricsError;
    fn try_from(value: u128) -> Result<Self, Self::Error> {
        if (NS_MAX_INSTANT as u128) < value {
            return Err(CalendricsError::overflow().with_enum(ErrorMessage::InstantOutOfRange));
        }
        Ok(Self(value as i128))
    }
}

impl EpochNanoseconds {
    /// Returns the raw nanosecond count.
    pub fn as_i128(&self) -> i128 {
        self.0
    }
}

/// Utility for determining if the nanos are within a valid range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_nanos(nanos: &i128) -> bool {
    (crate::NS_MIN_INSTANT..=crate::NS_MAX_INSTANT).contains(nanos)
}
