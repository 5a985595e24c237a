//! The `ZoneRulesProvider` trait.
//!
//! The transition tables themselves are not part of this crate; a provider
//! is an external, immutable, read-only lookup that answers two questions
//! for a zone identifier: which offsets are valid for a local date-time,
//! and which single offset is in force at an instant. Every query is
//! idempotent and side-effect free.
//!
//! Local date-times are passed as *local seconds*: the whole-second count
//! of the local wall-clock fields measured from the epoch with no offset
//! applied. Offset transitions occur on whole seconds, so sub-second
//! precision never affects resolution.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{error::ErrorMessage, CalendricsError, CalendricsResult};

/// `UtcOffsetSeconds` represents the number of seconds to add to UTC to
/// reach local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffsetSeconds(pub i64);

/// Metadata about a single offset transition: the instant at which the new
/// offset takes effect and the offsets in force on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOffsetTransition {
    /// The transition instant, in epoch seconds.
    pub transition_epoch_seconds: i64,
    /// The offset in force before the transition.
    pub offset_before: UtcOffsetSeconds,
    /// The offset in force at and after the transition.
    pub offset_after: UtcOffsetSeconds,
}

impl ZoneOffsetTransition {
    /// Returns the signed length of the local time-line discontinuity in
    /// seconds: positive for a gap, negative for an overlap.
    #[inline]
    #[must_use]
    pub fn duration_seconds(&self) -> i64 {
        self.offset_after.0 - self.offset_before.0
    }

    /// Returns whether the transition is a gap (spring-forward).
    #[inline]
    #[must_use]
    pub fn is_gap(&self) -> bool {
        self.duration_seconds() > 0
    }

    /// Returns whether the transition is an overlap (fall-back).
    #[inline]
    #[must_use]
    pub fn is_overlap(&self) -> bool {
        self.duration_seconds() < 0
    }
}

/// The set of offsets a zone's rules consider valid for one local
/// date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOffsets {
    /// Exactly one offset is valid.
    Single(UtcOffsetSeconds),
    /// No offset is valid; the local date-time was skipped by the
    /// transition.
    Gap(ZoneOffsetTransition),
    /// Two offsets are valid; the local date-time repeats around the
    /// transition.
    Overlap(ZoneOffsetTransition),
}

/// The `ZoneRulesProvider` trait provides the zone-rule queries the zone
/// resolution engine consumes.
pub trait ZoneRulesProvider {
    /// Validates and canonicalizes a zone identifier.
    fn normalize_identifier(&self, ident: &'_ [u8]) -> CalendricsResult<Cow<'_, str>>;

    /// Returns the offsets valid for the provided local date-time in the
    /// identified zone.
    fn local_offsets_for(
        &self,
        identifier: &str,
        local_seconds: i64,
    ) -> CalendricsResult<LocalOffsets>;

    /// Returns the single offset in force at the provided instant in the
    /// identified zone.
    fn offset_for_epoch_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> CalendricsResult<UtcOffsetSeconds>;
}

/// A provider for contexts that are statically known to never consult zone
/// rules.
pub struct NeverProvider;

impl ZoneRulesProvider for NeverProvider {
    fn normalize_identifier(&self, _: &'_ [u8]) -> CalendricsResult<Cow<'_, str>> {
        unimplemented!()
    }

    fn local_offsets_for(&self, _: &str, _: i64) -> CalendricsResult<LocalOffsets> {
        unimplemented!()
    }

    fn offset_for_epoch_seconds(&self, _: &str, _: i64) -> CalendricsResult<UtcOffsetSeconds> {
        unimplemented!()
    }
}

/// The transition table for a single zone: the offset in force before the
/// first transition, and a list of `(transition instant, offset after)`
/// pairs sorted by instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTable {
    initial_offset: UtcOffsetSeconds,
    transitions: Vec<(i64, UtcOffsetSeconds)>,
}

impl ZoneTable {
    /// Creates a table with a fixed offset and no transitions.
    #[must_use]
    pub fn fixed(offset_seconds: i64) -> Self {
        Self {
            initial_offset: UtcOffsetSeconds(offset_seconds),
            transitions: Vec::new(),
        }
    }

    /// Appends a transition to `offset_seconds` at `epoch_seconds`.
    ///
    /// Transitions must be appended in instant order.
    #[must_use]
    pub fn with_transition(mut self, epoch_seconds: i64, offset_seconds: i64) -> Self {
        debug_assert!(self
            .transitions
            .last()
            .is_none_or(|(t, _)| *t < epoch_seconds));
        self.transitions
            .push((epoch_seconds, UtcOffsetSeconds(offset_seconds)));
        self
    }

    fn offset_at(&self, epoch_seconds: i64) -> UtcOffsetSeconds {
        match self
            .transitions
            .partition_point(|(t, _)| *t <= epoch_seconds)
        {
            0 => self.initial_offset,
            i => self.transitions[i - 1].1,
        }
    }

    // Offset of the i-th inter-transition interval; interval 0 precedes the
    // first transition.
    fn interval_offset(&self, interval: usize) -> UtcOffsetSeconds {
        if interval == 0 {
            self.initial_offset
        } else {
            self.transitions[interval - 1].1
        }
    }

    fn transition(&self, index: usize) -> ZoneOffsetTransition {
        ZoneOffsetTransition {
            transition_epoch_seconds: self.transitions[index].0,
            offset_before: self.interval_offset(index),
            offset_after: self.transitions[index].1,
        }
    }

    fn local_offsets(&self, local_seconds: i64) -> CalendricsResult<LocalOffsets> {
        let mut valid: Vec<(usize, UtcOffsetSeconds)> = Vec::new();
        for interval in 0..=self.transitions.len() {
            let offset = self.interval_offset(interval);
            let start = if interval == 0 {
                i64::MIN
            } else {
                self.transitions[interval - 1].0
            };
            let end = if interval < self.transitions.len() {
                self.transitions[interval].0
            } else {
                i64::MAX
            };
            let instant = local_seconds.saturating_sub(offset.0);
            if start <= instant && instant < end {
                valid.push((interval, offset));
            }
        }

        match valid.as_slice() {
            [(_, single)] => Ok(LocalOffsets::Single(*single)),
            [_, (second_interval, _), ..] => {
                Ok(LocalOffsets::Overlap(self.transition(second_interval - 1)))
            }
            [] => {
                for index in 0..self.transitions.len() {
                    let transition = self.transition(index);
                    if !transition.is_gap() {
                        continue;
                    }
                    let gap_start = transition.transition_epoch_seconds + transition.offset_before.0;
                    let gap_end = transition.transition_epoch_seconds + transition.offset_after.0;
                    if gap_start <= local_seconds && local_seconds < gap_end {
                        return Ok(LocalOffsets::Gap(transition));
                    }
                }
                Err(CalendricsError::assert())
            }
        }
    }
}

/// A preloaded, immutable zone-rules table keyed by zone identifier.
///
/// This is the "preloaded table" form of a provider: suitable for rule
/// sets built ahead of time and for tests. It performs no I/O and is safe
/// to share across threads once constructed.
#[derive(Debug, Default, Clone)]
pub struct InMemoryZoneProvider {
    zones: BTreeMap<String, ZoneTable>,
}

impl InMemoryZoneProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a zone table under an identifier.
    #[must_use]
    pub fn with_zone(mut self, identifier: &str, table: ZoneTable) -> Self {
        self.zones.insert(String::from(identifier), table);
        self
    }

    fn table(&self, identifier: &str) -> CalendricsResult<&ZoneTable> {
        self.zones.get(identifier).ok_or_else(|| {
            CalendricsError::field_range().with_enum(ErrorMessage::ZoneRulesUnavailable)
        })
    }
}

impl ZoneRulesProvider for InMemoryZoneProvider {
    fn normalize_identifier(&self, ident: &'_ [u8]) -> CalendricsResult<Cow<'_, str>> {
        let ident = core::str::from_utf8(ident).map_err(|_| {
            CalendricsError::field_range().with_message("zone identifier was not valid UTF-8")
        })?;
        let (key, _) = self
            .zones
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(ident))
            .ok_or_else(|| {
                CalendricsError::field_range().with_enum(ErrorMessage::ZoneRulesUnavailable)
            })?;
        Ok(Cow::Borrowed(key.as_str()))
    }

    fn local_offsets_for(
        &self,
        identifier: &str,
        local_seconds: i64,
    ) -> CalendricsResult<LocalOffsets> {
        self.table(identifier)?.local_offsets(local_seconds)
    }

    fn offset_for_epoch_seconds(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> CalendricsResult<UtcOffsetSeconds> {
        Ok(self.table(identifier)?.offset_at(epoch_seconds))
    }
}
