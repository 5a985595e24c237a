//! Resolution strategy options invoked by the date and zone engines.
//!
//! Both resolvers are stateless, referentially transparent strategies:
//! calling one twice with the same input yields the same output. They are
//! dispatched as plain enums rather than trait objects.

/// `DateResolver` decides what happens when a `(year, month, day)` triple
/// is field-valid but jointly invalid, such as February 30.
///
/// The resolver never alters the year or month; it only repairs (or
/// rejects) the day-of-month.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateResolver {
    /// Reject the invalid triple with an error.
    Strict,
    /// Clamp the day down to the last valid day of the resolved month.
    #[default]
    PreviousValid,
}

/// `ZoneResolver` decides how a local date-time acquires an offset when
/// the zone rules report a gap (no valid offset) or an overlap (two valid
/// offsets) for it.
///
/// | resolver        | gap                                   | overlap                                    |
/// |-----------------|---------------------------------------|--------------------------------------------|
/// | `Strict`        | error                                 | error                                      |
/// | `EarlierOffset` | shift back by the gap length          | earlier (pre-transition) offset            |
/// | `LaterOffset`   | shift forward by the gap length       | later (post-transition) offset             |
/// | `RetainOffset`  | shift forward by the gap length       | previous offset if still valid, else later |
///
/// `RetainOffset` with no previous offset to retain takes the earlier
/// offset at an overlap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ZoneResolver {
    /// Reject gaps and overlaps with an error.
    Strict,
    /// Prefer the offset in force before the transition.
    EarlierOffset,
    /// Prefer the offset in force after the transition.
    LaterOffset,
    /// Keep the offset the value already had where the rules still allow
    /// it, repairing forward otherwise.
    #[default]
    RetainOffset,
}
