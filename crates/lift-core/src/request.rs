//! Pickup requests — the unit of demand flowing into the dispatcher.

use std::fmt;

use crate::Floor;

// ── TravelDirection ───────────────────────────────────────────────────────────

/// Which way a request wants to travel.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelDirection {
    Up,
    Down,
}

// ── PickupRequest ─────────────────────────────────────────────────────────────

/// A passenger waiting at `from` who wants to reach `to`.
///
/// The dispatcher rejects `from == to` and out-of-range floors at its
/// boundary; everything downstream may assume both floors are valid and
/// distinct.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupRequest {
    pub from: Floor,
    pub to:   Floor,
}

impl PickupRequest {
    pub fn new(from: Floor, to: Floor) -> Self {
        Self { from, to }
    }

    /// Travel direction of the request.
    ///
    /// Callers must have validated `from != to` already; an equal-floor
    /// request has no direction and trips the debug assertion.
    #[inline]
    pub fn direction(&self) -> TravelDirection {
        debug_assert_ne!(self.from, self.to, "equal-floor request has no direction");
        if self.from < self.to {
            TravelDirection::Up
        } else {
            TravelDirection::Down
        }
    }
}

impl fmt::Display for PickupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
