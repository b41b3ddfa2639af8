//! A `Stop` — one floor an elevator must visit.

use std::fmt;

use lift_core::Floor;

// ── StopKind ──────────────────────────────────────────────────────────────────

/// Why the elevator is visiting a floor.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopKind {
    /// Collect a passenger; serving this stop must subsequently register a
    /// dropoff at `dropoff` (unless one is already queued).
    Pickup { dropoff: Floor },
    /// Deliver a passenger.  Dropoffs are de-duplicated per floor.
    Dropoff,
}

// ── Stop ──────────────────────────────────────────────────────────────────────

/// A unit of work for one elevator.
///
/// Note what is *not* here: the priority key.  Distance from the elevator is
/// derived by [`StopQueue`](crate::StopQueue) against the current floor and
/// recomputed on every rebuild; storing it on the stop would let it go stale
/// the moment the elevator moves.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub floor: Floor,
    pub kind:  StopKind,
}

impl Stop {
    /// A pickup-origin stop at `from`, paired with a dropoff at `to`.
    pub fn pickup(from: Floor, to: Floor) -> Self {
        Self { floor: from, kind: StopKind::Pickup { dropoff: to } }
    }

    /// A plain dropoff stop.
    pub fn dropoff(floor: Floor) -> Self {
        Self { floor, kind: StopKind::Dropoff }
    }

    /// `true` if this stop begins a pickup.
    #[inline]
    pub fn is_pickup(&self) -> bool {
        matches!(self.kind, StopKind::Pickup { .. })
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StopKind::Pickup { dropoff } => write!(f, "[from {} to {}]", self.floor, dropoff),
            StopKind::Dropoff => write!(f, "[to {}]", self.floor),
        }
    }
}
