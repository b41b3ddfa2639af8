//! Strongly typed wrappers for elevator identifiers and floor numbers.
//!
//! Both are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into fleet `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helper for clarity.

use std::fmt;

// ── ElevatorId ────────────────────────────────────────────────────────────────

/// Index of an elevator in the fleet.  Assigned densely from 0 at startup;
/// stable for the lifetime of a run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElevatorId(pub u16);

impl ElevatorId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElevatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor number in `[0, num_floors)`.
///
/// Range membership is enforced at the configuration/dispatch boundary, not
/// here — `Floor` itself is just an ordered integer with a distance metric.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u16);

impl Floor {
    pub const GROUND: Floor = Floor(0);

    /// Absolute travel distance to `other`, in floors.
    ///
    /// This is the priority key of the stop queue: stops are served nearest
    /// first, measured from wherever the elevator currently is.
    #[inline]
    pub fn distance_to(self, other: Floor) -> u16 {
        self.0.abs_diff(other.0)
    }

    /// `true` if `self` lies strictly between `a` and `b` (in either order).
    #[inline]
    pub fn strictly_between(self, a: Floor, b: Floor) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        lo < self && self < hi
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
