//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter: one tick is one
//! advancement step of the whole fleet (every elevator moves at most one
//! queued stop per tick).  There is no wall-clock mapping in the
//! deterministic harness; the threaded runtime derives its cadence from the
//! `Duration` intervals in [`BankConfig`](crate::BankConfig) instead.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`; a run never realistically exhausts it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
