//! Bank configuration and startup validation.
//!
//! All fields are fixed for the lifetime of a run.  Validation failures are
//! fatal at startup — there are no recoverable configuration errors once the
//! simulation is moving.

use std::time::Duration;

use crate::{CoreError, CoreResult, Floor};

// ── IdleParking ───────────────────────────────────────────────────────────────

/// Where an elevator goes the moment its stop queue drains.
///
/// The default leaves idle cars where they stopped.  Some banks stage idle
/// cars at a fixed floor instead, so both fixed-floor policies are available
/// as opt-in variants.
///
/// Parking is instantaneous: the car's reported floor changes in the same
/// step that it goes idle, with no travel time.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdleParking {
    /// Stay wherever the last stop was served.
    #[default]
    StayInPlace,
    /// Return to floor 0.
    GroundFloor,
    /// Return to the topmost floor.
    TopFloor,
}

impl IdleParking {
    /// The floor an idle car should park at, or `None` to stay put.
    #[inline]
    pub fn park_floor(self, top: Floor) -> Option<Floor> {
        match self {
            IdleParking::StayInPlace => None,
            IdleParking::GroundFloor => Some(Floor::GROUND),
            IdleParking::TopFloor    => Some(top),
        }
    }
}

// ── BankConfig ────────────────────────────────────────────────────────────────

/// Top-level configuration for one elevator bank.
///
/// Typically built in the application crate and validated once before any
/// simulation state exists.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BankConfig {
    /// Number of elevators in the bank.  Must be at least 1.
    pub num_elevators: u16,

    /// Number of floors served, numbered `0..num_floors`.  Must be at least 2
    /// (a one-floor building has no valid pickup).
    pub num_floors: u16,

    /// Idle parking policy applied by every elevator.
    pub idle_parking: IdleParking,

    /// Master RNG seed.  The same seed always produces the same request stream.
    pub seed: u64,

    /// Wall-clock interval between advancement steps of each elevator
    /// (threaded runtime only).
    pub travel_interval: Duration,

    /// Wall-clock interval between generated pickup requests (threaded
    /// runtime only).
    pub request_interval: Duration,

    /// Wall-clock interval between fleet status reports (threaded runtime
    /// only).
    pub report_interval: Duration,

    /// Report the fleet snapshot every N logical ticks in the deterministic
    /// harness.  0 disables periodic reports.
    pub report_every_ticks: u64,
}

impl Default for BankConfig {
    /// Mirrors the classic demo bank: 4 cars, 24 floors, one request per
    /// second, a 4-second travel step, and a report every 3 seconds.
    fn default() -> Self {
        Self {
            num_elevators:      4,
            num_floors:         24,
            idle_parking:       IdleParking::default(),
            seed:               42,
            travel_interval:    Duration::from_secs(4),
            request_interval:   Duration::from_secs(1),
            report_interval:    Duration::from_secs(3),
            report_every_ticks: 1,
        }
    }
}

impl BankConfig {
    /// Check every startup invariant.  Called by the simulation builders;
    /// applications constructing the core by hand should call it themselves.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_elevators == 0 {
            return Err(CoreError::NoElevators);
        }
        if self.num_floors < 2 {
            return Err(CoreError::TooFewFloors(self.num_floors));
        }
        if self.travel_interval.is_zero() {
            return Err(CoreError::ZeroInterval { name: "travel" });
        }
        if self.request_interval.is_zero() {
            return Err(CoreError::ZeroInterval { name: "request" });
        }
        if self.report_interval.is_zero() {
            return Err(CoreError::ZeroInterval { name: "report" });
        }
        Ok(())
    }

    /// The highest served floor.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors - 1)
    }

    /// `true` if `floor` is inside the served range.
    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        floor.0 < self.num_floors
    }
}
