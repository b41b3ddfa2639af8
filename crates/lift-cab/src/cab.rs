//! The `Cab` struct — one elevator car and its status machine.

use std::fmt;

use lift_core::{ElevatorId, Floor, IdleParking};

use crate::{Stop, StopKind, StopQueue};

// ── CabStatus ─────────────────────────────────────────────────────────────────

/// Derived movement status.
///
/// `Idle` iff the stop queue is empty; otherwise `MovingUp` when the next
/// stop is above the current floor and `MovingDown` otherwise (a next stop
/// *at* the current floor counts as `MovingDown`, and is served on the very
/// next step).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CabStatus {
    #[default]
    Idle,
    MovingUp,
    MovingDown,
}

impl fmt::Display for CabStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CabStatus::Idle       => "idle",
            CabStatus::MovingUp   => "moving up",
            CabStatus::MovingDown => "moving down",
        };
        f.write_str(s)
    }
}

// ── StatusTransition ──────────────────────────────────────────────────────────

/// Emitted when a cab's derived status actually changes (old ≠ new), and
/// never on a step that keeps the status.  Status transitions are the only
/// events that can make a previously unservable request servable, so the
/// dispatcher retries its deferred queue on each one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTransition {
    pub elevator: ElevatorId,
    pub from:     CabStatus,
    pub to:       CabStatus,
}

// ── CabSnapshot ───────────────────────────────────────────────────────────────

/// Point-in-time view of one cab, for status reporting.  Formatting is the
/// application's concern.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CabSnapshot {
    pub id:             ElevatorId,
    pub status:         CabStatus,
    pub current_floor:  Floor,
    pub next_floor:     Floor,
    /// Pending floors in serving order (nearest first).
    pub pending_floors: Vec<Floor>,
}

// ── Cab ───────────────────────────────────────────────────────────────────────

/// One elevator car.
///
/// Owns its [`StopQueue`] exclusively.  All mutation goes through
/// [`accept_pickup`](Cab::accept_pickup) (called by the dispatcher) and
/// [`advance_one_stop`](Cab::advance_one_stop) (called by the cab's own
/// drive loop); both keep the derived-status invariant and report a
/// [`StatusTransition`] when it flips.
pub struct Cab {
    id:            ElevatorId,
    current_floor: Floor,
    next_floor:    Floor,
    status:        CabStatus,
    queue:         StopQueue,
    top_floor:     Floor,
    parking:       IdleParking,
}

impl Cab {
    /// A new idle cab at the ground floor.
    pub fn new(id: ElevatorId, num_floors: u16, parking: IdleParking) -> Self {
        debug_assert!(num_floors >= 2, "bank needs at least two floors");
        Self {
            id,
            current_floor: Floor::GROUND,
            next_floor:    Floor::GROUND,
            status:        CabStatus::Idle,
            queue:         StopQueue::new(),
            top_floor:     Floor(num_floors - 1),
            parking,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> ElevatorId {
        self.id
    }

    pub fn status(&self) -> CabStatus {
        self.status
    }

    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    pub fn next_floor(&self) -> Floor {
        self.next_floor
    }

    pub fn pending_stops(&self) -> usize {
        self.queue.len()
    }

    /// Point-in-time view for status reporting.
    pub fn snapshot(&self) -> CabSnapshot {
        CabSnapshot {
            id:             self.id,
            status:         self.status,
            current_floor:  self.current_floor,
            next_floor:     self.next_floor,
            pending_floors: self.queue.floors_by_distance(),
        }
    }

    /// Teleport an idle cab to `floor` (initial placement; no travel time).
    pub fn place(&mut self, floor: Floor) {
        debug_assert!(floor <= self.top_floor, "placement outside served range");
        debug_assert_eq!(self.status, CabStatus::Idle, "cannot place a moving cab");
        self.current_floor = floor;
        self.next_floor = floor;
    }

    // ── Mutating operations ───────────────────────────────────────────────

    /// Schedule a pickup from `from` to `to`.
    ///
    /// Never rejects: capacity is out of scope, so a cab chosen by the
    /// dispatcher always takes the work.  The pickup stop is ranked by its
    /// distance from the cab's current floor; the paired dropoff is
    /// registered later, when the pickup stop is actually served.
    pub fn accept_pickup(&mut self, from: Floor, to: Floor) -> Option<StatusTransition> {
        debug_assert!(from <= self.top_floor && to <= self.top_floor, "floor out of range");
        debug_assert_ne!(from, to, "pickup with equal floors");

        self.queue.insert(Stop::pickup(from, to), self.current_floor);
        self.retarget();
        self.update_status()
    }

    /// Move to the nearest queued stop and serve it.
    ///
    /// No-op when idle.  Serving a pickup stop registers its paired dropoff
    /// unless a stop at that floor is already queued.  The queue is then
    /// rebuilt against the new current floor — the core correctness rule:
    /// dispatch distances are always measured from where the cab *is*, not
    /// where it was when a stop was enqueued.
    pub fn advance_one_stop(&mut self) -> Option<StatusTransition> {
        let stop = self.queue.pop_nearest()?;
        self.current_floor = stop.floor;

        if let StopKind::Pickup { dropoff } = stop.kind {
            self.register_dropoff(dropoff);
        }

        self.queue.rebuild(self.current_floor);
        self.retarget();
        self.update_status()
    }

    /// Count queued stops strictly between the current floor and `target`.
    ///
    /// The dispatcher uses this to rank same-direction cabs by how many
    /// stops a new pickup would be inserted behind.
    pub fn intervening_stops(&self, target: Floor) -> usize {
        self.queue
            .iter()
            .filter(|stop| stop.floor.strictly_between(self.current_floor, target))
            .count()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Queue a dropoff at `floor` unless some stop already targets it.
    fn register_dropoff(&mut self, floor: Floor) {
        if !self.queue.contains_floor(floor) {
            self.queue.insert(Stop::dropoff(floor), self.current_floor);
        }
    }

    /// Point `next_floor` at the nearest queued stop, or at the current
    /// floor when the queue is empty.
    fn retarget(&mut self) {
        self.next_floor = self
            .queue
            .peek_nearest()
            .map_or(self.current_floor, |stop| stop.floor);
    }

    /// Recompute the derived status; on an empty queue apply the idle
    /// parking policy.  Returns the transition only when old ≠ new.
    fn update_status(&mut self) -> Option<StatusTransition> {
        let old = self.status;

        if self.queue.is_empty() {
            self.status = CabStatus::Idle;
            if let Some(park) = self.parking.park_floor(self.top_floor) {
                self.current_floor = park;
            }
            self.next_floor = self.current_floor;
        } else if self.next_floor > self.current_floor {
            self.status = CabStatus::MovingUp;
        } else {
            self.status = CabStatus::MovingDown;
        }

        (old != self.status).then_some(StatusTransition {
            elevator: self.id,
            from:     old,
            to:       self.status,
        })
    }
}
