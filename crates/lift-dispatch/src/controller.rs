//! The `Controller` — owns the fleet and the deferred-request queue, and
//! implements the two-tier assignment policy.

use std::collections::VecDeque;

use lift_cab::{Cab, CabSnapshot, CabStatus, StatusTransition};
use lift_core::{BankConfig, ElevatorId, Floor, PickupRequest, TravelDirection};

use crate::{DispatchError, DispatchResult, SharedCab, lock, share};

// ── DispatchOutcome ───────────────────────────────────────────────────────────

/// Result of one dispatch attempt for a valid request.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// A cab took the pickup.
    Assigned(Assignment),
    /// No cab could take it; the request joined the deferred queue and will
    /// be retried on the next fleet status transition.
    Deferred,
}

/// A pickup bound to a cab, together with the idle→moving transition the
/// assignment caused, if any.  The caller forwards that transition to its
/// event handling so deferred retries cascade.
#[derive(Debug)]
pub struct Assignment {
    pub elevator:   ElevatorId,
    pub request:    PickupRequest,
    pub transition: Option<StatusTransition>,
}

// ── Controller ────────────────────────────────────────────────────────────────

/// The dispatch controller.
///
/// Sole owner of the fleet list and the deferred queue; all assignment
/// decisions go through it.  It reads cab status/position and calls
/// `accept_pickup` under each cab's own lock — it never drives cab movement.
pub struct Controller {
    fleet:      Vec<SharedCab>,
    deferred:   VecDeque<PickupRequest>,
    num_floors: u16,
}

impl Controller {
    /// Build a fleet of idle ground-floor cabs per `config`.
    ///
    /// `config` must already be validated; see [`BankConfig::validate`].
    pub fn from_config(config: &BankConfig) -> Self {
        let fleet = (0..config.num_elevators)
            .map(|i| share(Cab::new(ElevatorId(i), config.num_floors, config.idle_parking)))
            .collect();
        Self {
            fleet,
            deferred: VecDeque::new(),
            num_floors: config.num_floors,
        }
    }

    /// Take ownership of an existing fleet (tests, custom placement).
    pub fn new(fleet: Vec<SharedCab>, num_floors: u16) -> Self {
        Self { fleet, deferred: VecDeque::new(), num_floors }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn fleet(&self) -> &[SharedCab] {
        &self.fleet
    }

    /// Requests currently waiting for capacity, in arrival order.
    pub fn deferred(&self) -> impl Iterator<Item = &PickupRequest> {
        self.deferred.iter()
    }

    pub fn deferred_len(&self) -> usize {
        self.deferred.len()
    }

    /// Snapshot every cab for status reporting.
    pub fn snapshot(&self) -> Vec<CabSnapshot> {
        self.fleet.iter().map(|cab| lock(cab).snapshot()).collect()
    }

    /// `true` when every cab is idle and nothing is deferred.
    pub fn is_quiescent(&self) -> bool {
        self.deferred.is_empty()
            && self.fleet.iter().all(|cab| lock(cab).status() == CabStatus::Idle)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Assign `request` to a cab, or defer it.
    ///
    /// Policy, in order:
    /// 1. The idle cab nearest to the pickup floor (ties to lowest id).
    /// 2. For an upward request: the `MovingUp` cab below the pickup floor
    ///    with the fewest intervening stops (ties to lowest id).
    /// 3. Symmetrically for a downward request over `MovingDown` cabs.
    /// 4. Defer, preserving arrival order.
    ///
    /// Malformed requests (equal floors, out of range) are rejected at this
    /// boundary and never enter the system.
    pub fn dispatch(&mut self, request: PickupRequest) -> DispatchResult<DispatchOutcome> {
        self.check(request)?;

        let chosen = self
            .nearest_idle(request.from)
            .or_else(|| self.best_en_route(request));

        match chosen {
            Some(index) => {
                let mut cab = lock(&self.fleet[index]);
                let transition = cab.accept_pickup(request.from, request.to);
                Ok(DispatchOutcome::Assigned(Assignment {
                    elevator: cab.id(),
                    request,
                    transition,
                }))
            }
            None => {
                self.deferred.push_back(request);
                Ok(DispatchOutcome::Deferred)
            }
        }
    }

    /// One FIFO sweep over the deferred queue.
    ///
    /// Each entry is re-dispatched against the current fleet; failures
    /// rotate back in their original relative order, successes are removed.
    /// Later entries see the fleet as updated by earlier assignments in the
    /// same sweep.  Call on every status transition — including transitions
    /// returned by the assignments this sweep produces (the caller loops
    /// until a sweep changes nothing).
    pub fn retry_deferred(&mut self) -> Vec<Assignment> {
        let mut assigned = Vec::new();
        for _ in 0..self.deferred.len() {
            let Some(request) = self.deferred.pop_front() else { break };
            match self.dispatch(request) {
                Ok(DispatchOutcome::Assigned(a)) => assigned.push(a),
                Ok(DispatchOutcome::Deferred) => {} // rotated to the back
                Err(_) => unreachable!("deferred entries were validated on entry"),
            }
        }
        assigned
    }

    // ── Candidate selection ───────────────────────────────────────────────

    /// Index of the idle cab nearest `from`, ties to the lowest id.
    fn nearest_idle(&self, from: Floor) -> Option<usize> {
        let mut best: Option<(u16, usize)> = None;
        for (index, cab) in self.fleet.iter().enumerate() {
            let cab = lock(cab);
            if cab.status() != CabStatus::Idle {
                continue;
            }
            let distance = cab.current_floor().distance_to(from);
            // Strict less-than keeps the first (lowest-id) cab on ties.
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, index));
            }
        }
        best.map(|(_, index)| index)
    }

    /// Index of the best same-direction en-route cab, or `None`.
    ///
    /// A candidate must already be moving in the request's direction *and*
    /// still be on the approach side of the pickup floor, so it passes that
    /// floor without reversing.  Fewest intervening stops wins.
    fn best_en_route(&self, request: PickupRequest) -> Option<usize> {
        let direction = request.direction();
        let mut best: Option<(usize, usize)> = None;
        for (index, cab) in self.fleet.iter().enumerate() {
            let cab = lock(cab);
            let approaching = match direction {
                TravelDirection::Up => {
                    cab.status() == CabStatus::MovingUp && cab.current_floor() < request.from
                }
                TravelDirection::Down => {
                    cab.status() == CabStatus::MovingDown && cab.current_floor() > request.from
                }
            };
            if !approaching {
                continue;
            }
            let stops = cab.intervening_stops(request.from);
            if best.is_none_or(|(s, _)| stops < s) {
                best = Some((stops, index));
            }
        }
        best.map(|(_, index)| index)
    }

    fn check(&self, request: PickupRequest) -> DispatchResult<()> {
        for floor in [request.from, request.to] {
            if floor.0 >= self.num_floors {
                return Err(DispatchError::FloorOutOfRange {
                    floor,
                    num_floors: self.num_floors,
                });
            }
        }
        if request.from == request.to {
            return Err(DispatchError::EqualFloors(request.from));
        }
        Ok(())
    }
}
