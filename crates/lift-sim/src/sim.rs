//! The `LiftSim` deterministic harness.

use lift_cab::{CabSnapshot, StatusTransition};
use lift_core::{BankConfig, PickupRequest, Tick};
use lift_dispatch::{Controller, DispatchOutcome, SharedCab, lock};

use crate::{FleetObserver, SimError, SimResult};

/// Single-threaded driver over the dispatch core.
///
/// One logical tick advances every cab by at most one queued stop, then
/// runs deferred retries for whatever status transitions the step produced.
/// Requests enter through [`inject`](LiftSim::inject) at whatever points the
/// caller chooses, which makes arbitrary arrival/movement interleavings
/// scriptable and exactly reproducible.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct LiftSim {
    config:     BankConfig,
    controller: Controller,
    clock:      Tick,
}

impl LiftSim {
    pub(crate) fn from_parts(config: BankConfig, controller: Controller) -> Self {
        Self { config, controller, clock: Tick::ZERO }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Ticks stepped so far.
    pub fn tick(&self) -> Tick {
        self.clock
    }

    pub fn snapshot(&self) -> Vec<CabSnapshot> {
        self.controller.snapshot()
    }

    /// `true` when every cab is idle and no request is deferred.
    pub fn is_quiescent(&self) -> bool {
        self.controller.is_quiescent()
    }

    /// Surrender the core to another driver (the threaded runtime).
    pub fn into_parts(self) -> (BankConfig, Controller) {
        (self.config, self.controller)
    }

    // ── Driving ───────────────────────────────────────────────────────────

    /// Feed one request to the dispatcher.
    ///
    /// Returns `true` if a cab took it, `false` if it was deferred.  An
    /// assignment to an idle cab flips that cab's status, which triggers
    /// deferred retries exactly as a movement-driven transition would.
    pub fn inject<O: FleetObserver>(
        &mut self,
        request:  PickupRequest,
        observer: &mut O,
    ) -> SimResult<bool> {
        match self.controller.dispatch(request) {
            Ok(DispatchOutcome::Assigned(assignment)) => {
                observer.on_assigned(&assignment);
                if let Some(transition) = assignment.transition {
                    self.note_transition(transition, observer);
                }
                Ok(true)
            }
            Ok(DispatchOutcome::Deferred) => {
                observer.on_deferred(&request, self.controller.deferred_len());
                Ok(false)
            }
            Err(error) => {
                observer.on_rejected(&request, &error);
                Err(SimError::Dispatch(error))
            }
        }
    }

    /// Advance every cab one stop, then react to the resulting transitions.
    pub fn step<O: FleetObserver>(&mut self, observer: &mut O) {
        self.clock = self.clock + 1;

        // Advance first, react after: a retry during the scan would let one
        // cab's freed capacity mutate another cab mid-iteration.
        let fleet: Vec<SharedCab> = self.controller.fleet().to_vec();
        let mut transitions: Vec<StatusTransition> = Vec::new();
        for cab in &fleet {
            if let Some(transition) = lock(cab).advance_one_stop() {
                transitions.push(transition);
            }
        }
        for transition in transitions {
            self.note_transition(transition, observer);
        }

        if self.config.report_every_ticks > 0
            && self.clock.0.is_multiple_of(self.config.report_every_ticks)
        {
            observer.on_report(&self.controller.snapshot(), self.controller.deferred_len());
        }
    }

    /// Run exactly `n` ticks.
    pub fn run_ticks<O: FleetObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    /// Step until the whole bank is idle with nothing deferred.
    ///
    /// Returns the number of ticks used, or [`SimError::Stalled`] once
    /// `max_ticks` elapse with work remaining.
    pub fn run_until_quiescent<O: FleetObserver>(
        &mut self,
        max_ticks: u64,
        observer:  &mut O,
    ) -> SimResult<u64> {
        let mut used = 0;
        while !self.controller.is_quiescent() {
            if used >= max_ticks {
                return Err(SimError::Stalled {
                    ticks:    max_ticks,
                    deferred: self.controller.deferred_len(),
                });
            }
            self.step(observer);
            used += 1;
        }
        Ok(used)
    }

    // ── Transition handling ───────────────────────────────────────────────

    /// React to one status transition: report it, then sweep the deferred
    /// queue until a sweep stops producing new transitions.
    ///
    /// The loop mirrors the event cascade of the threaded runtime, where
    /// each assignment-caused transition posts a fresh event: an assignment
    /// in sweep N can flip a cab into a direction that unblocks an entry
    /// that already failed earlier in sweep N.
    fn note_transition<O: FleetObserver>(
        &mut self,
        transition: StatusTransition,
        observer:   &mut O,
    ) {
        observer.on_status_change(&transition);
        loop {
            let assigned = self.controller.retry_deferred();
            if assigned.is_empty() {
                break;
            }
            let mut transitioned = false;
            for assignment in &assigned {
                observer.on_assigned(assignment);
                if let Some(t) = &assignment.transition {
                    transitioned = true;
                    observer.on_status_change(t);
                }
            }
            if !transitioned {
                break;
            }
        }
    }
}
