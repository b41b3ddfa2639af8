//! Threaded actor runtime: one drive loop per cab, a request pump, and the
//! controller's blocking event loop.
//!
//! # Actor topology
//!
//! ```text
//! request pump ──Pickup──────────┐
//!                                ├──> controller thread ──accept_pickup──> cab locks
//! cab 0 drive ──StatusChange──┐  │        │
//! cab 1 drive ──StatusChange──┼──┘        └── on_report ticker
//! ...          (fleet event channel)
//! ```
//!
//! Each cab's drive loop is the only caller of `advance_one_stop` for that
//! cab; the controller is the only caller of `accept_pickup`.  Both go
//! through the per-cab lock, never through shared fields.  Everything else
//! is messages on crossbeam channels, so each actor blocks on `select!`
//! rather than polling.
//!
//! Shutdown is signalled by dropping the shutdown channel's sender: every
//! `select!` arm watching it sees the disconnect and exits its loop.

use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, select, tick, unbounded};

use lift_cab::{CabSnapshot, StatusTransition};
use lift_core::{BankConfig, PickupRequest};
use lift_dispatch::{Controller, DispatchOutcome, SharedCab, lock};

use crate::{FleetObserver, LiftSim, RequestSource, SimError, SimResult};

// ── FleetEvent ────────────────────────────────────────────────────────────────

/// Everything the controller thread reacts to.
#[derive(Debug)]
pub enum FleetEvent {
    /// A new pickup request (from the pump or injected externally).
    Pickup(PickupRequest),
    /// A cab's status flipped; deferred requests get retried.
    StatusChange(StatusTransition),
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Spawn the full actor set and start serving requests.
///
/// Consumes a built [`LiftSim`] (for its validated config and fleet), a
/// request source, and an observer; the observer moves into the controller
/// thread and sees every assignment, deferral, transition, and periodic
/// report.
pub fn start<S, O>(sim: LiftSim, source: S, observer: O) -> RuntimeHandle
where
    S: RequestSource + Send + 'static,
    O: FleetObserver + Send + 'static,
{
    let (config, controller) = sim.into_parts();
    let (event_tx, event_rx) = unbounded::<FleetEvent>();
    let (shutdown_tx, shutdown_rx) = unbounded::<()>();

    let mut workers = Vec::new();

    for cab in controller.fleet() {
        workers.push(spawn_drive_loop(
            cab.clone(),
            config.travel_interval,
            event_tx.clone(),
            shutdown_rx.clone(),
        ));
    }
    workers.push(spawn_request_pump(
        source,
        config.request_interval,
        event_tx.clone(),
        shutdown_rx.clone(),
    ));
    let controller_thread =
        spawn_controller(controller, &config, observer, event_rx, shutdown_rx);

    RuntimeHandle { event_tx, shutdown_tx, workers, controller_thread }
}

// ── RuntimeHandle ─────────────────────────────────────────────────────────────

/// Owner of the running actor set.
pub struct RuntimeHandle {
    event_tx:          Sender<FleetEvent>,
    shutdown_tx:       Sender<()>,
    workers:           Vec<JoinHandle<()>>,
    controller_thread: JoinHandle<Controller>,
}

impl RuntimeHandle {
    /// Inject a pickup from outside the request pump (processed in arrival
    /// order with everything else on the event channel).
    pub fn inject(&self, request: PickupRequest) -> SimResult<()> {
        self.event_tx
            .send(FleetEvent::Pickup(request))
            .map_err(|_| SimError::ChannelClosed)
    }

    /// Stop all actors, join them, and return the final fleet snapshot.
    pub fn shutdown(self) -> SimResult<Vec<CabSnapshot>> {
        // Dropping the sender disconnects every shutdown receiver.
        drop(self.shutdown_tx);
        drop(self.event_tx);
        for worker in self.workers {
            worker.join().map_err(|_| SimError::ActorPanicked)?;
        }
        let controller = self
            .controller_thread
            .join()
            .map_err(|_| SimError::ActorPanicked)?;
        Ok(controller.snapshot())
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

/// Drive loop: move the cab one stop per travel interval and report any
/// status transition to the controller.
fn spawn_drive_loop(
    cab:      SharedCab,
    interval: std::time::Duration,
    events:   Sender<FleetEvent>,
    shutdown: Receiver<()>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let ticker = tick(interval);
        loop {
            select! {
                recv(ticker) -> _ => {
                    let transition = lock(&cab).advance_one_stop();
                    if let Some(t) = transition
                        && events.send(FleetEvent::StatusChange(t)).is_err()
                    {
                        break; // controller gone
                    }
                }
                recv(shutdown) -> _ => break,
            }
        }
    })
}

/// Pump: ask the source for a request once per request interval.
fn spawn_request_pump<S>(
    mut source: S,
    interval:   std::time::Duration,
    events:     Sender<FleetEvent>,
    shutdown:   Receiver<()>,
) -> JoinHandle<()>
where
    S: RequestSource + Send + 'static,
{
    thread::spawn(move || {
        let ticker = tick(interval);
        loop {
            select! {
                recv(ticker) -> _ => {
                    if events.send(FleetEvent::Pickup(source.next_request())).is_err() {
                        break;
                    }
                }
                recv(shutdown) -> _ => break,
            }
        }
    })
}

/// Controller event loop: blocks on the fleet event channel, reports on its
/// own ticker, and returns the controller itself at shutdown so the caller
/// can take a final snapshot.
fn spawn_controller<O>(
    mut controller: Controller,
    config:         &BankConfig,
    mut observer:   O,
    events:         Receiver<FleetEvent>,
    shutdown:       Receiver<()>,
) -> JoinHandle<Controller>
where
    O: FleetObserver + Send + 'static,
{
    let report_interval = config.report_interval;
    thread::spawn(move || {
        let report = tick(report_interval);
        loop {
            select! {
                recv(events) -> event => match event {
                    Ok(FleetEvent::Pickup(request)) => {
                        handle_pickup(&mut controller, request, &mut observer);
                    }
                    Ok(FleetEvent::StatusChange(transition)) => {
                        observer.on_status_change(&transition);
                        run_retries(&mut controller, &mut observer);
                    }
                    Err(_) => break, // all event senders gone
                },
                recv(report) -> _ => {
                    observer.on_report(&controller.snapshot(), controller.deferred_len());
                }
                recv(shutdown) -> _ => break,
            }
        }
        controller
    })
}

// ── Event handling (shared logic) ─────────────────────────────────────────────

fn handle_pickup<O: FleetObserver>(
    controller: &mut Controller,
    request:    PickupRequest,
    observer:   &mut O,
) {
    match controller.dispatch(request) {
        Ok(DispatchOutcome::Assigned(assignment)) => {
            observer.on_assigned(&assignment);
            if let Some(transition) = assignment.transition {
                observer.on_status_change(&transition);
                run_retries(controller, observer);
            }
        }
        Ok(DispatchOutcome::Deferred) => {
            observer.on_deferred(&request, controller.deferred_len());
        }
        Err(error) => {
            // Contract violation by the source; drop the request, keep serving.
            observer.on_rejected(&request, &error);
        }
    }
}

/// Sweep the deferred queue until a sweep stops producing new transitions.
fn run_retries<O: FleetObserver>(controller: &mut Controller, observer: &mut O) {
    loop {
        let assigned = controller.retry_deferred();
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
