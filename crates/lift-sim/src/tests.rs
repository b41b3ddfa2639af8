//! Integration tests for lift-sim.

use lift_cab::{CabStatus, StatusTransition};
use lift_core::{BankConfig, ElevatorId, Floor, IdleParking, PickupRequest};
use lift_dispatch::Assignment;

use crate::{FleetObserver, NoopObserver, SimBuilder, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(num_elevators: u16, num_floors: u16) -> BankConfig {
    BankConfig {
        num_elevators,
        num_floors,
        idle_parking: IdleParking::StayInPlace,
        report_every_ticks: 0,
        ..Default::default()
    }
}

fn request(from: u16, to: u16) -> PickupRequest {
    PickupRequest::new(Floor(from), Floor(to))
}

/// Observer that records everything it sees.
#[derive(Default)]
struct EventLog {
    assigned:    Vec<(ElevatorId, PickupRequest)>,
    deferred:    Vec<PickupRequest>,
    transitions: Vec<StatusTransition>,
    reports:     usize,
}

impl FleetObserver for EventLog {
    fn on_assigned(&mut self, a: &Assignment) {
        self.assigned.push((a.elevator, a.request));
    }
    fn on_deferred(&mut self, r: &PickupRequest, _waiting: usize) {
        self.deferred.push(*r);
    }
    fn on_status_change(&mut self, t: &StatusTransition) {
        self.transitions.push(*t);
    }
    fn on_report(&mut self, _fleet: &[lift_cab::CabSnapshot], _deferred: usize) {
        self.reports += 1;
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = SimBuilder::new(test_config(3, 24)).build().unwrap();
        assert_eq!(sim.snapshot().len(), 3);
        assert!(sim.is_quiescent());
    }

    #[test]
    fn invalid_config_fails() {
        let result = SimBuilder::new(test_config(0, 24)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn initial_floor_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(3, 24))
            .initial_floors(vec![Floor(0), Floor(5)])
            .build();
        assert!(matches!(
            result,
            Err(SimError::FleetSizeMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn initial_floor_out_of_range_errors() {
        let result = SimBuilder::new(test_config(1, 24))
            .initial_floors(vec![Floor(24)])
            .build();
        assert!(matches!(result, Err(SimError::Dispatch(_))));
    }

    #[test]
    fn initial_floors_placed() {
        let sim = SimBuilder::new(test_config(2, 24))
            .initial_floors(vec![Floor(0), Floor(20)])
            .build()
            .unwrap();
        let snaps = sim.snapshot();
        assert_eq!(snaps[0].current_floor, Floor(0));
        assert_eq!(snaps[1].current_floor, Floor(20));
    }
}

// ── Scripted scenarios ────────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn single_cab_serves_pickup_in_two_ticks() {
        // Cab idle at 0.  Pickup 5 -> 10 is assigned immediately; the cab
        // visits 5 then 10 and goes idle.
        let mut sim = SimBuilder::new(test_config(1, 24)).build().unwrap();
        let mut log = EventLog::default();

        assert!(sim.inject(request(5, 10), &mut log).unwrap());
        let snap = sim.snapshot().remove(0);
        assert_eq!(snap.status, CabStatus::MovingUp);
        assert_eq!(snap.next_floor, Floor(5));

        sim.step(&mut log);
        let snap = sim.snapshot().remove(0);
        assert_eq!(snap.current_floor, Floor(5));
        assert_eq!(snap.next_floor, Floor(10));
        assert_eq!(snap.status, CabStatus::MovingUp);

        sim.step(&mut log);
        let snap = sim.snapshot().remove(0);
        assert_eq!(snap.current_floor, Floor(10));
        assert_eq!(snap.status, CabStatus::Idle);
        assert!(snap.pending_floors.is_empty());

        // Exactly two transitions: idle -> up at assignment, up -> idle at
        // the end.  The intermediate step keeps the status and stays silent.
        assert_eq!(log.transitions.len(), 2);
    }

    #[test]
    fn nearest_of_two_idle_cabs_takes_the_call() {
        let mut sim = SimBuilder::new(test_config(2, 24))
            .initial_floors(vec![Floor(0), Floor(20)])
            .build()
            .unwrap();
        let mut log = EventLog::default();

        sim.inject(request(18, 2), &mut log).unwrap();
        assert_eq!(log.assigned, vec![(ElevatorId(1), request(18, 2))]);
    }

    #[test]
    fn en_route_cab_picks_up_without_losing_prior_stop() {
        let mut sim = SimBuilder::new(test_config(1, 24))
            .initial_floors(vec![Floor(2)])
            .build()
            .unwrap();
        let mut log = EventLog::default();

        sim.inject(request(10, 11), &mut log).unwrap();
        sim.inject(request(6, 9), &mut log).unwrap();
        assert_eq!(log.assigned.len(), 2, "moving cab below 6 is a valid candidate");

        sim.run_until_quiescent(10, &mut NoopObserver).unwrap();
        // Final position is the last dropoff, so the stop at 10 (and its
        // dropoff at 11) survived the mid-route insertion.
        assert_eq!(sim.snapshot()[0].current_floor, Floor(11));
    }

    #[test]
    fn deferred_request_is_retried_after_cab_idles() {
        let mut sim = SimBuilder::new(test_config(1, 24)).build().unwrap();
        let mut log = EventLog::default();

        assert!(sim.inject(request(5, 10), &mut log).unwrap());
        assert!(!sim.inject(request(10, 2), &mut log).unwrap(), "downward request defers");
        assert_eq!(sim.controller().deferred_len(), 1);

        let used = sim.run_until_quiescent(10, &mut log).unwrap();
        assert_eq!(used, 4); // 5, 10 (idle + retry), 10 pickup, 2 dropoff
        assert_eq!(sim.controller().deferred_len(), 0);
        assert_eq!(log.assigned.len(), 2);
        assert_eq!(log.assigned[1].1, request(10, 2));
        assert_eq!(log.deferred, vec![request(10, 2)]);
    }

    #[test]
    fn rejected_request_surfaces_error_and_changes_nothing() {
        let mut sim = SimBuilder::new(test_config(1, 24)).build().unwrap();
        let result = sim.inject(request(5, 5), &mut NoopObserver);
        assert!(matches!(result, Err(SimError::Dispatch(_))));
        assert!(sim.is_quiescent());
    }

    #[test]
    fn stalled_run_reports_remaining_work() {
        let mut sim = SimBuilder::new(test_config(1, 24)).build().unwrap();
        sim.inject(request(1, 20), &mut NoopObserver).unwrap();
        let result = sim.run_until_quiescent(1, &mut NoopObserver);
        assert!(matches!(result, Err(SimError::Stalled { ticks: 1, .. })));
    }

    #[test]
    fn reports_fire_on_configured_cadence() {
        let config = BankConfig { report_every_ticks: 2, ..test_config(1, 24) };
        let mut sim = SimBuilder::new(config).build().unwrap();
        let mut log = EventLog::default();
        sim.run_ticks(6, &mut log);
        assert_eq!(log.reports, 3);
    }

    #[test]
    fn no_request_ever_lost_under_load() {
        // Saturate one cab with a burst; every request must eventually be
        // assigned exactly once and the bank must drain.
        let mut sim = SimBuilder::new(test_config(1, 24)).build().unwrap();
        let mut log = EventLog::default();

        let burst = [
            request(5, 10),
            request(20, 3),
            request(7, 2),
            request(1, 22),
            request(15, 4),
        ];
        for r in burst {
            sim.inject(r, &mut log).unwrap();
        }

        sim.run_until_quiescent(200, &mut log).unwrap();
        assert_eq!(log.assigned.len(), burst.len());
        let mut served: Vec<PickupRequest> = log.assigned.iter().map(|(_, r)| *r).collect();
        served.sort_by_key(|r| (r.from, r.to));
        let mut expected = burst.to_vec();
        expected.sort_by_key(|r| (r.from, r.to));
        assert_eq!(served, expected);
    }
}

// ── Threaded runtime ──────────────────────────────────────────────────────────

#[cfg(test)]
mod runtime_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::{RandomRequests, runtime};

    /// Observer that counts dispatch outcomes across threads.
    struct Counting {
        outcomes: Arc<AtomicUsize>,
    }
    impl FleetObserver for Counting {
        fn on_assigned(&mut self, _a: &Assignment) {
            self.outcomes.fetch_add(1, Ordering::SeqCst);
        }
        fn on_deferred(&mut self, _r: &PickupRequest, _w: usize) {
            self.outcomes.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn fast_config() -> BankConfig {
        BankConfig {
            travel_interval:  Duration::from_millis(5),
            request_interval: Duration::from_millis(3),
            report_interval:  Duration::from_millis(20),
            ..test_config(2, 24)
        }
    }

    #[test]
    fn runtime_serves_requests_and_shuts_down_cleanly() {
        let config = fast_config();
        let source = RandomRequests::from_config(&config);
        let sim = SimBuilder::new(config).build().unwrap();

        let outcomes = Arc::new(AtomicUsize::new(0));
        let handle = runtime::start(sim, source, Counting { outcomes: Arc::clone(&outcomes) });

        std::thread::sleep(Duration::from_millis(150));
        let fleet = handle.shutdown().unwrap();

        assert_eq!(fleet.len(), 2);
        assert!(
            outcomes.load(Ordering::SeqCst) > 0,
            "pump requests must reach the controller"
        );
    }

    #[test]
    fn injected_request_is_processed() {
        let config = BankConfig {
            // Pump fires rarely so the injected request dominates the run.
            request_interval: Duration::from_secs(60),
            ..fast_config()
        };
        let source = RandomRequests::from_config(&config);
        let sim = SimBuilder::new(config).build().unwrap();

        let outcomes = Arc::new(AtomicUsize::new(0));
        let handle = runtime::start(sim, source, Counting { outcomes: Arc::clone(&outcomes) });

        handle.inject(request(5, 10)).unwrap();
        std::thread::sleep(Duration::from_millis(100));
        let fleet = handle.shutdown().unwrap();

        assert_eq!(outcomes.load(Ordering::SeqCst), 1);
        // With 5 ms travel steps the cab has long since served 5 and 10.
        assert_eq!(fleet[0].current_floor, Floor(10));
        assert_eq!(fleet[0].status, CabStatus::Idle);
    }
}
