//! Unit tests for the dispatch policy and deferred queue.

use lift_cab::{Cab, CabStatus};
use lift_core::{BankConfig, ElevatorId, Floor, IdleParking, PickupRequest};

use crate::{Controller, DispatchError, DispatchOutcome, lock, share};

fn config(num_elevators: u16, num_floors: u16) -> BankConfig {
    BankConfig { num_elevators, num_floors, ..Default::default() }
}

fn request(from: u16, to: u16) -> PickupRequest {
    PickupRequest::new(Floor(from), Floor(to))
}

/// A controller whose cabs sit idle at the given floors.
fn controller_at(floors: &[u16], num_floors: u16) -> Controller {
    let fleet = floors
        .iter()
        .enumerate()
        .map(|(i, &f)| {
            let mut cab = Cab::new(ElevatorId(i as u16), num_floors, IdleParking::StayInPlace);
            cab.place(Floor(f));
            share(cab)
        })
        .collect();
    Controller::new(fleet, num_floors)
}

fn assert_assigned_to(outcome: DispatchOutcome, expected: ElevatorId) {
    match outcome {
        DispatchOutcome::Assigned(a) => assert_eq!(a.elevator, expected),
        DispatchOutcome::Deferred => panic!("expected assignment to {expected}, got deferral"),
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn equal_floors_rejected() {
        let mut ctrl = Controller::from_config(&config(1, 24));
        assert_eq!(
            ctrl.dispatch(request(5, 5)).unwrap_err(),
            DispatchError::EqualFloors(Floor(5))
        );
        assert_eq!(ctrl.deferred_len(), 0, "rejected requests never enter the system");
    }

    #[test]
    fn out_of_range_rejected() {
        let mut ctrl = Controller::from_config(&config(1, 24));
        assert!(matches!(
            ctrl.dispatch(request(5, 24)).unwrap_err(),
            DispatchError::FloorOutOfRange { floor: Floor(24), num_floors: 24 }
        ));
    }
}

#[cfg(test)]
mod idle_preference {
    use super::*;

    #[test]
    fn nearest_idle_cab_wins() {
        // Cabs idle at 0 and 20; pickup at 18 goes to the cab at 20.
        let mut ctrl = controller_at(&[0, 20], 24);
        let outcome = ctrl.dispatch(request(18, 2)).unwrap();
        assert_assigned_to(outcome, ElevatorId(1));
    }

    #[test]
    fn equidistant_tie_goes_to_lowest_id() {
        // Cabs idle at 4 and 12; pickup at 8 is distance 4 from both.
        let mut ctrl = controller_at(&[4, 12], 24);
        let outcome = ctrl.dispatch(request(8, 15)).unwrap();
        assert_assigned_to(outcome, ElevatorId(0));
    }

    #[test]
    fn idle_cab_beats_better_placed_moving_cab() {
        let mut ctrl = controller_at(&[0, 2], 24);
        // Put cab 1 en route upward right below the pickup floor.
        ctrl.dispatch(request(3, 10)).unwrap(); // goes to cab 1 (distance 1)
        // Cab 0 is idle far away; it must still win over the moving cab.
        let outcome = ctrl.dispatch(request(4, 9)).unwrap();
        assert_assigned_to(outcome, ElevatorId(0));
    }

    #[test]
    fn assignment_reports_idle_to_moving_transition() {
        let mut ctrl = controller_at(&[0], 24);
        match ctrl.dispatch(request(5, 10)).unwrap() {
            DispatchOutcome::Assigned(a) => {
                let t = a.transition.expect("idle cab must report a transition");
                assert_eq!(t.from, CabStatus::Idle);
                assert_eq!(t.to, CabStatus::MovingUp);
            }
            DispatchOutcome::Deferred => panic!("expected assignment"),
        }
    }
}

#[cfg(test)]
mod en_route {
    use super::*;

    #[test]
    fn moving_up_cab_below_pickup_is_candidate() {
        // Cab 0 climbs 2 -> 10; no idle capacity remains.
        let mut ctrl = controller_at(&[2], 24);
        ctrl.dispatch(request(10, 11)).unwrap();
        assert_eq!(lock(&ctrl.fleet()[0]).status(), CabStatus::MovingUp);

        let outcome = ctrl.dispatch(request(6, 9)).unwrap();
        assert_assigned_to(outcome, ElevatorId(0));
        // The original stop at 10 is still queued.
        assert!(lock(&ctrl.fleet()[0]).snapshot().pending_floors.contains(&Floor(10)));
    }

    #[test]
    fn moving_up_cab_never_takes_pickup_at_or_below_its_floor() {
        let mut ctrl = controller_at(&[5], 24);
        ctrl.dispatch(request(10, 12)).unwrap(); // cab now MovingUp at 5
        // Pickup from 5 (its own floor) and from 3 (below) must defer.
        assert!(matches!(ctrl.dispatch(request(5, 9)).unwrap(), DispatchOutcome::Deferred));
        assert!(matches!(ctrl.dispatch(request(3, 9)).unwrap(), DispatchOutcome::Deferred));
        assert_eq!(ctrl.deferred_len(), 2);
    }

    #[test]
    fn moving_down_symmetric_rule() {
        let mut ctrl = controller_at(&[20], 24);
        ctrl.dispatch(request(10, 2)).unwrap(); // cab MovingDown from 20
        // Downward pickup below the cab's position: candidate.
        let outcome = ctrl.dispatch(request(15, 1)).unwrap();
        assert_assigned_to(outcome, ElevatorId(0));
        // Downward pickup above it: deferred.
        assert!(matches!(ctrl.dispatch(request(22, 21)).unwrap(), DispatchOutcome::Deferred));
    }

    #[test]
    fn fewest_intervening_stops_wins() {
        // Both cabs climb past floor 10, but cab 1 has a stop at 6 on the
        // way while cab 0's only stop (12) lies beyond the pickup floor.
        let mut ctrl = controller_at(&[2, 3], 24);
        ctrl.dispatch(request(6, 8)).unwrap();   // cab 1 (nearest idle)
        ctrl.dispatch(request(12, 14)).unwrap(); // cab 0
        assert_eq!(lock(&ctrl.fleet()[0]).status(), CabStatus::MovingUp);
        assert_eq!(lock(&ctrl.fleet()[1]).status(), CabStatus::MovingUp);

        let outcome = ctrl.dispatch(request(10, 13)).unwrap();
        assert_assigned_to(outcome, ElevatorId(0));
    }
}

#[cfg(test)]
mod deferred {
    use super::*;

    #[test]
    fn wrong_direction_request_defers() {
        let mut ctrl = controller_at(&[0], 24);
        ctrl.dispatch(request(5, 10)).unwrap(); // cab busy, MovingUp
        let outcome = ctrl.dispatch(request(10, 2)).unwrap(); // wants down
        assert!(matches!(outcome, DispatchOutcome::Deferred));
        assert_eq!(ctrl.deferred_len(), 1);
    }

    #[test]
    fn retry_assigns_when_cab_goes_idle() {
        let mut ctrl = controller_at(&[0], 24);
        ctrl.dispatch(request(5, 10)).unwrap();
        ctrl.dispatch(request(10, 2)).unwrap(); // deferred

        // Nothing retried while the cab is still busy.
        assert!(ctrl.retry_deferred().is_empty());

        // Drain the cab's queue; it goes idle.
        let cab = ctrl.fleet()[0].clone();
        while lock(&cab).status() != CabStatus::Idle {
            lock(&cab).advance_one_stop();
        }

        let assigned = ctrl.retry_deferred();
        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].request, request(10, 2));
        assert_eq!(ctrl.deferred_len(), 0, "a retried request leaves the queue exactly once");
    }

    #[test]
    fn failed_retries_keep_fifo_order() {
        let mut ctrl = controller_at(&[0], 24);
        ctrl.dispatch(request(5, 10)).unwrap(); // occupy the only cab
        ctrl.dispatch(request(9, 1)).unwrap();
        ctrl.dispatch(request(8, 2)).unwrap();
        ctrl.dispatch(request(7, 3)).unwrap();

        // A fruitless sweep must not reorder anything.
        assert!(ctrl.retry_deferred().is_empty());
        let waiting: Vec<PickupRequest> = ctrl.deferred().copied().collect();
        assert_eq!(waiting, vec![request(9, 1), request(8, 2), request(7, 3)]);
    }

    #[test]
    fn later_entries_see_earlier_assignments_in_same_sweep() {
        // Two upward requests defer while the only cab heads down.  Once it
        // idles, one sweep assigns both: the first takes the idle cab, the
        // second rides the same cab now that it is climbing.
        let mut ctrl = controller_at(&[10], 24);
        ctrl.dispatch(request(5, 1)).unwrap(); // occupy, MovingDown
        ctrl.dispatch(request(3, 20)).unwrap();
        ctrl.dispatch(request(12, 22)).unwrap();
        assert_eq!(ctrl.deferred_len(), 2);

        let cab = ctrl.fleet()[0].clone();
        lock(&cab).advance_one_stop(); // at 5
        lock(&cab).advance_one_stop(); // at 1, idle

        let assigned = ctrl.retry_deferred();
        assert_eq!(assigned.len(), 2, "second request rides the freshly moving cab");
        assert_eq!(ctrl.deferred_len(), 0);
    }
}

#[cfg(test)]
mod reporting {
    use super::*;

    #[test]
    fn snapshot_covers_whole_fleet() {
        let ctrl = controller_at(&[0, 7, 23], 24);
        let snaps = ctrl.snapshot();
        assert_eq!(snaps.len(), 3);
        assert_eq!(snaps[1].current_floor, Floor(7));
        assert!(snaps.iter().all(|s| s.status == CabStatus::Idle));
    }

    #[test]
    fn quiescence() {
        let mut ctrl = controller_at(&[0], 24);
        assert!(ctrl.is_quiescent());
        ctrl.dispatch(request(5, 10)).unwrap();
        assert!(!ctrl.is_quiescent());
    }
}
