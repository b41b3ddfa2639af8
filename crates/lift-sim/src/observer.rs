//! Fleet observer trait for progress reporting and data collection.

use lift_cab::{CabSnapshot, StatusTransition};
use lift_core::PickupRequest;
use lift_dispatch::{Assignment, DispatchError};

/// Callbacks invoked by both drive modes at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is the reporting surface — the
/// core never formats or prints anything itself.
///
/// # Example — assignment printer
///
/// ```rust,ignore
/// struct AssignmentPrinter;
///
/// impl FleetObserver for AssignmentPrinter {
///     fn on_assigned(&mut self, a: &Assignment) {
///         println!("{} takes {}", a.elevator, a.request);
///     }
/// }
/// ```
pub trait FleetObserver {
    /// A pickup was bound to a cab (at arrival or on a deferred retry).
    fn on_assigned(&mut self, _assignment: &Assignment) {}

    /// No cab could take the pickup; `waiting` is the deferred queue depth
    /// after enqueueing it.
    fn on_deferred(&mut self, _request: &PickupRequest, _waiting: usize) {}

    /// A malformed request was rejected at the dispatch boundary.
    fn on_rejected(&mut self, _request: &PickupRequest, _error: &DispatchError) {}

    /// A cab's status flipped (idle ⇄ moving, or direction reversal).
    fn on_status_change(&mut self, _transition: &StatusTransition) {}

    /// Periodic fleet report: one snapshot per cab plus the deferred depth.
    fn on_report(&mut self, _fleet: &[CabSnapshot], _deferred: usize) {}
}

/// A [`FleetObserver`] that does nothing.  Use when you need to drive a
/// simulation but don't want callbacks.
pub struct NoopObserver;

impl FleetObserver for NoopObserver {}
