//! Per-cab lock discipline.
//!
//! Each cab has exactly two mutators: its own drive loop (advancement) and
//! the controller (pickup assignment).  A per-cab `Mutex` serialises those
//! boundary crossings; nothing else touches cab state.  Single-threaded
//! users pay one uncontended lock per operation.

use std::sync::{Arc, Mutex, MutexGuard};

use lift_cab::Cab;

/// A cab shared between its drive loop and the controller.
pub type SharedCab = Arc<Mutex<Cab>>;

/// Wrap a cab for sharing.
pub fn share(cab: Cab) -> SharedCab {
    Arc::new(Mutex::new(cab))
}

/// Lock a shared cab, recovering from poisoning.
///
/// Cab state is consistent at every step boundary (each operation restores
/// the status invariant before returning), so a panic elsewhere never leaves
/// a half-updated cab behind the lock — recovering the guard is safe.
pub fn lock(cab: &SharedCab) -> MutexGuard<'_, Cab> {
    cab.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}
