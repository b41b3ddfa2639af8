//! `lift-dispatch` — fleet ownership and the pickup assignment policy.
//!
//! # Crate layout
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`controller`] | `Controller`, `DispatchOutcome`, `Assignment`         |
//! | [`shared`]     | `SharedCab` (per-cab lock) and the lock helper        |
//! | [`error`]      | `DispatchError`, `DispatchResult<T>`                  |
//!
//! # Policy (summary)
//!
//! Idle capacity is always consumed first: any idle cab beats any moving
//! one, and the nearest idle cab wins (ties to the lowest elevator id).
//! With no idle cab, only cabs already moving *toward* the pickup floor in
//! the request's direction are candidates — flagging down a cab moving away
//! would force a reversal, which this policy never does.  Among candidates
//! the one with the fewest already-queued stops between its position and
//! the pickup floor wins.  A request no cab can take is deferred FIFO and
//! retried on every fleet status transition.

pub mod controller;
pub mod error;
pub mod shared;

#[cfg(test)]
mod tests;

pub use controller::{Assignment, Controller, DispatchOutcome};
pub use error::{DispatchError, DispatchResult};
pub use shared::{SharedCab, lock, share};
