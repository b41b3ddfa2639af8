//! `lift-cab` — one elevator car: its stop queue, position, and status
//! machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`stop`]   | `Stop`, `StopKind`                                       |
//! | [`queue`]  | `StopQueue` — nearest-first priority queue with rebuild  |
//! | [`cab`]    | `Cab`, `CabStatus`, `StatusTransition`, `CabSnapshot`    |
//!
//! # Movement model (summary)
//!
//! A cab serves its queued stops **nearest first**, where "nearest" is
//! measured from the cab's *current* floor.  Because that reference point
//! moves with every step, the queue's priority keys are recomputed
//! ([`StopQueue::rebuild`]) after each advancement — a stop ranked far away
//! when it was enqueued may be the closest one three steps later.
//!
//! Status is derived state: `Idle` iff the queue is empty, otherwise
//! `MovingUp`/`MovingDown` according to where the next stop lies.  Mutating
//! operations report a [`StatusTransition`] only when the derived status
//! actually changes, which is the dispatcher's cue to retry deferred
//! requests.

pub mod cab;
pub mod queue;
pub mod stop;


pub use cab::{Cab, CabSnapshot, CabStatus, StatusTransition};
pub use queue::StopQueue;
pub use stop::{Stop, StopKind};
