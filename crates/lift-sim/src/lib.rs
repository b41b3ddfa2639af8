//! `lift-sim` — drives an elevator bank, two ways.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`builder`]  | `SimBuilder` — validated construction, initial floors   |
//! | [`sim`]      | `LiftSim` — single-threaded deterministic harness       |
//! | [`runtime`]  | `Runtime` — one thread per cab + controller event loop  |
//! | [`source`]   | `RequestSource` trait, `RandomRequests`                 |
//! | [`observer`] | `FleetObserver` trait, `NoopObserver`                   |
//! | [`error`]    | `SimError`, `SimResult<T>`                              |
//!
//! # Two drive modes
//!
//! The **deterministic harness** ([`LiftSim`]) advances every cab one stop
//! per logical tick and runs deferred retries inline — same dispatch core,
//! fully reproducible, no threads.  Tests and scripted scenarios use this.
//!
//! The **threaded runtime** ([`runtime::start`]) mirrors the production
//! shape: one actor thread per cab on its own travel ticker, a request pump,
//! and a controller thread blocking on a fleet event channel.  All
//! cross-actor traffic is `crossbeam-channel` messages; cab state crosses
//! threads only under its per-cab lock.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::BankConfig;
//! use lift_sim::{NoopObserver, RandomRequests, SimBuilder, runtime};
//!
//! let config = BankConfig::default();
//! let source = RandomRequests::from_config(&config);
//! let sim = SimBuilder::new(config).build()?;
//! let handle = runtime::start(sim, source, NoopObserver);
//! std::thread::sleep(std::time::Duration::from_secs(30));
//! let final_fleet = handle.shutdown()?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod runtime;
pub mod sim;
pub mod source;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FleetObserver, NoopObserver};
pub use runtime::{FleetEvent, RuntimeHandle};
pub use sim::LiftSim;
pub use source::{RandomRequests, RequestSource};
