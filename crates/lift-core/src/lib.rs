//! `lift-core` — foundational types for the `liftsim` elevator-bank framework.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ElevatorId`, `Floor`                                 |
//! | [`time`]    | `Tick`                                                |
//! | [`request`] | `PickupRequest`, `TravelDirection`                    |
//! | [`config`]  | `BankConfig`, `IdleParking`, validation               |
//! | [`rng`]     | `SimRng` (seeded, reproducible request streams)       |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod request;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BankConfig, IdleParking};
pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, Floor};
pub use request::{PickupRequest, TravelDirection};
pub use rng::SimRng;
pub use time::Tick;
