//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// Startup/configuration errors.  These are the only errors the core can
/// produce: once a bank is running, every valid request is either assigned
/// or deferred, never failed.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("bank needs at least one elevator")]
    NoElevators,

    #[error("bank needs at least two floors, got {0}")]
    TooFewFloors(u16),

    #[error("{name} interval must be non-zero")]
    ZeroInterval { name: &'static str },
}

/// Shorthand result type for all `lift-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
