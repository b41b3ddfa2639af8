use lift_core::Floor;
use thiserror::Error;

/// Boundary rejection of a malformed request.
///
/// These are caller contract violations, not runtime failures: the request
/// source is specified to emit distinct, in-range floors.  A valid request
/// is never failed — it is assigned or deferred.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("pickup floor {0} equals destination floor")]
    EqualFloors(Floor),

    #[error("floor {floor} outside served range 0..{num_floors}")]
    FloorOutOfRange { floor: Floor, num_floors: u16 },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
