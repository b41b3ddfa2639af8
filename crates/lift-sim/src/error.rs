use lift_core::CoreError;
use lift_dispatch::DispatchError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] CoreError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("initial floors length {got} does not match fleet size {expected}")]
    FleetSizeMismatch { expected: usize, got: usize },

    #[error("fleet event channel disconnected")]
    ChannelClosed,

    #[error("a simulation actor panicked")]
    ActorPanicked,

    #[error("work remaining after {ticks} ticks ({deferred} deferred requests)")]
    Stalled { ticks: u64, deferred: usize },
}

pub type SimResult<T> = Result<T, SimError>;
