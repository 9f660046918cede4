//! Unified error type surfaced by the runtime API.
use game_core::{FactoryError, PersonId};
use thiserror::Error;

pub use circuit_breaker::BreakerConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Factory(#[from] FactoryError),

    #[error("invalid breaker configuration")]
    Breaker(#[from] BreakerConfigError),

    #[error("traveller {id} is not in the party")]
    UnknownPerson { id: PersonId },
}
