use thiserror::Error;

/// Errors returned by generator construction and label generation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Alphabet(#[from] uniseq_core::Error),
    #[error("sequence exhausted after counter {}", u128::MAX)]
    Exhausted,
    #[error("generator state lock is poisoned")]
    StatePoisoned,
}
