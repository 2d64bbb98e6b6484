use smol_str::SmolStr;
use thiserror::Error;

/// Result type for alphabet construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while building an [`Alphabet`](crate::Alphabet).
///
/// Generation itself never fails; every error here is a pure function of the
/// symbols handed to the constructor.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid alphabet size {got}; expected {min}..={max} symbols")]
    InvalidAlphabetSize { min: usize, max: usize, got: usize },
    #[error("duplicate symbol {symbol:?} at positions {first} and {second}")]
    DuplicateSymbol {
        symbol: SmolStr,
        first: usize,
        second: usize,
    },
}
