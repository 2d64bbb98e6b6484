//! Thread-safe label generation on top of [`uniseq_core`].

pub mod error;
pub mod label;
pub mod shared;

pub use error::Error;
pub use label::Label;
pub use shared::{GeneratorSettings, SharedSequence};

/// Trait for generating labels.
///
/// Implementations are pure generators that don't interact with storage.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Label>;
    /// Generates a label that is unique within this generator's stream.
    ///
    /// Fails only when the generator can no longer honour that guarantee,
    /// e.g. once its counter space is exhausted.
    fn generate(&self) -> Result<Self::Output, Error>;
}
