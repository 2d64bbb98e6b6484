//! Unique, strictly ordered labels over a caller-supplied alphabet.
//!
//! A [`Sequence`] maps a counter `0, 1, 2, ...` onto the positional notation
//! of an [`Alphabet`] with `N` symbols: the first `N` labels are the symbols
//! themselves, then two-symbol labels follow, and so on. Labels never repeat.
//!
//! ```
//! let labels: Vec<String> = uniseq_core::generator(["a", "b"]).unwrap().take(5).collect();
//! assert_eq!(labels, ["a", "b", "ba", "bb", "baa"]);
//! ```

pub mod alphabet;
pub mod error;
pub mod radix;
pub mod sequence;

pub use alphabet::{Alphabet, Charset, UnknownCharset, MAX_SYMBOLS, MIN_SYMBOLS};
pub use error::{Error, Result};
pub use sequence::Sequence;

use smol_str::SmolStr;

/// Builds an [`Alphabet`] from `symbols` and starts a [`Sequence`] at zero.
pub fn generator<I, S>(symbols: I) -> Result<Sequence>
where
    I: IntoIterator<Item = S>,
    S: Into<SmolStr>,
{
    Alphabet::new(symbols).map(Sequence::new)
}
