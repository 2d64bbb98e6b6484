use crate::alphabet::Alphabet;
use std::iter::FusedIterator;
use tracing::debug;

/// A lazy, forward-only sequence of unique labels over an [`Alphabet`].
///
/// Each call to [`next`](Iterator::next) renders the current counter with
/// [`Alphabet::encode`] and then advances the counter by one. The first
/// `N` labels are the alphabet's symbols in order; after that, label length
/// grows with the base-`N` digit count and the index-0 symbol never leads.
///
/// The counter is a `u128`. The label for `u128::MAX` is the last one
/// produced; afterwards the sequence is exhausted and yields `None` forever.
///
/// A `Sequence` has a single consumer. Use `uniseq_generator::SharedSequence`
/// when several threads must draw from the same stream.
#[derive(Debug, Clone)]
pub struct Sequence {
    alphabet: Alphabet,
    counter: Option<u128>,
}

impl Sequence {
    /// Starts a fresh sequence at counter 0.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_offset(alphabet, 0)
    }

    /// Starts a sequence whose first label is the one for `offset`.
    ///
    /// Useful for resuming from a known position, or for handing disjoint
    /// counter ranges to independent producers.
    pub fn with_offset(alphabet: Alphabet, offset: u128) -> Self {
        debug!(radix = alphabet.len(), offset, "creating sequence");
        Self {
            alphabet,
            counter: Some(offset),
        }
    }

    /// The alphabet this sequence draws from.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Counter value of the next label, or `None` once exhausted.
    pub fn position(&self) -> Option<u128> {
        self.counter
    }
}

impl Iterator for Sequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let counter = self.counter?;
        let label = self.alphabet.encode(counter);
        self.counter = counter.checked_add(1);
        Some(label)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.counter {
            Some(counter) => {
                // `None` when 2^128 labels remain
                let remaining = (u128::MAX - counter).checked_add(1);
                match remaining.and_then(|n| usize::try_from(n).ok()) {
                    Some(n) => (n, Some(n)),
                    None => (usize::MAX, None),
                }
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for Sequence {}

#[cfg(test)]
mod tests {
    use super::*;

    fn take(symbols: &[&str], n: usize) -> Vec<String> {
        let alphabet = Alphabet::new(symbols.iter().copied()).unwrap();
        Sequence::new(alphabet).take(n).collect()
    }

    #[test]
    fn binary_alphabet() {
        assert_eq!(
            take(&["a", "b"], 9),
            ["a", "b", "ba", "bb", "baa", "bab", "bba", "bbb", "baaa"]
        );
    }

    #[test]
    fn ternary_alphabet() {
        assert_eq!(
            take(&["x", "y", "z"], 10),
            ["x", "y", "z", "yx", "yy", "yz", "zx", "zy", "zz", "yxx"]
        );
    }

    #[test]
    fn offset_skips_ahead() {
        let mut seq = Sequence::with_offset(Alphabet::alpha_upper(), 26);
        assert_eq!(seq.position(), Some(26));
        assert_eq!(seq.next().as_deref(), Some("BA"));
        assert_eq!(seq.position(), Some(27));
    }

    #[test]
    fn fresh_instances_are_independent() {
        let mut first = Sequence::new(Alphabet::numeric());
        first.by_ref().take(5).for_each(drop);

        let mut second = Sequence::new(first.alphabet().clone());
        assert_eq!(second.next().as_deref(), Some("0"));
        assert_eq!(first.next().as_deref(), Some("5"));
    }

    #[test]
    fn exhausts_after_u128_max() {
        let binary = Alphabet::new(["0", "1"]).unwrap();
        let mut seq = Sequence::with_offset(binary, u128::MAX - 1);

        assert_eq!(seq.size_hint(), (2, Some(2)));
        assert_eq!(seq.next(), Some(format!("{}0", "1".repeat(127))));
        assert_eq!(seq.next(), Some("1".repeat(128)));
        assert_eq!(seq.position(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(seq.size_hint(), (0, Some(0)));
    }

    #[test]
    fn size_hint_is_unbounded_from_the_start() {
        let seq = Sequence::new(Alphabet::alpha_lower());
        assert_eq!(seq.size_hint(), (usize::MAX, None));
    }
}
