use crate::{error::Error, label::Label, Generator};
use smol_str::SmolStr;
use std::sync::Mutex;
use tracing::{debug, warn};
use typed_builder::TypedBuilder;
use uniseq_core::Alphabet;

/// Configures a [`SharedSequence`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct GeneratorSettings {
    /// Symbols used as digits. Accepts a [`uniseq_core::Charset`] too.
    #[builder(setter(into))]
    pub alphabet: Alphabet,
    /// Counter value of the first label.
    #[builder(default = 0)]
    pub offset: u128,
    /// Prepended verbatim to every label.
    ///
    /// For distributed deployments, each node should use a unique prefix
    /// (e.g. `"node-a-"`, `"node-b-"`) so their labels cannot collide.
    #[builder(default, setter(into))]
    pub prefix: SmolStr,
}

/// A label sequence that many threads can draw from.
///
/// The counter lives behind a mutex; reserving a counter value and advancing
/// it happen under the lock, so concurrent callers never see a duplicate or
/// a gap. Share it through an `Arc`.
#[derive(Debug)]
pub struct SharedSequence {
    alphabet: Alphabet,
    prefix: SmolStr,
    // `None` once the label for `u128::MAX` has been handed out
    state: Mutex<Option<u128>>,
}

impl SharedSequence {
    pub fn new(settings: GeneratorSettings) -> Self {
        debug!(
            radix = settings.alphabet.len(),
            offset = settings.offset,
            prefix = %settings.prefix,
            "creating shared sequence"
        );

        Self {
            alphabet: settings.alphabet,
            prefix: settings.prefix,
            state: Mutex::new(Some(settings.offset)),
        }
    }

    /// Starts at zero with no prefix.
    pub fn from_alphabet(alphabet: impl Into<Alphabet>) -> Self {
        Self::new(GeneratorSettings::builder().alphabet(alphabet).build())
    }

    /// Validates `symbols` as an alphabet, then behaves like
    /// [`from_alphabet`](Self::from_alphabet).
    pub fn with_symbols<I, S>(symbols: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        Ok(Self::from_alphabet(Alphabet::new(symbols)?))
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Counter value of the next label, or `None` once exhausted.
    pub fn position(&self) -> Result<Option<u128>, Error> {
        let state = self.state.lock().map_err(|_| Error::StatePoisoned)?;
        Ok(*state)
    }

    /// Produces the next label.
    pub fn next_label(&self) -> Result<Label, Error> {
        let counter = self.reserve()?;

        // the counter value is ours alone; render it without holding the lock
        let mut label = String::with_capacity(self.prefix.len() + 8);
        label.push_str(&self.prefix);
        label.push_str(&self.alphabet.encode(counter));

        Ok(Label::from(label))
    }

    fn reserve(&self) -> Result<u128, Error> {
        let mut state = self.state.lock().map_err(|_| Error::StatePoisoned)?;
        let counter = state.ok_or(Error::Exhausted)?;

        *state = counter.checked_add(1);
        if state.is_none() {
            warn!(prefix = %self.prefix, "shared sequence exhausted");
        }

        Ok(counter)
    }
}

impl Generator for SharedSequence {
    type Output = Label;

    fn generate(&self) -> Result<Self::Output, Error> {
        self.next_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use uniseq_core::Charset;

    fn labels(generator: &SharedSequence, n: usize) -> Vec<String> {
        (0..n)
            .map(|_| generator.generate().unwrap().to_string())
            .collect()
    }

    #[test]
    fn produces_the_alphabet_sequence() {
        let generator = SharedSequence::from_alphabet(Alphabet::new(["x", "y", "z"]).unwrap());
        assert_eq!(
            labels(&generator, 10),
            ["x", "y", "z", "yx", "yy", "yz", "zx", "zy", "zz", "yxx"]
        );
    }

    #[test]
    fn invalid_symbols_surface_the_alphabet_error() {
        let err = SharedSequence::with_symbols(["a", "a"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Alphabet(uniseq_core::Error::DuplicateSymbol { first: 0, second: 1, .. })
        ));
        assert_eq!(err.to_string(), r#"duplicate symbol "a" at positions 0 and 1"#);

        assert!(SharedSequence::with_symbols(["a", "b"]).is_ok());
    }

    #[test]
    fn prefix_is_prepended() {
        let settings = GeneratorSettings::builder()
            .alphabet(Charset::AlphaUpper)
            .prefix("node-a-")
            .build();
        let generator = SharedSequence::new(settings);

        assert_eq!(labels(&generator, 2), ["node-a-A", "node-a-B"]);
        assert_eq!(generator.prefix(), "node-a-");
    }

    #[test]
    fn offset_sets_the_first_counter() {
        let settings = GeneratorSettings::builder()
            .alphabet(Charset::AlphaUpper)
            .offset(51)
            .build();
        let generator = SharedSequence::new(settings);

        assert_eq!(generator.position(), Ok(Some(51)));
        assert_eq!(labels(&generator, 2), ["BZ", "CA"]);
        assert_eq!(generator.position(), Ok(Some(53)));
    }

    #[test]
    fn exhaustion_is_reported() {
        let settings = GeneratorSettings::builder()
            .alphabet(Alphabet::new(["0", "1"]).unwrap())
            .offset(u128::MAX)
            .build();
        let generator = SharedSequence::new(settings);

        assert_eq!(generator.generate().unwrap(), "1".repeat(128).as_str());
        assert_eq!(generator.position(), Ok(None));
        assert_eq!(generator.generate(), Err(Error::Exhausted));
        assert_eq!(generator.generate(), Err(Error::Exhausted));
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let generator = Arc::new(SharedSequence::from_alphabet(Charset::Numeric));

        let poisoner = Arc::clone(&generator);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the state lock");
        })
        .join();

        assert_eq!(generator.generate(), Err(Error::StatePoisoned));
        assert_eq!(generator.position(), Err(Error::StatePoisoned));
    }

    #[test]
    fn generator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SharedSequence>();
    }
}
