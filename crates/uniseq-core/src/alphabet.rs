use crate::error::{Error, Result};
use crate::radix;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Smallest number of symbols an alphabet may hold.
pub const MIN_SYMBOLS: usize = 2;
/// Largest number of symbols an alphabet may hold.
pub const MAX_SYMBOLS: usize = 36;

const NUMERIC: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

const ALPHA_UPPER: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

const ALPHA_LOWER: &[&str] = &[
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// An ordered set of distinct symbols used as the digits of a positional
/// notation.
///
/// The symbol at index `i` stands for digit `i`. Symbols are arbitrary
/// strings and may be longer than one character; they are never sorted or
/// otherwise reinterpreted. Cloning shares the underlying table.
///
/// Distinct symbols keep the counter-to-label mapping injective as long as
/// the symbol set is prefix-free (which every single-character alphabet is).
/// Multi-character symbols such as `["a", "aa"]` are accepted, but their
/// concatenations can collide.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<SmolStr>", into = "Vec<SmolStr>")]
pub struct Alphabet {
    symbols: Arc<[SmolStr]>,
}

impl Alphabet {
    /// Builds an alphabet from `2..=36` pairwise distinct symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use uniseq_core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["x", "y", "z"]).unwrap();
    /// assert_eq!(alphabet.len(), 3);
    /// assert!(Alphabet::new(["x"]).is_err());
    /// ```
    pub fn new<I, S>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        let symbols: Vec<SmolStr> = symbols.into_iter().map(Into::into).collect();

        if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&symbols.len()) {
            return Err(Error::InvalidAlphabetSize {
                min: MIN_SYMBOLS,
                max: MAX_SYMBOLS,
                got: symbols.len(),
            });
        }

        for (second, symbol) in symbols.iter().enumerate() {
            if let Some(first) = symbols[..second].iter().position(|s| s == symbol) {
                return Err(Error::DuplicateSymbol {
                    symbol: symbol.clone(),
                    first,
                    second,
                });
            }
        }

        Ok(Self {
            symbols: symbols.into(),
        })
    }

    /// Decimal digits `0-9`.
    pub fn numeric() -> Self {
        Self::from_table(NUMERIC)
    }

    /// Uppercase latin letters `A-Z`.
    pub fn alpha_upper() -> Self {
        Self::from_table(ALPHA_UPPER)
    }

    /// Lowercase latin letters `a-z`.
    pub fn alpha_lower() -> Self {
        Self::from_table(ALPHA_LOWER)
    }

    /// Digits followed by uppercase letters, 36 symbols.
    pub fn alpha_num_upper() -> Self {
        Self::from_tables(&[NUMERIC, ALPHA_UPPER])
    }

    /// Digits followed by lowercase letters, 36 symbols.
    pub fn alpha_num_lower() -> Self {
        Self::from_tables(&[NUMERIC, ALPHA_LOWER])
    }

    // built-in tables are distinct and within bounds; see the charset tests
    fn from_table(table: &'static [&'static str]) -> Self {
        Self::from_tables(&[table])
    }

    fn from_tables(tables: &[&'static [&'static str]]) -> Self {
        Self {
            symbols: tables
                .iter()
                .flat_map(|&table| table.iter().copied())
                .map(SmolStr::new_static)
                .collect(),
        }
    }

    /// Number of symbols, which is also the radix of the notation.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; an alphabet holds at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol standing for `digit`.
    pub fn symbol(&self, digit: usize) -> Option<&str> {
        self.symbols.get(digit).map(SmolStr::as_str)
    }

    /// Iterates the symbols in digit order.
    pub fn symbols(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.symbols.iter().map(SmolStr::as_str)
    }

    /// Renders `value` in this alphabet's positional notation.
    ///
    /// Values below [`len`](Self::len) map to a single symbol; larger values
    /// never start with the symbol at index 0.
    ///
    /// ```
    /// use uniseq_core::Alphabet;
    ///
    /// let upper = Alphabet::alpha_upper();
    /// assert_eq!(upper.encode(0), "A");
    /// assert_eq!(upper.encode(26), "BA");
    /// ```
    pub fn encode(&self, value: u128) -> String {
        let digits = radix::digits(value, self.len());
        let mut out = String::with_capacity(digits.len());
        for digit in digits {
            out.push_str(&self.symbols[digit]);
        }
        out
    }

    /// Parses a label produced by [`encode`](Self::encode) back into its
    /// counter value.
    ///
    /// Symbols are matched greedily, longest first, so the result is exact
    /// for prefix-free alphabets. Returns `None` for empty input, text that
    /// is not a concatenation of symbols, a multi-symbol label that starts
    /// with the index-0 symbol, or a value beyond `u128::MAX`.
    pub fn decode(&self, label: &str) -> Option<u128> {
        let mut digits = Vec::new();
        let mut rest = label;
        while !rest.is_empty() {
            let (digit, symbol) = self
                .symbols
                .iter()
                .enumerate()
                .filter(|(_, symbol)| !symbol.is_empty() && rest.starts_with(symbol.as_str()))
                .max_by_key(|(_, symbol)| symbol.len())?;
            digits.push(digit);
            rest = &rest[symbol.len()..];
        }

        match digits.as_slice() {
            [] => None,
            [0, _, ..] => None,
            digits => radix::value_of(digits, self.len()),
        }
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Alphabet").field(&self.symbols).finish()
    }
}

impl TryFrom<Vec<SmolStr>> for Alphabet {
    type Error = Error;

    fn try_from(symbols: Vec<SmolStr>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<SmolStr> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.to_vec()
    }
}

impl From<Charset> for Alphabet {
    fn from(charset: Charset) -> Self {
        charset.alphabet()
    }
}

/// The built-in alphabets, addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    Numeric,
    AlphaUpper,
    AlphaLower,
    AlphaNumUpper,
    AlphaNumLower,
}

impl Charset {
    pub const ALL: [Charset; 5] = [
        Charset::Numeric,
        Charset::AlphaUpper,
        Charset::AlphaLower,
        Charset::AlphaNumUpper,
        Charset::AlphaNumLower,
    ];

    pub fn alphabet(self) -> Alphabet {
        match self {
            Charset::Numeric => Alphabet::numeric(),
            Charset::AlphaUpper => Alphabet::alpha_upper(),
            Charset::AlphaLower => Alphabet::alpha_lower(),
            Charset::AlphaNumUpper => Alphabet::alpha_num_upper(),
            Charset::AlphaNumLower => Alphabet::alpha_num_lower(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Charset::Numeric => "numeric",
            Charset::AlphaUpper => "alpha-upper",
            Charset::AlphaLower => "alpha-lower",
            Charset::AlphaNumUpper => "alpha-num-upper",
            Charset::AlphaNumLower => "alpha-num-lower",
        }
    }
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a charset name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown charset {0:?}")]
pub struct UnknownCharset(pub String);

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Charset::ALL
            .into_iter()
            .find(|charset| charset.name() == s)
            .ok_or_else(|| UnknownCharset(s.to_string()))
    }
}
