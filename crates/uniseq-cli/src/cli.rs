use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use uniseq_core::{Alphabet, Charset};

pub const CHARSET_ENV: &str = "UNISEQ_CHARSET";
pub const SYMBOLS_ENV: &str = "UNISEQ_SYMBOLS";
pub const COUNT_ENV: &str = "UNISEQ_COUNT";
pub const OFFSET_ENV: &str = "UNISEQ_OFFSET";
pub const PREFIX_ENV: &str = "UNISEQ_PREFIX";
pub const FORMAT_ENV: &str = "UNISEQ_FORMAT";
pub const LOG_FORMAT_ENV: &str = "UNISEQ_LOG_FORMAT";

pub const DEFAULT_COUNT: u64 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CharsetArg {
    #[value(name = "numeric")]
    Numeric,
    #[value(name = "alpha-upper")]
    AlphaUpper,
    #[value(name = "alpha-lower")]
    AlphaLower,
    #[value(name = "alpha-num-upper")]
    AlphaNumUpper,
    #[value(name = "alpha-num-lower")]
    AlphaNumLower,
}

impl From<CharsetArg> for Charset {
    fn from(value: CharsetArg) -> Self {
        match value {
            CharsetArg::Numeric => Charset::Numeric,
            CharsetArg::AlphaUpper => Charset::AlphaUpper,
            CharsetArg::AlphaLower => Charset::AlphaLower,
            CharsetArg::AlphaNumUpper => Charset::AlphaNumUpper,
            CharsetArg::AlphaNumLower => Charset::AlphaNumLower,
        }
    }
}

impl Display for CharsetArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&Charset::from(*self), f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One label per line.
    #[value(name = "plain")]
    Plain,
    /// A single JSON array of strings.
    #[value(name = "json")]
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "uniseq", about = "Print a run of unique, ordered labels")]
pub struct CLI {
    /// Built-in alphabet to draw symbols from.
    #[arg(
        long,
        env = CHARSET_ENV,
        value_enum,
        default_value_t = CharsetArg::AlphaLower
    )]
    pub charset: CharsetArg,

    /// Custom comma-separated symbols; overrides --charset.
    #[arg(long, env = SYMBOLS_ENV, value_delimiter = ',')]
    pub symbols: Option<Vec<String>>,

    /// Number of labels to print.
    #[arg(short = 'n', long, env = COUNT_ENV, default_value_t = DEFAULT_COUNT)]
    pub count: u64,

    /// Counter value of the first label.
    #[arg(long, env = OFFSET_ENV, default_value_t = 0)]
    pub offset: u128,

    /// Prepended to every label.
    #[arg(long, env = PREFIX_ENV, default_value = "")]
    pub prefix: String,

    #[arg(
        long,
        env = FORMAT_ENV,
        value_enum,
        default_value_t = OutputFormat::Plain
    )]
    pub format: OutputFormat,

    /// Log line format on stderr; filter with RUST_LOG.
    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,
}

impl CLI {
    /// The alphabet selected by `--symbols`, falling back to `--charset`.
    pub fn alphabet(&self) -> Result<Alphabet, uniseq_core::Error> {
        match &self.symbols {
            Some(symbols) => Alphabet::new(symbols.iter().map(String::as_str)),
            None => Ok(Charset::from(self.charset).alphabet()),
        }
    }
}
