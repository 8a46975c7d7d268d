use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// File could not be read.
    Io(String),
    /// JSON / TOML parse or deserialization error.
    Parse(String),
    /// Settings file extension is neither `.json` nor `.toml`.
    UnsupportedFormat(String),
    /// A declarative border entry names neither a range nor a cell.
    InvalidEntry { index: usize, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "settings parse error: {msg}"),
            Self::UnsupportedFormat(ext) => write!(f, "unsupported settings format: '{ext}'"),
            Self::InvalidEntry { index, reason } => {
                write!(f, "customBorders[{index}]: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
