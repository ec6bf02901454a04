//! Error types for procnet.

use thiserror::Error;

use crate::Stage;

/// Error type for procnet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The underlying stream failed while reading
    #[error("failed to read text: {0}")]
    Io(#[from] std::io::Error),

    /// A data row did not match the table grammar
    #[error("line {line}: {source}")]
    Format {
        /// 1-based physical line number, counting the header
        line: usize,
        #[source]
        source: LineError,
    },
}

impl Error {
    /// The decoding stage that failed, if this is a format error.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Error::Format { source, .. } => Some(source.stage),
            Error::Io(_) => None,
        }
    }

    /// The line the error refers to, if this is a format error.
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Format { line, .. } => Some(*line),
            Error::Io(_) => None,
        }
    }
}

/// Result type alias for procnet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A single row that failed to decode, tagged with the failing stage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to parse {stage}: {source}")]
pub struct LineError {
    pub stage: Stage,
    #[source]
    pub source: FormatError,
}

impl LineError {
    pub(crate) fn new(stage: Stage, source: FormatError) -> Self {
        Self { stage, source }
    }
}

/// Error type for token-level decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Row has fewer columns than the fixed layout
    #[error("expected at least {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },

    /// Row bytes are not UTF-8; holds the offset of the first bad byte
    #[error("row is not valid UTF-8 (invalid byte at offset {0})")]
    InvalidUtf8(usize),

    /// Row number is not `<digits>:`
    #[error("invalid row number: {0:?}")]
    InvalidRowNumber(String),

    /// Decimal column is not a base-10 integer of the right range
    #[error("invalid {field}: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// Address token is neither 13 (IPv4) nor 37 (IPv6) characters long
    #[error("invalid address length {0} (expected 13 or 37)")]
    InvalidAddressLength(usize),

    /// Address token has the right length but is not `<hex>:<hex>`
    #[error("malformed address: {0:?}")]
    InvalidAddress(String),

    /// State token is not exactly two hex digits
    #[error("malformed state: {0:?}")]
    InvalidState(String),
}
