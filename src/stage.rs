//! Decoding stages reported by parse errors.

use std::fmt;

/// Stage of row decoding that produced a format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Splitting the row into columns and reading the decimal fields
    Row,
    /// Decoding the local `address:port` column
    LocalAddress,
    /// Decoding the remote `address:port` column
    RemoteAddress,
    /// Decoding the `st` column
    State,
}

impl Stage {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Row => "row",
            Stage::LocalAddress => "local address",
            Stage::RemoteAddress => "remote address",
            Stage::State => "state",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
