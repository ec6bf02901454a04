//! Row tokenization.

use std::str::FromStr;

use crate::error::FormatError;

/// Number of leading columns the row layout defines, up to and including `inode`.
pub const COLUMN_COUNT: usize = 10;

/// A data row split into its positional columns.
///
/// The address and state columns are borrowed from the line and left for the
/// field decoders; the decimal columns are already converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRow<'a> {
    pub number: u64,
    pub local: &'a str,
    pub remote: &'a str,
    pub state: &'a str,
    pub uid: u32,
    pub inode: u64,
}

/// Split a trimmed data row into its columns.
///
/// Columns are:
/// `sl: local remote st tx_queue:rx_queue tr:tm->when retrnsmt uid timeout inode`.
/// Kernel tables append more columns after `inode` (ref count, socket pointer,
/// timers); those are ignored.
pub fn tokenize_row(line: &str) -> Result<RawRow<'_>, FormatError> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < COLUMN_COUNT {
        return Err(FormatError::ColumnCount {
            expected: COLUMN_COUNT,
            found: columns.len(),
        });
    }

    let number = columns[0]
        .strip_suffix(':')
        .and_then(|digits| parse_decimal::<u64>(digits))
        .ok_or_else(|| FormatError::InvalidRowNumber(columns[0].to_string()))?;

    // columns[4..=6] are tx/rx queue, timer and retransmit count; [8] is timeout
    Ok(RawRow {
        number,
        local: columns[1],
        remote: columns[2],
        state: columns[3],
        uid: decimal_column("uid", columns[7])?,
        inode: decimal_column("inode", columns[9])?,
    })
}

fn decimal_column<T: FromStr>(field: &'static str, token: &str) -> Result<T, FormatError> {
    parse_decimal(token).ok_or_else(|| FormatError::InvalidInteger {
        field,
        value: token.to_string(),
    })
}

/// Parse a plain base-10 integer: digits only, no sign.
fn parse_decimal<T: FromStr>(token: &str) -> Option<T> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
