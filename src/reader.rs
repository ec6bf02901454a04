//! Line reading for connection tables.

use std::io::{self, BufRead, Split};

use crate::error::FormatError;

/// One data line of a table, as read from the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLine {
    /// 1-based physical line number, counting the header
    pub number: usize,
    bytes: Vec<u8>,
}

impl DataLine {
    /// The line as trimmed text.
    ///
    /// Bytes that are not UTF-8 make the row malformed, not the stream.
    pub fn text(&self) -> Result<&str, FormatError> {
        std::str::from_utf8(&self.bytes)
            .map(str::trim)
            .map_err(|e| FormatError::InvalidUtf8(e.valid_up_to()))
    }

    /// The raw line without its terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Lazy iterator over the data lines of a table.
///
/// The header is always skipped, whatever it contains; it is never decoded.
pub struct DataLines<R> {
    lines: Split<R>,
    line_number: usize,
    header_skipped: bool,
}

/// Iterate the data lines of a table, skipping its header.
pub fn data_lines<R: BufRead>(reader: R) -> DataLines<R> {
    DataLines {
        lines: reader.split(b'\n'),
        line_number: 0,
        header_skipped: false,
    }
}

impl<R: BufRead> Iterator for DataLines<R> {
    type Item = io::Result<DataLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.header_skipped {
            self.header_skipped = true;
            if let Err(e) = self.lines.next()? {
                return Some(Err(e));
            }
            self.line_number += 1;
        }

        let line = self.lines.next()?;
        self.line_number += 1;
        let number = self.line_number;

        Some(line.map(|mut bytes| {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            DataLine { number, bytes }
        }))
    }
}
