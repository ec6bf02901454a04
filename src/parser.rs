//! Connection-table parser.

use std::io::{BufReader, Read};

use crate::entry::{Entries, Entry};
use crate::error::{Error, LineError, Result};
use crate::reader::data_lines;
use crate::Stage;

/// Parser for `/proc/net/{tcp,tcp6,udp,udp6}`-style tables.
pub struct TableParser;

impl TableParser {
    /// Parse a whole table from a reader.
    ///
    /// The first line is treated as the header and skipped. Parsing stops at
    /// the first malformed row and returns no entries in that case.
    pub fn parse<R: Read>(reader: R) -> Result<Entries> {
        let mut entries = Vec::new();

        for line in data_lines(BufReader::new(reader)) {
            let line = line?;
            let entry = line
                .text()
                .map_err(|e| LineError::new(Stage::Row, e))
                .and_then(|text| text.parse::<Entry>())
                .map_err(|source| Error::Format {
                    line: line.number,
                    source,
                })?;
            entries.push(entry);
        }

        Ok(Entries::from(entries))
    }

    /// Parse a whole table held in memory.
    pub fn parse_str(text: &str) -> Result<Entries> {
        Self::parse(text.as_bytes())
    }
}

/// Parse a table from a reader. See [`TableParser::parse`].
pub fn parse<R: Read>(reader: R) -> Result<Entries> {
    TableParser::parse(reader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use std::io::{self, Cursor};
    use std::net::{IpAddr, Ipv4Addr};

    const HEADER: &str = "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode";

    fn row(number: u64, local: &str, remote: &str, state: &str, inode: u64) -> String {
        format!(
            "  {}: {} {} {} 00000000:00000000 00:00000000 00000000  1000        0 {} 1 0000000000000000 100 0 0 10 0",
            number, local, remote, state, inode
        )
    }

    #[test]
    fn test_header_only() {
        let entries = TableParser::parse_str(&format!("{}\n", HEADER)).unwrap();
        assert!(entries.is_empty());

        let entries = TableParser::parse_str("").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_parse_rows_in_order() {
        let text = format!(
            "{}\n{}\n{}\n{}\n",
            HEADER,
            row(3, "7F000001:1F90", "00000000:0000", "0A", 300),
            row(1, "0100007F:0016", "0A00000A:C350", "01", 100),
            row(3, "7F000001:1F90", "7F000001:D000", "06", 0),
        );

        let entries = TableParser::parse_str(&text).unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries.iter().map(|e| e.number).collect::<Vec<_>>(),
            vec![3, 1, 3]
        );
        assert_eq!(entries[0].local_addr, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(entries[0].local_port, 8080);
        assert_eq!(entries[1].remote_port, 50000);
        assert_eq!(entries[1].state, 1);
        assert_eq!(entries[2].state, 6);
        assert_eq!(entries[2].inode, 0);
        assert!(entries.iter().all(|e| e.uid == 1000));
    }

    #[test]
    fn test_failure_is_atomic() {
        let text = format!(
            "{}\n{}\n{}\n",
            HEADER,
            row(0, "7F000001:1F90", "00000000:0000", "0A", 1),
            row(1, "7F000001:1F90", "00000000:0000", "ZZ", 2),
        );

        let err = TableParser::parse_str(&text).unwrap_err();

        assert_eq!(err.line(), Some(3));
        assert_eq!(err.stage(), Some(Stage::State));
        match err {
            Error::Format { source, .. } => {
                assert_eq!(source.source, FormatError::InvalidState("ZZ".to_string()))
            }
            Error::Io(e) => panic!("unexpected io error: {}", e),
        }
    }

    #[test]
    fn test_stops_at_first_failure() {
        let text = format!(
            "{}\n{}\n{}\n",
            HEADER,
            row(0, "7F000001:1F9", "00000000:0000", "0A", 1),
            row(1, "7F000001:1F90", "00000000:0000", "ZZ", 2),
        );

        let err = TableParser::parse_str(&text).unwrap_err();

        assert_eq!(err.line(), Some(2));
        assert_eq!(err.stage(), Some(Stage::LocalAddress));
    }

    #[test]
    fn test_remote_address_stage() {
        let text = format!(
            "{}\n{}\n",
            HEADER,
            row(0, "7F000001:1F90", "00000000:00000", "0A", 1),
        );

        let err = parse(text.as_bytes()).unwrap_err();
        assert_eq!(err.stage(), Some(Stage::RemoteAddress));
    }

    #[test]
    fn test_blank_data_line_is_row_error() {
        let text = format!(
            "{}\n\n{}\n",
            HEADER,
            row(0, "7F000001:1F90", "00000000:0000", "0A", 1)
        );

        let err = parse(text.as_bytes()).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.stage(), Some(Stage::Row));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = format!(
            "{}\r\n{}\r\n",
            HEADER,
            row(0, "7F000001:1F90", "00000000:0000", "0A", 1)
        );

        let entries = parse(text.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].inode, 1);
    }

    #[test]
    fn test_non_utf8_header_is_skipped() {
        let mut text = b"  sl \xff local_address rem_address\n".to_vec();
        text.extend_from_slice(row(0, "7F000001:1F90", "00000000:0000", "0A", 1).as_bytes());
        text.push(b'\n');

        let entries = parse(&text[..]).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].local_port, 8080);
    }

    #[test]
    fn test_non_utf8_row_is_format_error() {
        let mut text = format!("{}\n", HEADER).into_bytes();
        text.extend_from_slice(b"   0: 7F000001:1F90 \xff 0A 0:0 0:0 0 0 0 1\n");

        let err = parse(&text[..]).unwrap_err();

        assert_eq!(err.line(), Some(2));
        assert_eq!(err.stage(), Some(Stage::Row));
        match err {
            Error::Format { source, .. } => {
                assert_eq!(source.source, FormatError::InvalidUtf8(20))
            }
            Error::Io(e) => panic!("unexpected io error: {}", e),
        }
    }

    /// Serves its bytes, then fails every read.
    struct BrokenStream(Cursor<Vec<u8>>);

    impl Read for BrokenStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_stream_failure_discards_decoded_rows() {
        let text = format!(
            "{}\n{}\n{}\n",
            HEADER,
            row(0, "7F000001:1F90", "00000000:0000", "0A", 1),
            row(1, "7F000001:0016", "00000000:0000", "0A", 2),
        );

        let err = parse(BrokenStream(Cursor::new(text.into_bytes()))).unwrap_err();

        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::ConnectionReset),
            Error::Format { line, .. } => panic!("unexpected format error on line {}", line),
        }
    }
}
