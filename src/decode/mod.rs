//! Field decoders for connection-table rows.
//!
//! Each data row of a `/proc/net/tcp`-style table has a fixed column layout:
//!
//! ```text
//!   sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode
//!    0: 0100007F:0277 00000000:0000 0A 00000000:00000000 00:00000000 00000000     0        0 21345 ...
//! ```
//!
//! Addresses are hex byte pairs followed by a 4-digit hex port. An address of
//! 8 digits is IPv4 and one of 32 digits is IPv6; the token width is the only
//! family marker. Bytes are kept in the order they appear in the text.

mod addr;
mod row;
mod state;

pub use addr::parse_addr;
pub use row::{tokenize_row, RawRow, COLUMN_COUNT};
pub use state::parse_state;
