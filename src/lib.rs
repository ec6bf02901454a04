//! procnet - parser for the Linux `/proc/net/tcp` family of connection tables.
//!
//! The kernel exposes its socket tables (`/proc/net/tcp`, `tcp6`, `udp`,
//! `udp6`) as whitespace-separated text with hex-encoded addresses. This crate
//! turns such a table into typed [`Entry`] records and offers simple queries
//! over the resulting [`Entries`].
//!
//! # Features
//!
//! - **IPv4 and IPv6**: address family inferred from the column width
//! - **Raw fields**: state, uid and inode are kept as the kernel printed them
//! - **All-or-nothing**: the first malformed row fails the whole parse
//! - **Staged errors**: format errors name the line and the failing column
//!
//! # Quick Start
//!
//! ```no_run
//! use std::fs::File;
//!
//! let entries = procnet::parse(File::open("/proc/net/tcp")?)?;
//!
//! if let Some(i) = entries.find_by_local_port(22) {
//!     println!("sshd socket inode: {}", entries[i].inode);
//! }
//!
//! // State 0x0A is LISTEN in the kernel's numbering
//! let listening = entries.filter(|e| e.state == 0x0A);
//! println!("{} listening sockets", listening.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Opening the table is left to the caller; any [`std::io::Read`] works.
//!
//! # Address Byte Order
//!
//! Each hex pair of an address column becomes one address byte in the order
//! it appears. No host/network order conversion is applied, so on
//! little-endian hosts the IPv4 loopback column `0100007F` decodes to
//! `1.0.0.127`.

mod entry;
mod error;
mod parser;
mod stage;

pub mod decode;
pub mod reader;

// Re-export core types
pub use entry::{Entries, Entry};
pub use error::{Error, FormatError, LineError, Result};
pub use stage::Stage;

// Re-export the parser
pub use parser::{parse, TableParser};
