//! Connection-table records and the collection returned by a parse.

use serde::Serialize;
use std::net::{IpAddr, SocketAddr};
use std::ops::Index;
use std::str::FromStr;

use crate::decode::{parse_addr, parse_state, tokenize_row};
use crate::error::LineError;
use crate::Stage;

/// One decoded connection-table row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    /// Row index as printed by the kernel (`sl` column)
    pub number: u64,
    pub local_addr: IpAddr,
    pub local_port: u16,
    pub remote_addr: IpAddr,
    pub remote_port: u16,
    /// Raw connection state code
    pub state: u8,
    pub uid: u32,
    /// Socket inode; `0` when no inode is associated
    pub inode: u64,
}

impl Entry {
    /// Local address and port as a socket address.
    pub fn local_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.local_addr, self.local_port)
    }

    /// Remote address and port as a socket address.
    pub fn remote_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.remote_addr, self.remote_port)
    }

    /// Whether the row references a socket inode.
    pub fn has_inode(&self) -> bool {
        self.inode != 0
    }

    /// Whether the row came from a 16-byte (IPv6) address column.
    pub fn is_ipv6(&self) -> bool {
        self.local_addr.is_ipv6()
    }
}

impl FromStr for Entry {
    type Err = LineError;

    /// Decode a single data row (without the table header).
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let row = tokenize_row(line).map_err(|e| LineError::new(Stage::Row, e))?;
        let (local_addr, local_port) =
            parse_addr(row.local).map_err(|e| LineError::new(Stage::LocalAddress, e))?;
        let (remote_addr, remote_port) =
            parse_addr(row.remote).map_err(|e| LineError::new(Stage::RemoteAddress, e))?;
        let state = parse_state(row.state).map_err(|e| LineError::new(Stage::State, e))?;

        Ok(Entry {
            number: row.number,
            local_addr,
            local_port,
            remote_addr,
            remote_port,
            state,
            uid: row.uid,
            inode: row.inode,
        })
    }
}

/// Ordered collection of entries produced by one parse.
///
/// Query operations never modify the collection; [`Entries::filter`] returns
/// a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entries(Vec<Entry>);

impl Entries {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    /// Get the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.0.get(index)
    }

    /// View the entries as a slice.
    pub fn as_slice(&self) -> &[Entry] {
        &self.0
    }

    /// Take the entries out as a vector.
    pub fn into_vec(self) -> Vec<Entry> {
        self.0
    }

    /// Index of the first entry whose local port is `port`.
    ///
    /// # Example
    /// ```
    /// let table = "sl local_address rem_address st\n\
    ///     0: 0100007F:1F90 00000000:0000 0A 00000000:00000000 00:00000000 00000000 0 0 101\n";
    /// let entries = procnet::parse(table.as_bytes()).unwrap();
    ///
    /// assert_eq!(entries.find_by_local_port(8080), Some(0));
    /// assert_eq!(entries.find_by_local_port(9999), None);
    /// ```
    pub fn find_by_local_port(&self, port: u16) -> Option<usize> {
        self.0.iter().position(|e| e.local_port == port)
    }

    /// Index of the first entry whose remote port is `port`.
    pub fn find_by_remote_port(&self, port: u16) -> Option<usize> {
        self.0.iter().position(|e| e.remote_port == port)
    }

    /// Collect the entries matching `predicate`, keeping their order.
    pub fn filter<F>(&self, mut predicate: F) -> Entries
    where
        F: FnMut(&Entry) -> bool,
    {
        self.0.iter().filter(|&e| predicate(e)).cloned().collect()
    }
}

impl From<Vec<Entry>> for Entries {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<Entry> for Entries {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Entries {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Index<usize> for Entries {
    type Output = Entry;

    fn index(&self, index: usize) -> &Entry {
        &self.0[index]
    }
}
