//! Port inventory merging across scan reports.
//!
//! Several scans of the same host usually report overlapping ports. The
//! merged inventory keeps one record per `(number, protocol)`:
//!
//! - the first record seen wins,
//! - unless it has no version and a later record does, in which case the
//!   later record replaces it.
//!
//! # Example
//!
//! ```
//! use n2m_core::{Port, Protocol, merge_port_lists};
//!
//! let quick = vec![Port::open(80, Protocol::Tcp, "http")];
//! let detailed = vec![Port::open(80, Protocol::Tcp, "http").with_version("Apache 2.4")];
//!
//! let merged = merge_port_lists([quick.as_slice(), detailed.as_slice()]);
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].version.as_deref(), Some("Apache 2.4"));
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::{Port, Protocol, ScanReport};

/// Merges the open ports of all `reports` into a sorted inventory.
pub fn merge_ports(reports: &[ScanReport]) -> Vec<Port> {
    merge_port_lists(reports.iter().map(|report| report.ports.as_slice()))
}

/// Merges port lists in order and sorts the result with [`compare_ports`].
pub fn merge_port_lists<'a, I>(lists: I) -> Vec<Port>
where
    I: IntoIterator<Item = &'a [Port]>,
{
    let mut by_key: HashMap<(u16, Protocol), usize> = HashMap::new();
    let mut merged: Vec<Port> = Vec::new();

    for port in lists.into_iter().flatten() {
        match by_key.get(&port.key()) {
            Some(&idx) => {
                if !merged[idx].has_version() && port.has_version() {
                    merged[idx] = port.clone();
                }
            }
            None => {
                by_key.insert(port.key(), merged.len());
                merged.push(port.clone());
            }
        }
    }

    merged.sort_by(compare_ports);
    merged
}

/// Orders ports by number, then by protocol name (`TCP` before `UDP`).
pub fn compare_ports(a: &Port, b: &Port) -> Ordering {
    a.number
        .cmp(&b.number)
        .then_with(|| a.protocol.as_str().cmp(b.protocol.as_str()))
}
