//! Core types and scan classification for nmap report notes.
//!
//! This crate holds everything that does not touch the filesystem:
//!
//! - [`FlagSet`]: the `-s` group letters and standalone flags of a command.
//! - [`PortRange`]: the port range a command scans.
//! - [`determine_scan_type`] / [`classify`]: the human-readable scan label.
//! - [`Port`] and [`ScanReport`]: the parsed report model.
//! - [`merge_ports`]: the deduplicated, sorted port inventory.
//!
//! All functions are total: unknown or missing flags degrade to documented
//! defaults instead of errors.
//!
//! # Example
//!
//! ```
//! use n2m_core::*;
//!
//! let label = determine_scan_type("sudo nmap -sUT -sCO -sV --top-ports 1000 localhost");
//! assert_eq!(
//!     label,
//!     "UDP + TCP + IP Protocol Top 1000, Connect Scan, Script Scan, Version Detection"
//! );
//!
//! let flags = FlagSet::parse("nmap -F -O 10.0.0.1");
//! assert_eq!(PortRange::resolve("nmap -F -O 10.0.0.1", &flags).to_string(), "Top 100");
//! ```

mod classify;
pub mod flags;
mod merge;
mod range;
mod types;

pub use classify::{TCP_TECHNIQUES, build_label, classify, determine_scan_type};
pub use flags::{FlagSet, LetterSet, StandaloneFlags};
pub use merge::{compare_ports, merge_port_lists, merge_ports};
pub use range::PortRange;
pub use types::*;
