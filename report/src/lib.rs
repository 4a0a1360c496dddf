//! Turning nmap scan files into review notes.
//!
//! This crate reads nmap normal-output transcripts, classifies each scan's
//! command line with [`n2m_core`], and renders the merged result.
//!
//! # Main entry points
//!
//! - [`collect_reports`]: parse a batch of files, skipping unreadable ones.
//! - [`parse_report`]: parse transcript text that is already in memory.
//! - [`render_markdown`] / [`format_reports`]: render the notes document.
//!
//! # Example
//!
//! ```
//! use n2m_core::{ScanReport, determine_scan_type};
//! use n2m_report::{RenderContext, parse_report, render_markdown};
//!
//! let text = concat!(
//!     "# Nmap 7.94 scan initiated Mon Jan  1 10:00:00 2024 as: nmap -sS 10.0.0.1\n",
//!     "PORT   STATE SERVICE\n",
//!     "80/tcp open  http\n",
//! );
//! let parsed = parse_report(text);
//! let report = ScanReport {
//!     source: "syn.nmap".into(),
//!     scan_type: determine_scan_type(&parsed.command),
//!     command: parsed.command,
//!     transcript: parsed.transcript,
//!     ports: parsed.ports,
//!     host: None,
//! };
//!
//! let md = render_markdown(&RenderContext::default(), &[report]);
//! assert!(md.starts_with("## TCP Top 1000, SYN Scan\n"));
//! assert!(md.contains("# 80/tcp (http)\n"));
//! ```

pub mod collect;
pub mod config;
pub mod error;
pub mod host;
pub mod output;
pub mod parser;

pub use collect::{CollectOutcome, collect_reports, parse_report_file};
pub use config::RenderConfig;
pub use error::{ReportError, Result};
pub use host::extract_host;
pub use output::{OutputFormat, RenderContext, ReportBundle, format_reports, render_markdown};
pub use parser::{ParsedReport, parse_report};
