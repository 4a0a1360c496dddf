//! Reading scan files and collecting reports.

use std::fs;
use std::path::{Path, PathBuf};

use n2m_core::{LabelStyle, ScanReport, classify};
use tracing::{debug, info};

use crate::error::{ReportError, Result};
use crate::host::extract_host;
use crate::parser::parse_report;

/// Reads and parses one scan file.
///
/// Invalid UTF-8 sequences are replaced rather than rejected. A transcript
/// without an invocation line gets an empty scan type.
///
/// # Errors
///
/// Returns [`ReportError::FileUnreadable`] when the file cannot be opened or
/// read.
pub fn parse_report_file(path: &Path, style: LabelStyle) -> Result<ScanReport> {
    let bytes = fs::read(path).map_err(|source| ReportError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let parsed = parse_report(&text);
    let scan_type = if parsed.command.is_empty() {
        String::new()
    } else {
        classify(&parsed.command, style)
    };
    let host = extract_host(&text, &path.to_string_lossy());

    debug!(
        path = %path.display(),
        scan_type = %scan_type,
        ports = parsed.ports.len(),
        "parsed scan report"
    );

    Ok(ScanReport {
        source: path.display().to_string(),
        scan_type,
        command: parsed.command,
        transcript: parsed.transcript,
        ports: parsed.ports,
        host,
    })
}

/// Aggregated output from a batch of scan files.
#[derive(Debug, Default)]
pub struct CollectOutcome {
    /// Successfully parsed reports, in input order.
    pub reports: Vec<ScanReport>,
    /// Files that were skipped, with the reason.
    pub failures: Vec<(PathBuf, ReportError)>,
    /// First host identifier found across the reports.
    pub host: Option<String>,
}

impl CollectOutcome {
    /// Returns the reports, or [`ReportError::NoUsableReports`] when none
    /// were produced.
    pub fn into_reports(self) -> Result<Vec<ScanReport>> {
        if self.reports.is_empty() {
            return Err(ReportError::NoUsableReports);
        }
        Ok(self.reports)
    }
}

/// Parses `paths` in order, skipping unreadable files.
///
/// The host identifier of the first report that has one is kept; later
/// files never replace it.
pub fn collect_reports<P: AsRef<Path>>(paths: &[P], style: LabelStyle) -> CollectOutcome {
    let mut outcome = CollectOutcome::default();

    for path in paths {
        let path = path.as_ref();
        match parse_report_file(path, style) {
            Ok(report) => {
                if outcome.host.is_none() {
                    outcome.host = report.host.clone();
                }
                outcome.reports.push(report);
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable scan file");
                outcome.failures.push((path.to_path_buf(), err));
            }
        }
    }

    info!(
        parsed = outcome.reports.len(),
        skipped = outcome.failures.len(),
        "collected scan reports"
    );
    outcome
}
