//! Error types for report processing.
//!
//! Covers the failure modes of reading scan files, loading configuration and
//! writing the rendered document. Parsing and classification never fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while turning scan files into notes.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A scan file could not be opened or read. Recovered per file.
    #[error("{}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Every input file failed; there is nothing to render.
    #[error("No valid nmap scans found")]
    NoUsableReports,

    /// No host identifier was found in any input.
    #[error("No IP address found in nmap files")]
    MissingHostIdentifier,

    /// The rendered document could not be written.
    #[error("Error writing to file {}: {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be read.
    #[error("config error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience alias for results with [`ReportError`].
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_unreadable_names_the_file() {
        let err = ReportError::FileUnreadable {
            path: PathBuf::from("missing.nmap"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "missing.nmap: no such file");
    }

    #[test]
    fn test_run_level_messages() {
        assert_eq!(ReportError::NoUsableReports.to_string(), "No valid nmap scans found");
        assert_eq!(
            ReportError::MissingHostIdentifier.to_string(),
            "No IP address found in nmap files"
        );
        let err = ReportError::OutputWriteFailure {
            path: PathBuf::from("/nope/out.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error writing to file /nope/out.md: denied");
    }
}
