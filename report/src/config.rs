//! Rendering configuration for generated notes.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the stock output.
//!
//! # Example YAML
//!
//! ```yaml
//! header_title: nmap
//! unknown_host: Unknown
//! notes_placeholder: Manual investigation notes for this port go here
//! technique_style: suffix
//! ```

use std::path::Path;

use n2m_core::LabelStyle;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default second header line.
pub const DEFAULT_HEADER_TITLE: &str = "nmap";
/// Host placeholder used when no host identifier was found.
pub const DEFAULT_UNKNOWN_HOST: &str = "Unknown";
/// Line emitted under every port heading.
pub const DEFAULT_NOTES_PLACEHOLDER: &str = "Manual investigation notes for this port go here";

/// Output settings loaded from YAML.
///
/// # Examples
///
/// ```
/// # use n2m_report::RenderConfig;
/// let config: RenderConfig = serde_yaml::from_str("header_title: recon").unwrap();
/// assert_eq!(config.header_title, "recon");
/// assert_eq!(config.unknown_host, "Unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Title printed below the host in the header block.
    pub header_title: String,
    /// Host shown in the header when none could be detected.
    pub unknown_host: String,
    /// Line printed under each port heading.
    pub notes_placeholder: String,
    /// Where TCP techniques go in scan labels.
    pub technique_style: LabelStyle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_title: DEFAULT_HEADER_TITLE.to_string(),
            unknown_host: DEFAULT_UNKNOWN_HOST.to_string(),
            notes_placeholder: DEFAULT_NOTES_PLACEHOLDER.to_string(),
            technique_style: LabelStyle::default(),
        }
    }
}

impl RenderConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigIo`](crate::ReportError::ConfigIo) if the file cannot
    /// be read, or [`Yaml`](crate::ReportError::Yaml) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_yaml() -> &'static str {
        r#"
header_title: recon
unknown_host: TBD
notes_placeholder: "- [ ] enumerate"
technique_style: inline
"#
    }

    #[test]
    fn test_deserialize_complete() {
        let config: RenderConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(config.header_title, "recon");
        assert_eq!(config.unknown_host, "TBD");
        assert_eq!(config.notes_placeholder, "- [ ] enumerate");
        assert_eq!(config.technique_style, LabelStyle::Inline);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: RenderConfig = serde_yaml::from_str("unknown_host: n/a").unwrap();
        assert_eq!(config.unknown_host, "n/a");
        assert_eq!(config.header_title, DEFAULT_HEADER_TITLE);
        assert_eq!(config.notes_placeholder, DEFAULT_NOTES_PLACEHOLDER);
        assert_eq!(config.technique_style, LabelStyle::Suffix);
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.yml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(RenderConfig::load(&path).unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("n2m.yml");
        std::fs::write(&path, sample_yaml()).unwrap();

        let expected: RenderConfig = serde_yaml::from_str(sample_yaml()).unwrap();
        assert_eq!(RenderConfig::load(&path).unwrap(), expected);
    }

    #[test]
    fn test_load_invalid_yaml_is_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "technique_style: sideways\n").unwrap();

        let err = RenderConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::ReportError::Yaml(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = RenderConfig::load("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, crate::ReportError::ConfigIo(_)));
    }
}
