//! Report type definitions for parsed scan results.
//!
//! The types here are produced once per input file and never mutated
//! afterwards. They are designed for serialization with [`serde`] so the
//! structured output formats can emit them directly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport protocol of a scanned port.
///
/// # Examples
///
/// ```
/// use n2m_core::Protocol;
///
/// assert_eq!(Protocol::parse("tcp"), Some(Protocol::Tcp));
/// assert_eq!(Protocol::Udp.to_string(), "UDP");
/// assert_eq!(Protocol::parse("sctp"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// Parses a protocol name case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("tcp") {
            Some(Self::Tcp)
        } else if raw.eq_ignore_ascii_case("udp") {
            Some(Self::Udp)
        } else {
            None
        }
    }

    /// Uppercase display name (`TCP` / `UDP`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "TCP",
            Self::Udp => "UDP",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single open port row from a scan transcript.
///
/// # Examples
///
/// ```
/// use n2m_core::{Port, Protocol};
///
/// let port = Port::open(22, Protocol::Tcp, "ssh").with_version("OpenSSH 9.6");
/// assert_eq!(port.state, "open");
/// assert!(port.has_version());
/// assert_eq!(port.key(), (22, Protocol::Tcp));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Port number.
    pub number: u16,
    /// Transport protocol.
    pub protocol: Protocol,
    /// Reported state; only `open` rows are kept by the parser.
    pub state: String,
    /// Service name as reported (may carry a trailing `?`).
    pub service: String,
    /// Version banner, when service detection produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Port {
    /// Creates an open port without version information.
    pub fn open(number: u16, protocol: Protocol, service: &str) -> Self {
        Self {
            number,
            protocol,
            state: "open".to_string(),
            service: service.to_string(),
            version: None,
        }
    }

    /// Sets the version banner. Blank values are stored as `None`.
    pub fn with_version(mut self, version: &str) -> Self {
        let trimmed = version.trim();
        self.version = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self
    }

    /// Returns `true` when a non-empty version banner is present.
    pub fn has_version(&self) -> bool {
        self.version.as_deref().is_some_and(|v| !v.is_empty())
    }

    /// Deduplication key used when merging scans.
    pub fn key(&self) -> (u16, Protocol) {
        (self.number, self.protocol)
    }

    /// Service name prepared for headings.
    ///
    /// Empty names become `unknown`, `tcpwrapped` is kept verbatim and a
    /// single trailing `?` (nmap's "uncertain" marker) is removed.
    ///
    /// ```
    /// use n2m_core::{Port, Protocol};
    ///
    /// assert_eq!(Port::open(80, Protocol::Tcp, "http?").display_service(), "http");
    /// assert_eq!(Port::open(81, Protocol::Tcp, "").display_service(), "unknown");
    /// assert_eq!(Port::open(82, Protocol::Tcp, "tcpwrapped").display_service(), "tcpwrapped");
    /// ```
    pub fn display_service(&self) -> &str {
        match self.service.as_str() {
            "" => "unknown",
            "tcpwrapped" => "tcpwrapped",
            other => other.strip_suffix('?').unwrap_or(other),
        }
    }
}

/// Parsed result for one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Path the report was read from.
    pub source: String,
    /// Scan type label inferred from the command line.
    pub scan_type: String,
    /// Invocation command line; empty when the transcript did not carry one.
    pub command: String,
    /// Full transcript text, trailing whitespace trimmed.
    pub transcript: String,
    /// Open ports in transcript order.
    pub ports: Vec<Port>,
    /// Host identifier found in this file, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl ScanReport {
    /// Returns `true` when the transcript carried an invocation line.
    pub fn has_command(&self) -> bool {
        !self.command.is_empty()
    }
}

/// How TCP techniques are placed in a scan type label.
///
/// # Examples
///
/// ```
/// use n2m_core::LabelStyle;
///
/// assert_eq!(LabelStyle::default(), LabelStyle::Suffix);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Techniques get their own segment: `TCP Top 1000, SYN Scan`.
    #[default]
    Suffix,
    /// Techniques are attached to the TCP entry: `TCP (SYN) Top 1000`.
    Inline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parse_is_case_insensitive() {
        assert_eq!(Protocol::parse("TCP"), Some(Protocol::Tcp));
        assert_eq!(Protocol::parse("Udp"), Some(Protocol::Udp));
        assert_eq!(Protocol::parse(""), None);
    }

    #[test]
    fn test_protocol_serializes_uppercase() {
        let json = serde_json::to_string(&Protocol::Tcp).unwrap();
        assert_eq!(json, "\"TCP\"");
    }

    #[test]
    fn test_blank_version_is_none() {
        let port = Port::open(80, Protocol::Tcp, "http").with_version("   ");
        assert_eq!(port.version, None);
        assert!(!port.has_version());
    }

    #[test]
    fn test_display_service_strips_only_trailing_marker() {
        let port = Port::open(8080, Protocol::Tcp, "http-proxy?");
        assert_eq!(port.display_service(), "http-proxy");
        let port = Port::open(8443, Protocol::Tcp, "https??");
        assert_eq!(port.display_service(), "https?");
    }

    #[test]
    fn test_label_style_serde_names() {
        let style: LabelStyle = serde_json::from_str("\"inline\"").unwrap();
        assert_eq!(style, LabelStyle::Inline);
        assert_eq!(serde_json::to_string(&LabelStyle::Suffix).unwrap(), "\"suffix\"");
    }
}
