//! Port-range resolution for scan labels.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::flags::FlagSet;

// SAFETY: These regexes are compile-time constants and are validated by tests.
static TOP_PORTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--top-ports\s+(\d+)").expect("static regex must compile"));
static PORT_SPEC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)-p\s*(\S+)").expect("static regex must compile"));
static PORT_FLAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)-p").expect("static regex must compile"));

/// The port range a command scans.
///
/// # Examples
///
/// ```
/// use n2m_core::{FlagSet, PortRange};
///
/// let cmd = "nmap -sS -p- 10.0.0.1";
/// let range = PortRange::resolve(cmd, &FlagSet::parse(cmd));
/// assert_eq!(range, PortRange::All);
/// assert_eq!(range.to_string(), "All Ports");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortRange {
    /// `-p-`
    All,
    /// `--top-ports N` or `-F` (top 100). Digits are kept verbatim.
    Top(String),
    /// `-p N` with a single port.
    Single(String),
    /// `-p` with a list or range.
    Custom,
    /// No port option given; nmap scans its top 1000.
    Default,
}

impl PortRange {
    /// Resolves the range for `command`. The first matching rule wins:
    /// `-p-`, `--top-ports N`, standalone `-F`, explicit `-p`, default.
    pub fn resolve(command: &str, flags: &FlagSet) -> Self {
        if command.contains("-p-") {
            return Self::All;
        }

        if let Some(caps) = TOP_PORTS_RE.captures(command) {
            return Self::Top(caps[1].to_string());
        }

        if flags.standalone.fast {
            return Self::Top("100".to_string());
        }

        if let Some(caps) = PORT_SPEC_RE.captures(command) {
            let spec = &caps[1];
            if spec.contains('-') || spec.contains(',') {
                return Self::Custom;
            }
            return Self::Single(spec.to_string());
        }
        if PORT_FLAG_RE.is_match(command) {
            return Self::Custom;
        }

        Self::Default
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All Ports"),
            Self::Top(n) => write!(f, "Top {n}"),
            Self::Single(port) => write!(f, "Port {port}"),
            Self::Custom => f.write_str("Custom Ports"),
            Self::Default => f.write_str("Top 1000"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(command: &str) -> String {
        PortRange::resolve(command, &FlagSet::parse(command)).to_string()
    }

    #[test]
    fn test_default_range() {
        assert_eq!(resolve("nmap 10.0.0.1"), "Top 1000");
        assert_eq!(resolve(""), "Top 1000");
    }

    #[test]
    fn test_all_ports_beats_top_ports() {
        assert_eq!(resolve("nmap --top-ports 50 -p- 10.0.0.1"), "All Ports");
        assert_eq!(resolve("nmap -p- --top-ports 50 10.0.0.1"), "All Ports");
    }

    #[test]
    fn test_top_ports_kept_verbatim() {
        assert_eq!(resolve("nmap --top-ports 0020 10.0.0.1"), "Top 0020");
    }

    #[test]
    fn test_top_ports_beats_fast() {
        assert_eq!(resolve("nmap -F --top-ports 25 10.0.0.1"), "Top 25");
    }

    #[test]
    fn test_fast_scan() {
        assert_eq!(resolve("nmap -F 10.0.0.1"), "Top 100");
    }

    #[test]
    fn test_fast_beats_explicit_ports() {
        assert_eq!(resolve("nmap -F -p 22 10.0.0.1"), "Top 100");
    }

    #[test]
    fn test_single_port() {
        assert_eq!(resolve("nmap -p 22 10.0.0.1"), "Port 22");
        assert_eq!(resolve("nmap -p443 10.0.0.1"), "Port 443");
    }

    #[test]
    fn test_lists_and_ranges_are_custom() {
        assert_eq!(resolve("nmap -p 80,443,8080 10.0.0.1"), "Custom Ports");
        assert_eq!(resolve("nmap -p 1-1024 10.0.0.1"), "Custom Ports");
        assert_eq!(resolve("nmap -pU:53,T:80 10.0.0.1"), "Custom Ports");
    }

    #[test]
    fn test_trailing_port_flag_without_spec() {
        assert_eq!(resolve("nmap 10.0.0.1 -p"), "Custom Ports");
    }

    #[test]
    fn test_top_ports_without_number_does_not_become_port() {
        assert_eq!(resolve("nmap --top-ports localhost"), "Top 1000");
    }

    #[test]
    fn test_uppercase_p_is_not_a_port_flag() {
        assert_eq!(resolve("nmap -Pn 10.0.0.1"), "Top 1000");
    }
}
