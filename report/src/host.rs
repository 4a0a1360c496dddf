//! Subject host detection.

use std::sync::LazyLock;

use regex::Regex;

// SAFETY: These regexes are compile-time constants and are validated by tests.
static REPORT_IP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Nmap scan report for (?:.*?\()?(\d+\.\d+\.\d+\.\d+)\)?")
        .expect("static regex must compile")
});
static REPORT_HOSTNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Nmap scan report for (\S+)").expect("static regex must compile")
});
static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+\.\d+\.\d+)").expect("static regex must compile"));

/// Finds the scanned host in a transcript, falling back to the file name.
///
/// Lines are checked in order; the first `Nmap scan report for` line wins.
/// On that line an IPv4 address is preferred over the hostname (so
/// `for box.htb (10.10.11.5)` yields the address).
///
/// # Examples
///
/// ```
/// use n2m_report::extract_host;
///
/// let text = "Nmap scan report for box.htb (10.10.11.5)\nHost is up.";
/// assert_eq!(extract_host(text, "full.nmap").as_deref(), Some("10.10.11.5"));
///
/// assert_eq!(extract_host("no report line", "10.10.11.7-udp.nmap").as_deref(), Some("10.10.11.7"));
/// assert_eq!(extract_host("no report line", "udp.nmap"), None);
/// ```
pub fn extract_host(text: &str, file_name: &str) -> Option<String> {
    for line in text.lines() {
        if let Some(caps) = REPORT_IP_RE.captures(line) {
            return Some(caps[1].to_string());
        }
        if let Some(caps) = REPORT_HOSTNAME_RE.captures(line) {
            return Some(caps[1].to_string());
        }
    }

    IPV4_RE
        .captures(file_name)
        .map(|caps| caps[1].to_string())
}
