//! Line-oriented parser for nmap normal (`-oN`) output.
//!
//! The parser pulls three things out of a transcript:
//!
//! - the invocation line (`# Nmap 7.94 scan initiated ... as: nmap ...`),
//! - port rows from the `PORT STATE SERVICE [VERSION]` table(s),
//! - the transcript itself, with trailing whitespace removed.
//!
//! Only rows whose state is exactly `open` are kept.

use std::sync::LazyLock;

use n2m_core::{Port, Protocol};
use regex::Regex;
use tracing::debug;

/// Regex patterns for nmap normal output.
static PATTERNS: LazyLock<ReportPatterns> = LazyLock::new(ReportPatterns::new);

struct ReportPatterns {
    command: Regex,
    port_row: Regex,
}

impl ReportPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            command: Regex::new(r"# Nmap .* scan initiated .* as: (.*)")
                .expect("static regex must compile"),
            // 22/tcp   open  ssh     OpenSSH 9.6p1 Ubuntu 3ubuntu13 (Ubuntu Linux; protocol 2.0)
            port_row: Regex::new(r"^(\d+)/(tcp|udp)\s+(\w+)\s+(\S+)(?:\s+(.*))?$")
                .expect("static regex must compile"),
        }
    }
}

/// Lines that close a port table.
const PORT_SECTION_TERMINATORS: &[&str] = &["Service Info:", "Host script results:", "# Nmap done"];

/// Raw extraction result for one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReport {
    /// Invocation command; empty when no invocation line was found.
    pub command: String,
    /// Transcript with trailing whitespace trimmed.
    pub transcript: String,
    /// Open ports in transcript order.
    pub ports: Vec<Port>,
}

/// Parses an nmap normal-output transcript.
///
/// # Examples
///
/// ```
/// use n2m_report::parse_report;
///
/// let text = concat!(
///     "# Nmap 7.94 scan initiated Mon Jan  1 10:00:00 2024 as: nmap -sV -oN web.nmap 10.10.11.5\n",
///     "Nmap scan report for 10.10.11.5\n",
///     "PORT   STATE  SERVICE VERSION\n",
///     "22/tcp open   ssh     OpenSSH 8.9p1\n",
///     "80/tcp closed http\n",
/// );
///
/// let parsed = parse_report(text);
/// assert_eq!(parsed.command, "nmap -sV -oN web.nmap 10.10.11.5");
/// assert_eq!(parsed.ports.len(), 1);
/// assert_eq!(parsed.ports[0].version.as_deref(), Some("OpenSSH 8.9p1"));
/// ```
pub fn parse_report(text: &str) -> ParsedReport {
    let patterns = &*PATTERNS;
    let mut parsed = ParsedReport::default();
    let mut in_port_section = false;

    for line in text.lines() {
        if let Some(caps) = patterns.command.captures(line) {
            parsed.command = caps[1].trim().to_string();
        }

        if line.starts_with("PORT") && line.contains("STATE") {
            in_port_section = true;
            continue;
        }

        if in_port_section && ends_port_section(line) {
            in_port_section = false;
        }

        if !in_port_section {
            continue;
        }

        if let Some(port) = parse_port_row(patterns, line) {
            parsed.ports.push(port);
        }
    }

    parsed.transcript = text.trim_end().to_string();
    parsed
}

fn ends_port_section(line: &str) -> bool {
    line.is_empty()
        || PORT_SECTION_TERMINATORS
            .iter()
            .any(|prefix| line.starts_with(prefix))
}

fn parse_port_row(patterns: &ReportPatterns, line: &str) -> Option<Port> {
    let caps = patterns.port_row.captures(line)?;

    let state = &caps[3];
    if state != "open" {
        debug!(row = line, state, "skipping non-open port");
        return None;
    }

    let Ok(number) = caps[1].parse::<u16>() else {
        debug!(row = line, "skipping port number outside u16 range");
        return None;
    };
    let protocol = Protocol::parse(&caps[2])?;

    let port = Port::open(number, protocol, caps[4].trim());
    Some(match caps.get(5) {
        Some(version) => port.with_version(version.as_str()),
        None => port,
    })
}
