//! Scan type classification.
//!
//! Turns an nmap command line into a label such as
//! `UDP + TCP Top 1000, Connect Scan, Script Scan, Version Detection`.
//!
//! The label is built from four parts, always in this order:
//!
//! 1. protocols joined with ` + `, followed by the port range,
//! 2. TCP techniques (`SYN`, `Connect`, ...) in [`TCP_TECHNIQUES`] order,
//! 3. features (`Script Scan`, `Version Detection`, `OS Detection`),
//! 4. `OS + Version Detection` when both of those features are present.
//!
//! Ordering comes from the tables below, never from the command line.

use crate::flags::FlagSet;
use crate::range::PortRange;
use crate::types::LabelStyle;

/// TCP technique letters and their display names, in label order.
pub const TCP_TECHNIQUES: [(char, &str); 8] = [
    ('S', "SYN"),
    ('T', "Connect"),
    ('A', "ACK"),
    ('N', "Null"),
    ('F', "FIN"),
    ('X', "Xmas"),
    ('W', "Window"),
    ('M', "Maimon"),
];

const TCP_LETTERS: [char; 8] = ['S', 'T', 'A', 'N', 'F', 'X', 'W', 'M'];

const SCRIPT_SCAN: &str = "Script Scan";
const VERSION_DETECTION: &str = "Version Detection";
const OS_DETECTION: &str = "OS Detection";
const OS_AND_VERSION: &str = "OS + Version Detection";

/// Classifies `command` using the default [`LabelStyle::Suffix`] layout.
///
/// # Examples
///
/// ```
/// use n2m_core::determine_scan_type;
///
/// assert_eq!(determine_scan_type("nmap 192.168.1.1"), "TCP Top 1000");
/// assert_eq!(determine_scan_type("nmap -sS 192.168.1.1"), "TCP Top 1000, SYN Scan");
/// assert_eq!(
///     determine_scan_type("nmap -A 192.168.1.1"),
///     "TCP Top 1000, Script Scan, OS + Version Detection"
/// );
/// assert_eq!(determine_scan_type("nmap -p 22 192.168.1.1"), "TCP Port 22");
/// ```
pub fn determine_scan_type(command: &str) -> String {
    classify(command, LabelStyle::Suffix)
}

/// Classifies `command` with an explicit technique layout.
///
/// # Examples
///
/// ```
/// use n2m_core::{LabelStyle, classify};
///
/// assert_eq!(classify("nmap -sS -sT 10.0.0.1", LabelStyle::Inline), "TCP (SYN/Connect) Top 1000");
/// assert_eq!(classify("nmap -sS -sT 10.0.0.1", LabelStyle::Suffix), "TCP Top 1000, SYN/Connect Scan");
/// ```
pub fn classify(command: &str, style: LabelStyle) -> String {
    let flags = FlagSet::parse(command);
    let range = PortRange::resolve(command, &flags);
    build_label(&flags, &range, style)
}

/// Assembles the label from already extracted flags and range.
pub fn build_label(flags: &FlagSet, range: &PortRange, style: LabelStyle) -> String {
    let protocols = protocols(flags);
    let techniques = techniques(flags);
    let features = combine_os_and_version(features(flags));

    let mut segments: Vec<String> = Vec::new();

    if protocols.is_empty() {
        segments.push(format!("TCP {range}"));
    } else {
        let rendered: Vec<String> = protocols
            .iter()
            .map(|&protocol| match style {
                LabelStyle::Inline if protocol == "TCP" && !techniques.is_empty() => {
                    format!("TCP ({})", techniques.join("/"))
                }
                _ => protocol.to_string(),
            })
            .collect();
        segments.push(format!("{} {range}", rendered.join(" + ")));
    }

    if style == LabelStyle::Suffix && !techniques.is_empty() {
        segments.push(format!("{} Scan", techniques.join("/")));
    }

    segments.extend(features.into_iter().map(String::from));
    segments.join(", ")
}

fn protocols(flags: &FlagSet) -> Vec<&'static str> {
    let group = &flags.group;
    let has_tcp_technique = group.contains_any(&TCP_LETTERS);
    let mut protocols = Vec::new();

    if group.contains('U') {
        protocols.push("UDP");
        if has_tcp_technique {
            protocols.push("TCP");
        }
    } else if has_tcp_technique {
        protocols.push("TCP");
    }

    if group.contains('Y') {
        protocols.push("SCTP");
    }
    if group.contains('Z') {
        protocols.push("SCTP Cookie Echo");
    }
    if group.contains('O') {
        protocols.push("IP Protocol");
    }

    // Version or script detection without an explicit technique runs over TCP.
    if protocols.is_empty() && group.contains_any(&['V', 'C']) {
        protocols.push("TCP");
    }

    protocols
}

fn techniques(flags: &FlagSet) -> Vec<&'static str> {
    TCP_TECHNIQUES
        .iter()
        .filter(|(letter, _)| flags.group.contains(*letter))
        .map(|&(_, name)| name)
        .collect()
}

fn features(flags: &FlagSet) -> Vec<&'static str> {
    let group = &flags.group;
    let standalone = &flags.standalone;
    let mut features = Vec::new();

    if group.contains('C') {
        features.push(SCRIPT_SCAN);
    }
    if group.contains('V') {
        features.push(VERSION_DETECTION);
    }
    if standalone.os_detection || standalone.aggressive {
        features.push(OS_DETECTION);
    }
    if standalone.aggressive {
        if !group.contains('C') {
            features.push(SCRIPT_SCAN);
        }
        if !group.contains('V') {
            features.push(VERSION_DETECTION);
        }
    }

    features
}

fn combine_os_and_version(features: Vec<&'static str>) -> Vec<&'static str> {
    if !(features.contains(&OS_DETECTION) && features.contains(&VERSION_DETECTION)) {
        return features;
    }
    let mut combined: Vec<&'static str> = features
        .into_iter()
        .filter(|&f| f != OS_DETECTION && f != VERSION_DETECTION)
        .collect();
    combined.push(OS_AND_VERSION);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_scenarios() {
        let cases = [
            ("nmap -sS 192.168.1.1", "TCP Top 1000, SYN Scan"),
            (
                "sudo nmap -sUT -sCO -sV --top-ports 1000 localhost",
                "UDP + TCP + IP Protocol Top 1000, Connect Scan, Script Scan, Version Detection",
            ),
            ("nmap -sUT 192.168.1.1", "UDP + TCP Top 1000, Connect Scan"),
            ("nmap -sCV 192.168.1.1", "TCP Top 1000, Script Scan, Version Detection"),
            ("nmap -sS -p- 192.168.1.1", "TCP All Ports, SYN Scan"),
            ("nmap -F -O 192.168.1.1", "TCP Top 100, OS Detection"),
            (
                "nmap -sA -sN -sF -sX --top-ports 500 192.168.1.1",
                "TCP Top 500, ACK/Null/FIN/Xmas Scan",
            ),
            ("nmap -A 192.168.1.1", "TCP Top 1000, Script Scan, OS + Version Detection"),
            ("nmap -sU -sV --top-ports 100 192.168.1.1", "UDP Top 100, Version Detection"),
            ("nmap -sY -sZ 192.168.1.1", "SCTP + SCTP Cookie Echo Top 1000"),
            ("nmap -p 80,443,8080 192.168.1.1", "TCP Custom Ports"),
            ("nmap -p 22 192.168.1.1", "TCP Port 22"),
            ("nmap -sV 192.168.1.1", "TCP Top 1000, Version Detection"),
            ("nmap -sT -sC --top-ports 20 192.168.1.1", "TCP Top 20, Connect Scan, Script Scan"),
        ];

        for (command, expected) in cases {
            assert_eq!(determine_scan_type(command), expected, "command: {command}");
        }
    }

    #[test]
    fn test_every_group_letter_combined() {
        assert_eq!(
            determine_scan_type("nmap -sSUACNFXWMVO -p- --script=vuln 192.168.1.1"),
            "UDP + TCP + IP Protocol All Ports, SYN/ACK/Null/FIN/Xmas/Window/Maimon Scan, \
             Script Scan, Version Detection"
        );
    }

    #[test]
    fn test_no_flags_is_default_tcp() {
        assert_eq!(determine_scan_type(""), "TCP Top 1000");
        assert_eq!(determine_scan_type("nmap scanme.nmap.org"), "TCP Top 1000");
    }

    #[test]
    fn test_technique_order_ignores_command_order() {
        assert_eq!(
            determine_scan_type("nmap -sM -sW -sT -sS 10.0.0.1"),
            "TCP Top 1000, SYN/Connect/Window/Maimon Scan"
        );
    }

    #[test]
    fn test_aggressive_with_explicit_version_has_no_duplicates() {
        assert_eq!(
            determine_scan_type("nmap -A -sV 10.0.0.1"),
            "TCP Top 1000, Script Scan, OS + Version Detection"
        );
        assert_eq!(
            determine_scan_type("nmap -A -sC -sV 10.0.0.1"),
            "TCP Top 1000, Script Scan, OS + Version Detection"
        );
    }

    #[test]
    fn test_os_and_version_combine_at_end() {
        assert_eq!(
            determine_scan_type("nmap -sSCV -O -p- 10.0.0.1"),
            "TCP All Ports, SYN Scan, Script Scan, OS + Version Detection"
        );
    }

    #[test]
    fn test_os_detection_alone_is_not_combined() {
        assert_eq!(
            determine_scan_type("nmap -sS -O 10.0.0.1"),
            "TCP Top 1000, SYN Scan, OS Detection"
        );
    }

    #[test]
    fn test_ip_protocol_scan_is_not_os_detection() {
        assert_eq!(determine_scan_type("nmap -sO 10.0.0.1"), "IP Protocol Top 1000");
    }

    #[test]
    fn test_udp_only_has_no_tcp() {
        assert_eq!(determine_scan_type("nmap -sU 10.0.0.1"), "UDP Top 1000");
    }

    #[test]
    fn test_script_scan_implies_tcp() {
        assert!(determine_scan_type("nmap -sC 10.0.0.1").starts_with("TCP "));
    }

    #[test]
    fn test_inline_style_matches_protocol_entry() {
        assert_eq!(
            classify("nmap -sUS -sV 10.0.0.1", LabelStyle::Inline),
            "UDP + TCP (SYN) Top 1000, Version Detection"
        );
        assert_eq!(classify("nmap -sU 10.0.0.1", LabelStyle::Inline), "UDP Top 1000");
        assert_eq!(classify("nmap -A 10.0.0.1", LabelStyle::Inline), determine_scan_type("nmap -A 10.0.0.1"));
    }

    #[test]
    fn test_build_label_with_prebuilt_parts() {
        let flags = FlagSet::parse("-sS");
        let label = build_label(&flags, &PortRange::Single("443".into()), LabelStyle::Suffix);
        assert_eq!(label, "TCP Port 443, SYN Scan");
    }
}
