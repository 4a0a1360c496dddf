//! Output formatting for merged scan notes.

use chrono::Utc;
use n2m_core::{Port, ScanReport, merge_ports};
use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::Result;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Yaml,
}

/// Document-level settings for one render.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Emit the `# <host>` / `# <title>` header block.
    pub include_header: bool,
    /// Host shown in the header.
    pub host: String,
    pub config: RenderConfig,
}

/// Structured form of the notes for JSON/YAML output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportBundle {
    pub tool_version: String,
    /// ISO-8601 timestamp for bundle creation.
    pub generated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub scans: Vec<ScanReport>,
    /// Merged, deduplicated and sorted open ports.
    pub ports: Vec<Port>,
}

impl ReportBundle {
    /// Builds a bundle, merging the ports of all `scans`.
    pub fn new(tool_version: &str, host: Option<String>, scans: Vec<ScanReport>) -> Self {
        let ports = merge_ports(&scans);
        Self {
            tool_version: tool_version.to_string(),
            generated_at: Utc::now().to_rfc3339(),
            host,
            scans,
            ports,
        }
    }
}

/// Renders `reports` in the requested format.
pub fn format_reports(
    ctx: &RenderContext,
    reports: &[ScanReport],
    format: OutputFormat,
    tool_version: &str,
) -> Result<String> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(ctx, reports)),
        OutputFormat::Json => {
            let bundle = ReportBundle::new(tool_version, bundle_host(ctx), reports.to_vec());
            Ok(serde_json::to_string_pretty(&bundle)?)
        }
        OutputFormat::Yaml => {
            let bundle = ReportBundle::new(tool_version, bundle_host(ctx), reports.to_vec());
            Ok(serde_yaml::to_string(&bundle)?)
        }
    }
}

fn bundle_host(ctx: &RenderContext) -> Option<String> {
    (!ctx.host.is_empty()).then(|| ctx.host.clone())
}

/// Renders the markdown notes document.
///
/// Layout: optional header, one `##` section per report (command block and
/// transcript block), then one `#` section per merged open port.
///
/// # Examples
///
/// ```
/// use n2m_core::{Port, Protocol, ScanReport};
/// use n2m_report::{RenderContext, render_markdown};
///
/// let report = ScanReport {
///     source: "quick.nmap".into(),
///     scan_type: "TCP Top 1000".into(),
///     command: "nmap 10.0.0.1".into(),
///     transcript: "PORT STATE SERVICE\n22/tcp open ssh".into(),
///     ports: vec![Port::open(22, Protocol::Tcp, "ssh")],
///     host: None,
/// };
///
/// let md = render_markdown(&RenderContext::default(), &[report]);
/// assert!(md.starts_with("## TCP Top 1000\n\n```bash\nnmap 10.0.0.1\n```\n\n"));
/// assert!(md.contains("# 22/tcp (ssh)\n"));
/// ```
pub fn render_markdown(ctx: &RenderContext, reports: &[ScanReport]) -> String {
    let mut out = String::new();

    if ctx.include_header {
        out.push_str(&format!("# {}\n\n", ctx.host));
        out.push_str(&format!("# {}\n", ctx.config.header_title));
    }

    for report in reports {
        out.push_str(&format!("## {}\n\n", report.scan_type));

        if report.has_command() {
            out.push_str("```bash\n");
            out.push_str(&report.command);
            out.push_str("\n```\n\n");
        }

        out.push_str("```\n");
        out.push_str(&report.transcript);
        out.push_str("\n```\n\n");
    }

    for port in merge_ports(reports) {
        out.push_str(&format!(
            "# {}/{} ({})\n",
            port.number,
            port.protocol.as_str().to_lowercase(),
            port.display_service()
        ));

        if let Some(version) = port.version.as_deref().filter(|v| !v.is_empty()) {
            out.push_str(&format!("**Version:** {version}\n\n"));
        }

        out.push_str(&ctx.config.notes_placeholder);
        out.push_str("\n\n");
    }

    out
}
