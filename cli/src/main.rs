use std::fs;
use std::path::PathBuf;

use clap::Parser;
use n2m_core::LabelStyle;
use n2m_report::{
    OutputFormat, RenderConfig, RenderContext, ReportError, collect_reports, format_reports,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "n2m", version)]
#[command(about = "Merge nmap scan output into markdown notes for manual review")]
#[command(after_help = "Examples:\n  \
    n2m all-tcp.nmap\n  \
    n2m -o 10.10.11.174.md all-tcp.nmap top-1000-tcp-script-scan.nmap udp-1000.nmap\n  \
    n2m --header -o results.md *.nmap")]
struct Cli {
    /// nmap normal-output files (-oN) to merge.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Include a header with the host address.
    #[arg(long)]
    header: bool,
    /// Host shown in the header (default: detected from the scans).
    #[arg(long)]
    host: Option<String>,
    /// Output format.
    #[arg(long, value_enum, default_value = "markdown")]
    format: OutputFormat,
    /// YAML file with rendering options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Attach TCP techniques to the protocol, e.g. "TCP (SYN) Top 1000".
    #[arg(long)]
    inline_techniques: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ReportError> {
    let mut config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };
    if cli.inline_techniques {
        config.technique_style = LabelStyle::Inline;
    }

    let outcome = collect_reports(&cli.inputs, config.technique_style);
    for (_, err) in &outcome.failures {
        eprintln!("Error parsing {err}");
    }

    let detected_host = outcome.host.clone();
    let reports = outcome.into_reports()?;

    let host = match cli.host.or(detected_host) {
        Some(host) => host,
        None if cli.header => {
            let err = ReportError::MissingHostIdentifier;
            eprintln!("Warning: {err}, using '{}' in header", config.unknown_host);
            config.unknown_host.clone()
        }
        None => String::new(),
    };

    let ctx = RenderContext {
        include_header: cli.header,
        host,
        config,
    };
    let document = format_reports(&ctx, &reports, cli.format, PACKAGE_VERSION)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, document).map_err(|source| ReportError::OutputWriteFailure {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), reports = reports.len(), "wrote notes");
            let kind = match cli.format {
                OutputFormat::Markdown => "Markdown",
                OutputFormat::Json => "JSON",
                OutputFormat::Yaml => "YAML",
            };
            println!("{kind} written to {}", path.display());
        }
        None => print!("{document}"),
    }

    Ok(())
}
