//! CLI entry point for stansift.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. Ingestion and rendering live in the library crates.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use stansift_render::{render_github_annotations, render_markdown};
use stansift_report::{parse_report_file, ProjectRoot, ReportError};
use stansift_types::{DiagnosticsReport, ToolMeta, Verdict};

#[derive(Parser, Debug)]
#[command(
    name = "stansift",
    version,
    about = "Checkstyle XML report ingestion for PHP static-analysis tooling"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sanitize and parse an analyzer report, writing a diagnostics envelope.
    Ingest {
        /// Path to the checkstyle XML report (progress noise tolerated).
        #[arg(long)]
        report: Utf8PathBuf,

        /// Project root the report's file names resolve against.
        #[arg(long, default_value = ".")]
        project_root: Utf8PathBuf,

        /// Where to write the JSON diagnostics envelope.
        #[arg(long, default_value = "artifacts/stansift/diagnostics.json")]
        out: Utf8PathBuf,
    },

    /// Render Markdown from an existing diagnostics envelope.
    Md {
        /// Path to the JSON envelope file.
        #[arg(long, default_value = "artifacts/stansift/diagnostics.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (stdout if not specified).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing envelope.
    Annotations {
        /// Path to the JSON envelope file.
        #[arg(long, default_value = "artifacts/stansift/diagnostics.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit (GHA drops the rest anyway).
        #[arg(long, default_value = "10")]
        max: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let code = match cli.cmd {
        Commands::Ingest {
            report,
            project_root,
            out,
        } => cmd_ingest(report, project_root, out)?,
        Commands::Md { report, output } => cmd_md(report, output)?,
        Commands::Annotations { report, max } => cmd_annotations(report, max)?,
    };

    std::process::exit(code)
}

fn cmd_ingest(
    report: Utf8PathBuf,
    project_root: Utf8PathBuf,
    out: Utf8PathBuf,
) -> anyhow::Result<i32> {
    let root = ProjectRoot::new(project_root);

    let records = match parse_report_file(&report, &root) {
        Ok(records) => records,
        Err(err @ (ReportError::Io(_) | ReportError::Xml(_) | ReportError::Empty)) => {
            tracing::info!(report = %report, error = %err, "report not ingestable");
            eprintln!("stansift: {err}");
            return Ok(2);
        }
        Err(err @ ReportError::Malformed(_)) => {
            eprintln!("stansift: {err}");
            return Ok(2);
        }
    };

    let envelope = DiagnosticsReport::new(
        ToolMeta {
            name: "stansift".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        records,
    );

    write_envelope(&out, &envelope)?;

    println!(
        "stansift: {} diagnostics ({} error, {} warning, {} info) -> {}",
        envelope.diagnostics.len(),
        envelope.counts.error,
        envelope.counts.warning,
        envelope.counts.info,
        out
    );

    Ok(verdict_exit_code(envelope.verdict))
}

fn cmd_md(report: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<i32> {
    let envelope = read_envelope(&report)?;
    let md = render_markdown(&envelope);
    match output {
        Some(path) => write_text(&path, &md)?,
        None => print!("{md}"),
    }
    Ok(0)
}

fn cmd_annotations(report: Utf8PathBuf, max: usize) -> anyhow::Result<i32> {
    let envelope = read_envelope(&report)?;
    for line in render_github_annotations(&envelope, max) {
        println!("{line}");
    }
    Ok(0)
}

fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass | Verdict::Warn => 0,
        Verdict::Fail => 1,
    }
}

fn read_envelope(path: &Utf8PathBuf) -> anyhow::Result<DiagnosticsReport> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    let envelope: DiagnosticsReport =
        serde_json::from_str(&text).with_context(|| format!("parse envelope {}", path))?;
    Ok(envelope)
}

fn write_envelope(path: &Utf8PathBuf, envelope: &DiagnosticsReport) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(envelope).context("serialize envelope")?;
    write_text(path, &format!("{json}\n"))
}

fn write_text(path: &Utf8PathBuf, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write {}", path))?;
    Ok(())
}
