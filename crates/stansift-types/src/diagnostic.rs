use camino::Utf8PathBuf;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small: it maps cleanly to CI signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Map a checkstyle severity string to a CI signal.
    ///
    /// Anything unrecognized maps to `Error` so an unknown report dialect
    /// can never turn a gate green.
    pub fn from_checkstyle(s: &str) -> Severity {
        match s {
            "info" | "notice" => Severity::Info,
            "warning" => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// One finding from a static-analysis report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticRecord {
    /// Absolute path to the source file the finding applies to, resolved
    /// against the project root. `None` when the report names a file that
    /// does not exist under the root; the record is still kept.
    #[schemars(with = "Option<String>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<Utf8PathBuf>,

    /// 1-based line number. A reported `0` means "whole file" and is
    /// normalized to `1` by the parser.
    pub line: i32,

    /// 1-based column, or `-1` if absent or unparseable.
    pub column: i32,

    /// `"<severity>: <message>"` as composed by the parser.
    pub category: String,

    /// The raw message text.
    pub description: String,
}

impl DiagnosticRecord {
    /// Severity derived from the category prefix.
    pub fn severity(&self) -> Severity {
        let prefix = self.category.split(':').next().unwrap_or_default();
        Severity::from_checkstyle(prefix.trim())
    }
}
