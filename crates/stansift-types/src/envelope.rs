use crate::{DiagnosticRecord, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for the emitted diagnostics envelope.
pub const SCHEMA_DIAGNOSTICS_V1: &str = "stansift.diagnostics.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl VerdictCounts {
    pub fn from_records(records: &[DiagnosticRecord]) -> Self {
        let mut counts = VerdictCounts::default();
        for r in records {
            match r.severity() {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn verdict(&self) -> Verdict {
        if self.error > 0 {
            Verdict::Fail
        } else if self.warning > 0 {
            Verdict::Warn
        } else {
            Verdict::Pass
        }
    }
}

/// The envelope written by `stansift ingest` and consumed by the renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiagnosticsReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub generated_at: OffsetDateTime,
    pub verdict: Verdict,
    pub counts: VerdictCounts,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl DiagnosticsReport {
    pub fn new(tool: ToolMeta, diagnostics: Vec<DiagnosticRecord>) -> Self {
        let counts = VerdictCounts::from_records(&diagnostics);
        DiagnosticsReport {
            schema: SCHEMA_DIAGNOSTICS_V1.to_string(),
            tool,
            generated_at: OffsetDateTime::now_utc(),
            verdict: counts.verdict(),
            counts,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str) -> DiagnosticRecord {
        DiagnosticRecord {
            file_path: None,
            line: 1,
            column: -1,
            category: category.to_string(),
            description: "m".to_string(),
        }
    }

    #[test]
    fn verdict_follows_worst_severity() {
        let counts = VerdictCounts::from_records(&[record("info: a"), record("warning: b")]);
        assert_eq!(counts.verdict(), Verdict::Warn);

        let counts = VerdictCounts::from_records(&[record("warning: b"), record("error: c")]);
        assert_eq!(counts.verdict(), Verdict::Fail);

        let counts = VerdictCounts::from_records(&[]);
        assert_eq!(counts.verdict(), Verdict::Pass);
    }

    #[test]
    fn envelope_round_trips_through_json() {
        let report = DiagnosticsReport::new(
            ToolMeta {
                name: "stansift".to_string(),
                version: "0.0.0".to_string(),
            },
            vec![record("error: boom")],
        );
        let json = serde_json::to_string(&report).expect("serialize");
        let back: DiagnosticsReport = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.schema, SCHEMA_DIAGNOSTICS_V1);
        assert_eq!(back.verdict, Verdict::Fail);
        assert_eq!(back.diagnostics.len(), 1);
    }
}
