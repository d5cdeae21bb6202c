//! Stable DTOs used across the stansift workspace.
//!
//! This crate is intentionally boring:
//! - the diagnostic record produced by report ingestion
//! - the emitted report envelope and verdict types
//! - canonical project-relative path handling

#![forbid(unsafe_code)]

pub mod diagnostic;
pub mod envelope;
pub mod path;

pub use diagnostic::{DiagnosticRecord, Severity};
pub use envelope::{
    DiagnosticsReport, ToolMeta, Verdict, VerdictCounts, SCHEMA_DIAGNOSTICS_V1,
};
pub use path::ProjectPath;
