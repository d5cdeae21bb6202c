//! Analyzer toolchain configuration.
//!
//! This crate is intentionally IO-free: it parses configuration provided as
//! strings and exposes read-only views over the resulting object graph.

#![forbid(unsafe_code)]

mod model;

pub use model::{
    AnalysisSet, AnalyzerConfigV1, ConfigView, LibraryNode, RuntimeSet, ToolsConfig,
};

/// Parse `stansift.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AnalyzerConfigV1> {
    let cfg: AnalyzerConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
