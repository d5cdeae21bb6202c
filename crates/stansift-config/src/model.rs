use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Read-only views over an analyzer toolchain configuration graph.
///
/// The graph itself is populated by external loading logic (config files,
/// host-provided defaults); consumers only ever read through this trait.
pub trait ConfigView {
    /// Library/include nodes the analyzer should know about.
    fn libraries(&self) -> &[LibraryNode];

    /// PHP runtime settings.
    fn runtime(&self) -> &RuntimeSet;

    /// Analysis-level settings.
    fn analysis(&self) -> &AnalysisSet;

    /// Tool invocation settings.
    fn tools(&self) -> &ToolsConfig;
}

/// `stansift.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalyzerConfigV1 {
    /// Optional schema string for tooling (`stansift.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub libraries: Vec<LibraryNode>,

    #[serde(default)]
    pub runtime: RuntimeSet,

    #[serde(default)]
    pub analysis: AnalysisSet,

    #[serde(default)]
    pub tools: ToolsConfig,
}

impl ConfigView for AnalyzerConfigV1 {
    fn libraries(&self) -> &[LibraryNode] {
        &self.libraries
    }

    fn runtime(&self) -> &RuntimeSet {
        &self.runtime
    }

    fn analysis(&self) -> &AnalysisSet {
        &self.analysis
    }

    fn tools(&self) -> &ToolsConfig {
        &self.tools
    }
}

/// One named library with the file sets the analyzer should index.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LibraryNode {
    pub name: String,

    /// Source roots or archives, project-relative.
    #[serde(default)]
    pub files: Vec<String>,

    /// Optional documentation locations.
    #[serde(default)]
    pub docs: Vec<String>,
}

/// PHP runtime settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuntimeSet {
    /// Interpreter binary; resolved from `PATH` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpreter: Option<String>,

    /// Language version the project targets (e.g. `8.3`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Extra interpreter flags.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Analysis-level settings passed through to the tool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisSet {
    /// Rule level (`0`..`9` or `max` for PHPStan).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Memory limit handed to the tool (e.g. `1G`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<String>,

    /// Autoload script, project-relative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoload: Option<String>,
}

/// Tool invocation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ToolsConfig {
    /// Analyzer binary; resolved from the project's vendor dir when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,

    /// Report format requested from the tool.
    #[serde(default = "default_report_format")]
    pub report_format: String,

    /// Per-run timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        ToolsConfig {
            analyzer: None,
            report_format: default_report_format(),
            timeout_secs: None,
        }
    }
}

fn default_report_format() -> String {
    "checkstyle".to_string()
}

#[cfg(test)]
mod tests {
    use crate::{parse_config_toml, ConfigView};

    #[test]
    fn empty_config_parses_with_defaults() {
        let cfg = parse_config_toml("").expect("parse");
        assert!(cfg.libraries().is_empty());
        assert_eq!(cfg.runtime().interpreter, None);
        assert_eq!(cfg.tools().report_format, "checkstyle");
    }

    #[test]
    fn full_config_exposes_all_views() {
        let cfg = parse_config_toml(
            r#"
schema = "stansift.config.v1"

[[libraries]]
name = "symfony"
files = ["vendor/symfony"]
docs = ["https://symfony.com/doc"]

[runtime]
interpreter = "/usr/bin/php"
version = "8.3"
args = ["-d", "zend.assertions=1"]

[analysis]
level = "max"
memory_limit = "1G"
autoload = "vendor/autoload.php"

[tools]
analyzer = "vendor/bin/phpstan"
report_format = "checkstyle"
timeout_secs = 300
"#,
        )
        .expect("parse");

        assert_eq!(cfg.libraries().len(), 1);
        assert_eq!(cfg.libraries()[0].name, "symfony");
        assert_eq!(cfg.runtime().version.as_deref(), Some("8.3"));
        assert_eq!(cfg.analysis().level.as_deref(), Some("max"));
        assert_eq!(cfg.tools().timeout_secs, Some(300));
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let cfg = parse_config_toml("future_knob = true\n").expect("parse");
        assert_eq!(cfg.schema, None);
    }
}
