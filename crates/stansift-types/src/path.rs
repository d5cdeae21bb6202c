use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical project-relative path as it appears in analysis reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct ProjectPath(String);

impl Default for ProjectPath {
    fn default() -> Self {
        ProjectPath::new(".")
    }
}

impl ProjectPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        // Avoid empty path; keep it explicit.
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl From<&Utf8Path> for ProjectPath {
    fn from(value: &Utf8Path) -> Self {
        ProjectPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for ProjectPath {
    fn from(value: Utf8PathBuf) -> Self {
        ProjectPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backslashes_are_normalized() {
        let p = ProjectPath::new("src\\Utils\\SmartObject.php");
        assert_eq!(p.as_str(), "src/Utils/SmartObject.php");
    }

    #[test]
    fn leading_dot_slash_is_stripped() {
        let p = ProjectPath::new("./src/a.php");
        assert_eq!(p.as_str(), "src/a.php");
    }

    #[test]
    fn empty_becomes_dot() {
        assert_eq!(ProjectPath::new("").as_str(), ".");
    }
}
