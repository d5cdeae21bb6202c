//! Mapping report file names to absolute paths under a project root.

use camino::{Utf8Path, Utf8PathBuf};
use stansift_types::ProjectPath;

const PHP_EXT: &str = ".php";

/// Project-root resolution capability consumed by the parser.
///
/// Given a file name as it appears in the report, return the absolute path
/// of the matching source file, or `None` when nothing matches.
pub trait PathResolver {
    fn resolve(&self, name: &str) -> Option<Utf8PathBuf>;
}

/// Filesystem-backed resolver.
///
/// Report file names include the project directory itself (for example
/// `myproject/src/Foo.php`), so lookups happen against the *parent* of the
/// project root.
#[derive(Clone, Debug)]
pub struct ProjectRoot {
    root: Utf8PathBuf,
}

impl ProjectRoot {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        ProjectRoot { root: root.into() }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.root
    }
}

impl PathResolver for ProjectRoot {
    fn resolve(&self, name: &str) -> Option<Utf8PathBuf> {
        let sanitized = ProjectPath::new(sanitize_file_name(name));
        let base = self.root.parent()?;
        if !base.is_dir() {
            // No directory to search; hand back the sanitized name as given.
            return Some(sanitized.to_utf8_pathbuf());
        }
        let candidate = base.join(sanitized.as_str());
        if candidate.exists() {
            Some(candidate.canonicalize_utf8().unwrap_or(candidate))
        } else {
            None
        }
    }
}

/// Resolver that never matches anything. Parsed records keep an absent path.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullResolver;

impl PathResolver for NullResolver {
    fn resolve(&self, _name: &str) -> Option<Utf8PathBuf> {
        None
    }
}

/// Drop a trailing parenthetical context suffix appended after the real
/// file extension, e.g.
/// `vendor/nette/utils/src/Utils/SmartObject.php (in context of class ...)`.
pub fn sanitize_file_name(name: &str) -> &str {
    if name.ends_with(PHP_EXT) {
        return name;
    }
    match name.rfind(PHP_EXT) {
        Some(idx) => &name[..idx + PHP_EXT.len()],
        None => name,
    }
}
