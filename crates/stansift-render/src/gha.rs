use stansift_types::{DiagnosticsReport, Severity};

/// Render diagnostics as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path},line={line},col={col}::{message}`
pub fn render_github_annotations(report: &DiagnosticsReport, max: usize) -> Vec<String> {
    let mut out = Vec::new();

    for d in report.diagnostics.iter().take(max) {
        let level = match d.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "notice",
        };

        let mut meta = String::new();
        if let Some(path) = &d.file_path {
            meta.push_str(&format!("file={}", path));
            if d.line > 0 {
                meta.push_str(&format!(",line={}", d.line));
            }
            if d.column > 0 {
                meta.push_str(&format!(",col={}", d.column));
            }
        }

        let message = d
            .category
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");

        if meta.is_empty() {
            out.push(format!("::{}::{}", level, message));
        } else {
            out.push(format!("::{} {}::{}", level, meta, message));
        }
    }

    out
}
