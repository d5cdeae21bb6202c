//! Report ingestion adapter: read a PHP static-analysis checkstyle XML
//! report, tolerate surrounding progress noise, and produce an ordered
//! sequence of diagnostic records resolved against a project root.
//!
//! This crate is allowed to do filesystem IO at its outermost entry points;
//! sanitization and parsing themselves are pure (strings in, records out).

#![forbid(unsafe_code)]

mod error;
mod parse;
mod resolve;
mod sanitize;

use camino::Utf8Path;
use stansift_types::DiagnosticRecord;

pub use error::{MalformedReport, ReportError};
pub use parse::parse_report;
pub use resolve::{sanitize_file_name, NullResolver, PathResolver, ProjectRoot};
pub use sanitize::sanitize_report;

/// Fuzz-friendly API for testing parsing robustness without filesystem
/// access. These functions are designed to never panic on any input.
pub mod fuzz {
    use super::*;

    /// Sanitize and parse arbitrary text as a checkstyle report.
    ///
    /// Returns `Ok(...)` for a well-formed report, `Err(...)` otherwise.
    /// **Never panics** on any input.
    pub fn parse_report_text(text: &str) -> Result<(), ReportError> {
        let clean = sanitize_report(text);
        let _ = parse_report(&clean, &NullResolver)?;
        Ok(())
    }
}

/// Read, sanitize, and parse a report file, resolving file names against
/// `root`. Surfaces the typed failure kinds.
pub fn parse_report_file(
    report: &Utf8Path,
    root: &ProjectRoot,
) -> Result<Vec<DiagnosticRecord>, ReportError> {
    let raw = std::fs::read_to_string(report)?;
    let clean = sanitize_report(&raw);
    parse_report(&clean, root)
}

/// Convenience entry point with the lenient contract some hosts want:
/// every failure is logged at info level and yields an absent result. A
/// well-formed report with zero findings still yields `Some(vec![])`.
pub fn parse_report_file_or_absent(
    report: &Utf8Path,
    root: &ProjectRoot,
) -> Option<Vec<DiagnosticRecord>> {
    match parse_report_file(report, root) {
        Ok(records) => Some(records),
        Err(err) => {
            tracing::info!(report = %report, error = %err, "report ingestion failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    const CLEAN_REPORT: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
        <checkstyle>\n\
        <file name=\"myproject/src/Foo.php\">\n\
        <error line=\"5\" column=\"2\" severity=\"error\" message=\"X not found\"/>\n\
        </file>\n\
        </checkstyle>";

    fn fixture_project(tmp: &TempDir) -> ProjectRoot {
        let root = utf8_root(tmp).join("myproject");
        std::fs::create_dir_all(root.join("src")).expect("create src");
        std::fs::write(root.join("src/Foo.php"), "<?php\n").expect("write source");
        ProjectRoot::new(root)
    }

    #[test]
    fn file_parse_resolves_against_project_root() {
        let tmp = TempDir::new().expect("temp dir");
        let root = fixture_project(&tmp);
        let report_path = utf8_root(&tmp).join("report.xml");
        std::fs::write(&report_path, CLEAN_REPORT).expect("write report");

        let records = parse_report_file(&report_path, &root).expect("parse");
        assert_eq!(records.len(), 1);
        let path = records[0].file_path.as_ref().expect("resolved path");
        assert!(path.as_str().ends_with("src/Foo.php"));
        assert_eq!(records[0].category, "error: X not found");
    }

    #[test]
    fn noisy_report_parses_identically_to_clean() {
        let tmp = TempDir::new().expect("temp dir");
        let root = fixture_project(&tmp);

        let clean_path = utf8_root(&tmp).join("clean.xml");
        std::fs::write(&clean_path, CLEAN_REPORT).expect("write clean");

        let noisy_path = utf8_root(&tmp).join("noisy.xml");
        let noisy = format!(
            " 1/3 [=>------]  33%\n 2/3 [====>---]  66%\n 3/3 [========] 100%\n\
             {CLEAN_REPORT}\nDone in 1.4s\n"
        );
        std::fs::write(&noisy_path, &noisy).expect("write noisy");

        let from_clean = parse_report_file(&clean_path, &root).expect("clean parse");
        let from_noisy = parse_report_file(&noisy_path, &root).expect("noisy parse");
        assert_eq!(from_clean, from_noisy);
    }

    #[test]
    fn unresolvable_file_keeps_record_without_path() {
        let tmp = TempDir::new().expect("temp dir");
        let root = ProjectRoot::new(utf8_root(&tmp).join("myproject"));
        std::fs::create_dir_all(root.path()).expect("create root");
        let report_path = utf8_root(&tmp).join("report.xml");
        std::fs::write(&report_path, CLEAN_REPORT).expect("write report");

        let records = parse_report_file(&report_path, &root).expect("parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].file_path, None);
        assert_eq!(records[0].line, 5);
        assert_eq!(records[0].column, 2);
        assert_eq!(records[0].category, "error: X not found");
    }

    #[test]
    fn missing_report_file_is_absent_not_a_panic() {
        let tmp = TempDir::new().expect("temp dir");
        let root = ProjectRoot::new(utf8_root(&tmp).join("myproject"));
        let missing = utf8_root(&tmp).join("nope.xml");
        assert_eq!(parse_report_file_or_absent(&missing, &root), None);
    }

    #[test]
    fn sanitization_does_not_modify_the_report_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = fixture_project(&tmp);
        let noisy_path = utf8_root(&tmp).join("noisy.xml");
        let noisy = format!("progress...\n{CLEAN_REPORT}\ntrailing\n");
        std::fs::write(&noisy_path, &noisy).expect("write noisy");

        let _ = parse_report_file(&noisy_path, &root).expect("parse");
        let after = std::fs::read_to_string(&noisy_path).expect("re-read");
        assert_eq!(after, noisy);
    }

    proptest! {
        #[test]
        fn fuzz_parser_never_panics(input in ".*") {
            let _ = fuzz::parse_report_text(&input);
        }
    }
}
