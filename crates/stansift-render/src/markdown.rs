use stansift_types::{DiagnosticsReport, Severity, Verdict};

pub fn render_markdown(report: &DiagnosticsReport) -> String {
    let mut out = String::new();

    out.push_str("# Stansift report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Diagnostics: {} ({} error, {} warning, {} info)\n\n",
        verdict,
        report.diagnostics.len(),
        report.counts.error,
        report.counts.warning,
        report.counts.info
    ));

    if report.diagnostics.is_empty() {
        out.push_str("No diagnostics.\n");
        return out;
    }

    out.push_str("## Diagnostics\n\n");

    for d in &report.diagnostics {
        let sev = match d.severity() {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        };

        match &d.file_path {
            Some(path) => out.push_str(&format!(
                "- [{}] {} (`{}`:{})\n",
                sev, d.category, path, d.line
            )),
            None => out.push_str(&format!("- [{}] {} (unresolved file)\n", sev, d.category)),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use stansift_types::{DiagnosticRecord, DiagnosticsReport, ToolMeta};

    fn report(diagnostics: Vec<DiagnosticRecord>) -> DiagnosticsReport {
        DiagnosticsReport::new(
            ToolMeta {
                name: "stansift".to_string(),
                version: "0.0.0".to_string(),
            },
            diagnostics,
        )
    }

    #[test]
    fn renders_empty_report() {
        let md = render_markdown(&report(Vec::new()));
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No diagnostics"));
    }

    #[test]
    fn renders_diagnostics_with_and_without_paths() {
        let md = render_markdown(&report(vec![
            DiagnosticRecord {
                file_path: Some(Utf8PathBuf::from("/work/proj/src/Foo.php")),
                line: 5,
                column: 2,
                category: "error: X not found".to_string(),
                description: "X not found".to_string(),
            },
            DiagnosticRecord {
                file_path: None,
                line: 1,
                column: -1,
                category: "warning: unused variable".to_string(),
                description: "unused variable".to_string(),
            },
        ]));

        insta::assert_snapshot!(md, @r"
        # Stansift report

        - Verdict: **FAIL**
        - Diagnostics: 2 (1 error, 1 warning, 0 info)

        ## Diagnostics

        - [ERROR] error: X not found (`/work/proj/src/Foo.php`:5)
        - [WARN] warning: unused variable (unresolved file)
        ");
    }
}
