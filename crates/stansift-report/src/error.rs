use thiserror::Error;

/// Failure to ingest a report file.
///
/// `Io` and `Xml` are environmental: the caller can retry after re-running
/// the analysis tool. `Malformed` means the document was well-formed XML but
/// its element nesting does not match the checkstyle dialect.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("read report: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse report XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The sanitized content contained no XML document at all. This is what
    /// pure progress output with no embedded report reduces to.
    #[error("report contains no XML document")]
    Empty,

    #[error("malformed report: {0}")]
    Malformed(#[from] MalformedReport),
}

/// Element nesting violations in an otherwise well-formed document.
///
/// These were unchecked invariants in earlier integrations; here they are
/// explicit state-machine validation surfaced to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MalformedReport {
    #[error("<error> element outside any <file> element")]
    FindingOutsideFile,

    #[error("<file> element opened inside another <file> element")]
    NestedFile,

    #[error("<error> element opened while a previous finding is still open")]
    NestedFinding,

    #[error("</file> without a matching <file>")]
    UnmatchedFileEnd,

    #[error("</error> without a matching <error>")]
    UnmatchedFindingEnd,
}
