//! Streaming parse of sanitized checkstyle XML into diagnostic records.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use stansift_types::DiagnosticRecord;

use crate::error::{MalformedReport, ReportError};
use crate::resolve::PathResolver;

/// Parse sanitized report content into an ordered sequence of records.
///
/// The input must already be free of progress noise (see
/// [`crate::sanitize_report`]). Element nesting is validated: a finding is
/// only sealed when both its `file` context and its own `error` context
/// open and close in order.
pub fn parse_report(
    text: &str,
    resolver: &dyn PathResolver,
) -> Result<Vec<DiagnosticRecord>, ReportError> {
    let mut reader = Reader::from_str(text);
    let mut state = ParserState::new(resolver);

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"file" => state.open_file(&e)?,
                b"error" => state.open_finding(&e)?,
                _ => state.note_element(),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"file" => {
                    // An empty file section: opens and closes with no findings.
                    state.open_file(&e)?;
                    state.close_file()?;
                }
                b"error" => {
                    state.open_finding(&e)?;
                    state.close_finding()?;
                }
                _ => state.note_element(),
            },
            Event::End(e) => match e.name().as_ref() {
                b"file" => state.close_file()?,
                b"error" => state.close_finding()?,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    state.finish()
}

struct ParserState<'r> {
    resolver: &'r dyn PathResolver,
    records: Vec<DiagnosticRecord>,
    /// `Some(path)` while inside a `<file>` element; the inner option is the
    /// resolved path (`None` when the report names an unresolvable file).
    current_file: Option<Option<camino::Utf8PathBuf>>,
    current: Option<DiagnosticRecord>,
    saw_element: bool,
}

impl<'r> ParserState<'r> {
    fn new(resolver: &'r dyn PathResolver) -> Self {
        ParserState {
            resolver,
            records: Vec::new(),
            current_file: None,
            current: None,
            saw_element: false,
        }
    }

    fn note_element(&mut self) {
        self.saw_element = true;
    }

    fn open_file(&mut self, e: &BytesStart<'_>) -> Result<(), MalformedReport> {
        self.note_element();
        if self.current_file.is_some() || self.current.is_some() {
            return Err(MalformedReport::NestedFile);
        }
        let resolved = attr(e, "name").and_then(|name| self.resolver.resolve(&name));
        self.current_file = Some(resolved);
        Ok(())
    }

    fn close_file(&mut self) -> Result<(), MalformedReport> {
        if self.current_file.take().is_none() {
            return Err(MalformedReport::UnmatchedFileEnd);
        }
        Ok(())
    }

    fn open_finding(&mut self, e: &BytesStart<'_>) -> Result<(), MalformedReport> {
        self.note_element();
        if self.current.is_some() {
            return Err(MalformedReport::NestedFinding);
        }
        let Some(file_path) = self.current_file.clone() else {
            return Err(MalformedReport::FindingOutsideFile);
        };

        let mut line = parse_int(attr(e, "line"));
        // line 0 means "whole file": the tool had no precise location, e.g.
        // an autoloading failure reported against the file as a whole.
        if line == 0 {
            line = 1;
        }
        let column = parse_int(attr(e, "column"));
        let severity = attr(e, "severity").unwrap_or_default();
        let message = attr(e, "message").unwrap_or_default();

        self.current = Some(DiagnosticRecord {
            file_path,
            line,
            column,
            category: format!("{severity}: {message}"),
            description: message,
        });
        Ok(())
    }

    fn close_finding(&mut self) -> Result<(), MalformedReport> {
        match self.current.take() {
            Some(record) => {
                self.records.push(record);
                Ok(())
            }
            None => Err(MalformedReport::UnmatchedFindingEnd),
        }
    }

    fn finish(self) -> Result<Vec<DiagnosticRecord>, ReportError> {
        if !self.saw_element {
            return Err(ReportError::Empty);
        }
        Ok(self.records)
    }
}

/// Lenient attribute read: absent or unescapable values read as absent.
fn attr(e: &BytesStart<'_>, name: &str) -> Option<String> {
    let attribute = e.try_get_attribute(name).ok().flatten()?;
    attribute.unescape_value().ok().map(Cow::into_owned)
}

/// Lenient integer parse: absence of location info is common and non-fatal.
fn parse_int(value: Option<String>) -> i32 {
    value.and_then(|v| v.parse().ok()).unwrap_or(-1)
}
