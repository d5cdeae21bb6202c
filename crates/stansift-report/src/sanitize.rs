//! Best-effort stripping of non-XML noise around the report payload.
//!
//! Analysis tools may write progress output to the same stream as the
//! report, so the file is not necessarily valid XML as a whole. The payload
//! itself is assumed to be a contiguous well-formed block.

use std::borrow::Cow;

const XML_PROLOG: &str = "<?xml";

/// The closing root tag of the checkstyle report dialect. Hard-coded: if a
/// tool emits a different root element, sanitization keeps garbage or
/// truncates early. Kept as a single constant pending a product decision.
const CLOSING_ROOT_TAG: &str = "</checkstyle>";

/// Strip leading and trailing non-XML text from report content.
///
/// If the first line already starts the XML prolog the input is returned
/// borrowed and untouched. Otherwise everything before the first prolog line
/// is dropped, lines are kept through the closing root tag inclusive, and
/// the remainder is dropped.
pub fn sanitize_report(text: &str) -> Cow<'_, str> {
    if text
        .lines()
        .next()
        .is_some_and(|line| line.starts_with(XML_PROLOG))
    {
        return Cow::Borrowed(text);
    }

    let mut kept: Vec<&str> = Vec::new();
    let mut in_payload = false;
    for line in text.lines() {
        if !in_payload {
            if line.starts_with(XML_PROLOG) {
                in_payload = true;
                kept.push(line);
            }
            continue;
        }
        kept.push(line);
        if line == CLOSING_ROOT_TAG {
            break;
        }
    }
    Cow::Owned(kept.join("\n"))
}
