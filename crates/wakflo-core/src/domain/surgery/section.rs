//! Named-section upsert inside a Markdown document.

use std::ops::Range;

/// Boundary of a level-two section: the next `## ` heading line.
const SECTION_BREAK: &str = "\n## ";

/// Locate the section introduced by `heading`.
///
/// The heading must start a line and fill it, apart from trailing spaces or
/// tabs. The section runs up to (not
/// including) the newline before the next `## ` heading, or to the end of
/// the document.
pub fn find_section(document: &str, heading: &str) -> Option<Range<usize>> {
    let start = document.match_indices(heading).map(|(i, _)| i).find(|&i| {
        let at_line_start = i == 0 || document[..i].ends_with('\n');
        let rest = document[i + heading.len()..].trim_start_matches([' ', '\t']);
        let fills_line = rest.is_empty() || rest.starts_with('\n') || rest.starts_with("\r\n");
        at_line_start && fills_line
    })?;

    let body_start = start + heading.len();
    let end = document[body_start..]
        .find(SECTION_BREAK)
        .map_or(document.len(), |offset| body_start + offset);

    Some(start..end)
}

/// Append `row` to the section named `heading`, creating the section if needed.
///
/// - Section absent: `heading`, a blank line and `row` are appended to the
///   end; the original text is kept byte-for-byte as a prefix.
/// - `dedupe_key` already in the section: the document is returned unchanged.
/// - Otherwise the row is added to the end of the section, and exactly one
///   blank line separates it from the heading that follows.
pub fn upsert_section(document: &str, heading: &str, row: &str, dedupe_key: &str) -> String {
    let Some(range) = find_section(document, heading) else {
        let mut out = document.to_string();
        if !out.is_empty() {
            if !out.ends_with('\n') {
                out.push('\n');
            }
            if !out.ends_with("\n\n") {
                out.push('\n');
            }
        }
        out.push_str(heading);
        out.push_str("\n\n");
        out.push_str(row);
        out.push('\n');
        return out;
    };

    let section = &document[range.clone()];
    if section.contains(dedupe_key) {
        return document.to_string();
    }

    let before = &document[..range.start];
    let after = &document[range.end..];
    let body = section.trim_end_matches(['\n', '\r']);

    let mut out = String::with_capacity(document.len() + row.len() + 3);
    out.push_str(before);
    out.push_str(body);
    out.push('\n');
    if body.trim_end() == heading {
        out.push('\n');
    }
    out.push_str(row);
    out.push('\n');
    if !after.is_empty() {
        out.push('\n');
        out.push_str(after.trim_start_matches(['\n', '\r']));
    }
    out
}
