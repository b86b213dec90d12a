//! Anchor-based code insertion.

use crate::domain::error::DomainError;

/// Indentation of an item inside a registry literal.
const ITEM_INDENT: &str = "\t\t";
/// Indentation of the closing brace of a registry literal.
const CLOSE_INDENT: &str = "\t";

/// Insert `line` right after the first occurrence of `anchor`.
///
/// The line is surrounded by newlines: `<anchor>\n<line>\n<rest>`. Nothing
/// else in `content` changes and no deduplication happens, so calling this
/// twice with the same line inserts it twice.
///
/// # Errors
///
/// [`DomainError::AnchorNotFound`] when `anchor` does not occur in `content`.
pub fn insert_after_anchor(content: &str, anchor: &str, line: &str) -> Result<String, DomainError> {
    let start = content
        .find(anchor)
        .ok_or_else(|| DomainError::AnchorNotFound {
            anchor: anchor.to_string(),
        })?;
    let end = start + anchor.len();

    let mut out = String::with_capacity(content.len() + line.len() + 2);
    out.push_str(&content[..end]);
    out.push('\n');
    out.push_str(line);
    out.push('\n');
    out.push_str(&content[end..]);
    Ok(out)
}

/// The opening token of a collection literal that new registrations go into.
///
/// `splice` formats entries the way `gofmt` would: items indented twice,
/// the closing brace once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryAnchor {
    marker: &'static str,
}

impl RegistryAnchor {
    pub const fn new(marker: &'static str) -> Self {
        Self { marker }
    }

    pub const fn marker(&self) -> &'static str {
        self.marker
    }

    /// Register `entry` (e.g. `actions.NewFooAction(),`) as the first item.
    ///
    /// - Collapsed literal `{}`: the entry goes on its own line and the
    ///   closing brace moves to the next line.
    /// - Multi-line literal: the entry is added above the existing items.
    pub fn splice(&self, content: &str, entry: &str) -> Result<String, DomainError> {
        let line = format!("{ITEM_INDENT}{entry}");
        let start = content
            .find(self.marker)
            .ok_or_else(|| DomainError::AnchorNotFound {
                anchor: self.marker.to_string(),
            })?;
        let end = start + self.marker.len();
        let rest = &content[end..];

        if rest.starts_with('\n') || rest.starts_with("\r\n") {
            let mut out = String::with_capacity(content.len() + line.len() + 1);
            out.push_str(&content[..end]);
            out.push('\n');
            out.push_str(&line);
            out.push_str(rest);
            return Ok(out);
        }

        let mut out = insert_after_anchor(content, self.marker, &line)?;
        // anchor + '\n' + line + '\n'
        out.insert_str(end + line.len() + 2, CLOSE_INDENT);
        Ok(out)
    }
}
