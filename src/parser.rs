//! Checklist line parser
//!
//! Extracts checkbox items from an issue description. The recognized grammar,
//! per physical line:
//!
//! ```text
//! - [ ] Description text
//! - [x] Description text [tag1, tag2]
//! ```
//!
//! The status mark is a space (not done) or `x`/`X` (done). An optional
//! bracketed tag list may close the line. Lines that do not match are
//! skipped silently; only checklist intent needs capturing, not diagnostics
//! about the rest of the issue body.
//!
//! The parser is line-oriented rather than regex-based so that the
//! trailing-bracket rule is explicit: the description ends at the earliest
//! ` [` that still leaves the line ending in `]`. Everything between those
//! brackets is the raw tag string, even if its content is malformed — tag
//! splitting and trimming happen later, best-effort.

/// One checklist line as matched in the issue description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTaskLine {
    /// Whether the checkbox was ticked
    pub done: bool,
    /// The description text between the checkbox and the tag list
    pub description: String,
    /// The raw comma-separated tag string, if the line closed with one
    pub tags_raw: Option<String>,
}

/// Parse an issue description into its checklist lines, in order of
/// appearance. No deduplication is performed.
#[must_use]
pub fn parse_checklist(text: &str) -> Vec<RawTaskLine> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse a single physical line, returning `None` when it is not a
/// checklist item.
fn parse_line(line: &str) -> Option<RawTaskLine> {
    let rest = line.strip_prefix("- [")?;

    let mut chars = rest.chars();
    let done = match chars.next()? {
        ' ' => false,
        'x' | 'X' => true,
        _ => return None,
    };

    let rest = chars.as_str().strip_prefix("] ")?;
    if rest.is_empty() {
        return None;
    }

    let (description, tags_raw) = split_trailing_tags(rest);
    Some(RawTaskLine {
        done,
        description,
        tags_raw,
    })
}

/// Split `Description [tags]` into its parts.
///
/// The description must be non-empty, so a line whose remainder is nothing
/// but a bracketed group keeps the brackets as description text.
fn split_trailing_tags(rest: &str) -> (String, Option<String>) {
    if let Some(inner) = rest.strip_suffix(']') {
        if let Some(idx) = inner.find(" [") {
            let (description, tail) = inner.split_at(idx);
            if !description.is_empty() {
                let tags = tail.strip_prefix(" [").unwrap_or(tail);
                return (description.to_string(), Some(tags.to_string()));
            }
        }
    }
    (rest.to_string(), None)
}
