//! Markdown section projection over a note body.
//!
//! # Responsibility
//! - Split the notes body at `#` headings into titled sections.
//!
//! # Invariants
//! - Text before the first heading becomes a section with `heading = None`,
//!   and is dropped when blank.
//! - Section content is trimmed; heading text excludes the `#` markers.
//! - A trailing `#` run closes a heading only when whitespace precedes it.
//! - Lines inside a ```` ``` ```` or `~~~` fence are never headings; a fence
//!   closes only on the marker that opened it.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s{0,3}(#{1,6})\s+(.+?)(?:\s+#+)?\s*$").expect("valid heading regex"));

const FENCE_MARKERS: [&str; 2] = ["```", "~~~"];

/// One heading-delimited block of the notes body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSection {
    pub heading: Option<String>,
    /// Heading depth (1 for `#`), 0 for the untitled preamble.
    pub level: usize,
    pub content: String,
}

/// Splits `body` into sections at markdown ATX headings.
pub fn sections(body: &str) -> Vec<NoteSection> {
    let mut out = Vec::new();
    let mut current = NoteSection {
        heading: None,
        level: 0,
        content: String::new(),
    };
    let mut open_fence: Option<&str> = None;

    for line in body.lines() {
        let fence = FENCE_MARKERS
            .into_iter()
            .find(|marker| line.trim_start().starts_with(*marker));
        let inside_fence = open_fence.is_some() || fence.is_some();
        match (open_fence, fence) {
            (None, Some(marker)) => open_fence = Some(marker),
            (Some(open), Some(marker)) if open == marker => open_fence = None,
            _ => {}
        }
        let heading = if inside_fence {
            None
        } else {
            HEADING_RE.captures(line)
        };

        match heading {
            Some(caps) => {
                push_section(&mut out, current);
                current = NoteSection {
                    heading: Some(caps[2].to_string()),
                    level: caps[1].len(),
                    content: String::new(),
                };
            }
            None => {
                current.content.push_str(line);
                current.content.push('\n');
            }
        }
    }
    push_section(&mut out, current);
    out
}

fn push_section(out: &mut Vec<NoteSection>, mut section: NoteSection) {
    section.content = section.content.trim().to_string();
    if section.heading.is_none() && section.content.is_empty() {
        return;
    }
    out.push(section);
}
