//! Match highlighting for display.
//!
//! The query is always treated as literal text. Characters such as `.`, `+`
//! or `(` have no special meaning, and segment boundaries always fall on
//! character boundaries so accented text is never split.

use serde::{Deserialize, Serialize};

/// A run of text, flagged when it equals the query (ignoring case)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Split `text` on case-insensitive occurrences of `query`.
///
/// Occurrences are found left to right and never overlap. The query is used
/// as given (not trimmed) unless it is blank, in which case the whole text
/// comes back as one non-matching segment. Concatenating the segments always
/// reproduces `text`.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    if query.trim().is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle: Vec<char> = query.chars().collect();
    let haystack: Vec<(usize, char)> = text.char_indices().collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i + needle.len() <= haystack.len() {
        let found = needle
            .iter()
            .zip(&haystack[i..])
            .all(|(q, (_, c))| chars_eq_ignore_case(*c, *q));

        if found {
            let start = haystack[i].0;
            let end = haystack
                .get(i + needle.len())
                .map(|(offset, _)| *offset)
                .unwrap_or(text.len());

            if start > plain_start {
                segments.push(Segment::plain(&text[plain_start..start]));
            }
            segments.push(Segment::matched(&text[start..end]));
            plain_start = end;
            i += needle.len();
        } else {
            i += 1;
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }

    segments
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Render segments with each match wrapped in `open`/`close` markers
pub fn render_marked(segments: &[Segment], open: &str, close: &str) -> String {
    segments
        .iter()
        .map(|s| {
            if s.is_match {
                format!("{open}{}{close}", s.text)
            } else {
                s.text.clone()
            }
        })
        .collect()
}
