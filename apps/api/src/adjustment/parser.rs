//! Response Parser — turns the model's free text into an `AdjustmentResult`.
//!
//! The parser is total: any string, including the empty string, yields a
//! result. Sections are located by the header table in `sections`, in any
//! order. A section runs from the end of its header to the start of the next
//! recognized header (of any field) or the end of the text. When a header
//! repeats, the first occurrence wins. A later duplicate is ignored for its
//! own field but still ends the span that precedes it, so its content is never
//! appended to another field.

use std::sync::LazyLock;

use regex::Regex;

use crate::adjustment::models::AdjustmentResult;
use crate::adjustment::sections::{SectionField, COMPILED_HEADERS};

/// A list item line: bullet (`-`, `*`, `+`, `•`) or `1.` / `1)` numbering.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-*+•]|\d{1,3}[.)])(?:\s+(.*))?$").expect("Invalid list marker regex")
});

/// One recognized header occurrence in the normalized text.
#[derive(Debug, Clone, Copy)]
struct HeaderHit {
    field: SectionField,
    /// Byte offset where the header line starts.
    start: usize,
    /// Byte offset where the section content starts.
    content_start: usize,
}

/// Parses a raw model answer. Never fails.
pub fn parse_response(raw_text: &str) -> AdjustmentResult {
    let normalized = raw_text.replace("\r\n", "\n").replace('\r', "\n");
    let text = normalized.trim_start_matches('\u{FEFF}').trim();
    let hits = locate_headers(text);

    let result = AdjustmentResult {
        diagnosis: section(text, &hits, SectionField::Diagnosis)
            .unwrap_or_default()
            .to_string(),
        load_adjustment: section(text, &hits, SectionField::LoadAdjustment)
            .unwrap_or_default()
            .to_string(),
        self_care: section(text, &hits, SectionField::SelfCare)
            .map(split_items)
            .unwrap_or_default(),
        day_plan: section(text, &hits, SectionField::DayPlan).map(split_items),
        raw_text: raw_text.to_string(),
    };

    if hits.is_empty() && !text.is_empty() {
        tracing::warn!(
            "No section headers recognized in model answer ({} bytes)",
            raw_text.len()
        );
    }

    result
}

/// Finds every header occurrence, sorted by position.
/// Two fields matching on the same line keep the longer header.
fn locate_headers(text: &str) -> Vec<HeaderHit> {
    let mut hits: Vec<HeaderHit> = COMPILED_HEADERS
        .iter()
        .flat_map(|(field, regex)| {
            regex.find_iter(text).map(move |m| HeaderHit {
                field: *field,
                start: m.start(),
                content_start: m.end(),
            })
        })
        .collect();

    hits.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.content_start.cmp(&a.content_start))
    });
    hits.dedup_by_key(|h| h.start);
    hits
}

/// Content of the first `field` header, up to the next header or end of text.
fn section<'a>(text: &'a str, hits: &[HeaderHit], field: SectionField) -> Option<&'a str> {
    let index = hits.iter().position(|h| h.field == field)?;
    let hit = hits[index];
    let end = hits.get(index + 1).map_or(text.len(), |next| next.start);
    let content_start = hit.content_start.min(end);
    Some(text[content_start..end].trim())
}

/// Splits a section into list items.
///
/// Lines starting with a list marker open a new item; unmarked lines after an
/// item continue it; unmarked lines before the first marker are lead-in and
/// are dropped. A section without any marker yields one item per non-empty line.
fn split_items(span: &str) -> Vec<String> {
    let lines: Vec<&str> = span
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if !lines.iter().any(|l| LIST_MARKER.is_match(l)) {
        return lines.into_iter().map(str::to_string).collect();
    }

    let mut items: Vec<String> = Vec::new();
    let mut in_item = false;

    for line in lines {
        if let Some(caps) = LIST_MARKER.captures(line) {
            let body = caps.get(1).map_or("", |m| m.as_str()).trim();
            in_item = !body.is_empty();
            if in_item {
                items.push(body.to_string());
            }
        } else if in_item {
            if let Some(last) = items.last_mut() {
                last.push(' ');
                last.push_str(line);
            }
        }
    }

    items
}
