//! Section segmentation
//!
//! Splits extracted text into candidate clause sections. Heading families
//! are tried in a fixed order and the first one that matches more than
//! twice decides the boundaries, even when a later family would split the
//! document more finely.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::Section;

/// Sections with this many characters or fewer are dropped as noise
pub const MIN_SECTION_CHARS: usize = 50;

/// A family needs more than this many matches to be accepted
const MIN_HEADING_MATCHES: usize = 2;

lazy_static! {
    static ref HEADING_FAMILIES: Vec<Regex> = vec![
        // "Section 4: Vesting", "ARTICLE 2. Board"
        Regex::new(r"(?:SECTION|Section|Article|ARTICLE)\s+\d+[:.\s]*([^\n]+)").unwrap(),
        // "3. Liquidation Preference"
        Regex::new(r"(?m)(?:^|\n)(\d+\.\s+[A-Z][^\n]+)").unwrap(),
        // "PROTECTIVE PROVISIONS"
        Regex::new(r"(?m)(?:^|\n)([A-Z][A-Z\s&]{10,})(?:\n|:)").unwrap(),
        // "Drag Along Rights", "No Shop Clause"
        Regex::new(
            r"(?m)(?:^|\n)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\s+(?:Clause|Agreement|Rights|Provision))"
        )
        .unwrap(),
    ];
}

/// Split text into ordered, non-overlapping sections
pub fn segment(text: &str) -> Vec<Section> {
    for (family, pattern) in HEADING_FAMILIES.iter().enumerate() {
        let headings: Vec<(usize, &str)> = pattern
            .find_iter(text)
            .map(|m| (m.start(), m.as_str()))
            .collect();

        if headings.len() > MIN_HEADING_MATCHES {
            tracing::debug!(family, headings = headings.len(), "Segmenting on headings");
            return split_on_headings(text, &headings);
        }
    }

    tracing::debug!("No heading family matched, splitting on paragraphs");
    split_on_paragraphs(text)
}

fn split_on_headings(text: &str, headings: &[(usize, &str)]) -> Vec<Section> {
    headings
        .iter()
        .enumerate()
        .filter_map(|(i, (start, heading))| {
            let end = headings.get(i + 1).map(|(next, _)| *next).unwrap_or(text.len());
            let body = text[*start..end].trim();
            is_substantial(body).then(|| Section {
                title: heading.trim().to_string(),
                text: body.to_string(),
                position: *start,
            })
        })
        .collect()
}

fn split_on_paragraphs(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut offset = 0;

    for (i, paragraph) in text.split("\n\n").enumerate() {
        let body = paragraph.trim();
        if is_substantial(body) {
            let leading = paragraph.len() - paragraph.trim_start().len();
            sections.push(Section {
                title: format!("Paragraph {}", i + 1),
                text: body.to_string(),
                position: offset + leading,
            });
        }
        offset += paragraph.len() + 2;
    }

    sections
}

fn is_substantial(body: &str) -> bool {
    body.chars().count() > MIN_SECTION_CHARS
}
