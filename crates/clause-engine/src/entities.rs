//! Named-entity recognition over clause text
//!
//! Recognition is best effort. Only the leading window of a clause is
//! scanned, and a failing recognizer costs the clause its entities, never
//! the analysis.

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Entity, EntityLabel};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
    #[error("Entity recognition failed: {0}")]
    Recognition(String),
}

/// Finds organizations, people, amounts, percentages and dates
pub trait EntityRecognizer: Send + Sync {
    /// Entities in `text`, with byte offsets relative to `text`
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, EntityError>;
}

lazy_static! {
    static ref ENTITY_PATTERNS: Vec<(Regex, EntityLabel)> = vec![
        (
            Regex::new(
                r"\$\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|billion|thousand|[MBK])\b)?|\b\d[\d,]*(?:\.\d+)?\s+(?:dollars|USD)\b"
            )
            .unwrap(),
            EntityLabel::Money,
        ),
        (
            Regex::new(r"\b\d+(?:\.\d+)?\s?(?:%|percent\b)").unwrap(),
            EntityLabel::Percent,
        ),
        (
            Regex::new(
                r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b|\b\d{4}-\d{2}-\d{2}\b"
            )
            .unwrap(),
            EntityLabel::Date,
        ),
        (
            Regex::new(
                r"\b(?:[A-Z][A-Za-z0-9&'-]*,?[ \t]+){1,4}(?:Inc|LLC|Corp|Corporation|Ltd|Ventures|Capital|Partners|Fund)\b\.?"
            )
            .unwrap(),
            EntityLabel::Org,
        ),
        (
            Regex::new(r"\b(?:Mr|Ms|Mrs|Dr)\.[ \t]+[A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)?").unwrap(),
            EntityLabel::Person,
        ),
    ];
}

/// Regex-driven recognizer.
///
/// Organizations are recognized by their legal or fund suffix and people by
/// an honorific, which covers the parties named in most term sheets.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternEntityRecognizer;

impl EntityRecognizer for PatternEntityRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, EntityError> {
        let mut candidates: Vec<Entity> = ENTITY_PATTERNS
            .iter()
            .flat_map(|(pattern, label)| {
                pattern.find_iter(text).map(move |m| Entity {
                    text: m.as_str().to_string(),
                    label: *label,
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect();

        // Earliest first, longest first at the same start; overlaps lose
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
        let mut entities: Vec<Entity> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let overlaps = entities
                .last()
                .map(|prev| candidate.start < prev.end)
                .unwrap_or(false);
            if !overlaps {
                entities.push(candidate);
            }
        }

        Ok(entities)
    }
}

/// The first `limit` characters of `text`, cut on a char boundary
pub fn leading_window(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Run a recognizer over the leading window of a clause, absorbing errors
pub fn extract_entities(recognizer: &dyn EntityRecognizer, text: &str, limit: usize) -> Vec<Entity> {
    match recognizer.recognize(leading_window(text, limit)) {
        Ok(entities) => entities,
        Err(e) => {
            tracing::warn!(error = %e, "Entity extraction failed, continuing without entities");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingRecognizer;

    impl EntityRecognizer for FailingRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>, EntityError> {
            Err(EntityError::Recognition("model unavailable".to_string()))
        }
    }

    fn labels(entities: &[Entity]) -> Vec<(&str, EntityLabel)> {
        entities.iter().map(|e| (e.text.as_str(), e.label)).collect()
    }

    #[test]
    fn test_recognizes_term_sheet_entities() {
        let text = "Acme Robotics, Inc. will sell shares to Sequoia Capital for $5,000,000 \
                    on March 1, 2024, representing 20% of the Company. Signed by Dr. Jane Smith.";
        let entities = PatternEntityRecognizer.recognize(text).unwrap();

        assert_eq!(
            labels(&entities),
            vec![
                ("Acme Robotics, Inc.", EntityLabel::Org),
                ("Sequoia Capital", EntityLabel::Org),
                ("$5,000,000", EntityLabel::Money),
                ("March 1, 2024", EntityLabel::Date),
                ("20%", EntityLabel::Percent),
                ("Dr. Jane Smith", EntityLabel::Person),
            ]
        );
        for entity in &entities {
            assert_eq!(&text[entity.start..entity.end], entity.text);
        }
    }

    #[test]
    fn test_money_with_scale() {
        let entities = PatternEntityRecognizer
            .recognize("a pre-money valuation of $12.5 million")
            .unwrap();
        assert_eq!(labels(&entities), vec![("$12.5 million", EntityLabel::Money)]);
    }

    #[test]
    fn test_window_respects_char_boundaries() {
        let text = "é".repeat(10);
        assert_eq!(leading_window(&text, 3), "ééé");
        assert_eq!(leading_window("short", 1000), "short");
    }

    #[test]
    fn test_only_leading_window_is_scanned() {
        let text = format!("{} 45% dilution", "x".repeat(1000));
        let entities = extract_entities(&PatternEntityRecognizer, &text, 1000);
        assert!(entities.is_empty());
    }

    #[test]
    fn test_failure_yields_empty_list() {
        let entities = extract_entities(&FailingRecognizer, "Sequoia Capital invests $1", 1000);
        assert!(entities.is_empty());
    }
}
