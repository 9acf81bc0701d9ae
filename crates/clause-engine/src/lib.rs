//! Clause typing for segmented agreements
//!
//! Every section becomes a [`Clause`]: it is scored against the clause
//! taxonomy, scanned for named entities and mined for key terms.

pub mod classifier;
pub mod entities;
pub mod statistics;
pub mod taxonomy;
pub mod terms;

pub use classifier::classify;
pub use entities::{EntityError, EntityRecognizer, PatternEntityRecognizer};
pub use statistics::clause_statistics;
pub use terms::extract_terms;

use serde::{Deserialize, Serialize};
use shared_types::{Clause, Entity, Section};

/// Limits applied while building clauses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseClassifierConfig {
    /// Characters of each clause handed to entity recognition
    #[serde(default = "default_entity_char_limit")]
    pub entity_char_limit: usize,
    /// Characters kept in the clause preview
    #[serde(default = "default_preview_len")]
    pub preview_len: usize,
}

fn default_entity_char_limit() -> usize {
    1000
}

fn default_preview_len() -> usize {
    500
}

impl Default for ClauseClassifierConfig {
    fn default() -> Self {
        Self {
            entity_char_limit: default_entity_char_limit(),
            preview_len: default_preview_len(),
        }
    }
}

/// Turns sections into typed clauses
pub struct ClauseClassifier {
    config: ClauseClassifierConfig,
    recognizer: Box<dyn EntityRecognizer>,
}

impl ClauseClassifier {
    pub fn new(config: ClauseClassifierConfig) -> Self {
        Self {
            config,
            recognizer: Box::new(PatternEntityRecognizer),
        }
    }

    /// Use a different entity recognizer
    pub fn with_recognizer(config: ClauseClassifierConfig, recognizer: Box<dyn EntityRecognizer>) -> Self {
        Self { config, recognizer }
    }

    /// One clause per section, ids starting at 1
    pub fn extract_clauses(&self, sections: &[Section]) -> Vec<Clause> {
        let clauses: Vec<Clause> = sections
            .iter()
            .enumerate()
            .map(|(idx, section)| self.build_clause(idx + 1, section))
            .collect();
        tracing::info!(clauses = clauses.len(), "Classified clauses");
        clauses
    }

    pub fn extract_entities(&self, text: &str) -> Vec<Entity> {
        entities::extract_entities(self.recognizer.as_ref(), text, self.config.entity_char_limit)
    }

    fn build_clause(&self, id: usize, section: &Section) -> Clause {
        let clause_type = classify(&section.text);
        let key_terms = extract_terms(&section.text, clause_type);
        tracing::debug!(id, clause_type = %clause_type, title = %section.title, "Typed clause");

        Clause {
            id,
            clause_type,
            title: section.title.clone(),
            position: section.position,
            text: entities::leading_window(&section.text, self.config.preview_len).to_string(),
            full_text: section.text.clone(),
            entities: self.extract_entities(&section.text),
            key_terms,
            risk: None,
            risk_score: None,
        }
    }
}

impl Default for ClauseClassifier {
    fn default() -> Self {
        Self::new(ClauseClassifierConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::ClauseType;

    fn section(title: &str, text: &str, position: usize) -> Section {
        Section {
            title: title.to_string(),
            text: text.to_string(),
            position,
        }
    }

    #[test]
    fn test_extract_clauses_assigns_ids_and_types() {
        let sections = vec![
            section(
                "Section 1: Liquidation Preference",
                "Section 1: Liquidation Preference. Investors receive a 2x participating \
                 liquidation preference on any distribution of proceeds.",
                0,
            ),
            section(
                "Section 2: Information Rights",
                "Section 2: Information Rights. The Company will deliver quarterly financial \
                 statements to Major Investors.",
                140,
            ),
        ];
        let clauses = ClauseClassifier::default().extract_clauses(&sections);

        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].id, 1);
        assert_eq!(clauses[1].id, 2);
        assert_eq!(clauses[0].clause_type, ClauseType::LiquidationPreference);
        assert_eq!(clauses[1].clause_type, ClauseType::InformationRights);
        assert_eq!(clauses[1].position, 140);
        assert_eq!(clauses[0].key_terms, vec!["1", "2x", "participating"]);
        assert!(clauses.iter().all(|c| c.risk.is_none()));
    }

    #[test]
    fn test_preview_is_truncated() {
        let long = format!("Vesting schedule: {}", "four years monthly ".repeat(60));
        let clauses = ClauseClassifier::default().extract_clauses(&[section("Paragraph 1", &long, 0)]);

        assert_eq!(clauses[0].text.chars().count(), 500);
        assert_eq!(clauses[0].full_text, long);
        assert!(long.starts_with(&clauses[0].text));
    }

    #[test]
    fn test_no_sections_no_clauses() {
        assert!(ClauseClassifier::default().extract_clauses(&[]).is_empty());
    }
}
