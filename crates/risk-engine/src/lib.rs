//! Clause risk classification and document-level aggregation
//!
//! [`RiskClassifier`] runs a fixed chain of stages over each clause:
//!
//! 1. content analysis of the economic terms actually written
//! 2. high-risk phrase patterns
//! 3. the trained model, when one is loaded
//! 4. clause-type heuristics, which always answer
//!
//! The first stage to commit wins. Industry-specific escalation is applied
//! afterwards, and [`aggregate`] rolls the classified clauses up into a
//! [`RiskAssessment`](shared_types::RiskAssessment).

pub mod aggregate;
pub mod context;
pub mod explain;
pub mod model;
pub mod strategy;

pub use aggregate::aggregate;
pub use context::adjust_for_context;
pub use explain::explain;
pub use model::{ModelError, Prediction, RiskModel, TfidfModel};
pub use strategy::{ClauseContext, RiskStrategy, StageVerdict};

use shared_types::{Clause, ClauseType, RiskClassification, StartupType};
use std::sync::Arc;
use strategy::{ContentAnalysis, Heuristic, HighRiskPatterns, ModelStage};

/// Ordered risk stages with a heuristic fallback
pub struct RiskClassifier {
    strategies: Vec<Box<dyn RiskStrategy>>,
    fallback: Heuristic,
}

impl RiskClassifier {
    /// Build the standard chain. Without a model the ML stage is skipped.
    pub fn new(model: Option<Arc<dyn RiskModel>>) -> Self {
        let mut strategies: Vec<Box<dyn RiskStrategy>> =
            vec![Box::new(ContentAnalysis), Box::new(HighRiskPatterns)];
        if let Some(model) = model {
            strategies.push(Box::new(ModelStage::new(model)));
        }
        Self {
            strategies,
            fallback: Heuristic,
        }
    }

    /// Names of the active stages, fallback last
    pub fn stages(&self) -> Vec<&'static str> {
        self.strategies
            .iter()
            .map(|s| s.name())
            .chain(std::iter::once(self.fallback.name()))
            .collect()
    }

    pub fn has_model(&self) -> bool {
        self.strategies.iter().any(|s| s.name() == "ml")
    }

    pub fn classify_risk(
        &self,
        text: &str,
        clause_type: ClauseType,
        startup_type: &StartupType,
    ) -> RiskClassification {
        let clause = ClauseContext::new(text, clause_type, startup_type);
        let (stage, verdict) = self
            .strategies
            .iter()
            .find_map(|s| s.evaluate(&clause).map(|v| (s.name(), v)))
            .unwrap_or_else(|| (self.fallback.name(), self.fallback.verdict(&clause)));

        let risk_level = adjust_for_context(verdict.risk_level, clause_type, startup_type);
        if risk_level != verdict.risk_level {
            tracing::debug!(
                clause_type = %clause_type,
                startup_type = %startup_type,
                from = %verdict.risk_level,
                to = %risk_level,
                "Escalated risk for industry"
            );
        }
        tracing::debug!(clause_type = %clause_type, stage, level = %risk_level, "Classified clause risk");

        RiskClassification {
            risk_level,
            confidence: verdict.confidence,
            explanation: verdict
                .explanation
                .unwrap_or_else(|| explain(clause_type, risk_level)),
            detection_method: verdict.detection_method,
            detected_issues: verdict.detected_issues,
            specific_terms: verdict.specific_terms,
        }
    }

    /// Classify every clause in place.
    ///
    /// Risk reads `full_text`, not the 500-character `text` preview, so terms
    /// past the preview still count toward the verdict.
    pub fn classify_clauses(&self, clauses: &mut [Clause], startup_type: &StartupType) {
        for clause in clauses.iter_mut() {
            let risk = self.classify_risk(&clause.full_text, clause.clause_type, startup_type);
            clause.apply_risk(risk);
        }
        tracing::info!(clauses = clauses.len(), "Classified clause risk");
    }
}

impl Default for RiskClassifier {
    fn default() -> Self {
        Self::new(None)
    }
}
