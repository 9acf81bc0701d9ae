//! Risk classification stages
//!
//! Each stage looks at a clause and either commits to a tier or passes.
//! The classifier runs them in order and keeps the first verdict.

pub mod content;
pub mod heuristic;
pub mod model;
pub mod patterns;

pub use content::ContentAnalysis;
pub use heuristic::Heuristic;
pub use model::ModelStage;
pub use patterns::HighRiskPatterns;

use shared_types::{ClauseType, DetectionMethod, RiskLevel, StartupType};

/// The clause being classified, with its lowercased text computed once
#[derive(Debug, Clone)]
pub struct ClauseContext<'a> {
    pub text: &'a str,
    pub lower: String,
    pub clause_type: ClauseType,
    pub startup_type: &'a StartupType,
}

impl<'a> ClauseContext<'a> {
    pub fn new(text: &'a str, clause_type: ClauseType, startup_type: &'a StartupType) -> Self {
        Self {
            text,
            lower: text.to_lowercase(),
            clause_type,
            startup_type,
        }
    }
}

/// A stage's decision before context adjustment
#[derive(Debug, Clone, PartialEq)]
pub struct StageVerdict {
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub detection_method: DetectionMethod,
    /// Clause-specific explanation; the generic table is used when absent
    pub explanation: Option<String>,
    pub detected_issues: Vec<String>,
    pub specific_terms: Vec<String>,
}

impl StageVerdict {
    pub fn new(risk_level: RiskLevel, confidence: f64, detection_method: DetectionMethod) -> Self {
        Self {
            risk_level,
            confidence,
            detection_method,
            explanation: None,
            detected_issues: Vec::new(),
            specific_terms: Vec::new(),
        }
    }

    pub fn explained(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    pub fn issue(mut self, issue: impl Into<String>) -> Self {
        self.detected_issues.push(issue.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.specific_terms.push(term.into());
        self
    }
}

/// One stage of the risk classification chain
pub trait RiskStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Commit to a tier, or `None` to defer to the next stage
    fn evaluate(&self, clause: &ClauseContext<'_>) -> Option<StageVerdict>;
}
