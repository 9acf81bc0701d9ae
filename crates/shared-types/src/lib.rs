pub mod analysis;
pub mod clause;
pub mod risk;
pub mod types;

pub use analysis::{AnalysisResult, AnalysisSummary, DocumentInfo, StartupType};
pub use clause::{Clause, ClauseStatistics, ClauseType, Entity, EntityLabel};
pub use risk::{
    CategoryClause, CategoryReport, ClauseTypeBreakdown, DangerousClause, DetectionMethod,
    OverallLevel, RiskAssessment, RiskCategories, RiskCategory, RiskClassification,
    RiskDistribution, RiskLevel,
};
pub use types::{DocumentFormat, ExtractedText, ExtractionMethod, RawDocument, Section};

use thiserror::Error;

/// Error returned when a string does not name a known variant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
