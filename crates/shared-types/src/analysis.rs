use crate::clause::Clause;
use crate::risk::RiskAssessment;
use crate::types::ExtractionMethod;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Industry of the company whose agreement is being analyzed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum StartupType {
    #[default]
    Saas,
    Fintech,
    Healthtech,
    Other(String),
}

impl StartupType {
    pub fn as_str(&self) -> &str {
        match self {
            StartupType::Saas => "SaaS",
            StartupType::Fintech => "fintech",
            StartupType::Healthtech => "healthtech",
            StartupType::Other(name) => name,
        }
    }
}

impl FromStr for StartupType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "" | "saas" => StartupType::Saas,
            "fintech" => StartupType::Fintech,
            "healthtech" => StartupType::Healthtech,
            _ => StartupType::Other(s.trim().to_string()),
        })
    }
}

impl From<String> for StartupType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl From<StartupType> for String {
    fn from(t: StartupType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for StartupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub page_count: u32,
    pub word_count: usize,
    pub extraction_method: ExtractionMethod,
}

/// Tier counts, duplicated from the assessment for quick display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Everything one `analyze` call produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// RFC 3339 UTC timestamp
    pub analysis_timestamp: String,
    pub document_info: DocumentInfo,
    pub startup_type: StartupType,
    pub clauses: Vec<Clause>,
    pub risk_assessment: RiskAssessment,
    pub summary: AnalysisSummary,
}
