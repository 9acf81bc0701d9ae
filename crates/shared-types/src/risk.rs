//! Risk tiers, per-clause classifications and the document-level assessment

use crate::clause::ClauseType;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Risk tier. Ordered so that `High` dominates `Medium` dominates `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Points this tier contributes to the inverted document score
    pub fn score_points(&self) -> u32 {
        match self {
            RiskLevel::Low => 100,
            RiskLevel::Medium => 50,
            RiskLevel::High => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Stable class index used by the trained model
    pub fn index(&self) -> usize {
        match self {
            RiskLevel::Low => 0,
            RiskLevel::Medium => 1,
            RiskLevel::High => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl FromStr for RiskLevel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(ParseError::new("risk level", s)),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which classifier stage produced a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    ContentAnalysis,
    RuleBased,
    Ml,
    Heuristic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub risk_level: RiskLevel,
    /// 0.0 - 1.0
    pub confidence: f64,
    pub explanation: String,
    pub detection_method: DetectionMethod,
    #[serde(default)]
    pub detected_issues: Vec<String>,
    #[serde(default)]
    pub specific_terms: Vec<String>,
}

/// Document-level tier, `Unknown` when there was nothing to assess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverallLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl From<RiskLevel> for OverallLevel {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => OverallLevel::Low,
            RiskLevel::Medium => OverallLevel::Medium,
            RiskLevel::High => OverallLevel::High,
        }
    }
}

/// Tier histogram
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskDistribution {
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "Low")]
    pub low: usize,
}

impl RiskDistribution {
    pub fn record(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::High => self.high += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::Low => self.low += 1,
        }
    }

    pub fn get(&self, level: RiskLevel) -> usize {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DangerousClause {
    pub clause_id: usize,
    #[serde(rename = "type")]
    pub clause_type: ClauseType,
    pub risk_level: RiskLevel,
    pub risk_score: Option<u32>,
    pub concern: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseTypeBreakdown {
    pub count: usize,
    pub risk_levels: RiskDistribution,
}

/// Risk buckets clause types are grouped into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Operational,
    Regulatory,
    Financial,
}

/// High-tier clause retained as evidence for a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryClause {
    pub clause_id: usize,
    #[serde(rename = "type")]
    pub clause_type: ClauseType,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub count: usize,
    pub severity: RiskLevel,
    pub clauses: Vec<CategoryClause>,
}

impl Default for CategoryReport {
    fn default() -> Self {
        Self {
            count: 0,
            severity: RiskLevel::Low,
            clauses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskCategories {
    pub operational: CategoryReport,
    pub regulatory: CategoryReport,
    pub financial: CategoryReport,
}

impl RiskCategories {
    pub fn get(&self, category: RiskCategory) -> &CategoryReport {
        match category {
            RiskCategory::Operational => &self.operational,
            RiskCategory::Regulatory => &self.regulatory,
            RiskCategory::Financial => &self.financial,
        }
    }

    pub fn get_mut(&mut self, category: RiskCategory) -> &mut CategoryReport {
        match category {
            RiskCategory::Operational => &mut self.operational,
            RiskCategory::Regulatory => &mut self.regulatory,
            RiskCategory::Financial => &mut self.financial,
        }
    }
}

/// Aggregate risk profile of a whole document.
///
/// `overall_score` is on an inverted 0-100 scale: higher means safer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_score: f64,
    pub overall_level: OverallLevel,
    pub risk_distribution: RiskDistribution,
    pub clause_count: usize,
    pub dangerous_clauses: Vec<DangerousClause>,
    pub clause_types: BTreeMap<ClauseType, ClauseTypeBreakdown>,
    pub red_flags: usize,
    pub risk_categories: RiskCategories,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert_eq!(
            RiskLevel::ALL.iter().max().copied(),
            Some(RiskLevel::High)
        );
    }

    #[test]
    fn test_level_parse_and_index() {
        assert_eq!("HIGH".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("severe".parse::<RiskLevel>().is_err());
        for level in RiskLevel::ALL {
            assert_eq!(RiskLevel::from_index(level.index()), Some(level));
        }
        assert_eq!(RiskLevel::from_index(3), None);
    }

    #[test]
    fn test_distribution_wire_keys() {
        let mut dist = RiskDistribution::default();
        dist.record(RiskLevel::High);
        dist.record(RiskLevel::Low);
        dist.record(RiskLevel::Low);
        assert_eq!(dist.total(), 3);

        let json = serde_json::to_value(dist).unwrap();
        assert_eq!(json["High"], 1);
        assert_eq!(json["Low"], 2);
        assert_eq!(json["Medium"], 0);
    }

    #[test]
    fn test_detection_method_wire_names() {
        let json = serde_json::to_string(&DetectionMethod::ContentAnalysis).unwrap();
        assert_eq!(json, "\"content_analysis\"");
    }
}
