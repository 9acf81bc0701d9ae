//! Clause taxonomy and the per-clause record produced by the pipeline

use crate::risk::{RiskClassification, RiskLevel};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Closed clause taxonomy. Declaration order is significant: it breaks
/// classification ties and fixes the one-hot layout used by the trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClauseType {
    #[serde(rename = "Liquidation Preference")]
    LiquidationPreference,
    #[serde(rename = "Anti-Dilution")]
    AntiDilution,
    #[serde(rename = "Board Control")]
    BoardControl,
    #[serde(rename = "Vesting")]
    Vesting,
    #[serde(rename = "IP Assignment")]
    IpAssignment,
    #[serde(rename = "Drag-Along Rights")]
    DragAlongRights,
    #[serde(rename = "Information Rights")]
    InformationRights,
    #[serde(rename = "No-Shop Clause")]
    NoShop,
    #[serde(rename = "Pro-Rata Rights")]
    ProRataRights,
    #[serde(rename = "Pay-to-Play")]
    PayToPlay,
    #[serde(rename = "Conversion Rights")]
    ConversionRights,
    #[serde(rename = "Redemption Rights")]
    RedemptionRights,
    #[serde(rename = "Representations & Warranties")]
    RepresentationsWarranties,
    #[serde(rename = "Voting Rights")]
    VotingRights,
    #[serde(rename = "Exit Rights")]
    ExitRights,
    #[serde(rename = "General Clause")]
    General,
}

impl ClauseType {
    /// The scored taxonomy entries, in declaration order (excludes `General`)
    pub const TAXONOMY: [ClauseType; 15] = [
        ClauseType::LiquidationPreference,
        ClauseType::AntiDilution,
        ClauseType::BoardControl,
        ClauseType::Vesting,
        ClauseType::IpAssignment,
        ClauseType::DragAlongRights,
        ClauseType::InformationRights,
        ClauseType::NoShop,
        ClauseType::ProRataRights,
        ClauseType::PayToPlay,
        ClauseType::ConversionRights,
        ClauseType::RedemptionRights,
        ClauseType::RepresentationsWarranties,
        ClauseType::VotingRights,
        ClauseType::ExitRights,
    ];

    /// Number of variants including `General`
    pub const COUNT: usize = 16;

    pub fn name(&self) -> &'static str {
        match self {
            ClauseType::LiquidationPreference => "Liquidation Preference",
            ClauseType::AntiDilution => "Anti-Dilution",
            ClauseType::BoardControl => "Board Control",
            ClauseType::Vesting => "Vesting",
            ClauseType::IpAssignment => "IP Assignment",
            ClauseType::DragAlongRights => "Drag-Along Rights",
            ClauseType::InformationRights => "Information Rights",
            ClauseType::NoShop => "No-Shop Clause",
            ClauseType::ProRataRights => "Pro-Rata Rights",
            ClauseType::PayToPlay => "Pay-to-Play",
            ClauseType::ConversionRights => "Conversion Rights",
            ClauseType::RedemptionRights => "Redemption Rights",
            ClauseType::RepresentationsWarranties => "Representations & Warranties",
            ClauseType::VotingRights => "Voting Rights",
            ClauseType::ExitRights => "Exit Rights",
            ClauseType::General => "General Clause",
        }
    }

    /// Stable index in `0..COUNT`
    pub fn index(&self) -> usize {
        Self::TAXONOMY
            .iter()
            .position(|t| t == self)
            .unwrap_or(Self::COUNT - 1)
    }
}

impl FromStr for ClauseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(ClauseType::General.name()) {
            return Ok(ClauseType::General);
        }
        Self::TAXONOMY
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::new("clause type", s))
    }
}

impl fmt::Display for ClauseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entity labels kept from recognition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Org,
    Person,
    Money,
    Percent,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    /// Byte offsets within the clause text
    pub start: usize,
    pub end: usize,
}

/// A typed clause. Risk fields are filled in by the risk classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub id: usize,
    #[serde(rename = "type")]
    pub clause_type: ClauseType,
    pub title: String,
    pub position: usize,
    /// Preview of the clause text
    pub text: String,
    pub full_text: String,
    pub entities: Vec<Entity>,
    pub key_terms: Vec<String>,
    #[serde(flatten)]
    pub risk: Option<RiskClassification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<u32>,
}

impl Clause {
    /// Attach a risk classification to this clause
    pub fn apply_risk(&mut self, risk: RiskClassification) {
        self.risk_score = Some(risk.risk_level.score_points());
        self.risk = Some(risk);
    }

    /// Risk tier, treating unclassified clauses as `Low`
    pub fn risk_level(&self) -> RiskLevel {
        self.risk
            .as_ref()
            .map(|r| r.risk_level)
            .unwrap_or(RiskLevel::Low)
    }

    pub fn explanation(&self) -> Option<&str> {
        self.risk.as_ref().map(|r| r.explanation.as_str())
    }
}

/// Descriptive statistics over an extracted clause list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseStatistics {
    pub total_clauses: usize,
    pub clause_types: BTreeMap<ClauseType, usize>,
    /// Clauses with at least one recognized entity
    pub has_entities: usize,
    /// Mean `full_text` length in bytes
    pub avg_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_names_round_trip() {
        for clause_type in ClauseType::TAXONOMY {
            let parsed: ClauseType = clause_type.name().parse().unwrap();
            assert_eq!(parsed, clause_type);
        }
        assert_eq!(
            "general clause".parse::<ClauseType>().unwrap(),
            ClauseType::General
        );
        assert!("Side Letter".parse::<ClauseType>().is_err());
    }

    #[test]
    fn test_indices_are_dense() {
        let mut seen = vec![false; ClauseType::COUNT];
        for clause_type in ClauseType::TAXONOMY {
            seen[clause_type.index()] = true;
        }
        seen[ClauseType::General.index()] = true;
        assert!(seen.into_iter().all(|s| s));
    }

    #[test]
    fn test_serializes_display_name() {
        let json = serde_json::to_string(&ClauseType::RepresentationsWarranties).unwrap();
        assert_eq!(json, "\"Representations & Warranties\"");
        let json = serde_json::to_string(&EntityLabel::Money).unwrap();
        assert_eq!(json, "\"MONEY\"");
    }

    #[test]
    fn test_unclassified_clause_defaults_low() {
        let clause = Clause {
            id: 1,
            clause_type: ClauseType::General,
            title: "Paragraph 1".to_string(),
            position: 0,
            text: String::new(),
            full_text: String::new(),
            entities: vec![],
            key_terms: vec![],
            risk: None,
            risk_score: None,
        };
        assert_eq!(clause.risk_level(), RiskLevel::Low);
        assert!(clause.explanation().is_none());
    }
}
