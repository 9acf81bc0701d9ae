//! Stage 4: clause-type defaults

use super::{ClauseContext, RiskStrategy, StageVerdict};
use shared_types::{ClauseType, DetectionMethod, RiskLevel};

/// Words that escalate a high-risk-prone clause to High
pub const ALARM_WORDS: &[&str] = &["force", "require", "must", "control", "majority", "all"];

const HEURISTIC_CONFIDENCE: f64 = 0.7;

/// How a clause type behaves when nothing more specific is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Medium, or High when alarm words appear
    HighRiskProne,
    LowDefault,
    Neutral,
}

pub fn disposition(clause_type: ClauseType) -> Disposition {
    match clause_type {
        ClauseType::LiquidationPreference
        | ClauseType::AntiDilution
        | ClauseType::BoardControl
        | ClauseType::DragAlongRights
        | ClauseType::VotingRights => Disposition::HighRiskProne,
        ClauseType::InformationRights | ClauseType::ProRataRights | ClauseType::PayToPlay => {
            Disposition::LowDefault
        }
        ClauseType::Vesting
        | ClauseType::IpAssignment
        | ClauseType::NoShop
        | ClauseType::ConversionRights
        | ClauseType::RedemptionRights
        | ClauseType::RepresentationsWarranties
        | ClauseType::ExitRights
        | ClauseType::General => Disposition::Neutral,
    }
}

/// Always produces a verdict; the classifier uses it as the last resort
#[derive(Debug, Default, Clone, Copy)]
pub struct Heuristic;

impl Heuristic {
    pub fn verdict(&self, clause: &ClauseContext<'_>) -> StageVerdict {
        let level = match disposition(clause.clause_type) {
            Disposition::HighRiskProne => {
                // substring match: "all" also fires on "shall"
                if ALARM_WORDS.iter().any(|word| clause.lower.contains(word)) {
                    RiskLevel::High
                } else {
                    RiskLevel::Medium
                }
            }
            Disposition::LowDefault => RiskLevel::Low,
            Disposition::Neutral => RiskLevel::Medium,
        };
        StageVerdict::new(level, HEURISTIC_CONFIDENCE, DetectionMethod::Heuristic)
    }
}

impl RiskStrategy for Heuristic {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn evaluate(&self, clause: &ClauseContext<'_>) -> Option<StageVerdict> {
        Some(self.verdict(clause))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::StartupType;

    fn level(text: &str, clause_type: ClauseType) -> RiskLevel {
        let startup = StartupType::Saas;
        Heuristic
            .verdict(&ClauseContext::new(text, clause_type, &startup))
            .risk_level
    }

    #[test]
    fn test_high_risk_prone_types() {
        assert_eq!(level("Investors must approve", ClauseType::VotingRights), RiskLevel::High);
        assert_eq!(level("Investors may approve", ClauseType::VotingRights), RiskLevel::Medium);
        assert_eq!(level("Holders shall vote", ClauseType::BoardControl), RiskLevel::High);
    }

    #[test]
    fn test_low_and_neutral_types() {
        assert_eq!(level("must deliver reports", ClauseType::InformationRights), RiskLevel::Low);
        assert_eq!(level("must not shop", ClauseType::NoShop), RiskLevel::Medium);
        assert_eq!(level("", ClauseType::General), RiskLevel::Medium);
    }

    #[test]
    fn test_fixed_confidence() {
        let startup = StartupType::Saas;
        let verdict = Heuristic.verdict(&ClauseContext::new("x", ClauseType::Vesting, &startup));
        assert_eq!(verdict.confidence, 0.7);
        assert_eq!(verdict.detection_method, DetectionMethod::Heuristic);
    }
}
