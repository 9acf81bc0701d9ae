//! Plain-language explanations for a clause type and tier

use shared_types::{ClauseType, RiskLevel};

/// Canned explanation for the clause types founders most often get wrong
fn canned(clause_type: ClauseType, level: RiskLevel) -> Option<&'static str> {
    let text = match (clause_type, level) {
        (ClauseType::LiquidationPreference, RiskLevel::High) => {
            "Extremely unfavorable terms. Investor takes disproportionate share of exit proceeds, potentially leaving founders with nothing."
        }
        (ClauseType::LiquidationPreference, RiskLevel::Medium) => {
            "Standard protection for investors but could impact founder returns in modest exits."
        }
        (ClauseType::LiquidationPreference, RiskLevel::Low) => {
            "Fair and balanced liquidation terms following market standards."
        }
        (ClauseType::AntiDilution, RiskLevel::High) => {
            "Full ratchet or harsh terms that can severely dilute founders in down-rounds. Negotiate to weighted average."
        }
        (ClauseType::AntiDilution, RiskLevel::Medium) => {
            "Standard anti-dilution protection. May cause some dilution in down-rounds."
        }
        (ClauseType::AntiDilution, RiskLevel::Low) => {
            "Founder-friendly anti-dilution terms or reasonable protections."
        }
        (ClauseType::BoardControl, RiskLevel::High) => {
            "Founders lose control of the company. Investors can make unilateral decisions."
        }
        (ClauseType::BoardControl, RiskLevel::Medium) => {
            "Balanced board composition but investor influence is significant."
        }
        (ClauseType::BoardControl, RiskLevel::Low) => {
            "Founder-controlled board with investor observer rights or minority representation."
        }
        (ClauseType::Vesting, RiskLevel::High) => {
            "Harsh vesting terms with long cliff periods or limited acceleration. Risk of losing equity if removed."
        }
        (ClauseType::Vesting, RiskLevel::Medium) => {
            "Standard 4-year vesting with 1-year cliff. Common but limits founder flexibility."
        }
        (ClauseType::Vesting, RiskLevel::Low) => "Accelerated vesting or founder-friendly terms.",
        (ClauseType::IpAssignment, RiskLevel::High) => {
            "Overly broad IP assignment including personal projects and prior work. Limits future opportunities."
        }
        (ClauseType::IpAssignment, RiskLevel::Medium) => {
            "Standard IP assignment for work related to company business."
        }
        (ClauseType::IpAssignment, RiskLevel::Low) => {
            "Limited IP assignment with clear carve-outs for prior and unrelated work."
        }
        (ClauseType::DragAlongRights, RiskLevel::High) => {
            "Can be forced to sell at any price. No minimum threshold protection."
        }
        (ClauseType::DragAlongRights, RiskLevel::Medium) => {
            "Standard drag-along with some price protections."
        }
        (ClauseType::DragAlongRights, RiskLevel::Low) => {
            "Well-protected with minimum price thresholds and founder approval rights."
        }
        _ => return None,
    };
    Some(text)
}

/// Explanation for a clause type at a tier, falling back to a generic sentence
pub fn explain(clause_type: ClauseType, level: RiskLevel) -> String {
    if let Some(text) = canned(clause_type, level) {
        return text.to_string();
    }
    match level {
        RiskLevel::High => format!(
            "This {} clause contains unfavorable terms that significantly impact founder rights and equity.",
            clause_type
        ),
        RiskLevel::Medium => format!(
            "This {} clause is fairly standard but requires careful consideration.",
            clause_type
        ),
        RiskLevel::Low => format!("This {} clause appears reasonable and balanced.", clause_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_explanations() {
        assert!(explain(ClauseType::DragAlongRights, RiskLevel::High).contains("any price"));
        assert!(explain(ClauseType::BoardControl, RiskLevel::Low).contains("observer"));
    }

    #[test]
    fn test_generic_template() {
        assert_eq!(
            explain(ClauseType::NoShop, RiskLevel::Medium),
            "This No-Shop Clause clause is fairly standard but requires careful consideration."
        );
        assert_eq!(
            explain(ClauseType::General, RiskLevel::Low),
            "This General Clause clause appears reasonable and balanced."
        );
    }

    #[test]
    fn test_every_pair_has_text() {
        for clause_type in ClauseType::TAXONOMY {
            for level in RiskLevel::ALL {
                assert!(!explain(clause_type, level).is_empty());
            }
        }
    }
}
