//! Document-level risk roll-up
//!
//! The score is inverted: each clause contributes 100 (Low), 50 (Medium) or
//! 10 (High) points and the document score is the mean, so a lower number
//! means a riskier agreement.

use shared_types::{
    CategoryClause, Clause, ClauseType, ClauseTypeBreakdown, DangerousClause, OverallLevel,
    RiskAssessment, RiskCategories, RiskCategory, RiskDistribution, RiskLevel,
};
use std::collections::BTreeMap;

/// Concern recorded for a High clause that carries no explanation
pub const DEFAULT_CONCERN: &str = "Requires careful review";

/// Static bucket for every clause type
pub fn category(clause_type: ClauseType) -> RiskCategory {
    match clause_type {
        ClauseType::BoardControl
        | ClauseType::VotingRights
        | ClauseType::InformationRights
        | ClauseType::Vesting
        | ClauseType::NoShop
        | ClauseType::General => RiskCategory::Operational,
        ClauseType::IpAssignment | ClauseType::RepresentationsWarranties => {
            RiskCategory::Regulatory
        }
        ClauseType::LiquidationPreference
        | ClauseType::AntiDilution
        | ClauseType::PayToPlay
        | ClauseType::ProRataRights
        | ClauseType::DragAlongRights
        | ClauseType::ConversionRights
        | ClauseType::RedemptionRights
        | ClauseType::ExitRights => RiskCategory::Financial,
    }
}

/// Tier for a rounded score. 40 and 70 both land in Medium.
pub fn overall_level(score: f64) -> RiskLevel {
    if score < 40.0 {
        RiskLevel::High
    } else if score <= 70.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Score from a tier histogram, rounded to one decimal place
pub fn score(distribution: &RiskDistribution) -> f64 {
    let total = distribution.total();
    if total == 0 {
        return 0.0;
    }
    let points: u32 = RiskLevel::ALL
        .iter()
        .map(|level| level.score_points() * distribution.get(*level) as u32)
        .sum();
    let raw = points as f64 / total as f64;
    (raw * 10.0).round() / 10.0
}

pub fn aggregate(clauses: &[Clause]) -> RiskAssessment {
    if clauses.is_empty() {
        return RiskAssessment {
            overall_score: 0.0,
            overall_level: OverallLevel::Unknown,
            risk_distribution: RiskDistribution::default(),
            clause_count: 0,
            dangerous_clauses: Vec::new(),
            clause_types: BTreeMap::new(),
            red_flags: 0,
            risk_categories: RiskCategories::default(),
            summary: summary(0.0, &RiskDistribution::default()),
        };
    }

    let mut distribution = RiskDistribution::default();
    let mut clause_types: BTreeMap<ClauseType, ClauseTypeBreakdown> = BTreeMap::new();
    let mut categories = RiskCategories::default();
    let mut dangerous_clauses = Vec::new();

    for clause in clauses {
        let level = clause.risk_level();
        distribution.record(level);

        let breakdown = clause_types.entry(clause.clause_type).or_default();
        breakdown.count += 1;
        breakdown.risk_levels.record(level);

        let bucket = categories.get_mut(category(clause.clause_type));
        bucket.count += 1;
        bucket.severity = bucket.severity.max(level);

        if level == RiskLevel::High {
            let concern = clause.explanation().unwrap_or(DEFAULT_CONCERN).to_string();
            bucket.clauses.push(CategoryClause {
                clause_id: clause.id,
                clause_type: clause.clause_type,
                explanation: concern.clone(),
            });
            dangerous_clauses.push(DangerousClause {
                clause_id: clause.id,
                clause_type: clause.clause_type,
                risk_level: level,
                risk_score: clause.risk_score,
                concern,
            });
        }
    }

    let overall_score = score(&distribution);
    let red_flags = dangerous_clauses.len();
    tracing::debug!(
        score = overall_score,
        high = distribution.high,
        medium = distribution.medium,
        low = distribution.low,
        "Aggregated clause risk"
    );

    RiskAssessment {
        overall_score,
        overall_level: overall_level(overall_score).into(),
        risk_distribution: distribution,
        clause_count: clauses.len(),
        dangerous_clauses,
        clause_types,
        red_flags,
        risk_categories: categories,
        summary: summary(overall_score, &distribution),
    }
}

fn summary(score: f64, distribution: &RiskDistribution) -> String {
    let high = distribution.high;
    let medium = distribution.medium;
    if score >= 70.0 {
        format!(
            "⚠️ High Risk Agreement: {} critical clauses require immediate attention. Strongly recommend legal review before signing.",
            high
        )
    } else if score >= 50.0 {
        format!(
            "⚠️ Moderate-High Risk: {} high-risk and {} medium-risk clauses detected. Negotiate key terms before proceeding.",
            high, medium
        )
    } else if score >= 30.0 {
        format!(
            "⚡ Moderate Risk: Agreement has {} areas needing negotiation. Generally acceptable with modifications.",
            medium
        )
    } else {
        "✓ Low Risk: Agreement appears founder-friendly with standard market terms.".to_string()
    }
}
