//! Stage 2: known high-risk phrasings

use super::{ClauseContext, RiskStrategy, StageVerdict};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ClauseType, DetectionMethod, RiskLevel};
use std::collections::HashMap;

/// Longest matched excerpt quoted in a detected issue
const MAX_EXCERPT_CHARS: usize = 120;

/// Phrasings that make a clause High risk regardless of anything else
pub fn high_risk_patterns(clause_type: ClauseType) -> &'static [&'static str] {
    match clause_type {
        ClauseType::LiquidationPreference => &[
            r"\d+[xX]\s+participating",
            r"[3-9]x\s+preference",
            r"participating\s+preferred",
        ],
        ClauseType::AntiDilution => &[r"full\s+ratchet", r"no\s+(?:exception|carve[- ]out)"],
        ClauseType::BoardControl => &[
            r"investor(?:s)?\s+(?:appoint|designate).*majority",
            r"investor.*control.*board",
            r"tie[- ]breaking.*investor",
        ],
        ClauseType::Vesting => &[
            r"no\s+acceleration",
            r"[5-9][- ]year.*vesting",
            r"repurchase.*unvested",
        ],
        ClauseType::IpAssignment => &[r"all.*IP.*to.*company", r"prior.*invention", r"side.*project"],
        ClauseType::DragAlongRights => &[r"forced\s+to\s+sell", r"no\s+minimum\s+price", r"any\s+price"],
        ClauseType::InformationRights
        | ClauseType::NoShop
        | ClauseType::ProRataRights
        | ClauseType::PayToPlay
        | ClauseType::ConversionRights
        | ClauseType::RedemptionRights
        | ClauseType::RepresentationsWarranties
        | ClauseType::VotingRights
        | ClauseType::ExitRights
        | ClauseType::General => &[],
    }
}

lazy_static! {
    static ref COMPILED: HashMap<ClauseType, Vec<Regex>> = ClauseType::TAXONOMY
        .iter()
        .map(|clause_type| {
            let patterns = high_risk_patterns(*clause_type)
                .iter()
                .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
                .collect();
            (*clause_type, patterns)
        })
        .collect();
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HighRiskPatterns;

impl RiskStrategy for HighRiskPatterns {
    fn name(&self) -> &'static str {
        "rule_based"
    }

    fn evaluate(&self, clause: &ClauseContext<'_>) -> Option<StageVerdict> {
        let matched = COMPILED
            .get(&clause.clause_type)?
            .iter()
            .find_map(|pattern| pattern.find(clause.text))?;

        let excerpt: String = matched.as_str().trim().chars().take(MAX_EXCERPT_CHARS).collect();
        Some(
            StageVerdict::new(RiskLevel::High, 0.9, DetectionMethod::RuleBased)
                .issue(format!("High-risk language: \"{}\"", excerpt)),
        )
    }
}
