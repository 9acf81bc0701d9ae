use shared_types::{ClauseType, RiskLevel, StartupType};

/// Industry-specific escalation applied after a stage has picked a tier
pub fn adjust_for_context(
    level: RiskLevel,
    clause_type: ClauseType,
    startup_type: &StartupType,
) -> RiskLevel {
    match (startup_type, clause_type, level) {
        // IP is the core asset of a healthtech company
        (StartupType::Healthtech, ClauseType::IpAssignment, RiskLevel::Low) => RiskLevel::Medium,
        // regulated fintechs cannot afford blocked decisions
        (StartupType::Fintech, ClauseType::VotingRights, RiskLevel::Medium) => RiskLevel::High,
        _ => level,
    }
}
