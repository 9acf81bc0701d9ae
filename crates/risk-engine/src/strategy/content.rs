//! Clause-specific reading of the literal text
//!
//! Each clause type with well-known dangerous phrasings gets its own
//! inspector. Confidence tracks how unambiguous the signal is: an explicit
//! "full ratchet" is near certain, a bare "acceleration" mention is not.

use super::{ClauseContext, RiskStrategy, StageVerdict};
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{ClauseType, DetectionMethod, RiskLevel};

/// Reference deal used in illustrative liquidation scenarios, in $M
const EXAMPLE_INVESTMENT: f64 = 10.0;
const EXAMPLE_EXIT: f64 = 50.0;
/// Longest cliff the market treats as standard
const STANDARD_CLIFF_MONTHS: u32 = 12;
/// More veto categories than this is High risk
const MAX_MODERATE_VETOES: usize = 3;

lazy_static! {
    static ref LIQ_MULTIPLIER: Regex = Regex::new(r"(\d+(?:\.\d+)?)\s*x\b").unwrap();
    static ref PARTICIPATING: Regex = Regex::new(r"participating").unwrap();
    static ref NON_PARTICIPATING: Regex = Regex::new(r"non[- ]?participating").unwrap();

    static ref FULL_RATCHET: Regex = Regex::new(r"full[- ]ratchet").unwrap();
    static ref BROAD_BASED: Regex = Regex::new(r"broad[- ]based").unwrap();
    static ref NARROW_BASED: Regex = Regex::new(r"narrow[- ]based").unwrap();
    static ref WEIGHTED_AVERAGE: Regex = Regex::new(r"weighted[- ]average").unwrap();

    // the investor side must be the one electing the majority
    static ref BOARD_MAJORITY: Regex = Regex::new(
        r"\b(?:investors?|preferred(?:\s+(?:stock|holders?|stockholders?))?|series\s+[a-z](?:\s+(?:preferred|investors?|holders?))?)\s+(?:shall\s+|will\s+|may\s+)?(?:be\s+entitled\s+to\s+)?(?:elect|appoint|designate|hold|control)s?\s+(?:a\s+|the\s+)?majority\b|\bmajority\s+of\s+(?:the\s+)?(?:board|directors)[^.]*\b(?:elected|appointed|designated)\s+by\s+(?:the\s+)?(?:investors?|preferred|series\s+[a-z]\b)"
    )
    .unwrap();
    static ref NO_VOTE: Regex = Regex::new(
        r"no\s+voting|non[- ]voting|without\s+(?:any\s+)?(?:voting|a\s+vote)|not\s+(?:be\s+)?entitled\s+to\s+vote"
    )
    .unwrap();

    static ref NO_ACCELERATION: Regex = Regex::new(r"\b(?:no|without)\s+(?:any\s+)?acceleration").unwrap();
    static ref CLIFF_BEFORE: Regex = Regex::new(r"(\d+)[- ](month|year)s?\s+cliff").unwrap();
    static ref CLIFF_AFTER: Regex =
        Regex::new(r"cliff\s+(?:period\s+)?of\s+(\d+)\s+(month|year)s?").unwrap();
    static ref SINGLE_TRIGGER: Regex = Regex::new(r"single[- ]trigger").unwrap();
    static ref DOUBLE_TRIGGER: Regex = Regex::new(r"double[- ]trigger").unwrap();

    static ref IP_NO_CARVE_OUT: Regex =
        Regex::new(r"\b(?:no|without\s+(?:any\s+)?)\s*carve[- ]?outs?").unwrap();
    static ref IP_CARVE_OUT: Regex = Regex::new(
        r"carve[- ]?outs?|exclud\w*\s+(?:all\s+)?(?:prior|pre-existing|unrelated)|other\s+than\s+(?:prior|pre-existing)"
    )
    .unwrap();
    static ref IP_BROAD: Regex = Regex::new(
        r"prior\s+inventions?|side\s+projects?|personal\s+projects?|whether\s+or\s+not\s+related|regardless\s+of\s+whether"
    )
    .unwrap();
    static ref IP_RELATED: Regex = Regex::new(
        r"related\s+to\s+(?:the\s+)?(?:company'?s\s+)?(?:current\s+or\s+(?:anticipated|proposed)\s+)?business"
    )
    .unwrap();

    static ref DRAG_NO_FLOOR: Regex = Regex::new(
        r"no\s+minimum\s+(?:sale\s+)?price|any\s+price|regardless\s+of\s+(?:the\s+)?(?:sale\s+)?price"
    )
    .unwrap();
    static ref DRAG_FLOOR: Regex = Regex::new(
        r"minimum\s+(?:sale\s+)?price|price\s+floor|at\s+least\s+\d+(?:\.\d+)?\s*x|not\s+less\s+than"
    )
    .unwrap();
    static ref DRAG_APPROVAL: Regex = Regex::new(
        r"(?:founders?|common)[^.]*(?:approv|consent)|(?:approv|consent)[^.]*(?:founders?|common)"
    )
    .unwrap();

    static ref VETO_CONTEXT: Regex = Regex::new(r"veto|consent|approv").unwrap();
    static ref VETO_CATEGORIES: Vec<(&'static str, Regex)> = vec![
        (
            "sale",
            Regex::new(r"\b(?:sale|sell|merger|acquisition|liquidat\w*)\b").unwrap(),
        ),
        (
            "hiring",
            Regex::new(r"\b(?:hir(?:e|ing)|employ\w*|officers?|executives?)\b").unwrap(),
        ),
        (
            "compensation",
            Regex::new(r"\b(?:compensation|salar(?:y|ies)|bonus(?:es)?|option\s+pool)\b").unwrap(),
        ),
        (
            "expenditure",
            Regex::new(r"\b(?:expenditures?|spend\w*|budgets?|capital\s+expenses?|indebtedness|debt)\b")
                .unwrap(),
        ),
    ];
}

/// Stage 1: content-specific heuristics
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentAnalysis;

impl RiskStrategy for ContentAnalysis {
    fn name(&self) -> &'static str {
        "content_analysis"
    }

    fn evaluate(&self, clause: &ClauseContext<'_>) -> Option<StageVerdict> {
        let text = clause.lower.as_str();
        match clause.clause_type {
            ClauseType::LiquidationPreference => liquidation_preference(text),
            ClauseType::AntiDilution => anti_dilution(text),
            ClauseType::BoardControl => board_control(text),
            ClauseType::Vesting => vesting(text),
            ClauseType::IpAssignment => ip_assignment(text),
            ClauseType::DragAlongRights => drag_along(text),
            ClauseType::VotingRights => voting_vetoes(text),
            _ => None,
        }
    }
}

fn verdict(level: RiskLevel, confidence: f64) -> StageVerdict {
    StageVerdict::new(level, confidence, DetectionMethod::ContentAnalysis)
}

/// "3", "1.5"
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", (value * 100.0).round() / 100.0)
    }
}

fn dollars_m(value: f64) -> String {
    format!("${}M", format_number(value))
}

fn liquidation_preference(text: &str) -> Option<StageVerdict> {
    let multiplier = LIQ_MULTIPLIER
        .captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());
    let non_participating = NON_PARTICIPATING.find_iter(text).count();
    let participating = PARTICIPATING.find_iter(text).count() > non_participating;
    let non_participating = non_participating > 0;

    match multiplier {
        Some(m) if participating => {
            let multiple = format_number(m);
            let preference = m * EXAMPLE_INVESTMENT;
            let remaining = (EXAMPLE_EXIT - preference).max(0.0);
            Some(
                verdict(RiskLevel::High, 0.95)
                    .explained(format!(
                        "{multiple}x participating liquidation preference: investors first take back \
                         {multiple} times their investment and then also share in everything that remains. \
                         Example: on a {} investment and a {} exit, investors receive {} off the top plus \
                         their pro-rata share of the remaining {}, so founders and employees split far less \
                         than their ownership suggests.",
                        dollars_m(EXAMPLE_INVESTMENT),
                        dollars_m(EXAMPLE_EXIT),
                        dollars_m(preference),
                        dollars_m(remaining),
                    ))
                    .issue(format!("{multiple}x participating liquidation preference"))
                    .term(format!("{multiple}x"))
                    .term("participating"),
            )
        }
        Some(m) if m >= 2.0 => {
            let multiple = format_number(m);
            let preference = m * EXAMPLE_INVESTMENT;
            let remaining = (EXAMPLE_EXIT - preference).max(0.0);
            let confidence = if non_participating { 0.9 } else { 0.85 };
            let mut result = verdict(RiskLevel::High, confidence)
                .explained(format!(
                    "{multiple}x liquidation preference is above the 1x market standard. Example: on a {} \
                     investment, investors take {} of a {} exit before common holders receive anything, \
                     leaving {} for founders and employees.",
                    dollars_m(EXAMPLE_INVESTMENT),
                    dollars_m(preference),
                    dollars_m(EXAMPLE_EXIT),
                    dollars_m(remaining),
                ))
                .issue(format!("{multiple}x liquidation preference exceeds the 1x market standard"))
                .term(format!("{multiple}x"));
            if non_participating {
                result = result.term("non-participating");
            }
            Some(result)
        }
        Some(m) if non_participating => Some(
            verdict(RiskLevel::Low, 0.9)
                .explained(format!(
                    "{}x non-participating liquidation preference: investors choose between getting their \
                     money back and converting to common. This is the market standard and founder-friendly.",
                    format_number(m)
                ))
                .term(format!("{}x", format_number(m)))
                .term("non-participating"),
        ),
        None if participating => Some(
            verdict(RiskLevel::High, 0.85)
                .explained(
                    "Participating preferred lets investors recover their preference and then also share \
                     pro-rata in the remaining proceeds (a \"double dip\"), reducing founder returns in \
                     every exit.",
                )
                .issue("Participating preferred stock")
                .term("participating"),
        ),
        None if non_participating => Some(
            verdict(RiskLevel::Low, 0.8)
                .explained(
                    "Non-participating preference: investors take either their preference or their \
                     as-converted share, not both.",
                )
                .term("non-participating"),
        ),
        _ => None,
    }
}

fn anti_dilution(text: &str) -> Option<StageVerdict> {
    if FULL_RATCHET.is_match(text) {
        return Some(
            verdict(RiskLevel::High, 0.97)
                .explained(
                    "Full ratchet anti-dilution reprices investor shares to the lowest price of any later \
                     round, no matter how few shares are sold. Example: investors buy at $1.00 per share at \
                     a $20M valuation; if a down round prices shares at $0.50 (a $10M valuation), their \
                     conversion price drops to $0.50 and they receive twice as many shares, with the entire \
                     dilution falling on founders and employees. Negotiate broad-based weighted average \
                     protection instead.",
                )
                .issue("Full ratchet anti-dilution protection")
                .term("full ratchet"),
        );
    }
    if BROAD_BASED.is_match(text) {
        return Some(
            verdict(RiskLevel::Low, 0.9)
                .explained(
                    "Broad-based weighted average anti-dilution is the market standard: a down round \
                     adjusts the conversion price in proportion to the shares actually issued, counting \
                     the whole capitalization.",
                )
                .term("broad-based weighted average"),
        );
    }
    if NARROW_BASED.is_match(text) {
        return Some(
            verdict(RiskLevel::Medium, 0.85)
                .explained(
                    "Narrow-based weighted average anti-dilution counts fewer outstanding shares than the \
                     broad-based formula, so down rounds shift more dilution onto founders.",
                )
                .issue("Narrow-based weighted average anti-dilution")
                .term("narrow-based weighted average"),
        );
    }
    if WEIGHTED_AVERAGE.is_match(text) {
        return Some(
            verdict(RiskLevel::Medium, 0.75)
                .explained(
                    "Weighted average anti-dilution without a stated base. Confirm the formula is \
                     broad-based before signing.",
                )
                .term("weighted average"),
        );
    }
    None
}

fn board_control(text: &str) -> Option<StageVerdict> {
    if BOARD_MAJORITY.is_match(text) {
        return Some(
            verdict(RiskLevel::High, 0.9)
                .explained(
                    "Investors control a majority of the board. They can replace management, approve a \
                     sale, or block financings without founder support.",
                )
                .issue("Investor majority on the board of directors")
                .term("majority"),
        );
    }
    if text.contains("observer") && NO_VOTE.is_match(text) {
        return Some(
            verdict(RiskLevel::Low, 0.85)
                .explained(
                    "Investors receive board observer rights without voting power, so founders keep \
                     control of board decisions.",
                )
                .term("board observer"),
        );
    }
    None
}

fn cliff_months(text: &str) -> Option<u32> {
    let captures = CLIFF_BEFORE
        .captures(text)
        .or_else(|| CLIFF_AFTER.captures(text))?;
    let amount: u32 = captures.get(1)?.as_str().parse().ok()?;
    match captures.get(2)?.as_str() {
        "year" => amount.checked_mul(12),
        _ => Some(amount),
    }
}

fn vesting(text: &str) -> Option<StageVerdict> {
    if NO_ACCELERATION.is_match(text) {
        return Some(
            verdict(RiskLevel::High, 0.9)
                .explained(
                    "Vesting has no acceleration. If the company is acquired and a founder is let go, \
                     unvested shares are lost.",
                )
                .issue("No vesting acceleration on change of control")
                .term("no acceleration"),
        );
    }
    if let Some(months) = cliff_months(text).filter(|m| *m > STANDARD_CLIFF_MONTHS) {
        return Some(
            verdict(RiskLevel::High, 0.85)
                .explained(format!(
                    "A {months}-month cliff is longer than the standard {STANDARD_CLIFF_MONTHS} months. A \
                     founder who leaves or is removed before then keeps none of the unvested equity."
                ))
                .issue(format!("{months}-month vesting cliff"))
                .term(format!("{months}-month cliff")),
        );
    }
    if SINGLE_TRIGGER.is_match(text) {
        return Some(
            verdict(RiskLevel::Low, 0.9)
                .explained("Single-trigger acceleration vests shares on a change of control.")
                .term("single-trigger acceleration"),
        );
    }
    if DOUBLE_TRIGGER.is_match(text) {
        return Some(
            verdict(RiskLevel::Low, 0.85)
                .explained(
                    "Double-trigger acceleration protects founders who are terminated after an \
                     acquisition.",
                )
                .term("double-trigger acceleration"),
        );
    }
    if text.contains("acceleration") {
        return Some(
            verdict(RiskLevel::Low, 0.8)
                .explained("Vesting includes acceleration provisions.")
                .term("acceleration"),
        );
    }
    None
}

fn ip_assignment(text: &str) -> Option<StageVerdict> {
    if IP_NO_CARVE_OUT.is_match(text) {
        return Some(
            verdict(RiskLevel::High, 0.9)
                .explained(
                    "IP assignment explicitly excludes carve-outs, so prior work and unrelated projects \
                     may become company property.",
                )
                .issue("IP assignment without carve-outs"),
        );
    }
    if IP_CARVE_OUT.is_match(text) {
        return Some(
            verdict(RiskLevel::Low, 0.85)
                .explained(
                    "IP assignment carves out prior inventions and unrelated work, limiting it to what is \
                     built for the company.",
                )
                .term("carve-out"),
        );
    }
    if let Some(m) = IP_BROAD.find(text) {
        return Some(
            verdict(RiskLevel::High, 0.9)
                .explained(
                    "IP assignment reaches prior inventions or personal side projects, not just work done \
                     for the company. This can limit what founders build in the future.",
                )
                .issue(format!("Broad IP assignment covering {}", m.as_str()))
                .term(m.as_str().to_string()),
        );
    }
    if IP_RELATED.is_match(text) {
        return Some(
            verdict(RiskLevel::Medium, 0.8)
                .explained("IP assignment is limited to work related to the company's business.")
                .term("related to business"),
        );
    }
    None
}

fn drag_along(text: &str) -> Option<StageVerdict> {
    if let Some(m) = DRAG_NO_FLOOR.find(text) {
        return Some(
            verdict(RiskLevel::High, 0.92)
                .explained(format!(
                    "Drag-along can force a sale at {}. Founders could be required to sell for less than \
                     the liquidation preferences, receiving nothing.",
                    m.as_str()
                ))
                .issue("Drag-along without a minimum price")
                .term(m.as_str().to_string()),
        );
    }
    if DRAG_FLOOR.is_match(text) {
        if DRAG_APPROVAL.is_match(text) {
            return Some(
                verdict(RiskLevel::Low, 0.85)
                    .explained(
                        "Drag-along has a minimum price and requires founder or common approval.",
                    )
                    .term("minimum price"),
            );
        }
        return Some(
            verdict(RiskLevel::Medium, 0.8)
                .explained(
                    "Drag-along includes a price floor but no founder or common approval right.",
                )
                .term("minimum price"),
        );
    }
    if text.contains("drag") {
        return Some(
            verdict(RiskLevel::High, 0.8)
                .explained(
                    "Drag-along states no minimum price, so a sale could be forced at a price that \
                     returns nothing to common holders.",
                )
                .issue("Drag-along without a minimum price"),
        );
    }
    None
}

fn voting_vetoes(text: &str) -> Option<StageVerdict> {
    if !VETO_CONTEXT.is_match(text) {
        return None;
    }
    let categories: Vec<&str> = VETO_CATEGORIES
        .iter()
        .filter(|(_, pattern)| pattern.is_match(text))
        .map(|(name, _)| *name)
        .collect();
    if categories.is_empty() {
        return None;
    }

    // narrower consent rights are left to the later stages
    if categories.len() <= MAX_MODERATE_VETOES {
        return None;
    }

    let list = categories.join(", ");
    let mut result = verdict(RiskLevel::High, 0.9)
        .explained(format!(
            "Investors hold veto rights over {} kinds of decisions ({}). Day-to-day operation of the \
             company needs investor sign-off.",
            categories.len(),
            list
        ))
        .issue(format!("Broad investor veto rights: {}", list));
    for category in categories {
        result = result.term(category);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::StartupType;

    fn analyze(text: &str, clause_type: ClauseType) -> Option<StageVerdict> {
        let startup = StartupType::Saas;
        ContentAnalysis.evaluate(&ClauseContext::new(text, clause_type, &startup))
    }

    #[test]
    fn test_participating_multiplier() {
        let result = analyze(
            "Investors receive a 3x participating liquidation preference",
            ClauseType::LiquidationPreference,
        )
        .unwrap();

        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.confidence >= 0.9);
        assert_eq!(result.detected_issues, vec!["3x participating liquidation preference"]);
        let explanation = result.explanation.unwrap();
        assert!(explanation.contains("$30M off the top"));
        assert!(explanation.contains("remaining $20M"));
    }

    #[test]
    fn test_one_x_non_participating_is_low() {
        let result = analyze(
            "1x non-participating liquidation preference",
            ClauseType::LiquidationPreference,
        )
        .unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert_eq!(result.specific_terms, vec!["1x", "non-participating"]);
    }

    #[test]
    fn test_high_multiple_non_participating() {
        let result = analyze(
            "a 2.5x non-participating liquidation preference",
            ClauseType::LiquidationPreference,
        )
        .unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.detected_issues[0].starts_with("2.5x"));
    }

    #[test]
    fn test_liquidation_without_signal_falls_through() {
        assert!(analyze("liquidation preference as described", ClauseType::LiquidationPreference).is_none());
    }

    #[test]
    fn test_full_ratchet() {
        let result = analyze("full ratchet anti-dilution", ClauseType::AntiDilution).unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
        assert!(result.confidence >= 0.95);
        assert!(result.explanation.unwrap().contains("valuation"));
    }

    #[test]
    fn test_weighted_average_bases() {
        let broad = analyze("broad-based weighted average", ClauseType::AntiDilution).unwrap();
        let narrow = analyze("narrow-based weighted average", ClauseType::AntiDilution).unwrap();
        let plain = analyze("weighted average adjustment", ClauseType::AntiDilution).unwrap();
        assert_eq!(broad.risk_level, RiskLevel::Low);
        assert_eq!(narrow.risk_level, RiskLevel::Medium);
        assert_eq!(plain.risk_level, RiskLevel::Medium);
        assert!(narrow.confidence > plain.confidence);
    }

    #[test]
    fn test_board_observer() {
        let result = analyze(
            "Board observer rights granted to investor, no voting power",
            ClauseType::BoardControl,
        )
        .unwrap();
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_board_majority() {
        let result = analyze(
            "The Investors shall appoint a majority of the board of directors.",
            ClauseType::BoardControl,
        )
        .unwrap();
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_board_majority_held_by_founders() {
        let founders = "The Founders shall elect a majority of the Board of Directors, and the \
                        Investors shall designate one director.";
        let common = "The Series A Preferred shall elect one director and the Common holders elect \
                      a majority of the Board.";
        assert!(analyze(founders, ClauseType::BoardControl).is_none());
        assert!(analyze(common, ClauseType::BoardControl).is_none());

        let passive = analyze(
            "A majority of the board shall be designated by the Investors.",
            ClauseType::BoardControl,
        )
        .unwrap();
        assert_eq!(passive.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_cliff_overflow() {
        assert_eq!(cliff_months("a 400000000-year cliff"), None);
        assert!(analyze("Vesting with a 400000000-year cliff.", ClauseType::Vesting).is_none());
        assert_eq!(cliff_months("a 4294967295-month cliff"), Some(u32::MAX));
    }

    #[test]
    fn test_vesting_signals() {
        let none = analyze("four year vesting with no acceleration", ClauseType::Vesting).unwrap();
        assert_eq!(none.risk_level, RiskLevel::High);

        let long_cliff = analyze("vesting with an 18-month cliff", ClauseType::Vesting).unwrap();
        assert_eq!(long_cliff.risk_level, RiskLevel::High);
        assert_eq!(long_cliff.detected_issues, vec!["18-month vesting cliff"]);

        let year_cliff = analyze("vesting with a cliff of 2 years", ClauseType::Vesting).unwrap();
        assert_eq!(year_cliff.detected_issues, vec!["24-month vesting cliff"]);

        let double = analyze(
            "12 month cliff and double-trigger acceleration",
            ClauseType::Vesting,
        )
        .unwrap();
        assert_eq!(double.risk_level, RiskLevel::Low);

        assert!(analyze("standard four year vesting", ClauseType::Vesting).is_none());
    }

    #[test]
    fn test_ip_breadth() {
        let carve = analyze(
            "assigns inventions, excluding prior inventions listed in Exhibit A",
            ClauseType::IpAssignment,
        )
        .unwrap();
        assert_eq!(carve.risk_level, RiskLevel::Low);

        let broad = analyze(
            "assigns all inventions including side projects",
            ClauseType::IpAssignment,
        )
        .unwrap();
        assert_eq!(broad.risk_level, RiskLevel::High);

        let no_carve = analyze("assigns all IP with no carve-outs", ClauseType::IpAssignment).unwrap();
        assert_eq!(no_carve.risk_level, RiskLevel::High);

        let related = analyze(
            "inventions related to the company's business",
            ClauseType::IpAssignment,
        )
        .unwrap();
        assert_eq!(related.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_drag_along_price_floor() {
        let none = analyze("drag-along at any price", ClauseType::DragAlongRights).unwrap();
        assert_eq!(none.risk_level, RiskLevel::High);
        assert!(none.confidence > 0.9);

        let floor_and_approval = analyze(
            "drag-along only at a minimum price of 3x, with approval of the founders",
            ClauseType::DragAlongRights,
        )
        .unwrap();
        assert_eq!(floor_and_approval.risk_level, RiskLevel::Low);

        let floor_only = analyze(
            "drag-along only at a price not less than the original purchase price",
            ClauseType::DragAlongRights,
        )
        .unwrap();
        assert_eq!(floor_only.risk_level, RiskLevel::Medium);

        let silent = analyze("standard drag-along provision", ClauseType::DragAlongRights).unwrap();
        assert_eq!(silent.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_veto_breadth() {
        let broad = analyze(
            "Investor consent is required for any sale, hiring of officers, executive compensation \
             and capital expenditures.",
            ClauseType::VotingRights,
        )
        .unwrap();
        assert_eq!(broad.risk_level, RiskLevel::High);
        assert_eq!(
            broad.specific_terms,
            vec!["sale", "hiring", "compensation", "expenditure"]
        );

        assert!(analyze(
            "Investor approval is required for a merger or new debt.",
            ClauseType::VotingRights,
        )
        .is_none());
        assert!(analyze("Investor approval is required for a merger.", ClauseType::VotingRights).is_none());

        assert!(analyze("holders vote together as a class", ClauseType::VotingRights).is_none());
    }

    #[test]
    fn test_other_types_fall_through() {
        assert!(analyze("quarterly financial statements", ClauseType::InformationRights).is_none());
    }
}
