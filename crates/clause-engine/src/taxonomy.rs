//! Keyword and pattern signatures for every clause type

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ClauseType;

/// Points for each keyword found as a substring
pub const KEYWORD_WEIGHT: u32 = 2;
/// Points for each pattern that matches somewhere in the text
pub const PATTERN_WEIGHT: u32 = 3;

/// Literal keywords and regex patterns that identify a clause type
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    pub keywords: &'static [&'static str],
    pub patterns: &'static [&'static str],
}

/// Signature table. `General` has no signature: it is what remains when
/// nothing else scores.
pub fn signature(clause_type: ClauseType) -> Signature {
    match clause_type {
        ClauseType::LiquidationPreference => Signature {
            keywords: &[
                "liquidation",
                "preference",
                "distribution",
                "proceeds",
                "participating",
                "non-participating",
            ],
            patterns: &[
                r"liquidation\s+preference",
                r"distribution\s+of\s+proceeds",
                r"participating\s+preferred",
                r"\d+x\s+preference",
            ],
        },
        ClauseType::AntiDilution => Signature {
            keywords: &[
                "anti-dilution",
                "dilution protection",
                "price adjustment",
                "weighted average",
                "full ratchet",
            ],
            patterns: &[
                r"anti[- ]dilution",
                r"dilution\s+protection",
                r"full\s+ratchet",
                r"weighted\s+average",
            ],
        },
        ClauseType::BoardControl => Signature {
            keywords: &[
                "board",
                "director",
                "appointment",
                "board seat",
                "board composition",
                "voting",
            ],
            patterns: &[
                r"board\s+of\s+directors",
                r"board\s+composition",
                r"director\s+appointment",
                r"board\s+seat",
            ],
        },
        ClauseType::Vesting => Signature {
            keywords: &["vesting", "cliff", "acceleration", "vesting schedule", "unvested"],
            patterns: &[
                r"vesting\s+schedule",
                r"\d+[- ]year\s+vesting",
                r"cliff\s+period",
                r"acceleration\s+clause",
            ],
        },
        ClauseType::IpAssignment => Signature {
            keywords: &[
                "intellectual property",
                "ip",
                "assignment",
                "ownership",
                "patents",
                "trademarks",
                "copyright",
            ],
            patterns: &[
                r"intellectual\s+property",
                r"ip\s+assignment",
                r"patent\s+rights",
                r"ownership\s+of.*(?:ip|intellectual\s+property)",
            ],
        },
        ClauseType::DragAlongRights => Signature {
            keywords: &["drag-along", "drag along", "forced sale", "tag-along"],
            patterns: &[r"drag[- ]along", r"forced\s+to\s+sell", r"require.*sell.*shares"],
        },
        ClauseType::InformationRights => Signature {
            keywords: &[
                "information rights",
                "financial statements",
                "reporting",
                "quarterly",
                "annual report",
            ],
            patterns: &[
                r"information\s+rights",
                r"financial\s+statements",
                r"quarterly\s+report",
                r"annual\s+audit",
            ],
        },
        ClauseType::NoShop => Signature {
            keywords: &["no-shop", "exclusivity", "solicitation", "competing offers"],
            patterns: &[
                r"no[- ]shop",
                r"exclusivity\s+period",
                r"not\s+solicit",
                r"competing\s+offer",
            ],
        },
        ClauseType::ProRataRights => Signature {
            keywords: &["pro-rata", "pro rata", "participation rights", "follow-on"],
            patterns: &[
                r"pro[- ]rata",
                r"participation\s+right",
                r"follow[- ]on\s+investment",
            ],
        },
        ClauseType::PayToPlay => Signature {
            keywords: &["pay-to-play", "pay to play", "participation requirement"],
            patterns: &[
                r"pay[- ]to[- ]play",
                r"must\s+participate",
                r"participation\s+requirement",
            ],
        },
        ClauseType::ConversionRights => Signature {
            keywords: &["conversion", "convert", "conversion rate", "conversion price"],
            patterns: &[r"conversion\s+right", r"convert.*shares", r"conversion\s+ratio"],
        },
        ClauseType::RedemptionRights => Signature {
            keywords: &["redemption", "redeem", "buyback", "repurchase"],
            patterns: &[r"redemption\s+right", r"right\s+to\s+redeem", r"buyback\s+right"],
        },
        ClauseType::RepresentationsWarranties => Signature {
            keywords: &["representations", "warranties", "represent and warrant", "authority"],
            patterns: &[
                r"representations?\s+and\s+warranties",
                r"represent\s+and\s+warrant",
                r"company\s+represents",
            ],
        },
        ClauseType::VotingRights => Signature {
            keywords: &["voting", "vote", "approval", "consent", "supermajority"],
            patterns: &[
                r"voting\s+right",
                r"require.*approval",
                r"supermajority",
                r"consent\s+of.*investor",
            ],
        },
        ClauseType::ExitRights => Signature {
            keywords: &["exit", "sale", "acquisition", "merger", "ipo"],
            patterns: &[
                r"exit\s+right",
                r"sale\s+of\s+company",
                r"merger\s+or\s+acquisition",
                r"initial\s+public\s+offering",
            ],
        },
        ClauseType::General => Signature {
            keywords: &[],
            patterns: &[],
        },
    }
}

/// A signature with its patterns compiled
pub struct CompiledSignature {
    pub clause_type: ClauseType,
    pub keywords: &'static [&'static str],
    pub patterns: Vec<Regex>,
}

impl CompiledSignature {
    /// Score lowercased text against this signature
    pub fn score(&self, text_lower: &str) -> u32 {
        let keyword_hits = self
            .keywords
            .iter()
            .filter(|keyword| text_lower.contains(*keyword))
            .count() as u32;
        let pattern_hits = self
            .patterns
            .iter()
            .filter(|pattern| pattern.is_match(text_lower))
            .count() as u32;
        keyword_hits * KEYWORD_WEIGHT + pattern_hits * PATTERN_WEIGHT
    }
}

lazy_static! {
    /// Every scored clause type, in taxonomy order
    pub static ref SIGNATURES: Vec<CompiledSignature> = ClauseType::TAXONOMY
        .iter()
        .map(|clause_type| {
            let signature = signature(*clause_type);
            CompiledSignature {
                clause_type: *clause_type,
                keywords: signature.keywords,
                patterns: signature
                    .patterns
                    .iter()
                    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
                    .collect(),
            }
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_taxonomy_entry_has_a_signature() {
        for clause_type in ClauseType::TAXONOMY {
            let signature = signature(clause_type);
            assert!(!signature.keywords.is_empty(), "{clause_type} has no keywords");
            assert!(!signature.patterns.is_empty(), "{clause_type} has no patterns");
        }
        assert!(signature(ClauseType::General).keywords.is_empty());
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for clause_type in ClauseType::TAXONOMY {
            for keyword in signature(clause_type).keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(SIGNATURES.len(), ClauseType::TAXONOMY.len());
    }

    #[test]
    fn test_signature_scoring() {
        let liquidation = &SIGNATURES[0];
        assert_eq!(liquidation.clause_type, ClauseType::LiquidationPreference);
        // liquidation, preference, participating + liquidation\s+preference
        assert_eq!(
            liquidation.score("3x participating liquidation preference"),
            3 * KEYWORD_WEIGHT + PATTERN_WEIGHT
        );
        assert_eq!(liquidation.score("nothing relevant here"), 0);
    }
}
