//! Key-term extraction

use lazy_static::lazy_static;
use regex::Regex;
use shared_types::ClauseType;

/// Numeric tokens kept per clause
const MAX_NUMERIC_TERMS: usize = 5;

lazy_static! {
    /// Amounts, multiples and percentages: "1.5", "3x", "20%"
    static ref NUMERIC_TERM: Regex = Regex::new(r"\d+(?:\.\d+)?[xX%]?").unwrap();
    static ref PARTICIPATION_TERM: Regex =
        Regex::new(r"(?i)non-participating|participating").unwrap();
    static ref ANTI_DILUTION_TERM: Regex =
        Regex::new(r"(?i)full\s+ratchet|weighted\s+average|broad[- ]based|narrow[- ]based").unwrap();
    static ref DURATION_TERM: Regex = Regex::new(r"(?i)\d+[- ](?:year|month)").unwrap();
}

/// Pull the numbers and type-specific vocabulary out of a clause.
///
/// Terms keep their original spelling and are deduplicated in the order
/// they were first seen.
pub fn extract_terms(text: &str, clause_type: ClauseType) -> Vec<String> {
    let mut terms: Vec<String> = NUMERIC_TERM
        .find_iter(text)
        .take(MAX_NUMERIC_TERMS)
        .map(|m| m.as_str().to_string())
        .collect();

    let vocabulary: Option<&Regex> = match clause_type {
        ClauseType::LiquidationPreference => Some(&PARTICIPATION_TERM),
        ClauseType::AntiDilution => Some(&ANTI_DILUTION_TERM),
        ClauseType::Vesting => Some(&DURATION_TERM),
        _ => None,
    };
    if let Some(pattern) = vocabulary {
        terms.extend(pattern.find_iter(text).map(|m| m.as_str().to_string()));
    }

    let mut unique: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        if !unique.contains(&term) {
            unique.push(term);
        }
    }
    unique
}
