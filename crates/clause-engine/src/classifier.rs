//! Clause type scoring

use crate::taxonomy::SIGNATURES;
use shared_types::ClauseType;

/// Pick the best-scoring clause type for a section.
///
/// Ties go to the type declared first; text that scores nothing is a
/// `General` clause.
pub fn classify(text: &str) -> ClauseType {
    let text_lower = text.to_lowercase();
    let mut best = (ClauseType::General, 0u32);

    for signature in SIGNATURES.iter() {
        let score = signature.score(&text_lower);
        if score > best.1 {
            best = (signature.clause_type, score);
        }
    }

    best.0
}

/// Non-zero scores for every clause type, in taxonomy order
pub fn scores(text: &str) -> Vec<(ClauseType, u32)> {
    let text_lower = text.to_lowercase();
    SIGNATURES
        .iter()
        .map(|signature| (signature.clause_type, signature.score(&text_lower)))
        .filter(|(_, score)| *score > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_liquidation_preference() {
        assert_eq!(
            classify("3x participating liquidation preference"),
            ClauseType::LiquidationPreference
        );
    }

    #[test]
    fn test_board_observer_is_board_control() {
        let text = "Board observer rights granted to investor, no voting power";
        assert_eq!(classify(text), ClauseType::BoardControl);
        assert_eq!(
            scores(text),
            vec![(ClauseType::BoardControl, 4), (ClauseType::VotingRights, 2)]
        );
    }

    #[test]
    fn test_full_ratchet_is_anti_dilution() {
        assert_eq!(
            classify("The Series A Preferred shall have full ratchet anti-dilution protection."),
            ClauseType::AntiDilution
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify("NO-SHOP: THE COMPANY SHALL NOT SOLICIT COMPETING OFFERS"),
            ClauseType::NoShop
        );
    }

    #[test]
    fn test_nothing_matches_is_general() {
        assert_eq!(classify("This page intentionally left blank."), ClauseType::General);
        assert_eq!(classify(""), ClauseType::General);
        assert!(scores("").is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // "exit" (Exit Rights) and "cliff" (Vesting) both score 2
        let text = "cliff exit";
        assert_eq!(
            scores(text),
            vec![(ClauseType::Vesting, 2), (ClauseType::ExitRights, 2)]
        );
        assert_eq!(classify(text), ClauseType::Vesting);
    }

    #[test]
    fn test_deterministic() {
        let text = "Investors holding a majority may require all holders to sell their shares \
                    in a drag-along sale approved by the board.";
        let first = classify(text);
        for _ in 0..10 {
            assert_eq!(classify(text), first);
        }
    }

    proptest! {
        #[test]
        fn test_classify_matches_best_score(text in "[a-zA-Z ,.-]{0,200}") {
            let clause_type = classify(&text);
            let scored = scores(&text);
            match scored.iter().map(|(_, s)| *s).max() {
                Some(max) => {
                    let first_best = scored.iter().find(|(_, s)| *s == max).map(|(t, _)| *t);
                    prop_assert_eq!(Some(clause_type), first_best);
                }
                None => prop_assert_eq!(clause_type, ClauseType::General),
            }
            prop_assert_eq!(classify(&text), clause_type);
        }
    }
}
