//! Risk classification through the full stage chain

use pretty_assertions::assert_eq;
use risk_engine::model::{train_from_csv, LogisticRegression, TfidfVectorizer};
use risk_engine::{ModelError, Prediction, RiskClassifier, RiskModel, TfidfModel};
use shared_types::{ClauseType, DetectionMethod, RiskLevel, StartupType};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::tempdir;

/// Always predicts High and counts calls
struct AlwaysHigh {
    calls: Arc<AtomicUsize>,
}

impl RiskModel for AlwaysHigh {
    fn predict(&self, _text: &str, _clause_type: ClauseType) -> Result<Prediction, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Prediction {
            risk_level: RiskLevel::High,
            confidence: 0.66,
        })
    }
}

struct Broken;

impl RiskModel for Broken {
    fn predict(&self, _text: &str, _clause_type: ClauseType) -> Result<Prediction, ModelError> {
        Err(ModelError::FeatureShape {
            expected: 15,
            actual: 16,
        })
    }
}

const NO_SHOP: &str = "The Company will not solicit competing offers for a period of 45 days.";

#[test]
fn participating_liquidation_preference_is_high() {
    let classifier = RiskClassifier::default();
    let risk = classifier.classify_risk(
        "Series A holders receive a 3x participating liquidation preference.",
        ClauseType::LiquidationPreference,
        &StartupType::Saas,
    );

    assert_eq!(risk.risk_level, RiskLevel::High);
    assert!(risk.confidence >= 0.9);
    assert!(risk.detected_issues.iter().any(|issue| issue.contains("3x")));
}

#[test]
fn board_observer_without_vote_is_low() {
    let classifier = RiskClassifier::default();
    let risk = classifier.classify_risk(
        "Board observer rights granted to investor, no voting power",
        ClauseType::BoardControl,
        &StartupType::Saas,
    );

    assert_eq!(risk.risk_level, RiskLevel::Low);
    assert_eq!(risk.detection_method, DetectionMethod::ContentAnalysis);
}

#[test]
fn full_ratchet_explains_with_valuation_example() {
    let classifier = RiskClassifier::default();
    let risk = classifier.classify_risk(
        "Investors are protected by full ratchet anti-dilution.",
        ClauseType::AntiDilution,
        &StartupType::Saas,
    );

    assert_eq!(risk.risk_level, RiskLevel::High);
    assert!(risk.confidence >= 0.95);
    assert!(risk.explanation.contains("valuation"));
}

#[test]
fn classification_is_idempotent() {
    let classifier = RiskClassifier::default();
    let text = "Investor approval is required for any sale, hiring of executives, \
                compensation changes and capital expenditures over budget.";
    let first = classifier.classify_risk(text, ClauseType::VotingRights, &StartupType::Fintech);
    let second = classifier.classify_risk(text, ClauseType::VotingRights, &StartupType::Fintech);
    assert_eq!(first, second);
}

#[test]
fn narrow_consent_right_falls_through_to_heuristic() {
    let classifier = RiskClassifier::default();
    let risk = classifier.classify_risk(
        "Investors holding a majority of the Preferred must approve any sale of the Company.",
        ClauseType::VotingRights,
        &StartupType::Fintech,
    );

    assert_eq!(risk.risk_level, RiskLevel::High);
    assert_eq!(risk.detection_method, DetectionMethod::Heuristic);
    assert_eq!(risk.confidence, 0.7);
}

#[test]
fn oversized_cliff_does_not_panic() {
    let classifier = RiskClassifier::default();
    let risk = classifier.classify_risk(
        "Vesting with a 400000000-year cliff.",
        ClauseType::Vesting,
        &StartupType::Saas,
    );
    assert_eq!(risk.detection_method, DetectionMethod::Heuristic);
    assert_eq!(risk.risk_level, RiskLevel::Medium);
}

#[test]
fn model_is_consulted_after_rules() {
    let calls = Arc::new(AtomicUsize::new(0));
    let classifier = RiskClassifier::new(Some(Arc::new(AlwaysHigh {
        calls: calls.clone(),
    })));
    assert!(classifier.has_model());

    let risk = classifier.classify_risk(NO_SHOP, ClauseType::NoShop, &StartupType::Saas);
    assert_eq!(risk.risk_level, RiskLevel::High);
    assert_eq!(risk.detection_method, DetectionMethod::Ml);
    assert_eq!(risk.confidence, 0.66);
    assert!(risk.explanation.starts_with("This No-Shop Clause clause contains unfavorable terms"));

    // content analysis answers first, so the model is never asked
    classifier.classify_risk(
        "full ratchet anti-dilution",
        ClauseType::AntiDilution,
        &StartupType::Saas,
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn model_failure_falls_through_to_heuristic() {
    let classifier = RiskClassifier::new(Some(Arc::new(Broken)));
    let risk = classifier.classify_risk(NO_SHOP, ClauseType::NoShop, &StartupType::Saas);

    assert_eq!(risk.detection_method, DetectionMethod::Heuristic);
    assert_eq!(risk.risk_level, RiskLevel::Medium);
    assert_eq!(risk.confidence, 0.7);
}

#[test]
fn mismatched_saved_model_degrades_to_heuristic() {
    let dir = tempdir().unwrap();
    let mut vectorizer = TfidfVectorizer::new(500, (1, 1));
    vectorizer.fit(&["ratchet"]);
    let model = TfidfModel {
        vectorizer,
        // one-hot block one short, as a model trained on 15 types would be
        classifier: LogisticRegression {
            weights: vec![vec![0.0; 1 + ClauseType::COUNT - 1]; 3],
            biases: vec![0.0; 3],
        },
    };
    model.save(dir.path()).unwrap();

    let loaded = TfidfModel::load(dir.path()).unwrap();
    let classifier = RiskClassifier::new(Some(Arc::new(loaded)));
    let risk = classifier.classify_risk(NO_SHOP, ClauseType::NoShop, &StartupType::Saas);
    assert_eq!(risk.detection_method, DetectionMethod::Heuristic);
}

#[test]
fn trained_model_round_trip() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("clauses.csv");
    let mut csv = String::from("clause_text,clause_type,risk_level\n");
    for i in 10..20 {
        csv.push_str(&format!("ratchet veto drag punitive {},Anti-Dilution,High\n", i));
        csv.push_str(&format!("weighted average quarterly review {},Anti-Dilution,Medium\n", i));
        csv.push_str(&format!("observer carveout balanced founder {},Unknown Type,Low\n", i));
    }
    std::fs::write(&csv_path, csv).unwrap();

    let (model, report) = train_from_csv(&csv_path).unwrap();
    assert_eq!(report.training_samples, 24);
    assert_eq!(report.test_samples, 6);
    assert_eq!(report.per_class.len(), 3);
    assert!(report.accuracy > 0.5);

    let model_dir = dir.path().join("models");
    model.save(&model_dir).unwrap();
    let loaded = TfidfModel::load(&model_dir).unwrap();
    let prediction = loaded
        .predict("ratchet veto drag punitive", ClauseType::AntiDilution)
        .unwrap();
    assert_eq!(prediction.risk_level, RiskLevel::High);
}

#[test]
fn training_rejects_unknown_risk_level() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("bad.csv");
    std::fs::write(
        &csv_path,
        "clause_text,clause_type,risk_level\nsome clause,Vesting,Severe\n",
    )
    .unwrap();

    let err = train_from_csv(&csv_path).unwrap_err();
    assert!(matches!(err, ModelError::Training(_)));
}
