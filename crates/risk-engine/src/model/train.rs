//! Training from labeled clauses

use super::{LogisticRegression, ModelError, TfidfModel, TfidfVectorizer, TrainingParams};
use serde::{Deserialize, Serialize};
use shared_types::{ClauseType, RiskLevel};
use std::path::Path;

/// Vocabulary cap for the text features
pub const MAX_FEATURES: usize = 500;
pub const NGRAM_RANGE: (usize, usize) = (1, 3);
/// Every n-th sample of each class is held out, giving a 20% test split
const HOLDOUT_EVERY: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub text: String,
    pub clause_type: ClauseType,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Deserialize)]
struct TrainingRow {
    clause_text: String,
    clause_type: String,
    risk_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassMetrics {
    pub risk_level: RiskLevel,
    pub precision: f64,
    pub recall: f64,
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingReport {
    pub accuracy: f64,
    pub training_samples: usize,
    pub test_samples: usize,
    pub per_class: Vec<ClassMetrics>,
}

/// Read `clause_text,clause_type,risk_level` rows and train on them.
///
/// Unknown clause types are folded into `General Clause`; an unknown risk
/// level is an error.
pub fn train_from_csv(path: &Path) -> Result<(TfidfModel, TrainingReport), ModelError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut samples = Vec::new();

    for (line, row) in reader.deserialize::<TrainingRow>().enumerate() {
        let row = row?;
        let risk_level: RiskLevel = row
            .risk_level
            .parse()
            .map_err(|e| ModelError::Training(format!("row {}: {}", line + 1, e)))?;
        samples.push(TrainingSample {
            text: row.clause_text,
            clause_type: row.clause_type.parse().unwrap_or(ClauseType::General),
            risk_level,
        });
    }

    tracing::info!(samples = samples.len(), path = %path.display(), "Loaded training data");
    train(&samples, TrainingParams::default())
}

/// Split, fit and evaluate
pub fn train(
    samples: &[TrainingSample],
    params: TrainingParams,
) -> Result<(TfidfModel, TrainingReport), ModelError> {
    if samples.is_empty() {
        return Err(ModelError::Training("no training samples".to_string()));
    }
    let (train_set, test_set) = stratified_split(samples);
    if train_set.is_empty() {
        return Err(ModelError::Training("training split is empty".to_string()));
    }

    let mut vectorizer = TfidfVectorizer::new(MAX_FEATURES, NGRAM_RANGE);
    let documents: Vec<&str> = train_set.iter().map(|s| s.text.as_str()).collect();
    vectorizer.fit(&documents);

    let mut model = TfidfModel {
        vectorizer,
        classifier: LogisticRegression {
            weights: Vec::new(),
            biases: Vec::new(),
        },
    };
    let features: Vec<Vec<f64>> = train_set
        .iter()
        .map(|s| model.features(&s.text, s.clause_type))
        .collect();
    let labels: Vec<usize> = train_set.iter().map(|s| s.risk_level.index()).collect();
    model.classifier = LogisticRegression::fit(&features, &labels, RiskLevel::ALL.len(), params)?;

    let report = evaluate(&model, &train_set, &test_set)?;
    tracing::info!(
        accuracy = report.accuracy,
        training_samples = report.training_samples,
        test_samples = report.test_samples,
        "Trained risk classifier"
    );
    Ok((model, report))
}

/// Deterministic per-class holdout so every tier appears in both splits
fn stratified_split(samples: &[TrainingSample]) -> (Vec<&TrainingSample>, Vec<&TrainingSample>) {
    let mut train_set = Vec::new();
    let mut test_set = Vec::new();
    for level in RiskLevel::ALL {
        for (idx, sample) in samples
            .iter()
            .filter(|s| s.risk_level == level)
            .enumerate()
        {
            if idx % HOLDOUT_EVERY == HOLDOUT_EVERY - 1 {
                test_set.push(sample);
            } else {
                train_set.push(sample);
            }
        }
    }
    (train_set, test_set)
}

fn evaluate(
    model: &TfidfModel,
    train_set: &[&TrainingSample],
    test_set: &[&TrainingSample],
) -> Result<TrainingReport, ModelError> {
    use super::RiskModel;

    let mut predicted = Vec::with_capacity(test_set.len());
    for sample in test_set {
        predicted.push(model.predict(&sample.text, sample.clause_type)?.risk_level);
    }

    let correct = test_set
        .iter()
        .zip(&predicted)
        .filter(|(sample, prediction)| sample.risk_level == **prediction)
        .count();
    let accuracy = if test_set.is_empty() {
        0.0
    } else {
        correct as f64 / test_set.len() as f64
    };

    let per_class = RiskLevel::ALL
        .iter()
        .map(|level| {
            let true_positive = test_set
                .iter()
                .zip(&predicted)
                .filter(|(s, p)| s.risk_level == *level && **p == *level)
                .count();
            let predicted_positive = predicted.iter().filter(|p| **p == *level).count();
            let support = test_set.iter().filter(|s| s.risk_level == *level).count();
            ClassMetrics {
                risk_level: *level,
                precision: ratio(true_positive, predicted_positive),
                recall: ratio(true_positive, support),
                support,
            }
        })
        .collect();

    Ok(TrainingReport {
        accuracy,
        training_samples: train_set.len(),
        test_samples: test_set.len(),
        per_class,
    })
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(text: &str, clause_type: ClauseType, risk_level: RiskLevel) -> TrainingSample {
        TrainingSample {
            text: text.to_string(),
            clause_type,
            risk_level,
        }
    }

    #[test]
    fn test_split_is_stratified() {
        let samples: Vec<TrainingSample> = (0..10)
            .map(|i| {
                let level = if i % 2 == 0 { RiskLevel::High } else { RiskLevel::Low };
                sample("text", ClauseType::General, level)
            })
            .collect();
        let (train_set, test_set) = stratified_split(&samples);

        assert_eq!(train_set.len(), 8);
        assert_eq!(test_set.len(), 2);
        assert!(test_set.iter().any(|s| s.risk_level == RiskLevel::High));
        assert!(test_set.iter().any(|s| s.risk_level == RiskLevel::Low));
    }

    #[test]
    fn test_train_rejects_empty() {
        assert!(matches!(
            train(&[], TrainingParams::default()),
            Err(ModelError::Training(_))
        ));
    }

    #[test]
    fn test_ratio_handles_zero() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
    }
}
