//! Trained risk model
//!
//! A TF-IDF vectorizer over the clause text, concatenated with a one-hot
//! clause-type block, feeding a softmax logistic regression. The model is
//! persisted as a single JSON artifact and loaded once per process.

pub mod logistic;
pub mod tfidf;
pub mod train;

pub use logistic::{LogisticRegression, TrainingParams};
pub use tfidf::TfidfVectorizer;
pub use train::{train, train_from_csv, ClassMetrics, TrainingReport, TrainingSample};

use serde::{Deserialize, Serialize};
use shared_types::{ClauseType, RiskLevel};
use std::path::Path;
use thiserror::Error;

/// File name of the persisted model inside the model directory
pub const MODEL_FILE: &str = "risk_classifier.json";

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Failed to load risk classifier from {path}: {reason}")]
    ClassifierLoadFailure { path: String, reason: String },

    #[error("Feature shape mismatch: model expects {expected} features, got {actual}")]
    FeatureShape { expected: usize, actual: usize },

    #[error("Training failed: {0}")]
    Training(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A tier prediction with the probability of the predicted class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub risk_level: RiskLevel,
    pub confidence: f64,
}

/// Anything that can predict a risk tier from clause text and type
pub trait RiskModel: Send + Sync {
    fn predict(&self, text: &str, clause_type: ClauseType) -> Result<Prediction, ModelError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfModel {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LogisticRegression,
}

impl TfidfModel {
    /// Text features followed by the clause-type one-hot block
    pub fn features(&self, text: &str, clause_type: ClauseType) -> Vec<f64> {
        let mut row = self.vectorizer.transform(text);
        row.extend(one_hot(clause_type));
        row
    }

    /// Write the model to `<dir>/risk_classifier.json`
    pub fn save(&self, dir: &Path) -> Result<(), ModelError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(MODEL_FILE);
        let json = serde_json::to_string(self)?;
        std::fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "Saved risk classifier");
        Ok(())
    }

    /// Read a model saved by [`TfidfModel::save`]
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let path = dir.join(MODEL_FILE);
        let load_failure = |reason: String| ModelError::ClassifierLoadFailure {
            path: path.display().to_string(),
            reason,
        };

        let json = std::fs::read_to_string(&path).map_err(|e| load_failure(e.to_string()))?;
        let model: TfidfModel = serde_json::from_str(&json).map_err(|e| load_failure(e.to_string()))?;
        tracing::info!(
            path = %path.display(),
            features = model.classifier.n_features(),
            "Loaded risk classifier"
        );
        Ok(model)
    }
}

impl RiskModel for TfidfModel {
    fn predict(&self, text: &str, clause_type: ClauseType) -> Result<Prediction, ModelError> {
        let probabilities = self.classifier.predict_proba(&self.features(text, clause_type))?;
        let (class, confidence) = logistic::argmax(&probabilities)
            .ok_or_else(|| ModelError::Training("model has no classes".to_string()))?;
        let risk_level = RiskLevel::from_index(class)
            .ok_or_else(|| ModelError::Training(format!("unknown class index {}", class)))?;
        Ok(Prediction {
            risk_level,
            confidence,
        })
    }
}

fn one_hot(clause_type: ClauseType) -> Vec<f64> {
    let mut block = vec![0.0; ClauseType::COUNT];
    block[clause_type.index()] = 1.0;
    block
}
