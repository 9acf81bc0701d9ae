//! Multinomial logistic regression trained by batch gradient descent

use super::ModelError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingParams {
    pub learning_rate: f64,
    pub epochs: usize,
    /// L2 penalty on the weights (not the biases)
    pub l2: f64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            epochs: 400,
            l2: 1e-3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    /// One row per class
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

impl LogisticRegression {
    pub fn n_features(&self) -> usize {
        self.weights.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    /// Fit on dense rows. Classes are weighted inversely to their frequency
    /// so rare tiers are not drowned out.
    pub fn fit(
        features: &[Vec<f64>],
        labels: &[usize],
        n_classes: usize,
        params: TrainingParams,
    ) -> Result<Self, ModelError> {
        if features.is_empty() {
            return Err(ModelError::Training("no training samples".to_string()));
        }
        if features.len() != labels.len() {
            return Err(ModelError::Training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }
        let n_features = features[0].len();
        if let Some(row) = features.iter().find(|row| row.len() != n_features) {
            return Err(ModelError::FeatureShape {
                expected: n_features,
                actual: row.len(),
            });
        }
        if let Some(label) = labels.iter().find(|label| **label >= n_classes) {
            return Err(ModelError::Training(format!("label {} out of range", label)));
        }

        let n_samples = features.len() as f64;
        let mut class_counts = vec![0usize; n_classes];
        for label in labels {
            class_counts[*label] += 1;
        }
        let present = class_counts.iter().filter(|c| **c > 0).count() as f64;
        let class_weights: Vec<f64> = class_counts
            .iter()
            .map(|count| {
                if *count == 0 {
                    0.0
                } else {
                    n_samples / (present * *count as f64)
                }
            })
            .collect();

        let mut model = Self {
            weights: vec![vec![0.0; n_features]; n_classes],
            biases: vec![0.0; n_classes],
        };

        for _ in 0..params.epochs {
            let mut weight_grad = vec![vec![0.0; n_features]; n_classes];
            let mut bias_grad = vec![0.0; n_classes];

            for (row, label) in features.iter().zip(labels) {
                let probabilities = model.probabilities(row);
                let sample_weight = class_weights[*label];
                for class in 0..n_classes {
                    let target = if class == *label { 1.0 } else { 0.0 };
                    let error = (probabilities[class] - target) * sample_weight;
                    bias_grad[class] += error;
                    for (grad, x) in weight_grad[class].iter_mut().zip(row) {
                        *grad += error * x;
                    }
                }
            }

            for class in 0..n_classes {
                model.biases[class] -= params.learning_rate * bias_grad[class] / n_samples;
                for (weight, grad) in model.weights[class].iter_mut().zip(&weight_grad[class]) {
                    *weight -= params.learning_rate * (grad / n_samples + params.l2 * *weight);
                }
            }
        }

        Ok(model)
    }

    /// Class probabilities for one row
    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        if row.len() != self.n_features() {
            return Err(ModelError::FeatureShape {
                expected: self.n_features(),
                actual: row.len(),
            });
        }
        Ok(self.probabilities(row))
    }

    fn probabilities(&self, row: &[f64]) -> Vec<f64> {
        let logits: Vec<f64> = self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(weights, bias)| bias + weights.iter().zip(row).map(|(w, x)| w * x).sum::<f64>())
            .collect();
        softmax(&logits)
    }
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

/// Index and value of the largest probability; earlier classes win ties
pub fn argmax(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (idx, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((idx, value)),
        })
}
