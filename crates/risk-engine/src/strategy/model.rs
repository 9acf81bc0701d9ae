//! Stage 3: trained classifier

use super::{ClauseContext, RiskStrategy, StageVerdict};
use crate::model::RiskModel;
use shared_types::DetectionMethod;
use std::sync::Arc;

/// Wraps a loaded model. Inference errors are logged and treated as no
/// verdict.
#[derive(Clone)]
pub struct ModelStage {
    model: Arc<dyn RiskModel>,
}

impl ModelStage {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }
}

impl RiskStrategy for ModelStage {
    fn name(&self) -> &'static str {
        "ml"
    }

    fn evaluate(&self, clause: &ClauseContext<'_>) -> Option<StageVerdict> {
        match self.model.predict(clause.text, clause.clause_type) {
            Ok(prediction) => Some(StageVerdict::new(
                prediction.risk_level,
                prediction.confidence,
                DetectionMethod::Ml,
            )),
            Err(e) => {
                tracing::warn!(
                    clause_type = %clause.clause_type,
                    error = %e,
                    "Risk model inference failed, falling back"
                );
                None
            }
        }
    }
}
