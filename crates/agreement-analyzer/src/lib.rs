//! Agreement risk analysis
//!
//! Runs the whole pipeline on one document:
//!
//! 1. extract text (direct, or OCR for scans)
//! 2. segment into sections
//! 3. type each section as a clause
//! 4. classify each clause's risk
//! 5. aggregate into a document assessment
//!
//! # Example
//! ```no_run
//! use agreement_analyzer::{AnalysisEngine, AnalyzerConfig};
//! use shared_types::StartupType;
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = AnalysisEngine::new(AnalyzerConfig::from_env()?);
//! let result = engine.analyze_file("term_sheet.pdf".as_ref(), &StartupType::Saas)?;
//! println!("{}", result.risk_assessment.summary);
//! # Ok(())
//! # }
//! ```

pub mod config;

pub use config::AnalyzerConfig;

use clause_engine::ClauseClassifier;
use document_extract::{ExtractError, Extractor, OcrEngine};
use risk_engine::{RiskClassifier, RiskModel, TfidfModel};
use shared_types::{
    AnalysisResult, AnalysisSummary, DocumentFormat, DocumentInfo, RawDocument, StartupType,
};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// The assembled pipeline. Immutable after construction, so one engine can
/// serve many documents across threads.
pub struct AnalysisEngine {
    config: AnalyzerConfig,
    extractor: Extractor,
    clauses: ClauseClassifier,
    risk: RiskClassifier,
}

impl AnalysisEngine {
    /// Build the pipeline, loading the trained model from `config.model_dir`.
    /// A missing or unreadable model only disables the ML stage.
    pub fn new(config: AnalyzerConfig) -> Self {
        let model = match TfidfModel::load(&config.model_dir) {
            Ok(model) => Some(Arc::new(model) as Arc<dyn RiskModel>),
            Err(e) => {
                tracing::warn!(error = %e, "Risk model unavailable, using rules and heuristics only");
                None
            }
        };
        Self::with_model(config, model)
    }

    /// Build the pipeline around an already loaded model (or none)
    pub fn with_model(config: AnalyzerConfig, model: Option<Arc<dyn RiskModel>>) -> Self {
        Self {
            extractor: Extractor::new(config.extraction.clone()),
            clauses: ClauseClassifier::new(config.clauses.clone()),
            risk: RiskClassifier::new(model),
            config,
        }
    }

    /// Replace the OCR engine used for scanned PDFs
    pub fn with_ocr(mut self, ocr: Box<dyn OcrEngine>) -> Self {
        self.extractor = Extractor::with_ocr(self.config.extraction.clone(), ocr);
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn has_model(&self) -> bool {
        self.risk.has_model()
    }

    /// Analyze a document given its bytes and a format tag (`"pdf"`, `".docx"`)
    ///
    /// # Errors
    /// - `ExtractError::UnsupportedFormat` - unknown tag, checked before parsing
    /// - `ExtractError::ExtractionFailure` - neither direct nor OCR extraction worked
    pub fn analyze(
        &self,
        bytes: Vec<u8>,
        format_tag: &str,
        startup_type: &StartupType,
    ) -> Result<AnalysisResult, AnalysisError> {
        let format: DocumentFormat = format_tag
            .parse()
            .map_err(|_| ExtractError::UnsupportedFormat(format_tag.to_string()))?;
        self.analyze_document(&RawDocument::new(bytes, format), startup_type)
    }

    /// Analyze a file, taking the format from its extension
    pub fn analyze_file(
        &self,
        path: &Path,
        startup_type: &StartupType,
    ) -> Result<AnalysisResult, AnalysisError> {
        let format = DocumentFormat::from_path(path)
            .map_err(|_| ExtractError::UnsupportedFormat(path.display().to_string()))?;
        let bytes = std::fs::read(path).map_err(|source| AnalysisError::Read {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "Analyzing file");
        self.analyze_document(&RawDocument::new(bytes, format), startup_type)
    }

    fn analyze_document(
        &self,
        document: &RawDocument,
        startup_type: &StartupType,
    ) -> Result<AnalysisResult, AnalysisError> {
        let extracted = self.extractor.extract(document)?;

        let mut clauses = self.clauses.extract_clauses(&extracted.sections);
        self.risk.classify_clauses(&mut clauses, startup_type);
        let risk_assessment = risk_engine::aggregate(&clauses);

        let distribution = risk_assessment.risk_distribution;
        let summary = AnalysisSummary {
            total: clauses.len(),
            high: distribution.high,
            medium: distribution.medium,
            low: distribution.low,
        };
        tracing::info!(
            clauses = summary.total,
            high = summary.high,
            score = risk_assessment.overall_score,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            analysis_timestamp: chrono::Utc::now().to_rfc3339(),
            document_info: DocumentInfo {
                page_count: extracted.pages,
                word_count: extracted.word_count(),
                extraction_method: extracted.extraction_method,
            },
            startup_type: startup_type.clone(),
            clauses,
            risk_assessment,
            summary,
        })
    }
}
