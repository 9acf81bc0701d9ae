//! Document text extraction
//!
//! Turns a raw agreement (PDF or DOCX) into plain text plus an ordered list
//! of candidate clause sections.
//!
//! # Features
//! - DOCX paragraph and table reading in document order
//! - PDF text-layer extraction, page by page
//! - OCR fallback for scanned PDFs (rasterize + recognize)
//! - Heading-based section segmentation with paragraph fallback
//!
//! # Example
//! ```no_run
//! use document_extract::{ExtractError, Extractor};
//! use shared_types::{DocumentFormat, RawDocument};
//!
//! fn extract_term_sheet(pdf_bytes: Vec<u8>) -> Result<(), ExtractError> {
//!     let extractor = Extractor::default();
//!     let extracted = extractor.extract(&RawDocument::new(pdf_bytes, DocumentFormat::Pdf))?;
//!     println!("{} pages via {}", extracted.pages, extracted.extraction_method);
//!     Ok(())
//! }
//! ```

pub mod docx;
pub mod ocr;
pub mod pdf;
pub mod segment;

pub use ocr::{OcrConfig, OcrEngine, OcrError, TesseractOcr};
pub use segment::segment;

use serde::{Deserialize, Serialize};
use shared_types::{DocumentFormat, ExtractedText, ExtractionMethod, RawDocument};
use thiserror::Error;

/// Errors that can occur while extracting document text
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Failed to extract text: {direct}, OCR also failed: {ocr}")]
    ExtractionFailure { direct: String, ocr: String },

    #[error("OCR failed: {0}")]
    Ocr(#[from] OcrError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Extraction thresholds and OCR settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Direct PDF text shorter than this (trimmed) is treated as a scan
    #[serde(default = "default_min_direct_text_len")]
    pub min_direct_text_len: usize,
    #[serde(default)]
    pub ocr: OcrConfig,
}

fn default_min_direct_text_len() -> usize {
    100
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_direct_text_len: default_min_direct_text_len(),
            ocr: OcrConfig::default(),
        }
    }
}

/// Main extraction interface
pub struct Extractor {
    config: ExtractorConfig,
    ocr: Box<dyn OcrEngine>,
}

impl Extractor {
    /// Build an extractor using the Tesseract command-line OCR engine
    pub fn new(config: ExtractorConfig) -> Self {
        let ocr = Box::new(TesseractOcr::new(config.ocr.clone()));
        Self { config, ocr }
    }

    /// Build an extractor with a caller-supplied OCR engine
    pub fn with_ocr(config: ExtractorConfig, ocr: Box<dyn OcrEngine>) -> Self {
        Self { config, ocr }
    }

    /// Extract text and sections from a raw document
    ///
    /// # Errors
    /// - `ExtractError::InvalidDocument` - DOCX container could not be read
    /// - `ExtractError::ExtractionFailure` - Both direct and OCR extraction failed
    pub fn extract(&self, document: &RawDocument) -> Result<ExtractedText, ExtractError> {
        let (text, pages, extraction_method) = match document.format() {
            DocumentFormat::Docx => {
                let docx = docx::read_docx(document.bytes())?;
                (docx.text, docx.pages, ExtractionMethod::Direct)
            }
            DocumentFormat::Pdf => self.extract_pdf(document.bytes())?,
        };

        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(ExtractError::InvalidDocument(
                "document contains no extractable text".to_string(),
            ));
        }

        let sections = segment(&text);
        tracing::info!(
            format = %document.format(),
            method = %extraction_method,
            pages,
            sections = sections.len(),
            "Extracted document text"
        );

        Ok(ExtractedText {
            text,
            pages,
            extraction_method,
            sections,
        })
    }

    /// Extract a document from a tag such as `"pdf"` or `".docx"`.
    /// Unknown tags are rejected before the bytes are looked at.
    pub fn extract_tagged(
        &self,
        bytes: Vec<u8>,
        format_tag: &str,
    ) -> Result<ExtractedText, ExtractError> {
        let format: DocumentFormat = format_tag
            .parse()
            .map_err(|_| ExtractError::UnsupportedFormat(format_tag.to_string()))?;
        self.extract(&RawDocument::new(bytes, format))
    }

    fn extract_pdf(&self, bytes: &[u8]) -> Result<(String, u32, ExtractionMethod), ExtractError> {
        match pdf::extract_direct(bytes) {
            Ok(direct) => {
                let length = direct.text.trim().chars().count();
                if length >= self.config.min_direct_text_len {
                    return Ok((direct.text, direct.pages, ExtractionMethod::Direct));
                }

                tracing::info!(
                    length,
                    threshold = self.config.min_direct_text_len,
                    "Direct text too short, running OCR"
                );
                let ocr_text = self.ocr_pdf(bytes).map_err(|e| ExtractError::ExtractionFailure {
                    direct: format!("embedded text layer too short ({} characters)", length),
                    ocr: e.to_string(),
                })?;
                let pages = if direct.pages > 0 { direct.pages } else { ocr_text.1 };
                Ok((ocr_text.0, pages, ExtractionMethod::Ocr))
            }
            Err(direct_err) => {
                tracing::warn!(error = %direct_err, "Direct PDF extraction failed, falling back to OCR");
                let (text, pages) =
                    self.ocr_pdf(bytes)
                        .map_err(|ocr_err| ExtractError::ExtractionFailure {
                            direct: direct_err.to_string(),
                            ocr: ocr_err.to_string(),
                        })?;
                Ok((text, pages, ExtractionMethod::OcrFallback))
            }
        }
    }

    fn ocr_pdf(&self, bytes: &[u8]) -> Result<(String, u32), OcrError> {
        let page_texts = self.ocr.recognize_pdf(bytes)?;
        if page_texts.iter().all(|p| p.trim().is_empty()) {
            return Err(OcrError::NoText);
        }

        let mut text = String::new();
        for (idx, page_text) in page_texts.iter().enumerate() {
            text.push_str(&pdf::page_marker(idx + 1));
            text.push_str(page_text);
            text.push('\n');
        }
        Ok((text, page_texts.len() as u32))
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}
