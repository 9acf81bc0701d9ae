use crate::ParseError;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Container formats the extractor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolve a format from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self, ParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = ParseError;

    /// Accepts `pdf`, `docx` and `doc`, with or without a leading dot
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().trim_start_matches('.').to_lowercase();
        match tag.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" | "doc" => Ok(DocumentFormat::Docx),
            _ => Err(ParseError::new("document format", s)),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A document as received from the caller. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct RawDocument {
    bytes: Vec<u8>,
    format: DocumentFormat,
}

impl RawDocument {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}

/// How the text of a document was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMethod {
    /// Embedded text layer or document XML
    Direct,
    /// Direct text was too short, pages were rasterized and recognized
    Ocr,
    /// Direct extraction failed outright, OCR succeeded
    OcrFallback,
}

impl ExtractionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMethod::Direct => "direct",
            ExtractionMethod::Ocr => "ocr",
            ExtractionMethod::OcrFallback => "ocr_fallback",
        }
    }
}

impl fmt::Display for ExtractionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate clause span inside the extracted text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    /// Detected heading, or a synthetic `Paragraph N` label
    pub title: String,
    pub text: String,
    /// Byte offset of the span in the full text
    pub position: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ExtractedText {
    pub text: String,
    pub pages: u32,
    pub extraction_method: ExtractionMethod,
    pub sections: Vec<Section>,
}

impl ExtractedText {
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
