//! Optical character recognition for scanned PDFs
//!
//! The default engine drives the Poppler `pdftoppm` rasterizer and the
//! `tesseract` CLI. Any other engine can be plugged in through [`OcrEngine`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("Rasterizer produced no pages")]
    NoPages,

    #[error("OCR recognized no text")]
    NoText,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns a PDF into per-page text by looking at the rendered pages
pub trait OcrEngine: Send + Sync {
    /// Recognize every page, in page order
    fn recognize_pdf(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, OcrError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Rasterization resolution
    #[serde(default = "default_dpi")]
    pub dpi: u32,
    /// Tesseract language pack
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_pdftoppm")]
    pub pdftoppm_bin: PathBuf,
    #[serde(default = "default_tesseract")]
    pub tesseract_bin: PathBuf,
}

fn default_dpi() -> u32 {
    300
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_pdftoppm() -> PathBuf {
    PathBuf::from("pdftoppm")
}

fn default_tesseract() -> PathBuf {
    PathBuf::from("tesseract")
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            dpi: default_dpi(),
            language: default_language(),
            pdftoppm_bin: default_pdftoppm(),
            tesseract_bin: default_tesseract(),
        }
    }
}

/// `pdftoppm` + `tesseract` subprocess engine
pub struct TesseractOcr {
    config: OcrConfig,
}

impl TesseractOcr {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }

    fn rasterize(&self, pdf_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>, OcrError> {
        let prefix = out_dir.join("page");
        let output = Command::new(&self.config.pdftoppm_bin)
            .arg("-r")
            .arg(self.config.dpi.to_string())
            .arg("-png")
            .arg(pdf_path)
            .arg(&prefix)
            .output()?;
        check_status("pdftoppm", &output)?;

        // pdftoppm zero-pads page numbers to the width of the page count
        let mut pages: Vec<(u32, PathBuf)> = std::fs::read_dir(out_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter_map(|path| {
                let stem = path.file_stem()?.to_str()?;
                let is_png = path.extension().map(|e| e == "png").unwrap_or(false);
                let number = stem.strip_prefix("page-")?.parse().ok()?;
                is_png.then_some((number, path))
            })
            .collect();
        pages.sort_by_key(|(number, _)| *number);

        if pages.is_empty() {
            return Err(OcrError::NoPages);
        }
        Ok(pages.into_iter().map(|(_, path)| path).collect())
    }

    fn recognize_image(&self, image: &Path) -> Result<String, OcrError> {
        let output = Command::new(&self.config.tesseract_bin)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.language)
            .output()?;
        check_status("tesseract", &output)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl OcrEngine for TesseractOcr {
    fn recognize_pdf(&self, pdf_bytes: &[u8]) -> Result<Vec<String>, OcrError> {
        let scratch = tempfile::tempdir()?;
        let pdf_path = scratch.path().join("input.pdf");
        std::fs::write(&pdf_path, pdf_bytes)?;

        let images = self.rasterize(&pdf_path, scratch.path())?;
        tracing::debug!(pages = images.len(), dpi = self.config.dpi, "Rasterized PDF for OCR");

        images
            .iter()
            .map(|image| self.recognize_image(image))
            .collect()
    }
}

fn check_status(tool: &str, output: &std::process::Output) -> Result<(), OcrError> {
    if output.status.success() {
        return Ok(());
    }
    Err(OcrError::ToolFailed {
        tool: tool.to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
