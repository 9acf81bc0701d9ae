//! Analyzer configuration
//!
//! Settings come from a TOML file, with environment variables layered on
//! top. Every field has a default, so an empty file is a valid config.

use anyhow::{anyhow, Context};
use clause_engine::ClauseClassifierConfig;
use document_extract::ExtractorConfig;
use serde::{Deserialize, Serialize};
use shared_types::StartupType;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_MODEL_DIR: &str = "AGREEMENT_MODEL_DIR";
pub const ENV_OCR_DPI: &str = "AGREEMENT_OCR_DPI";
pub const ENV_OCR_LANG: &str = "AGREEMENT_OCR_LANG";
pub const ENV_STARTUP_TYPE: &str = "AGREEMENT_STARTUP_TYPE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Directory holding `risk_classifier.json`
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
    /// Industry assumed when the caller does not name one
    #[serde(default)]
    pub default_startup_type: StartupType,
    #[serde(flatten)]
    pub extraction: ExtractorConfig,
    #[serde(flatten)]
    pub clauses: ClauseClassifierConfig,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("./trained_models")
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_dir: default_model_dir(),
            default_startup_type: StartupType::default(),
            extraction: ExtractorConfig::default(),
            clauses: ClauseClassifierConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use agreement_analyzer::AnalyzerConfig;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = AnalyzerConfig::from_str(r#"
    ///     model_dir = "/var/lib/analyzer/models"
    ///     default_startup_type = "fintech"
    ///
    ///     [ocr]
    ///     dpi = 200
    /// "#)?;
    /// assert_eq!(config.extraction.ocr.dpi, 200);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> anyhow::Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Apply `AGREEMENT_*` environment variables on top of this config
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_MODEL_DIR) {
            self.model_dir = PathBuf::from(dir);
        }
        if let Some(dpi) = lookup(ENV_OCR_DPI) {
            self.extraction.ocr.dpi = dpi
                .trim()
                .parse()
                .map_err(|_| anyhow!("{} must be a positive integer, got {:?}", ENV_OCR_DPI, dpi))?;
        }
        if let Some(language) = lookup(ENV_OCR_LANG) {
            self.extraction.ocr.language = language;
        }
        if let Some(startup_type) = lookup(ENV_STARTUP_TYPE) {
            self.default_startup_type = StartupType::from(startup_type);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.model_dir, PathBuf::from("./trained_models"));
        assert_eq!(config.extraction.min_direct_text_len, 100);
        assert_eq!(config.extraction.ocr.dpi, 300);
        assert_eq!(config.extraction.ocr.language, "eng");
        assert_eq!(config.clauses.entity_char_limit, 1000);
        assert_eq!(config.clauses.preview_len, 500);
        assert_eq!(config.default_startup_type, StartupType::Saas);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AnalyzerConfig::from_str("").unwrap();
        assert_eq!(config.model_dir, PathBuf::from("./trained_models"));
        assert_eq!(config.clauses.preview_len, 500);
    }

    #[test]
    fn test_parse_toml() {
        let config = AnalyzerConfig::from_str(
            r#"
            model_dir = "models"
            min_direct_text_len = 250
            preview_len = 200
            default_startup_type = "healthtech"

            [ocr]
            language = "deu"
            "#,
        )
        .unwrap();

        assert_eq!(config.model_dir, PathBuf::from("models"));
        assert_eq!(config.extraction.min_direct_text_len, 250);
        assert_eq!(config.extraction.ocr.language, "deu");
        assert_eq!(config.extraction.ocr.dpi, 300);
        assert_eq!(config.clauses.preview_len, 200);
        assert_eq!(config.clauses.entity_char_limit, 1000);
        assert_eq!(config.default_startup_type, StartupType::Healthtech);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(AnalyzerConfig::from_str("model_dir = [").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AnalyzerConfig::from_file("/nonexistent/analyzer.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_MODEL_DIR, "/models"),
            (ENV_OCR_DPI, "150"),
            (ENV_STARTUP_TYPE, "fintech"),
        ]
        .into_iter()
        .collect();
        let config = AnalyzerConfig::default()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.model_dir, PathBuf::from("/models"));
        assert_eq!(config.extraction.ocr.dpi, 150);
        assert_eq!(config.extraction.ocr.language, "eng");
        assert_eq!(config.default_startup_type, StartupType::Fintech);
    }

    #[test]
    fn test_bad_dpi_override() {
        let result = AnalyzerConfig::default().with_overrides(|key| {
            (key == ENV_OCR_DPI).then(|| "high".to_string())
        });
        assert!(result.is_err());
    }
}
