// ⚙️ Codec Configuration - constants as data
//
// Defaults reproduce the references the institution already issues. A JSON
// file can override them for another campus (institution code) or to turn off
// period inference.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::{ADVISORY_CONCEPTS, BASE_YEAR, INSTITUTION_CODE, SPACER_DIGIT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Institution code placed after the plant year
    pub institution_code: u32,

    /// Year zero of the compressed date
    pub base_year: i32,

    /// Digit between the compressed amount and the checksum
    pub spacer_digit: char,

    /// Concept codes that are charged per subject instead of per period
    pub advisory_concepts: Vec<String>,

    /// Infer the period from the due date when the caller gives none
    pub infer_period: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            institution_code: INSTITUTION_CODE,
            base_year: BASE_YEAR,
            spacer_digit: SPACER_DIGIT,
            advisory_concepts: ADVISORY_CONCEPTS.iter().map(|c| c.to_string()).collect(),
            infer_period: true,
        }
    }
}

impl CodecConfig {
    /// Load configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: CodecConfig =
            serde_json::from_str(content).context("Failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_year <= 0 {
            bail!("base_year must be positive, got {}", self.base_year);
        }
        if !self.spacer_digit.is_ascii_digit() {
            bail!("spacer_digit must be a digit, got {:?}", self.spacer_digit);
        }
        for code in &self.advisory_concepts {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_digit()) {
                bail!("advisory concept {:?} is not a 2-digit code", code);
            }
        }
        Ok(())
    }

    pub fn is_advisory(&self, concept_code: &str) -> bool {
        self.advisory_concepts.iter().any(|c| c == concept_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let config = CodecConfig::default();
        assert_eq!(config.institution_code, 2716);
        assert_eq!(config.base_year, 2014);
        assert_eq!(config.spacer_digit, '0');
        assert!(config.is_advisory("04"));
        assert!(config.is_advisory("05"));
        assert!(!config.is_advisory("06"));
        assert!(config.infer_period);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = CodecConfig::from_json(r#"{ "institution_code": 1234 }"#).unwrap();
        assert_eq!(config.institution_code, 1234);
        assert_eq!(config.base_year, 2014);
        assert_eq!(config.advisory_concepts, vec!["04", "05"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(CodecConfig::from_json(r#"{ "spacer_digit": "x" }"#).is_err());
        assert!(CodecConfig::from_json(r#"{ "advisory_concepts": ["4"] }"#).is_err());
        assert!(CodecConfig::from_json(r#"{ "base_year": 0 }"#).is_err());
        assert!(CodecConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!(
            "cie-reference-config-{}.json",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, r#"{{ "infer_period": false }}"#).unwrap();

        let config = CodecConfig::from_file(&path).unwrap();
        assert!(!config.infer_period);
        assert_eq!(config.institution_code, 2716);

        fs::remove_file(&path).unwrap();
        assert!(CodecConfig::from_file(&path).is_err());
    }
}
