//! Configuration structures for the slip understanding pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the slipscan pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlipscanConfig {
    /// Text-extraction gateway configuration.
    pub gateway: GatewayConfig,

    /// Parser configuration.
    pub parser: ParserConfig,
}

impl Default for SlipscanConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            parser: ParserConfig::default(),
        }
    }
}

/// Configuration for the external recognition engine adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Recognition binary to invoke.
    pub binary: PathBuf,

    /// Language packs passed to the engine.
    pub languages: String,

    /// Extra engine arguments, appended verbatim.
    pub extra_args: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("tesseract"),
            languages: "eng+hun".to_string(),
            extra_args: Vec::new(),
        }
    }
}

/// Parser tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Smallest odds accepted as a real price; anything at or below is
    /// treated as absent.
    pub min_odds: Decimal,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_odds: Decimal::new(101, 2),
        }
    }
}

impl SlipscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = SlipscanConfig::default();
        assert_eq!(config.gateway.binary, PathBuf::from("tesseract"));
        assert_eq!(config.gateway.languages, "eng+hun");
        assert_eq!(config.parser.min_odds, Decimal::new(101, 2));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: SlipscanConfig =
            serde_json::from_str(r#"{"gateway": {"languages": "eng"}}"#).unwrap();
        assert_eq!(config.gateway.languages, "eng");
        assert_eq!(config.gateway.binary, PathBuf::from("tesseract"));
        assert_eq!(config.parser.min_odds, Decimal::new(101, 2));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slipscan.json");

        let mut config = SlipscanConfig::default();
        config.gateway.languages = "hun".to_string();
        config.save(&path).unwrap();

        let loaded = SlipscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.gateway.languages, "hun");
    }
}
