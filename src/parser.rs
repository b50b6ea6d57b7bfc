use crate::error::PlanError;
use crate::options::RawOptions;
use anyhow::{Context, Result};
use std::path::Path;

/// Options parser that handles JSON option records
pub struct OptionsParser;

impl OptionsParser {
    /// Parse a JSON options file
    pub fn parse_json(path: &Path) -> Result<RawOptions> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file: {}", path.display()))?;

        let options = Self::parse_str(&content)
            .with_context(|| format!("Failed to parse JSON options: {}", path.display()))?;

        Ok(options)
    }

    /// Parse an options record from a JSON string. A record that is not a
    /// JSON object, or whose fields have the wrong types, is invalid input.
    pub fn parse_str(json: &str) -> std::result::Result<RawOptions, PlanError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| PlanError::InvalidInput(format!("malformed options record: {}", e)))?;

        if !value.is_object() {
            return Err(PlanError::InvalidInput(
                "options record must be a JSON object".to_string(),
            ));
        }

        serde_json::from_value(value)
            .map_err(|e| PlanError::InvalidInput(format!("malformed options record: {}", e)))
    }
}
