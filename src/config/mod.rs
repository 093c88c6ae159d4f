#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{CourseMapError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_CATALOG_PATH: &str = "courses.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = CourseMapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(CourseMapError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Allowed values: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

/// 合併命令列與 TOML 檔之後的最終設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub catalog_path: String,
    pub initial_selection: Option<String>,
    pub selections: Vec<String>,
    pub read_stdin: bool,
    pub format: OutputFormat,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: DEFAULT_CATALOG_PATH.to_string(),
            initial_selection: None,
            selections: Vec::new(),
            read_stdin: false,
            format: OutputFormat::default(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("catalog.path", &self.catalog_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" Text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.catalog_path, DEFAULT_CATALOG_PATH);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.validate().is_ok());
    }
}
