use crate::utils::error::{CourseMapError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub catalog: CatalogConfig,
    pub selection: Option<SelectionConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub initial: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CourseMapError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CourseMapError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COURSE_DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CourseMapError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn catalog_path(&self) -> &str {
        &self.catalog.path
    }

    pub fn initial_selection(&self) -> Option<&str> {
        self.selection.as_ref().and_then(|s| s.initial.as_deref())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.format.as_deref())
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_path("catalog.path", &self.catalog.path)?;

        // [selection] 有寫 initial 就不能是空白
        if let Some(initial) = self.initial_selection() {
            crate::utils::validation::validate_non_empty_string("selection.initial", initial)?;
        }

        if let Some(format) = self.output_format() {
            crate::utils::validation::validate_one_of(
                "output.format",
                format,
                crate::config::OutputFormat::NAMES,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
path = "./data/courses.json"

[selection]
initial = "CSC225"

[output]
format = "json"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.catalog_path(), "./data/courses.json");
        assert_eq!(config.initial_selection(), Some("CSC225"));
        assert_eq!(config.output_format(), Some("json"));
        assert!(config.verbose());
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_optional_sections_default() {
        let config = TomlConfig::from_toml_str("[catalog]\npath = \"courses.json\"\n").unwrap();
        assert_eq!(config.initial_selection(), None);
        assert_eq!(config.output_format(), None);
        assert!(!config.verbose());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COURSE_MAP_TEST_DATA_DIR", "/srv/course-map");

        let toml_content = r#"
[catalog]
path = "${COURSE_MAP_TEST_DATA_DIR}/courses.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog_path(), "/srv/course-map/courses.json");

        std::env::remove_var("COURSE_MAP_TEST_DATA_DIR");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config =
            TomlConfig::from_toml_str("[catalog]\npath = \"${COURSE_MAP_SURELY_UNSET_VAR}\"\n")
                .unwrap();
        assert_eq!(config.catalog_path(), "${COURSE_MAP_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[catalog]
path = "courses.json"

[output]
format = "yaml"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[catalog]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_initial_selection_is_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[catalog]
path = "courses.json"

[selection]
initial = "   "
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CourseMapError::InvalidConfigValueError { ref field, .. } if field == "selection.initial"
        ));

        let config =
            TomlConfig::from_toml_str("[catalog]\npath = \"courses.json\"\n\n[selection]\n")
                .unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_catalog_section_fails_to_parse() {
        let err = TomlConfig::from_toml_str("[output]\nformat = \"text\"\n").unwrap_err();
        assert!(matches!(err, CourseMapError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[catalog]\npath = \"from-file.json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.catalog_path(), "from-file.json");
    }
}
