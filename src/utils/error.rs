use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseMapError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Catalog format error: {message}")]
    CatalogFormatError { message: String },

    #[error("Course catalog has already been loaded")]
    CatalogAlreadyLoaded,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CourseMapError {
    /// 是否屬於配置類錯誤 (決定 CLI 的退出碼)
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CourseMapError::ConfigError { .. }
                | CourseMapError::ConfigValidationError { .. }
                | CourseMapError::InvalidConfigValueError { .. }
        )
    }

    /// CLI 退出碼：配置錯誤 1，目錄載入錯誤 3
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            3
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CourseMapError::IoError(e) => format!("Could not read input: {}", e),
            CourseMapError::SerializationError(e) => {
                format!("Course data is not valid JSON: {}", e)
            }
            CourseMapError::CatalogFormatError { message } => {
                format!("Course catalog has an unexpected shape: {}", message)
            }
            CourseMapError::CatalogAlreadyLoaded => {
                "The course catalog can only be loaded once".to_string()
            }
            CourseMapError::ConfigError { message } => format!("Configuration problem: {}", message),
            CourseMapError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            CourseMapError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CourseMapError::IoError(_) => "Check that the catalog path exists and is readable",
            CourseMapError::SerializationError(_) | CourseMapError::CatalogFormatError { .. } => {
                "Regenerate the catalog file; it must be a JSON object keyed by course id"
            }
            CourseMapError::CatalogAlreadyLoaded => {
                "Reuse the installed catalog instead of loading it again"
            }
            CourseMapError::ConfigError { .. }
            | CourseMapError::ConfigValidationError { .. }
            | CourseMapError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseMapError>;
