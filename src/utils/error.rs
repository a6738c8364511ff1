use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to read input file '{path}': {source}")]
    InputIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{path}' is not valid JSON: {source}")]
    InputParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected input shape in '{path}': {reason}")]
    InputShape { path: String, reason: String },

    #[error("Failed to write output file '{path}': {source}")]
    OutputIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::InputIo { .. }
            | ConvertError::InputParse { .. }
            | ConvertError::InputShape { .. } => ErrorCategory::Input,
            ConvertError::OutputIo { .. } | ConvertError::CsvError(_) => ErrorCategory::Output,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 輸入資料壞掉屬於使用者可以修的問題
            ConvertError::InputParse { .. } | ConvertError::InputShape { .. } => {
                ErrorSeverity::Medium
            }
            ConvertError::InputIo { .. } => ErrorSeverity::High,
            ConvertError::OutputIo { .. } | ConvertError::CsvError(_) => ErrorSeverity::High,
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::InputIo { path, .. } => {
                format!("Could not read the input file '{}'", path)
            }
            ConvertError::InputParse { path, .. } => {
                format!("The input file '{}' does not contain valid JSON", path)
            }
            ConvertError::InputShape { path, reason } => {
                format!("The input file '{}' has an unexpected shape: {}", path, reason)
            }
            ConvertError::OutputIo { path, .. } => {
                format!("Could not write the output file '{}'", path)
            }
            ConvertError::CsvError(_) => "Failed while producing the CSV output".to_string(),
            ConvertError::ConfigError { message } => {
                format!("Configuration problem: {}", message)
            }
            ConvertError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' is not valid for {}", value, field)
            }
            ConvertError::MissingConfigError { field } => {
                format!("Configuration is missing the required field {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ConvertError::InputIo { .. } => {
                "Check that the input path exists and is readable".to_string()
            }
            ConvertError::InputParse { .. } => {
                "Validate the file with a JSON linter before converting".to_string()
            }
            ConvertError::InputShape { .. } => {
                "The input must be a JSON array of objects".to_string()
            }
            ConvertError::OutputIo { .. } => {
                "Check that the output directory exists and is writable".to_string()
            }
            ConvertError::CsvError(_) => {
                "Re-run with --verbose to see which record failed".to_string()
            }
            ConvertError::ConfigError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::MissingConfigError { .. } => {
                "Fix the configuration value and try again".to_string()
            }
        }
    }
}
