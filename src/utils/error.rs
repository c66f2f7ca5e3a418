use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },
}

impl GreeterError {
    /// 給終端使用者看的錯誤描述
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::IoError(e) => format!("Could not read or write: {}", e),
            GreeterError::SerializationError(e) => format!("Person JSON is malformed: {}", e),
            GreeterError::ConfigError { message } => format!("Configuration problem: {}", message),
            GreeterError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            GreeterError::InvalidConfigValueError { field, reason, .. } => {
                format!("Value for '{}' was rejected: {}", field, reason)
            }
            GreeterError::MissingFieldError { field } => {
                format!("A person needs both names, but '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GreeterError::IoError(_) => "Check that the file exists and that stdout is writable",
            GreeterError::SerializationError(_) => {
                "Pass an object such as {\"first_name\": \"Mike\", \"last_name\": \"B\"}"
            }
            GreeterError::ConfigError { .. } | GreeterError::ConfigValidationError { .. } => {
                "Check the TOML file against the [greeter] / [[people]] layout"
            }
            GreeterError::InvalidConfigValueError { .. } => "Correct the value and run again",
            GreeterError::MissingFieldError { .. } => {
                "Provide both --first-name and --last-name (or both keys in JSON/TOML)"
            }
        }
    }

    /// 程序結束碼：設定類錯誤為 1，I/O 錯誤為 3
    pub fn exit_code(&self) -> i32 {
        match self {
            GreeterError::IoError(_) => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
