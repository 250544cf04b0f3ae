use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("requires an unsigned integer")]
    InvalidInput,

    #[error("requires max value of less than 4000")]
    OutOfRange,

    #[error("requires valid roman numeral string")]
    InvalidFormat,

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::InvalidInput | RomanError::OutOfRange | RomanError::InvalidFormat => {
                ErrorCategory::Input
            }
            RomanError::ConfigError { .. } => ErrorCategory::Config,
            RomanError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::InvalidInput => {
                "The value is not a positive whole number".to_string()
            }
            RomanError::OutOfRange => {
                "The value is too large to write as a Roman numeral".to_string()
            }
            RomanError::InvalidFormat => "The text is not a valid Roman numeral".to_string(),
            RomanError::ConfigError { field, message } => {
                format!("Invalid configuration for '{}': {}", field, message)
            }
            RomanError::IoError(e) => format!("Could not read or write a file: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RomanError::InvalidInput | RomanError::OutOfRange => {
                "Use a whole number between 1 and 3999"
            }
            RomanError::InvalidFormat => {
                "Use uppercase I, V, X, L, C, D, M in canonical order (e.g. MCMXCIV), or pass --fold-case for lowercase input"
            }
            RomanError::ConfigError { .. } => "Check the configuration file and command-line flags",
            RomanError::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
