use crate::core::ConfigProvider;
use crate::domain::model::CaseMode;
use crate::utils::error::{RomanError, Result};
use crate::utils::validation::{validate_log_level, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern must compile"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionConfig {
    #[serde(default)]
    pub case_mode: CaseMode,
    #[serde(default)]
    pub memoize: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, expanding `${VAR}` first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RomanError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json
    }
}

impl ConfigProvider for TomlConfig {
    fn case_mode(&self) -> CaseMode {
        self.conversion.case_mode
    }

    fn memoize(&self) -> bool {
        self.conversion.memoize
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_log_level("logging.level", &self.logging.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[conversion]
case_mode = "fold"
memoize = true

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.case_mode(), CaseMode::Fold);
        assert!(config.memoize());
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.case_mode(), CaseMode::Strict);
        assert!(!config.memoize());
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMANS_TEST_CASE_MODE", "fold");

        let toml_content = r#"
[conversion]
case_mode = "${ROMANS_TEST_CASE_MODE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.case_mode(), CaseMode::Fold);

        std::env::remove_var("ROMANS_TEST_CASE_MODE");
    }

    #[test]
    fn test_unknown_case_mode_is_a_parse_error() {
        let toml_content = r#"
[conversion]
case_mode = "upper"
"#;

        let err = TomlConfig::from_toml_str(toml_content).unwrap_err();
        assert!(matches!(err, RomanError::ConfigError { .. }));
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[logging]
level = "loud"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[conversion]\nmemoize = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.memoize());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/romans.toml").unwrap_err();
        assert!(matches!(err, RomanError::IoError(_)));
    }
}
