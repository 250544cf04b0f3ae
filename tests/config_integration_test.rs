use anyhow::Result;
use romans::utils::validation::Validate;
use romans::{CaseMode, ConfigProvider, Converter, RomanError, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_strict_config_rejects_lowercase() -> Result<()> {
    let file = write_config(
        r#"
[conversion]
case_mode = "strict"
"#,
    )?;
    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    let converter = Converter::from_config(&config);
    let err = converter.deromanize_all(&strings(&["mcmxciv"])).unwrap_err();
    assert!(matches!(err, RomanError::InvalidFormat));
    Ok(())
}

#[test]
fn test_folding_memoized_config() -> Result<()> {
    let file = write_config(
        r#"
[conversion]
case_mode = "fold"
memoize = true

[logging]
level = "warn"
"#,
    )?;
    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;
    assert_eq!(config.case_mode(), CaseMode::Fold);
    assert!(config.memoize());

    let converter = Converter::from_config(&config);
    let decoded = converter.deromanize_all(&strings(&["mcmxciv", "CdXliV"]))?;
    assert_eq!(decoded[0].output, "1994");
    assert_eq!(decoded[1].output, "444");

    let encoded = converter.romanize_all(&strings(&["3999"]))?;
    assert_eq!(encoded[0].output, "MMMCMXCIX");
    Ok(())
}

#[test]
fn test_invalid_log_level_fails_validation() -> Result<()> {
    let file = write_config("[logging]\nlevel = \"chatty\"\n")?;
    let config = TomlConfig::from_file(file.path())?;

    let err = config.validate().unwrap_err();
    assert!(matches!(err, RomanError::ConfigError { ref field, .. } if field == "logging.level"));
    Ok(())
}

#[test]
fn test_malformed_toml_is_config_error() -> Result<()> {
    let file = write_config("[conversion\nmemoize = yes")?;
    let err = TomlConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, RomanError::ConfigError { .. }));
    Ok(())
}

#[test]
fn test_conversions_serialize_as_json() -> Result<()> {
    let converter = Converter::from_config(&TomlConfig::default());
    let conversions = converter.romanize_all(&strings(&["1994", "2023"]))?;

    let json = serde_json::to_value(&conversions)?;
    assert_eq!(
        json,
        serde_json::json!([
            {"input": "1994", "output": "MCMXCIV"},
            {"input": "2023", "output": "MMXXIII"}
        ])
    );
    Ok(())
}
