use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{RomanError, Result};

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 3999;

/// One entry of the symbol table: a plain letter or a subtractive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub value: u32,
    pub numeral: &'static str,
}

/// How the decoder treats input that is not all uppercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Reject anything that is not uppercase.
    #[default]
    Strict,
    /// Upper-case the input before validating it.
    Fold,
}

impl FromStr for CaseMode {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(CaseMode::Strict),
            "fold" => Ok(CaseMode::Fold),
            other => Err(RomanError::ConfigError {
                field: "case_mode".to_string(),
                message: format!("Unsupported case mode '{}'. Valid modes: strict, fold", other),
            }),
        }
    }
}

/// A string known to be a well-formed Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RomanNumeral(String);

impl RomanNumeral {
    pub fn new(roman: &str) -> Result<Self> {
        crate::core::validator::validate(roman)?;
        Ok(Self(roman.to_string()))
    }

    pub fn from_value(decimal: u32) -> Result<Self> {
        crate::core::encoder::romanize(i64::from(decimal)).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn value(&self) -> u32 {
        crate::core::decoder::sum_symbols(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for RomanNumeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for RomanNumeral {
    type Error = RomanError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for RomanNumeral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// One input/output pair, as printed by the CLI in JSON mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}
