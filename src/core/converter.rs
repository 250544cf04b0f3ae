use crate::core::codec::build_codec;
use crate::core::encoder::whole_number;
use crate::core::symbols::symbols;
use crate::core::{ConfigProvider, RomanCodec};
use crate::domain::model::Conversion;
use crate::utils::error::{RomanError, Result};

/// Runs a codec over a batch of textual inputs, as the CLI receives them.
pub struct Converter {
    codec: Box<dyn RomanCodec>,
}

impl Converter {
    pub fn new(codec: Box<dyn RomanCodec>) -> Self {
        Self { codec }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(build_codec(config))
    }

    /// Stops at the first input that cannot be converted.
    pub fn romanize_all(&self, inputs: &[String]) -> Result<Vec<Conversion>> {
        tracing::debug!("Romanizing {} values", inputs.len());
        inputs
            .iter()
            .map(|input| -> Result<Conversion> {
                let decimal = parse_decimal(input)?;
                Ok(Conversion {
                    input: input.clone(),
                    output: self.codec.romanize(decimal)?,
                })
            })
            .collect()
    }

    /// Stops at the first input that cannot be converted.
    pub fn deromanize_all(&self, inputs: &[String]) -> Result<Vec<Conversion>> {
        tracing::debug!("Deromanizing {} numerals", inputs.len());
        inputs
            .iter()
            .map(|input| -> Result<Conversion> {
                Ok(Conversion {
                    input: input.clone(),
                    output: self.codec.deromanize(input)?.to_string(),
                })
            })
            .collect()
    }

    /// Reports every input as `valid` or `invalid`; never fails.
    pub fn validate_all(&self, inputs: &[String]) -> Vec<Conversion> {
        inputs
            .iter()
            .map(|input| {
                let verdict = match self.codec.deromanize(input) {
                    Ok(_) => "valid",
                    Err(_) => "invalid",
                };
                Conversion {
                    input: input.clone(),
                    output: verdict.to_string(),
                }
            })
            .collect()
    }
}

/// Reads a decimal argument. Integers pass straight through; other numeric
/// text such as `1.5`, `NaN` or `inf` goes through the float rules.
pub fn parse_decimal(text: &str) -> Result<i64> {
    let text = text.trim();
    if let Ok(decimal) = text.parse::<i64>() {
        return Ok(decimal);
    }
    match text.parse::<f64>() {
        Ok(value) => whole_number(value),
        Err(_) => Err(RomanError::InvalidInput),
    }
}

pub fn table_rows() -> Vec<Conversion> {
    symbols()
        .iter()
        .map(|symbol| Conversion {
            input: symbol.numeral.to_string(),
            output: symbol.value.to_string(),
        })
        .collect()
}
