use crate::core::symbols::SYMBOL_TABLE;
use crate::domain::model::MAX_VALUE;
use crate::utils::error::{RomanError, Result};

/// Writes `decimal` as a Roman numeral by greedy emission over the symbol table.
pub fn romanize(decimal: i64) -> Result<String> {
    if decimal <= 0 {
        return Err(RomanError::InvalidInput);
    }
    if decimal > i64::from(MAX_VALUE) {
        return Err(RomanError::OutOfRange);
    }

    let mut remaining = decimal as u32;
    let mut roman = String::new();
    for symbol in &SYMBOL_TABLE {
        if remaining == 0 {
            break;
        }
        let count = remaining / symbol.value;
        roman.push_str(&symbol.numeral.repeat(count as usize));
        remaining %= symbol.value;
    }

    Ok(roman)
}

/// Same as [`romanize`] for values that may not be whole numbers.
pub fn romanize_f64(value: f64) -> Result<String> {
    romanize(whole_number(value)?)
}

/// Narrows a float to the integer the encoder takes.
///
/// NaN and fractional values are `InvalidInput`; anything at or above 4000,
/// including positive infinity, is `OutOfRange`.
pub fn whole_number(value: f64) -> Result<i64> {
    if value.is_nan() {
        return Err(RomanError::InvalidInput);
    }
    if value >= f64::from(MAX_VALUE + 1) {
        return Err(RomanError::OutOfRange);
    }
    if value <= 0.0 || value.fract() != 0.0 {
        return Err(RomanError::InvalidInput);
    }
    Ok(value as i64)
}
