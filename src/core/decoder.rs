use crate::core::symbols::value_of;
use crate::core::validator::validate;
use crate::domain::model::CaseMode;
use crate::utils::error::Result;

/// Reads a Roman numeral. Lowercase input is rejected.
pub fn deromanize(roman: &str) -> Result<u32> {
    validate(roman)?;
    Ok(sum_symbols(roman))
}

pub fn deromanize_with(roman: &str, case_mode: CaseMode) -> Result<u32> {
    match case_mode {
        CaseMode::Strict => deromanize(roman),
        CaseMode::Fold => deromanize(&roman.to_ascii_uppercase()),
    }
}

/// Right-to-left scan: a symbol smaller than the one after it is subtracted.
/// Callers must have validated `roman` already.
pub(crate) fn sum_symbols(roman: &str) -> u32 {
    let mut total = 0;
    let mut previous = 0;
    for current in roman.chars().rev().filter_map(value_of) {
        if current < previous {
            total -= current;
        } else {
            total += current;
        }
        previous = current;
    }
    total
}
